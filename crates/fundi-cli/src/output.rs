//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Turn a client error into something actionable on the terminal.
///
/// The hard-logout state gets a login hint; everything else keeps the
/// backend's own message.
pub fn friendly(err: fundi_core::Error) -> anyhow::Error {
    if err.is_logged_out() {
        anyhow::anyhow!("session expired; run `fundi auth login` to continue")
    } else {
        anyhow::Error::new(err)
    }
}
