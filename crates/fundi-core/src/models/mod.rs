//! Wire payloads for the marketplace backend.
//!
//! These mirror the backend's JSON shapes. Fields that newer or older
//! backend versions omit carry serde defaults so a version skew degrades
//! gracefully instead of failing to parse.

mod assignment;
mod category;
mod contractor;
mod register;
mod request;
mod review;
mod user;
mod wallet;

pub use assignment::{Assignment, AssignmentStatus};
pub use category::ServiceCategory;
pub use contractor::{ContractorProfile, Skill, VerificationStatus};
pub use register::{Document, NewClient, NewContractor};
pub use request::{NewServiceRequest, RequestStatus, ServiceRequest, Urgency};
pub use review::{NewReview, Review};
pub use user::User;
pub use wallet::{MpesaAck, Transaction, TransactionStatus, TransactionType, WalletBalance};
