//! Mock backend tests for the authenticated client.
//!
//! These use wiremock to simulate the marketplace backend and exercise the
//! credential-attachment and refresh-and-retry protocol without network
//! access or real credentials.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use fundi_core::error::{AuthError, Error};
use fundi_core::{
    AccessToken, BaseUrl, Credentials, Identity, MemoryStore, RefreshToken, Role, Session,
    SessionStore,
};
use fundi_http::{ApiClient, RegistrationOutcome};

fn base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(server.uri()).unwrap()
}

fn identity() -> Identity {
    Identity {
        id: 7,
        role: Role::Client,
        display_name: "Amina W.".to_string(),
    }
}

fn session(access: &str, refresh: Option<&str>) -> Session {
    Session::new(
        AccessToken::new(access),
        refresh.map(RefreshToken::new),
        identity(),
    )
}

fn client_with(server: &MockServer, seed: Option<Session>) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(match seed {
        Some(session) => MemoryStore::with_session(session),
        None => MemoryStore::new(),
    });
    let client = ApiClient::new(base_url(server), store.clone());
    (client, store)
}

fn no_authorization_header(request: &Request) -> bool {
    !request.headers.contains_key("authorization")
}

fn user_body() -> serde_json::Value {
    json!({
        "id": 7,
        "email": "amina@example.com",
        "full_name": "Amina W.",
        "phone": "+254700000000",
        "is_client": true,
        "is_contractor": false,
        "is_active": true
    })
}

// ============================================================================
// Login and registration
// ============================================================================

#[tokio::test]
async fn login_stores_the_full_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .and(body_json(json!({
            "email": "amina@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "T1",
            "refresh": "R1",
            "user": user_body()
        })))
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, None);
    let user = client
        .login(&Credentials::new("amina@example.com", "secret123"))
        .await
        .unwrap();

    assert_eq!(user.role(), Role::Client);

    let stored = store.load().await.unwrap().unwrap();
    assert_eq!(stored.access_token().as_str(), "T1");
    assert_eq!(stored.refresh_token().unwrap().as_str(), "R1");
    assert_eq!(stored.identity().display_name, "Amina W.");
}

#[tokio::test]
async fn failed_login_is_an_api_error_and_keeps_the_existing_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, Some(session("T1", Some("R1"))));
    let err = client
        .login(&Credentials::new("amina@example.com", "wrong"))
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => assert_eq!(api.message, "Invalid email or password"),
        other => panic!("expected ApiError, got {other:?}"),
    }
    // A bad re-login attempt must not tear down the stored session.
    assert!(store.load().await.unwrap().is_some());
}

#[tokio::test]
async fn registration_without_tokens_creates_no_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/client/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_body()))
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, None);
    let outcome = client
        .register_client(&fundi_core::models::NewClient {
            email: "amina@example.com".to_string(),
            password: "secret123".to_string(),
            full_name: "Amina W.".to_string(),
            phone: "+254700000000".to_string(),
            address: None,
            city: None,
        })
        .await
        .unwrap();

    assert!(matches!(outcome, RegistrationOutcome::Created(_)));
    assert_eq!(outcome.user().email, "amina@example.com");
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn registration_with_tokens_signs_the_account_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/client/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "access": "T1",
            "refresh": "R1",
            "user": user_body()
        })))
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, None);
    let outcome = client
        .register_client(&fundi_core::models::NewClient {
            email: "amina@example.com".to_string(),
            password: "secret123".to_string(),
            full_name: "Amina W.".to_string(),
            phone: "+254700000000".to_string(),
            address: None,
            city: None,
        })
        .await
        .unwrap();

    assert!(matches!(outcome, RegistrationOutcome::SignedIn { .. }));
    let stored = store.load().await.unwrap().unwrap();
    assert_eq!(stored.access_token().as_str(), "T1");
}

#[tokio::test]
async fn contractor_registration_uploads_a_multipart_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/register/contractor/"))
        .and(|request: &Request| {
            request
                .headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("multipart/form-data"))
        })
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "email": "juma@example.com",
            "full_name": "Juma K.",
            "is_contractor": true
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_with(&server, None);
    let outcome = client
        .register_contractor(&fundi_core::models::NewContractor {
            email: "juma@example.com".to_string(),
            password: "secret456".to_string(),
            full_name: "Juma K.".to_string(),
            phone: "+254711111111".to_string(),
            business_name: "Juma Electricals".to_string(),
            bio: "Licensed electrician".to_string(),
            years_of_experience: 5,
            hourly_rate: 1200.0,
            location: "Nairobi".to_string(),
            id_document: fundi_core::models::Document::new(
                "id.pdf",
                "application/pdf",
                vec![1, 2, 3],
            ),
            kra_pin_document: fundi_core::models::Document::new(
                "kra.pdf",
                "application/pdf",
                vec![4, 5, 6],
            ),
            work_permit_document: None,
        })
        .await
        .unwrap();

    assert_eq!(outcome.user().role(), Role::Contractor);
}

// ============================================================================
// Credential attachment
// ============================================================================

#[tokio::test]
async fn requests_carry_the_stored_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available_balance": 1200.5,
            "locked_balance": 300.0,
            "total_balance": 1500.5
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_with(&server, Some(session("T1", None)));
    let balance = client.wallet_balance().await.unwrap();

    assert_eq!(balance.available_balance, 1200.5);
    assert_eq!(balance.locked_balance, 300.0);
}

#[tokio::test]
async fn anonymous_requests_carry_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/categories/"))
        .and(no_authorization_header)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Plumbing", "description": "Pipes and drains"},
            {"id": 2, "name": "Electrical", "description": "Wiring"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_with(&server, None);
    let categories = client.categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Plumbing");
}

// ============================================================================
// Refresh-and-retry protocol
// ============================================================================

#[tokio::test]
async fn expired_credential_is_refreshed_and_the_request_retried_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/token/refresh/"))
        .and(body_json(json!({"refresh": "xyz"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "def"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .and(header("authorization", "Bearer def"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "available_balance": 500,
            "locked_balance": 0,
            "total_balance": 500
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, Some(session("abc", Some("xyz"))));
    let balance = client.wallet_balance().await.unwrap();

    assert_eq!(balance.available_balance, 500.0);
    assert_eq!(balance.total_balance, 500.0);

    // Only the credential rotated; refresh token and identity survive.
    let stored = store.load().await.unwrap().unwrap();
    assert_eq!(stored.access_token().as_str(), "def");
    assert_eq!(stored.refresh_token().unwrap().as_str(), "xyz");
    assert_eq!(stored.identity(), &identity());
}

#[tokio::test]
async fn a_second_401_after_refresh_is_terminal() {
    let server = MockServer::start().await;

    // The protected endpoint rejects both the original and the retried
    // credential; exactly two hits, never a third.
    Mock::given(method("GET"))
        .and(path("/contractors/me/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token invalid"
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "T2"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, Some(session("T1", Some("R1"))));
    let err = client.my_contractor_profile().await.unwrap_err();

    assert!(err.is_logged_out());
    assert!(matches!(err, Error::Auth(AuthError::LoggedOut { .. })));
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn hard_logout_without_a_refresh_token_issues_no_refresh_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "T2"})))
        .expect(0)
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, Some(session("T1", None)));
    let err = client.wallet_balance().await.unwrap_err();

    assert!(matches!(err, Error::Auth(AuthError::LoggedOut { .. })));
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn refresh_failure_clears_the_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/token/refresh/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Refresh token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, Some(session("T1", Some("R1"))));
    let err = client.wallet_balance().await.unwrap_err();

    assert!(err.is_logged_out());
    assert!(matches!(err, Error::Auth(AuthError::RefreshFailed(_))));
    assert!(store.load().await.unwrap().is_none());
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn business_errors_pass_the_backend_detail_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/withdraw/mpesa/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Insufficient balance"
        })))
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, Some(session("T1", Some("R1"))));
    let err = client
        .withdraw_mpesa(10_000.0, "+254700000000")
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 400);
            assert_eq!(api.message, "Insufficient balance");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
    // Business failures never touch the session.
    assert!(store.load().await.unwrap().is_some());
}

#[tokio::test]
async fn empty_error_bodies_get_a_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/balance/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (client, _store) = client_with(&server, Some(session("T1", None)));
    let err = client.wallet_balance().await.unwrap_err();

    match err {
        Error::Api(api) => {
            assert!(!api.message.trim().is_empty());
            assert!(api.message.contains("503"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_bodies_are_handled_gracefully() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/service-requests/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_with(&server, Some(session("T1", None)));
    let err = client.service_requests().await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("500"));
}

#[tokio::test]
async fn unreachable_backend_surfaces_a_transport_error() {
    // Nothing listens on the discard port.
    let base = BaseUrl::new("http://127.0.0.1:9").unwrap();
    let client = ApiClient::new(base, Arc::new(MemoryStore::new()));

    let err = client.categories().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(!err.is_logged_out());
}

// ============================================================================
// Envelope tolerance and remaining surfaces
// ============================================================================

#[tokio::test]
async fn paginated_list_bodies_are_unwrapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/transactions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 11,
                "transaction_type": "escrow_lock",
                "amount": 250.0,
                "status": "completed",
                "description": "Deposit for request #4",
                "created_at": "2026-08-01T09:30:00Z"
            }]
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_with(&server, Some(session("T1", None)));
    let transactions = client.transactions().await.unwrap();

    assert_eq!(transactions.len(), 1);
    assert_eq!(
        transactions[0].transaction_type,
        fundi_core::models::TransactionType::EscrowLock
    );
}

#[tokio::test]
async fn availability_update_sends_a_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/contractors/update_availability/"))
        .and(header("authorization", "Bearer T1"))
        .and(body_json(json!({"is_available": false})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (client, _store) = client_with(&server, Some(session("T1", None)));
    client.update_availability(false).await.unwrap();
}

#[tokio::test]
async fn logout_clears_the_session_even_when_the_backend_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, Some(session("T1", Some("R1"))));
    client.logout().await.unwrap();

    assert!(store.load().await.unwrap().is_none());
}
