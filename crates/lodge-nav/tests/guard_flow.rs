//! Guard evaluation against a live local backend.
//!
//! A `tiny_http` server plays the `/user/{id}` endpoint so the full chain
//! runs: guard → resolver → HTTP client (with its middleware) → role
//! intersection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use lodge_api::ApiClient;
use lodge_config::{ApiConfig, NavConfig};
use lodge_nav::{GuardVerdict, NavigationGuard, RoleResolver, RouteTable};
use lodge_session::{Session, SessionStore};
use pretty_assertions::assert_eq;
use rstest::rstest;

const LOGIN: &str = "/pages/auth/login";
const ACCESS_DENIED: &str = "/auth/access";

/// Serve `body` (status 200) for every request, counting hits.
fn spawn_user_endpoint(body: String) -> (String, Arc<AtomicUsize>) {
    spawn_with(move |_hits| (200, body.clone()))
}

/// Server with a handler that sees the running hit count.
fn spawn_with<F>(handler: F) -> (String, Arc<AtomicUsize>)
where
    F: Fn(usize) -> (u16, String) + Send + 'static,
{
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("test server port");
    let hits = Arc::new(AtomicUsize::new(0));

    let thread_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for request in server.incoming_requests() {
            let n = thread_hits.fetch_add(1, Ordering::SeqCst);
            let (status, body) = handler(n);
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("header"),
                );
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{port}"), hits)
}

fn guard_for(base_url: String, session: SessionStore) -> NavigationGuard {
    let config = ApiConfig {
        base_url,
        timeout_secs: 5,
    };
    let api = Arc::new(ApiClient::new(&config, session.clone()));
    NavigationGuard::new(
        &NavConfig::default(),
        session,
        RoleResolver::new(api),
        RouteTable::hotel_default(),
    )
}

fn logged_in_session(tmp: &tempfile::TempDir) -> SessionStore {
    let session = SessionStore::file_backed(tmp.path());
    session.store(&Session::new("tok_abc", "42")).expect("store");
    session
}

#[rstest]
#[case::front_desk_denied(r#"{"id":42,"role":"Front Desk"}"#, GuardVerdict::Redirect { target: ACCESS_DENIED.to_string() })]
#[case::system_admin_allowed(r#"{"id":42,"role":"System Admin"}"#, GuardVerdict::Allow)]
#[case::no_role_data_denied(r#"{"id":42,"name":"Dana"}"#, GuardVerdict::Redirect { target: ACCESS_DENIED.to_string() })]
#[tokio::test]
async fn accounts_panel_requires_system_admin(
    #[case] user_body: &str,
    #[case] expected: GuardVerdict,
) {
    let (base_url, _) = spawn_user_endpoint(user_body.to_string());
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let guard = guard_for(base_url, logged_in_session(&tmp));

    assert_eq!(guard.evaluate_path("/Accounts/AccountsPanel").await, expected);
}

#[tokio::test]
async fn additional_role_satisfies_intersection() {
    // Manager + Inventory against a route requiring Manager or Inventory.
    let (base_url, _) = spawn_user_endpoint(
        r#"{"id":42,"role":"Manager","additional_roles":["Inventory"]}"#.to_string(),
    );
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let guard = guard_for(base_url, logged_in_session(&tmp));

    assert_eq!(
        guard
            .evaluate_path("/Inventory/ManageInventory/ManageItems")
            .await,
        GuardVerdict::Allow
    );
}

#[tokio::test]
async fn unauthenticated_dashboard_redirects_without_role_fetch() {
    let (base_url, hits) = spawn_user_endpoint(r#"{"id":42,"role":"Manager"}"#.to_string());
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let guard = guard_for(base_url, SessionStore::file_backed(tmp.path()));

    assert_eq!(
        guard.evaluate_path("/Dashboard").await,
        GuardVerdict::Redirect {
            target: LOGIN.to_string()
        }
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0, "no role fetch expected");
}

#[tokio::test]
async fn backend_error_during_role_fetch_fails_closed_to_login() {
    let (base_url, _) = spawn_with(|_| (500, r#"{"error":"boom"}"#.to_string()));
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let guard = guard_for(base_url, logged_in_session(&tmp));

    assert_eq!(
        guard.evaluate_path("/Accounts/AccountsPanel").await,
        GuardVerdict::Redirect {
            target: LOGIN.to_string()
        }
    );
}

#[tokio::test]
async fn unauthorized_role_fetch_tears_down_session_and_redirects_to_login() {
    // The 401 goes through the client's teardown middleware: the session is
    // cleared, the resolver reports a fetch failure, and the guard fails
    // closed to login.
    let (base_url, _) = spawn_with(|_| (401, r#"{"error":"token expired"}"#.to_string()));
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let session = logged_in_session(&tmp);
    let guard = guard_for(base_url, session.clone());

    assert_eq!(
        guard.evaluate_path("/Accounts/AccountsPanel").await,
        GuardVerdict::Redirect {
            target: LOGIN.to_string()
        }
    );
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn session_cleared_mid_resolution_is_not_trusted() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let session = logged_in_session(&tmp);

    // Backend answers with a perfectly good role set, but the session is
    // torn down while the request is in flight.
    let handler_session = session.clone();
    let (base_url, _) = spawn_with(move |_| {
        handler_session.invalidate(401);
        (200, r#"{"id":42,"role":"System Admin"}"#.to_string())
    });
    let guard = guard_for(base_url, session);

    assert_eq!(
        guard.evaluate_path("/Accounts/AccountsPanel").await,
        GuardVerdict::Redirect {
            target: LOGIN.to_string()
        }
    );
}

#[tokio::test]
async fn open_route_never_touches_the_backend() {
    let (base_url, hits) = spawn_user_endpoint(r#"{"id":42,"role":"Manager"}"#.to_string());
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let guard = guard_for(base_url, logged_in_session(&tmp));

    assert_eq!(
        guard.evaluate_path("/pages/website/RoomCatalog").await,
        GuardVerdict::Allow
    );
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
