//! Backend tests against a mock HTTP endpoint

use std::time::Duration;

use crossbeam_channel::unbounded;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::backend::run_backend;
use crate::protocol::{BackendAction, FormFields, FormKind, GuiEvent};
use crate::submission::is_success_body;

fn signup_fields() -> FormFields {
    FormFields {
        fullname: Some("Ada Guest".into()),
        email: "guest@example.com".into(),
        password: "secret1".into(),
    }
}

fn spawn_backend() -> (
    crossbeam_channel::Sender<BackendAction>,
    crossbeam_channel::Receiver<GuiEvent>,
    std::thread::JoinHandle<()>,
) {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let handle = std::thread::spawn(move || {
        run_backend(action_rx, event_tx);
    });
    (action_tx, event_rx, handle)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_posts_form_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup.php"))
        .and(body_string_contains("fullname=Ada+Guest"))
        .and(body_string_contains("email=guest%40example.com"))
        .and(body_string_contains("password=secret1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "Welcome to Saltmere Cove! Your account has been created successfully.",
        ))
        .mount(&server)
        .await;

    let (action_tx, event_rx, _handle) = spawn_backend();
    action_tx
        .send(BackendAction::Submit {
            kind: FormKind::SignUp,
            url: format!("{}/signup.php", server.uri()),
            fields: signup_fields(),
        })
        .unwrap();

    match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        GuiEvent::AuthResponse { kind, result } => {
            assert_eq!(kind, FormKind::SignUp);
            let body = result.expect("response body");
            assert!(is_success_body(&body));
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_body_is_returned_verbatim_regardless_of_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/signup.php"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Email already registered!"))
        .mount(&server)
        .await;

    let (action_tx, event_rx, _handle) = spawn_backend();
    action_tx
        .send(BackendAction::Submit {
            kind: FormKind::SignUp,
            url: format!("{}/signup.php", server.uri()),
            fields: signup_fields(),
        })
        .unwrap();

    match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        GuiEvent::AuthResponse { result, .. } => {
            // The body is authoritative, the 409 status is not an Err
            assert_eq!(result.unwrap(), "Email already registered!");
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_transport_failure_is_an_err() {
    // Grab a port nothing is listening on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let (action_tx, event_rx, _handle) = spawn_backend();
    action_tx
        .send(BackendAction::Submit {
            kind: FormKind::SignIn,
            url: format!("http://127.0.0.1:{}/signin.php", port),
            fields: signup_fields(),
        })
        .unwrap();

    match event_rx.recv_timeout(Duration::from_secs(15)).unwrap() {
        GuiEvent::AuthResponse { kind, result } => {
            assert_eq!(kind, FormKind::SignIn);
            let description = result.expect_err("transport error");
            assert!(!description.is_empty());
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[test]
fn test_backend_thread_exits_on_shutdown() {
    let (action_tx, _event_rx, handle) = spawn_backend();
    action_tx.send(BackendAction::Shutdown).unwrap();
    handle.join().expect("backend thread should exit cleanly");
}

#[test]
fn test_backend_thread_exits_when_channel_drops() {
    let (action_tx, _event_rx, handle) = spawn_backend();
    drop(action_tx);
    handle.join().expect("backend thread should exit cleanly");
}
