//! `HttpWishTransport` against a local actix stand-in for the backend.

use std::io;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::web::{self, Bytes};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer};
use chrono::{TimeZone, Utc};
use futures_util::{StreamExt, stream};
use reqwest::Url;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use wishes_client::{HttpWishTransport, TransportError, WishPayload, WishTransport};

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    content_type: Option<String>,
    body: Value,
}

#[derive(Debug, Clone, Copy)]
enum Reply {
    Body(&'static str),
    /// Send the head and a partial body, then abort the stream.
    Broken,
}

struct BackendStub {
    status: StatusCode,
    reply: Reply,
    seen: Mutex<Vec<Recorded>>,
}

impl BackendStub {
    fn new(status: StatusCode, reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            status,
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<Recorded> {
        self.seen.lock().expect("stub lock").clone()
    }
}

async fn record(
    req: HttpRequest,
    body: web::Json<Value>,
    stub: web::Data<BackendStub>,
) -> HttpResponse {
    stub.seen.lock().expect("stub lock").push(Recorded {
        path: req.path().to_owned(),
        content_type: req
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body: body.into_inner(),
    });
    let mut response = HttpResponse::build(stub.status);
    response.content_type("application/json");
    match stub.reply {
        Reply::Body(text) => response.body(text),
        Reply::Broken => {
            let chunks = stream::iter([
                Ok(Bytes::from_static(br#"{"code":"#)),
                Err(io::Error::other("backend dropped mid-body")),
            ])
            .then(|chunk| async move {
                actix_web::rt::time::sleep(Duration::from_millis(50)).await;
                chunk
            });
            response.streaming(chunks)
        }
    }
}

fn spawn_backend(stub: Arc<BackendStub>) -> (Url, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    let data = web::Data::from(stub);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .default_service(web::post().to(record))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen on stub listener")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    let base = Url::parse(&format!("http://{addr}/")).expect("base url");
    (base, handle)
}

fn transport(base: &Url) -> HttpWishTransport {
    HttpWishTransport::for_site(base, Duration::from_secs(5)).expect("transport")
}

#[fixture]
fn payload() -> WishPayload {
    WishPayload {
        name: "Asha".to_owned(),
        message: "Congratulations!".to_owned(),
        email: None,
        timestamp: Utc
            .with_ymd_and_hms(2025, 5, 20, 9, 15, 0)
            .single()
            .expect("valid fixture timestamp"),
    }
}

#[rstest]
#[actix_web::test]
async fn success_posts_json_to_the_wishes_path(payload: WishPayload) {
    let stub = BackendStub::new(StatusCode::OK, Reply::Body(r#"{"success":true}"#));
    let (base, handle) = spawn_backend(stub.clone());

    transport(&base).post_wish(&payload).await.expect("accepted");
    handle.stop(false).await;

    let seen = stub.seen();
    assert_eq!(seen.len(), 1);
    let request = seen.first().expect("one recorded request");
    assert_eq!(request.path, "/api/wishes");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.body,
        json!({
            "name": "Asha",
            "message": "Congratulations!",
            "timestamp": "2025-05-20T09:15:00.000Z",
        })
    );
}

#[rstest]
#[actix_web::test]
async fn non_success_status_is_a_failure(payload: WishPayload) {
    let body = r#"{"code":"internal_error","message":"Failed to save wish"}"#;
    let stub = BackendStub::new(StatusCode::INTERNAL_SERVER_ERROR, Reply::Body(body));
    let (base, handle) = spawn_backend(stub);

    let err = transport(&base)
        .post_wish(&payload)
        .await
        .expect_err("rejected");
    handle.stop(false).await;

    assert_eq!(
        err,
        TransportError::Status {
            status: 500,
            body: body.to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn unreadable_rejection_body_is_a_request_failure(payload: WishPayload) {
    let stub = BackendStub::new(StatusCode::INTERNAL_SERVER_ERROR, Reply::Broken);
    let (base, handle) = spawn_backend(stub);

    let err = transport(&base)
        .post_wish(&payload)
        .await
        .expect_err("body cut short");
    handle.stop(false).await;

    assert!(matches!(err, TransportError::Request { .. }), "{err:?}");
}

#[rstest]
#[actix_web::test]
async fn unreachable_backend_is_a_failure(payload: WishPayload) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let base = Url::parse(&format!("http://{addr}/")).expect("base url");

    let err = transport(&base)
        .post_wish(&payload)
        .await
        .expect_err("refused");
    assert!(matches!(err, TransportError::Request { .. }));
}
