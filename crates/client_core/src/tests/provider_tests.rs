use super::*;
use axum::{http::StatusCode, routing::get, Json, Router};

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn talk(title: &str) -> Talk {
    Talk {
        title: title.into(),
        speakers: vec!["Alice Smith".into()],
        description: "About things.".into(),
        category: vec!["Rust".into()],
        duration: 30,
    }
}

#[test]
fn talks_url_replaces_base_path() {
    let client = TalksClient::new("http://localhost:3000/some/page").expect("client");
    assert_eq!(
        client.talks_url().expect("url").as_str(),
        "http://localhost:3000/api/talks"
    );
}

#[test]
fn rejects_unparseable_server_url() {
    let err = TalksClient::new("not a url").expect_err("should fail");
    assert!(matches!(err, ClientError::Url(_)));
}

#[tokio::test]
async fn fetches_talk_list() {
    let app = Router::new().route(
        "/api/talks",
        get(|| async { Json(vec![talk("One"), talk("Two")]) }),
    );
    let base = spawn_server(app).await;

    let talks = TalksClient::new(&base)
        .expect("client")
        .fetch_talks()
        .await
        .expect("talks");
    assert_eq!(talks, vec![talk("One"), talk("Two")]);
}

#[tokio::test]
async fn server_error_body_is_surfaced() {
    let app = Router::new().route(
        "/api/talks",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to load data")),
            )
        }),
    );
    let base = spawn_server(app).await;

    let err = TalksClient::new(&base)
        .expect("client")
        .fetch_talks()
        .await
        .expect_err("should fail");
    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to load data");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_is_an_http_error() {
    let app = Router::new().route("/api/talks", get(|| async { "definitely not json" }));
    let base = spawn_server(app).await;

    let err = TalksClient::new(&base)
        .expect("client")
        .fetch_talks()
        .await
        .expect_err("should fail");
    assert!(matches!(err, ClientError::Http(_)));
}
