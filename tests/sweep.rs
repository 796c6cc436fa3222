//! End-to-end tests against a local mock of the esa.io API, recording the
//! order, timing, and headers of every request the client issues.

use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get};
use axum::Router;
use esa_sweep::{Client, Error, PostId};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Entry {
    at: Instant,
    line: String,
    auth: Option<String>,
}

type Log = Arc<Mutex<Vec<Entry>>>;

fn record(log: &Log, headers: &HeaderMap, line: String) {
    log.lock().unwrap().push(Entry {
        at: Instant::now(),
        line,
        auth: headers
            .get("authorization")
            .map(|value| value.to_str().unwrap().to_owned()),
    });
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}

async fn client_for(app: Router) -> Client {
    let addr = serve(app).await;
    Client::new("test", "sekrit").with_base_url(format!("http://{}", addr))
}

fn lines(log: &Log) -> Vec<String> {
    log.lock().unwrap().iter().map(|e| e.line.clone()).collect()
}

async fn search_two_posts(
    State(log): State<Log>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> String {
    record(&log, &headers, format!("GET /posts?{}", query.unwrap_or_default()));
    json!({
        "posts": [
            {"number": 101, "name": "one", "wip": true},
            {"number": 102, "name": "two", "wip": true},
        ],
        "prev_page": null,
        "next_page": null,
        "total_count": 2,
        "page": 1,
        "per_page": 20,
        "max_per_page": 100,
    })
    .to_string()
}

async fn delete_ok(
    State(log): State<Log>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> StatusCode {
    record(&log, &headers, format!("DELETE /posts/{}", id));
    StatusCode::NO_CONTENT
}

#[tokio::test]
async fn sweep_deletes_matches_in_order_with_pacing() {
    let log = Log::default();
    let app = Router::new()
        .route("/posts", get(search_two_posts))
        .route("/posts/:id", delete(delete_ok))
        .with_state(log.clone());
    let client = client_for(app).await;

    let results = client.search_posts("wip:true").await.unwrap();
    let ids = results.post_ids();
    assert_eq!(ids, vec![PostId(101), PostId(102)]);

    let started = Instant::now();
    client.delete_posts(&ids).await.unwrap();
    // one pause per request, the last included
    assert!(started.elapsed() >= Duration::from_secs(2));

    assert_eq!(
        lines(&log),
        vec![
            "GET /posts?q=wip:true",
            "DELETE /posts/101",
            "DELETE /posts/102",
        ],
    );

    let entries = log.lock().unwrap();
    for entry in entries.iter() {
        assert_eq!(entry.auth.as_deref(), Some("Bearer sekrit"));
    }
    let gap = entries[2].at - entries[1].at;
    assert!(gap >= Duration::from_secs(1), "gap was {:?}", gap);
}

#[tokio::test]
async fn failed_delete_aborts_the_rest() {
    async fn delete_flaky(
        State(log): State<Log>,
        Path(id): Path<u64>,
        headers: HeaderMap,
    ) -> StatusCode {
        record(&log, &headers, format!("DELETE /posts/{}", id));
        if id == 202 {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::NO_CONTENT
        }
    }

    let log = Log::default();
    let app = Router::new()
        .route("/posts/:id", delete(delete_flaky))
        .with_state(log.clone());
    let client = client_for(app).await;

    let ids = [PostId(201), PostId(202), PostId(203)];
    let err = client.delete_posts(&ids).await.unwrap_err();
    assert!(matches!(err, Error::Request(_)), "got {:?}", err);

    // the failing request was issued, but nothing after it
    assert_eq!(lines(&log), vec!["DELETE /posts/201", "DELETE /posts/202"]);
}

#[tokio::test]
async fn non_json_search_body_is_a_decode_error() {
    async fn search_html(
        State(log): State<Log>,
        headers: HeaderMap,
        RawQuery(query): RawQuery,
    ) -> String {
        record(&log, &headers, format!("GET /posts?{}", query.unwrap_or_default()));
        "<html>maintenance</html>".to_owned()
    }

    let log = Log::default();
    let app = Router::new()
        .route("/posts", get(search_html))
        .route("/posts/:id", delete(delete_ok))
        .with_state(log.clone());
    let client = client_for(app).await;

    let err = client.search_posts("wip:true").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {:?}", err);

    // no deletions were attempted
    assert_eq!(lines(&log), vec!["GET /posts?q=wip:true"]);
}

#[tokio::test]
async fn non_2xx_search_is_a_request_error() {
    async fn search_unauthorized(
        State(log): State<Log>,
        headers: HeaderMap,
    ) -> (StatusCode, String) {
        record(&log, &headers, "GET /posts".to_owned());
        (
            StatusCode::UNAUTHORIZED,
            json!({"error": "unauthorized", "message": "Unauthorized"}).to_string(),
        )
    }

    let log = Log::default();
    let app = Router::new()
        .route("/posts", get(search_unauthorized))
        .with_state(log.clone());
    let client = client_for(app).await;

    let err = client.search_posts("wip:true").await.unwrap_err();
    assert!(matches!(err, Error::Request(_)), "got {:?}", err);
}
