//! In-process fake WebWatch server for tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;

pub const DIRECTORY_HTML: &str = r#"<html><body>
<h1>WebWatch</h1>
<a class="ada" href="ada.aspx?r=1">1, KIPPS LANE</a><br>
<a class="ada" href="ada.aspx?r=2">2, DUNDAS</a><br>
<a class="ada" href="ada.aspx?r=13">13, WELLINGTON RD</a><br>
<a href="help.aspx">Help</a>
</body></html>"#;

/// Feed for route 2: three good stops (two main, one minor) and one record
/// with a missing field.
pub const ROUTE_2_FEED: &str = concat!(
    "10:42 AM*",
    "42.98494|-81.24621|RICHMOND AT DUNDAS|NORTH|Stop Number 1|10:45 TO 2A MASONVILLE<br>10:57 TO DUNDAS<br>|;",
    "43.00961|-81.27372|WESTERN AT UNIVERSITY|NORTH|Stop Number 2|10:51 TO MASONVILLE<br>|;",
    "42.98010|-81.24000|BROKEN RECORD|SOUTH|Stop Number 3|;",
    "*Detour on King St*",
    "42.95370|-81.22830|HAMILTON AT EGERTON|SOUTH|Stop Number 4|11:02 TO DOWNTOWN<br>|;",
);

pub const MALFORMED_FEED: &str = "the map is temporarily unavailable";

/// Request counters for the fake server.
#[derive(Debug, Default)]
pub struct UpstreamStats {
    pub directory_hits: AtomicUsize,
    pub feed_hits: AtomicUsize,
}

#[derive(Deserialize)]
struct FeedQuery {
    u: String,
}

/// Bind `app` to an ephemeral local port and serve it in the background.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Start a fake WebWatch site. Returns its base URL and request counters.
///
/// Stop feed routes: `2` (good feed), `bad` (no `*` segments), `500`,
/// `slow` (3 s delay), anything else 404.
pub async fn spawn_upstream() -> (String, Arc<UpstreamStats>) {
    let stats = Arc::new(UpstreamStats::default());
    let app = Router::new()
        .route("/WebWatch/ada.aspx", get(directory))
        .route("/WebWatch/UpdateWebMap.aspx", get(stop_feed))
        .with_state(Arc::clone(&stats));

    let addr = serve(app).await;
    (format!("http://{addr}/WebWatch"), stats)
}

async fn directory(State(stats): State<Arc<UpstreamStats>>) -> Html<&'static str> {
    stats.directory_hits.fetch_add(1, Ordering::SeqCst);
    Html(DIRECTORY_HTML)
}

async fn stop_feed(
    State(stats): State<Arc<UpstreamStats>>,
    Query(query): Query<FeedQuery>,
) -> Response {
    stats.feed_hits.fetch_add(1, Ordering::SeqCst);
    match query.u.as_str() {
        "2" => ROUTE_2_FEED.into_response(),
        "bad" => MALFORMED_FEED.into_response(),
        "500" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            ROUTE_2_FEED.into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
