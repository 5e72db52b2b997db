use pv_client::{Config, Error, PageviewParams, PageviewsClient, ValidationError, USER_AGENT};
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn setup() -> (MockServer, PageviewsClient) {
  init_tracing();
  let server = MockServer::start().await;
  let client = PageviewsClient::new(Config::default().with_base_url(server.uri())).unwrap();
  (server, client)
}

fn per_article_params() -> PageviewParams {
  PageviewParams::new("en.wikipedia.org").article("Albert Einstein").start("20240101").end("20240103")
}

fn aggregate_params() -> PageviewParams {
  PageviewParams::new("en.wikipedia.org").start("2024010100").end("2024010300")
}

fn top_params() -> PageviewParams {
  PageviewParams::new("en.wikipedia.org").date("2024", "01", "15")
}

#[tokio::test]
async fn test_dimensions_request() {
  let (server, client) = setup().await;
  let body = json!({"items": ["aggregate", "per-article", "top"]});

  Mock::given(method("GET"))
    .and(path("/metrics/pageviews/"))
    .and(header("user-agent", USER_AGENT))
    .respond_with(ResponseTemplate::new(200).set_body_json(&body))
    .expect(1)
    .mount(&server)
    .await;

  let doc = client.dimensions().await.unwrap();
  assert_eq!(doc, body);
}

#[tokio::test]
async fn test_per_article_request_path() {
  let (server, client) = setup().await;
  let body = json!({"items": [{"article": "Albert_Einstein", "views": 42}]});

  Mock::given(method("GET"))
    .and(path(
      "/metrics/pageviews/per-article/en.wikipedia.org/all-access/all-agents/Albert_Einstein/daily/20240101/20240103",
    ))
    .and(header("user-agent", USER_AGENT))
    .respond_with(ResponseTemplate::new(200).set_body_json(&body))
    .expect(1)
    .mount(&server)
    .await;

  let doc = client.per_article(&per_article_params()).await.unwrap();
  assert_eq!(doc["items"][0]["views"], 42);
}

#[tokio::test]
async fn test_per_article_title_is_encoded() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path(
      "/metrics/pageviews/per-article/en.wikipedia.org/desktop/user/AC%2FDC_live/daily/20240101/20240103",
    ))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
    .expect(1)
    .mount(&server)
    .await;

  let params = per_article_params().article("AC/DC live").access("desktop").agent("user");
  client.per_article(&params).await.unwrap();
}

#[tokio::test]
async fn test_per_article_separated_dates_are_normalized() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path(
      "/metrics/pageviews/per-article/en.wikipedia.org/all-access/all-agents/Albert_Einstein/daily/20240101/20240103",
    ))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
    .expect(1)
    .mount(&server)
    .await;

  let params = per_article_params().start("2024/01/01").end("2024.01.03");
  client.per_article(&params).await.unwrap();
}

#[tokio::test]
async fn test_aggregate_request_path() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path(
      "/metrics/pageviews/aggregate/en.wikipedia.org/mobile-app/spider/daily/2024010100/2024010300",
    ))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [{"views": 7}]})))
    .expect(1)
    .mount(&server)
    .await;

  let params = aggregate_params().access("mobile-app").agent("spider");
  let doc = client.aggregate(&params).await.unwrap();
  assert_eq!(doc["items"][0]["views"], 7);
}

#[tokio::test]
async fn test_top_request_path_accepts_day_31() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/metrics/pageviews/top/en.wikipedia.org/all-access/2023/02/31"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
    .expect(1)
    .mount(&server)
    .await;

  let params = PageviewParams::new("en.wikipedia.org").date("2023", "02", "31");
  client.top(&params).await.unwrap();
}

#[tokio::test]
async fn test_top_limit_truncates_articles() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/metrics/pageviews/top/en.wikipedia.org/all-access/2024/01/15"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({"items": [{"articles": ["a", "b", "c", "d", "e"]}]})),
    )
    .mount(&server)
    .await;

  let doc = client.top(&top_params().limit(3)).await.unwrap();
  assert_eq!(doc["items"][0]["articles"], json!(["a", "b", "c"]));

  let doc = client.top(&top_params()).await.unwrap();
  assert_eq!(doc["items"][0]["articles"], json!(["a", "b", "c", "d", "e"]));
}

#[tokio::test]
async fn test_top_limit_without_article_list() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
    .mount(&server)
    .await;

  let err = client.top(&top_params().limit(3)).await.unwrap_err();
  assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn test_not_found_detail_for_every_operation() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "No data found"})))
    .expect(4)
    .mount(&server)
    .await;

  let results = [
    client.dimensions().await,
    client.per_article(&per_article_params()).await,
    client.aggregate(&aggregate_params()).await,
    client.top(&top_params()).await,
  ];

  for result in results {
    let err = result.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.to_string(), "No data found");
  }
}

#[tokio::test]
async fn test_server_error_reports_status() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
    .mount(&server)
    .await;

  let err = client.per_article(&per_article_params()).await.unwrap_err();
  assert!(matches!(err, Error::Status(500)));
  assert!(err.to_string().contains("500"));
  assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_not_found_without_json_reports_status() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
    .mount(&server)
    .await;

  let err = client.aggregate(&aggregate_params()).await.unwrap_err();
  assert!(matches!(err, Error::Status(404)));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
    .mount(&server)
    .await;

  let err = client.dimensions().await.unwrap_err();
  assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
  let (server, client) = setup().await;

  Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let missing = PageviewParams::default();
  for err in [
    client.per_article(&missing).await.unwrap_err(),
    client.aggregate(&missing).await.unwrap_err(),
    client.top(&missing).await.unwrap_err(),
  ] {
    assert!(matches!(err, Error::Validation(ValidationError::MissingProject)));
  }

  let no_dot = PageviewParams::new("wikipedia");
  let err = client.top(&no_dot).await.unwrap_err();
  assert!(matches!(err, Error::Validation(ValidationError::InvalidProject(_))));

  let bad_month = per_article_params().start("2024-13-01");
  let err = client.per_article(&bad_month).await.unwrap_err();
  assert!(matches!(err, Error::Validation(ValidationError::InvalidStart { .. })));

  let date_only = aggregate_params().start("20240101");
  let err = client.aggregate(&date_only).await.unwrap_err();
  assert!(err.is_validation());
}

#[tokio::test]
async fn test_transport_failure_is_propagated() {
  init_tracing();
  // Grab a free port, then release it so nothing is listening there.
  let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let client = PageviewsClient::new(Config::default().with_base_url(format!("http://{addr}"))).unwrap();
  let err = client.dimensions().await.unwrap_err();
  assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_request_logger_sees_each_request() {
  init_tracing();
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
    .mount(&server)
    .await;

  let seen = Arc::new(Mutex::new(Vec::new()));
  let sink = seen.clone();
  let client = PageviewsClient::with_request_logger(
    Config::default().with_base_url(server.uri()),
    Arc::new(move |method: &reqwest::Method, url: &url::Url| {
      sink.lock().unwrap().push(format!("{method} {}", url.path()));
    }),
  )
  .unwrap();

  client.top(&top_params()).await.unwrap();
  client.per_article(&PageviewParams::default()).await.unwrap_err();

  assert_eq!(
    seen.lock().unwrap().as_slice(),
    ["GET /metrics/pageviews/top/en.wikipedia.org/all-access/2024/01/15"]
  );
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/metrics/pageviews/"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": ["top"]})))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/metrics/pageviews/top/en.wikipedia.org/all-access/2024/01/15"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "No data found"})))
    .mount(&server)
    .await;

  let other = client.clone();
  let params = top_params();
  let (dimensions, top) = tokio::join!(client.dimensions(), other.top(&params));

  assert_eq!(dimensions.unwrap(), json!({"items": ["top"]}));
  assert_eq!(top.unwrap_err().to_string(), "No data found");
}

#[tokio::test]
async fn test_typed_models_over_documents() {
  use pv_client::models::{Document, TopArticlesResponse};

  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "items": [{
        "project": "en.wikipedia", "access": "all-access",
        "year": "2024", "month": "01", "day": "15",
        "articles": [
          {"article": "Main_Page", "views": 100, "rank": 1},
          {"article": "Rust", "views": 50, "rank": 2},
          {"article": "Ferris", "views": 10, "rank": 3}
        ]
      }]
    })))
    .mount(&server)
    .await;

  let doc = client.top(&top_params().limit(2)).await.unwrap();
  let top = TopArticlesResponse::from_document(doc).unwrap();
  let names: Vec<_> = top.articles().iter().map(|a| a.article.as_str()).collect();
  assert_eq!(names, ["Main_Page", "Rust"]);
}
