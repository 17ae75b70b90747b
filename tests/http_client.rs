use lyrics_search::{
    config::Config,
    http::{ApiService, FetchError, LyricsBackend},
    model::SearchQuery,
};
use reqwest::StatusCode;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// Serves one canned HTTP response and hands back the raw request.
async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    serve_raw(format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    ))
    .await
}

/// Writes `response` verbatim, then closes the connection.
async fn serve_raw(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request_complete(&request) {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (base, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn service(base: &str) -> ApiService {
    let config = Config::from_lookup(|key| (key == "LYRICS_SEARCH_URL").then(|| base.to_string()))
        .unwrap();
    ApiService::new(config.endpoint).unwrap()
}

fn query(text: &str) -> SearchQuery {
    SearchQuery::parse(text).unwrap()
}

#[tokio::test]
async fn posts_json_query_and_parses_results() {
    let body = r#"{"results": [{"title": "Song", "artist": "Band", "lyrics": "la la"}]}"#;
    let (base, server) = serve_once("200 OK", body).await;

    let response = service(&base).query_lyrics(&query("la la")).await.unwrap();
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].title, "Song");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /query_lyrics HTTP/1.1"));
    assert!(request.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"query":"la la"}"#));
}

#[tokio::test]
async fn error_status_ignores_body() {
    let body = r#"{"results": [{"title": "Song", "artist": "Band", "lyrics": "la la"}]}"#;
    let (base, server) = serve_once("500 Internal Server Error", body).await;

    let err = service(&base).query_lyrics(&query("x")).await.unwrap_err();
    assert_eq!(err, FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR));
    server.await.unwrap();
}

#[tokio::test]
async fn error_status_wins_over_truncated_body() {
    let (base, server) = serve_raw(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Type: application/json\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"err"
            .to_string(),
    )
    .await;

    let err = service(&base).query_lyrics(&query("x")).await.unwrap_err();
    assert_eq!(err, FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR));
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let (base, server) = serve_once("200 OK", "<html>oops</html>").await;

    let err = service(&base).query_lyrics(&query("x")).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = service(&base).query_lyrics(&query("x")).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
