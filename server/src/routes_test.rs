use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn get_response(router: Router, path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let mut stream = tokio::net::TcpStream::connect(addr).await.expect("connect");
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.expect("write");
    let mut response = String::new();
    stream.read_to_string(&mut response).await.expect("read");
    response
}

async fn get_status_line(router: Router, path: &str) -> String {
    get_response(router, path).await.lines().next().unwrap_or_default().to_owned()
}

fn site_app() -> Router {
    app_with_options(LeptosOptions::builder().output_name("taskdesk").build())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(get_status_line(probe_routes(), "/healthz").await, "HTTP/1.1 200 OK");
}

#[tokio::test]
async fn unknown_probe_path_is_not_found() {
    assert_eq!(get_status_line(probe_routes(), "/nope").await, "HTTP/1.1 404 Not Found");
}

#[tokio::test]
async fn client_route_renders_shell() {
    assert_eq!(get_status_line(site_app(), "/tasks").await, "HTTP/1.1 200 OK");
}

#[tokio::test]
async fn unmatched_path_redirects_to_root() {
    let response = get_response(site_app(), "/no-such-page").await;
    assert!(response.starts_with("HTTP/1.1 307 Temporary Redirect"), "{response}");
    assert!(
        response.lines().any(|line| line.eq_ignore_ascii_case("location: /")),
        "{response}"
    );
}

#[tokio::test]
async fn site_app_keeps_healthz() {
    assert_eq!(get_status_line(site_app(), "/healthz").await, "HTTP/1.1 200 OK");
}
