//! Talks to a real listening server over TCP.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

use vellum::Server;
use vellum::api::{self, AppState};

async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn serves_requests_and_shuts_down_cleanly() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(Server::bind(addr).serve_on(
        listener,
        api::router(AppState::seeded()),
        async {
            let _ = stopped.await;
        },
    ));

    let health = raw_request(
        addr,
        "GET /api/health HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n",
    )
    .await;
    assert!(health.starts_with("HTTP/1.1 200"), "{health}");
    assert!(health.contains(r#""message":"API is healthy""#));

    let body = r#"{"heading":"Over the wire","description":"Sent through a real socket."}"#;
    let created = raw_request(
        addr,
        &format!(
            "POST /api/blogs HTTP/1.1\r\nhost: localhost\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await;
    assert!(created.starts_with("HTTP/1.1 201"), "{created}");
    assert!(created.contains(r#""id":5"#));

    let unsupported = raw_request(
        addr,
        "PURGE /api/blogs HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n",
    )
    .await;
    assert!(unsupported.starts_with("HTTP/1.1 405"), "{unsupported}");

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}
