//! Registry test utilities

use std::net::SocketAddr;
use std::time::Duration;

use etelemetry::config::ClientConfig;
use mockito::{Mock, ServerGuard};
use tokio::net::{TcpListener, TcpSocket, TcpStream};

/// Client configuration pointing at `base_url`, ignoring the process environment
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    }
}

/// Registers a registry reply for `repo`
pub async fn mock_project(server: &mut ServerGuard, repo: &str, body: &str) -> Mock {
    server
        .mock("GET", format!("/projects/{}", repo).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Starts a server that accepts connections but never answers
pub async fn silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut connections = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            connections.push(socket);
        }
    });

    addr
}

/// Listener whose accept queue is full, so new handshakes never complete
pub struct SaturatedListener {
    pub addr: SocketAddr,
    _listener: TcpListener,
    _clients: Vec<TcpStream>,
}

/// Starts a listener that never accepts and fills its backlog
pub async fn saturated_listener() -> SaturatedListener {
    let socket = TcpSocket::new_v4().unwrap();
    socket.bind("127.0.0.1:0".parse().unwrap()).unwrap();
    let listener = socket.listen(0).unwrap();
    let addr = listener.local_addr().unwrap();

    let mut clients = Vec::new();
    for _ in 0..64 {
        match tokio::time::timeout(Duration::from_millis(200), TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => clients.push(stream),
            _ => break,
        }
    }

    SaturatedListener {
        addr,
        _listener: listener,
        _clients: clients,
    }
}
