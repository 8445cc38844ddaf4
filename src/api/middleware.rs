/// Request logging middleware
use axum::{
    extract::{ConnectInfo, Request},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::{
    fmt,
    net::SocketAddr,
    time::{Duration, Instant},
};

/// Summary of one handled request
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub method: Method,
    pub path: String,
    pub remote_addr: Option<SocketAddr>,
    pub status: StatusCode,
    pub elapsed: Duration,
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remote = self
            .remote_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "[{}] {} {} - {} - {:?}",
            self.method,
            self.path,
            remote,
            self.status.as_u16(),
            self.elapsed
        )
    }
}

/// Log method, path, peer, final status and elapsed time for every request
///
/// The peer address is only known when the server was started with
/// `into_make_service_with_connect_info`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let response = next.run(request).await;

    let line = RequestLine {
        method,
        path,
        remote_addr,
        status: response.status(),
        elapsed: start.elapsed(),
    };
    tracing::info!(
        method = %line.method,
        path = %line.path,
        remote_addr = ?line.remote_addr,
        status = line.status.as_u16(),
        elapsed_ms = line.elapsed.as_millis() as u64,
        "{}",
        line
    );

    response
}
