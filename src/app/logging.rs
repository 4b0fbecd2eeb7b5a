use std::time::{Duration, Instant};

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

const MAX_LINE_CHARS: usize = 80;

/// Logs one line per `/api` request: method, path, status, latency and the
/// JSON body that was sent back.
pub async fn log_api_response(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !path.starts_with("/api") {
        return next.run(request).await;
    }

    let method = request.method().clone();
    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "failed to buffer the response body for logging");
            return Response::from_parts(parts, Body::empty());
        }
    };

    tracing::info!(
        "{}",
        api_log_line(
            &method,
            &path,
            parts.status,
            elapsed,
            std::str::from_utf8(&bytes).ok()
        )
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn api_log_line(
    method: &Method,
    path: &str,
    status: StatusCode,
    elapsed: Duration,
    body: Option<&str>,
) -> String {
    let mut line = format!(
        "{} {} {} in {}ms",
        method,
        path,
        status.as_u16(),
        elapsed.as_millis()
    );
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        line.push_str(" :: ");
        line.push_str(body);
    }

    if line.chars().count() > MAX_LINE_CHARS {
        line = line.chars().take(MAX_LINE_CHARS - 1).collect();
        line.push('…');
    }
    line
}
