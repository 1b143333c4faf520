// src/middlewares/cors.rs

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub async fn handler(req: Request, next: Next) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    // OPTIONS preflights are answered here with an empty 200.
    if req.method() == Method::OPTIONS {
        let mut response = (StatusCode::OK, ()).into_response();
        add_cors_headers(response.headers_mut(), origin.as_deref());
        return response;
    }

    let mut response = next.run(req).await;
    add_cors_headers(response.headers_mut(), origin.as_deref());
    response
}

// A diagnostics box has no trusted-domain roster: echo the caller's
// origin when one is present, wildcard otherwise.
fn add_cors_headers(headers: &mut HeaderMap, origin: Option<&str>) {
    let allow_origin = origin
        .and_then(|value| HeaderValue::from_str(value).ok())
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, X-Requested-With, Content-Type, Accept"),
    );
}
