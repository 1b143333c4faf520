// src/middlewares/rate_limiting.rs

use crate::common::log;
use crate::core::response;
use crate::middlewares::router::{self, RateLimitRule};
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;
use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::time;

lazy_static! {
    static ref RULES: (HashMap<&'static str, RateLimitRule>, RateLimitRule) = router::get_rules();
    static ref CLIENTS: Arc<DashMap<SocketAddr, Vec<Instant>>> = Arc::new(DashMap::new());
}

// Drops clients that have gone quiet so the map stays bounded.
pub fn start_cleanup_task() {
    let clients = Arc::clone(&CLIENTS);
    tokio::spawn(async move {
        loop {
            time::sleep(Duration::from_secs(10)).await;
            clients.retain(|_, timestamps| {
                timestamps
                    .last()
                    .map_or(false, |last| last.elapsed() < Duration::from_secs(300))
            });
        }
    });
}

pub async fn handler(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let method = req.method().as_str().to_string();
    log::log(log::LogLevel::Debug, &format!("➜ {} {}", method, path));

    let (path_rules, default_rule) = (&RULES.0, &RULES.1);
    let rule = path_rules.get(path.as_str()).unwrap_or(default_rule);

    let now = Instant::now();
    let mut client_timestamps = CLIENTS.entry(addr).or_insert_with(Vec::new);
    client_timestamps.retain(|&t| now.duration_since(t) < rule.period);

    if client_timestamps.len() >= rule.limit as usize {
        log::log(
            log::LogLevel::Debug,
            &format!("▪ {} hit limit ➜ {}", addr, path),
        );
        return response::error(StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded.");
    }

    client_timestamps.push(now);
    drop(client_timestamps);
    next.run(req).await
}
