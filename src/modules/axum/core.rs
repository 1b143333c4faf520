// src/modules/axum/core.rs

use crate::common::log;
use crate::middlewares::rate_limiting;
use crate::modules::router::entrance::app_router;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

// Starts the Axum web server.
pub async fn start() {
    let app = app_router();
    let port = 30740;
    let addr = format!("0.0.0.0:{}", port);

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::log(
                log::LogLevel::Error,
                &format!("✗ Failed to bind to address {}: {}", addr, e),
            );
            return;
        }
    };

    rate_limiting::start_cleanup_task();

    // Always log the localhost address first.
    log::log(
        log::LogLevel::Info,
        &format!("✓ Listening on http://localhost:{}", port),
    );

    // Non-loopback addresses, private ranges first.
    let mut all_ips: Vec<IpAddr> = get_if_addrs::get_if_addrs()
        .map(|interfaces| {
            interfaces
                .into_iter()
                .filter(|iface| !iface.addr.ip().is_loopback())
                .map(|iface| iface.addr.ip())
                .collect()
        })
        .unwrap_or_default();

    all_ips.sort_by_key(|ip| match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            if octets[0] == 192 && octets[1] == 168 {
                (0, ip.to_string())
            } else if octets[0] == 10 {
                (1, ip.to_string())
            } else {
                (2, ip.to_string())
            }
        }
        IpAddr::V6(_) => (3, ip.to_string()),
    });

    let display_limit = 2;
    let shown = &all_ips[..display_limit.min(all_ips.len())];
    let more_count = all_ips.len() - shown.len();

    for (index, ip_addr) in shown.iter().enumerate() {
        let url = match ip_addr {
            IpAddr::V4(ip) => format!("http://{}:{}", ip, port),
            IpAddr::V6(ip) => format!("http://[{}]:{}", ip, port),
        };

        let mut display_str = format!("✓ Listening on {}", url);
        if index == shown.len() - 1 && more_count > 0 {
            display_str.push_str(&format!(" +{} more", more_count));
        }
        log::log(log::LogLevel::Info, &display_str);
    }

    log::log(log::LogLevel::Info, "✓ Ready to handle requests");

    // ConnectInfo is required by the rate limiter.
    let service = app.into_make_service_with_connect_info::<SocketAddr>();
    if let Err(e) = axum::serve(listener, service).await {
        log::log(log::LogLevel::Error, &format!("✗ Axum server error: {}", e));
    }
}
