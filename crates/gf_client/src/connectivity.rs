use std::time::Duration;

use tokio::net::TcpStream;
use url::{Host, Url};

/// Whether the endpoint's host accepts a TCP connection within `limit`.
pub async fn check_connectivity(endpoint: &str, limit: Duration) -> bool {
    let Some((host, port)) = host_and_port(endpoint) else {
        tracing::warn!("Cannot check connectivity for {}", endpoint);
        return false;
    };

    match tokio::time::timeout(limit, TcpStream::connect((host.as_str(), port))).await {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            tracing::info!("No connectivity to {}:{}: {}", host, port, e);
            false
        }
        Err(_) => {
            tracing::info!("No connectivity to {}:{}: timed out after {}ms", host, port, limit.as_millis());
            false
        }
    }
}

fn host_and_port(endpoint: &str) -> Option<(String, u16)> {
    let url = Url::parse(endpoint).ok()?;
    let port = url.port_or_known_default()?;
    let host = match url.host()? {
        Host::Domain(domain) => domain.to_string(),
        Host::Ipv4(addr) => addr.to_string(),
        Host::Ipv6(addr) => addr.to_string(),
    };
    Some((host, port))
}
