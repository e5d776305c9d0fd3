use crate::AppState;
use actix_governor::{KeyExtractor, SimpleKeyExtractionError};
use actix_web::dev::ServiceRequest;
use actix_web::web;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Rate-limit key: the client IP. Forwarding headers are only believed when
/// the peer is the configured reverse proxy.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RealIpKeyExtractor;

fn parse_ip(raw: &str) -> Option<IpAddr> {
    SocketAddr::from_str(raw)
        .map(|socket| socket.ip())
        .or_else(|_| IpAddr::from_str(raw))
        .ok()
}

impl KeyExtractor for RealIpKeyExtractor {
    type Key = IpAddr;
    type KeyExtractionError = SimpleKeyExtractionError<&'static str>;

    fn extract(&self, req: &ServiceRequest) -> Result<Self::Key, Self::KeyExtractionError> {
        let trusted_proxy = req
            .app_data::<web::Data<AppState>>()
            .map(|data| data.config.trusted_proxy_ip);
        let peer_ip = req.peer_addr().map(|socket| socket.ip());
        let connection_info = req.connection_info();

        match peer_ip {
            Some(peer) if Some(peer) == trusted_proxy => connection_info
                .realip_remote_addr()
                .and_then(parse_ip)
                .ok_or_else(|| {
                    SimpleKeyExtractionError::new("Could not extract real IP address from request")
                }),
            Some(peer) => Ok(peer),
            None => connection_info
                .peer_addr()
                .and_then(parse_ip)
                .ok_or_else(|| {
                    SimpleKeyExtractionError::new("Could not extract peer IP address from request")
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_socket_addresses() {
        assert_eq!(parse_ip("10.0.0.7"), Some(IpAddr::from([10, 0, 0, 7])));
        assert_eq!(parse_ip("10.0.0.7:51234"), Some(IpAddr::from([10, 0, 0, 7])));
        assert_eq!(parse_ip("[::1]:8080"), Some(IpAddr::from_str("::1").unwrap()));
        assert_eq!(parse_ip("not an ip"), None);
    }
}
