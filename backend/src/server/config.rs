//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use clap::Parser;

/// Command-line configuration for the API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "backend", about = "Content-reading platform API server")]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a configuration with an explicit bind address.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_8080() {
        let config = ServerConfig::parse_from(["backend"]);
        assert_eq!(config.bind_addr().port(), 8080);
    }

    #[test]
    fn accepts_an_explicit_bind_address() {
        let config = ServerConfig::parse_from(["backend", "--bind-addr", "127.0.0.1:9999"]);
        assert_eq!(config.bind_addr(), "127.0.0.1:9999".parse().expect("addr"));
    }
}
