//! Server configuration.
//!
//! Every option can be given on the command line or through its environment
//! variable; the command line wins.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use clap::builder::FalseyValueParser;

use crate::error::Error;
use crate::middleware::CorsPolicy;

/// Command-line and environment configuration for the `vellum` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "vellum", version, about = "In-memory blog post JSON API")]
pub struct Config {
    /// IP address to bind to.
    #[arg(long, env = "BLOG_API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to.
    #[arg(long, env = "BLOG_API_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Origin allowed to make cross-origin requests (repeatable, or comma separated).
    #[arg(
        long = "cors-origin",
        env = "BLOG_API_CORS_ORIGINS",
        value_delimiter = ',',
        default_values_t = default_cors_origins()
    )]
    pub cors_origins: Vec<String>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "BLOG_API_LOG", default_value = "info")]
    pub log: String,

    /// Start with an empty store instead of the sample posts.
    #[arg(long, env = "BLOG_API_NO_SEED", value_parser = FalseyValueParser::new())]
    pub no_seed: bool,
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_owned(),
        "http://127.0.0.1:3000".to_owned(),
    ]
}

impl Config {
    /// The address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        let ip: IpAddr = self.host.parse()
            .map_err(|_| Error::InvalidAddr(format!("{}:{}", self.host, self.port)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn cors_policy(&self) -> CorsPolicy {
        CorsPolicy::new(self.cors_origins.iter().map(|o| o.trim().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("vellum").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&["--host", "127.0.0.1", "--port", "8080", "--no-seed"]);
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:8080".parse().unwrap());
        assert!(config.no_seed);
    }

    // Other tests only look at `no_seed` with the flag given, which wins over the environment.
    #[test]
    fn no_seed_env_accepts_loose_booleans() {
        for (raw, expected) in [("1", true), ("yes", true), ("true", true), ("0", false), ("no", false), ("off", false)] {
            unsafe { std::env::set_var("BLOG_API_NO_SEED", raw) };
            assert_eq!(parse(&[]).no_seed, expected, "{raw:?}");
        }
        unsafe { std::env::remove_var("BLOG_API_NO_SEED") };
        assert!(!parse(&[]).no_seed);
    }

    #[test]
    fn origins_split_on_commas() {
        let config = parse(&["--cors-origin", "http://a.test,http://b.test"]);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.cors_policy().allows_origin("http://b.test"));
    }

    #[test]
    fn hostnames_are_not_addresses() {
        let config = parse(&["--host", "localhost"]);
        assert!(matches!(config.socket_addr(), Err(Error::InvalidAddr(_))));
    }

    #[test]
    fn ipv6_hosts_work() {
        let config = parse(&["--host", "::1", "--port", "5000"]);
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:5000");
    }
}
