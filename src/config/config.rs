use dotenv::dotenv;
use std::env;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("failed to parse {name} from {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_ca_file: Option<String>,
    pub database_pool_max_size: usize,
    pub run_migrations: bool,
    pub server_host: String,
    pub server_port: u16,
    pub trusted_proxy_ip: IpAddr,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub log_config_path: String,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let database_ca_file = env::var("DATABASE_CA_FILE")
            .ok()
            .filter(|path| !path.is_empty());

        Ok(Config {
            database_url,
            database_ca_file,
            database_pool_max_size: parse_or("DATABASE_POOL_MAX_SIZE", 10)?,
            run_migrations: parse_or("RUN_MIGRATIONS", true)?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_or("SERVER_PORT", 8080)?,
            trusted_proxy_ip: parse_or("TRUSTED_PROXY_IP", IpAddr::from([127, 0, 0, 1]))?,
            rate_limit_per_second: parse_or("RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", 5)?,
            log_config_path: env::var("LOG_CONFIG_PATH")
                .unwrap_or_else(|_| "./log-config.yml".to_string()),
        })
    }
}

/// Reads `name` from the environment, falling back to `default` when unset or empty.
fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { name, value })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_when_unset() {
        let port: u16 = parse_or("CYCLING_TOTO_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn parse_or_rejects_garbage() {
        env::set_var("CYCLING_TOTO_TEST_BAD_PORT", "eighty");
        let err = parse_or::<u16>("CYCLING_TOTO_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("CYCLING_TOTO_TEST_BAD_PORT"));
    }

    #[test]
    fn parse_or_reads_booleans() {
        env::set_var("CYCLING_TOTO_TEST_FLAG", "false");
        assert!(!parse_or("CYCLING_TOTO_TEST_FLAG", true).unwrap());
    }
}
