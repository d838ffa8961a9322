use std::time::Duration;

use crate::cli::Cli;
use crate::error::AppError;

/// Immutable runtime configuration, built once at start-up and passed by
/// reference into the clients and the poll loop.
#[derive(Debug, Clone)]
pub struct Config {
    pub envoy_host: String,
    pub envoy_port: u16,
    pub pvoutput_api_key: String,
    pub pvoutput_system_id: u32,
    pub poll_interval: Duration,
    pub timezone: Option<String>,
}

impl Config {
    /// Validates the parsed command line and produces the runtime config.
    /// Either every required field is present and non-empty/non-zero, or
    /// this fails and the process never starts polling.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        if cli.envoy_ip.trim().is_empty() {
            return Err(AppError::Config("ENVOYIP must not be empty".into()));
        }
        if cli.pvoutput_api_key.trim().is_empty() {
            return Err(AppError::Config("PVOUTPUTAPIKEY must not be empty".into()));
        }
        if cli.pvoutput_system_id == 0 {
            return Err(AppError::Config("PVOUTPUTSYSTEMID must not be zero".into()));
        }
        if cli.poll_interval_seconds == 0 {
            return Err(AppError::Config(
                "POLLINTERVALSECONDS must not be zero".into(),
            ));
        }

        let timezone = cli
            .timezone
            .as_deref()
            .map(str::trim)
            .filter(|tz| !tz.is_empty())
            .map(str::to_string);

        Ok(Self {
            envoy_host: cli.envoy_ip.clone(),
            envoy_port: cli.envoy_port,
            pvoutput_api_key: cli.pvoutput_api_key.clone(),
            pvoutput_system_id: cli.pvoutput_system_id,
            poll_interval: Duration::from_secs(cli.poll_interval_seconds),
            timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_cli() -> Cli {
        Cli {
            envoy_ip: "192.168.1.40".into(),
            envoy_port: 80,
            pvoutput_api_key: "abcdef0123456789".into(),
            pvoutput_system_id: 12345,
            poll_interval_seconds: 300,
            timezone: None,
        }
    }

    #[test]
    fn test_valid_cli_maps_through() {
        let config = Config::from_cli(&valid_cli()).unwrap();
        assert_eq!(config.envoy_host, "192.168.1.40");
        assert_eq!(config.envoy_port, 80);
        assert_eq!(config.pvoutput_api_key, "abcdef0123456789");
        assert_eq!(config.pvoutput_system_id, 12345);
        assert_eq!(config.poll_interval, Duration::from_secs(300));
        assert_eq!(config.timezone, None);
    }

    #[test]
    fn test_loading_twice_is_identical() {
        let cli = valid_cli();
        let a = Config::from_cli(&cli).unwrap();
        let b = Config::from_cli(&cli).unwrap();
        assert_eq!(a.envoy_host, b.envoy_host);
        assert_eq!(a.pvoutput_system_id, b.pvoutput_system_id);
        assert_eq!(a.poll_interval, b.poll_interval);
    }

    #[test]
    fn test_empty_host_rejected() {
        let mut cli = valid_cli();
        cli.envoy_ip = "".into();
        assert!(Config::from_cli(&cli).is_err());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut cli = valid_cli();
        cli.pvoutput_api_key = "  ".into();
        assert!(Config::from_cli(&cli).is_err());
    }

    #[test]
    fn test_zero_system_id_rejected() {
        let mut cli = valid_cli();
        cli.pvoutput_system_id = 0;
        assert!(Config::from_cli(&cli).is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut cli = valid_cli();
        cli.poll_interval_seconds = 0;
        assert!(Config::from_cli(&cli).is_err());
    }

    #[test]
    fn test_blank_timezone_treated_as_unset() {
        let mut cli = valid_cli();
        cli.timezone = Some("  ".into());
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.timezone, None);

        cli.timezone = Some("Australia/Sydney".into());
        let config = Config::from_cli(&cli).unwrap();
        assert_eq!(config.timezone.as_deref(), Some("Australia/Sydney"));
    }
}
