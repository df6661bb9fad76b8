use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ASSISTANT_TYPING_DELAY_MS: u64 = 1500;
const DEFAULT_REGISTRATION_DELAY_MS: u64 = 2000;
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;
const DEFAULT_MAX_OPEN_SESSIONS: usize = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_host: String,
    pub api_port: u16,
    pub assistant_typing_delay_ms: u64,
    pub registration_delay_ms: u64,
    /// Sign-ins, booking flows and assistant chats untouched for this long
    /// are dropped.
    pub session_idle_secs: u64,
    /// Upper bound on entries held by each of those stores.
    pub max_open_sessions: usize,
    /// Pins the calendar date used for the past-date rule.
    pub clinic_today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_HOST.to_string(),
            api_port: DEFAULT_PORT,
            assistant_typing_delay_ms: DEFAULT_ASSISTANT_TYPING_DELAY_MS,
            registration_delay_ms: DEFAULT_REGISTRATION_DELAY_MS,
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
            max_open_sessions: DEFAULT_MAX_OPEN_SESSIONS,
            clinic_today: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_host: env::var("API_HOST")
                .unwrap_or_else(|_| {
                    warn!("API_HOST not set, using default");
                    DEFAULT_HOST.to_string()
                }),
            api_port: parse_var("API_PORT", DEFAULT_PORT),
            assistant_typing_delay_ms: parse_var(
                "ASSISTANT_TYPING_DELAY_MS",
                DEFAULT_ASSISTANT_TYPING_DELAY_MS,
            ),
            registration_delay_ms: parse_var("REGISTRATION_DELAY_MS", DEFAULT_REGISTRATION_DELAY_MS),
            session_idle_secs: parse_var("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS),
            max_open_sessions: parse_var("MAX_OPEN_SESSIONS", DEFAULT_MAX_OPEN_SESSIONS),
            clinic_today: env::var("CLINIC_TODAY").ok().and_then(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| warn!("CLINIC_TODAY is not a YYYY-MM-DD date, ignoring"))
                    .ok()
            }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - API_HOST is not an IP address");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        self.api_host.parse::<IpAddr>().is_ok()
    }

    pub fn bind_address(&self) -> SocketAddr {
        let ip = self
            .api_host
            .parse::<IpAddr>()
            .unwrap_or_else(|_| IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(ip, self.api_port)
    }

    /// The date against which past days are rejected; ignores time of day.
    pub fn today(&self) -> NaiveDate {
        self.clinic_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn assistant_typing_delay(&self) -> Duration {
        Duration::from_millis(self.assistant_typing_delay_ms)
    }

    pub fn registration_delay(&self) -> Duration {
        Duration::from_millis(self.registration_delay_ms)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} is not valid, using default", name);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default", name);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_date_overrides_local_clock() {
        let config = AppConfig {
            clinic_today: NaiveDate::from_ymd_opt(2024, 12, 26),
            ..AppConfig::default()
        };
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 12, 26).unwrap());
    }

    #[test]
    fn bind_address_falls_back_on_bad_host() {
        let config = AppConfig {
            api_host: "not-an-ip".to_string(),
            api_port: 8080,
            ..AppConfig::default()
        };
        assert!(!config.is_configured());
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:8080");
    }
}
