use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// WordPress caps `per_page` at 100.
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Feed
    pub feed_endpoint: String,
    pub feed_category_id: u32,
    pub posts_per_page: u32,
    pub hero_posts: u32,
    pub feed_timeout: Duration,

    // Pages
    pub contact_form_action: String,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
    /// Asset directory override; searched for when unset
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default, so an empty environment yields the
    /// production configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Feed
            feed_endpoint: env_or_default(
                "FEED_ENDPOINT",
                "https://lankan.org/wp-json/wp/v2/posts",
            ),
            feed_category_id: parse_env_u32("FEED_CATEGORY_ID", 67)?,
            posts_per_page: parse_env_u32("POSTS_PER_PAGE", 18)?,
            hero_posts: parse_env_u32("HERO_POSTS", 3)?,
            feed_timeout: Duration::from_secs(parse_env_u64("FEED_TIMEOUT_SECS", 15)?),

            // Pages
            contact_form_action: env_or_default(
                "CONTACT_FORM_ACTION",
                "https://formspree.io/f/mwvpdgnk",
            ),

            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
            static_dir: std::env::var_os("STATIC_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Configuration for tests: production defaults without reading the
    /// environment.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            feed_endpoint: "http://127.0.0.1:9/wp-json/wp/v2/posts".to_string(),
            feed_category_id: 67,
            posts_per_page: 18,
            hero_posts: 3,
            feed_timeout: Duration::from_secs(5),
            contact_form_action: "https://formspree.io/f/test".to_string(),
            web_host: "127.0.0.1".to_string(),
            web_port: 0,
            static_dir: None,
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.feed_endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "FEED_ENDPOINT".to_string(),
                    message: format!("unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "FEED_ENDPOINT".to_string(),
                    message: e.to_string(),
                });
            }
        }
        validate_page_size("POSTS_PER_PAGE", self.posts_per_page)?;
        validate_page_size("HERO_POSTS", self.hero_posts)?;
        if self.feed_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "FEED_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.contact_form_action.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "CONTACT_FORM_ACTION".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn validate_page_size(name: &str, value: u32) -> Result<(), ConfigError> {
    if (1..=MAX_PAGE_SIZE).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: format!("must be between 1 and {MAX_PAGE_SIZE}, got {value}"),
        })
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_testing_is_valid() {
        assert!(Config::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = Config {
            feed_endpoint: "lankan.org/posts".to_string(),
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            feed_endpoint: "ftp://lankan.org/posts".to_string(),
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_page_sizes() {
        let config = Config {
            posts_per_page: 0,
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            hero_posts: 101,
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());

        let config = Config {
            posts_per_page: 100,
            hero_posts: 1,
            ..Config::for_testing()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            feed_timeout: Duration::ZERO,
            ..Config::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_env_u32("NONEXISTENT_VAR", 18).unwrap(), 18);
        assert_eq!(parse_env_u16("NONEXISTENT_VAR", 8080).unwrap(), 8080);
        assert_eq!(env_or_default("NONEXISTENT_VAR", "x"), "x");
    }
}
