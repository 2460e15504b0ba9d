use crate::errors::ConfigError;
use reqwest::Url;
use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("PORT").ok(), env::var("OFFER_API_URL").ok())
    }

    pub fn from_values(port: Option<String>, api_url: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Port(value))?,
            None => DEFAULT_PORT,
        };

        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let api_base_url = parse_api_url(&api_url).ok_or(ConfigError::ApiUrl(api_url))?;

        Ok(Self { port, api_base_url })
    }
}

fn parse_api_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return None;
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_base_url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_values(Some("eighty".into()), None),
            Err(ConfigError::Port(_))
        ));
        assert!(matches!(
            Config::from_values(None, Some("ftp://offers".into())),
            Err(ConfigError::ApiUrl(_))
        ));
        assert!(matches!(
            Config::from_values(None, Some("offers.local".into())),
            Err(ConfigError::ApiUrl(_))
        ));
    }
}
