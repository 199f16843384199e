use std::str::FromStr;

/// Build-time settings, read from the environment of the `trunk`/`cargo` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub title: &'static str,
    pub api_base_url: &'static str,
    pub log_level: log::Level,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            title: "Online Shop",
            api_base_url: "http://localhost:3000",
            log_level: log::Level::Info,
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("SHOP_TITLE"),
            option_env!("SHOP_API_BASE_URL"),
            option_env!("SHOP_LOG_LEVEL"),
        )
    }

    fn from_values(
        title: Option<&'static str>,
        api_base_url: Option<&'static str>,
        log_level: Option<&'static str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            title: title.unwrap_or(defaults.title),
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/'))
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|level| log::Level::from_str(level).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ShopConfig::from_values(None, None, None), ShopConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ShopConfig::from_values(Some("Gadgets"), Some("https://api.example.com/"), Some("debug"));
        assert_eq!(config.title, "Gadgets");
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = ShopConfig::from_values(None, None, Some("chatty"));
        assert_eq!(config.log_level, log::Level::Info);
    }
}
