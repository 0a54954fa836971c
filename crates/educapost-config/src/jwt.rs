use std::env;

pub const DEV_SECRET: &str = "dev-secret-change-in-production";

/// Seven days, in seconds.
pub const DEFAULT_ACCESS_EXPIRY: i64 = 604800;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// `JWT_ACCESS_EXPIRY` accepts plain seconds or a `s`/`m`/`h`/`d` suffix (`"7d"`).
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let secret = var("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_SECRET.to_string());

        Self {
            secret,
            access_token_expiry: var("JWT_ACCESS_EXPIRY")
                .and_then(|s| parse_expiry(&s))
                .unwrap_or(DEFAULT_ACCESS_EXPIRY),
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret == DEV_SECRET
    }
}

fn parse_expiry(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (number, unit) = match raw.char_indices().last()? {
        (i, 's') => (&raw[..i], 1),
        (i, 'm') => (&raw[..i], 60),
        (i, 'h') => (&raw[..i], 3600),
        (i, 'd') => (&raw[..i], 86400),
        _ => (raw, 1),
    };
    number
        .parse::<i64>()
        .ok()
        .map(|n| n.saturating_mul(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = JwtConfig::from_vars(|_| None);
        assert!(config.uses_dev_secret());
        assert_eq!(config.access_token_expiry, 604800);
    }

    #[test]
    fn test_reads_secret_and_expiry() {
        let config = JwtConfig::from_vars(|key| match key {
            "JWT_SECRET" => Some("s3cret".to_string()),
            "JWT_ACCESS_EXPIRY" => Some("3600".to_string()),
            _ => None,
        });
        assert_eq!(config.secret, "s3cret");
        assert_eq!(config.access_token_expiry, 3600);
        assert!(!config.uses_dev_secret());
    }

    #[test]
    fn test_empty_secret_uses_dev_default() {
        let config = JwtConfig::from_vars(|key| (key == "JWT_SECRET").then(String::new));
        assert!(config.uses_dev_secret());
    }

    #[test]
    fn test_expiry_units() {
        assert_eq!(parse_expiry("7d"), Some(604800));
        assert_eq!(parse_expiry("12h"), Some(43200));
        assert_eq!(parse_expiry("30m"), Some(1800));
        assert_eq!(parse_expiry("45s"), Some(45));
        assert_eq!(parse_expiry(" 90 "), Some(90));
        assert_eq!(parse_expiry("-60"), Some(-60));
    }

    #[test]
    fn test_unparseable_expiry_falls_back() {
        assert_eq!(parse_expiry("soon"), None);
        assert_eq!(parse_expiry(""), None);
        assert_eq!(parse_expiry("d"), None);

        let config =
            JwtConfig::from_vars(|key| (key == "JWT_ACCESS_EXPIRY").then(|| "forever".to_string()));
        assert_eq!(config.access_token_expiry, DEFAULT_ACCESS_EXPIRY);
    }
}
