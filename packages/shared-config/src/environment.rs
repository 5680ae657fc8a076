//! Deployment environment

use std::fmt;
use std::str::FromStr;

/// Where the service is running
///
/// Unrecognized values fall back to [`Environment::Development`], so a typo
/// never enables production-only restrictions by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Whether this is a production deployment
    pub fn is_production(self) -> bool {
        self == Self::Production
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let env = match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        };
        Ok(env)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("production", Environment::Production)]
    #[case(" PROD ", Environment::Production)]
    #[case("staging", Environment::Staging)]
    #[case("stage", Environment::Staging)]
    #[case("development", Environment::Development)]
    #[case("prodution", Environment::Development)]
    #[case("", Environment::Development)]
    fn test_parse(#[case] raw: &str, #[case] expected: Environment) {
        assert_eq!(raw.parse::<Environment>().unwrap(), expected);
    }

    #[test]
    fn test_display_round_trips() {
        for env in [
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
    }
}
