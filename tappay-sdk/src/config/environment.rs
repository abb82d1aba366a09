//! Gateway environment selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// The TapPay deployment a merchant talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test deployment. Cards are never charged.
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Root URL of the backend API for this environment.
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        let root = match self {
            Environment::Sandbox => "https://sandbox.tappaysdk.com/",
            Environment::Production => "https://prod.tappaysdk.com/",
        };
        Url::parse(root)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment: {0}")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(UnknownEnvironment(other.to_owned())),
        }
    }
}
