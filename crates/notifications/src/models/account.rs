//! Account model representing a signed-in GitHub account

use serde::{Deserialize, Serialize};

/// Hosting platform an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "GitHub Cloud")]
    GitHubCloud,
    #[serde(rename = "GitHub Enterprise Server")]
    GitHubEnterpriseServer,
}

/// A signed-in account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// GitHub login (username)
    pub login: String,
    /// API hostname, e.g. "github.com"
    pub hostname: String,
    pub platform: Platform,
}

impl Account {
    /// Create a github.com account
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            hostname: "github.com".to_string(),
            platform: Platform::GitHubCloud,
        }
    }

    /// Create an account on a GitHub Enterprise Server host
    pub fn enterprise(login: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            hostname: hostname.into(),
            platform: Platform::GitHubEnterpriseServer,
        }
    }

    /// Stable identifier combining host and login
    pub fn key(&self) -> String {
        format!("{}@{}", self.login, self.hostname)
    }
}

/// Authentication state: every account the user has signed in with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub accounts: Vec<Account>,
}

impl AuthState {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// More than one account means notifications must be grouped per account
    pub fn has_multiple_accounts(&self) -> bool {
        self.accounts.len() > 1
    }
}
