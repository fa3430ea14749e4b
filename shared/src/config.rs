//! # Client configuration
//!
//! The page needs two settings: the backend base URL and the pair of
//! participants whose expenses are split. Both come from build-time
//! environment variables in the frontend; this module resolves the raw
//! values and falls back to defaults when a value is missing or invalid.

use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PARTICIPANTS: (&str, &str) = ("Rahul", "Ramesh");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,
    #[error("Expected exactly two participants, found {0}")]
    WrongParticipantCount(usize),
    #[error("Participant names cannot be empty")]
    EmptyParticipantName,
    #[error("Participants must be two different people, got \"{0}\" twice")]
    DuplicateParticipant(String),
}

/// The two people sharing expenses.
///
/// Settlement only works between exactly two participants, so this is a pair
/// rather than a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participants {
    first: String,
    second: String,
}

impl Participants {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, ConfigError> {
        let first = first.into().trim().to_string();
        let second = second.into().trim().to_string();

        if first.is_empty() || second.is_empty() {
            return Err(ConfigError::EmptyParticipantName);
        }
        if first == second {
            return Err(ConfigError::DuplicateParticipant(first));
        }

        Ok(Self { first, second })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn names(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

impl Default for Participants {
    fn default() -> Self {
        Self {
            first: DEFAULT_PARTICIPANTS.0.to_string(),
            second: DEFAULT_PARTICIPANTS.1.to_string(),
        }
    }
}

impl FromStr for Participants {
    type Err = ConfigError;

    /// Parse a comma-separated pair such as `"Rahul,Ramesh"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s.split(',').collect();
        match names.as_slice() {
            [first, second] => Self::new(*first, *second),
            _ => Err(ConfigError::WrongParticipantCount(names.len())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub participants: Participants,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            participants: Participants::default(),
        }
    }
}

impl ClientConfig {
    /// Resolve raw settings, falling back to the default for anything invalid.
    ///
    /// Returns the resolved config together with the errors that caused a
    /// fallback so the caller can report them.
    pub fn resolve(base_url: Option<&str>, participants: Option<&str>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = base_url {
            let trimmed = raw.trim().trim_end_matches('/');
            if trimmed.is_empty() {
                errors.push(ConfigError::EmptyBaseUrl);
            } else {
                config.base_url = trimmed.to_string();
            }
        }

        if let Some(raw) = participants {
            match raw.parse::<Participants>() {
                Ok(parsed) => config.participants = parsed,
                Err(e) => errors.push(e),
            }
        }

        (config, errors)
    }
}
