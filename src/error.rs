use thiserror::Error;

/// Errors raised by the rules adapter around `cozy_chess::Board`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("FEN error: {0}")]
    InvalidFen(String),
    #[error("Illegal move: {0}")]
    IllegalMove(String),
}

/// Failure signals from an external advisory source.
///
/// `QuotaExhausted` is sticky: the opponent stops consulting the source for the
/// rest of the session. `Unavailable` only drops the source for one turn.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvisoryError {
    #[error("advisory source unavailable: {0}")]
    Unavailable(String),
    #[error("advisory quota exhausted: {0}")]
    QuotaExhausted(String),
}

impl AdvisoryError {
    /// Sort a raw failure message into the two recovery classes.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_ascii_lowercase();
        if lower.contains("quota") || lower.contains("429") || lower.contains("exceeded") {
            AdvisoryError::QuotaExhausted(message)
        } else {
            AdvisoryError::Unavailable(message)
        }
    }

    pub fn is_quota(&self) -> bool { matches!(self, AdvisoryError::QuotaExhausted(_)) }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_quota_messages() {
        assert!(AdvisoryError::classify("HTTP 429 Too Many Requests").is_quota());
        assert!(AdvisoryError::classify("Resource has been exhausted (e.g. check quota)").is_quota());
        assert!(AdvisoryError::classify("daily limit exceeded").is_quota());
        assert!(!AdvisoryError::classify("connection reset by peer").is_quota());
    }
}
