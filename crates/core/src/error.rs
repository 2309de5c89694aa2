use crate::types::AdType;
use thiserror::Error;

pub type AdResult<T> = Result<T, AdError>;

#[derive(Error, Debug)]
pub enum AdError {
    /// The assigned sub-kind is not in the allowed set for the creative's
    /// concrete variant. The entity's prior state is unchanged.
    #[error("Sub-kind '{sub_kind}' is not valid for {ad_type}")]
    InvalidSubKind { ad_type: AdType, sub_kind: String },

    /// A campaign name exceeded the maximum length. No partial name is stored.
    #[error("Campaign name exceeds {max} characters (got {len})")]
    NameTooLong { len: usize, max: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_error_conversions() {
        let err: AdError = config::ConfigError::Message("boom".to_string()).into();
        assert!(matches!(err, AdError::Config(_)));

        let err: AdError = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, AdError::Io(_)));
    }
}
