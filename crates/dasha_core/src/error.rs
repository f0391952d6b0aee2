//! Error types for dasha timeline calculations.

/// Errors from dasha timeline construction and lookup.
///
/// A query instant outside the resolved cycle is not an error; lookups
/// report it as `None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum DashaError {
    /// Caller-supplied seed or parameter is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Duration or instant arithmetic produced a non-finite value.
    #[error("arithmetic anomaly: {0}")]
    ArithmeticAnomaly(&'static str),
    /// UTC date text could not be parsed or represented.
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DashaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for DashaError {
    fn from(e: std::io::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            DashaError::InvalidInput("fraction_remaining must be in (0, 1]").to_string(),
            "invalid input: fraction_remaining must be in (0, 1]"
        );
        assert_eq!(
            DashaError::ArithmeticAnomaly("non-finite end").to_string(),
            "arithmetic anomaly: non-finite end"
        );
    }

    #[test]
    fn io_error_maps_to_config() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(DashaError::from(io), DashaError::Config(_)));
    }
}
