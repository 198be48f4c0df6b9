use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before a simulation run starts.
///
/// The expansion loop itself cannot fail; everything here is a rejected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A configuration value violates a precondition of the simulator.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_field() {
        let e = Error::InvalidConfiguration("initial pressure must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("initial pressure"));
    }
}
