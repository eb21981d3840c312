//! # Error taxonomy for repository calls
//!
//! Three categories, matching how failures are surfaced to the user:
//!
//! - [`ApiError::NotAuthenticated`] — client-side pre-flight failure; raised
//!   before any request when no session is stored.
//! - [`ApiError::Server`] — the backend answered with an error body; its
//!   `message` field is carried verbatim.
//! - [`ApiError::Network`] — transport-level or malformed-response failure
//!   with no usable server message; displays as a generic message.
//!
//! Views convert every variant into a transient notification; none of them is
//! allowed to crash a view or clear already-loaded data.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No session is stored; the request was never issued.
    #[error("Please login to continue")]
    NotAuthenticated,

    /// The backend reported an error; message surfaced verbatim.
    #[error("{0}")]
    Server(String),

    /// Transport failure or unusable response.
    #[error("An error occurred. Please try again.")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApiError::NotAuthenticated.to_string(),
            "Please login to continue"
        );
        assert_eq!(
            ApiError::Server("Genre already exists".to_string()).to_string(),
            "Genre already exists"
        );
    }
}
