use thiserror::Error;

/// Result type alias for whoip operations
pub type Result<T> = std::result::Result<T, RdapError>;

/// Errors that can occur during an RDAP lookup
#[derive(Error, Debug)]
pub enum RdapError {
    /// Transport-level failure (DNS, connection refused, timeout, TLS).
    /// Displays the underlying failure's message unadorned so the caller
    /// can surface it directly.
    #[error("{0}")]
    Http(String),

    /// No registry endpoint returned an authoritative answer
    #[error("Unable to fetch information for IP {ip}")]
    Exhausted {
        /// The address the lookup was for
        ip: String,
    },

    /// Registry body could not be decoded as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
