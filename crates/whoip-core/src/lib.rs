//! Core types and normalization logic for whoip RDAP lookups.
//!
//! This crate provides the foundational pieces shared across the whoip
//! workspace:
//!
//! - **Types**: lenient raw RDAP document types and the stable
//!   [`LookupReport`] output schema
//! - **Normalization**: [`normalize`], the total mapping from registry JSON
//!   to the output schema
//! - **Errors**: lookup error handling with [`RdapError`]

#![doc(html_root_url = "https://docs.rs/whoip-core/0.1.0")]

mod error;
mod normalize;
pub mod types;

pub use error::{RdapError, Result};
pub use normalize::normalize;
pub use types::*;
