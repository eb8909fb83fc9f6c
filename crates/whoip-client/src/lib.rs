//! RDAP client for whoip.
//!
//! This crate provides [`RdapClient`], which resolves an IP address against
//! the five RIR RDAP services with primary-then-fallback probing and returns
//! the normalized lookup result.

#![doc(html_root_url = "https://docs.rs/whoip-client/0.1.0")]

mod client;
mod registry;

pub use client::{RdapClient, RdapClientBuilder};
pub use registry::{default_endpoints, RegistryEndpoint};
pub use whoip_core::{RdapError, Result};
