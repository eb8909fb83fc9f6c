//! The fixed RIR endpoint catalog.

/// The five RIR RDAP services, in probing order. The first entry is the
/// primary; the rest are fallbacks tried when the primary is not
/// authoritative. The order is fixed, not configurable.
const DEFAULT_ENDPOINTS: [(&str, &str); 5] = [
    ("ARIN", "https://rdap.arin.net/registry/ip/"),
    ("APNIC", "https://rdap.apnic.net/ip/"),
    ("RIPE", "https://rdap.ripe.net/ip/"),
    ("LACNIC", "https://rdap.lacnic.net/rdap/ip/"),
    ("AFRINIC", "https://rdap.afrinic.net/rdap/ip/"),
];

/// One RIR RDAP service: a display name and the URL prefix its IP lookup
/// endpoint lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEndpoint {
    /// Registry name (e.g. `ARIN`)
    pub name: String,

    /// URL prefix the address string is appended to, including the
    /// trailing slash
    pub url_prefix: String,
}

impl RegistryEndpoint {
    /// Create an endpoint entry
    #[must_use]
    pub fn new(name: impl Into<String>, url_prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_prefix: url_prefix.into(),
        }
    }

    /// The lookup URL for an address. The address is appended as-is; no
    /// validation or encoding is performed here.
    #[must_use]
    pub fn lookup_url(&self, ip: &str) -> String {
        format!("{}{}", self.url_prefix, ip)
    }
}

/// The built-in catalog, ARIN first.
#[must_use]
pub fn default_endpoints() -> Vec<RegistryEndpoint> {
    DEFAULT_ENDPOINTS
        .iter()
        .map(|(name, prefix)| RegistryEndpoint::new(*name, *prefix))
        .collect()
}
