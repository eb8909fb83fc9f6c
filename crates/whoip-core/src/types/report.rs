use serde::{Deserialize, Serialize};

/// Placeholder for string fields the registry did not provide
pub const NOT_PROVIDED: &str = "*not provided*";

/// Placeholder for address-range and CIDR fields the registry did not provide
pub const NA: &str = "N/A";

/// The stable, caller-facing result of one lookup.
///
/// Every field is always present: absent source data is represented by
/// [`NOT_PROVIDED`], [`NA`], `null` dates, or empty sequences, never by a
/// missing key. [`Default`] produces the all-placeholder report that the
/// normalizer selectively overwrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupReport {
    pub network: NetworkSummary,
    pub dates: DateSummary,
    /// First free-text remark attached to the network
    pub description: String,
    pub links: LinkSummary,
    /// Registered contacts, in registry order
    pub entities: Vec<ContactEntity>,
}

impl Default for LookupReport {
    fn default() -> Self {
        Self {
            network: NetworkSummary::default(),
            dates: DateSummary::default(),
            description: NOT_PROVIDED.to_string(),
            links: LinkSummary::default(),
            entities: Vec::new(),
        }
    }
}

/// The network block portion of a [`LookupReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// `"<start> - <end>"` address range
    pub range: String,

    /// RIR label derived from the whois hostname (e.g. `ARIN`)
    pub source_registry: String,

    /// Same range rendered under the legacy key
    pub net_range: String,

    /// Comma-joined `prefix/length` CIDR blocks
    pub cidr: String,

    pub name: String,
    pub handle: String,

    /// No RDAP source path exists for this field; always the placeholder
    pub parent: String,

    pub net_type: String,

    /// No RDAP source path exists for this field; always the placeholder
    pub origin_as: String,
}

impl Default for NetworkSummary {
    fn default() -> Self {
        Self {
            range: format!("{NA} - {NA}"),
            source_registry: NA.to_string(),
            net_range: format!("{NA} - {NA}"),
            cidr: NA.to_string(),
            name: NOT_PROVIDED.to_string(),
            handle: NOT_PROVIDED.to_string(),
            parent: NOT_PROVIDED.to_string(),
            net_type: NOT_PROVIDED.to_string(),
            origin_as: NOT_PROVIDED.to_string(),
        }
    }
}

/// Registration and last-modification timestamps.
///
/// Unlike the string fields these default to `null`, not a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSummary {
    pub registration: Option<String>,
    pub last_changed: Option<String>,
}

/// Link fields of a [`LookupReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSummary {
    /// Canonical self-link of the network record
    #[serde(rename = "self")]
    pub self_link: String,

    /// No RDAP source path exists for this field; always the placeholder
    pub related: String,

    /// Legacy whois server hostname
    pub port43_whois: String,
}

impl Default for LinkSummary {
    fn default() -> Self {
        Self {
            self_link: NOT_PROVIDED.to_string(),
            related: NOT_PROVIDED.to_string(),
            port43_whois: NOT_PROVIDED.to_string(),
        }
    }
}

/// One registered contact, flattened from the RDAP entity and its vcard.
///
/// Owned by its [`LookupReport`]; built fresh on every lookup and never
/// shared between results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntity {
    /// Mirrors the handle, under the legacy key
    pub kind: String,

    /// Display name from the contact card (`fn` property)
    pub full_name: String,

    pub handle: String,

    /// All `email` card properties, in card order
    pub email: Vec<String>,

    /// All `tel` card properties, in card order
    pub telephone: Vec<String>,

    /// Postal address, joined from the non-empty `adr` components
    pub address: String,

    pub roles: Vec<String>,

    /// Entity-level dates default to the placeholder string, not `null`
    pub registration: String,
    pub last_changed: String,

    pub remarks: String,

    #[serde(rename = "self")]
    pub self_link: String,

    /// No RDAP source path exists for this field; always the placeholder
    pub port43_whois: String,
}

impl Default for ContactEntity {
    fn default() -> Self {
        Self {
            kind: NOT_PROVIDED.to_string(),
            full_name: NOT_PROVIDED.to_string(),
            handle: NOT_PROVIDED.to_string(),
            email: Vec::new(),
            telephone: Vec::new(),
            address: NOT_PROVIDED.to_string(),
            roles: Vec::new(),
            registration: NOT_PROVIDED.to_string(),
            last_changed: NOT_PROVIDED.to_string(),
            remarks: NOT_PROVIDED.to_string(),
            self_link: NOT_PROVIDED.to_string(),
            port43_whois: NOT_PROVIDED.to_string(),
        }
    }
}
