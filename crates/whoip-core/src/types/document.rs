use serde::Deserialize;
use serde_json::Value;

/// An RDAP IP network document as returned by a registry.
///
/// Registries differ in which fields they populate, so every field is
/// optional and defaults when absent. No field is trusted to exist; the
/// normalizer supplies placeholders for whatever is missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpNetworkDocument {
    /// Registry-assigned identifier for the network block
    #[serde(default)]
    pub handle: Option<String>,

    /// First address of the allocated range
    #[serde(default)]
    pub start_address: Option<String>,

    /// Last address of the allocated range
    #[serde(default)]
    pub end_address: Option<String>,

    /// Descriptive name of the allocation
    #[serde(default)]
    pub name: Option<String>,

    /// Network type (e.g. "DIRECT ALLOCATION", "ASSIGNED PA")
    #[serde(default, rename = "type")]
    pub net_type: Option<String>,

    /// Legacy whois server hostname (e.g. "whois.arin.net")
    #[serde(default)]
    pub port43: Option<String>,

    /// CIDR blocks from the cidr0 extension. Kept as an `Option` because
    /// an absent list and a present-but-empty list render differently.
    #[serde(default, rename = "cidr0_cidrs")]
    pub cidr0_cidrs: Option<Vec<CidrBlock>>,

    /// Free-text remarks attached to the network
    #[serde(default)]
    pub remarks: Vec<Remark>,

    /// Navigation links (first entry is the canonical self-link)
    #[serde(default)]
    pub links: Vec<Link>,

    /// Lifecycle events (registration, last changed, ...)
    #[serde(default)]
    pub events: Vec<Event>,

    /// Registered contacts, in registry order
    #[serde(default)]
    pub entities: Vec<EntityObject>,
}

/// One entry of the cidr0 CIDR list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CidrBlock {
    /// IPv4 prefix, when the block is a v4 allocation
    #[serde(default)]
    pub v4prefix: Option<String>,

    /// IPv6 prefix, when the block is a v6 allocation
    #[serde(default)]
    pub v6prefix: Option<String>,

    /// Prefix length in bits
    #[serde(default)]
    pub length: Option<u32>,
}

/// A free-text remark: a title plus one or more description lines
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Remark {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Vec<String>,
}

/// A navigation link
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub rel: Option<String>,

    #[serde(default)]
    pub href: Option<String>,
}

/// A lifecycle event with its action tag and timestamp
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub event_action: Option<String>,

    #[serde(default)]
    pub event_date: Option<String>,
}

/// A registered contact (person or organization) attached to a network.
///
/// The contact card (`vcardArray`) is a positional array-of-arrays encoding
/// whose entries vary in shape between registries, so it is kept as a raw
/// [`Value`] and scanned defensively during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityObject {
    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub vcard_array: Option<Value>,

    #[serde(default)]
    pub events: Vec<Event>,

    #[serde(default)]
    pub remarks: Vec<Remark>,

    #[serde(default)]
    pub links: Vec<Link>,
}
