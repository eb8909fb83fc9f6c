//! Raw RDAP document types and the normalized output schema.

mod document;
mod report;

pub use document::{CidrBlock, EntityObject, Event, IpNetworkDocument, Link, Remark};
pub use report::{
    ContactEntity, DateSummary, LinkSummary, LookupReport, NetworkSummary, NA, NOT_PROVIDED,
};
