//! Mapping from raw RDAP documents to the stable [`LookupReport`] schema.
//!
//! The normalizer is total: it starts from the all-placeholder default
//! report and overwrites fields as source data is found, so sparse or
//! oddly-shaped registry documents degrade to placeholders instead of
//! failing. Registries disagree on which fields they populate; partial
//! data is the expected case here, not an exceptional one.

use serde_json::Value;

use crate::types::{
    CidrBlock, ContactEntity, EntityObject, Event, IpNetworkDocument, Link, LookupReport, Remark,
    NA, NOT_PROVIDED,
};

/// Normalize one raw registry document into a [`LookupReport`].
///
/// Pure function of its input; never fails. Entities keep their document
/// order.
#[must_use]
pub fn normalize(document: &IpNetworkDocument) -> LookupReport {
    let mut report = LookupReport::default();

    let range = address_range(document);
    report.network.range.clone_from(&range);
    report.network.net_range = range;
    report.network.source_registry = registry_label(document.port43.as_deref());
    if let Some(cidrs) = &document.cidr0_cidrs {
        report.network.cidr = render_cidrs(cidrs);
    }
    overwrite_if_present(&mut report.network.name, document.name.as_ref());
    overwrite_if_present(&mut report.network.handle, document.handle.as_ref());
    overwrite_if_present(&mut report.network.net_type, document.net_type.as_ref());

    let (registration, last_changed) = event_dates(&document.events);
    report.dates.registration = registration;
    report.dates.last_changed = last_changed;

    report.description = first_remark_line(&document.remarks);

    report.links.self_link = first_link_href(&document.links);
    overwrite_if_present(&mut report.links.port43_whois, document.port43.as_ref());

    report.entities = document.entities.iter().map(normalize_entity).collect();

    report
}

fn normalize_entity(raw: &EntityObject) -> ContactEntity {
    let mut entity = ContactEntity::default();

    if let Some(handle) = &raw.handle {
        entity.handle.clone_from(handle);
        // The legacy schema exposes the handle twice.
        entity.kind.clone_from(handle);
    }
    entity.roles.clone_from(&raw.roles);
    entity.self_link = first_link_href(&raw.links);

    if let Some(card) = &raw.vcard_array {
        apply_contact_card(card, &mut entity);
    }

    let (registration, last_changed) = event_dates(&raw.events);
    if let Some(date) = registration {
        entity.registration = date;
    }
    if let Some(date) = last_changed {
        entity.last_changed = date;
    }

    entity.remarks = first_remark_line(&raw.remarks);

    entity
}

/// Scan the contact card's property list and dispatch on the property name.
///
/// The card is a two-element container whose second element holds
/// `[property, parameters, value-type, value]` tuples. Malformed entries
/// and unknown property names are skipped.
fn apply_contact_card(card: &Value, entity: &mut ContactEntity) {
    let Some(properties) = card.get(1).and_then(Value::as_array) else {
        return;
    };

    for property in properties {
        let Some(entry) = property.as_array() else {
            continue;
        };
        let (Some(name), Some(value)) = (entry.first().and_then(Value::as_str), entry.get(3))
        else {
            continue;
        };
        match name {
            // Last occurrence wins when repeated.
            "fn" => {
                if let Some(text) = value.as_str() {
                    entity.full_name = text.to_string();
                }
            }
            "email" => {
                if let Some(text) = value.as_str() {
                    entity.email.push(text.to_string());
                }
            }
            "tel" => {
                if let Some(text) = value.as_str() {
                    entity.telephone.push(text.to_string());
                }
            }
            "adr" => entity.address = join_address(value),
            _ => {}
        }
    }
}

/// Join the non-empty components of an `adr` value into one string.
fn join_address(value: &Value) -> String {
    match value {
        Value::Array(components) => components
            .iter()
            .filter_map(Value::as_str)
            .filter(|component| !component.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::String(text) => text.clone(),
        _ => String::new(),
    }
}

fn address_range(document: &IpNetworkDocument) -> String {
    format!(
        "{} - {}",
        document.start_address.as_deref().unwrap_or(NA),
        document.end_address.as_deref().unwrap_or(NA)
    )
}

/// Second dot-separated label of the whois hostname, upper-cased
/// (`whois.arin.net` -> `ARIN`). Kept verbatim from the observed behavior
/// of the legacy schema; hostnames without a second label yield `N/A`.
fn registry_label(port43: Option<&str>) -> String {
    port43
        .and_then(|host| host.split('.').nth(1))
        .map_or_else(|| NA.to_string(), str::to_uppercase)
}

fn render_cidrs(cidrs: &[CidrBlock]) -> String {
    cidrs
        .iter()
        .map(|cidr| {
            let prefix = cidr
                .v4prefix
                .as_deref()
                .or(cidr.v6prefix.as_deref())
                .unwrap_or(NA);
            cidr.length
                .map_or_else(|| format!("{prefix}/{NA}"), |length| format!("{prefix}/{length}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// First description line of the first remark, or the placeholder.
fn first_remark_line(remarks: &[Remark]) -> String {
    remarks
        .first()
        .and_then(|remark| remark.description.first())
        .map_or_else(|| NOT_PROVIDED.to_string(), Clone::clone)
}

fn first_link_href(links: &[Link]) -> String {
    links
        .first()
        .and_then(|link| link.href.as_ref())
        .map_or_else(|| NOT_PROVIDED.to_string(), Clone::clone)
}

/// Pull the registration and last-changed timestamps out of an event list.
/// Unrecognized action tags are ignored.
fn event_dates(events: &[Event]) -> (Option<String>, Option<String>) {
    let mut registration = None;
    let mut last_changed = None;
    for event in events {
        match event.event_action.as_deref() {
            Some("registration") => registration.clone_from(&event.event_date),
            Some("last changed") => last_changed.clone_from(&event.event_date),
            _ => {}
        }
    }
    (registration, last_changed)
}

fn overwrite_if_present(field: &mut String, value: Option<&String>) {
    if let Some(value) = value {
        field.clone_from(value);
    }
}
