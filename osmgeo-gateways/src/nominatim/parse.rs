//! Pick human readable fields out of a [`Record`].
//!
//! Each group of names is a fixed priority order: the first
//! name that is present wins and the others are ignored.

use itertools::Itertools;
use osmgeo_entities::place::{GeocodedPlace, PLACEHOLDER};

use super::record::{Address, Record};

// https://help.openstreetmap.org/questions/17072
const STREET: &[&str] = &["road", "pedestrian", "footway", "cycleway"];
const HOUSE_NUMBER: &[&str] = &["house_number"];

// https://wiki.openstreetmap.org/wiki/Key:place
const DISTRICT: &[&str] = &["borough", "suburb", "quarter", "neighbourhood"];
const SETTLEMENT: &[&str] = &["city", "town", "village", "hamlet"];
const REGION: &[&str] = &["state", "region", "province", "district"];
const COUNTRY: &[&str] = &["country"];

fn collect<'a>(address: &'a Address, groups: &[&[&str]]) -> Option<Vec<&'a str>> {
    let items: Vec<_> = groups
        .iter()
        .filter_map(|names| address.first_of(names))
        .collect();
    (!items.is_empty()).then_some(items)
}

fn collect_owned(address: &Address, groups: &[&[&str]]) -> Option<Vec<String>> {
    collect(address, groups).map(|items| items.into_iter().map(ToOwned::to_owned).collect())
}

/// Street and house number joined by a space.
pub fn parse_address(record: &Record) -> Option<String> {
    collect(&record.address, &[STREET, HOUSE_NUMBER]).map(|items| items.join(" "))
}

/// District and settlement.
pub fn parse_city(record: &Record) -> Option<Vec<String>> {
    collect_owned(&record.address, &[DISTRICT, SETTLEMENT])
}

/// Region and country.
pub fn parse_region(record: &Record) -> Option<Vec<String>> {
    collect_owned(&record.address, &[REGION, COUNTRY])
}

pub fn parse_title(record: &Record) -> String {
    let address = &record.address;
    let named_by = |key: &Option<String>| key.as_deref().and_then(|key| address.get(key));
    named_by(&record.kind)
        .or_else(|| named_by(&record.class))
        .map(ToOwned::to_owned)
        .or_else(|| parse_address(record))
        .or_else(|| record.display_name.as_deref().map(leading_display_name))
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}

// A leading house number is kept together with the street that follows.
// Only decimal digits count, fractions like "½" are names of their own.
fn leading_display_name(display_name: &str) -> String {
    let names: Vec<_> = display_name.split(", ").collect();
    let end = if is_number(names[0]) { 2 } else { 1 };
    names.into_iter().take(end).join(", ")
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Address, city and region without the leading parts
/// that are already contained in the title.
pub fn parse_description(record: &Record) -> String {
    let mut items = Vec::new();
    items.extend(parse_address(record));
    items.extend(parse_city(record).into_iter().flatten());
    items.extend(parse_region(record).into_iter().flatten());
    let title = parse_title(record);
    let redundant = items
        .iter()
        .take_while(|item| title.starts_with(item.as_str()))
        .count();
    if redundant == items.len() {
        return PLACEHOLDER.to_owned();
    }
    items[redundant..].join(", ")
}

pub fn parse_place(record: &Record) -> GeocodedPlace {
    GeocodedPlace {
        title: parse_title(record),
        description: parse_description(record),
        x: record.lon,
        y: record.lat,
    }
}
