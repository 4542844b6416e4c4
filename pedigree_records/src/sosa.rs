// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Import of tab-separated Sosa pages.
//!
//! A Sosa page lists one ancestor per line with twelve tab-separated columns:
//!
//! | # | Column |
//! |---|---|
//! | 1 | Sosa number |
//! | 2 | Person (`"H "`/`"F "` gender prefix, then name) |
//! | 3–4 | Birth date, birth place |
//! | 5 | Spouse |
//! | 6–7 | Union date, union place |
//! | 8 | Children count |
//! | 9–11 | Death date, death place, age at death |
//! | 12 | Professions |
//!
//! Lines that do not start with a digit (headers, blank lines) are skipped. Short
//! lines are padded and overflow columns are folded into the professions column.
//!
//! ```
//! use pedigree_records::sosa::parse_page;
//!
//! let page = "Sosa\tPersonne\n1\tH Jean Martin\t1901\tParis\n2\tH Louis Martin\n";
//! let rows = parse_page(page);
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].gender.as_deref(), Some("H"));
//! assert_eq!(rows[1].generation, 1);
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::Serialize;

/// Number of tab-separated columns in a Sosa page row.
pub const COLUMN_COUNT: usize = 12;

/// One exported row of a Sosa page.
///
/// Serializes to the record shape consumed by [`normalize`](crate::normalize::normalize):
/// absent values become `null` and `children_count` stays numeric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SosaRecord {
    /// Sosa number.
    pub id: u64,
    /// Zero-based generation derived from the Sosa number.
    pub generation: u32,
    /// `"H"` or `"F"` when the person column carries a gender prefix.
    pub gender: Option<String>,
    /// Person name.
    pub name: String,
    /// Birth date.
    pub birth_date: Option<String>,
    /// Birth place.
    pub birth_place: Option<String>,
    /// Spouse.
    pub spouse: Option<String>,
    /// Union date.
    pub union_date: Option<String>,
    /// Union place.
    pub union_place: Option<String>,
    /// First number found in the children column.
    pub children_count: Option<u32>,
    /// Death date.
    pub death_date: Option<String>,
    /// Death place.
    pub death_place: Option<String>,
    /// Age at death.
    pub age_at_death: Option<String>,
    /// Professions.
    pub professions: Option<String>,
}

/// Zero-based generation of a Sosa number: `1` is generation `0`, `2..=3` are `1`,
/// `4..=7` are `2`, and so on.
pub fn generation_of(id: u64) -> u32 {
    (u64::BITS - id.leading_zeros()).saturating_sub(1)
}

/// Parse a whole page. Later rows win over earlier rows with the same Sosa number;
/// the result is sorted by Sosa number.
pub fn parse_page(text: &str) -> Vec<SosaRecord> {
    let mut rows: BTreeMap<u64, SosaRecord> = BTreeMap::new();
    for line in text.lines() {
        if let Some(row) = parse_line(line) {
            rows.insert(row.id, row);
        }
    }
    tracing::debug!(count = rows.len(), "parsed sosa page");
    rows.into_values().collect()
}

/// Parse one line, or `None` for lines that do not describe a person.
pub fn parse_line(line: &str) -> Option<SosaRecord> {
    let first = line.trim_start().chars().next()?;
    if !first.is_ascii_digit() {
        return None;
    }

    let line = line.trim_end_matches(['\n', '\r']);
    let mut parts: Vec<&str> = line.split('\t').collect();
    let id = parse_sosa(parts[0])?;

    let overflow = (parts.len() > COLUMN_COUNT)
        .then(|| parts.split_off(COLUMN_COUNT - 1).join(" "));
    parts.resize(COLUMN_COUNT, "");
    let professions = overflow.as_deref().unwrap_or(parts[COLUMN_COUNT - 1]);

    let (gender, name) = parse_person(parts[1]);
    Some(SosaRecord {
        id,
        generation: generation_of(id),
        gender,
        name,
        birth_date: non_empty(parts[2]),
        birth_place: non_empty(parts[3]),
        spouse: non_empty(parts[4]),
        union_date: non_empty(parts[5]),
        union_place: non_empty(parts[6]),
        children_count: parse_children(parts[7]),
        death_date: non_empty(parts[8]),
        death_place: non_empty(parts[9]),
        age_at_death: non_empty(parts[10]),
        professions: non_empty(professions),
    })
}

/// All ASCII digits of the column, read as one number. Zero is not a Sosa number.
fn parse_sosa(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    match digits.parse::<u64>() {
        Ok(id) => (id >= 1).then_some(id),
        Err(_) => {
            tracing::trace!(sosa = %digits, "dropping row with an out-of-range sosa number");
            None
        }
    }
}

fn parse_person(raw: &str) -> (Option<String>, String) {
    let cleaned = raw.trim();
    for marker in ["H", "F"] {
        if let Some(rest) = cleaned
            .strip_prefix(marker)
            .and_then(|rest| rest.strip_prefix(' '))
        {
            return (Some(marker.to_string()), rest.trim().to_string());
        }
    }
    (None, cleaned.to_string())
}

/// First run of ASCII digits in the column.
fn parse_children(raw: &str) -> Option<u32> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let tail = &raw[start..];
    let end = tail
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(tail.len());
    let digits = &tail[..end];
    let count = digits.parse().ok();
    if count.is_none() {
        tracing::trace!(children = digits, "ignoring out-of-range children count");
    }
    count
}

fn non_empty(raw: &str) -> Option<String> {
    let cleaned = raw.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
