// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for normalized records: the canonical person and its display fields.

use alloc::string::String;
use serde::Serialize;

/// One of the eleven free-form display fields carried by a [`Person`].
///
/// Each field is resolved from the raw record through [`FIELD_KEYS`]; see
/// [`Field::keys`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    /// Display name.
    Name,
    /// Birth date, as written in the source.
    BirthDate,
    /// Birth place.
    BirthPlace,
    /// Spouse name.
    Spouse,
    /// Union (marriage) date.
    UnionDate,
    /// Union (marriage) place.
    UnionPlace,
    /// Number of children, kept as text.
    ChildrenCount,
    /// Death date.
    DeathDate,
    /// Death place.
    DeathPlace,
    /// Age at death.
    AgeAtDeath,
    /// Occupations.
    Professions,
}

/// Candidate source keys for every display field, in lookup order.
///
/// Each list holds the presentation label used by hand-edited exports, then the
/// `snake_case` key written by the Sosa exporter, then the `camelCase` key used by
/// web tooling. Lists that would repeat a key carry it once.
///
/// Rows are ordered like [`Field::ALL`].
pub static FIELD_KEYS: [(Field, &[&str]); 11] = [
    (Field::Name, &["Nom", "name"]),
    (
        Field::BirthDate,
        &["Date de naissance", "birth_date", "birthDate"],
    ),
    (
        Field::BirthPlace,
        &["Lieu de naissance", "birth_place", "birthPlace"],
    ),
    (Field::Spouse, &["Conjoint", "spouse"]),
    (Field::UnionDate, &["Date d'union", "union_date", "unionDate"]),
    (
        Field::UnionPlace,
        &["Lieu d'union", "union_place", "unionPlace"],
    ),
    (
        Field::ChildrenCount,
        &["Enfants", "children_count", "childrenCount"],
    ),
    (Field::DeathDate, &["Date de décès", "death_date", "deathDate"]),
    (
        Field::DeathPlace,
        &["Lieu de décès", "death_place", "deathPlace"],
    ),
    (
        Field::AgeAtDeath,
        &["Âge au décès", "age_at_death", "ageAtDeath"],
    ),
    (Field::Professions, &["Professions", "professions"]),
];

impl Field {
    /// All fields, in table order.
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::BirthDate,
        Self::BirthPlace,
        Self::Spouse,
        Self::UnionDate,
        Self::UnionPlace,
        Self::ChildrenCount,
        Self::DeathDate,
        Self::DeathPlace,
        Self::AgeAtDeath,
        Self::Professions,
    ];

    /// Candidate source keys for this field, in lookup order.
    pub fn keys(self) -> &'static [&'static str] {
        FIELD_KEYS[self as usize].1
    }
}

/// Canonical person record.
///
/// `id` is the Ahnentafel (Sosa) number: the parents of `k` are `2k` and `2k + 1`.
/// Display fields are never absent; a field with no matching source key is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Ahnentafel index, at least `1`.
    pub id: u64,
    /// Explicit generation number from the source, if any.
    pub generation: Option<u32>,
    /// Free-form gender marker, passed through unmodified.
    pub gender: Option<String>,
    /// Display name.
    pub name: String,
    /// Birth date.
    pub birth_date: String,
    /// Birth place.
    pub birth_place: String,
    /// Spouse name.
    pub spouse: String,
    /// Union date.
    pub union_date: String,
    /// Union place.
    pub union_place: String,
    /// Number of children, as text.
    pub children_count: String,
    /// Death date.
    pub death_date: String,
    /// Death place.
    pub death_place: String,
    /// Age at death.
    pub age_at_death: String,
    /// Occupations.
    pub professions: String,
}

impl Person {
    /// Create a person with the given identifier and empty display fields.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Returns the value of a display field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::BirthDate => &self.birth_date,
            Field::BirthPlace => &self.birth_place,
            Field::Spouse => &self.spouse,
            Field::UnionDate => &self.union_date,
            Field::UnionPlace => &self.union_place,
            Field::ChildrenCount => &self.children_count,
            Field::DeathDate => &self.death_date,
            Field::DeathPlace => &self.death_place,
            Field::AgeAtDeath => &self.age_at_death,
            Field::Professions => &self.professions,
        }
    }

    /// Mutable access to a display field.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::BirthDate => &mut self.birth_date,
            Field::BirthPlace => &mut self.birth_place,
            Field::Spouse => &mut self.spouse,
            Field::UnionDate => &mut self.union_date,
            Field::UnionPlace => &mut self.union_place,
            Field::ChildrenCount => &mut self.children_count,
            Field::DeathDate => &mut self.death_date,
            Field::DeathPlace => &mut self.death_place,
            Field::AgeAtDeath => &mut self.age_at_death,
            Field::Professions => &mut self.professions,
        }
    }

    /// Builder-style setter for a display field.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.field_mut(field) = value.into();
        self
    }
}
