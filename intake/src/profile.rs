//! Candidate profile: the seven intake fields and their captured values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the seven fixed intake fields. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateField {
    FullName,
    EmailAddress,
    PhoneNumber,
    YearsOfExperience,
    DesiredPositions,
    CurrentLocation,
    TechStack,
}

impl CandidateField {
    pub const ALL: [CandidateField; 7] = [
        Self::FullName,
        Self::EmailAddress,
        Self::PhoneNumber,
        Self::YearsOfExperience,
        Self::DesiredPositions,
        Self::CurrentLocation,
        Self::TechStack,
    ];

    /// Human-readable label, e.g. "Desired Position(s)".
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::EmailAddress => "Email Address",
            Self::PhoneNumber => "Phone Number",
            Self::YearsOfExperience => "Years of Experience",
            Self::DesiredPositions => "Desired Position(s)",
            Self::CurrentLocation => "Current Location",
            Self::TechStack => "Tech Stack",
        }
    }

    /// Form placeholder text, when the field has one.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::TechStack => Some("e.g., Python, Django, React, PostgreSQL"),
            _ => None,
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CandidateField {
    type Err = String;

    /// Accepts the label ("Email Address") or the wire name ("email_address"), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| {
                f.label().to_lowercase() == wanted
                    || f.label().to_lowercase().replace(['(', ')'], "").replace(' ', "_") == wanted
            })
            .ok_or_else(|| format!("unknown candidate field: {}", s))
    }
}

/// Captured candidate details. Fields are absent until filled; values are never empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateProfile {
    fields: BTreeMap<CandidateField, String>,
}

impl CandidateProfile {
    pub fn get(&self, field: CandidateField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn is_set(&self, field: CandidateField) -> bool {
        self.fields.contains_key(&field)
    }

    /// Sets `field` to the trimmed `value`, overwriting. Blank values are ignored.
    /// Returns whether the profile changed.
    pub fn set(&mut self, field: CandidateField, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.fields.insert(field, value.to_string()).as_deref() != Some(value)
    }

    /// Sets `field` only when it is not captured yet. Returns whether it was set.
    pub fn set_if_absent(&mut self, field: CandidateField, value: &str) -> bool {
        if self.is_set(field) {
            return false;
        }
        self.set(field, value)
    }

    /// Captured fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateField, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Fields still missing, in display order.
    pub fn missing(&self) -> Vec<CandidateField> {
        CandidateField::ALL
            .into_iter()
            .filter(|f| !self.is_set(*f))
            .collect()
    }

    pub fn filled_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_complete(&self) -> bool {
        self.fields.len() == CandidateField::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
