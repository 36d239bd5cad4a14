use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The identity of an ISO-style standard edition: series, part, and year.
///
/// The `full_id` is always derived from the other three fields, so an
/// identity can never disagree with its own rendering. Identities are
/// immutable once constructed; use [`StandardIdentity::new`] or parse the
/// `"ISO <series>-<part>:<year>"` form with [`str::parse`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IdentityFields")]
pub struct StandardIdentity {
    series: String,
    part: String,
    year: String,
    full_id: String,
}

impl StandardIdentity {
    /// Build an identity from its components.
    ///
    /// `series` and `part` must be non-empty digit strings of any length;
    /// `year` must be exactly four digits.
    pub fn new(
        series: impl Into<String>,
        part: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Self, TypeError> {
        let series = series.into();
        let part = part.into();
        let year = year.into();

        check_digits("series", &series)?;
        check_digits("part", &part)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidYear(year));
        }

        let full_id = format!("ISO {series}-{part}:{year}");
        Ok(Self {
            series,
            part,
            year,
            full_id,
        })
    }

    /// The series number, e.g. `"10993"`.
    pub fn series(&self) -> &str {
        &self.series
    }

    /// The part number within the series, e.g. `"18"`.
    pub fn part(&self) -> &str {
        &self.part
    }

    /// The four-digit publication year.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// The canonical `"ISO <series>-<part>:<year>"` rendering.
    pub fn full_id(&self) -> &str {
        &self.full_id
    }

    /// Returns `true` if both identities belong to the same series.
    pub fn same_series(&self, other: &Self) -> bool {
        self.series == other.series
    }

    /// Returns `true` if both identities name the same part of the same series.
    pub fn same_part(&self, other: &Self) -> bool {
        self.same_series(other) && self.part == other.part
    }
}

fn check_digits(field: &'static str, value: &str) -> Result<(), TypeError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TypeError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

impl FromStr for StandardIdentity {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeError::InvalidStandardId(s.to_string());

        let rest = s.trim().strip_prefix("ISO ").ok_or_else(invalid)?;
        let (series, rest) = rest.split_once('-').ok_or_else(invalid)?;
        let (part, year) = rest.split_once(':').ok_or_else(invalid)?;

        Self::new(series, part, year)
    }
}

impl fmt::Debug for StandardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StandardIdentity({})", self.full_id)
    }
}

impl fmt::Display for StandardIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_id)
    }
}

/// Wire form accepted on deserialization. `fullId` is recomputed, not trusted.
#[derive(Deserialize)]
struct IdentityFields {
    series: String,
    part: String,
    year: String,
}

impl TryFrom<IdentityFields> for StandardIdentity {
    type Error = TypeError;

    fn try_from(fields: IdentityFields) -> Result<Self, Self::Error> {
        Self::new(fields.series, fields.part, fields.year)
    }
}
