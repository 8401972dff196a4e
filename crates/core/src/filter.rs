//! Filter predicate builder for catalog list queries.
//!
//! The UI sends a sparse set of optional filter values. Each recognized key
//! that is present and not the `"all"` sentinel contributes exactly one
//! conjunctive predicate; everything else contributes nothing. The output is
//! a closed, typed predicate set -- the repository layer turns it into SQL
//! without ever interpolating user input into the query text.

use crate::error::CoreError;
use crate::types::DbId;

/// Reserved filter value meaning "apply no constraint for this key".
pub const FILTER_ALL: &str = "all";

/// A bindable predicate value.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Id(DbId),
    Text(String),
}

/// A single filter condition. Column names are fixed at compile time; only
/// the bound value comes from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Scalar equality (`column = $n`).
    Eq { column: &'static str, value: Term },
    /// Array membership (`$n = ANY(column)`), used for multi-valued
    /// attributes like `season`.
    Contains { column: &'static str, value: String },
}

/// The recognized filter keys for the perfume catalog, as delivered by the
/// query string. Unrecognized keys are rejected at the HTTP layer via
/// `deny_unknown_fields`, so this set is closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub gender: Option<String>,
    pub brand_id: Option<String>,
    pub concentration_id: Option<String>,
    pub season: Option<String>,
    pub family_id: Option<String>,
}

impl FilterSelection {
    /// Reduce the selection to its predicate set.
    ///
    /// Absent values and the [`FILTER_ALL`] sentinel are skipped. Foreign-key
    /// filters must parse as integers; garbage is a validation error rather
    /// than a silently dropped filter.
    pub fn predicates(&self) -> Result<Vec<Predicate>, CoreError> {
        let mut predicates = Vec::new();

        if let Some(gender) = active(&self.gender) {
            predicates.push(Predicate::Eq {
                column: "gender",
                value: Term::Text(gender.to_string()),
            });
        }
        if let Some(raw) = active(&self.brand_id) {
            predicates.push(Predicate::Eq {
                column: "brand_id",
                value: Term::Id(parse_id("brand_id", raw)?),
            });
        }
        if let Some(raw) = active(&self.concentration_id) {
            predicates.push(Predicate::Eq {
                column: "concentration_id",
                value: Term::Id(parse_id("concentration_id", raw)?),
            });
        }
        if let Some(season) = active(&self.season) {
            predicates.push(Predicate::Contains {
                column: "season",
                value: season.to_string(),
            });
        }
        if let Some(raw) = active(&self.family_id) {
            predicates.push(Predicate::Eq {
                column: "family_id",
                value: Term::Id(parse_id("family_id", raw)?),
            });
        }

        Ok(predicates)
    }
}

/// Return the value if it is present and not the sentinel.
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(FILTER_ALL))
}

fn parse_id(key: &str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("{key} must be an integer id, got '{raw}'")))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
