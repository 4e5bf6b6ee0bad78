use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use snafu::Snafu;

use crate::PodSummary;

/// The field pod summaries are ordered by.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SortKey {
    Name,
    Age,
    Restarts,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Restarts => "restarts",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "restarts" => Ok(Self::Restarts),
            _ => Err(ParseSortKeyError::InvalidSortKey { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseSortKeyError {
    #[snafu(display(
        r#"invalid sort option. Valid options are "name", "age", or "restarts""#
    ))]
    InvalidSortKey { value: String },
}

/// Whether pod summaries are ordered from the smallest key or the largest.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    #[inline]
    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(ParseSortDirectionError::InvalidSortDirection { value: value.to_string() }),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ParseSortDirectionError {
    #[snafu(display(r#"invalid sort direction. Valid options are "asc" or "desc""#))]
    InvalidSortDirection { value: String },
}

/// Orders `pods` in place by `key` and `direction`.
///
/// Ages are measured against `now`, so ascending age puts the most recently
/// created pod first. The sort is stable in both directions: pods comparing
/// equal keep their relative input order.
pub fn sort_pods(
    pods: &mut [PodSummary],
    key: SortKey,
    direction: SortDirection,
    now: DateTime<Utc>,
) {
    match key {
        SortKey::Name => pods.sort_by(|a, b| direction.apply(a.name.cmp(&b.name))),
        SortKey::Age => pods.sort_by(|a, b| direction.apply(a.age(now).cmp(&b.age(now)))),
        SortKey::Restarts => pods.sort_by(|a, b| direction.apply(a.restarts.cmp(&b.restarts))),
    }
}
