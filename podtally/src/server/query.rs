use podtally_inventory::{SortDirection, SortKey};
use snafu::ResultExt;

use crate::server::error::{self, ApiError};

/// Query string of the list endpoint: `?sort=<key>&order=<direction>`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListQuery {
    /// Picks `sort` and `order` out of the raw query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sort" => &mut query.sort,
                "order" => &mut query.order,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Validates the query into a sort key and direction.
    ///
    /// Returns `None` when no sort key is given; `order` is then ignored
    /// entirely, even if it is not a valid direction. Empty values count as
    /// absent and the direction defaults to ascending.
    pub fn ordering(&self) -> Result<Option<(SortKey, SortDirection)>, ApiError> {
        let Some(sort) = non_empty(self.sort.as_deref()) else {
            return Ok(None);
        };
        let key = sort.parse::<SortKey>().context(error::InvalidSortKeySnafu)?;
        let direction = non_empty(self.order.as_deref())
            .map(str::parse::<SortDirection>)
            .transpose()
            .context(error::InvalidSortDirectionSnafu)?
            .unwrap_or_default();
        Ok(Some((key, direction)))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> { value.filter(|value| !value.is_empty()) }
