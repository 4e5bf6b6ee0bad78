//! Pod inventory of a single Kubernetes namespace.
//!
//! [`PodQueryService`] reads pods through a [`PodCatalog`] and projects them
//! into [`PodSummary`] values, [`sort_pods`] orders summaries by a
//! [`SortKey`] and [`SortDirection`], and [`format_age`] renders the age of a
//! pod for humans.

mod age;
mod catalog;
pub mod error;
mod ext;
mod service;
mod sort;
mod summary;

#[cfg(test)]
mod testing;

pub use self::{
    age::{Clock, FixedClock, SystemClock, format_age, format_elapsed},
    catalog::PodCatalog,
    error::Error,
    ext::PodExt,
    service::PodQueryService,
    sort::{ParseSortDirectionError, ParseSortKeyError, SortDirection, SortKey, sort_pods},
    summary::PodSummary,
};
