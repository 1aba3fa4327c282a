//! Per-author contribution statistics from `git log --numstat`.
//!
//! The pipeline runs strictly forward: [`stats::GitLog`] fetches the raw
//! history, [`stats::parse_log`] folds it into an [`model::AuthorTable`],
//! [`stats::aggregate()`] finalizes and orders the authors, and
//! [`stats::render()`] lays them out as a padded text table.

pub mod cli;
pub mod error;
pub mod model;
pub mod stats;

pub use error::{AuthorsError, Result};
