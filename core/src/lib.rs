//! # pingsheet core
//!
//! The probing pipeline: [`loader`] reads entries out of a workbook, the
//! [`dispatcher`] fans them out to a [`prober::Prober`], and [`summary`] and
//! [`export`] turn the ordered results into a verdict and a results workbook.

pub mod dispatcher;
pub mod error;
pub mod export;
pub mod loader;
pub mod prober;
pub mod summary;
