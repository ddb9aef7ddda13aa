//! Shared building blocks for `pingsheet`.
//!
//! * **[`models`]**: the entries read from a workbook and the probe results derived from them.
//! * **[`columns`]**: pure header heuristics and address-cell splitting.
//! * **[`config`]**: run configuration and its coercion rules.

pub mod columns;
pub mod config;
pub mod models;
