//! SCHADS Award pay engine
//!
//! This crate prices shifts worked under the Social, Community, Home Care and
//! Disability Services Industry Award (MA000100): it splits worked hours into
//! pay categories, applies penalty multipliers and allowances from a
//! versioned rate table, adds GST, and returns an itemised, audited result.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
