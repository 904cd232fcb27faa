//! Employability scoring for the student career portal.
//!
//! The [`scoring::EmployabilityCalculator`] maps a canonical
//! [`profile::StudentProfile`] to a [`scoring::ScoreResult`]. Raw documents
//! loaded from the portal's store go through [`profile::normalize_document`]
//! first so the calculator never chases field fallbacks.

pub mod config;
pub mod error;
pub mod profile;
pub mod scoring;
pub mod telemetry;
