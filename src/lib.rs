//! Tatawu - bilingual volunteer-coordination toolkit
//!
//! Tatawu is a CLI and library for the Haramain volunteer-coordination
//! platform: a public catalogue of volunteering opportunities plus an
//! admin back-office for approving volunteers and managing accounts, in
//! Arabic and English.
//!
//! ## Module Structure
//!
//! - `admin`: Session-gated back-office workflows
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `i18n`: Locale dictionaries and the translation resolver
//! - `model`: Domain records (opportunities, users, applications)
//! - `query`: Filtering, sorting and pagination over collections
//! - `report`: Localized rendering for CLI output
//! - `store`: Backend contract, the seeded mock store, durable client state

pub mod admin;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod model;
pub mod query;
pub mod report;
pub mod store;
