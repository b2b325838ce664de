//! BlackTurtle API Library
//!
//! Read-only HTTP API over company, company financial and technology
//! records stored in PostgreSQL.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
