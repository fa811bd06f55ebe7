//! Countrysrv - Country dial-code catalog and picker core
//!
//! This library provides the data layer behind a country-selection
//! picker: a load-once catalog repository with search, dial-code and
//! ISO lookups, alphabetical sectioning, a jump index, flag synthesis,
//! and the selection boundary a GUI front end binds to. The binary
//! serves the same queries over an HTTP JSON API.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod picker;
pub mod services;
pub mod utils;
