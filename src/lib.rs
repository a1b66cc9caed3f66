//! tabctl - Tableau Server site automation from the command line
//!
//! A typed client for the Tableau REST API plus the command handlers built on
//! it: paged listings, cross-referenced reports, extract refresh and flow run
//! jobs with retry, and small write operations (owners, favorites, publish).

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod tableau;
pub mod ui;

pub use error::{Result, TabError};
pub use tableau::TabClient;
