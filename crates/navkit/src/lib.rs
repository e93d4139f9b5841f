//! Navkit library
//!
//! Compiles a static route tree into a role-filtered navigation menu and a
//! path-to-breadcrumb index, and keeps the selection, breadcrumb, and layout
//! state of the page chrome in sync with the URL.
//! The `navkit` binary drives it from the command line.

pub mod access;
pub mod config;
pub mod error;
pub mod layout;
pub mod locale;
pub mod menu;
pub mod models;
pub mod selection;
pub mod shell;
pub mod store;

pub use error::{NavError, NavResult};
