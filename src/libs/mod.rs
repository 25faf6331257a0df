//! Core library modules for the fieldsy-admin application.
//!
//! Serves as the main entry point for all fieldsy-admin library components.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Record Pipeline**: Typed record schemas, filtering, pagination
//! - **Presentation**: Duration and status formatting, console tables
//! - **Data Management**: Export to CSV, JSON and Excel
//! - **Security**: Encrypted credential cache

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod export;
pub mod filter;
pub mod messages;
pub mod paginator;
pub mod records;
pub mod secret;
pub mod status;
pub mod view;
