//! # Fieldsy Admin - Marketplace Administration Console
//!
//! A command-line utility for administering the Fieldsy dog-field booking
//! marketplace through its remote REST backend.
//!
//! ## Features
//!
//! - **Listings**: Browse bookings, fields, users, claims, payments and reviews
//! - **Filtering**: Client-side search, status, date-bucket and numeric-bucket filters
//! - **Pagination**: Local slicing with an ellipsis-compressed page window display
//! - **Authentication**: Bearer-token login flow with cached, encrypted credentials
//! - **Data Export**: Export listings to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fieldsy_admin::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
