pub mod bookings;
pub mod claims;
pub mod export;
pub mod fields;
pub mod init;
pub mod login;
pub mod logout;
pub mod payments;
pub mod reviews;
pub mod users;

use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Authenticate against the backend and cache the session token")]
    Login,
    #[command(about = "Drop the cached session token and password")]
    Logout,
    #[command(about = "List bookings")]
    Bookings(bookings::BookingsArgs),
    #[command(about = "List fields")]
    Fields(fields::FieldsArgs),
    #[command(about = "List users")]
    Users(users::UsersArgs),
    #[command(about = "List field ownership claims")]
    Claims(claims::ClaimsArgs),
    #[command(about = "List payments")]
    Payments(payments::PaymentsArgs),
    #[command(about = "List reviews")]
    Reviews(reviews::ReviewsArgs),
    #[command(about = "Export listings to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<(), Box<dyn Error>> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
            Commands::Bookings(args) => bookings::cmd(args).await,
            Commands::Fields(args) => fields::cmd(args).await,
            Commands::Users(args) => users::cmd(args).await,
            Commands::Claims(args) => claims::cmd(args).await,
            Commands::Payments(args) => payments::cmd(args).await,
            Commands::Reviews(args) => reviews::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}
