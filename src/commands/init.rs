//! Application configuration initialization command.
//!
//! Interactive setup wizard for first-time use: backend API settings and
//! table display preferences.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use clap::Args;
use std::error::Error;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<(), Box<dyn Error>> {
    if init_args.delete {
        Config::default().save()?;
        return Ok(());
    }

    // Run interactive configuration wizard
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
