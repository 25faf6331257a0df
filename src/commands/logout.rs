//! Drops the cached session token and the encrypted password cache.

use crate::api::Fieldsy;
use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use std::error::Error;

pub fn cmd() -> Result<(), Box<dyn Error>> {
    let config = Config::read()?;
    let api = config.api()?.clone();

    Fieldsy::new(&api).forget_session()?;

    msg_success!(Message::LoggedOut);
    Ok(())
}
