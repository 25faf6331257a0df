//! Forces a fresh authentication and caches the resulting session token.

use crate::api::{Fieldsy, Session};
use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use std::error::Error;

pub async fn cmd() -> Result<(), Box<dyn Error>> {
    let config = Config::read()?;
    let api = config.api()?.clone();

    let mut client = Fieldsy::new(&api);
    // Drop any stale token first so get_token performs a real login.
    client.delete_token()?;
    client.get_token().await?;

    msg_success!(Message::LoginSucceeded(api.admin_email));
    Ok(())
}
