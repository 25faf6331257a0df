//! API client layer for the Fieldsy backend.
//!
//! There is one remote collaborator: the marketplace REST backend. Access is
//! authenticated with a bearer token obtained from the admin login endpoint;
//! the token is cached on disk between runs and the password needed to mint a
//! new one lives in the encrypted secret cache.
//!
//! The [`Session`] trait owns the token lifecycle: restore from cache, prompt
//! and authenticate when the cache is empty, retry a limited number of times
//! on bad credentials, persist on success.

use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::msg_error_anyhow;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

pub mod fieldsy;

pub use fieldsy::Fieldsy;

/// Maximum number of authentication retry attempts before giving up.
pub const MAX_RETRY_COUNT: i32 = 3;

/// Bearer-token session management for the backend client.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Performs authentication and returns a fresh bearer token.
    async fn login(&self) -> Result<String>;

    /// Stores the password used for the next authentication attempt.
    fn set_credentials(&mut self, password: &str) -> Result<()>;

    /// Filename of the token cache inside the application data directory.
    fn token_file(&self) -> &str;

    /// The secret manager holding the cached admin password.
    fn secret(&self) -> Secret;

    /// Current retry attempt count.
    fn retry(&self) -> i32;

    /// Increments the retry counter after a failed attempt.
    fn inc_retry(&mut self);

    /// Retrieves or establishes a valid bearer token.
    ///
    /// Restores the cached token when one exists; otherwise prompts for the
    /// password (forcing a fresh prompt on retries), authenticates, caches
    /// the new token and returns it. Gives up after [`MAX_RETRY_COUNT`]
    /// failed attempts.
    async fn get_token(&mut self) -> Result<String> {
        let token_file_path = DataStorage::new().get_path(self.token_file())?;

        if let Ok(token) = Self::read_token(&token_file_path) {
            return Ok(token);
        }

        loop {
            let password: String = match self.retry() > 0 {
                true => self.secret().prompt()?,         // Force new prompt on retry
                false => self.secret().get_or_prompt()?, // Use cache if available
            };

            self.set_credentials(&password)?;

            match self.login().await {
                Ok(token) => {
                    let _ = Self::write_token(&token_file_path, &token);
                    return Ok(token);
                }
                Err(_) => {
                    if self.retry() < MAX_RETRY_COUNT {
                        self.inc_retry();
                        continue;
                    }
                    break Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }

    /// Reads a cached token from disk.
    fn read_token(path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    /// Persists a token for future runs.
    fn write_token(path: &Path, token: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        file.write_all(token.as_bytes())?;
        Ok(())
    }

    /// Drops the cached token, forcing re-authentication on next use.
    fn delete_token(&self) -> Result<()> {
        let token_file_path = DataStorage::new().get_path(self.token_file())?;
        if token_file_path.exists() {
            fs::remove_file(token_file_path)?;
        }
        Ok(())
    }
}
