//! Encrypted caching for the admin password.
//!
//! The backend only issues short-lived bearer tokens, so the CLI caches the
//! admin password between runs to re-authenticate without re-prompting. The
//! cached value is AES-256-CBC encrypted and base64-encoded before it touches
//! disk; the file lives in the application data directory.

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

// Obfuscation keys baked into the binary. This keeps the cached password out
// of casual reach on shared machines; it is not a substitute for OS keychains.
const SECRET_KEY: &[u8; 32] = b"fieldsy-admin-secret-cache-key-1";
const SECRET_IV: &[u8; 16] = b"fieldsy-admin-iv";

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    password: Option<String>,
    prompt: String,
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let secret_file_path = DataStorage::new().get_path(secret_name).unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            password: None,
            secret_file_path,
            prompt: prompt.to_owned(),
            key: SECRET_KEY.to_vec(),
            iv: SECRET_IV.to_vec(),
        }
    }

    fn set_password(&self, password: &str) -> Self {
        Self {
            password: Some(password.to_owned()),
            ..self.clone()
        }
    }

    /// Returns the cached password when one decrypts cleanly, else prompts.
    pub fn get_or_prompt(&self) -> Result<String> {
        if fs::metadata(&self.secret_file_path).is_ok() {
            if let Ok(password) = self.decrypt() {
                return Ok(password);
            }
        }
        self.prompt()
    }

    /// Prompts for a fresh password and re-encrypts the cache.
    pub fn prompt(&self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default()).with_prompt(&self.prompt).interact()?;
        self.set_password(&password).encrypt()?;
        Ok(password)
    }

    /// Removes the cached password, forcing a prompt next time.
    pub fn forget(&self) -> Result<()> {
        if self.secret_file_path.exists() {
            fs::remove_file(&self.secret_file_path)?;
        }
        Ok(())
    }

    fn encrypt(&self) -> Result<Self> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let password = self.password.clone().unwrap_or_default();
        let ciphertext = cipher.encrypt_vec(password.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        // Create directory if it doesn't exist
        if let Some(parent) = self.secret_file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;

        Ok(self.clone())
    }

    fn decrypt(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded)?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted_ciphertext = cipher.decrypt_vec(&ciphertext)?;
        let decrypted_password = String::from_utf8(decrypted_ciphertext)?;

        Ok(decrypted_password)
    }
}
