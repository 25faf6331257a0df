use crate::api::{Session, MAX_RETRY_COUNT};
use crate::libs::config::ApiConfig;
use crate::libs::messages::Message;
use crate::libs::records::{Booking, Claim, Field, Paginated, Payment, Review, User};
use crate::libs::secret::Secret;
use crate::msg_error_anyhow;
use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;

const TOKEN_FILE: &str = ".fieldsy_token";
const SECRET_FILE: &str = ".fieldsy_secret";

const LOGIN_URL: &str = "auth/admin/login";
const BOOKINGS_URL: &str = "admin/bookings";
const FIELDS_URL: &str = "admin/fields";
const USERS_URL: &str = "admin/users";
const CLAIMS_URL: &str = "admin/claims";
const PAYMENTS_URL: &str = "admin/payments";
const REVIEWS_URL: &str = "admin/reviews";

/// Page size used when walking every backend page before client-side filtering.
const FETCH_ALL_LIMIT: u64 = 200;

#[derive(Serialize)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

/// HTTP client for the Fieldsy marketplace backend.
///
/// All listing endpoints share the same shape: a GET with `page`/`limit`
/// query parameters returning a [`Paginated`] envelope. A 401 drops the
/// cached token and retries the request with a fresh login, up to the shared
/// retry limit.
pub struct Fieldsy {
    client: Client,
    config: ApiConfig,
    secret: Secret,
    password: Option<String>,
    retries: i32,
}

impl Fieldsy {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            secret: Secret::new(SECRET_FILE, &Message::PromptAdminPassword.to_string()),
            password: None,
            retries: 0,
        }
    }

    async fn get_page<T: DeserializeOwned>(&mut self, endpoint: &str, page: u64, limit: u64) -> Result<Paginated<T>, Box<dyn Error>> {
        loop {
            let token = self.get_token().await?;
            let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), endpoint);
            let res = self
                .client
                .get(&url)
                .bearer_auth(&token)
                .query(&[("page", page), ("limit", limit)])
                .send()
                .await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    self.delete_token()?;
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    self.retries += 1;
                    continue;
                }
                status if status.is_success() => {
                    let body = res.text().await?;
                    let envelope: Paginated<T> = serde_json::from_str(&body)
                        .map_err(|_| msg_error_anyhow!(Message::ApiUnexpectedResponse(endpoint.to_string())))?;
                    return Ok(envelope);
                }
                status => {
                    return Err(msg_error_anyhow!(Message::ApiRequestFailed(endpoint.to_string(), status.to_string())).into());
                }
            }
        }
    }

    async fn get_all<T: DeserializeOwned>(&mut self, endpoint: &str) -> Result<Vec<T>, Box<dyn Error>> {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let envelope = self.get_page::<T>(endpoint, page, FETCH_ALL_LIMIT).await?;
            let pages = envelope.pages.max(1);
            items.extend(envelope.items);
            if page >= pages {
                break;
            }
            page += 1;
        }
        Ok(items)
    }

    pub async fn bookings(&mut self, page: u64, limit: u64) -> Result<Paginated<Booking>, Box<dyn Error>> {
        self.get_page(BOOKINGS_URL, page, limit).await
    }

    pub async fn all_bookings(&mut self) -> Result<Vec<Booking>, Box<dyn Error>> {
        self.get_all(BOOKINGS_URL).await
    }

    pub async fn fields(&mut self, page: u64, limit: u64) -> Result<Paginated<Field>, Box<dyn Error>> {
        self.get_page(FIELDS_URL, page, limit).await
    }

    pub async fn all_fields(&mut self) -> Result<Vec<Field>, Box<dyn Error>> {
        self.get_all(FIELDS_URL).await
    }

    pub async fn users(&mut self, page: u64, limit: u64) -> Result<Paginated<User>, Box<dyn Error>> {
        self.get_page(USERS_URL, page, limit).await
    }

    pub async fn all_users(&mut self) -> Result<Vec<User>, Box<dyn Error>> {
        self.get_all(USERS_URL).await
    }

    pub async fn claims(&mut self, page: u64, limit: u64) -> Result<Paginated<Claim>, Box<dyn Error>> {
        self.get_page(CLAIMS_URL, page, limit).await
    }

    pub async fn all_claims(&mut self) -> Result<Vec<Claim>, Box<dyn Error>> {
        self.get_all(CLAIMS_URL).await
    }

    pub async fn payments(&mut self, page: u64, limit: u64) -> Result<Paginated<Payment>, Box<dyn Error>> {
        self.get_page(PAYMENTS_URL, page, limit).await
    }

    pub async fn all_payments(&mut self) -> Result<Vec<Payment>, Box<dyn Error>> {
        self.get_all(PAYMENTS_URL).await
    }

    pub async fn reviews(&mut self, page: u64, limit: u64) -> Result<Paginated<Review>, Box<dyn Error>> {
        self.get_page(REVIEWS_URL, page, limit).await
    }

    pub async fn all_reviews(&mut self) -> Result<Vec<Review>, Box<dyn Error>> {
        self.get_all(REVIEWS_URL).await
    }

    /// Drops the cached token and the encrypted password cache.
    pub fn forget_session(&self) -> Result<()> {
        self.delete_token()?;
        self.secret.forget()?;
        Ok(())
    }
}

impl Session for Fieldsy {
    async fn login(&self) -> Result<String> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), LOGIN_URL);
        let credentials = LoginCredentials {
            email: self.config.admin_email.clone(),
            password: self.password.clone().unwrap_or_default(),
        };

        let res = self.client.post(url).json(&credentials).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(msg_error_anyhow!(Message::ApiRequestFailed(LOGIN_URL.to_string(), status.to_string())));
        }

        let body = res.text().await?;
        let auth: AuthResponse =
            serde_json::from_str(&body).map_err(|_| msg_error_anyhow!(Message::ApiUnexpectedResponse(LOGIN_URL.to_string())))?;
        Ok(auth.token)
    }

    fn set_credentials(&mut self, password: &str) -> Result<()> {
        self.password = Some(password.to_owned());
        Ok(())
    }

    fn token_file(&self) -> &str {
        TOKEN_FILE
    }

    fn secret(&self) -> Secret {
        self.secret.clone()
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}
