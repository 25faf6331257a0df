//! Display implementation for fieldsy-admin application messages.
//!
//! All user-facing text lives in this one match statement, keeping wording
//! consistent and making every message variant's formatting explicit.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigApiMissing => "Backend API is not configured. Run 'fieldsy-admin init' first.".to_string(),
            Message::ConfigModuleApi => "Backend API settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Backend API base URL".to_string(),
            Message::PromptAdminEmail => "Admin account email".to_string(),
            Message::PromptPerPage => "Rows per page".to_string(),
            Message::PromptPageWindow => "Page numbers shown in the pagination footer".to_string(),
            Message::PromptAdminPassword => "Enter your Fieldsy admin password".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::LoginSucceeded(email) => format!("Logged in as {}", email),
            Message::LoggedOut => "Logged out".to_string(),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),

            // === API MESSAGES ===
            Message::ApiRequestFailed(endpoint, status) => format!("Request to '{}' failed with status {}", endpoint, status),
            Message::ApiUnexpectedResponse(endpoint) => format!("Unexpected response shape from '{}'", endpoint),

            // === LISTING MESSAGES ===
            Message::NoRecordsFound(kind) => format!("No {} found for the given filters.", kind),
            Message::FilteredRecords(kept, fetched) => format!("{} of {} records match the filters.", kept, fetched),
            Message::PageOf(current, total) => format!("Page {} of {}", current, total),
            Message::UnknownDateRange(raw) => {
                format!("Unknown date range '{}'. Expected: All, Today, This Week, This Month or Last Month.", raw)
            }
            Message::UnknownDogsRange(raw) => format!("Unknown dogs range '{}'. Expected: All, 1-5 or 6+.", raw),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::NothingToExport(kind) => format!("No {} to export for the given filters.", kind),
        };
        write!(f, "{}", text)
    }
}
