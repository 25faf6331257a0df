#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigApiMissing,
    ConfigModuleApi,
    ConfigModuleDisplay,
    PromptSelectModules,
    PromptApiUrl,
    PromptAdminEmail,
    PromptPerPage,
    PromptPageWindow,
    PromptAdminPassword,

    // === AUTHENTICATION MESSAGES ===
    LoginSucceeded(String), // admin email
    LoggedOut,
    WrongPassword(i32), // attempt limit

    // === API MESSAGES ===
    ApiRequestFailed(String, String), // endpoint, status
    ApiUnexpectedResponse(String),    // endpoint

    // === LISTING MESSAGES ===
    NoRecordsFound(String),         // kind
    FilteredRecords(usize, usize),  // kept, fetched
    PageOf(usize, usize),           // current page, total pages
    UnknownDateRange(String),
    UnknownDogsRange(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // output path
    NothingToExport(String), // kind
}
