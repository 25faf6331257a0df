#[cfg(test)]
mod tests {
    use fieldsy_admin::libs::config::{ApiConfig, Config, DisplayConfig};
    use fieldsy_admin::libs::paginator::DEFAULT_PAGE_WINDOW;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
        admin_email: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://api.example.com/api/v1".to_string(),
                admin_email: "admin@example.com".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.api.is_none());
        assert!(config.display.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config.api, None);
        assert_eq!(config.display, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
                admin_email: ctx.admin_email.clone(),
            }),
            display: Some(DisplayConfig {
                per_page: 25,
                page_window: 7,
            }),
        };
        config.save().unwrap();
        let read_config = Config::read().unwrap();
        let api_config = read_config.api.unwrap();
        let display_config = read_config.display.unwrap();

        assert_eq!(api_config.api_url, ctx.api_url.clone());
        assert_eq!(api_config.admin_email, ctx.admin_email.clone());
        assert_eq!(display_config.per_page, 25);
        assert_eq!(display_config.page_window, 7);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_accessor_fails_when_unconfigured(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.api().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_display_accessor_falls_back_to_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        let display = config.display();
        assert_eq!(display.per_page, 10);
        assert_eq!(display.page_window, DEFAULT_PAGE_WINDOW);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_omitted_from_json(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
                admin_email: ctx.admin_email.clone(),
            }),
            display: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("api_url"));
        assert!(!json.contains("display"));
    }
}
