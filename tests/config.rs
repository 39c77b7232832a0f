#[cfg(test)]
mod tests {
    use spesen::libs::config::{Config, API_TOKEN_ENV, API_URL_ENV, REPORTS_URL_ENV};
    use test_context::{test_context, TestContext};

    /// Clears every variable the config reads so each assertion starts
    /// from a known environment. Env vars are process-wide, so all config
    /// behavior is exercised from a single sequential test.
    struct ConfigTestContext;

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            std::env::remove_var(API_TOKEN_ENV);
            std::env::remove_var(API_URL_ENV);
            std::env::remove_var(REPORTS_URL_ENV);
            ConfigTestContext
        }

        fn teardown(self) {
            std::env::remove_var(API_TOKEN_ENV);
            std::env::remove_var(API_URL_ENV);
            std::env::remove_var(REPORTS_URL_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_reads_from_the_environment(_ctx: &mut ConfigTestContext) {
        // Without a token the config refuses to build, naming the variable
        let err = Config::read().unwrap_err();
        assert!(err.to_string().contains(API_TOKEN_ENV));

        // With only the token set, the public endpoints are used
        std::env::set_var(API_TOKEN_ENV, "secret-token");
        let config = Config::read().unwrap();
        assert_eq!(config.api_token, "secret-token");
        assert_eq!(config.api_url, "https://www.toggl.com/api/v8");
        assert_eq!(config.reports_url, "https://www.toggl.com/reports/api/v2");

        // URL overrides take effect, e.g. for pointing tests at a stub
        std::env::set_var(API_URL_ENV, "http://localhost:8080/api/v8");
        std::env::set_var(REPORTS_URL_ENV, "http://localhost:8080/reports/api/v2");
        let config = Config::read().unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/api/v8");
        assert_eq!(config.reports_url, "http://localhost:8080/reports/api/v2");
    }
}
