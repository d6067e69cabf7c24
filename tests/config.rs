#[cfg(test)]
mod tests {
    use std::fs;
    use taskbook::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_CURRENCY, DEFAULT_HIGHLIGHT_THRESHOLD};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> std::path::PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.currency, DEFAULT_CURRENCY);
        assert_eq!(config.highlight_threshold, DEFAULT_HIGHLIGHT_THRESHOLD);
        assert!(!config.renumber_on_delete);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(ctx: &mut ConfigTestContext) {
        let config = Config {
            currency: "€".to_string(),
            highlight_threshold: 250.0,
            renumber_on_delete: true,
        };

        config.save_to(&ctx.config_path()).unwrap();
        let loaded = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_uses_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{ "currency": "US$" }"#).unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(config.currency, "US$");
        assert_eq!(config.highlight_threshold, DEFAULT_HIGHLIGHT_THRESHOLD);
        assert!(!config.renumber_on_delete);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ not json").unwrap();

        let err = Config::read_from(&ctx.config_path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse configuration:"));
    }
}
