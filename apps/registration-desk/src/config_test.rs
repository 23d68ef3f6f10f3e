#[cfg(test)]
mod tests {
    use super::super::config::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::{NamedTempFile, tempdir};

    fn yaml_file(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        temp_env::with_vars_unset(["REGDESK__HOME_DIR", "REGDESK__DATABASE__IN_MEMORY"], || {
            let cfg = AppConfig::load_or_default(None).unwrap();
            assert_eq!(cfg, AppConfig::default());
            assert_eq!(cfg.home_dir, ".");
            assert_eq!(cfg.logging.console_level, "warn");
            assert!(!cfg.database.in_memory);
        });
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::load_or_default(Some(std::path::Path::new(
            "/nonexistent/regdesk.yaml",
        )))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn yaml_overrides_defaults() {
        let file = yaml_file(
            "home_dir: /srv/desk\ndatabase:\n  file: data/people.db\nlogging:\n  json: true\n",
        );
        temp_env::with_vars_unset(["REGDESK__HOME_DIR", "REGDESK__DATABASE__IN_MEMORY"], || {
            let cfg = AppConfig::load_or_default(Some(file.path())).unwrap();
            assert_eq!(cfg.home_dir, "/srv/desk");
            assert_eq!(cfg.database.file, PathBuf::from("data/people.db"));
            assert_eq!(cfg.database.busy_timeout_ms, 5_000);
            assert!(cfg.logging.json);
        });
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = yaml_file("database:\n  dsn: sqlite://x\n");
        temp_env::with_vars_unset(["REGDESK__HOME_DIR", "REGDESK__DATABASE__IN_MEMORY"], || {
            let err = AppConfig::load_or_default(Some(file.path())).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
        });
    }

    #[test]
    fn env_overrides_yaml() {
        let file = yaml_file("home_dir: /from/yaml\n");
        temp_env::with_vars(
            [
                ("REGDESK__HOME_DIR", Some("/from/env")),
                ("REGDESK__DATABASE__IN_MEMORY", Some("true")),
            ],
            || {
                let cfg = AppConfig::load_or_default(Some(file.path())).unwrap();
                assert_eq!(cfg.home_dir, "/from/env");
                assert!(cfg.database.in_memory);
            },
        );
    }

    #[test]
    fn cli_overrides_win() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(&CliOverrides {
            verbose: 2,
            mock: true,
        });
        assert!(cfg.database.in_memory);
        assert_eq!(cfg.logging.console_level, "debug");

        cfg.apply_cli_overrides(&CliOverrides {
            verbose: 5,
            mock: false,
        });
        assert_eq!(cfg.logging.console_level, "trace");
        assert!(cfg.database.in_memory);
    }

    #[test]
    fn no_verbosity_keeps_configured_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.console_level = "error".to_owned();
        cfg.apply_cli_overrides(&CliOverrides::default());
        assert_eq!(cfg.logging.console_level, "error");
    }

    #[test]
    fn yaml_output_lists_sections() {
        let yaml = AppConfig::default().to_yaml().unwrap();
        assert!(yaml.contains("home_dir"));
        assert!(yaml.contains("database"));
        assert!(yaml.contains("console_level"));
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn tilde_expands_to_home() {
        let tmp = tempdir().unwrap();
        let tmp_path = tmp.path().to_str().unwrap();

        temp_env::with_var("HOME", Some(tmp_path), || {
            assert_eq!(expand_tilde("~").unwrap(), tmp.path());
            assert_eq!(
                expand_tilde("~/desk").unwrap(),
                tmp.path().join("desk")
            );
        });
    }

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(expand_tilde("/srv/desk").unwrap(), PathBuf::from("/srv/desk"));
        assert_eq!(expand_tilde("rel/dir").unwrap(), PathBuf::from("rel/dir"));
    }
}
