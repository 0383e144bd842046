#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::config::loader::{
        CONFIG_ENV_VAR, ConfigError, get_config_file_path, load_config_from_path,
        save_config_to_path,
    };
    use crate::game::{DEFAULT_SPEED, FIELD_HEIGHT, FIELD_WIDTH, PHYSICS_FRAME_RATE};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    // Helper function to create a test config path
    fn create_test_config_path() -> (tempfile::TempDir, PathBuf) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("nested").join("test_config.toml");
        (temp_dir, config_path)
    }

    #[test]
    fn test_load_nonexistent_config() {
        let (_temp_dir, config_path) = create_test_config_path();

        // Loading a non-existent config should create a default one
        let config = load_config_from_path(&config_path).expect("Failed to load default config");
        assert!(config_path.exists(), "Config file should have been created");

        assert_eq!(config.field.width, FIELD_WIDTH);
        assert_eq!(config.field.height, FIELD_HEIGHT);
        assert_eq!(config.physics.falling_speed, DEFAULT_SPEED);
        assert_eq!(config.physics.frame_rate, PHYSICS_FRAME_RATE);
    }

    #[test]
    fn test_save_and_load_config() {
        let (_temp_dir, config_path) = create_test_config_path();

        let mut config = GameConfig::default();
        config.field.width = 12;
        config.physics.falling_speed = 5;
        config.graphics.frame_rate = 24;

        save_config_to_path(&config, &config_path).expect("Failed to save config");
        let loaded = load_config_from_path(&config_path).expect("Failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let (_temp_dir, config_path) = create_test_config_path();
        fs::create_dir_all(config_path.parent().expect("parent")).expect("create dir");
        fs::write(&config_path, "[field]\nheight = 30\n").expect("write config");

        let config = load_config_from_path(&config_path).expect("Failed to load config");
        assert_eq!(config.field.height, 30);
        assert_eq!(config.field.width, FIELD_WIDTH);
        assert_eq!(config.physics.falling_speed, DEFAULT_SPEED);
    }

    #[test]
    fn test_invalid_toml() {
        let (_temp_dir, config_path) = create_test_config_path();
        fs::create_dir_all(config_path.parent().expect("parent")).expect("create dir");
        fs::write(&config_path, "[field\nwidth = ").expect("write config");

        let result = load_config_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let (_temp_dir, config_path) = create_test_config_path();
        fs::create_dir_all(config_path.parent().expect("parent")).expect("create dir");
        fs::write(&config_path, "[physics]\nfalling_speed = 0\n").expect("write config");

        let result = load_config_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        let message = result.expect_err("invalid config").to_string();
        assert!(message.contains("falling speed"));
    }

    #[test]
    fn test_env_var_overrides_path() {
        let (_temp_dir, config_path) = create_test_config_path();

        unsafe {
            std::env::set_var(CONFIG_ENV_VAR, config_path.to_str().expect("utf-8 path"));
        }
        assert_eq!(get_config_file_path(), config_path);
        unsafe {
            std::env::remove_var(CONFIG_ENV_VAR);
        }
    }

    #[test]
    fn test_install_replaces_global_config() {
        let mut config = GameConfig::default();
        config.graphics.frame_rate = 48;
        config.clone().install();
        assert_eq!(GameConfig::current(), config);
        GameConfig::default().install();
    }
}
