use std::collections::HashMap;
use std::fs::File;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
}

#[derive(Deserialize, Debug)]
struct ServerConfigMap {
    configs: HashMap<String, ServerConfig>,
}

const ENV_VAR_KEY: &str = "UORCON_CONFIG_PATH";

fn get_config_path_env_var() -> Option<String> {
    match std::env::var(ENV_VAR_KEY) {
        Ok(path) => {
            log::debug!("Found environment variable {}: {}", ENV_VAR_KEY, path);
            Some(path)
        }
        Err(_) => {
            log::warn!("Environment variable {} not set", ENV_VAR_KEY);
            None
        }
    }
}

pub fn load_config_from_env(config_name: Option<String>) -> Option<ServerConfig> {
    get_config_path_env_var().and_then(|path| load_config(&path, config_name))
}

fn load_config(config_file_path: &str, config_name: Option<String>) -> Option<ServerConfig> {
    let mut file = match File::open(config_file_path) {
        Ok(f) => f,
        Err(_) => {
            log::error!("Failed to open config file: {}", config_file_path);
            return None;
        }
    };

    let config: ServerConfigMap = match serde_json::from_reader(&mut file) {
        Ok(c) => c,
        Err(_) => {
            log::error!("Failed to parse config file: {}", config_file_path);
            return None;
        }
    };
    log::debug!("Loaded config file: {:?}", config);

    if let Some(name) = config_name {
        match config.configs.get(&name) {
            Some(server_config) => {
                log::info!("Using config: {}", name);
                Some(server_config.clone())
            }
            None => {
                log::error!("Config with name '{}' not found in config file.", name);
                None
            }
        }
    } else if config.configs.len() == 1 {
        let (name, server_config) = config.configs.iter().next()?;
        log::info!("No config name provided. Using the only available config: {}", name);
        Some(server_config.clone())
    } else {
        log::error!("No config name provided. Please specify a config name.");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::load_config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const TWO_SERVERS: &str = r#"{
        "configs": {
            "shard1": {
                "host": "192.168.1.1",
                "port": 27030,
                "password": "password123"
            },
            "shard2": {
                "host": "192.168.1.2",
                "port": 27031,
                "password": "password456"
            }
        }
    }"#;

    #[test]
    fn test_load_config_with_specific_name() {
        let temp_file = create_test_config_file(TWO_SERVERS);
        let config = load_config(
            temp_file.path().to_str().unwrap(),
            Some("shard2".to_string()),
        )
        .unwrap();

        assert_eq!(config.host, "192.168.1.2");
        assert_eq!(config.port, 27031);
        assert_eq!(config.password, "password456");
    }

    #[test]
    fn test_load_config_with_unknown_name() {
        let temp_file = create_test_config_file(TWO_SERVERS);
        let config = load_config(
            temp_file.path().to_str().unwrap(),
            Some("shard3".to_string()),
        );
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_without_name_picks_sole_entry() {
        let content = r#"{
            "configs": {
                "onlyshard": {
                    "host": "127.0.0.1",
                    "port": 27030,
                    "password": "pw"
                }
            }
        }"#;
        let temp_file = create_test_config_file(content);
        let config = load_config(temp_file.path().to_str().unwrap(), None).unwrap();
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_load_config_without_name_ambiguous() {
        let temp_file = create_test_config_file(TWO_SERVERS);
        assert!(load_config(temp_file.path().to_str().unwrap(), None).is_none());
    }

    #[test]
    fn test_load_config_with_invalid_json() {
        let temp_file = create_test_config_file("not json at all");
        assert!(load_config(temp_file.path().to_str().unwrap(), None).is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/definitely/not/a/file.json", None).is_none());
    }
}
