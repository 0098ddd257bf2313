use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn defaults_to_seeded_memory_store() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(cfg.store, StoreConfig::Memory { seed: true });
    assert_eq!(cfg.store.kind(), StoreKind::Memory);
}

#[test]
fn file_store_uses_default_path() {
    let cfg = config_from(&[("AGENT_FILES_STORE", "file")]).unwrap();
    assert_eq!(cfg.store, StoreConfig::File { path: PathBuf::from(DEFAULT_AGENT_FILES_PATH), seed: true });
}

#[test]
fn file_store_path_override() {
    let cfg = config_from(&[("AGENT_FILES_STORE", "file"), ("AGENT_FILES_PATH", "/tmp/x.jsonl"), ("AGENT_FILES_SEED", "no")])
        .unwrap();
    assert_eq!(cfg.store, StoreConfig::File { path: PathBuf::from("/tmp/x.jsonl"), seed: false });
}

#[test]
fn postgres_requires_database_url() {
    let err = config_from(&[("AGENT_FILES_STORE", "postgres")]).unwrap_err();
    assert_eq!(err, ConfigError::MissingDatabaseUrl);
}

#[test]
fn postgres_store_parses_pool_size() {
    let cfg = config_from(&[
        ("AGENT_FILES_STORE", "postgres"),
        ("DATABASE_URL", "postgres://localhost/agentfiles"),
        ("DB_MAX_CONNECTIONS", "9"),
    ])
    .unwrap();
    assert_eq!(
        cfg.store,
        StoreConfig::Postgres { database_url: "postgres://localhost/agentfiles".into(), max_connections: 9, seed: true }
    );
}

#[test]
fn unknown_store_is_an_error() {
    let err = config_from(&[("AGENT_FILES_STORE", "sqlite")]).unwrap_err();
    assert_eq!(err, ConfigError::UnknownStore("sqlite".into()));
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "not-a-port"), ("AGENT_FILES_PAGE_SIZE", "lots")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn page_size_is_clamped() {
    assert_eq!(config_from(&[("AGENT_FILES_PAGE_SIZE", "3")]).unwrap().page_size, 10);
    assert_eq!(config_from(&[("AGENT_FILES_PAGE_SIZE", "16")]).unwrap().page_size, 16);
    assert_eq!(config_from(&[("AGENT_FILES_PAGE_SIZE", "99")]).unwrap().page_size, 20);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    assert!(parse_bool(Some("TRUE"), false));
    assert!(parse_bool(Some("1"), false));
    assert!(!parse_bool(Some("off"), true));
    assert!(parse_bool(Some("maybe"), true));
    assert!(!parse_bool(None, false));
}
