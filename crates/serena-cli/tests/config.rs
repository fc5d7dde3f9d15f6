use std::path::PathBuf;

use serena_cli::config::{
    self, DEFAULT_BEDROCK_MODEL, ProviderConfig, SerenaConfig, api_key_from, config_info,
};

fn write(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = config::load_or_default(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, SerenaConfig::default());
    assert_eq!(config.provider, ProviderConfig::Gemini);
    assert_eq!(config.output_dir(), PathBuf::from("."));
}

#[test]
fn save_then_load_keeps_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = SerenaConfig {
        provider: ProviderConfig::Bedrock {
            region: "us-east-1".to_string(),
        },
        model: DEFAULT_BEDROCK_MODEL.to_string(),
        output_dir: Some(PathBuf::from("/tmp/relatorios")),
        ..SerenaConfig::default()
    };

    config::save_config(&path, &config).unwrap();
    let loaded = config::load_config(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(!path.with_extension("json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    config::save_config(&path, &SerenaConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, r#"{ "api_key": "AIzaSyExample", "output_dir": "/srv/out" }"#);

    let config = config::load_config(&path).unwrap();

    assert_eq!(config.config_version, 1);
    assert_eq!(config.provider, ProviderConfig::Gemini);
    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.output_dir, Some(PathBuf::from("/srv/out")));
}

#[test]
fn migration_keeps_explicit_provider() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        r#"{ "provider": { "type": "bedrock", "region": "sa-east-1" }, "model": "custom" }"#,
    );

    let config = config::load_config(&path).unwrap();
    assert_eq!(
        config.provider,
        ProviderConfig::Bedrock {
            region: "sa-east-1".to_string()
        }
    );
    assert_eq!(config.model, "custom");
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        r#"{ "config_version": 99, "provider": { "type": "gemini" }, "model": "m" }"#,
    );

    let err = config::load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn api_key_prefers_gemini_variable() {
    let key = api_key_from(|var| match var {
        "GEMINI_API_KEY" => Some("gemini-key".to_string()),
        "API_KEY" => Some("fallback-key".to_string()),
        _ => None,
    });
    assert_eq!(key.as_deref(), Some("gemini-key"));
}

#[test]
fn api_key_falls_back_when_primary_blank() {
    let key = api_key_from(|var| match var {
        "GEMINI_API_KEY" => Some("   ".to_string()),
        "API_KEY" => Some("fallback-key".to_string()),
        _ => None,
    });
    assert_eq!(key.as_deref(), Some("fallback-key"));

    assert_eq!(api_key_from(|_| None), None);
}

#[test]
fn config_info_redacts_the_key() {
    let path = PathBuf::from("/home/ana/.config/serena/config.json");
    let info = config_info(&path, &SerenaConfig::default(), Some("AIzaSyABCDEFGHwxyz"));

    assert_eq!(info.provider, "gemini");
    assert_eq!(info.region, None);
    assert_eq!(info.api_key_hint.as_deref(), Some("AIza...wxyz"));

    let short = config_info(&path, &SerenaConfig::default(), Some("short"));
    assert_eq!(short.api_key_hint.as_deref(), Some("****"));
}
