use foliobot::config::{
    FolioConfig, MAX_AGE_SECS_LIMIT, ProviderConfig, parse, resolve_site_identity, validate,
};
use std::collections::HashMap;

#[test]
fn default_config_has_sensible_values() {
    let config = FolioConfig::default();
    assert_eq!(config.gateway.port, 7300);
    assert_eq!(config.gateway.bind, "127.0.0.1");
    assert_eq!(config.gateway.default_session, "default");
    assert_eq!(
        config.provider.endpoint,
        "https://openrouter.ai/api/v1/chat/completions"
    );
    assert_eq!(config.provider.model, "openai/gpt-4o");
    assert_eq!(config.provider.max_tokens, 1500);
    assert_eq!(config.provider.site_name, "Qayyum Portfolio");
    assert!(config.provider.api_key.is_none());
    assert_eq!(config.memory.max_messages, 20);
    assert_eq!(config.memory.max_age_secs, 3600);
    assert!(config.content.profile_path.is_none());
    assert!(validate(&config).is_ok());
}

#[test]
fn valid_toml_parses_successfully() {
    let toml_str = r#"
[gateway]
port = 8080
bind = "0.0.0.0"
default_session = "anon"

[provider]
endpoint = "http://localhost:9000/v1/chat/completions"
model = "openai/gpt-4o-mini"
api_key = "sk-test"
temperature = 0.7
max_tokens = 512
site_url = "https://example.dev"
site_name = "Example"

[memory]
max_messages = 10
max_age_secs = 600

[content]
profile_path = "/srv/profile.json"
"#;

    let config = parse(toml_str).expect("should parse");
    assert_eq!(config.gateway.port, 8080);
    assert_eq!(config.gateway.default_session, "anon");
    assert_eq!(config.provider.model, "openai/gpt-4o-mini");
    assert_eq!(config.provider.api_key.as_deref(), Some("sk-test"));
    assert_eq!(config.provider.max_tokens, 512);
    // Unset sampling fields keep their defaults
    assert!((config.provider.top_p - 0.95).abs() < f32::EPSILON);
    assert_eq!(config.memory.max_messages, 10);
    assert_eq!(
        config.content.profile_path.as_deref(),
        Some("/srv/profile.json")
    );
    assert!(validate(&config).is_ok());
}

#[test]
fn empty_toml_yields_defaults() {
    let config = parse("").expect("empty config is valid");
    assert_eq!(config.gateway.port, 7300);
    assert_eq!(config.provider.model, "openai/gpt-4o");
}

#[test]
fn invalid_toml_is_rejected() {
    assert!(parse("[gateway\nport = ").is_err());
    assert!(parse("[gateway]\nport = \"not a number\"").is_err());
}

#[test]
fn validate_rejects_bad_endpoint() {
    let mut config = FolioConfig::default();
    config.provider.endpoint = "not a url".into();
    let err = validate(&config).expect_err("bad url");
    assert!(err.to_string().contains("provider.endpoint"));
}

#[test]
fn validate_rejects_zero_limits() {
    let mut config = FolioConfig::default();
    config.memory.max_messages = 0;
    assert!(validate(&config).is_err());

    let mut config = FolioConfig::default();
    config.provider.max_tokens = 0;
    assert!(validate(&config).is_err());
}

#[test]
fn validate_rejects_out_of_range_temperature() {
    let mut config = FolioConfig::default();
    config.provider.temperature = 2.5;
    let err = validate(&config).expect_err("temperature");
    assert!(err.to_string().contains("temperature"));
}

#[test]
fn validate_rejects_out_of_range_retention() {
    let config = parse("[memory]\nmax_age_secs = 10000000000000000").expect("parses");
    let err = validate(&config).expect_err("too large");
    assert!(err.to_string().contains("memory.max_age_secs"));
    assert!(config.memory.max_age().is_err());

    let config = parse("[memory]\nmax_age_secs = 0").expect("parses");
    assert!(validate(&config).is_err());

    let mut config = FolioConfig::default();
    config.memory.max_age_secs = MAX_AGE_SECS_LIMIT;
    assert!(validate(&config).is_ok());
    assert!(config.memory.max_age().is_ok());
}

#[test]
fn site_identity_prefers_short_names_then_public_names() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("NEXT_PUBLIC_SITE_URL", "https://public.example"),
        ("NEXT_PUBLIC_SITE_NAME", "Public Name"),
        ("SITE_NAME", "Short Name"),
    ]);
    let mut provider = ProviderConfig::default();
    resolve_site_identity(&mut provider, |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(provider.site_url, "https://public.example");
    assert_eq!(provider.site_name, "Short Name");

    let mut untouched = ProviderConfig::default();
    resolve_site_identity(&mut untouched, |_| None);
    assert_eq!(untouched.site_url, "https://your-site-url.com");
    assert_eq!(untouched.site_name, "Qayyum Portfolio");
}
