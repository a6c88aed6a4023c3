use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time. The
/// browser has no filesystem to read it from at runtime.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Build-time override for the backend address.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("HOSPITAL_API_BASE_URL");

/// Parse a config document, falling back to defaults when it is malformed.
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> PortalConfig {
    let mut config: PortalConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("[config] Failed to parse config.toml: {e}; using defaults");
        PortalConfig::default()
    });
    if let Some(url) = base_url_override.filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    config
}

/// The loaded portal config. Parsed on first use.
pub fn portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG, BASE_URL_OVERRIDE);
        tracing::info!("[config] API base URL: {}", config.base_url());
        config
    })
}
