use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_APP_NAME: &str = "YouTube Transcript App";

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

/// Reads a key from the `window.ENV_CONFIG` object injected by the hosting page.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_backend_url() -> String {
    normalize_base_url(get_env_var("BACKEND_URL").as_deref())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE").as_deref())
}

fn normalize_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_BACKEND_URL.to_string(),
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(|v| v.trim().to_ascii_lowercase())
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_falls_back_to_local_default() {
        assert_eq!(normalize_base_url(None), "http://127.0.0.1:8000");
        assert_eq!(normalize_base_url(Some("   ")), "http://127.0.0.1:8000");
    }

    #[test]
    fn backend_url_drops_trailing_slashes() {
        assert_eq!(
            normalize_base_url(Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }

    #[test]
    fn debug_flag_only_accepts_booleans() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some(" TRUE ")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(None));
    }
}
