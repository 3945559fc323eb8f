use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const STORAGE_PREFIX: &str = "chaintrack_";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Ledger API host (e.g., "localhost" or "ledger.example.com")
    pub api_host: String,

    /// Ledger API port
    pub api_port: u16,

    /// API path prefix, empty when the endpoints live at the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Product list refresh period in milliseconds, 0 disables polling
    pub refresh_interval_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
            toast_duration_ms: 5000,
            refresh_interval_ms: 0,
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| {
                storage
                    .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                    .ok()
                    .flatten()
            };

            if let Some(api_host) = read("api_host") {
                settings.api_host = api_host;
            }
            if let Some(port) = read("api_port").and_then(|v| v.parse::<u16>().ok()) {
                settings.api_port = port;
            }
            if let Some(api_path) = read("api_path") {
                settings.api_path = api_path;
            }
            if let Some(use_https) = read("api_use_https") {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }
            if let Some(level) = read("log_level").as_deref().and_then(parse_level) {
                settings.log_level = level;
            }
            if let Some(timeout) = read("request_timeout_ms").and_then(|v| v.parse::<u32>().ok()) {
                settings.request_timeout_ms = timeout;
            }
            if let Some(duration) = read("toast_duration_ms").and_then(|v| v.parse::<u32>().ok()) {
                settings.toast_duration_ms = duration;
            }
            if let Some(interval) = read("refresh_interval_ms").and_then(|v| v.parse::<u32>().ok()) {
                settings.refresh_interval_ms = interval;
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        let Some(window) = window() else {
            return Ok(());
        };
        let Some(storage) = window.local_storage()? else {
            return Ok(());
        };

        let entries = [
            ("api_host", self.api_host.clone()),
            ("api_port", self.api_port.to_string()),
            ("api_path", self.api_path.clone()),
            ("api_use_https", self.api_use_https.to_string()),
            ("log_level", format!("{:?}", self.log_level).to_lowercase()),
            ("request_timeout_ms", self.request_timeout_ms.to_string()),
            ("toast_duration_ms", self.toast_duration_ms.to_string()),
            ("refresh_interval_ms", self.refresh_interval_ms.to_string()),
        ];
        for (key, value) in entries {
            storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), &value)?;
        }
        Ok(())
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings and persist them
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
        if let Err(e) = settings.save_to_storage() {
            log::warn!("Failed to persist settings: {:?}", e);
        }
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
