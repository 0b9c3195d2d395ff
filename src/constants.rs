//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the Generative Language API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used when neither the config file nor the environment names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key (required).
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV: &str = "PROMPTFORGE_MODEL";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "PROMPTFORGE_API_URL";

/// Config file location, relative to the home directory.
pub const CONFIG_FILE: &str = ".promptforge/config.yaml";

/// Log file written to the working directory.
pub const LOG_FILE: &str = "promptforge.log";

/// Shown when a failure carries no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An unknown error occurred. Please try again.";

/// Tone tags offered by the form, in display order.
pub const TONE_CATALOG: &[&str] = &[
    "Formal",
    "Friendly",
    "Academic",
    "Humorous",
    "Inspirational",
    "Provocative",
    "Reflective",
    "Playful",
];

/// Language preloaded into the form.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Application name
pub const APP_NAME: &str = "PromptForge";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
