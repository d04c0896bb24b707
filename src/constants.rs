//! Centralized constants for prompt-studio.
//!
//! All magic numbers, default strings, and user-facing notices live here
//! so they can be changed in one place.

use std::time::Duration;

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "prompt-studio";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Per-project configuration filename.
pub const PROJECT_CONFIG_FILENAME: &str = "studio.toml";

/// Log file written while the TUI owns the terminal.
pub const LOG_FILENAME: &str = "studio.log";

// --- Proxy ---

/// Default base URL of the proxy service.
pub const DEFAULT_PROXY_BASE_URL: &str = "http://localhost:3000";

/// Fixed path of the proxy endpoint, appended to the base URL.
pub const PROXY_PATH: &str = "/api/proxy-api";

/// Environment variable that overrides the configured proxy base URL.
pub const PROXY_URL_ENV: &str = "STUDIO_PROXY_URL";

/// Message used when the proxy fails without an `error` field.
pub const UNKNOWN_PROXY_ERROR: &str = "An unknown error occurred.";

// --- Defaults ---

/// Default provider when none is configured.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Default template when none is configured.
pub const DEFAULT_TEMPLATE: &str = "default";

/// Identifier of the user-editable template slot.
pub const CUSTOM_TEMPLATE: &str = "custom";

/// Storage key holding the custom system prompt.
pub const CUSTOM_PROMPT_KEY: &str = "customSystemPrompt";

/// Text shown in the custom slot before anything was saved.
pub const CUSTOM_PROMPT_PLACEHOLDER: &str = "Enter your system prompt here...";

/// Number of variations requested when the count field is blank or invalid.
pub const DEFAULT_PROMPT_COUNT: u32 = 5;

/// Upper bound for the count field.
pub const MAX_PROMPT_COUNT: u32 = 20;

// --- Result area ---

/// Placeholder shown before the first generation.
pub const IDLE_NOTICE: &str = "Generated prompts will appear here.";

/// Placeholder shown while a request is in flight.
pub const LOADING_NOTICE: &str = "Generating prompts, please wait...";

/// Shown when the response contained no numbered entries.
pub const NO_RESULTS_NOTICE: &str = "No valid results were returned by the AI. Please try again.";

/// Shown when the provider returned blank text.
pub const EMPTY_RESPONSE_NOTICE: &str = "The AI returned an empty response. Please try again.";

/// Returned by envelope extraction for a provider with no known shape.
pub const UNSUPPORTED_PROVIDER_NOTICE: &str =
    "Could not read a response from the selected provider.";

/// Validation notice for a blank keyword.
pub const EMPTY_KEYWORD_NOTICE: &str = "Please enter a keyword.";

/// Validation notice for a blank system prompt.
pub const EMPTY_SYSTEM_PROMPT_NOTICE: &str =
    "The system prompt is empty. Pick a template or write a custom one.";

/// Label of an item's copy action.
pub const COPY_LABEL: &str = "Copy";

/// Label shown right after a successful copy.
pub const COPIED_LABEL: &str = "Copied!";

/// How long the copied label stays before reverting.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Upper bound on how long `studio generate --copy` keeps serving the
/// clipboard selection before exiting.
pub const CLIPBOARD_HOLD_DURATION: Duration = Duration::from_secs(30);

// --- TUI ---

/// Render tick interval (~30 fps).
pub const TICK_DURATION: Duration = Duration::from_millis(33);

/// Spinner frames shown while a request is in flight.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
