//! Default values for todo configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Config File Locations
// ============================================================================

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "todo.toml";

/// Application directory name under the user's config and data dirs.
pub const APP_DIR: &str = "todo";

/// User config file name inside `<config_dir>/todo/`.
pub const USER_CONFIG_FILE: &str = "config.toml";

// ============================================================================
// Storage Defaults
// ============================================================================

/// Default storage backend name.
pub const DEFAULT_BACKEND: &str = "file";

/// Default todo file name.
pub const DEFAULT_TODO_FILE: &str = "todos.json";

/// Fallback data directory when the platform has no user data dir.
pub const FALLBACK_DATA_DIR: &str = ".todo";

// ============================================================================
// Logging Defaults
// ============================================================================

/// Default log level. Kept quiet so command output stays readable.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ============================================================================
// Environment Variables
// ============================================================================

/// Overrides `storage.backend`.
pub const ENV_BACKEND: &str = "TODO_BACKEND";

/// Overrides `storage.file`.
pub const ENV_FILE: &str = "TODO_FILE";

/// Overrides `log.level`.
pub const ENV_LOG_LEVEL: &str = "TODO_LOG_LEVEL";
