pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{project_config_dir, settings_path, user_cache_dir};
pub use keybinds::{key_name, parse_key, Keymap};
pub use read_settings::{load_settings, load_settings_from, Settings, SettingsError};
