pub mod core;
pub mod settings;
pub mod types;

pub use self::core::App;
pub use self::types::Action;
