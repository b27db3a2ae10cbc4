//! Configuration module for Anvil DNS
//!
//! Sections carried by this component:
//! - `root`: Main configuration, file loading and validation
//! - `cache`: Resolution cache settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use root::Config;
