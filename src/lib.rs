pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::memory::MemoryPage;
pub use crate::config::{page::PageFixture, toml_config::EnhancerConfig};
pub use crate::core::{
    enhancer::FormEnhancer, registry::FieldTable, session::PageSession, submenu::SubmenuController,
};
pub use crate::utils::error::{FormError, Result};
