#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod models;
pub mod render;
pub mod seed;

pub use config::{ConfigError, SeedConfig};
pub use models::{Filter, GroupCatalog, GroupDescriptor, ModuleEntry, ModuleRegistry, ScriptDescriptor};
pub use seed::{SeedRequest, Seeder, resolve_seed};
