//! Seed resolution: mapping module names to the script tags that bootstrap the loader.
//!
//! `resolver` holds the grouping pass, `combo` the run buffer that decides when a combo URL
//! is emitted, and `request` the startup-scoped [`Seeder`] with its per-request lists.

mod combo;
mod request;
mod resolver;

pub use combo::ComboRun;
pub use request::{SeedRequest, Seeder};
pub use resolver::{default_module_path, resolve_module, resolve_seed};
