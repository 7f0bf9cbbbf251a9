//! Rendering helpers handing resolved seeds to server-rendered pages.
//!
//! Script tags, the inline runtime configuration and page injection are kept separate so a
//! host can use any subset of them, for example emitting tags into its own template engine
//! while still relying on [`inject_seed`] for static pages.

mod inject;
mod runtime;
mod tags;

pub use inject::{SEED_PLACEHOLDER, inject_seed};
pub use runtime::{render_runtime_config, runtime_config};
pub use tags::{escape_attribute, render_script_tags};
