//! # Revchart Config
//!
//! Explicit chart style configuration for revchart.
//!
//! Every visual parameter the renderer uses (colors, line widths, marker
//! sizes, grid style, DPI) lives here so the rendered output does not depend
//! on plotting library defaults. Configuration can be loaded from TOML or YAML,
//! validated, and shared through a lock-free cache.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
