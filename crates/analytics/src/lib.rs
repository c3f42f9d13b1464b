//! # Home Run Pace Analytics
//!
//! This crate turns raw plate appearance logs into cumulative home run paces
//! and shapes them for display.
//!
//! ## Architectural Principles
//!
//! - **Collaborators behind traits:** The deriver only knows the
//!   `EventLogSource` and `IdentityResolver` traits from `api-client`, so tests
//!   run against in-memory fakes and the binaries plug in the Stats API client.
//! - **Never fails:** Derivation degrades to empty logs and placeholder names
//!   instead of surfacing errors. The season window is configuration data, not
//!   inline conditionals.
//!
//! ## Public API
//!
//! - `HomeRunPaceDeriver`: filters, orders and numbers a player's home runs.
//! - `PaceReport` / `ChartSeries`: the per-player output for tables and charts.
//! - `Comparison`: the tagged union of two players' logs.
//! - `PlayerSelection`: picks players out of the active roster.

// Declare the modules that constitute this crate.
pub mod comparison;
pub mod deriver;
pub mod error;
pub mod report;
pub mod selection;

#[cfg(test)]
mod test_support;

// Re-export the key components to create a clean, public-facing API.
pub use comparison::{Comparison, TaggedHomeRunEvent};
pub use deriver::{qualifying_home_runs, HomeRunPaceDeriver};
pub use error::SelectionError;
pub use report::{ChartPoint, ChartSeries, PaceReport};
pub use selection::PlayerSelection;
