//! Finds the tallest character in the superhero catalog matching a gender
//! and an employment filter.

pub mod apis;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod types;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

pub use app::tallest_use_case::TallestCharacterUseCase;
pub use pipeline::selector::select_tallest;
pub use types::{CharacterRecord, Selection, SelectionCriteria};
