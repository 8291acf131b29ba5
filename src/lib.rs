//! FreeFuse Hub: loads the onboarding CSV resources and turns them into
//! renderer-agnostic view descriptions.

pub mod config;
pub mod csv_handler;
pub mod dashboard;
pub mod data_types;
pub mod dates;
pub mod display;
pub mod error;
pub mod filter;
pub mod loader;
pub mod render_text;
pub mod sample_data;
pub mod selection;
pub mod views;

pub use data_types::{Dataset, Record, ResourceKind, ResourceSource};
pub use display::{DisplayDescription, Field, ValueKind};
pub use error::{Error, Result};
pub use loader::DataLoader;
pub use selection::{FilterValue, Section, SelectionState, ViewMode};
pub use views::{render, render_at};
