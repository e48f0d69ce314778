//! armour_core - Armour mitigation reference library
//!
//! This library provides:
//! - ArmourFormula: Named mitigation formula variants
//! - Series Generation: Sampled chart data per formula
//! - PersistedNumberSet: Durable, sorted sets of armour/damage values
//! - Storage: Key-value persistence with a fixed key schema

pub mod config;
pub mod equality;
pub mod fmt;
pub mod formula;
pub mod series;
pub mod signal;
pub mod storage;
pub mod store;

// Re-export core types for convenience
pub use config::{AppConfig, ChartConfig, ConfigError};
pub use equality::is_equal;
pub use fmt::fmt;
pub use formula::{all_formulas, ArmourFormula};
pub use series::{generate_series_data, ChartDataType, ChartPoint, SeriesData};
pub use signal::Signal;
pub use storage::{
    FileStorage, MemoryStorage, SharedStorage, Storage, StorageError, StorageKey,
};
pub use store::PersistedNumberSet;
