pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use core::{engine::ScoutEngine, extractor::PriceMatcher, pipeline::PricePipeline};
pub use domain::model::{LookupStatus, PhoneQuery, PriceRange, ResultSet};
pub use utils::error::{Result, ScoutError};
