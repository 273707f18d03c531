pub mod engine;
pub mod extractor;
pub mod pipeline;
pub mod queries;

pub use crate::domain::model::{PageCapture, PhoneQuery, PriceRange, ResultSet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
