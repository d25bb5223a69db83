pub mod codec;
pub mod dedupe_pipeline;
pub mod etl;
pub mod expand_pipeline;

pub use crate::domain::model::{CommandRecord, LabelMapping, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
