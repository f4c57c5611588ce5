pub mod builder;
pub mod engine;
pub mod repo_info;
pub mod template;
pub mod templates;

pub use crate::domain::model::{Channel, RenderedScaffold, TemplatePlan};
pub use crate::domain::ports::{ScaffoldConfig, ScaffoldPipeline, Storage};
pub use crate::utils::error::Result;
