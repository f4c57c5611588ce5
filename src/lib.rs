pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::storage::LocalStorage;
pub use config::{ChannelConfig, PackageSpec, ScaffoldOptions};
pub use core::{builder::ScaffoldBuilder, engine::ScaffoldEngine, repo_info::RepoInfoEmitter};
pub use domain::model::Channel;
pub use utils::error::{Result, ScaffoldError};
