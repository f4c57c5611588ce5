use crate::core::Storage;
use crate::utils::error::Result;
use crate::utils::validation;
use serde::{Deserialize, Serialize};

pub const REPO_INFO_PATH: &str = "env/env.json";

/// Repository descriptor written once per run, independent of the channel
/// outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoInfo {
    #[serde(rename = "repo-folder-root")]
    pub repo_folder_root: String,
}

impl RepoInfo {
    pub fn new(github_id: &str, repo_name: &str) -> Self {
        Self {
            repo_folder_root: format!(
                "https://github.com/{}/{}/blob/main/",
                github_id, repo_name
            ),
        }
    }
}

pub struct RepoInfoEmitter<S: Storage> {
    storage: S,
}

impl<S: Storage> RepoInfoEmitter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn emit(&self, github_id: &str, repo_name: &str) -> Result<()> {
        let info = RepoInfo::new(github_id, repo_name);
        validation::validate_url("repo-folder-root", &info.repo_folder_root)?;

        let json_string = serde_json::to_string_pretty(&info)?;
        self.storage
            .write_file(REPO_INFO_PATH, json_string.as_bytes())
            .await?;

        tracing::info!("Repository descriptor written to {}", REPO_INFO_PATH);
        Ok(())
    }
}
