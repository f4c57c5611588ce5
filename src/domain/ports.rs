use crate::domain::model::{RenderedScaffold, TemplatePlan};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ScaffoldConfig: Send + Sync {
    fn author_name(&self) -> &str;
    fn author_email(&self) -> &str;
    fn github_id(&self) -> &str;
    fn repo_name(&self) -> &str;
    fn version(&self) -> &str;
    fn name_space(&self) -> &str;
    fn module_name(&self) -> &str;
    fn description(&self) -> &str;
    fn topics(&self) -> &[String];
    fn dependencies(&self) -> &[String];
    fn discussion(&self) -> bool;
    fn output_root(&self) -> &str;
    fn aux_requirement_files(&self) -> &[String];

    /// Explicit placeholder-name to field mapping consumed by the scalar
    /// substitution pass. Every scalar token in the templates must appear here.
    fn scalar_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.author_name().to_string()),
            ("email", self.author_email().to_string()),
            ("github_id", self.github_id().to_string()),
            ("repo_name", self.repo_name().to_string()),
            ("version", self.version().to_string()),
            ("name_space", self.name_space().to_string()),
            ("module_name", self.module_name().to_string()),
            ("description", self.description().to_string()),
        ]
    }
}

#[async_trait]
pub trait ScaffoldPipeline: Send + Sync {
    async fn resolve(&self) -> Result<TemplatePlan>;
    async fn render(&self, plan: TemplatePlan) -> Result<RenderedScaffold>;
    async fn write(&self, scaffold: RenderedScaffold) -> Result<String>;
}
