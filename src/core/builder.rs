use crate::core::template;
use crate::core::templates::{
    BIN_BASH, DEPENDENCY_FRAGMENT, DISCUSSION_BLOCK, INIT_FILE_CONTENT, PYPROJECT_TEMPLATE,
    SETUP_ENV_TEMPLATE, TOPIC_FRAGMENT,
};
use crate::core::{RenderedScaffold, ScaffoldConfig, ScaffoldPipeline, Storage, TemplatePlan};
use crate::utils::error::{Result, ScaffoldError};
use std::path::Path;

pub struct ScaffoldBuilder<S: Storage, C: ScaffoldConfig> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ScaffoldConfig> ScaffoldBuilder<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ScaffoldConfig> ScaffoldPipeline for ScaffoldBuilder<S, C> {
    async fn resolve(&self) -> Result<TemplatePlan> {
        let mut build_config_template = PYPROJECT_TEMPLATE.to_string();

        if self.config.discussion() {
            build_config_template.push_str(DISCUSSION_BLOCK);
        }

        // Namespace hyphens nest directories, module-name hyphens become
        // underscores so the directory is importable.
        let package_dir = format!(
            "src/{}/{}",
            self.config.name_space().replace('-', "/"),
            self.config.module_name().replace('-', "_"),
        );

        tracing::debug!("Package skeleton directory: {}", package_dir);

        Ok(TemplatePlan {
            build_config_template,
            scalars: self.config.scalar_pairs(),
            topics: self.config.topics().to_vec(),
            dependencies: self.config.dependencies().to_vec(),
            package_dir,
            module_name: self.config.module_name().to_string(),
        })
    }

    async fn render(&self, plan: TemplatePlan) -> Result<RenderedScaffold> {
        let body = template::insert(&plan.build_config_template, &plan.scalars);

        let topics_f = template::insert_loop(TOPIC_FRAGMENT, "topic", &plan.topics);
        let mut dependencies_f =
            template::insert_loop(DEPENDENCY_FRAGMENT, "dependency", &plan.dependencies);

        // A dependency list holding a single blank specifier expands to a
        // stray empty-quoted entry; collapse it to an empty block.
        if dependencies_f.trim() == r#""","# {
            dependencies_f.clear();
        }

        let build_config = template::indent_merge(
            &body,
            &[("topics_f", &topics_f), ("dependencies_f", &dependencies_f)],
        );

        // Syntactic gate: the merged output must parse as TOML.
        toml::from_str::<toml::Table>(&build_config)?;

        let requirements = dependencies_f.replace('"', "").replace(',', "");

        let setup_script = template::insert(
            SETUP_ENV_TEMPLATE,
            &[
                ("bin_bash", BIN_BASH.to_string()),
                ("module_name", plan.module_name.clone()),
            ],
        );

        tracing::debug!(
            "Rendered build configuration with {} topics and {} dependencies",
            plan.topics.len(),
            plan.dependencies.len(),
        );

        Ok(RenderedScaffold {
            build_config,
            init_file: INIT_FILE_CONTENT.to_string(),
            setup_script,
            requirements,
            package_dir: plan.package_dir,
        })
    }

    async fn write(&self, scaffold: RenderedScaffold) -> Result<String> {
        self.storage
            .write_file("pyproject.toml", scaffold.build_config.as_bytes())
            .await?;

        let init_path = format!("{}/__init__.py", scaffold.package_dir);
        self.storage
            .write_file(&init_path, scaffold.init_file.as_bytes())
            .await?;

        self.storage
            .write_file("scripts/setup_env.sh", scaffold.setup_script.as_bytes())
            .await?;

        self.storage
            .write_file("requirements.txt", scaffold.requirements.as_bytes())
            .await?;

        // Auxiliary requirement files come from the invocation directory and
        // land at the output root under their own names.
        for file in self.config.aux_requirement_files() {
            let data = std::fs::read(file)?;
            let dest = Path::new(file)
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| ScaffoldError::InvalidConfigValueError {
                    field: "aux_requirement_files".to_string(),
                    value: file.clone(),
                    reason: "Path has no file name".to_string(),
                })?;
            self.storage.write_file(dest, &data).await?;
        }

        let output_root = self.config.output_root().to_string();
        tracing::info!(
            "Environment setup: cd {} && source scripts/setup_env.sh",
            output_root
        );

        Ok(output_root)
    }
}
