pub mod storage;

use crate::domain::model::Channel;
use crate::domain::ports::ScaffoldConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// All metadata needed to populate the templates. Immutable once built; the
/// beta channel derives a copy with a suffixed module name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSpec {
    pub name: String,
    pub email: String,
    pub github_id: String,
    pub repo_name: String,
    pub version: String,
    pub name_space: String,
    pub module_name: String,
    pub description: String,
    pub topics: Vec<String>,
    pub dependencies: Vec<String>,
}

impl PackageSpec {
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.github_id, self.repo_name)
    }

    /// Shallow copy adjusted for the given channel (beta suffixes the module
    /// name, stable is unchanged).
    pub fn for_channel(&self, channel: Channel) -> PackageSpec {
        let mut spec = self.clone();
        spec.module_name.push_str(channel.module_suffix());
        spec
    }
}

impl Validate for PackageSpec {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("name", &self.name)?;
        validation::validate_non_empty_string("module_name", &self.module_name)?;
        validation::validate_non_empty_string("name_space", &self.name_space)?;
        validation::validate_non_empty_string("version", &self.version)?;
        validation::validate_non_empty_string("github_id", &self.github_id)?;
        validation::validate_non_empty_string("repo_name", &self.repo_name)?;
        validation::validate_email("email", &self.email)?;
        validation::validate_url("repository", &self.repo_url())?;
        Ok(())
    }
}

/// Splits a free-form dependency block into specifiers, one per line.
/// Blank lines are dropped so an empty block produces an empty list.
pub fn split_dependencies(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    /// Append a Discussion URL entry to the build configuration.
    pub discussion: bool,
}

/// Per-channel configuration: the derived spec, the options, the output root
/// and the auxiliary requirement files to copy in from the working directory.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    spec: PackageSpec,
    options: ScaffoldOptions,
    output_root: String,
    aux_requirement_files: Vec<String>,
}

impl ChannelConfig {
    pub fn new(channel: Channel, base: &PackageSpec, options: ScaffoldOptions) -> Self {
        Self {
            spec: base.for_channel(channel),
            options,
            output_root: channel.output_root().to_string(),
            aux_requirement_files: vec![
                "requirements_dev.txt".to_string(),
                "requirements_test.txt".to_string(),
            ],
        }
    }

    pub fn with_output_root(mut self, output_root: impl Into<String>) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_aux_requirement_files(mut self, files: Vec<String>) -> Self {
        self.aux_requirement_files = files;
        self
    }

    pub fn spec(&self) -> &PackageSpec {
        &self.spec
    }

    pub fn output_root(&self) -> &str {
        &self.output_root
    }
}

impl ScaffoldConfig for ChannelConfig {
    fn author_name(&self) -> &str {
        &self.spec.name
    }

    fn author_email(&self) -> &str {
        &self.spec.email
    }

    fn github_id(&self) -> &str {
        &self.spec.github_id
    }

    fn repo_name(&self) -> &str {
        &self.spec.repo_name
    }

    fn version(&self) -> &str {
        &self.spec.version
    }

    fn name_space(&self) -> &str {
        &self.spec.name_space
    }

    fn module_name(&self) -> &str {
        &self.spec.module_name
    }

    fn description(&self) -> &str {
        &self.spec.description
    }

    fn topics(&self) -> &[String] {
        &self.spec.topics
    }

    fn dependencies(&self) -> &[String] {
        &self.spec.dependencies
    }

    fn discussion(&self) -> bool {
        self.options.discussion
    }

    fn output_root(&self) -> &str {
        &self.output_root
    }

    fn aux_requirement_files(&self) -> &[String] {
        &self.aux_requirement_files
    }
}

impl Validate for ChannelConfig {
    fn validate(&self) -> Result<()> {
        self.spec.validate()?;
        validation::validate_path("output_root", &self.output_root)?;
        for file in &self.aux_requirement_files {
            validation::validate_path("aux_requirement_files", file)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> PackageSpec {
        PackageSpec {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            github_id: "crimson206".to_string(),
            repo_name: "demo".to_string(),
            version: "0.1.0".to_string(),
            name_space: "crimson".to_string(),
            module_name: "demo".to_string(),
            description: "A demo package.".to_string(),
            topics: vec![],
            dependencies: vec![],
        }
    }

    #[test]
    fn test_valid_spec_passes() {
        assert!(sample_spec().validate().is_ok());
    }

    #[test]
    fn test_empty_module_name_rejected_at_construction_time() {
        let mut spec = sample_spec();
        spec.module_name = String::new();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut spec = sample_spec();
        spec.email = "ada.example.com".to_string();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_beta_channel_suffixes_module_name() {
        let spec = sample_spec();
        let beta = spec.for_channel(Channel::Beta);
        assert_eq!(beta.module_name, "demo-beta");
        assert_eq!(spec.for_channel(Channel::Stable).module_name, "demo");
        // everything else is a shallow copy
        assert_eq!(beta.name_space, spec.name_space);
    }

    #[test]
    fn test_split_dependencies_drops_blank_lines() {
        assert_eq!(split_dependencies("\n\n"), Vec::<String>::new());
        assert_eq!(
            split_dependencies("requests\n\n  pydantic>=2.0  \n"),
            vec!["requests".to_string(), "pydantic>=2.0".to_string()]
        );
    }

    #[test]
    fn test_scalar_pairs_cover_all_template_fields() {
        let config = ChannelConfig::new(Channel::Stable, &sample_spec(), ScaffoldOptions::default());
        let pairs = config.scalar_pairs();
        for field in [
            "name",
            "email",
            "github_id",
            "repo_name",
            "version",
            "name_space",
            "module_name",
            "description",
        ] {
            assert!(pairs.iter().any(|(key, _)| *key == field), "missing {field}");
        }
    }
}
