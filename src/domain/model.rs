use serde::{Deserialize, Serialize};

/// Release channel a scaffold is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Stable,
    Beta,
}

impl Channel {
    pub fn output_root(&self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
        }
    }

    pub fn module_suffix(&self) -> &'static str {
        match self {
            Channel::Stable => "",
            Channel::Beta => "-beta",
        }
    }
}

/// Output of the resolve stage: templates with options applied plus the
/// values that drive the substitution passes.
#[derive(Debug, Clone)]
pub struct TemplatePlan {
    pub build_config_template: String,
    pub scalars: Vec<(&'static str, String)>,
    pub topics: Vec<String>,
    pub dependencies: Vec<String>,
    pub package_dir: String,
    pub module_name: String,
}

/// Fully rendered scaffold, ready to be written under one output root.
#[derive(Debug, Clone)]
pub struct RenderedScaffold {
    pub build_config: String,
    pub init_file: String,
    pub setup_script: String,
    pub requirements: String,
    pub package_dir: String,
}
