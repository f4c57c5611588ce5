//! Static template assets for the generated scaffold.

/// Build-configuration template. Scalar tokens are filled from the
/// configuration record; `topics_f` and `dependencies_f` are block tokens
/// owned by the loop-expansion pass.
pub const PYPROJECT_TEMPLATE: &str = r#"[build-system]
requires = ["setuptools>=61.0.0", "wheel"]
build-backend = "setuptools.build_meta"

[project]
name = "\[name_space\]-\[module_name\]"
version = "\[version\]"
description = "\[description\]"
readme = "README.md"
authors = [
  { name="\[name\]", email="\[email\]" },
]

classifiers = [
    "Development Status :: 2 - Pre-Alpha",

    "Programming Language :: Python :: 3",
    "Programming Language :: Python :: 3.9",
    "Programming Language :: Python :: 3.10",
    "Programming Language :: Python :: 3.11",
    "Programming Language :: Python :: 3.12",

    "Intended Audience :: Developers",

    \{topics_f\}
    "License :: OSI Approved :: MIT License",
    "Operating System :: OS Independent",

    "Typing :: Typed",

]
dependencies = [
    \{dependencies_f\}
]
requires-python = ">=3.9"

[project.urls]
"Homepage" = "https://github.com/\[github_id\]/\[repo_name\]"
"Bug Tracker" = "https://github.com/\[github_id\]/\[repo_name\]/issues"
"#;

/// Appended to the build-configuration template when the discussion option
/// is enabled.
pub const DISCUSSION_BLOCK: &str =
    r#""Discussion" = "https://github.com/\[github_id\]/\[module_name\]/discussions""#;

// Both fragments carry their own trailing newline, so expansions come out one
// entry per line and the requirements manifest derives to one specifier per
// line.
pub const TOPIC_FRAGMENT: &str = concat!(r#""\[topic\]","#, "\n");
pub const DEPENDENCY_FRAGMENT: &str = concat!(r#""\[dependency\]","#, "\n");

pub const SETUP_ENV_TEMPLATE: &str = r#"\[bin_bash\]

read -p "Please enter the Python version you want to use (e.g., 3.9): " PYTHON_VERSION

conda create --name \[module_name\] python=$PYTHON_VERSION -y

conda activate \[module_name\]

pip install -r requirements.txt
pip install -r requirements_test.txt
pip install -r requirements_dev.txt

"#;

pub const BIN_BASH: &str = "#!/bin/bash";

pub const INIT_FILE_CONTENT: &str = "# Init file for the module";
