use crate::error::{GeneratorError, Result};
use serde_derive::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub plugins: Vec<String>,
    pub empty_value_message: Option<String>,
    pub extension: String,
    pub aggregator_name: String,
    pub connection_include: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("model"),
            plugins: vec!["validation_helpers".into(), "json_serializer".into()],
            empty_value_message: None,
            extension: "rb".into(),
            aggregator_name: "init".into(),
            connection_include: "db_connect".into(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source: toml::de::Error| GeneratorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        Self::from_toml(path, &contents)
    }

    pub fn file_name(self: &Self, base_name: &str) -> String {
        format!("{}.{}", base_name, self.extension)
    }
}
