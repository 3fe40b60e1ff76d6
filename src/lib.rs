pub mod associations;
pub mod column_documentation;
pub mod config;
pub mod database_schema;
pub mod error;
pub mod generator;
pub mod header;
pub mod model_generator;
pub mod naming;
pub mod output_dir;
pub mod types;
pub mod validation_rules;

pub use config::GeneratorConfig;
pub use error::{GeneratorError, Result};
pub use generator::{generate, FileOutcome, GenerationReport};
