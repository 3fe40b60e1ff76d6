use crate::associations::ReverseForeignKeys;
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::header::GenerationStamp;
use crate::model_generator::{generate_aggregator, generate_model};
use crate::naming::{is_malformed_type_name, to_type_name};
use crate::output_dir::{CreateOutcome, OutputDir};
use crate::types::{ColumnMeta, TableMeta};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum FileOutcome {
    Created(PathBuf),
    Skipped(PathBuf),
    Failed(GeneratorError),
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub files: Vec<FileOutcome>,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    pub fn created(self: &Self) -> usize {
        self.files
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Created(_)))
            .count()
    }

    pub fn skipped(self: &Self) -> usize {
        self.files
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Skipped(_)))
            .count()
    }

    pub fn failed(self: &Self) -> usize {
        self.files
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Failed(_)))
            .count()
    }

    pub fn has_failures(self: &Self) -> bool {
        self.failed() > 0
    }
}

fn identifier_warnings(table: &TableMeta) -> Vec<String> {
    let mut warnings: Vec<String> = Vec::new();

    let type_name = to_type_name(&table.table_name);
    if is_malformed_type_name(&type_name) {
        warnings.push(format!(
            "table '{}' maps to unusable class name '{}'",
            table.table_name, type_name
        ));
    }

    warnings.extend(
        table
            .columns
            .iter()
            .filter(|column: &&ColumnMeta| column.column_name.trim().is_empty())
            .map(|_| format!("table '{}' has a column with an empty name", table.table_name)),
    );

    warnings
}

fn record(report: &mut GenerationReport, outcome: Result<CreateOutcome>) {
    match outcome {
        Ok(CreateOutcome::Created(path)) => {
            info!(path = %path.display(), "created");
            report.files.push(FileOutcome::Created(path));
        }
        Ok(CreateOutcome::AlreadyExists(path)) => {
            info!(path = %path.display(), "already exists, skipped");
            report.files.push(FileOutcome::Skipped(path));
        }
        Err(err @ GeneratorError::UnsafeFileName(_)) => {
            warn!("{}", err);
            report.warnings.push(err.to_string());
            report.files.push(FileOutcome::Failed(err));
        }
        Err(err) => {
            error!(error = %err, "write failed");
            report.files.push(FileOutcome::Failed(err));
        }
    }
}

/// Writes one model per table and the aggregator. A failed or skipped file
/// does not stop the others.
pub fn generate(
    tables: &[TableMeta],
    config: &GeneratorConfig,
    stamp: &GenerationStamp,
) -> Result<GenerationReport> {
    let output = OutputDir::open(&config.output_dir)?;
    let reverse = ReverseForeignKeys::build(tables);
    let mut report = GenerationReport::default();

    for table in tables {
        for warning in identifier_warnings(table) {
            warn!("{}", warning);
            report.warnings.push(warning);
        }

        let model = generate_model(table, &reverse, config, stamp);
        let outcome = output.create_if_absent(&config.file_name(&table.table_name), &model);
        record(&mut report, outcome);
    }

    let aggregator = generate_aggregator(tables, config, stamp);
    let outcome = output.create_if_absent(&config.file_name(&config.aggregator_name), &aggregator);
    record(&mut report, outcome);

    info!(
        output_dir = %output.root().display(),
        created = report.created(),
        skipped = report.skipped(),
        failed = report.failed(),
        warnings = report.warnings.len(),
        "done"
    );

    Ok(report)
}
