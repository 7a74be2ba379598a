//! Drives a generation pass: select files, emit one unit per file, render.
//!
//! The pass is synchronous and runs to completion or stops at the first error;
//! no partial output is returned.

use crate::generator::{
  codegen,
  emitter::AdapterEmitter,
  metrics::GenerationStats,
  output::OutputLayout,
  resolver::ResolverConfig,
  schema::SchemaSet,
  selector,
};

/// One rendered Go file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub name: String,
  pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFinalOutput {
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  schema: SchemaSet,
  config: ResolverConfig,
  layout: OutputLayout,
}

impl Orchestrator {
  pub fn new(schema: SchemaSet, config: ResolverConfig, layout: OutputLayout) -> Self {
    Self { schema, config, layout }
  }

  pub fn schema(&self) -> &SchemaSet {
    &self.schema
  }

  pub fn config(&self) -> &ResolverConfig {
    &self.config
  }

  pub fn generate(&self) -> anyhow::Result<GeneratedFinalOutput> {
    let emitter = AdapterEmitter::new(&self.config);
    let mut stats = GenerationStats::default();
    stats.record_scanned(self.schema.files.len());

    let mut files = vec![];
    for file in selector::select_files(&self.schema.files) {
      let file_name = self.layout.file_name(file)?;
      let emitted = emitter.emit(file, file_name);

      stats.record_unit(&emitted.unit);
      stats.record_warnings(emitted.warnings);

      files.push(GeneratedFile {
        content: codegen::render(&emitted.unit)?,
        name: emitted.unit.file_name,
      });
    }

    Ok(GeneratedFinalOutput { files, stats })
  }
}
