//! Builds the [`GeneratedUnit`] for one schema file.
//!
//! For every service a `<Service>Rpc` wrapper is declared holding the use-case
//! dependency, then one adapter per method, and finally the shared error
//! translation routine. Every identifier goes through [`IdentifierResolver`] and
//! is recorded on the unit so the renderer can derive the import block.

mod adapter;
mod error_translation;

use indexmap::IndexSet;

use crate::generator::{
  ast::{Declaration, GeneratedUnit, GoIdent},
  metrics::GenerationWarning,
  resolver::{IdentifierResolver, ResolverConfig, Role},
  schema::SchemaFile,
};

pub(crate) const GENERATED_FILE_SUFFIX: &str = "_pprpc.pb.go";
pub(crate) const WRAPPER_SUFFIX: &str = "Rpc";
pub(crate) const ERROR_TRANSLATION_ROUTINE: &str = "transformTwirpError";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedUnit {
  pub unit: GeneratedUnit,
  pub warnings: Vec<GenerationWarning>,
}

pub struct AdapterEmitter<'a> {
  resolver: IdentifierResolver<'a>,
}

impl<'a> AdapterEmitter<'a> {
  pub fn new(config: &'a ResolverConfig) -> Self {
    Self {
      resolver: IdentifierResolver::new(config),
    }
  }

  pub fn emit(&self, file: &SchemaFile, file_name: impl Into<String>) -> EmittedUnit {
    let mut builder = UnitBuilder::new(self.resolver, file);

    for service in &file.services {
      builder.service(service);
    }
    let routine = builder.error_translation();
    builder.push(Declaration::ErrorTranslation(routine));

    builder.finish(file_name.into())
  }
}

struct UnitBuilder<'a> {
  resolver: IdentifierResolver<'a>,
  file: &'a SchemaFile,
  declarations: Vec<Declaration>,
  references: IndexSet<GoIdent>,
  warnings: Vec<GenerationWarning>,
}

impl<'a> UnitBuilder<'a> {
  fn new(resolver: IdentifierResolver<'a>, file: &'a SchemaFile) -> Self {
    Self {
      resolver,
      file,
      declarations: vec![],
      references: IndexSet::new(),
      warnings: vec![],
    }
  }

  fn reference(&mut self, ident: GoIdent) -> GoIdent {
    self.references.insert(ident.clone());
    ident
  }

  fn resolve(&mut self, role: Role, name: &str) -> GoIdent {
    let ident = self.resolver.resolve(role, name);
    self.reference(ident)
  }

  fn push(&mut self, declaration: Declaration) {
    self.declarations.push(declaration);
  }

  fn warn(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  fn finish(self, file_name: String) -> EmittedUnit {
    let unit = GeneratedUnit::builder()
      .file_name(file_name)
      .source(self.file.name.clone())
      .package_name(self.file.package_name.clone())
      .import_path(self.file.import_path.clone())
      .declarations(self.declarations)
      .references(self.references)
      .build();

    EmittedUnit {
      unit,
      warnings: self.warnings,
    }
  }
}
