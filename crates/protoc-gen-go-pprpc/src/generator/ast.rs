//! Structured form of a generated Go file.
//!
//! The emitter builds these descriptors and the renderer in `codegen` turns them
//! into text, so the adapter sequence can be inspected without parsing Go.

use std::fmt;

use indexmap::IndexSet;

pub(crate) const ERR_VAR: &str = "err";
pub(crate) const TRANSPORT_INPUT_VAR: &str = "pbIn";
pub(crate) const TRANSPORT_OUTPUT_VAR: &str = "pbOut";
pub(crate) const USE_CASE_INPUT_VAR: &str = "ucIn";
pub(crate) const USE_CASE_OUTPUT_VAR: &str = "ucOut";
pub(crate) const RECEIVER_VAR: &str = "service";
pub(crate) const USE_CASE_FIELD: &str = "UseCase";

/// Names bound inside emitted bodies; package aliases must not shadow them.
pub(crate) const RESERVED_LOCALS: [&str; 9] = [
  ERR_VAR,
  TRANSPORT_INPUT_VAR,
  TRANSPORT_OUTPUT_VAR,
  USE_CASE_INPUT_VAR,
  USE_CASE_OUTPUT_VAR,
  RECEIVER_VAR,
  "twerr",
  "domainErr",
  "_",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GoImportPath(String);

impl GoImportPath {
  pub fn new(path: impl Into<String>) -> Self {
    Self(path.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for GoImportPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for GoImportPath {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for GoImportPath {
  fn from(value: String) -> Self {
    Self(value)
  }
}

/// A Go name bound to the package it is declared in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoIdent {
  pub name: String,
  pub import_path: GoImportPath,
}

impl GoIdent {
  pub fn new(name: impl Into<String>, import_path: impl Into<GoImportPath>) -> Self {
    Self {
      name: name.into(),
      import_path: import_path.into(),
    }
  }
}

impl fmt::Display for GoIdent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.import_path, self.name)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
  Imported(GoIdent),
  /// Written as a bare name; assumed to be declared in the generated package.
  Local(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoType {
  pub name: TypeName,
  pub pointer: bool,
}

impl GoType {
  pub fn imported(ident: GoIdent) -> Self {
    Self {
      name: TypeName::Imported(ident),
      pointer: false,
    }
  }

  pub fn local(name: impl Into<String>) -> Self {
    Self {
      name: TypeName::Local(name.into()),
      pointer: false,
    }
  }

  #[must_use]
  pub fn pointer(mut self) -> Self {
    self.pointer = true;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVar {
  pub name: String,
  pub ty: GoType,
}

impl LocalVar {
  pub fn new(name: impl Into<String>, ty: GoType) -> Self {
    Self { name: name.into(), ty }
  }
}

/// What a failing call returns alongside the nil result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPolicy {
  /// The error is returned exactly as received.
  Propagate,
  /// The error goes through the named translation routine first.
  Translate { routine: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformCall {
  pub function: GoIdent,
  pub source: String,
  pub target: String,
  pub on_error: ErrorPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseCall {
  pub receiver: String,
  pub field: String,
  pub method: String,
  pub input: String,
  pub output: String,
  pub on_error: ErrorPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterStep {
  DeclareLocals(Vec<LocalVar>),
  TransformInput(TransformCall),
  InvokeUseCase(UseCaseCall),
  TransformOutput(TransformCall),
  ReturnOutput { output: String },
}

impl AdapterStep {
  #[cfg(test)]
  pub fn on_error(&self) -> Option<&ErrorPolicy> {
    match self {
      Self::TransformInput(call) | Self::TransformOutput(call) => Some(&call.on_error),
      Self::InvokeUseCase(call) => Some(&call.on_error),
      Self::DeclareLocals(_) | Self::ReturnOutput { .. } => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ServiceWrapper {
  #[builder(into)]
  pub name: String,
  #[builder(into, default = USE_CASE_FIELD.to_string())]
  pub field: String,
  pub use_case: GoIdent,
}

#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct AdapterFunction {
  #[builder(into, default = RECEIVER_VAR.to_string())]
  pub receiver: String,
  #[builder(into)]
  pub receiver_type: String,
  #[builder(into)]
  pub name: String,
  pub context: GoIdent,
  pub input: GoType,
  pub output: GoType,
  #[builder(default)]
  pub steps: Vec<AdapterStep>,
}

/// The shared routine that maps use-case errors onto the transport error model.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ErrorTranslation {
  #[builder(into)]
  pub name: String,
  pub transport_error: GoIdent,
  pub new_error: GoIdent,
  pub internal_code: GoIdent,
  pub wrap_error: GoIdent,
  pub errors_as: GoIdent,
  pub sprintf: GoIdent,
  pub domain_error: GoIdent,
  #[builder(into)]
  pub code_field: String,
  #[builder(into)]
  pub meta_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
  ServiceWrapper(ServiceWrapper),
  AdapterFunction(AdapterFunction),
  ErrorTranslation(ErrorTranslation),
}

/// Everything emitted for one schema file.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratedUnit {
  #[builder(into)]
  pub file_name: String,
  #[builder(into)]
  pub source: String,
  #[builder(into)]
  pub package_name: String,
  pub import_path: GoImportPath,
  #[builder(default)]
  pub declarations: Vec<Declaration>,
  /// Referenced identifiers in first-reference order.
  #[builder(default)]
  pub references: IndexSet<GoIdent>,
}

impl GeneratedUnit {
  /// Packages the unit must import, in first-reference order.
  pub fn imported_paths(&self) -> IndexSet<&GoImportPath> {
    self
      .references
      .iter()
      .map(|ident| &ident.import_path)
      .filter(|path| **path != self.import_path)
      .collect()
  }

  pub fn service_wrappers(&self) -> impl Iterator<Item = &ServiceWrapper> {
    self.declarations.iter().filter_map(|decl| match decl {
      Declaration::ServiceWrapper(wrapper) => Some(wrapper),
      _ => None,
    })
  }

  pub fn adapter_functions(&self) -> impl Iterator<Item = &AdapterFunction> {
    self.declarations.iter().filter_map(|decl| match decl {
      Declaration::AdapterFunction(function) => Some(function),
      _ => None,
    })
  }

  pub fn error_translation(&self) -> Option<&ErrorTranslation> {
    self.declarations.iter().find_map(|decl| match decl {
      Declaration::ErrorTranslation(routine) => Some(routine),
      _ => None,
    })
  }
}
