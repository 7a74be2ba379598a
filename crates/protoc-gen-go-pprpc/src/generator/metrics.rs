use strum::Display;

use crate::generator::ast::GeneratedUnit;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub files_scanned: usize,
  pub files_selected: usize,
  pub services_generated: usize,
  pub adapters_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_scanned(&mut self, count: usize) {
    self.files_scanned += count;
  }

  pub fn record_unit(&mut self, unit: &GeneratedUnit) {
    self.files_selected += 1;
    self.services_generated += unit.service_wrappers().count();
    self.adapters_generated += unit.adapter_functions().count();
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  pub fn notes(&self) -> impl Iterator<Item = &GenerationWarning> {
    self.warnings.iter().filter(|warning| warning.is_note())
  }

  pub fn problems(&self) -> impl Iterator<Item = &GenerationWarning> {
    self.warnings.iter().filter(|warning| !warning.is_note())
  }
}

/// Naming-convention mismatches found while emitting. None of them stop generation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(
    to_string = "{file}: service '{service}' has no 'Service' marker; its use-case dependency keeps the name '{service}'"
  )]
  ServiceWithoutMarker { file: String, service: String },
  #[strum(
    to_string = "[{service}.{method}] message '{message}' is declared in '{import_path}' but is referenced unqualified"
  )]
  ForeignTransportMessage {
    service: String,
    method: String,
    message: String,
    import_path: String,
  },
  #[strum(to_string = "[{service}.{method}] streaming methods are generated as unary adapters")]
  StreamingMethod { service: String, method: String },
  #[strum(to_string = "[{service}.{method}] {role} '{type_name}' has no use-case suffix; resolved against the domain root")]
  DomainFallback {
    service: String,
    method: String,
    role: String,
    type_name: String,
  },
}

impl GenerationWarning {
  /// Expected outcomes of the conventions, only shown in verbose output.
  pub fn is_note(&self) -> bool {
    matches!(self, Self::DomainFallback { .. })
  }
}
