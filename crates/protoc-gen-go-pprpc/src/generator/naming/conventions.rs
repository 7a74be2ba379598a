//! Naming conventions that tie schema names to the application's layers.
//!
//! Method input and output messages carry no role metadata, so the suffix of the
//! message name is the only signal for whether the application-facing type is
//! declared per use case or shared in the domain package. Services are mapped to
//! their use-case dependency by swapping the `Service` marker for `UseCase`.
//!
//! These are plain string rules. A schema that does not follow them still
//! generates; the mismatch only shows up when the output is compiled.

use strum::Display;

pub(crate) const SERVICE_MARKER: &str = "Service";
pub(crate) const USE_CASE_MARKER: &str = "UseCase";

const PARAM_SUFFIXES: [&str; 2] = ["Param", "Params"];
const RESPONSE_SUFFIX: &str = "Response";

/// Application layer a referenced type is expected to live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Layer {
  #[strum(to_string = "use case")]
  UseCase,
  #[strum(to_string = "domain")]
  Domain,
}

/// Replaces the first `Service` marker in `service_name` with `UseCase`.
///
/// Names without the marker are returned unchanged.
pub(crate) fn use_case_name(service_name: &str) -> String {
  service_name.replacen(SERVICE_MARKER, USE_CASE_MARKER, 1)
}

pub(crate) fn has_service_marker(service_name: &str) -> bool {
  service_name.contains(SERVICE_MARKER)
}

pub(crate) fn request_param_layer(type_name: &str) -> Layer {
  if PARAM_SUFFIXES.iter().any(|suffix| type_name.ends_with(suffix)) {
    Layer::UseCase
  } else {
    Layer::Domain
  }
}

pub(crate) fn response_payload_layer(type_name: &str) -> Layer {
  if type_name.ends_with(RESPONSE_SUFFIX) {
    Layer::UseCase
  } else {
    Layer::Domain
  }
}
