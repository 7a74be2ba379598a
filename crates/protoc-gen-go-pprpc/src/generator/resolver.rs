use strum::Display;

use crate::generator::{
  ast::{GoIdent, GoImportPath},
  naming::conventions::{Layer, request_param_layer, response_payload_layer},
};

pub(crate) const CONTEXT_IMPORT_PATH: &str = "context";
pub(crate) const CONTEXT_TYPE: &str = "Context";
pub(crate) const TRANSFORM_FUNCTION: &str = "Transform";
pub(crate) const ERRORS_IMPORT_PATH: &str = "errors";
pub(crate) const FMT_IMPORT_PATH: &str = "fmt";
pub(crate) const TWIRP_IMPORT_PATH: &str = "github.com/twitchtv/twirp";

/// The three code-location roots the generated adapters reference.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ResolverConfig {
  #[builder(into)]
  pub domain_root: GoImportPath,
  #[builder(into)]
  pub use_case_root: GoImportPath,
  #[builder(into)]
  pub transform_root: GoImportPath,
}

/// How a bare name is used by the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Role {
  #[strum(to_string = "domain type")]
  DomainType,
  #[strum(to_string = "use-case dependency type")]
  UseCaseType,
  #[strum(to_string = "context type")]
  ContextType,
  #[strum(to_string = "data-transform function")]
  TransformFunction,
  #[strum(to_string = "request parameter type")]
  RequestParam,
  #[strum(to_string = "response payload type")]
  ResponsePayload,
}

/// Binds bare names to their code-location root.
///
/// Resolution never fails; a name routed to the wrong root only surfaces when
/// the generated package is compiled.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierResolver<'a> {
  config: &'a ResolverConfig,
}

impl<'a> IdentifierResolver<'a> {
  pub fn new(config: &'a ResolverConfig) -> Self {
    Self { config }
  }

  pub fn resolve(&self, role: Role, name: &str) -> GoIdent {
    match role {
      Role::DomainType => GoIdent::new(name, self.config.domain_root.clone()),
      Role::UseCaseType => GoIdent::new(name, self.config.use_case_root.clone()),
      Role::ContextType => GoIdent::new(CONTEXT_TYPE, CONTEXT_IMPORT_PATH),
      Role::TransformFunction => GoIdent::new(TRANSFORM_FUNCTION, self.config.transform_root.clone()),
      Role::RequestParam => self.in_layer(request_param_layer(name), name),
      Role::ResponsePayload => self.in_layer(response_payload_layer(name), name),
    }
  }

  pub fn context_type(&self) -> GoIdent {
    self.resolve(Role::ContextType, CONTEXT_TYPE)
  }

  pub fn transform_function(&self) -> GoIdent {
    self.resolve(Role::TransformFunction, TRANSFORM_FUNCTION)
  }

  /// Layer a name of the given role lands in, if the role is convention-routed.
  pub fn layer_of(role: Role, name: &str) -> Option<Layer> {
    match role {
      Role::RequestParam => Some(request_param_layer(name)),
      Role::ResponsePayload => Some(response_payload_layer(name)),
      Role::DomainType | Role::UseCaseType | Role::ContextType | Role::TransformFunction => None,
    }
  }

  fn in_layer(&self, layer: Layer, name: &str) -> GoIdent {
    match layer {
      Layer::UseCase => self.resolve(Role::UseCaseType, name),
      Layer::Domain => self.resolve(Role::DomainType, name),
    }
  }
}

/// Identifiers from fixed ambient packages.
pub(crate) mod ambient {
  use super::{ERRORS_IMPORT_PATH, FMT_IMPORT_PATH, TWIRP_IMPORT_PATH};
  use crate::generator::ast::GoIdent;

  pub(crate) fn twirp(name: &str) -> GoIdent {
    GoIdent::new(name, TWIRP_IMPORT_PATH)
  }

  pub(crate) fn errors(name: &str) -> GoIdent {
    GoIdent::new(name, ERRORS_IMPORT_PATH)
  }

  pub(crate) fn fmt(name: &str) -> GoIdent {
    GoIdent::new(name, FMT_IMPORT_PATH)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config() -> ResolverConfig {
    ResolverConfig::builder()
      .domain_root("pkg/domain")
      .use_case_root("pkg/usecase")
      .transform_root("pkg/dts")
      .build()
  }

  #[test]
  fn test_fixed_roles() {
    let config = config();
    let resolver = IdentifierResolver::new(&config);

    assert_eq!(
      resolver.resolve(Role::DomainType, "Error"),
      GoIdent::new("Error", "pkg/domain")
    );
    assert_eq!(
      resolver.resolve(Role::UseCaseType, "OrderUseCase"),
      GoIdent::new("OrderUseCase", "pkg/usecase")
    );
    assert_eq!(resolver.context_type(), GoIdent::new("Context", "context"));
    assert_eq!(resolver.transform_function(), GoIdent::new("Transform", "pkg/dts"));
  }

  #[test]
  fn test_fixed_names_ignore_bare_name() {
    let config = config();
    let resolver = IdentifierResolver::new(&config);

    assert_eq!(
      resolver.resolve(Role::TransformFunction, "Convert"),
      GoIdent::new("Transform", "pkg/dts")
    );
    assert_eq!(
      resolver.resolve(Role::ContextType, "Ctx"),
      GoIdent::new("Context", "context")
    );
  }

  #[test]
  fn test_request_param_routing() {
    let config = config();
    let resolver = IdentifierResolver::new(&config);

    assert_eq!(
      resolver.resolve(Role::RequestParam, "CreateOrderParam").import_path,
      GoImportPath::new("pkg/usecase")
    );
    assert_eq!(
      resolver.resolve(Role::RequestParam, "ListOrdersParams").import_path,
      GoImportPath::new("pkg/usecase")
    );
    assert_eq!(
      resolver.resolve(Role::RequestParam, "Widget"),
      GoIdent::new("Widget", "pkg/domain")
    );
  }

  #[test]
  fn test_response_payload_routing() {
    let config = config();
    let resolver = IdentifierResolver::new(&config);

    assert_eq!(
      resolver.resolve(Role::ResponsePayload, "CreateOrderResponse"),
      GoIdent::new("CreateOrderResponse", "pkg/usecase")
    );
    assert_eq!(
      resolver.resolve(Role::ResponsePayload, "Order"),
      GoIdent::new("Order", "pkg/domain")
    );
    // A Param suffix means nothing for responses.
    assert_eq!(
      resolver.resolve(Role::ResponsePayload, "OrderParam").import_path,
      GoImportPath::new("pkg/domain")
    );
  }

  #[test]
  fn test_layer_of() {
    assert_eq!(
      IdentifierResolver::layer_of(Role::RequestParam, "Widget"),
      Some(Layer::Domain)
    );
    assert_eq!(
      IdentifierResolver::layer_of(Role::ResponsePayload, "WidgetResponse"),
      Some(Layer::UseCase)
    );
    assert_eq!(IdentifierResolver::layer_of(Role::DomainType, "Widget"), None);
  }

  #[test]
  fn test_role_display() {
    assert_eq!(Role::RequestParam.to_string(), "request parameter type");
    assert_eq!(Role::UseCaseType.to_string(), "use-case dependency type");
  }
}
