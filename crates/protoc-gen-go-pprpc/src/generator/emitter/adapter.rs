use super::{ERROR_TRANSLATION_ROUTINE, UnitBuilder, WRAPPER_SUFFIX};
use crate::generator::{
  ast::{
    AdapterFunction, AdapterStep, Declaration, ERR_VAR, ErrorPolicy, GoIdent, GoType, LocalVar, RECEIVER_VAR,
    ServiceWrapper, TRANSPORT_INPUT_VAR, TRANSPORT_OUTPUT_VAR, TransformCall, USE_CASE_FIELD, USE_CASE_INPUT_VAR,
    USE_CASE_OUTPUT_VAR, UseCaseCall,
  },
  metrics::GenerationWarning,
  naming::conventions::{Layer, has_service_marker, use_case_name},
  resolver::{IdentifierResolver, Role},
  schema::{Method, Service},
};

impl UnitBuilder<'_> {
  pub(super) fn service(&mut self, service: &Service) {
    let wrapper_name = format!("{}{WRAPPER_SUFFIX}", service.go_name);

    if !has_service_marker(&service.go_name) {
      self.warn(GenerationWarning::ServiceWithoutMarker {
        file: self.file.name.clone(),
        service: service.go_name.clone(),
      });
    }
    let use_case = self.resolve(Role::UseCaseType, &use_case_name(&service.go_name));

    self.push(Declaration::ServiceWrapper(
      ServiceWrapper::builder().name(&wrapper_name).use_case(use_case).build(),
    ));

    for method in &service.methods {
      let adapter = self.adapter(&wrapper_name, service, method);
      self.push(Declaration::AdapterFunction(adapter));
    }
  }

  fn adapter(&mut self, wrapper_name: &str, service: &Service, method: &Method) -> AdapterFunction {
    self.check_method(service, method);

    let context = self.resolver.context_type();
    let context = self.reference(context);
    let use_case_input = self.resolve(Role::RequestParam, &method.input.name);
    let use_case_output = self.resolve(Role::ResponsePayload, &method.output.name);
    let transform = self.resolver.transform_function();
    let transform = self.reference(transform);

    let steps = vec![
      AdapterStep::DeclareLocals(vec![
        LocalVar::new(ERR_VAR, GoType::local("error")),
        LocalVar::new(USE_CASE_INPUT_VAR, GoType::imported(use_case_input)),
        LocalVar::new(USE_CASE_OUTPUT_VAR, GoType::imported(use_case_output).pointer()),
        LocalVar::new(TRANSPORT_OUTPUT_VAR, GoType::local(&method.output.name)),
      ]),
      AdapterStep::TransformInput(TransformCall {
        function: transform.clone(),
        source: TRANSPORT_INPUT_VAR.to_string(),
        target: USE_CASE_INPUT_VAR.to_string(),
        on_error: ErrorPolicy::Propagate,
      }),
      AdapterStep::InvokeUseCase(UseCaseCall {
        receiver: RECEIVER_VAR.to_string(),
        field: USE_CASE_FIELD.to_string(),
        method: method.go_name.clone(),
        input: USE_CASE_INPUT_VAR.to_string(),
        output: USE_CASE_OUTPUT_VAR.to_string(),
        on_error: ErrorPolicy::Translate {
          routine: ERROR_TRANSLATION_ROUTINE.to_string(),
        },
      }),
      AdapterStep::TransformOutput(TransformCall {
        function: transform,
        source: USE_CASE_OUTPUT_VAR.to_string(),
        target: TRANSPORT_OUTPUT_VAR.to_string(),
        on_error: ErrorPolicy::Propagate,
      }),
      AdapterStep::ReturnOutput {
        output: TRANSPORT_OUTPUT_VAR.to_string(),
      },
    ];

    AdapterFunction::builder()
      .receiver_type(wrapper_name)
      .name(&method.go_name)
      .context(context)
      .input(GoType::local(&method.input.name).pointer())
      .output(GoType::local(&method.output.name).pointer())
      .steps(steps)
      .build()
  }

  /// Warnings name the proto service and method as declared in the schema.
  fn check_method(&mut self, service: &Service, method: &Method) {
    if method.is_streaming() {
      self.warn(GenerationWarning::StreamingMethod {
        service: service.name.clone(),
        method: method.name.clone(),
      });
    }

    for message in [&method.input, &method.output] {
      if message.import_path != self.file.import_path {
        let warning = foreign_message(service, method, message);
        self.warn(warning);
      }
    }

    for (role, message) in [(Role::RequestParam, &method.input), (Role::ResponsePayload, &method.output)] {
      if IdentifierResolver::layer_of(role, &message.name) == Some(Layer::Domain) {
        self.warn(GenerationWarning::DomainFallback {
          service: service.name.clone(),
          method: method.name.clone(),
          role: role.to_string(),
          type_name: message.name.clone(),
        });
      }
    }
  }
}

fn foreign_message(service: &Service, method: &Method, message: &GoIdent) -> GenerationWarning {
  GenerationWarning::ForeignTransportMessage {
    service: service.name.clone(),
    method: method.name.clone(),
    message: message.name.clone(),
    import_path: message.import_path.to_string(),
  }
}
