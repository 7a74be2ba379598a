use crate::generator::naming::conventions::{
  Layer, has_service_marker, request_param_layer, response_payload_layer, use_case_name,
};

#[test]
fn test_use_case_name_replaces_service_marker() {
  let cases = [
    ("OrderService", "OrderUseCase"),
    ("ServiceOrder", "UseCaseOrder"),
    ("OrderServiceServiceV2", "OrderUseCaseServiceV2"),
    ("Service", "UseCase"),
  ];
  for (input, expected) in cases {
    assert_eq!(use_case_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_use_case_name_without_marker_is_unchanged() {
  for name in ["Orders", "OrderApi", "Servic", "service"] {
    assert_eq!(use_case_name(name), name);
    assert!(!has_service_marker(name));
  }
}

#[test]
fn test_request_param_layer() {
  let cases = [
    ("CreateOrderParam", Layer::UseCase),
    ("CreateOrderParams", Layer::UseCase),
    ("Param", Layer::UseCase),
    ("Widget", Layer::Domain),
    ("CreateOrderRequest", Layer::Domain),
    ("ParamWidget", Layer::Domain),
    ("CreateOrderParameters", Layer::Domain),
  ];
  for (input, expected) in cases {
    assert_eq!(request_param_layer(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_response_payload_layer() {
  let cases = [
    ("CreateOrderResponse", Layer::UseCase),
    ("Response", Layer::UseCase),
    ("Order", Layer::Domain),
    ("CreateOrderResponses", Layer::Domain),
    ("ResponseOrder", Layer::Domain),
  ];
  for (input, expected) in cases {
    assert_eq!(response_payload_layer(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_layer_display() {
  assert_eq!(Layer::UseCase.to_string(), "use case");
  assert_eq!(Layer::Domain.to_string(), "domain");
}
