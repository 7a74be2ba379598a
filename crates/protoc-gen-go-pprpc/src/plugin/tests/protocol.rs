use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, code_generator_response::Feature};

use crate::{
  generator::tests::support::{order_services_file, order_types_file},
  plugin,
};

fn request(parameter: &str) -> CodeGeneratorRequest {
  CodeGeneratorRequest {
    file_to_generate: vec!["order/order.services.proto".to_string()],
    parameter: Some(parameter.to_string()),
    proto_file: vec![order_types_file(), order_services_file()],
    ..Default::default()
  }
}

#[test]
fn test_request_round_trip_through_wire_format() {
  let request = request("domainPath=pkg/domain,useCasePath=pkg/usecase,dtsPath=pkg/dts");
  let decoded = plugin::decode_request(&request.encode_to_vec()).unwrap();
  assert_eq!(decoded, request);
}

#[test]
fn test_undecodable_request_is_an_error() {
  assert!(plugin::decode_request(&[0xff, 0xff, 0xff]).is_err());
}

#[test]
fn test_success_response() {
  let request = request("domainPath=pkg/domain,useCasePath=pkg/usecase,dtsPath=pkg/dts");
  let (orchestrator, options) = plugin::orchestrator(&request).unwrap();
  assert!(!options.verbose);

  let response = plugin::success_response(&orchestrator.generate().unwrap());

  assert_eq!(response.error, None);
  assert_eq!(response.supported_features, Some(Feature::Proto3Optional as u64));
  assert_eq!(response.file.len(), 1);
  assert_eq!(response.file[0].name(), "order/order.services_pprpc.pb.go");
  assert!(
    response.file[0]
      .content()
      .starts_with("// Code generated by protoc-gen-go-pprpc. DO NOT EDIT.\n")
  );
  assert_eq!(response.file[0].insertion_point, None);

  let bytes = plugin::encode_response(&response);
  let decoded = prost_types::compiler::CodeGeneratorResponse::decode(bytes.as_slice()).unwrap();
  assert_eq!(decoded, response);
}

#[test]
fn test_parameter_error_is_reported_in_response() {
  let request = request("domainPath=pkg/domain,useCasePath=pkg/usecase");
  let Err(err) = plugin::orchestrator(&request) else {
    panic!("expected a parameter error");
  };

  let response = plugin::error_response(&err);
  assert_eq!(response.error.as_deref(), Some("missing required parameter 'dtsPath'"));
  assert!(response.file.is_empty());
}

#[test]
fn test_error_response_includes_context_chain() {
  let mut request = request("domainPath=pkg/domain,useCasePath=pkg/usecase,dtsPath=pkg/dts");
  request.proto_file[1].service[0].method[0].input_type = Some(".shop.order.Missing".to_string());

  let Err(err) = plugin::orchestrator(&request) else {
    panic!("expected a schema error");
  };
  let response = plugin::error_response(&err);

  assert_eq!(
    response.error.as_deref(),
    Some(
      "order/order.services.proto: method OrderService.CreateOrder: message type \".shop.order.Missing\" is not \
       defined in any supplied file"
    )
  );
}
