use std::collections::BTreeMap;

use prost_types::{DescriptorProto, FileDescriptorProto, FileOptions, MethodDescriptorProto, ServiceDescriptorProto};

use crate::generator::{ResolverConfig, SchemaSet};

pub(crate) const ORDER_GO_PACKAGE: &str = "example.com/shop/gen/orderpb;orderpb";

pub(crate) fn message(name: &str) -> DescriptorProto {
  DescriptorProto {
    name: Some(name.to_string()),
    ..Default::default()
  }
}

pub(crate) fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
  MethodDescriptorProto {
    name: Some(name.to_string()),
    input_type: Some(input.to_string()),
    output_type: Some(output.to_string()),
    ..Default::default()
  }
}

pub(crate) fn service(name: &str, methods: Vec<MethodDescriptorProto>) -> ServiceDescriptorProto {
  ServiceDescriptorProto {
    name: Some(name.to_string()),
    method: methods,
    ..Default::default()
  }
}

pub(crate) fn proto_file(name: &str, package: &str, go_package: Option<&str>) -> FileDescriptorProto {
  FileDescriptorProto {
    name: Some(name.to_string()),
    package: Some(package.to_string()),
    syntax: Some("proto3".to_string()),
    options: go_package.map(|go_package| FileOptions {
      go_package: Some(go_package.to_string()),
      ..Default::default()
    }),
    ..Default::default()
  }
}

/// `order/order.proto`: the transport messages.
pub(crate) fn order_types_file() -> FileDescriptorProto {
  let mut file = proto_file("order/order.proto", "shop.order", Some(ORDER_GO_PACKAGE));
  file.message_type = ["CreateOrderParam", "CreateOrderResponse", "Widget", "Order"]
    .into_iter()
    .map(message)
    .collect();
  file
}

/// `order/order.services.proto`: `OrderService` with `CreateOrder` and `GetWidget`.
pub(crate) fn order_services_file() -> FileDescriptorProto {
  let mut file = proto_file("order/order.services.proto", "shop.order", Some(ORDER_GO_PACKAGE));
  file.dependency = vec!["order/order.proto".to_string()];
  file.service = vec![service(
    "OrderService",
    vec![
      method(
        "CreateOrder",
        ".shop.order.CreateOrderParam",
        ".shop.order.CreateOrderResponse",
      ),
      method("GetWidget", ".shop.order.Widget", ".shop.order.Order"),
    ],
  )];
  file
}

pub(crate) fn resolver_config() -> ResolverConfig {
  ResolverConfig::builder()
    .domain_root("pkg/domain")
    .use_case_root("pkg/usecase")
    .transform_root("pkg/dts")
    .build()
}

/// Both order files, every file flagged for generation.
pub(crate) fn order_schema() -> SchemaSet {
  schema(vec![order_types_file(), order_services_file()])
}

pub(crate) fn schema(files: Vec<FileDescriptorProto>) -> SchemaSet {
  let to_generate: Vec<String> = files.iter().map(|file| file.name().to_string()).collect();
  SchemaSet::from_descriptors(&files, &to_generate, &BTreeMap::new()).unwrap()
}
