use std::collections::BTreeMap;

use super::support::{method, order_schema, order_services_file, order_types_file, proto_file, resolver_config, service};
use crate::generator::{OutputLayout, Orchestrator, PathsMode, SchemaSet};

fn billing_services_file() -> prost_types::FileDescriptorProto {
  let mut file = proto_file(
    "billing/billing.services.proto",
    "shop.billing",
    Some("example.com/shop/gen/billingpb;billingpb"),
  );
  file.message_type = vec![
    super::support::message("ChargeParam"),
    super::support::message("ChargeResponse"),
  ];
  file.service = vec![service(
    "BillingService",
    vec![method("Charge", ".shop.billing.ChargeParam", ".shop.billing.ChargeResponse")],
  )];
  file
}

#[test]
fn test_generates_one_file_per_selected_schema_file() {
  let orchestrator = Orchestrator::new(order_schema(), resolver_config(), OutputLayout::default());
  let output = orchestrator.generate().unwrap();

  let names: Vec<&str> = output.files.iter().map(|file| file.name.as_str()).collect();
  assert_eq!(names, vec!["order/order.services_pprpc.pb.go"]);

  assert_eq!(output.stats.files_scanned, 2);
  assert_eq!(output.stats.files_selected, 1);
  assert_eq!(output.stats.services_generated, 1);
  assert_eq!(output.stats.adapters_generated, 2);
  assert_eq!(output.stats.problems().count(), 0);
  assert_eq!(output.stats.notes().count(), 2);
}

#[test]
fn test_files_keep_input_order() {
  let schema = super::support::schema(vec![billing_services_file(), order_types_file(), order_services_file()]);
  let orchestrator = Orchestrator::new(schema, resolver_config(), OutputLayout::default());
  let output = orchestrator.generate().unwrap();

  let names: Vec<&str> = output.files.iter().map(|file| file.name.as_str()).collect();
  assert_eq!(
    names,
    vec!["billing/billing.services_pprpc.pb.go", "order/order.services_pprpc.pb.go"]
  );
  assert!(output.files[0].content.contains("package billingpb\n"));
  assert!(output.files[0].content.contains("\tUseCase usecase.BillingUseCase\n"));
}

#[test]
fn test_unflagged_service_files_are_skipped() {
  let schema = SchemaSet::from_descriptors(
    &[billing_services_file(), order_types_file(), order_services_file()],
    &["order/order.services.proto".to_string()],
    &BTreeMap::new(),
  )
  .unwrap();
  let orchestrator = Orchestrator::new(schema, resolver_config(), OutputLayout::default());
  let output = orchestrator.generate().unwrap();

  assert_eq!(output.files.len(), 1);
  assert_eq!(output.files[0].name, "order/order.services_pprpc.pb.go");
}

#[test]
fn test_no_eligible_files_yields_empty_output() {
  let schema = super::support::schema(vec![order_types_file()]);
  let orchestrator = Orchestrator::new(schema, resolver_config(), OutputLayout::default());
  let output = orchestrator.generate().unwrap();

  assert!(output.files.is_empty());
  assert_eq!(output.stats.files_scanned, 1);
  assert_eq!(output.stats.files_selected, 0);
}

#[test]
fn test_import_layout() {
  let layout = OutputLayout::builder()
    .paths(PathsMode::Import)
    .module("example.com/shop")
    .build();
  let orchestrator = Orchestrator::new(order_schema(), resolver_config(), layout);
  let output = orchestrator.generate().unwrap();

  assert_eq!(output.files[0].name, "gen/orderpb/order.services_pprpc.pb.go");
}

#[test]
fn test_layout_error_aborts_the_pass() {
  let layout = OutputLayout::builder()
    .paths(PathsMode::Import)
    .module("example.com/elsewhere")
    .build();
  let orchestrator = Orchestrator::new(order_schema(), resolver_config(), layout);

  assert!(orchestrator.generate().is_err());
}

#[test]
fn test_generation_is_idempotent() {
  let orchestrator = Orchestrator::new(order_schema(), resolver_config(), OutputLayout::default());
  assert_eq!(orchestrator.generate().unwrap(), orchestrator.generate().unwrap());
}
