use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use prost_types::compiler::CodeGeneratorRequest;

use crate::{
  generator::{
    naming::conventions::use_case_name,
    resolver::{IdentifierResolver, Role},
    selector,
  },
  plugin,
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::descriptor::{DescriptorSetLoader, request_from_set},
};

/// One table row: a method with the identifiers its adapter will reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceListing {
  pub(crate) file: String,
  pub(crate) service: String,
  pub(crate) use_case: String,
  pub(crate) method: String,
  pub(crate) param: String,
  pub(crate) response: String,
}

pub(crate) fn collect_listings(request: &CodeGeneratorRequest) -> anyhow::Result<Vec<ServiceListing>> {
  let (orchestrator, _) = plugin::orchestrator(request)?;
  let resolver = IdentifierResolver::new(orchestrator.config());

  let mut listings = vec![];
  for file in selector::select_files(&orchestrator.schema().files) {
    for service in &file.services {
      let use_case = resolver.resolve(Role::UseCaseType, &use_case_name(&service.go_name));
      for method in &service.methods {
        listings.push(ServiceListing {
          file: file.name.clone(),
          service: service.go_name.clone(),
          use_case: use_case.to_string(),
          method: method.go_name.clone(),
          param: resolver.resolve(Role::RequestParam, &method.input.name).to_string(),
          response: resolver.resolve(Role::ResponsePayload, &method.output.name).to_string(),
        });
      }
    }
  }

  Ok(listings)
}

pub async fn list_services(descriptor_set: &Path, param: &str, colors: &Colors) -> anyhow::Result<()> {
  let set = DescriptorSetLoader::open(descriptor_set).await?.parse()?;
  let request = request_from_set(set, &[], Some(param.to_string()));
  let listings = collect_listings(&request)?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["FILE", "SERVICE", "USE CASE", "METHOD", "PARAM", "RESPONSE"] {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);

  for listing in listings {
    let mut row = Row::new();
    row.add_cell(Cell::new(listing.file).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(listing.service)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(listing.use_case).fg(IntoComfyColor::into(colors.info())));
    row.add_cell(Cell::new(listing.method).fg(IntoComfyColor::into(colors.accent())));
    row.add_cell(Cell::new(listing.param).fg(IntoComfyColor::into(colors.info())));
    row.add_cell(Cell::new(listing.response).fg(IntoComfyColor::into(colors.info())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
