use crate::generator::schema::SchemaFile;

/// Only files named `*services.proto` carry adapter-bound service definitions.
pub(crate) const SERVICE_FILE_SUFFIX: &str = "services.proto";

pub(crate) fn is_eligible(file: &SchemaFile) -> bool {
  file.generate && file.name.ends_with(SERVICE_FILE_SUFFIX)
}

/// Files to emit adapters for, in input order.
pub(crate) fn select_files(files: &[SchemaFile]) -> impl Iterator<Item = &SchemaFile> {
  files.iter().filter(|file| is_eligible(file))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::ast::GoImportPath;

  fn file(name: &str, generate: bool) -> SchemaFile {
    SchemaFile {
      name: name.to_string(),
      generate,
      import_path: GoImportPath::new("example.com/orders/orderpb"),
      package_name: "orderpb".to_string(),
      services: vec![],
    }
  }

  #[test]
  fn test_selects_flagged_service_files_in_order() {
    let files = vec![
      file("billing/invoice.services.proto", true),
      file("order/order.proto", true),
      file("order/order.services.proto", true),
      file("shared/common.services.proto", false),
      file("order/orderservices.proto", true),
    ];

    let selected: Vec<&str> = select_files(&files).map(|f| f.name.as_str()).collect();
    assert_eq!(
      selected,
      vec![
        "billing/invoice.services.proto",
        "order/order.services.proto",
        "order/orderservices.proto",
      ]
    );
  }

  #[test]
  fn test_unflagged_service_file_is_skipped() {
    assert!(!is_eligible(&file("order.services.proto", false)));
  }

  #[test]
  fn test_suffix_must_be_at_end() {
    assert!(!is_eligible(&file("order.services.proto.bak", true)));
    assert!(!is_eligible(&file("order.service.proto", true)));
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(select_files(&[]).count(), 0);
  }
}
