use strum::{Display, EnumString};

use crate::generator::{emitter::GENERATED_FILE_SUFFIX, schema::SchemaFile};

/// Where generated files are placed, relative to the protoc output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum PathsMode {
  /// Next to the schema file: `<proto dir>/<stem>_pprpc.pb.go`.
  #[default]
  #[strum(serialize = "source_relative")]
  SourceRelative,
  /// Under the Go import path: `<import path>/<stem>_pprpc.pb.go`.
  #[strum(serialize = "import")]
  Import,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct OutputLayout {
  #[builder(default)]
  pub paths: PathsMode,
  /// Prefix removed from output names in [`PathsMode::Import`].
  #[builder(into)]
  pub module: Option<String>,
}

impl OutputLayout {
  pub fn file_name(&self, file: &SchemaFile) -> anyhow::Result<String> {
    let name = match self.paths {
      PathsMode::SourceRelative => format!("{}{GENERATED_FILE_SUFFIX}", file.stem()),
      PathsMode::Import => format!("{}/{}{GENERATED_FILE_SUFFIX}", file.import_path, file.base_stem()),
    };

    match (&self.module, self.paths) {
      (Some(module), PathsMode::Import) => {
        let prefix = format!("{}/", module.trim_end_matches('/'));
        let Some(stripped) = name.strip_prefix(&prefix) else {
          anyhow::bail!("output file \"{name}\" does not have the module prefix \"{prefix}\"");
        };
        Ok(stripped.to_string())
      }
      _ => Ok(name),
    }
  }
}
