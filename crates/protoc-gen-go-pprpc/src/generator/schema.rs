//! Read-only view of the parsed schema files handed over by protoc.

use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::Context;
use prost_types::{DescriptorProto, FileDescriptorProto, MethodDescriptorProto, ServiceDescriptorProto};

use crate::generator::{
  ast::{GoIdent, GoImportPath},
  naming::identifiers::{clean_package_name, go_camel_case, go_sanitized},
};

const PROTO_EXTENSION: &str = ".proto";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
  pub name: String,
  pub go_name: String,
  pub input: GoIdent,
  pub output: GoIdent,
  pub client_streaming: bool,
  pub server_streaming: bool,
}

impl Method {
  pub fn is_streaming(&self) -> bool {
    self.client_streaming || self.server_streaming
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
  pub name: String,
  pub go_name: String,
  pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
  pub name: String,
  pub generate: bool,
  pub import_path: GoImportPath,
  pub package_name: String,
  pub services: Vec<Service>,
}

impl SchemaFile {
  /// File name with the trailing `.proto` removed.
  pub fn stem(&self) -> &str {
    self.name.strip_suffix(PROTO_EXTENSION).unwrap_or(&self.name)
  }

  /// Last path component of [`SchemaFile::stem`].
  pub fn base_stem(&self) -> &str {
    let stem = self.stem();
    stem.rsplit('/').next().unwrap_or(stem)
  }
}

/// Every file of a request, in the order protoc supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSet {
  pub files: Vec<SchemaFile>,
}

#[derive(Debug, Clone, Default)]
struct PackageInfo {
  import_path: Option<GoImportPath>,
  package_name: Option<String>,
}

impl PackageInfo {
  fn from_descriptor(file: &FileDescriptorProto, import_overrides: &BTreeMap<String, String>) -> Self {
    let go_package = import_overrides
      .get(file.name())
      .map(String::as_str)
      .or_else(|| file.options.as_ref().and_then(|options| options.go_package.as_deref()))
      .filter(|value| !value.is_empty());

    let Some(go_package) = go_package else {
      return Self::default();
    };

    match go_package.split_once(';') {
      Some((path, name)) => Self {
        import_path: (!path.is_empty()).then(|| GoImportPath::new(path)),
        package_name: Some(go_sanitized(name)),
      },
      None => Self {
        import_path: Some(GoImportPath::new(go_package)),
        package_name: None,
      },
    }
  }

  fn require_import_path(&self, file_name: &str) -> anyhow::Result<&GoImportPath> {
    self.import_path.as_ref().with_context(|| {
      format!(
        "unable to determine Go import path for \"{file_name}\": set option go_package or pass M{file_name}=<import path>"
      )
    })
  }
}

#[derive(Debug, Clone)]
struct MessageEntry {
  go_name: String,
  file_name: String,
}

/// Fully-qualified proto message name (`.pkg.Outer.Inner`) to its Go name and declaring file.
#[derive(Debug, Default)]
struct MessageIndex {
  messages: HashMap<String, MessageEntry>,
}

impl MessageIndex {
  fn build(files: &[FileDescriptorProto]) -> Self {
    let mut index = Self::default();
    for file in files {
      for message in &file.message_type {
        index.insert_message(file, "", message);
      }
    }
    index
  }

  fn insert_message(&mut self, file: &FileDescriptorProto, parent: &str, message: &DescriptorProto) {
    let relative = if parent.is_empty() {
      message.name().to_string()
    } else {
      format!("{parent}.{}", message.name())
    };

    let full_name = if file.package().is_empty() {
      format!(".{relative}")
    } else {
      format!(".{}.{relative}", file.package())
    };

    for nested in &message.nested_type {
      self.insert_message(file, &relative, nested);
    }

    self.messages.insert(
      full_name,
      MessageEntry {
        go_name: go_camel_case(&relative),
        file_name: file.name().to_string(),
      },
    );
  }

  fn get(&self, full_name: &str) -> Option<&MessageEntry> {
    self.messages.get(full_name)
  }
}

impl SchemaSet {
  /// Builds the schema model from protoc descriptors.
  ///
  /// `file_to_generate` marks the files protoc asked to generate for;
  /// `import_overrides` holds `M<file>=<import path>` parameter mappings.
  pub fn from_descriptors(
    files: &[FileDescriptorProto],
    file_to_generate: &[String],
    import_overrides: &BTreeMap<String, String>,
  ) -> anyhow::Result<Self> {
    let generate: HashSet<&str> = file_to_generate.iter().map(String::as_str).collect();
    let packages: HashMap<&str, PackageInfo> = files
      .iter()
      .map(|file| (file.name(), PackageInfo::from_descriptor(file, import_overrides)))
      .collect();
    let index = MessageIndex::build(files);

    let resolver = MessageResolver {
      index: &index,
      packages: &packages,
    };

    let files = files
      .iter()
      .map(|file| {
        let is_generated = generate.contains(file.name());
        resolver.schema_file(file, is_generated)
      })
      .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Self { files })
  }

  #[cfg(test)]
  pub fn file(&self, name: &str) -> Option<&SchemaFile> {
    self.files.iter().find(|file| file.name == name)
  }
}

struct MessageResolver<'a> {
  index: &'a MessageIndex,
  packages: &'a HashMap<&'a str, PackageInfo>,
}

impl MessageResolver<'_> {
  fn schema_file(&self, file: &FileDescriptorProto, generate: bool) -> anyhow::Result<SchemaFile> {
    let package = self.packages.get(file.name()).cloned().unwrap_or_default();

    // Dependencies only need a Go import path when one of their messages is referenced.
    let import_path = if generate {
      package.require_import_path(file.name())?.clone()
    } else {
      package.import_path.clone().unwrap_or_default()
    };

    let package_name = package
      .package_name
      .clone()
      .unwrap_or_else(|| clean_package_name(import_path.as_str()));

    let services = if generate {
      file
        .service
        .iter()
        .map(|service| self.service(file, service))
        .collect::<anyhow::Result<Vec<_>>>()?
    } else {
      vec![]
    };

    Ok(SchemaFile {
      name: file.name().to_string(),
      generate,
      import_path,
      package_name,
      services,
    })
  }

  fn service(&self, file: &FileDescriptorProto, service: &ServiceDescriptorProto) -> anyhow::Result<Service> {
    let methods = service
      .method
      .iter()
      .map(|method| self.method(file, service, method))
      .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Service {
      name: service.name().to_string(),
      go_name: go_camel_case(service.name()),
      methods,
    })
  }

  fn method(
    &self,
    file: &FileDescriptorProto,
    service: &ServiceDescriptorProto,
    method: &MethodDescriptorProto,
  ) -> anyhow::Result<Method> {
    let context = || format!("{}: method {}.{}", file.name(), service.name(), method.name());

    Ok(Method {
      name: method.name().to_string(),
      go_name: go_camel_case(method.name()),
      input: self.message_ident(method.input_type()).with_context(context)?,
      output: self.message_ident(method.output_type()).with_context(context)?,
      client_streaming: method.client_streaming(),
      server_streaming: method.server_streaming(),
    })
  }

  fn message_ident(&self, full_name: &str) -> anyhow::Result<GoIdent> {
    let entry = self
      .index
      .get(full_name)
      .with_context(|| format!("message type \"{full_name}\" is not defined in any supplied file"))?;

    let import_path = self
      .packages
      .get(entry.file_name.as_str())
      .with_context(|| format!("file \"{}\" is not part of the request", entry.file_name))?
      .require_import_path(&entry.file_name)?;

    Ok(GoIdent::new(entry.go_name.clone(), import_path.clone()))
  }
}
