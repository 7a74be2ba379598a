use std::path::Path;

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use prost::Message;
use prost_types::{FileDescriptorSet, compiler::CodeGeneratorRequest};

/// A `FileDescriptorSet` written by `protoc --include_imports --descriptor_set_out=FILE`.
pub struct DescriptorSetLoader {
  file: AsyncMmapFile,
}

impl DescriptorSetLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<FileDescriptorSet> {
    Ok(FileDescriptorSet::decode(self.file.as_slice())?)
  }
}

/// Builds the request protoc would send for `set`.
///
/// With no `files` every file in the set is flagged for generation.
pub fn request_from_set(set: FileDescriptorSet, files: &[String], parameter: Option<String>) -> CodeGeneratorRequest {
  let file_to_generate = if files.is_empty() {
    set.file.iter().map(|file| file.name().to_string()).collect()
  } else {
    files.to_vec()
  };

  CodeGeneratorRequest {
    file_to_generate,
    parameter,
    proto_file: set.file,
    ..Default::default()
  }
}
