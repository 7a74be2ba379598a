//! The protoc plugin protocol: a `CodeGeneratorRequest` arrives on stdin and a
//! `CodeGeneratorResponse` is written to stdout.

mod parameters;

use prost::Message;
use prost_types::compiler::{
  CodeGeneratorRequest, CodeGeneratorResponse,
  code_generator_response::{Feature, File},
};

pub use parameters::PluginOptions;

use crate::generator::{GeneratedFinalOutput, Orchestrator, SchemaSet};

#[cfg(test)]
mod tests;

pub fn decode_request(bytes: &[u8]) -> anyhow::Result<CodeGeneratorRequest> {
  Ok(CodeGeneratorRequest::decode(bytes)?)
}

pub fn encode_response(response: &CodeGeneratorResponse) -> Vec<u8> {
  response.encode_to_vec()
}

/// Builds the orchestrator for a request, parsing its parameter string.
pub fn orchestrator(request: &CodeGeneratorRequest) -> anyhow::Result<(Orchestrator, PluginOptions)> {
  let options = PluginOptions::parse(request.parameter())?;
  let schema = SchemaSet::from_descriptors(&request.proto_file, &request.file_to_generate, &options.import_overrides)?;
  let orchestrator = Orchestrator::new(schema, options.resolver.clone(), options.layout.clone());
  Ok((orchestrator, options))
}

pub fn success_response(output: &GeneratedFinalOutput) -> CodeGeneratorResponse {
  CodeGeneratorResponse {
    file: output
      .files
      .iter()
      .map(|file| File {
        name: Some(file.name.clone()),
        content: Some(file.content.clone()),
        ..Default::default()
      })
      .collect(),
    supported_features: Some(Feature::Proto3Optional as u64),
    ..Default::default()
  }
}

/// Reports a failed pass to protoc, which prints the message and aborts.
pub fn error_response(err: &anyhow::Error) -> CodeGeneratorResponse {
  CodeGeneratorResponse {
    error: Some(format!("{err:#}")),
    supported_features: Some(Feature::Proto3Optional as u64),
    ..Default::default()
  }
}
