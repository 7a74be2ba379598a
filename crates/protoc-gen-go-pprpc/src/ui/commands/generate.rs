use std::path::PathBuf;

use crate::{
  generator::GeneratedFinalOutput,
  plugin,
  ui::{Colors, GenerateCommand, Logger, Verbosity},
  utils::descriptor::{DescriptorSetLoader, request_from_set},
};

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub descriptor_set: PathBuf,
  pub param: String,
  pub files: Vec<String>,
  pub output: PathBuf,
  pub verbosity: Verbosity,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand, verbose: bool, quiet: bool) -> Self {
    let GenerateCommand {
      descriptor_set,
      param,
      files,
      output,
    } = command;

    Self {
      descriptor_set,
      param,
      files,
      output,
      verbosity: Verbosity::from_flags(verbose, quiet),
    }
  }

  async fn write_output(&self, output: &GeneratedFinalOutput) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(output.files.len());
    for file in &output.files {
      let path = self.output.join(&file.name);
      if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
      }
      tokio::fs::write(&path, &file.content).await?;
      written.push(path);
    }
    Ok(written)
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = Logger::new(colors, config.verbosity);

  logger.info(&format!("Loading descriptor set from: {}", config.descriptor_set.display()));
  let set = DescriptorSetLoader::open(&config.descriptor_set).await?.parse()?;
  let request = request_from_set(set, &config.files, Some(config.param.clone()));

  logger.info("Generating twirp adapters...");
  let (orchestrator, _) = plugin::orchestrator(&request)?;
  let output = orchestrator.generate()?;
  logger.report(&output.stats);

  logger.info(&format!("Writing to: {}", config.output.display()));
  let written = config.write_output(&output).await?;
  if config.verbosity >= Verbosity::Verbose {
    for path in &written {
      logger.info(&format!("  {}", path.display()));
    }
  }

  logger.success(&format!("Successfully generated {} file(s)", written.len()));
  Ok(())
}
