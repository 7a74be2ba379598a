use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::{
  plugin,
  ui::{Colors, Logger, Verbosity},
};

/// Runs one protoc plugin exchange over stdin/stdout.
///
/// Generation failures are reported in the response for protoc to print; only a
/// broken pipe or an undecodable request fails the process.
pub async fn run_plugin(colors: &Colors) -> anyhow::Result<()> {
  let mut input = Vec::new();
  tokio::io::stdin().read_to_end(&mut input).await?;
  let request = plugin::decode_request(&input)?;

  let response = match plugin::orchestrator(&request) {
    Ok((orchestrator, options)) => {
      let verbosity = if options.verbose {
        Verbosity::Verbose
      } else {
        Verbosity::Warnings
      };
      match orchestrator.generate() {
        Ok(output) => {
          Logger::new(colors, verbosity).report(&output.stats);
          plugin::success_response(&output)
        }
        Err(err) => plugin::error_response(&err),
      }
    }
    Err(err) => plugin::error_response(&err),
  };

  let mut stdout = tokio::io::stdout();
  stdout.write_all(&plugin::encode_response(&response)).await?;
  stdout.flush().await?;
  Ok(())
}
