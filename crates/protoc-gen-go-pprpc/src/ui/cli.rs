use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

/// Without a subcommand the binary speaks the protoc plugin protocol on stdin/stdout.
#[derive(Parser, Debug)]
#[command(name = "protoc-gen-go-pprpc")]
#[command(author, version, about = "protoc plugin that generates twirp adapters for Go use-case layers")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,

  /// Enable verbose output, including naming-convention notes
  #[arg(short, long, default_value_t = false, global = true)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, global = true)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Generate adapters from a descriptor set without going through protoc
  Generate(GenerateCommand),
  /// List information from a descriptor set
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// FileDescriptorSet written by `protoc --include_imports --descriptor_set_out`
  #[arg(short, long, value_name = "FILE")]
  pub descriptor_set: PathBuf,

  /// Plugin parameters, as passed to `--go-pprpc_out` (comma-separated KEY=VALUE)
  #[arg(short, long, value_name = "PARAMS")]
  pub param: String,

  /// Proto files to generate for (default: every file in the set)
  #[arg(short, long = "file", value_name = "PROTO")]
  pub files: Vec<String>,

  /// Directory the generated files are written under
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub output: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List eligible services, their methods and resolved use-case identifiers
  Services {
    /// FileDescriptorSet written by `protoc --include_imports --descriptor_set_out`
    #[arg(short, long, value_name = "FILE")]
    descriptor_set: PathBuf,

    /// Plugin parameters (comma-separated KEY=VALUE)
    #[arg(short, long, value_name = "PARAMS")]
    param: String,
  },
}
