use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{generator::GenerationStats, ui::Colors};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// How much the logger prints. Everything goes to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
  Quiet,
  /// Warnings only; the default when running under protoc.
  Warnings,
  Normal,
  Verbose,
}

impl Verbosity {
  pub fn from_flags(verbose: bool, quiet: bool) -> Self {
    match (verbose, quiet) {
      (_, true) => Self::Quiet,
      (true, false) => Self::Verbose,
      (false, false) => Self::Normal,
    }
  }
}

pub struct Logger<'a> {
  colors: &'a Colors,
  verbosity: Verbosity,
}

impl<'a> Logger<'a> {
  pub fn new(colors: &'a Colors, verbosity: Verbosity) -> Self {
    Self { colors, verbosity }
  }

  pub fn info(&self, message: &str) {
    if self.verbosity >= Verbosity::Normal {
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        message.with(self.colors.primary())
      );
    }
  }

  pub fn success(&self, message: &str) {
    if self.verbosity >= Verbosity::Normal {
      eprintln!();
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        message.with(self.colors.success())
      );
    }
  }

  fn stat(&self, label: &str, value: String) {
    eprintln!(
      "            {:<25} {}",
      label.with(self.colors.label()),
      value.with(self.colors.value())
    );
  }

  pub fn print_statistics(&self, stats: &GenerationStats) {
    if self.verbosity < Verbosity::Normal {
      return;
    }

    self.stat("Schema files:", stats.files_scanned.to_string());
    self.stat("Files generated:", stats.files_selected.to_string());
    self.stat("Services wrapped:", stats.services_generated.to_string());
    self.stat("Adapters generated:", stats.adapters_generated.to_string());

    let problems = stats.problems().count();
    if problems > 0 {
      self.stat("Warnings:", problems.to_string());
    }
  }

  pub fn print_warnings(&self, stats: &GenerationStats) {
    if self.verbosity >= Verbosity::Warnings {
      for warning in stats.problems() {
        eprintln!(
          "{} {}",
          "Warning:".with(self.colors.accent()),
          warning.to_string().with(self.colors.primary())
        );
      }
    }

    if self.verbosity >= Verbosity::Verbose {
      for note in stats.notes() {
        eprintln!(
          "{} {}",
          "Note:".with(self.colors.info()),
          note.to_string().with(self.colors.primary())
        );
      }
    }
  }

  /// Stats and warnings for a finished pass.
  pub fn report(&self, stats: &GenerationStats) {
    self.print_statistics(stats);
    self.print_warnings(stats);
  }
}
