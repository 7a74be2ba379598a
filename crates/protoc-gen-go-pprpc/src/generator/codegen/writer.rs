/// Line-oriented writer for brace-delimited Go source, indenting with tabs as gofmt does.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
  output: String,
  indent_level: usize,
}

impl CodeWriter {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Writes one line at the current indentation. Empty text yields an empty line.
  pub(crate) fn line(&mut self, text: impl AsRef<str>) {
    let text = text.as_ref();
    if !text.is_empty() {
      for _ in 0..self.indent_level {
        self.output.push('\t');
      }
      self.output.push_str(text);
    }
    self.output.push('\n');
  }

  pub(crate) fn blank_line(&mut self) {
    self.output.push('\n');
  }

  /// Writes `header {`, the indented body, and the closing brace.
  pub(crate) fn block<F>(&mut self, header: impl AsRef<str>, body: F) -> anyhow::Result<()>
  where
    F: FnOnce(&mut Self) -> anyhow::Result<()>,
  {
    self.line(format!("{} {{", header.as_ref()));
    self.indent_level += 1;
    let result = body(self);
    self.indent_level -= 1;
    self.line("}");
    result
  }

  pub(crate) fn into_inner(self) -> String {
    self.output
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_nested_blocks_indent_with_tabs() {
    let mut w = CodeWriter::new();
    w.block("func f()", |w| {
      w.line("var x int");
      w.blank_line();
      w.block("if x == 0", |w| {
        w.line("return");
        Ok(())
      })
    })
    .unwrap();

    assert_eq!(
      w.into_inner(),
      "func f() {\n\tvar x int\n\n\tif x == 0 {\n\t\treturn\n\t}\n}\n"
    );
  }

  #[test]
  fn test_empty_line_has_no_indentation() {
    let mut w = CodeWriter::new();
    w.block("type T struct", |w| {
      w.line("");
      Ok(())
    })
    .unwrap();

    assert_eq!(w.into_inner(), "type T struct {\n\n}\n");
  }
}
