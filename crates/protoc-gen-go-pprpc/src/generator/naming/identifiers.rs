use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

pub(crate) static GO_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
  ]
  .into_iter()
  .collect()
});

/// Names of Go's universe scope; a package alias with one of these names would shadow it.
pub(crate) const GO_PREDECLARED: [&str; 44] = [
  "any", "append", "bool", "byte", "cap", "clear", "close", "comparable", "complex", "complex64", "complex128",
  "copy", "delete", "error", "false", "float32", "float64", "imag", "int", "int8", "int16", "int32", "int64",
  "iota", "len", "make", "max", "min", "new", "nil", "panic", "print", "println", "real", "recover", "rune",
  "string", "true", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr",
];

static INVALID_GO_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}]").unwrap());

/// Converts a protobuf name into an exported Go identifier.
///
/// # Rules:
/// 1. A `.` followed by a lowercase letter is dropped; any other `.` becomes `_`.
/// 2. A leading `_` (or one right after a `.`) becomes `X`.
/// 3. A `_` followed by a lowercase letter is dropped.
/// 4. Every word starts upper case; the lowercase run that follows is kept as is.
/// 5. Digits are copied through.
pub(crate) fn go_camel_case(name: &str) -> String {
  let bytes = name.as_bytes();
  let mut out = String::with_capacity(name.len() + 1);
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    let next_is_lower = bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase);

    match c {
      b'.' if next_is_lower => {}
      b'.' => out.push('_'),
      b'_' if i == 0 || bytes[i - 1] == b'.' => out.push('X'),
      b'_' if next_is_lower => {}
      c if c.is_ascii_digit() => out.push(char::from(c)),
      c => {
        out.push(char::from(c.to_ascii_uppercase()));
        while bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase) {
          i += 1;
          out.push(char::from(bytes[i]));
        }
      }
    }
    i += 1;
  }

  out
}

/// Maps any character that cannot appear in a Go identifier to `_` and prefixes
/// `_` when the result is a keyword or does not start with a letter.
pub(crate) fn go_sanitized(name: &str) -> String {
  let replaced = INVALID_GO_CHARS_RE.replace_all(name, "_");
  let starts_with_letter = replaced.chars().next().is_some_and(char::is_alphabetic);

  if GO_KEYWORDS.contains(replaced.as_ref()) || !starts_with_letter {
    format!("_{replaced}")
  } else {
    replaced.into_owned()
  }
}

/// Last `/`-separated element of a Go import path.
pub(crate) fn import_path_base(import_path: &str) -> &str {
  import_path.rsplit('/').next().unwrap_or(import_path)
}

/// Package name Go would use for an import path when no explicit name is given.
pub(crate) fn clean_package_name(import_path: &str) -> String {
  go_sanitized(import_path_base(import_path))
}
