use std::collections::HashSet;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::generator::{
  ast::{GeneratedUnit, GoIdent, GoImportPath, RESERVED_LOCALS},
  naming::identifiers::{GO_PREDECLARED, clean_package_name},
};

/// Package aliases for one generated file.
///
/// Aliases are the sanitized last path element, numbered on collision
/// (`model`, `model1`, ...), handed out in first-reference order. Local
/// variable names and Go's predeclared identifiers are never used as aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportAliases {
  own_path: GoImportPath,
  aliases: IndexMap<GoImportPath, String>,
}

impl ImportAliases {
  pub(crate) fn allocate(unit: &GeneratedUnit) -> Self {
    let mut used: HashSet<String> = RESERVED_LOCALS
      .iter()
      .chain(GO_PREDECLARED.iter())
      .map(ToString::to_string)
      .collect();
    let mut aliases = IndexMap::new();

    for path in unit.imported_paths() {
      let base = clean_package_name(path.as_str());
      let mut alias = base.clone();
      let mut suffix = 1;
      while used.contains(&alias) {
        alias = format!("{base}{suffix}");
        suffix += 1;
      }
      used.insert(alias.clone());
      aliases.insert(path.clone(), alias);
    }

    Self {
      own_path: unit.import_path.clone(),
      aliases,
    }
  }

  /// Renders `alias.Name`, or the bare name for identifiers of the file's own package.
  pub(crate) fn qualify(&self, ident: &GoIdent) -> anyhow::Result<String> {
    if ident.import_path == self.own_path {
      return Ok(ident.name.clone());
    }

    let Some(alias) = self.aliases.get(&ident.import_path) else {
      anyhow::bail!("identifier {ident} was emitted without being recorded as a reference");
    };
    Ok(format!("{alias}.{}", ident.name))
  }

  /// Import specs sorted by import path.
  pub(crate) fn specs(&self) -> Vec<(&GoImportPath, &str)> {
    self
      .aliases
      .iter()
      .map(|(path, alias)| (path, alias.as_str()))
      .sorted_by(|a, b| a.0.cmp(b.0))
      .collect()
  }
}
