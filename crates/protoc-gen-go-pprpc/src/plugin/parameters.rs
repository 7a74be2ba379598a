use std::{collections::BTreeMap, str::FromStr};

use crate::generator::{OutputLayout, PathsMode, ResolverConfig};

pub(crate) const DOMAIN_PATH_PARAM: &str = "domainPath";
pub(crate) const USE_CASE_PATH_PARAM: &str = "useCasePath";
pub(crate) const DTS_PATH_PARAM: &str = "dtsPath";
const PATHS_PARAM: &str = "paths";
const MODULE_PARAM: &str = "module";
const VERBOSE_PARAM: &str = "verbose";
const IMPORT_OVERRIDE_PREFIX: char = 'M';

/// Options carried in the protoc parameter string, e.g.
/// `domainPath=example.com/app/domain,useCasePath=example.com/app/usecase,dtsPath=example.com/app/dts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOptions {
  pub resolver: ResolverConfig,
  pub layout: OutputLayout,
  /// `M<proto file>=<go import path>` mappings.
  pub import_overrides: BTreeMap<String, String>,
  pub verbose: bool,
}

#[derive(Default)]
struct RawOptions {
  domain_path: Option<String>,
  use_case_path: Option<String>,
  dts_path: Option<String>,
  paths: PathsMode,
  module: Option<String>,
  import_overrides: BTreeMap<String, String>,
  verbose: bool,
}

impl PluginOptions {
  pub fn parse(parameter: &str) -> anyhow::Result<Self> {
    let mut raw = RawOptions::default();

    for entry in parameter.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
      let (key, value) = entry
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("invalid parameter '{entry}': expected KEY=VALUE"))?;

      match key {
        DOMAIN_PATH_PARAM => raw.domain_path = Some(value.to_string()),
        USE_CASE_PATH_PARAM => raw.use_case_path = Some(value.to_string()),
        DTS_PATH_PARAM => raw.dts_path = Some(value.to_string()),
        PATHS_PARAM => {
          raw.paths = PathsMode::from_str(value).map_err(|_| {
            anyhow::anyhow!("invalid value '{value}' for parameter 'paths': expected 'import' or 'source_relative'")
          })?;
        }
        MODULE_PARAM => raw.module = Some(value.to_string()),
        VERBOSE_PARAM => {
          raw.verbose = value
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid value '{value}' for parameter 'verbose': expected true or false"))?;
        }
        _ if key.len() > 1 && key.starts_with(IMPORT_OVERRIDE_PREFIX) => {
          raw.import_overrides.insert(key[1..].to_string(), value.to_string());
        }
        _ => anyhow::bail!("unknown parameter '{key}'"),
      }
    }

    let resolver = ResolverConfig::builder()
      .domain_root(required(raw.domain_path, DOMAIN_PATH_PARAM)?)
      .use_case_root(required(raw.use_case_path, USE_CASE_PATH_PARAM)?)
      .transform_root(required(raw.dts_path, DTS_PATH_PARAM)?)
      .build();

    let layout = OutputLayout::builder()
      .paths(raw.paths)
      .maybe_module(raw.module)
      .build();

    Ok(Self {
      resolver,
      layout,
      import_overrides: raw.import_overrides,
      verbose: raw.verbose,
    })
  }
}

fn required(value: Option<String>, key: &str) -> anyhow::Result<String> {
  match value {
    Some(value) if !value.is_empty() => Ok(value),
    Some(_) => anyhow::bail!("parameter '{key}' must not be empty"),
    None => anyhow::bail!("missing required parameter '{key}'"),
  }
}
