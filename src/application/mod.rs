use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::api::dto::{FunctionSummaryDto, UnitSummaryDto};
use crate::config::DecodeConfig;
use crate::domain::{decode, DecodeError, ParsedUnit};
use crate::ports::DumpSource;

/// Load a dump from a source and decode it.
pub struct AnalyzeUsecase<'a> {
    pub source: &'a dyn DumpSource,
    pub config: &'a DecodeConfig,
}

impl<'a> AnalyzeUsecase<'a> {
    pub fn run(&self) -> Result<ParsedUnit> {
        let raw = self.source.load()?;
        decode(&raw, self.config).with_context(|| format!("Failed to decode {}", self.source.describe()))
    }

    pub fn summarize(&self) -> Result<UnitSummaryDto> {
        let unit = self.run()?;
        Ok(UnitSummaryDto::from(&unit))
    }
}

/// Holds the most recent parse. Every `execute` starts from an empty
/// registry; nothing from a previous input survives it.
#[derive(Debug, Default)]
pub struct ParseSession {
    config: DecodeConfig,
    current: Option<ParsedUnit>,
}

impl ParseSession {
    pub fn new(config: DecodeConfig) -> Self {
        Self { config, current: None }
    }

    pub fn execute(&mut self, raw: &Value) -> Result<&ParsedUnit, DecodeError> {
        self.current = None;
        let unit = decode(raw, &self.config)?;
        Ok(self.current.insert(unit))
    }

    pub fn current(&self) -> Option<&ParsedUnit> {
        self.current.as_ref()
    }
}

/// Pick the function whose arguments a downstream tool should drive.
///
/// With an explicit `target` the named function is used. Without one the
/// unit must contain exactly one function definition.
pub fn extract_arguments(unit: &ParsedUnit, target: Option<&str>) -> Result<FunctionSummaryDto> {
    let func = match target {
        Some(name) => match unit.function_named(name) {
            Some(func) => func,
            None => bail!("Function `{}` not found", name),
        },
        None => {
            let mut definitions = unit.functions().filter(|f| f.is_definition());
            let Some(first) = definitions.next() else {
                bail!("No function definitions found");
            };
            if definitions.next().is_some() {
                bail!("Multiple symbols found, cannot choose the target without a name");
            }
            first
        }
    };

    let summary = FunctionSummaryDto::from(func);
    tracing::debug!(
        target = %summary.name,
        nr_args = summary.nr_args,
        arg_num_in = summary.arg_num_in,
        arg_num_out = summary.arg_num_out,
        "extracted arguments"
    );
    Ok(summary)
}
