use serde::{Deserialize, Serialize};

use crate::domain::views::{FunctionDecl, LoopStmt};
use crate::domain::ParsedUnit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummaryDto {
    pub functions: Vec<FunctionSummaryDto>,
    pub loops: Vec<LoopSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSummaryDto {
    pub id: String,
    pub name: String,
    pub return_type: Option<String>,
    pub nr_args: usize,
    pub param_names: Vec<String>,
    /// Parameter types with `const`/`volatile`/`restrict` removed; constness
    /// is reported in `param_const`.
    pub param_types: Vec<String>,
    pub param_const: Vec<bool>,
    pub arg_num_in: usize,
    pub arg_num_out: usize,
    pub has_body: bool,
    pub location: Option<String>, // file:line
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopSummaryDto {
    pub id: String,
    pub kind: String,
    pub basic: bool,
    pub lower_bound: Option<String>,
    pub upper_bound: Option<String>,
    pub step: Option<String>,
    pub var_decls: usize,
    pub calls: usize,
    pub breaks: usize,
}

const QUALIFIERS: [&str; 4] = ["const", "volatile", "__restrict", "restrict"];

/// Type spelling without qualifiers: `"const int *const"` becomes `"int *"`.
pub fn unqualified(spelling: &str) -> String {
    spelling
        .split_whitespace()
        .filter(|word| !QUALIFIERS.contains(word))
        .map(|word| {
            if word.starts_with('*') {
                QUALIFIERS
                    .iter()
                    .find_map(|q| word.strip_suffix(*q))
                    .unwrap_or(word)
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// In/out split of a target's arguments: the last argument of a
/// multi-argument function is taken as its output.
pub fn split_args(nr_args: usize) -> (usize, usize) {
    match nr_args {
        0 => (0, 0),
        1 => (1, 0),
        n => (n - 1, 1),
    }
}

impl From<FunctionDecl<'_>> for FunctionSummaryDto {
    fn from(func: FunctionDecl<'_>) -> Self {
        let params: Vec<_> = func.params().filter_map(|p| p.as_var_decl()).collect();
        let nr_args = params.len();
        let (arg_num_in, arg_num_out) = split_args(nr_args);

        let location = func.node().location().and_then(|loc| match (loc.file, loc.line) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            (None, Some(line)) => Some(format!("<unknown>:{}", line)),
            _ => None,
        });

        FunctionSummaryDto {
            id: func.node().raw_id().to_string(),
            name: func.name().unwrap_or("<anonymous>").to_string(),
            return_type: func.result_type().map(str::to_string),
            nr_args,
            param_names: params.iter().map(|p| p.name().unwrap_or("").to_string()).collect(),
            param_types: params.iter().map(|p| unqualified(p.declared_type().unwrap_or(""))).collect(),
            param_const: params.iter().map(|p| p.is_const()).collect(),
            arg_num_in,
            arg_num_out,
            has_body: func.is_definition(),
            location,
        }
    }
}

impl From<LoopStmt<'_>> for LoopSummaryDto {
    fn from(lp: LoopStmt<'_>) -> Self {
        LoopSummaryDto {
            id: lp.node().raw_id().to_string(),
            kind: lp.kind().to_string(),
            basic: lp.is_basic_loop(),
            lower_bound: lp.lower_bound().map(|n| n.raw_id().to_string()),
            upper_bound: lp.upper_bound().map(|n| n.raw_id().to_string()),
            step: lp.step().map(|n| n.raw_id().to_string()),
            var_decls: lp.var_decls().count(),
            calls: lp.calls().count(),
            breaks: lp.break_count(),
        }
    }
}

impl From<&ParsedUnit> for UnitSummaryDto {
    fn from(unit: &ParsedUnit) -> Self {
        let loops = unit
            .for_loops()
            .chain(unit.while_loops())
            .chain(unit.do_loops())
            .map(LoopSummaryDto::from)
            .collect();

        UnitSummaryDto {
            functions: unit.functions().map(FunctionSummaryDto::from).collect(),
            loops,
        }
    }
}
