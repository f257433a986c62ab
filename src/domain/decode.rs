/// Dump Decoder
///
/// Turns an untyped clang JSON dump into a `ParsedUnit`: one arena node per
/// record (pre-order), parent links, derived views computed as each node
/// finishes, and a fresh session registry filled along the way. The walk
/// keeps its own frame stack, so nesting is bounded by `max_depth` rather
/// than by the thread's call stack.

use std::io::Read;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::DecodeConfig;
use super::error::DecodeError;
use super::kind::NodeKind;
use super::node::NodeRef;
use super::registry::SessionRegistry;
use super::tree::{AstTree, Node, NodeId};
use super::unit::ParsedUnit;
use super::views::{self, NodeView};

/// JSON levels a node's side data (`loc.expansionLoc`, `range.begin`, ...)
/// may add below the node record itself.
const SIDE_DATA_NESTING: usize = 8;

/// Decode an already-parsed JSON value.
pub fn decode(raw: &Value, config: &DecodeConfig) -> Result<ParsedUnit, DecodeError> {
    let mut decoder = DumpDecoder::new(config);
    decoder.run(raw)?;

    let unit = decoder.finish();
    tracing::debug!(
        nodes = unit.tree.len(),
        functions = unit.registry.functions.len(),
        compounds = unit.registry.compounds.len(),
        loops = unit.registry.for_loops.len() + unit.registry.while_loops.len() + unit.registry.do_loops.len(),
        recovered = unit.diagnostics.len(),
        "decoded dump"
    );
    Ok(unit)
}

/// Decode dump text (`clang -Xclang -ast-dump=json` output).
pub fn decode_str(text: &str, config: &DecodeConfig) -> Result<ParsedUnit, DecodeError> {
    let raw = parse_dump(text, config.max_depth)?;
    decode(&raw, config)
}

pub fn decode_reader<R: Read>(mut reader: R, config: &DecodeConfig) -> Result<ParsedUnit, DecodeError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(serde_json::Error::io)?;
    decode_str(&text, config)
}

/// Parse dump text into a JSON value.
///
/// serde_json's fixed nesting guard is lifted; instead the text is rejected
/// up front with `TooDeep` when it nests further than `max_depth` AST
/// levels could account for. Anything within that allowance is parsed and
/// left to the decoder's own depth check.
pub fn parse_dump(text: &str, max_depth: usize) -> Result<Value, DecodeError> {
    // Every AST level is a record plus its children list.
    let allowance = 2 * (max_depth + 1) + SIDE_DATA_NESTING;
    let nesting = json_nesting(text);
    if nesting > allowance {
        return Err(DecodeError::TooDeep {
            path: render(&[]),
            limit: max_depth,
        });
    }

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let raw = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(raw)
}

/// Deepest `{`/`[` nesting in JSON text, ignoring brackets inside strings.
fn json_nesting(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

/// A child record with no fields stands for "no node here".
fn is_placeholder(raw: &Value) -> bool {
    matches!(raw, Value::Object(obj) if obj.is_empty())
}

fn render(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join("/")
    }
}

fn describe(raw: &Value) -> String {
    match raw {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(n) => format!("number {}", n),
        Value::String(_) => "a string".to_string(),
        Value::Array(items) => format!("a list of {}", items.len()),
        Value::Object(_) => "an object".to_string(),
    }
}

/// A node whose children are still being decoded.
struct Frame<'v> {
    id: NodeId,
    depth: usize,
    /// Name of the raw children field, for path segments.
    field: &'v str,
    items: &'v [Value],
    next: usize,
    children: Option<Vec<NodeId>>,
    /// Path length to restore once the node is finished.
    path_len: usize,
}

struct DumpDecoder<'c> {
    config: &'c DecodeConfig,
    tree: AstTree,
    registry: SessionRegistry,
    diagnostics: Vec<DecodeError>,
}

impl<'c> DumpDecoder<'c> {
    fn new(config: &'c DecodeConfig) -> Self {
        Self {
            config,
            tree: AstTree::new(config.oracle()),
            registry: SessionRegistry::default(),
            diagnostics: Vec::new(),
        }
    }

    fn finish(self) -> ParsedUnit {
        ParsedUnit {
            tree: self.tree,
            registry: self.registry,
            diagnostics: self.diagnostics,
        }
    }

    /// Pre-order walk: a node is allocated and registered when entered, and
    /// its view is built once every child has been finished.
    fn run(&mut self, raw: &Value) -> Result<(), DecodeError> {
        let mut path = Vec::new();
        let root = self.enter(raw, None, 0, &mut path, 0)?;
        let mut stack = vec![root];

        while let Some(top) = stack.last_mut() {
            if top.next == top.items.len() {
                if let Some(frame) = stack.pop() {
                    path.truncate(frame.path_len);
                    let id = self.complete(frame);
                    if let Some(Frame { children: Some(children), .. }) = stack.last_mut() {
                        children.push(id);
                    }
                }
                continue;
            }

            let index = top.next;
            top.next += 1;
            let items = top.items;
            let item = &items[index];
            if is_placeholder(item) {
                continue;
            }
            let (parent, depth, field) = (top.id, top.depth + 1, top.field);

            let mark = self.tree.len();
            let path_len = path.len();
            path.push(format!("{}[{}]", field, index));

            match self.enter(item, Some(parent), depth, &mut path, path_len) {
                Ok(frame) => stack.push(frame),
                Err(e) if self.config.recover_malformed => {
                    tracing::warn!("dropping malformed subtree: {}", e);
                    path.truncate(path_len);
                    self.tree.truncate(mark);
                    self.registry.rollback(mark);
                    self.diagnostics.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Validate one record, allocate and register its node, and open a frame
    /// over its children.
    fn enter<'v>(
        &mut self,
        raw: &'v Value,
        parent: Option<NodeId>,
        depth: usize,
        path: &mut Vec<String>,
        path_len: usize,
    ) -> Result<Frame<'v>, DecodeError> {
        if depth > self.config.max_depth {
            return Err(DecodeError::TooDeep {
                path: render(path),
                limit: self.config.max_depth,
            });
        }

        let record = raw.as_object().ok_or_else(|| DecodeError::NotARecord {
            path: render(path),
            found: describe(raw),
        })?;

        let raw_id = read_id(record, path)?;
        let kind = read_kind(record, path)?;
        if !kind.is_known() {
            tracing::trace!(kind = %kind, id = %raw_id, "unknown node kind, decoding as generic node");
        }
        path.push(format!("{}#{}", kind, raw_id));

        let children_entry = self
            .config
            .children_fields
            .iter()
            .find_map(|f| record.get_key_value(f.as_str()));

        let (field, items): (&'v str, &'v [Value]) = match children_entry {
            None => ("", &[][..]),
            Some((field, Value::Array(items))) => (field.as_str(), items.as_slice()),
            Some(_) => {
                return Err(DecodeError::MalformedChildren {
                    path: render(path),
                    id: raw_id,
                    kind: kind.to_string(),
                })
            }
        };

        let children_key = children_entry.map(|(key, _)| key);
        let attrs: Map<String, Value> = record
            .iter()
            .filter(|(key, _)| {
                key.as_str() != "id" && key.as_str() != "kind" && Some(*key) != children_key
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        // Pre-order allocation keeps arena and registry in document order.
        let id = self.tree.push(Node {
            raw_id,
            kind: kind.clone(),
            attrs,
            children: None,
            parent,
            depth,
            view: NodeView::Plain,
        });
        self.registry.register(&kind, id);

        Ok(Frame {
            id,
            depth,
            field,
            items,
            next: 0,
            // An empty list is a leaf; a list of placeholders is not.
            children: (!items.is_empty()).then(Vec::new),
            path_len,
        })
    }

    fn complete(&mut self, frame: Frame<'_>) -> NodeId {
        let id = frame.id;
        self.tree.nodes[id.0].children = frame.children;
        let view = views::build_view(NodeRef::new(&self.tree, id));
        self.tree.nodes[id.0].view = view;
        id
    }
}

fn read_id(record: &Map<String, Value>, path: &[String]) -> Result<String, DecodeError> {
    match record.get("id") {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(DecodeError::InvalidField {
            path: render(path),
            field: "id",
            expected: "a string or number",
        }),
        None => Err(DecodeError::MissingField {
            path: render(path),
            field: "id",
        }),
    }
}

fn read_kind(record: &Map<String, Value>, path: &[String]) -> Result<NodeKind, DecodeError> {
    match record.get("kind") {
        Some(Value::String(s)) if !s.is_empty() => Ok(NodeKind::parse(s)),
        Some(_) => Err(DecodeError::InvalidField {
            path: render(path),
            field: "kind",
            expected: "a non-empty string",
        }),
        None => Err(DecodeError::MissingField {
            path: render(path),
            field: "kind",
        }),
    }
}
