use serde_json::Value;

/// Anything that can hand over an untyped dump tree: a saved
/// `-ast-dump=json` file, an in-memory string, a live compiler run.
pub trait DumpSource {
    fn load(&self) -> anyhow::Result<Value>;

    /// Human-readable origin, used in error context.
    fn describe(&self) -> String;
}
