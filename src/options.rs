#[derive(Clone, Debug)]
pub struct Options {
    /// Keep every occurrence of a repeated object key. A repeated key's entry
    /// becomes a two-element chain `{"value": previous, "next": new}`; chains
    /// nest when a key repeats more than once. When disabled, later
    /// duplicates silently overwrite earlier ones.
    pub preserve_duplicate_keys: bool,
    /// When the lenient engine fails, retry the original text with a strict
    /// `serde_json` parse and return that result instead. A strict success
    /// after a lenient failure is logged as a bug in the lenient engine.
    pub fallback_to_strict: bool,
    /// Depth cap for the grammar's recursive re-reduction (used when
    /// synthesizing missing values before a closing bracket). Guards against
    /// pathological input; exceeding it fails the parse.
    pub max_subreduce_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            preserve_duplicate_keys: false,
            fallback_to_strict: true,
            max_subreduce_depth: 256,
        }
    }
}
