/// Getter prefix used when none is configured.
pub const DEFAULT_GETTER_PREFIX: &str = "get";

/// Decoder nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Prefix of getter methods consulted during attribute extraction
    pub getter_prefix: String,
    /// Drop container entries whose encoded value is the literal `null`.
    /// Applies per container level; nested containers keep their nulls.
    pub ignore_nulls: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            getter_prefix: String::from(DEFAULT_GETTER_PREFIX),
            ignore_nulls: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Decode JSON objects as plain ordered mappings instead of records
    pub mappings: bool,
    /// Maximum nesting depth before decoding gives up with `None`
    pub max_depth: usize,
    /// Decode integer literals that overflow i64/u64 as their literal text
    /// (a string) instead of casting to a float
    pub bigint_as_string: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            mappings: false,
            max_depth: DEFAULT_MAX_DEPTH,
            bigint_as_string: false,
        }
    }
}
