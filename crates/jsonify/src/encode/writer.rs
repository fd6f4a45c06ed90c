/// Accumulates encoded entries and joins them with the spaced compact
/// separators: `", "` between entries, `"{ "`/`" }"` or `"[ "`/`" ]"`
/// around the whole. An empty container therefore renders as `{  }` or
/// `[  ]`, two spaces and all.
pub struct EntryWriter {
    parts: Vec<String>,
}

impl EntryWriter {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parts: Vec::with_capacity(capacity),
        }
    }

    pub fn entry(&mut self, encoded: String) {
        self.parts.push(encoded);
    }

    pub fn keyed_entry(&mut self, encoded_key: &str, encoded_value: &str) {
        let mut part = String::with_capacity(encoded_key.len() + 2 + encoded_value.len());
        part.push_str(encoded_key);
        part.push_str(": ");
        part.push_str(encoded_value);
        self.parts.push(part);
    }

    pub fn finish_object(self) -> String {
        wrap("{ ", self.parts, " }")
    }

    pub fn finish_array(self) -> String {
        wrap("[ ", self.parts, " ]")
    }
}

impl Default for EntryWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(open: &str, parts: Vec<String>, close: &str) -> String {
    let inner: usize = parts.iter().map(|p| p.len() + 2).sum();
    let mut out = String::with_capacity(open.len() + inner + close.len());
    out.push_str(open);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(part);
    }
    out.push_str(close);
    out
}
