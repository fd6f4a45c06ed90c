//! Per-type conversion registry consulted before structural encoding.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::record::Record;
use crate::value::Value;

/// Converter invoked in place of structural encoding for a registered type.
/// The returned value is encoded like any ordinary value, so a converter may
/// itself return a record of another registered type (chained conversions).
pub type Conversion = Rc<dyn Fn(&Record) -> Result<Value>>;

/// Maps exact type identifier strings to converters. An ordinary value:
/// construct one per encoder (or per test) instead of sharing process-wide
/// state.
#[derive(Clone, Default)]
pub struct ConversionRegistry {
    entries: HashMap<String, Conversion>,
}

impl ConversionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a converter, replacing any previous entry for the same
    /// identifier (last write wins).
    pub fn add<F>(&mut self, type_name: impl Into<String>, convert: F)
    where
        F: Fn(&Record) -> Result<Value> + 'static,
    {
        self.entries.insert(type_name.into(), Rc::new(convert));
    }

    pub fn has(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// No-op when the identifier is absent.
    pub fn remove(&mut self, type_name: &str) {
        self.entries.remove(type_name);
    }

    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, type_name: &str) -> Option<&Conversion> {
        self.entries.get(type_name)
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRegistry")
            .field("types", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
