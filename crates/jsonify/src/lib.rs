#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod extract;
mod number;
pub mod options;
pub mod record;
pub mod registry;
pub mod value;

pub use crate::error::{Error, Result};
pub use crate::options::{DecodeOptions, EncodeOptions};
pub use crate::record::{AttributeProvider, Field, Record, Visibility, VisibilityFilter};
pub use crate::registry::ConversionRegistry;
pub use crate::value::{Number, Value};

use std::io::{Read, Write};

pub fn encode_to_string(
    value: &Value,
    registry: &ConversionRegistry,
    options: &EncodeOptions,
) -> Result<String> {
    crate::encode::encode_value(value, registry, options)
}

pub fn encode_to_writer<W: Write>(
    mut writer: W,
    value: &Value,
    registry: &ConversionRegistry,
    options: &EncodeOptions,
) -> Result<()> {
    let s = encode_to_string(value, registry, options)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

pub fn decode_from_str(text: &str, options: &DecodeOptions) -> Option<Value> {
    crate::decode::decode(text, options)
}

/// Reads the whole input, then decodes it. I/O failures are errors; parse
/// failures are `Ok(None)` like in [`decode_from_str`].
pub fn decode_from_reader<R: Read>(mut reader: R, options: &DecodeOptions) -> Result<Option<Value>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(decode_from_str(&text, options))
}

/// An encoder owning its conversion registry. Construct one per unit of
/// work (or per test); there is no shared global state.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    registry: ConversionRegistry,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: ConversionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ConversionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ConversionRegistry {
        &mut self.registry
    }

    /// Registers a converter for a type identifier, replacing any previous
    /// one.
    pub fn add_conversion<F>(&mut self, type_name: impl Into<String>, convert: F)
    where
        F: Fn(&Record) -> Result<Value> + 'static,
    {
        self.registry.add(type_name, convert);
    }

    pub fn has_conversion(&self, type_name: &str) -> bool {
        self.registry.has(type_name)
    }

    pub fn remove_conversion(&mut self, type_name: &str) {
        self.registry.remove(type_name);
    }

    pub fn remove_all_conversions(&mut self) {
        self.registry.remove_all();
    }

    pub fn encode(&self, value: &Value) -> Result<String> {
        self.encode_with(value, &EncodeOptions::default())
    }

    pub fn encode_with(&self, value: &Value, options: &EncodeOptions) -> Result<String> {
        crate::encode::encode_value(value, &self.registry, options)
    }
}
