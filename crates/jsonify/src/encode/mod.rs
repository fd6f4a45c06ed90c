//! Encoding pipeline: recursive dispatch, registry consultation, text assembly

pub mod encoders;
pub mod primitives;
pub mod writer;

pub use encoders::encode_value;
