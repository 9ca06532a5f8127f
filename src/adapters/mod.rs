// Adapters layer: concrete coverage sources (TOML file, built-in table).

pub mod source;

pub use source::{BuiltinSource, TomlFileSource};
