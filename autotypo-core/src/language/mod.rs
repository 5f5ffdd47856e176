//! Language profiles
//!
//! Maps a language code to its quotation glyphs and to the punctuation
//! that takes a preceding space. Profiles are either built in or loaded
//! from a TOML file.

pub(crate) mod config;
mod loader;
mod profile;
pub(crate) mod tables;

pub use config::{Metadata, ProfileConfig, Quotes, Spacing};
pub use loader::{
    builtin_profiles, from_file, from_toml_str, is_supported, resolve, supported_codes,
    to_toml_string,
};
pub use profile::{LanguageProfile, QuoteGlyphs};
pub use tables::FRENCH_SPACED_PUNCTUATION;
