//! Typographic quote and punctuation spacing normalizer
//!
//! This crate rewrites the punctuation of a text run in a single pass:
//! straight typewriter quotes become the curly quotes or guillemets of the
//! chosen language, spaces are inserted or normalized next to quotation
//! marks and, in French, before `; ! ? : …`. Inconsistent quoting is
//! reported as warnings without stopping the scan.
//!
//! # Architecture
//!
//! - **Language profiles** ([`language`]): glyphs and spacing rules per language
//! - **Space classifier** ([`space`]): the four recognized space variants
//! - **URL guard** ([`url_guard`]): keeps `http://` tokens untouched
//! - **Engine** ([`engine`]): the scan itself
//! - **Text runs** ([`text_run`]): how the engine reads and edits host text
//!
//! # Example
//!
//! ```rust
//! use autotypo_core::Normalizer;
//!
//! // French defaults: non-breaking thin spaces, existing quotes normalized
//! let normalizer = Normalizer::for_language("fr").unwrap();
//! let (text, report) = normalizer.normalize_str("Il a dit \"bonjour\"!").unwrap();
//!
//! assert_eq!(text, "Il a dit «\u{202F}bonjour\u{202F}»\u{202F}!");
//! assert!(report.warnings.is_empty());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod language;
pub mod space;
pub mod text_run;
pub mod url_guard;

pub use config::{NormalizerConfig, NormalizerConfigBuilder};
pub use engine::{
    Normalizer, QuoteParity, QuoteWarning, ReportCollector, ScanObserver, ScanReport, ScanState,
    ScanSummary, WarningKind,
};
pub use error::{select_single, Result, TypoError};
pub use language::{LanguageProfile, QuoteGlyphs};
pub use space::{is_space, SpaceStyle};
pub use text_run::{CharRun, TextRun};
pub use url_guard::UrlGuard;
