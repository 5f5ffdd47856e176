//! Built-in language profile table
//!
//! One row per language code. Rows are looked up by code only; order is the
//! order used by `list languages`.

use super::profile::QuoteGlyphs;

/// Marks preceded by a space in French typography
pub const FRENCH_SPACED_PUNCTUATION: &[char] = &['»', ';', '!', '?', ':', '…'];

const NONE: &[char] = &[];

const ENGLISH: QuoteGlyphs = QuoteGlyphs::new('\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}');
const GERMAN: QuoteGlyphs = QuoteGlyphs::new('\u{201E}', '\u{201C}', '\u{2019}', '\u{201A}');
const GERMAN_GUILLEMETS: QuoteGlyphs =
    QuoteGlyphs::new('\u{00BB}', '\u{00AB}', '\u{2019}', '\u{201A}');
const FRENCH: QuoteGlyphs = QuoteGlyphs::new('\u{00AB}', '\u{00BB}', '\u{2018}', '\u{2019}');
const POLISH: QuoteGlyphs = QuoteGlyphs::new('\u{201E}', '\u{201D}', '\u{201A}', '\u{2019}');
const NORDIC: QuoteGlyphs = QuoteGlyphs::new('\u{201D}', '\u{201D}', '\u{2019}', '\u{2019}');
const ALBANIAN: QuoteGlyphs = QuoteGlyphs::new('\u{201E}', '\u{201C}', '\u{2018}', '\u{2019}');
const CYRILLIC: QuoteGlyphs = QuoteGlyphs::new('\u{00AB}', '\u{00BB}', '\u{2039}', '\u{203A}');
const SPANISH: QuoteGlyphs = QuoteGlyphs::new('\u{00AB}', '\u{00BB}', '\u{2018}', '\u{2019}');
const BALTIC_CENTRAL: QuoteGlyphs =
    QuoteGlyphs::new('\u{201E}', '\u{201C}', '\u{201A}', '\u{2018}');
const MACEDONIAN: QuoteGlyphs = QuoteGlyphs::new('\u{201E}', '\u{201C}', '\u{2019}', '\u{2018}');
const HUNGARIAN_DUTCH: QuoteGlyphs =
    QuoteGlyphs::new('\u{201E}', '\u{201D}', '\u{00BB}', '\u{00AB}');

/// A row of the built-in table
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProfileRow {
    pub code: &'static str,
    pub name: &'static str,
    pub glyphs: QuoteGlyphs,
    pub spaced: &'static [char],
}

const fn row(code: &'static str, name: &'static str, glyphs: QuoteGlyphs) -> ProfileRow {
    ProfileRow {
        code,
        name,
        glyphs,
        spaced: NONE,
    }
}

pub(crate) static PROFILES: &[ProfileRow] = &[
    row("af", "Afrikaans", ENGLISH),
    row("be", "Belarusian", CYRILLIC),
    row("ch", "Swiss", CYRILLIC),
    row("cs", "Czech", BALTIC_CENTRAL),
    row("de", "German", GERMAN),
    row("de-g", "German (guillemets)", GERMAN_GUILLEMETS),
    row("en", "English", ENGLISH),
    row("es", "Spanish", SPANISH),
    row("et", "Estonian", BALTIC_CENTRAL),
    row("fi", "Finnish", NORDIC),
    ProfileRow {
        code: "fr",
        name: "French",
        glyphs: FRENCH,
        spaced: FRENCH_SPACED_PUNCTUATION,
    },
    row("hu", "Hungarian", HUNGARIAN_DUTCH),
    row("is", "Icelandic", BALTIC_CENTRAL),
    row("lt", "Lithuanian", BALTIC_CENTRAL),
    row("mk", "Macedonian", MACEDONIAN),
    row("nl", "Dutch", HUNGARIAN_DUTCH),
    row("pl", "Polish", POLISH),
    row("ru", "Russian", CYRILLIC),
    row("se", "Swedish", NORDIC),
    row("sk", "Slovak", BALTIC_CENTRAL),
    row("sl", "Slovenian", BALTIC_CENTRAL),
    row("sq", "Albanian", ALBANIAN),
    row("uk", "Ukrainian", CYRILLIC),
];
