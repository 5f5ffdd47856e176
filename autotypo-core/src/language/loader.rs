//! Language profile lookup and loading
//!
//! Built-in profiles come from the static table; external ones are read
//! from TOML files.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use super::config::ProfileConfig;
use super::profile::LanguageProfile;
use super::tables::{ProfileRow, PROFILES};
use crate::error::{Result, TypoError};

static INDEX: OnceLock<HashMap<&'static str, &'static ProfileRow>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static ProfileRow> {
    INDEX.get_or_init(|| PROFILES.iter().map(|row| (row.code, row)).collect())
}

/// Canonical form of a user supplied code: trimmed, lowercase, `_` as `-`
fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

/// Resolve a built-in profile by language code
pub fn resolve(code: &str) -> Result<LanguageProfile> {
    let key = normalize_code(code);
    let row = index()
        .get(key.as_str())
        .ok_or_else(|| TypoError::UnsupportedLanguage {
            code: code.to_string(),
        })?;

    log::debug!("resolved language profile '{}' ({})", row.code, row.name);
    Ok(LanguageProfile::new(
        row.code,
        row.name,
        row.glyphs,
        row.spaced.to_vec(),
    ))
}

/// Whether a built-in profile exists for `code`
pub fn is_supported(code: &str) -> bool {
    index().contains_key(normalize_code(code).as_str())
}

/// Codes of all built-in profiles, in table order
pub fn supported_codes() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|row| row.code)
}

/// All built-in profiles, in table order
pub fn builtin_profiles() -> Vec<LanguageProfile> {
    PROFILES
        .iter()
        .map(|row| LanguageProfile::new(row.code, row.name, row.glyphs, row.spaced.to_vec()))
        .collect()
}

/// Parse and validate a profile from TOML text
pub fn from_toml_str(toml_str: &str) -> Result<LanguageProfile> {
    let config: ProfileConfig =
        toml::from_str(toml_str).map_err(|e| TypoError::InvalidProfile(e.to_string()))?;

    let profile = LanguageProfile::from(&config);
    profile.validate()?;
    Ok(profile)
}

/// Load and validate a profile from a TOML file
pub fn from_file(path: &Path) -> Result<LanguageProfile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        TypoError::InvalidProfile(format!("failed to read {}: {e}", path.display()))
    })?;

    let profile = from_toml_str(&content)?;
    log::debug!(
        "loaded language profile '{}' from {}",
        profile.code(),
        path.display()
    );
    Ok(profile)
}

/// Serialize a profile to the TOML schema accepted by [`from_toml_str`]
pub fn to_toml_string(profile: &LanguageProfile) -> Result<String> {
    toml::to_string_pretty(&ProfileConfig::from(profile))
        .map_err(|e| TypoError::Configuration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_french() {
        let profile = resolve("fr").unwrap();
        assert_eq!(profile.code(), "fr");
        assert_eq!(profile.lead_double(), '«');
        assert_eq!(profile.trail_double(), '»');
        assert_eq!(
            profile.spaced_punctuation(),
            &['»', ';', '!', '?', ':', '…']
        );
    }

    #[test]
    fn test_resolve_normalizes_code() {
        assert_eq!(resolve(" FR ").unwrap().code(), "fr");
        assert_eq!(resolve("de_g").unwrap().code(), "de-g");
        assert_eq!(resolve("DE-G").unwrap().lead_double(), '»');
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            resolve("xx"),
            Err(TypoError::UnsupportedLanguage {
                code: "xx".to_string()
            })
        );
        assert!(resolve("").is_err());
        assert!(!is_supported("english"));
    }

    #[test]
    fn test_from_toml_str() {
        let toml_str = r#"
[metadata]
code = "fr-ch"
name = "Swiss French"

[quotes]
lead_double = "«"
trail_double = "»"
lead_single = "‹"
trail_single = "›"

[spacing]
punctuation = [";", "!", "?", ":"]
"#;
        let profile = from_toml_str(toml_str).unwrap();
        assert_eq!(profile.code(), "fr-ch");
        assert_eq!(profile.name(), "Swiss French");
        assert_eq!(profile.lead_single(), '‹');
        assert!(profile.is_spaced_punctuation(':'));
        assert!(!profile.is_spaced_punctuation('…'));
    }

    #[test]
    fn test_from_toml_str_without_spacing() {
        let toml_str = r#"
[metadata]
code = "pt"

[quotes]
lead_double = "“"
trail_double = "”"
lead_single = "‘"
trail_single = "’"
"#;
        let profile = from_toml_str(toml_str).unwrap();
        assert_eq!(profile.name(), "pt");
        assert!(profile.spaced_punctuation().is_empty());
    }

    #[test]
    fn test_from_toml_str_rejects_multichar_glyph() {
        let toml_str = r#"
[metadata]
code = "xx"

[quotes]
lead_double = "<<"
trail_double = ">>"
lead_single = "<"
trail_single = ">"
"#;
        assert!(matches!(
            from_toml_str(toml_str),
            Err(TypoError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_from_toml_str_rejects_straight_quote() {
        let toml_str = r#"
[metadata]
code = "xx"

[quotes]
lead_double = '"'
trail_double = '"'
lead_single = "‘"
trail_single = "’"
"#;
        assert!(from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_toml_roundtrip_of_builtin() {
        let french = resolve("fr").unwrap();
        let text = to_toml_string(&french).unwrap();
        assert!(text.contains("[metadata]"));
        assert_eq!(from_toml_str(&text).unwrap(), french);
    }
}
