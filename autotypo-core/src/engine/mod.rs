//! Quote disambiguation engine
//!
//! A single left-to-right pass over a [`TextRun`]. Every step looks at the
//! previous character, the current one and the next one, plus the quote
//! parity, and decides whether to replace a straight quote, add or fix a
//! space, or record an inconsistency.
//!
//! # Example
//!
//! ```rust
//! use autotypo_core::{Normalizer, NormalizerConfig, SpaceStyle};
//!
//! let config = NormalizerConfig::builder()
//!     .language("en")
//!     .space_style(SpaceStyle::None)
//!     .build()
//!     .unwrap();
//! let normalizer = Normalizer::new(config).unwrap();
//!
//! let (text, report) = normalizer.normalize_str("He said \"hello, world\".").unwrap();
//! assert_eq!(text, "He said “hello, world”.");
//! assert_eq!(report.change_count, 2);
//! ```

mod report;
mod state;

pub use report::{QuoteWarning, ReportCollector, ScanObserver, ScanReport, ScanSummary, WarningKind};
pub use state::{QuoteParity, ScanState};

use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::language::{self, LanguageProfile};
use crate::space::{is_space, SpaceStyle, SPACE};
use crate::text_run::{CharRun, TextRun};

/// What the character under the scanner is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    LeadDouble,
    TrailDouble,
    /// Wider than one UTF-16 unit, never interpreted
    Wide,
    StraightDouble,
    StraightSingle,
    SpacedPunctuation,
    Space,
    Other,
}

/// `. , ? !`
#[inline]
fn is_sentence_end(ch: char) -> bool {
    matches!(ch, '.' | ',' | '?' | '!')
}

/// Normalizes quotes and punctuation spacing of one text run at a time
///
/// The normalizer is immutable; each call to [`normalize_with`] creates its
/// own [`ScanState`], so one instance can serve any number of scans.
///
/// [`normalize_with`]: Normalizer::normalize_with
#[derive(Debug, Clone)]
pub struct Normalizer {
    profile: LanguageProfile,
    space_style: SpaceStyle,
    replace_existing: bool,
}

impl Normalizer {
    /// Create a normalizer from a configuration naming a built-in language
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;
        let profile = language::resolve(&config.language)?;
        Ok(Self {
            profile,
            space_style: config.space_style,
            replace_existing: config.replace_existing,
        })
    }

    /// Create a normalizer for a built-in language with its default options
    pub fn for_language(code: &str) -> Result<Self> {
        Self::new(NormalizerConfig::builder().language(code).build()?)
    }

    /// Create a normalizer from any profile, built-in or loaded from a file
    pub fn with_profile(
        profile: LanguageProfile,
        space_style: SpaceStyle,
        replace_existing: bool,
    ) -> Result<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            space_style,
            replace_existing,
        })
    }

    /// The language profile in use
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// The space style in use
    pub fn space_style(&self) -> SpaceStyle {
        self.space_style
    }

    /// Whether spacing around already curly quotes is normalized
    pub fn replace_existing(&self) -> bool {
        self.replace_existing
    }

    /// Normalize a string, returning the new text and the report
    pub fn normalize_str(&self, text: &str) -> Result<(String, ScanReport)> {
        let mut run = CharRun::new(text);
        let report = self.normalize(&mut run)?;
        Ok((run.into_string(), report))
    }

    /// Normalize a run in place and collect warnings into a report
    pub fn normalize<R: TextRun + ?Sized>(&self, run: &mut R) -> Result<ScanReport> {
        let mut collector = ReportCollector::new();
        self.normalize_with(run, &mut collector)?;
        Ok(collector.into_report())
    }

    /// Normalize a run in place, streaming warnings to `observer`.
    ///
    /// Inconsistencies never stop the scan. Errors only come from the run
    /// adapter; edits made before such an error stay applied.
    pub fn normalize_with<R, O>(&self, run: &mut R, mut observer: O) -> Result<ScanSummary>
    where
        R: TextRun + ?Sized,
        O: ScanObserver,
    {
        let mut state = ScanState::new();
        log::debug!(
            "scanning {} units, language '{}', space style {}, replace existing: {}",
            run.len(),
            self.profile.code(),
            self.space_style,
            self.replace_existing
        );

        while state.position < run.len() {
            let Some(ch) = run.char_at(state.position) else {
                break;
            };
            let next = run.char_at(state.position + 1);

            let shift = match self.classify(ch, state.parity) {
                Glyph::LeadDouble => self.existing_lead(run, &mut state, next, &mut observer)?,
                Glyph::TrailDouble => self.existing_trail(run, &mut state, &mut observer)?,
                Glyph::StraightDouble => self.straight_double(run, &mut state, next)?,
                Glyph::StraightSingle => self.straight_single(run, &mut state, next)?,
                Glyph::SpacedPunctuation => self.spaced_punctuation(run, &mut state, ch, next)?,
                Glyph::Space => {
                    state.url_guard.reset();
                    0
                }
                Glyph::Wide | Glyph::Other => 0,
            };

            state.advance(ch, shift);
        }

        let summary = ScanSummary {
            change_count: state.change_count,
        };
        log::debug!("scan finished with {} changes", summary.change_count);
        observer.on_finish(&summary);
        Ok(summary)
    }

    fn classify(&self, ch: char, parity: QuoteParity) -> Glyph {
        let profile = &self.profile;
        // A symmetric glyph closes whenever a quote is open
        let closes_symmetric = profile.is_symmetric_double() && parity == QuoteParity::ExpectClose;

        if ch == profile.lead_double() && !closes_symmetric {
            Glyph::LeadDouble
        } else if ch == profile.trail_double() {
            Glyph::TrailDouble
        } else if ch.len_utf16() != 1 {
            Glyph::Wide
        } else if ch == '"' {
            Glyph::StraightDouble
        } else if ch == '\'' {
            Glyph::StraightSingle
        } else if profile.is_spaced_punctuation(ch) {
            Glyph::SpacedPunctuation
        } else if is_space(ch) {
            Glyph::Space
        } else {
            Glyph::Other
        }
    }

    /// Straight quotes and every quote glyph of the profile
    fn is_quote(&self, ch: char) -> bool {
        let glyphs = self.profile.glyphs();
        matches!(ch, '"' | '\'')
            || ch == glyphs.lead_double
            || ch == glyphs.trail_double
            || ch == glyphs.lead_single
            || ch == glyphs.trail_single
    }

    fn warn<O: ScanObserver>(&self, observer: &mut O, state: &ScanState, kind: WarningKind) {
        let warning = QuoteWarning {
            position: state.position,
            kind,
        };
        log::debug!("{warning}");
        observer.on_warning(&warning);
    }

    /// A curly opening quote already in the text
    fn existing_lead<R, O>(
        &self,
        run: &mut R,
        state: &mut ScanState,
        next: Option<char>,
        observer: &mut O,
    ) -> Result<isize>
    where
        R: TextRun + ?Sized,
        O: ScanObserver,
    {
        if state.parity == QuoteParity::ExpectClose {
            self.warn(observer, state, WarningKind::MissingClose);
        }
        state.parity = QuoteParity::ExpectClose;

        if self.replace_existing && next.is_some() && self.space_after(run, state.position, true)? {
            state.change_count += 1;
        }
        Ok(0)
    }

    /// A curly closing quote already in the text
    fn existing_trail<R, O>(&self, run: &mut R, state: &mut ScanState, observer: &mut O) -> Result<isize>
    where
        R: TextRun + ?Sized,
        O: ScanObserver,
    {
        if state.parity == QuoteParity::ExpectOpen {
            self.warn(observer, state, WarningKind::MissingOpen);
        }
        state.parity = QuoteParity::ExpectOpen;

        if !self.replace_existing || state.position == 0 {
            return Ok(0);
        }

        Ok(match self.space_before(run, state.position, true)? {
            Some(shift) => {
                state.change_count += 1;
                self.after_space_before(state, shift);
                shift
            }
            None => 0,
        })
    }

    /// `"`: pick an orientation from context, then replace it
    fn straight_double<R: TextRun + ?Sized>(
        &self,
        run: &mut R,
        state: &mut ScanState,
        next: Option<char>,
    ) -> Result<isize> {
        let position = state.position;
        let prev = state.previous;
        let next = next.unwrap_or(SPACE);

        let opening = if position == 0 {
            true
        } else if is_sentence_end(prev) {
            false
        } else if prev == '\'' && !(is_space(next) || matches!(next, ',' | ';' | '.')) {
            true
        } else if matches!(next, '.' | ',' | ';') {
            false
        } else {
            state.parity == QuoteParity::ExpectOpen
        };

        let mut shift = 0;
        if opening {
            put(run, position, self.profile.lead_double())?;
            self.space_after(run, position, self.replace_existing)?;
            state.parity = QuoteParity::ExpectClose;
        } else {
            put(run, position, self.profile.trail_double())?;
            if let Some(delta) = self.space_before(run, position, self.replace_existing)? {
                self.after_space_before(state, delta);
                shift = delta;
            }
            state.parity = QuoteParity::ExpectOpen;
        }

        log::trace!(
            "straight double quote at {position} resolved as {}",
            if opening { "opening" } else { "closing" }
        );
        state.change_count += 1;
        Ok(shift)
    }

    /// `'`: apostrophe or single quote, never spaced
    fn straight_single<R: TextRun + ?Sized>(
        &self,
        run: &mut R,
        state: &mut ScanState,
        next: Option<char>,
    ) -> Result<isize> {
        let position = state.position;
        let prev = state.previous;
        let next = next.unwrap_or(SPACE);

        let leading = if position == 0 {
            true
        } else if is_sentence_end(prev) {
            false
        } else if prev == '"' && !(is_space(next) || matches!(next, ',' | '.')) {
            true
        } else if !is_space(prev) && prev != '"' && !is_space(next) {
            // Inside a word: contraction or elision
            false
        } else {
            is_space(prev) || (!is_space(next) && next != '"')
        };

        let glyph = if leading {
            self.profile.lead_single()
        } else {
            self.profile.trail_single()
        };
        put(run, position, glyph)?;
        log::trace!("straight single quote at {position} resolved as {glyph}");
        state.change_count += 1;
        Ok(0)
    }

    /// A mark that takes a space before it (`; ! ? : …` in French)
    fn spaced_punctuation<R: TextRun + ?Sized>(
        &self,
        run: &mut R,
        state: &mut ScanState,
        ch: char,
        next: Option<char>,
    ) -> Result<isize> {
        let prev = state.previous;
        state.url_guard.observe(prev, ch, next.unwrap_or(SPACE));

        // The token ends at a space, a quote or the end of the run
        let ends_token = next.map_or(true, |n| is_space(n) || self.is_quote(n));
        if state.url_guard.suppresses(ends_token) || self.profile.is_spaced_punctuation(prev) {
            return Ok(0);
        }

        // An existing space is only swapped for the configured one
        let existing = is_space(prev);
        if existing && (!self.replace_existing || self.space_style.is_empty()) {
            return Ok(0);
        }

        Ok(match self.space_before(run, state.position, existing)? {
            Some(shift) => {
                state.change_count += 1;
                self.after_space_before(state, shift);
                shift
            }
            None => 0,
        })
    }

    /// Bring the unit after `position` to the configured space.
    ///
    /// Returns whether the run changed. Nothing is inserted at the end of
    /// the run; with `replace == false` an existing space is left alone.
    fn space_after<R: TextRun + ?Sized>(&self, run: &mut R, position: usize, replace: bool) -> Result<bool> {
        let at = position + 1;
        let Some(neighbor) = run.char_at(at) else {
            return Ok(false);
        };

        match self.space_style.character() {
            Some(target) if neighbor == target => Ok(false),
            Some(target) if is_space(neighbor) => {
                if replace {
                    put(run, at, target)?;
                }
                Ok(replace)
            }
            Some(target) => {
                run.insert_text(at, target.encode_utf8(&mut [0; 4]))?;
                Ok(true)
            }
            None if replace && is_space(neighbor) => {
                while run.char_at(at).is_some_and(is_space) {
                    run.delete_char(at)?;
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Bring the unit before `position` to the configured space.
    ///
    /// Returns `None` when the run is unchanged, otherwise the net number of
    /// units inserted before `position` (negative when spaces were removed).
    fn space_before<R: TextRun + ?Sized>(
        &self,
        run: &mut R,
        position: usize,
        replace: bool,
    ) -> Result<Option<isize>> {
        let Some(neighbor) = position.checked_sub(1).and_then(|at| run.char_at(at)) else {
            return Ok(None);
        };

        match self.space_style.character() {
            Some(target) if neighbor == target => Ok(None),
            Some(target) if is_space(neighbor) => {
                if !replace {
                    return Ok(None);
                }
                put(run, position - 1, target)?;
                Ok(Some(0))
            }
            Some(target) => {
                run.insert_text(position, target.encode_utf8(&mut [0; 4]))?;
                Ok(Some(1))
            }
            None if replace && is_space(neighbor) => {
                let mut at = position;
                while at > 0 && run.char_at(at - 1).is_some_and(is_space) {
                    run.delete_char(at - 1)?;
                    at -= 1;
                }
                // at most `position` units were removed
                Ok(Some(-((position - at) as isize)))
            }
            None => Ok(None),
        }
    }

    /// Bookkeeping after [`space_before`](Self::space_before) edited the run
    fn after_space_before(&self, state: &mut ScanState, shift: isize) {
        // The inserted space is skipped by the scan but still ends the token
        if shift > 0 {
            state.url_guard.reset();
        }
    }
}

/// Replace the unit at `offset` with `ch`
fn put<R: TextRun + ?Sized>(run: &mut R, offset: usize, ch: char) -> Result<()> {
    run.replace_char(offset, ch.encode_utf8(&mut [0; 4]))
}
