//! Hardcoded sample content shown on the dashboard and the four content pages.

pub mod dashboard;
pub mod experts;
pub mod market;
pub mod schemes;
pub mod weather;

use crate::i18n::Locale;

/// A string carried in both languages alongside the record it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub hi: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Hi => self.hi,
        }
    }
}

pub(crate) const fn text(en: &'static str, hi: &'static str) -> LocalizedText {
    LocalizedText::new(en, hi)
}

/// Colour family for tip and alert panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Blue,
    Orange,
    Purple,
    Yellow,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Green => "tone--green",
            Tone::Blue => "tone--blue",
            Tone::Orange => "tone--orange",
            Tone::Purple => "tone--purple",
            Tone::Yellow => "tone--yellow",
        }
    }
}
