//! Language codes carried by every translated record.

use std::fmt;

/// A language with a translation slot on every record.
///
/// Codes are three-letter ISO 639 tags as they appear in CSV headers and
/// JSON keys. [`LanguageCode::DEFAULT`] holds the original-language text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    /// English, the original language.
    Eng,
    /// Assamese.
    Asm,
    /// Bengali.
    Ben,
    /// Bodo.
    Brx,
    /// Dogri.
    Doi,
    /// Gujarati.
    Guj,
    /// Hindi.
    Hin,
    /// Kannada.
    Kan,
    /// Kashmiri.
    Kas,
    /// Konkani.
    Kok,
    /// Maithili.
    Mai,
    /// Malayalam.
    Mal,
    /// Manipuri.
    Mni,
    /// Marathi.
    Mar,
    /// Nepali.
    Nep,
    /// Odia.
    Ori,
    /// Punjabi.
    Pan,
    /// Sanskrit.
    San,
    /// Tamil.
    Tam,
    /// Telugu.
    Tel,
    /// Santali.
    Sat,
    /// Sindhi.
    Snd,
    /// Urdu.
    Urd,
}

impl LanguageCode {
    /// Every supported language, in serialisation order.
    pub const ALL: [Self; 23] = [
        Self::Eng,
        Self::Asm,
        Self::Ben,
        Self::Brx,
        Self::Doi,
        Self::Guj,
        Self::Hin,
        Self::Kan,
        Self::Kas,
        Self::Kok,
        Self::Mai,
        Self::Mal,
        Self::Mni,
        Self::Mar,
        Self::Nep,
        Self::Ori,
        Self::Pan,
        Self::San,
        Self::Tam,
        Self::Tel,
        Self::Sat,
        Self::Snd,
        Self::Urd,
    ];

    /// The original-language slot mirrored from record titles.
    pub const DEFAULT: Self = Self::Eng;

    /// The lowercase code used for CSV headers and JSON keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eng => "eng",
            Self::Asm => "asm",
            Self::Ben => "ben",
            Self::Brx => "brx",
            Self::Doi => "doi",
            Self::Guj => "guj",
            Self::Hin => "hin",
            Self::Kan => "kan",
            Self::Kas => "kas",
            Self::Kok => "kok",
            Self::Mai => "mai",
            Self::Mal => "mal",
            Self::Mni => "mni",
            Self::Mar => "mar",
            Self::Nep => "nep",
            Self::Ori => "ori",
            Self::Pan => "pan",
            Self::San => "san",
            Self::Tam => "tam",
            Self::Tel => "tel",
            Self::Sat => "sat",
            Self::Snd => "snd",
            Self::Urd => "urd",
        }
    }

    /// Look up a code by JSON key, ignoring ASCII case.
    ///
    /// ```
    /// use veda_core::LanguageCode;
    ///
    /// assert_eq!(LanguageCode::from_key("HIN"), Some(LanguageCode::Hin));
    /// assert_eq!(LanguageCode::from_key("xyz"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
