//! Fixed-shape multilingual text attached to every record.

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{IgnoredAny, MapAccess, Visitor},
};
use std::fmt;

use crate::LanguageCode;

/// Text for every supported language.
///
/// Each slot is always present; a missing translation is the empty string.
/// Deserialisation matches language keys without regard to ASCII case and
/// ignores unknown keys. Absent keys and JSON `null` values leave a slot
/// untouched; when a key repeats, the last value wins.
///
/// # Examples
///
/// ```
/// use veda_core::{LanguageCode, Translations};
///
/// let mut translations = Translations::default();
/// translations.set(LanguageCode::Hin, "पासपोर्ट संख्या");
///
/// assert_eq!(translations.get(LanguageCode::Hin), "पासपोर्ट संख्या");
/// assert_eq!(translations.get(LanguageCode::Tam), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translations {
    /// English (original language).
    pub eng: String,
    /// Assamese.
    pub asm: String,
    /// Bengali.
    pub ben: String,
    /// Bodo.
    pub brx: String,
    /// Dogri.
    pub doi: String,
    /// Gujarati.
    pub guj: String,
    /// Hindi.
    pub hin: String,
    /// Kannada.
    pub kan: String,
    /// Kashmiri.
    pub kas: String,
    /// Konkani.
    pub kok: String,
    /// Maithili.
    pub mai: String,
    /// Malayalam.
    pub mal: String,
    /// Manipuri.
    pub mni: String,
    /// Marathi.
    pub mar: String,
    /// Nepali.
    pub nep: String,
    /// Odia.
    pub ori: String,
    /// Punjabi.
    pub pan: String,
    /// Sanskrit.
    pub san: String,
    /// Tamil.
    pub tam: String,
    /// Telugu.
    pub tel: String,
    /// Santali.
    pub sat: String,
    /// Sindhi.
    pub snd: String,
    /// Urdu.
    pub urd: String,
}

impl Translations {
    /// Text stored for `code`.
    #[must_use]
    pub fn get(&self, code: LanguageCode) -> &str {
        match code {
            LanguageCode::Eng => &self.eng,
            LanguageCode::Asm => &self.asm,
            LanguageCode::Ben => &self.ben,
            LanguageCode::Brx => &self.brx,
            LanguageCode::Doi => &self.doi,
            LanguageCode::Guj => &self.guj,
            LanguageCode::Hin => &self.hin,
            LanguageCode::Kan => &self.kan,
            LanguageCode::Kas => &self.kas,
            LanguageCode::Kok => &self.kok,
            LanguageCode::Mai => &self.mai,
            LanguageCode::Mal => &self.mal,
            LanguageCode::Mni => &self.mni,
            LanguageCode::Mar => &self.mar,
            LanguageCode::Nep => &self.nep,
            LanguageCode::Ori => &self.ori,
            LanguageCode::Pan => &self.pan,
            LanguageCode::San => &self.san,
            LanguageCode::Tam => &self.tam,
            LanguageCode::Tel => &self.tel,
            LanguageCode::Sat => &self.sat,
            LanguageCode::Snd => &self.snd,
            LanguageCode::Urd => &self.urd,
        }
    }

    /// Replace the text stored for `code`.
    pub fn set(&mut self, code: LanguageCode, text: impl Into<String>) {
        *self.slot_mut(code) = text.into();
    }

    /// Text in the original language.
    #[must_use]
    pub fn original(&self) -> &str {
        self.get(LanguageCode::DEFAULT)
    }

    /// Iterate over every slot in serialisation order.
    pub fn iter(&self) -> impl Iterator<Item = (LanguageCode, &str)> + '_ {
        LanguageCode::ALL
            .into_iter()
            .map(move |code| (code, self.get(code)))
    }

    const fn slot_mut(&mut self, code: LanguageCode) -> &mut String {
        match code {
            LanguageCode::Eng => &mut self.eng,
            LanguageCode::Asm => &mut self.asm,
            LanguageCode::Ben => &mut self.ben,
            LanguageCode::Brx => &mut self.brx,
            LanguageCode::Doi => &mut self.doi,
            LanguageCode::Guj => &mut self.guj,
            LanguageCode::Hin => &mut self.hin,
            LanguageCode::Kan => &mut self.kan,
            LanguageCode::Kas => &mut self.kas,
            LanguageCode::Kok => &mut self.kok,
            LanguageCode::Mai => &mut self.mai,
            LanguageCode::Mal => &mut self.mal,
            LanguageCode::Mni => &mut self.mni,
            LanguageCode::Mar => &mut self.mar,
            LanguageCode::Nep => &mut self.nep,
            LanguageCode::Ori => &mut self.ori,
            LanguageCode::Pan => &mut self.pan,
            LanguageCode::San => &mut self.san,
            LanguageCode::Tam => &mut self.tam,
            LanguageCode::Tel => &mut self.tel,
            LanguageCode::Sat => &mut self.sat,
            LanguageCode::Snd => &mut self.snd,
            LanguageCode::Urd => &mut self.urd,
        }
    }
}

impl<'de> Deserialize<'de> for Translations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TranslationsVisitor)
    }
}

struct TranslationsVisitor;

impl<'de> Visitor<'de> for TranslationsVisitor {
    type Value = Translations;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object mapping language codes to text")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut translations = Translations::default();
        while let Some(key) = map.next_key::<String>()? {
            let Some(code) = LanguageCode::from_key(&key) else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(text) = map.next_value::<Option<String>>()? {
                translations.set(code, text);
            }
        }
        Ok(translations)
    }
}
