//! Raisons de fault localisées
//!
//! [`FaultReason`] possède une suite ordonnée et non vide de
//! [`FaultReasonText`] (tag de langue + texte). La résolution d'une
//! traduction pour une langue demandée suit un repli par généralisation :
//! correspondance exacte, puis retrait progressif des sous-tags
//! (`en-US-informal` → `en-US` → `en`), puis première traduction insérée.

use once_cell::sync::Lazy;

use crate::errors::SoapFaultError;

/// Tag de langue BCP 47 (ex: « en », « en-US », « fr-FR »)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

static SYSTEM_TAG: Lazy<LanguageTag> = Lazy::new(LanguageTag::from_environment);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> LanguageTag {
        LanguageTag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tag plus général : retire le dernier sous-tag délimité par `-`
    ///
    /// `en-US-informal` → `en-US` → `en` → None.
    pub fn parent(&self) -> Option<LanguageTag> {
        self.0
            .rfind('-')
            .map(|idx| LanguageTag(self.0[..idx].to_string()))
    }

    /// Tag de langue du processus, capturé une fois
    ///
    /// Lu depuis `LC_ALL`, `LC_MESSAGES` puis `LANG` (forme POSIX
    /// `fr_FR.UTF-8` → `fr-FR`), « en » à défaut.
    pub fn system() -> LanguageTag {
        SYSTEM_TAG.clone()
    }

    fn from_environment() -> LanguageTag {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| LanguageTag::from_posix_locale(&value))
            .unwrap_or_else(|| LanguageTag::new("en"))
    }

    fn from_posix_locale(locale: &str) -> Option<LanguageTag> {
        // fr_FR.UTF-8@euro → fr-FR
        let base = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-");
        match base.as_str() {
            "" | "C" | "POSIX" => None,
            _ => Some(LanguageTag(base)),
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Texte de raison traduit dans une langue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReasonText {
    lang: LanguageTag,
    text: String,
}

impl FaultReasonText {
    pub fn new(text: impl Into<String>, lang: LanguageTag) -> FaultReasonText {
        FaultReasonText {
            lang,
            text: text.into(),
        }
    }

    pub fn lang(&self) -> &LanguageTag {
        &self.lang
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Correspondance exacte de tag
    pub fn matches(&self, lang: &LanguageTag) -> bool {
        self.lang == *lang
    }
}

/// Raison de fault : au moins une traduction, ordre d'insertion conservé
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReason {
    translations: Vec<FaultReasonText>,
}

impl FaultReason {
    /// Raison mono-traduction taguée avec la langue du processus
    pub fn new(text: impl Into<String>) -> FaultReason {
        FaultReason {
            translations: vec![FaultReasonText::new(text, LanguageTag::system())],
        }
    }

    /// Raison mono-traduction dans une langue explicite
    pub fn with_language(text: impl Into<String>, lang: LanguageTag) -> FaultReason {
        FaultReason {
            translations: vec![FaultReasonText::new(text, lang)],
        }
    }

    /// Raison multi-traductions ; refuse la liste vide
    pub fn from_translations(
        translations: Vec<FaultReasonText>,
    ) -> Result<FaultReason, SoapFaultError> {
        if translations.is_empty() {
            return Err(SoapFaultError::NoTranslations);
        }
        Ok(FaultReason { translations })
    }

    pub fn translations(&self) -> &[FaultReasonText] {
        &self.translations
    }

    /// Meilleure traduction pour la langue demandée
    ///
    /// Dans l'ordre :
    /// 1. traduction unique → retournée sans comparaison ;
    /// 2. balayage exact sur le tag demandé, première occurrence gagnante ;
    /// 3. balayage exact à chaque niveau de généralisation du tag
    ///    (`en-US-informal` → `en-US` → `en`) ;
    /// 4. à défaut, première traduction dans l'ordre d'insertion.
    pub fn get_matching_translation(&self, lang: &LanguageTag) -> &FaultReasonText {
        // L'invariant de construction garantit au moins une traduction
        if self.translations.len() == 1 {
            return &self.translations[0];
        }

        if let Some(exact) = self.translations.iter().find(|t| t.matches(lang)) {
            return exact;
        }

        let mut current = lang.parent();
        while let Some(tag) = current {
            if let Some(found) = self.translations.iter().find(|t| t.matches(&tag)) {
                return found;
            }
            current = tag.parent();
        }

        &self.translations[0]
    }
}

impl std::fmt::Display for FaultReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.get_matching_translation(&LanguageTag::system()).text()
        )
    }
}
