// Phrasebook translator for local runs and tests.
//
// Known phrases are looked up per target language; anything else is rendered as
// `[<target>] <text>` so callers can still see which language was asked for.

use crate::modules::reviews::adapters::outbound::translation::{
    TranslationError, TranslationService,
};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_LANGUAGES: &[&str] = &["en", "fr", "de", "es", "it", "pt", "ga", "zh", "ja"];

pub struct PhrasebookTranslator {
    languages: HashSet<String>,
    phrases: HashMap<(String, String), String>,
    is_offline: bool,
}

impl Default for PhrasebookTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl PhrasebookTranslator {
    pub fn new() -> Self {
        Self::with_languages(DEFAULT_LANGUAGES.iter().copied())
    }

    pub fn with_languages<'a>(languages: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            languages: languages.into_iter().map(str::to_lowercase).collect(),
            phrases: HashMap::new(),
            is_offline: false,
        }
    }

    pub fn with_phrase(
        mut self,
        text: impl Into<String>,
        target_language: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.phrases.insert(
            (text.into(), target_language.into().to_lowercase()),
            translation.into(),
        );
        self
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_supported(&self, language: &str) -> Result<String, TranslationError> {
        let code = language.trim().to_lowercase();
        if self.languages.contains(&code) {
            Ok(code)
        } else {
            Err(TranslationError::UnsupportedLanguage(language.to_string()))
        }
    }
}

#[async_trait::async_trait]
impl TranslationService for PhrasebookTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if self.is_offline {
            return Err(TranslationError::Upstream("Translator offline".into()));
        }
        let source = self.ensure_supported(source_language)?;
        let target = self.ensure_supported(target_language)?;
        if source == target {
            return Ok(text.to_string());
        }
        Ok(self
            .phrases
            .get(&(text.to_string(), target.clone()))
            .cloned()
            .unwrap_or_else(|| format!("[{target}] {text}")))
    }
}

#[cfg(test)]
mod phrasebook_translator_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn translator() -> PhrasebookTranslator {
        PhrasebookTranslator::new().with_phrase("Great", "fr", "Génial")
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_text_unchanged_for_the_same_language(
        translator: PhrasebookTranslator,
    ) {
        assert_eq!(
            translator.translate("Great", "en", "en").await.unwrap(),
            "Great"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_use_a_known_phrase(translator: PhrasebookTranslator) {
        assert_eq!(
            translator.translate("Great", "en", "FR").await.unwrap(),
            "Génial"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_mark_unknown_phrases_with_the_target(translator: PhrasebookTranslator) {
        assert_eq!(
            translator.translate("Slow pacing", "en", "de").await.unwrap(),
            "[de] Slow pacing"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_unsupported_language(translator: PhrasebookTranslator) {
        assert_eq!(
            translator.translate("Great", "en", "xx").await,
            Err(TranslationError::UnsupportedLanguage("xx".into()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline(mut translator: PhrasebookTranslator) {
        translator.toggle_offline();
        assert_eq!(
            translator.translate("Great", "en", "fr").await,
            Err(TranslationError::Upstream("Translator offline".into()))
        );
    }
}
