//! Multi-language editor for parent activities.
//!
//! The editor owns a [`ParentContentPayload`] draft. The base step list is
//! language-agnostic; each translation carries one text slot per base step,
//! and every step edit keeps those slots aligned by index across *all*
//! translations, selected or not.
//!
//! Deselecting a language only removes it from the selected set. Its
//! translation stays in the draft, so re-selecting restores what was typed.
//!
//! The first selected language is the primary one: its title and description
//! are mirrored into the base fields that the record is listed under.

use std::future::Future;

use crate::error::{describe, HanamiError, HanamiResult, ValidationError};
use crate::models::{
    ActivityStep, ContentStatus, Language, ParentContent, ParentContentPayload, ParentContentType,
    StepImage, Translation,
};

/// Shown when the only selected language is toggled off.
pub const LAST_LANGUAGE_NOTICE: &str = "At least one language must stay selected";

#[derive(Debug, Clone)]
pub struct ContentEditor {
    draft: ParentContentPayload,
    active_language: Language,
    editing: bool,
    is_submitting: bool,
    error: Option<String>,
}

impl Default for ContentEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentEditor {
    /// Editor for a new activity: one empty step, English only.
    pub fn new() -> Self {
        Self {
            draft: ParentContentPayload::default(),
            active_language: Language::En,
            editing: false,
            is_submitting: false,
            error: None,
        }
    }

    /// Editor pre-filled from a stored activity.
    pub fn edit(content: &ParentContent) -> Self {
        let mut draft = ParentContentPayload::from(content);
        if draft.steps.is_empty() {
            draft.steps.push(ActivityStep::empty());
        }
        let step_count = draft.steps.len();
        for lang in draft.languages.clone() {
            draft
                .translations
                .entry(lang)
                .or_insert_with(|| Translation::seeded(step_count));
        }
        for translation in draft.translations.values_mut() {
            if translation.steps.len() < step_count {
                translation.steps.resize(step_count, ActivityStep::empty());
            }
        }
        let active_language = draft.languages.first().copied().unwrap_or_default();
        Self {
            draft,
            active_language,
            editing: true,
            is_submitting: false,
            error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn payload(&self) -> &ParentContentPayload {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    // ------------------------------------------------------------------
    // Languages
    // ------------------------------------------------------------------

    pub fn selected_languages(&self) -> &[Language] {
        &self.draft.languages
    }

    pub fn is_selected(&self, lang: Language) -> bool {
        self.draft.languages.contains(&lang)
    }

    pub fn primary_language(&self) -> Language {
        self.draft.languages.first().copied().unwrap_or_default()
    }

    pub fn active_language(&self) -> Language {
        self.active_language
    }

    /// Switch the language whose fields are being edited. Only selected
    /// languages can be made active.
    pub fn set_active_language(&mut self, lang: Language) -> bool {
        if self.is_selected(lang) {
            self.active_language = lang;
            true
        } else {
            false
        }
    }

    /// Select or deselect a language. Returns `false` when the request was
    /// refused: the last selected language cannot be removed, and
    /// [`ContentEditor::error`] says so.
    pub fn toggle_language(&mut self, lang: Language) -> bool {
        if let Some(pos) = self.draft.languages.iter().position(|l| *l == lang) {
            if self.draft.languages.len() == 1 {
                tracing::debug!(?lang, "refused to deselect last language");
                self.error = Some(LAST_LANGUAGE_NOTICE.to_string());
                return false;
            }
            if self.error.as_deref() == Some(LAST_LANGUAGE_NOTICE) {
                self.error = None;
            }
            self.draft.languages.remove(pos);
            if self.active_language == lang {
                self.active_language = self.primary_language();
            }
            return true;
        }

        if self.error.as_deref() == Some(LAST_LANGUAGE_NOTICE) {
            self.error = None;
        }
        self.draft.languages.push(lang);
        let step_count = self.draft.steps.len();
        self.draft
            .translations
            .entry(lang)
            .or_insert_with(|| Translation::seeded(step_count));
        true
    }

    /// Translation being edited.
    pub fn active_translation(&self) -> Option<&Translation> {
        self.draft.translations.get(&self.active_language)
    }

    fn translation_mut(&mut self, lang: Language) -> &mut Translation {
        let step_count = self.draft.steps.len();
        self.draft
            .translations
            .entry(lang)
            .or_insert_with(|| Translation::seeded(step_count))
    }

    // ------------------------------------------------------------------
    // Text fields
    // ------------------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Set the title in the active language.
    pub fn set_translated_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        let lang = self.active_language;
        if lang == self.primary_language() {
            self.draft.title = title.clone();
        }
        self.translation_mut(lang).title = title;
    }

    /// Set the description in the active language.
    pub fn set_translated_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        let lang = self.active_language;
        if lang == self.primary_language() {
            self.draft.description = description.clone();
        }
        self.translation_mut(lang).description = description;
    }

    pub fn set_content_type(&mut self, content_type: ParentContentType) {
        self.draft.content_type = content_type;
    }

    pub fn set_duration(&mut self, duration: impl Into<String>) {
        self.draft.duration = duration.into();
    }

    pub fn set_status(&mut self, status: ContentStatus) {
        self.draft.status = status;
    }

    /// Set the age range, swapping the bounds if given reversed.
    pub fn set_target_age(&mut self, min: u8, max: u8) {
        self.draft.target_age = if min <= max { (min, max) } else { (max, min) };
    }

    pub fn set_emotional_focus(&mut self, focus: Vec<String>) {
        self.draft.emotional_focus = clean_list(focus);
    }

    pub fn set_materials(&mut self, materials: Vec<String>) {
        self.draft.materials = clean_list(materials);
    }

    // ------------------------------------------------------------------
    // Steps
    // ------------------------------------------------------------------

    pub fn step_count(&self) -> usize {
        self.draft.steps.len()
    }

    /// Append an empty step, with an empty text slot in every translation.
    pub fn add_step(&mut self) {
        self.draft.steps.push(ActivityStep::empty());
        for translation in self.draft.translations.values_mut() {
            translation.steps.push(ActivityStep::empty());
        }
    }

    /// Remove a step and the translated text at the same index everywhere.
    pub fn remove_step(&mut self, index: usize) -> bool {
        if index >= self.draft.steps.len() {
            return false;
        }
        self.draft.steps.remove(index);
        for translation in self.draft.translations.values_mut() {
            if index < translation.steps.len() {
                translation.steps.remove(index);
            }
        }
        true
    }

    /// Text of a step in the active language.
    pub fn step_text(&self, index: usize) -> &str {
        self.active_translation()
            .and_then(|t| t.steps.get(index))
            .map(|s| s.text.as_str())
            .unwrap_or("")
    }

    /// Set a step's text in the active language.
    pub fn set_step_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        if index >= self.draft.steps.len() {
            return false;
        }
        let step_count = self.draft.steps.len();
        let lang = self.active_language;
        let translation = self.translation_mut(lang);
        if translation.steps.len() < step_count {
            translation.steps.resize(step_count, ActivityStep::empty());
        }
        translation.steps[index].text = text.into();
        true
    }

    /// Attach an already-uploaded image to a step. Alt text defaults to
    /// "Step N image" in every selected language.
    pub fn attach_image(&mut self, index: usize, url: impl Into<String>) -> bool {
        let alt_text = format!("Step {} image", index + 1);
        let alt = self
            .draft
            .languages
            .iter()
            .map(|lang| (*lang, alt_text.clone()))
            .collect();
        match self.draft.steps.get_mut(index) {
            Some(step) => {
                step.image = Some(StepImage {
                    url: url.into(),
                    alt,
                    width: None,
                    height: None,
                });
                true
            }
            None => false,
        }
    }

    pub fn remove_image(&mut self, index: usize) -> bool {
        match self.draft.steps.get_mut(index) {
            Some(step) => step.image.take().is_some(),
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Check the draft, first failure wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.draft.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.draft.description.trim().is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        if self.draft.steps.is_empty() {
            return Err(ValidationError::StepsRequired);
        }
        for lang in &self.draft.languages {
            let translation = self.draft.translations.get(lang);
            if translation.map_or(true, |t| t.title.trim().is_empty()) {
                return Err(ValidationError::TranslatedTitleRequired(*lang));
            }
            if translation.map_or(true, |t| t.description.trim().is_empty()) {
                return Err(ValidationError::TranslatedDescriptionRequired(*lang));
            }
        }
        Ok(())
    }

    /// Validate, then hand the payload to `save`. `save` is not called when
    /// validation fails. Failures are kept in [`ContentEditor::error`].
    pub async fn submit<F, Fut>(&mut self, save: F) -> HanamiResult<()>
    where
        F: FnOnce(ParentContentPayload) -> Fut,
        Fut: Future<Output = HanamiResult<()>>,
    {
        if let Err(err) = self.validate() {
            self.error = Some(err.to_string());
            return Err(err.into());
        }

        self.is_submitting = true;
        self.error = None;
        let result = save(self.draft.clone()).await;
        self.is_submitting = false;

        result.map_err(|err| {
            tracing::warn!(code = err.error_code(), "saving activity failed: {}", err);
            let message = describe(&err, "Failed to save content");
            self.error = Some(message.clone());
            HanamiError::message(message)
        })
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
