//! Teacher settings read/write with loading/error state.

use std::sync::Arc;

use crate::error::{describe, HanamiError, HanamiResult};
use crate::models::{SettingsUpdate, TeacherSettings};
use crate::traits::SettingsSource;

pub struct SettingsService {
    source: Arc<dyn SettingsSource>,
    is_loading: bool,
    error: Option<String>,
}

impl SettingsService {
    pub fn new(source: Arc<dyn SettingsSource>) -> Self {
        Self {
            source,
            is_loading: false,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the full record. On failure the error slot is set and the
    /// default settings are returned so the editor still has a draft.
    pub async fn get_settings(&mut self) -> TeacherSettings {
        self.is_loading = true;
        self.error = None;
        let result = self.source.fetch_settings().await;
        self.is_loading = false;

        match result {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Failed to fetch settings: {}", err);
                self.error = Some(describe(&err, "Failed to fetch settings"));
                TeacherSettings::default()
            }
        }
    }

    /// Write any subset of sections. The error is recorded and returned.
    pub async fn update_settings(&mut self, update: &SettingsUpdate) -> HanamiResult<()> {
        self.is_loading = true;
        self.error = None;
        let result = self.source.update_settings(update).await;
        self.is_loading = false;

        result.map_err(|err| {
            tracing::warn!(code = err.error_code(), "Failed to update settings: {}", err);
            let message = describe(&err, "Failed to update settings");
            self.error = Some(message.clone());
            HanamiError::message(message)
        })
    }
}
