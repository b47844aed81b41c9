//! In-memory settings store.
//!
//! Starts from the default settings record and merges partial updates the
//! way the backend does. A failure can be armed for tests that exercise the
//! error paths of the settings service and editor.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::{HanamiError, HanamiResult};
use crate::models::{SettingsUpdate, TeacherSettings};
use crate::traits::SettingsSource;

#[derive(Debug, Default)]
struct Store {
    settings: TeacherSettings,
    updates: Vec<SettingsUpdate>,
    failure: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsSource {
    store: Arc<Mutex<Store>>,
}

impl InMemorySettingsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: TeacherSettings) -> Self {
        let source = Self::default();
        source.lock().settings = settings;
        source
    }

    /// Make every subsequent call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    pub fn clear_failure(&self) {
        self.lock().failure = None;
    }

    /// Current stored record.
    pub fn settings(&self) -> TeacherSettings {
        self.lock().settings.clone()
    }

    /// Every update body received, oldest first.
    pub fn updates(&self) -> Vec<SettingsUpdate> {
        self.lock().updates.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SettingsSource for InMemorySettingsSource {
    async fn fetch_settings(&self) -> HanamiResult<TeacherSettings> {
        let store = self.lock();
        if let Some(ref message) = store.failure {
            return Err(HanamiError::message(message.clone()));
        }
        Ok(store.settings.clone())
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> HanamiResult<()> {
        let mut store = self.lock();
        if let Some(ref message) = store.failure {
            return Err(HanamiError::message(message.clone()));
        }
        store.updates.push(update.clone());
        store.settings.merge(update.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::PrivacySettings;

    #[tokio::test]
    async fn test_partial_update_merges_into_full_record() {
        let source = InMemorySettingsSource::new();
        let update = SettingsUpdate {
            privacy: Some(PrivacySettings {
                show_email: true,
                show_profile: false,
                allow_messages: false,
            }),
            ..Default::default()
        };

        source.update_settings(&update).await.unwrap();

        let stored = source.fetch_settings().await.unwrap();
        assert!(stored.privacy.show_email);
        assert_eq!(stored.notifications, TeacherSettings::default().notifications);
        assert_eq!(source.updates().len(), 1);
    }

    #[tokio::test]
    async fn test_armed_failure() {
        let source = InMemorySettingsSource::new();
        source.fail_with("backend down");

        let err = source.fetch_settings().await.unwrap_err();
        assert_eq!(err.user_message(), "backend down");
        assert!(source
            .update_settings(&SettingsUpdate::default())
            .await
            .is_err());

        source.clear_failure();
        assert!(source.fetch_settings().await.is_ok());
    }
}
