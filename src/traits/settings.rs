//! Teacher settings data-source trait abstraction.

use async_trait::async_trait;

use crate::error::HanamiResult;
use crate::models::{SettingsUpdate, TeacherSettings};

/// Trait for reading and writing the teacher settings record.
///
/// Reads return the full record. Writes accept any subset of sections and
/// the backing store merges them into the full record.
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn fetch_settings(&self) -> HanamiResult<TeacherSettings>;

    async fn update_settings(&self, update: &SettingsUpdate) -> HanamiResult<()>;
}
