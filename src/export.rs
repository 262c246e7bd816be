// SPDX-License-Identifier: PMPL-1.0-or-later

//! Export/import of the full application state.
//!
//! The bundle is a single JSON document holding the six persisted blobs
//! plus the export timestamp and the app version literal. Import is
//! all-or-nothing: a decode failure leaves the store untouched, a success
//! overwrites every blob unconditionally and re-persists each one. No
//! merging, no conflict resolution.

use crate::store::{
    ApplicationProgress, DataStore, DiagnosisRecord, Note, Reminder, SavedDocument, UserProfile,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version literal stamped into every bundle.
pub const APP_VERSION: &str = "1.0.0";

/// The export wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub user_profile: UserProfile,
    pub application_progress: ApplicationProgress,
    pub saved_documents: Vec<SavedDocument>,
    pub reminders: Vec<Reminder>,
    pub diagnosis_results: Vec<DiagnosisRecord>,
    pub notes: Vec<Note>,
    pub export_date: DateTime<Utc>,
    pub app_version: String,
}

/// Snapshot the store into a bundle stamped with the current time.
pub fn bundle(store: &DataStore) -> ExportBundle {
    ExportBundle {
        user_profile: store.profile.clone(),
        application_progress: store.progress.clone(),
        saved_documents: store.documents.clone(),
        reminders: store.reminders.clone(),
        diagnosis_results: store.diagnosis_results.clone(),
        notes: store.notes.clone(),
        export_date: Utc::now(),
        app_version: APP_VERSION.to_string(),
    }
}

/// Serialize the store's state as a pretty-printed JSON document.
pub fn export_json(store: &DataStore) -> Result<String> {
    serde_json::to_string_pretty(&bundle(store)).context("serializing export bundle")
}

/// Replace the store's state with a previously exported bundle.
///
/// Fails atomically: when the top-level decode fails nothing changes. On
/// success all six blobs are overwritten and re-persisted.
pub fn import_json(store: &mut DataStore, json: &str) -> Result<()> {
    let bundle: ExportBundle =
        serde_json::from_str(json).context("decoding import bundle")?;
    store.profile = bundle.user_profile;
    store.progress = bundle.application_progress;
    store.documents = bundle.saved_documents;
    store.reminders = bundle.reminders;
    store.diagnosis_results = bundle.diagnosis_results;
    store.notes = bundle.notes;
    store.persist_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ReminderCategory;
    use crate::types::Priority;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn populated_store(dir: &std::path::Path) -> DataStore {
        let mut store = DataStore::open(dir).expect("store should open");
        store
            .update_profile(UserProfile {
                name: "Tran Thi Mai".to_string(),
                nationality: "Vietnam".to_string(),
                years_in_japan: 7,
                ..UserProfile::default()
            })
            .expect("profile should save");
        store
            .add_reminder(Reminder {
                id: Uuid::new_v4(),
                title: "納税証明書".to_string(),
                description: "市役所で取得".to_string(),
                due_date: Utc::now(),
                priority: Priority::High,
                category: ReminderCategory::DocumentPreparation,
                is_completed: false,
            })
            .expect("reminder should save");
        store
    }

    #[test]
    fn export_import_roundtrip_preserves_all_blobs() {
        let src_dir = TempDir::new().expect("tempdir should create");
        let dst_dir = TempDir::new().expect("tempdir should create");
        let source = populated_store(src_dir.path());
        let json = export_json(&source).expect("export should serialize");

        let mut target = DataStore::open(dst_dir.path()).expect("store should open");
        import_json(&mut target, &json).expect("import should succeed");

        assert_eq!(target.profile, source.profile);
        assert_eq!(target.progress, source.progress);
        assert_eq!(target.documents, source.documents);
        assert_eq!(target.reminders, source.reminders);
        assert_eq!(target.diagnosis_results, source.diagnosis_results);
        assert_eq!(target.notes, source.notes);
    }

    #[test]
    fn import_survives_store_reopen() {
        let src_dir = TempDir::new().expect("tempdir should create");
        let dst_dir = TempDir::new().expect("tempdir should create");
        let source = populated_store(src_dir.path());
        let json = export_json(&source).expect("export should serialize");
        {
            let mut target = DataStore::open(dst_dir.path()).expect("store should open");
            import_json(&mut target, &json).expect("import should succeed");
        }
        let reopened = DataStore::open(dst_dir.path()).expect("store should reopen");
        assert_eq!(reopened.profile.name, "Tran Thi Mai");
        assert_eq!(reopened.reminders.len(), 1);
    }

    #[test]
    fn failed_import_changes_nothing() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut store = populated_store(dir.path());
        let before_profile = store.profile.clone();
        let before_reminders = store.reminders.clone();

        assert!(import_json(&mut store, "{ not a bundle").is_err());
        assert_eq!(store.profile, before_profile);
        assert_eq!(store.reminders, before_reminders);
    }

    #[test]
    fn bundle_carries_version_literal() {
        let dir = TempDir::new().expect("tempdir should create");
        let store = DataStore::open(dir.path()).expect("store should open");
        let json = export_json(&store).expect("export should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["appVersion"], "1.0.0");
        assert!(value["exportDate"].is_string());
        assert!(value["userProfile"].is_object());
    }
}
