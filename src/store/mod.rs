// SPDX-License-Identifier: PMPL-1.0-or-later

//! Key-value blob store backing all persisted state.
//!
//! Each blob is an independently serialized JSON file under the data
//! directory. Loads fall back to the blob's default value when the file is
//! absent or undecodable; the failure never propagates to other blobs.
//! Saves overwrite the whole file on every change. There is no versioning
//! and no locking: the store is single-user, single-process.
//!
//! The store is an explicit handle constructed once and passed to whatever
//! needs it, so tests run against isolated fixtures.

mod models;

pub use models::{
    ApplicationProgress, DiagnosisAnswer, DiagnosisRecord, DocumentKind, DocumentStatus,
    FamilyMember, InterviewRecord, InterviewStatus, Note, Reminder, ReminderCategory,
    SavedDocument, UserProfile,
};

use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PROFILE_KEY: &str = "user_profile";
const PROGRESS_KEY: &str = "application_progress";
const DOCUMENTS_KEY: &str = "saved_documents";
const REMINDERS_KEY: &str = "reminders";
const DIAGNOSIS_KEY: &str = "diagnosis_results";
const NOTES_KEY: &str = "notes";
const LANGUAGE_KEY: &str = "language";

/// The application data store.
#[derive(Debug)]
pub struct DataStore {
    dir: PathBuf,
    pub profile: UserProfile,
    pub progress: ApplicationProgress,
    pub documents: Vec<SavedDocument>,
    pub reminders: Vec<Reminder>,
    pub diagnosis_results: Vec<DiagnosisRecord>,
    pub notes: Vec<Note>,
}

impl DataStore {
    /// Open the store at `dir`, creating the directory if needed and
    /// loading every blob. Undecodable blobs load as their defaults.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            profile: load_blob(dir, PROFILE_KEY),
            progress: load_blob(dir, PROGRESS_KEY),
            documents: load_blob(dir, DOCUMENTS_KEY),
            reminders: load_blob(dir, REMINDERS_KEY),
            diagnosis_results: load_blob(dir, DIAGNOSIS_KEY),
            notes: load_blob(dir, NOTES_KEY),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // ─── Profile & Progress ─────────────────────────────────────────

    pub fn update_profile(&mut self, profile: UserProfile) -> Result<()> {
        self.profile = profile;
        save_blob(&self.dir, PROFILE_KEY, &self.profile)
    }

    pub fn update_progress(&mut self, progress: ApplicationProgress) -> Result<()> {
        self.progress = progress;
        save_blob(&self.dir, PROGRESS_KEY, &self.progress)
    }

    // ─── Saved Documents ────────────────────────────────────────────

    pub fn add_document(&mut self, document: SavedDocument) -> Result<()> {
        self.documents.push(document);
        save_blob(&self.dir, DOCUMENTS_KEY, &self.documents)
    }

    pub fn update_document(&mut self, document: SavedDocument) -> Result<()> {
        if let Some(slot) = self.documents.iter_mut().find(|d| d.id == document.id) {
            *slot = document;
            save_blob(&self.dir, DOCUMENTS_KEY, &self.documents)?;
        }
        Ok(())
    }

    pub fn delete_document(&mut self, id: Uuid) -> Result<()> {
        self.documents.retain(|d| d.id != id);
        save_blob(&self.dir, DOCUMENTS_KEY, &self.documents)
    }

    // ─── Reminders ──────────────────────────────────────────────────

    pub fn add_reminder(&mut self, reminder: Reminder) -> Result<()> {
        self.reminders.push(reminder);
        save_blob(&self.dir, REMINDERS_KEY, &self.reminders)
    }

    /// Toggle completion of the first reminder with `id`.
    ///
    /// Returns the new completion state, or `None` when no reminder
    /// matches.
    pub fn toggle_reminder(&mut self, id: Uuid) -> Result<Option<bool>> {
        let state = match self.reminders.iter_mut().find(|r| r.id == id) {
            Some(reminder) => {
                reminder.is_completed = !reminder.is_completed;
                Some(reminder.is_completed)
            }
            None => None,
        };
        if state.is_some() {
            save_blob(&self.dir, REMINDERS_KEY, &self.reminders)?;
        }
        Ok(state)
    }

    pub fn delete_reminder(&mut self, id: Uuid) -> Result<bool> {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        let removed = self.reminders.len() != before;
        if removed {
            save_blob(&self.dir, REMINDERS_KEY, &self.reminders)?;
        }
        Ok(removed)
    }

    // ─── Diagnosis Results ──────────────────────────────────────────

    /// Append a diagnosis record. Records are never mutated after creation.
    pub fn add_diagnosis_result(&mut self, record: DiagnosisRecord) -> Result<()> {
        self.diagnosis_results.push(record);
        save_blob(&self.dir, DIAGNOSIS_KEY, &self.diagnosis_results)
    }

    // ─── Notes ──────────────────────────────────────────────────────

    pub fn add_note(&mut self, note: Note) -> Result<()> {
        self.notes.push(note);
        save_blob(&self.dir, NOTES_KEY, &self.notes)
    }

    pub fn update_note(&mut self, note: Note) -> Result<()> {
        if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *slot = note;
            save_blob(&self.dir, NOTES_KEY, &self.notes)?;
        }
        Ok(())
    }

    pub fn delete_note(&mut self, id: Uuid) -> Result<()> {
        self.notes.retain(|n| n.id != id);
        save_blob(&self.dir, NOTES_KEY, &self.notes)
    }

    // ─── Language preference ────────────────────────────────────────

    /// The persisted language preference; defaults to Japanese.
    ///
    /// Stored under its own key, outside the six blobs the export bundle
    /// carries.
    pub fn language(&self) -> Lang {
        fs::read_to_string(self.dir.join(LANGUAGE_KEY))
            .ok()
            .and_then(|code| Lang::from_code(code.trim()))
            .unwrap_or_default()
    }

    pub fn set_language(&self, lang: Lang) -> Result<()> {
        let path = self.dir.join(LANGUAGE_KEY);
        fs::write(&path, lang.code())
            .with_context(|| format!("writing language preference {}", path.display()))
    }

    // ─── Bulk operations ────────────────────────────────────────────

    /// Re-persist every blob. Used after an import replaces them all.
    pub fn persist_all(&self) -> Result<()> {
        save_blob(&self.dir, PROFILE_KEY, &self.profile)?;
        save_blob(&self.dir, PROGRESS_KEY, &self.progress)?;
        save_blob(&self.dir, DOCUMENTS_KEY, &self.documents)?;
        save_blob(&self.dir, REMINDERS_KEY, &self.reminders)?;
        save_blob(&self.dir, DIAGNOSIS_KEY, &self.diagnosis_results)?;
        save_blob(&self.dir, NOTES_KEY, &self.notes)?;
        Ok(())
    }

    /// Reset every blob to its default and remove the files.
    pub fn clear_all(&mut self) -> Result<()> {
        self.profile = UserProfile::default();
        self.progress = ApplicationProgress::default();
        self.documents.clear();
        self.reminders.clear();
        self.diagnosis_results.clear();
        self.notes.clear();
        for key in [
            PROFILE_KEY,
            PROGRESS_KEY,
            DOCUMENTS_KEY,
            REMINDERS_KEY,
            DIAGNOSIS_KEY,
            NOTES_KEY,
        ] {
            let path = blob_path(&self.dir, key);
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("removing {}", path.display()))?;
            }
        }
        Ok(())
    }
}

fn blob_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

fn load_blob<T: DeserializeOwned + Default>(dir: &Path, key: &str) -> T {
    let path = blob_path(dir, key);
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

fn save_blob<T: Serialize>(dir: &Path, key: &str, value: &T) -> Result<()> {
    let path = blob_path(dir, key);
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing blob '{key}'"))?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_reminder(title: &str) -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            due_date: Utc::now(),
            priority: Priority::High,
            category: ReminderCategory::Application,
            is_completed: false,
        }
    }

    #[test]
    fn open_on_empty_directory_yields_defaults() {
        let dir = TempDir::new().expect("tempdir should create");
        let store = DataStore::open(dir.path()).expect("store should open");
        assert_eq!(store.profile, UserProfile::default());
        assert!(store.reminders.is_empty());
        assert!(store.diagnosis_results.is_empty());
    }

    #[test]
    fn reminder_roundtrip_across_reopen() {
        let dir = TempDir::new().expect("tempdir should create");
        let id;
        {
            let mut store = DataStore::open(dir.path()).expect("store should open");
            let reminder = sample_reminder("tax certificate");
            id = reminder.id;
            store.add_reminder(reminder).expect("add should persist");
        }
        let mut store = DataStore::open(dir.path()).expect("store should reopen");
        assert_eq!(store.reminders.len(), 1);
        assert_eq!(store.reminders[0].id, id);
        assert_eq!(store.reminders[0].title, "tax certificate");

        assert_eq!(store.toggle_reminder(id).unwrap(), Some(true));
        assert_eq!(store.toggle_reminder(id).unwrap(), Some(false));
        assert_eq!(store.toggle_reminder(Uuid::new_v4()).unwrap(), None);

        assert!(store.delete_reminder(id).unwrap());
        assert!(!store.delete_reminder(id).unwrap());
        assert!(store.reminders.is_empty());
    }

    #[test]
    fn corrupt_blob_degrades_to_default_without_touching_others() {
        let dir = TempDir::new().expect("tempdir should create");
        {
            let mut store = DataStore::open(dir.path()).expect("store should open");
            store
                .add_reminder(sample_reminder("keep me"))
                .expect("add should persist");
            let profile = UserProfile {
                name: "keep me too".to_string(),
                ..UserProfile::default()
            };
            store.update_profile(profile).expect("profile should save");
        }
        // Corrupt only the reminders blob.
        std::fs::write(dir.path().join("reminders.json"), "{not json").unwrap();

        let store = DataStore::open(dir.path()).expect("store should still open");
        assert!(store.reminders.is_empty(), "corrupt blob loads as default");
        assert_eq!(store.profile.name, "keep me too", "other blobs unaffected");
    }

    #[test]
    fn language_preference_roundtrip() {
        let dir = TempDir::new().expect("tempdir should create");
        let store = DataStore::open(dir.path()).expect("store should open");
        assert_eq!(store.language(), Lang::Ja, "default is Japanese");
        store.set_language(Lang::Vi).expect("set should persist");
        assert_eq!(store.language(), Lang::Vi);
    }

    #[test]
    fn clear_all_resets_blobs_and_removes_files() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut store = DataStore::open(dir.path()).expect("store should open");
        store
            .add_reminder(sample_reminder("gone"))
            .expect("add should persist");
        assert!(dir.path().join("reminders.json").exists());
        store.clear_all().expect("clear should succeed");
        assert!(store.reminders.is_empty());
        assert!(!dir.path().join("reminders.json").exists());
    }
}
