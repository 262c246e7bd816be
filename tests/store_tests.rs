// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the blob store and the export/import round trip.

use chrono::{TimeZone, Utc};
use kika::export;
use kika::i18n::Lang;
use kika::store::{
    ApplicationProgress, DataStore, DocumentKind, DocumentStatus, FamilyMember, InterviewRecord,
    InterviewStatus, Note, Reminder, ReminderCategory, SavedDocument, UserProfile,
};
use kika::types::Priority;
use tempfile::TempDir;
use uuid::Uuid;

fn sample_reminder(title: &str, completed: bool) -> Reminder {
    Reminder {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "窓口で取得".to_string(),
        due_date: Utc.with_ymd_and_hms(2025, 7, 15, 9, 0, 0).unwrap(),
        priority: Priority::High,
        category: ReminderCategory::DocumentPreparation,
        is_completed: completed,
    }
}

fn sample_note(title: &str) -> Note {
    let now = Utc.with_ymd_and_hms(2025, 6, 28, 12, 0, 0).unwrap();
    Note {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: "面接は平日のみ".to_string(),
        category: "interview".to_string(),
        tags: vec!["面接".to_string()],
        created_at: now,
        updated_at: now,
        is_important: true,
    }
}

#[test]
fn test_store_persists_each_blob_independently() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = DataStore::open(dir.path()).unwrap();
        store.add_reminder(sample_reminder("住民票", false)).unwrap();
        store.add_note(sample_note("memo")).unwrap();
        store
            .update_progress(ApplicationProgress {
                current_step: 3,
                completed_steps: vec![1, 2],
                ..ApplicationProgress::default()
            })
            .unwrap();
    }
    let store = DataStore::open(dir.path()).unwrap();
    assert_eq!(store.reminders.len(), 1);
    assert_eq!(store.notes.len(), 1);
    assert_eq!(store.progress.current_step, 3);
    assert_eq!(store.progress.completed_steps, vec![1, 2]);
    // Untouched blobs stay at their defaults.
    assert_eq!(store.profile, UserProfile::default());
    assert!(store.diagnosis_results.is_empty());
}

#[test]
fn test_partial_failure_isolation_per_blob() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = DataStore::open(dir.path()).unwrap();
        store.add_reminder(sample_reminder("a", false)).unwrap();
        store.add_note(sample_note("b")).unwrap();
    }
    // Corrupt one blob; the other must survive the next load.
    std::fs::write(dir.path().join("notes.json"), "]]]").unwrap();
    let store = DataStore::open(dir.path()).unwrap();
    assert!(store.notes.is_empty());
    assert_eq!(store.reminders.len(), 1);
}

#[test]
fn test_export_import_roundtrip_field_for_field() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let mut source = DataStore::open(src.path()).unwrap();
    source
        .update_profile(UserProfile {
            name: "王偉".to_string(),
            nationality: "中国".to_string(),
            years_in_japan: 6,
            preferred_language: "中文（简体）".to_string(),
            ..UserProfile::default()
        })
        .unwrap();
    source.add_reminder(sample_reminder("納税証明書", false)).unwrap();
    source.add_reminder(sample_reminder("在職証明書", true)).unwrap();
    source.add_note(sample_note("法務局メモ")).unwrap();

    let json = export::export_json(&source).unwrap();
    let mut target = DataStore::open(dst.path()).unwrap();
    export::import_json(&mut target, &json).unwrap();

    assert_eq!(target.profile, source.profile);
    assert_eq!(target.progress, source.progress);
    assert_eq!(target.documents, source.documents);
    assert_eq!(target.reminders, source.reminders);
    assert_eq!(target.diagnosis_results, source.diagnosis_results);
    assert_eq!(target.notes, source.notes);
}

#[test]
fn test_import_is_atomic_on_decode_failure() {
    let dir = TempDir::new().unwrap();
    let mut store = DataStore::open(dir.path()).unwrap();
    store.add_reminder(sample_reminder("keep", false)).unwrap();
    let before = store.reminders.clone();

    assert!(export::import_json(&mut store, "not json at all").is_err());
    assert_eq!(store.reminders, before);

    // A syntactically valid document that is not a bundle also fails whole.
    assert!(export::import_json(&mut store, "{\"userProfile\": 42}").is_err());
    assert_eq!(store.reminders, before);
}

#[test]
fn test_import_overwrites_unconditionally() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let source = DataStore::open(src.path()).unwrap();
    let empty_bundle = export::export_json(&source).unwrap();

    let mut target = DataStore::open(dst.path()).unwrap();
    target.add_reminder(sample_reminder("will vanish", false)).unwrap();
    export::import_json(&mut target, &empty_bundle).unwrap();
    assert!(target.reminders.is_empty(), "import replaces, never merges");
}

#[test]
fn test_language_preference_survives_clear_all() {
    // The language key sits outside the six data blobs.
    let dir = TempDir::new().unwrap();
    let mut store = DataStore::open(dir.path()).unwrap();
    store.set_language(Lang::Ko).unwrap();
    store.add_reminder(sample_reminder("x", false)).unwrap();
    store.clear_all().unwrap();
    assert!(store.reminders.is_empty());
    assert_eq!(store.language(), Lang::Ko);
}

#[test]
fn test_saved_diagnosis_records_are_append_only() {
    use kika::diagnosis::{self, Weights, QUESTION_COUNT};

    let dir = TempDir::new().unwrap();
    let mut store = DataStore::open(dir.path()).unwrap();
    let answers = [Some(true); QUESTION_COUNT];
    let eval = diagnosis::evaluate(&answers, &Weights::default());
    for _ in 0..3 {
        let record = diagnosis::into_record(&eval, &answers, Lang::Ja, String::new());
        store.add_diagnosis_result(record).unwrap();
    }
    let reopened = DataStore::open(dir.path()).unwrap();
    assert_eq!(reopened.diagnosis_results.len(), 3);
    assert!(reopened.diagnosis_results.iter().all(|r| r.score == 100));
}

#[test]
fn test_saved_document_crud() {
    let dir = TempDir::new().unwrap();
    let mut store = DataStore::open(dir.path()).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 28, 12, 0, 0).unwrap();
    let mut document = SavedDocument {
        id: Uuid::new_v4(),
        name: "戸籍謄本".to_string(),
        kind: DocumentKind::Other,
        status: DocumentStatus::NotStarted,
        file_path: None,
        notes: String::new(),
        created_at: now,
        updated_at: now,
        due_date: None,
        priority: Priority::Medium,
    };
    store.add_document(document.clone()).unwrap();

    document.status = DocumentStatus::Submitted;
    store.update_document(document.clone()).unwrap();

    let reopened = DataStore::open(dir.path()).unwrap();
    assert_eq!(reopened.documents.len(), 1);
    assert_eq!(reopened.documents[0].status, DocumentStatus::Submitted);

    let mut store = reopened;
    store.delete_document(document.id).unwrap();
    assert!(store.documents.is_empty());
}

#[test]
fn test_nested_profile_and_progress_records_roundtrip() {
    let dir = TempDir::new().unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 28, 12, 0, 0).unwrap();
    {
        let mut store = DataStore::open(dir.path()).unwrap();
        store
            .update_profile(UserProfile {
                name: "Nguyen Van An".to_string(),
                family_members: vec![FamilyMember {
                    id: Uuid::new_v4(),
                    name: "Nguyen Thi Lan".to_string(),
                    relationship: "spouse".to_string(),
                    nationality: "Vietnam".to_string(),
                    birth_date: Some(now),
                }],
                ..UserProfile::default()
            })
            .unwrap();
        store
            .update_progress(ApplicationProgress {
                current_step: 6,
                interviews_completed: vec![InterviewRecord {
                    id: Uuid::new_v4(),
                    date: now,
                    location: "東京法務局".to_string(),
                    interviewer: String::new(),
                    notes: String::new(),
                    status: InterviewStatus::Completed,
                }],
                ..ApplicationProgress::default()
            })
            .unwrap();
    }
    let store = DataStore::open(dir.path()).unwrap();
    assert_eq!(store.profile.family_members.len(), 1);
    assert_eq!(store.profile.family_members[0].relationship, "spouse");
    assert_eq!(store.progress.interviews_completed.len(), 1);
    assert_eq!(
        store.progress.interviews_completed[0].status,
        InterviewStatus::Completed
    );
}
