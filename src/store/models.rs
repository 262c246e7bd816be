// SPDX-License-Identifier: PMPL-1.0-or-later

//! Persisted data models.
//!
//! Field names serialize in camelCase on the wire. Every model that backs
//! a whole blob derives `Default` so a missing or undecodable blob degrades
//! to an empty value.

use crate::types::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The applicant's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub nationality: String,
    pub birth_date: Option<DateTime<Utc>>,
    pub residence_status: String,
    pub years_in_japan: u32,
    pub occupation: String,
    pub family_members: Vec<FamilyMember>,
    pub preferred_language: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: Uuid,
    pub name: String,
    pub relationship: String,
    pub nationality: String,
    pub birth_date: Option<DateTime<Utc>>,
}

/// Progress through the application procedure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationProgress {
    pub current_step: u8,
    pub completed_steps: Vec<u8>,
    pub start_date: Option<DateTime<Utc>>,
    pub estimated_completion_date: Option<DateTime<Utc>>,
    pub notes: String,
    pub documents_collected: Vec<String>,
    pub documents_submitted: Vec<String>,
    pub interviews_completed: Vec<InterviewRecord>,
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub location: String,
    pub interviewer: String,
    pub notes: String,
    pub status: InterviewStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Rescheduled,
}

/// A document the applicant tracks (collected files, not catalog rows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    pub id: Uuid,
    pub name: String,
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub file_path: Option<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    BirthCertificate,
    MarriageCertificate,
    DivorceCertificate,
    Passport,
    ResidenceCard,
    TaxCertificate,
    EmploymentCertificate,
    BankStatement,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    NotStarted,
    InProgress,
    Completed,
    Submitted,
    Rejected,
}

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_important: bool,
}

/// A deadline reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub category: ReminderCategory,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderCategory {
    Consultation,
    DocumentPreparation,
    Application,
    Interview,
}

impl ReminderCategory {
    pub fn key(&self) -> crate::i18n::Key {
        use crate::i18n::Key;
        match self {
            ReminderCategory::Consultation => Key::Consultation,
            ReminderCategory::DocumentPreparation => Key::DocumentPreparation,
            ReminderCategory::Application => Key::Application,
            ReminderCategory::Interview => Key::Interview,
        }
    }
}

/// A saved outcome of the eligibility questionnaire.
///
/// Appended on explicit save, never mutated afterwards; question texts and
/// recommendations are stored resolved in the language active at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub score: u8,
    pub eligibility: bool,
    pub answers: Vec<DiagnosisAnswer>,
    pub recommendations: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisAnswer {
    pub question: String,
    pub answer: bool,
    pub explanation: String,
}
