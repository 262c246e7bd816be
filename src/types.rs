// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared classification enums used across catalogs and stored records.

use crate::i18n::Key;
use serde::{Deserialize, Serialize};

/// Priority of a checklist document or a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Localization key of the display label.
    pub fn key(&self) -> Key {
        match self {
            Priority::Low => Key::Low,
            Priority::Medium => Key::Medium,
            Priority::High => Key::High,
        }
    }
}

/// Difficulty of an interview flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn key(&self) -> Key {
        match self {
            Difficulty::Easy => Key::Easy,
            Difficulty::Medium => Key::Medium,
            Difficulty::Hard => Key::Hard,
        }
    }
}
