// SPDX-License-Identifier: PMPL-1.0-or-later

//! KIKA: naturalization application assistant.
//!
//! Core engine for guiding a resident of Japan through the naturalization
//! (citizenship) application: an eligibility questionnaire with a scoring
//! engine, localized reference catalogs (required documents, legal affairs
//! bureaus, interview flashcards, procedure steps, translation templates),
//! deadline reminders, and a JSON key-value store with export/import.
//!
//! ENGINE PILLARS:
//! 1. **Diagnosis**: scores the 10-question eligibility questionnaire and
//!    maps the result to a tier with fixed next-step recommendations.
//! 2. **I18n**: resolves typed localization keys against string catalogs
//!    embedded for the 8 supported languages.
//! 3. **Catalog**: static reference tables filtered by country, residence
//!    status, prefecture, and question category.

pub mod catalog;
pub mod diagnosis;
pub mod export;
pub mod i18n;
pub mod reminders;
pub mod report;
pub mod store;
pub mod types;
