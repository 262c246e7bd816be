// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization for KIKA.
//!
//! Provides a data-driven string catalog covering eight languages:
//!
//! | Tag     | Language            | Native name      |
//! |---------|---------------------|------------------|
//! | ja      | Japanese            | 日本語            |
//! | en      | English             | English          |
//! | zh-Hans | Simplified Chinese  | 中文（简体）      |
//! | zh-Hant | Traditional Chinese | 中文（繁體）      |
//! | vi      | Vietnamese          | Tiếng Việt       |
//! | ko      | Korean              | 한국어            |
//! | fil     | Filipino            | Filipino         |
//! | ne      | Nepali              | नेपाली            |
//!
//! ## Design
//!
//! Keys are a closed, typed enumeration joined against per-language static
//! tables embedded at compile time: no file I/O, no allocation during
//! lookups. A lookup miss returns the raw key identifier (fail-open, never
//! panics); a test asserts every key is present in every table so the
//! fallback stays a safety net rather than a user-visible behavior.

mod catalog;
mod en;
mod fil;
mod ja;
mod ko;
mod ne;
mod vi;
mod zh_hans;
mod zh_hant;

pub use catalog::{fmt_args, resolve, resolve_args, Key, Lang};
