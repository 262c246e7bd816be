// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static reference catalogs.
//!
//! Read-only tables embedded at compile time: the document checklist, the
//! legal-office directory, interview flashcards, the procedure step guide,
//! and translation templates. Filters are pure and preserve catalog
//! insertion order; the row counts stay in the tens, so nothing here is
//! memoized.

pub mod documents;
pub mod interview;
pub mod offices;
pub mod steps;
pub mod templates;
