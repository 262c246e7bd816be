// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the reference-catalog filters.

use kika::catalog::documents::{self, Country, CountryTag, ResidenceStatus, StatusTag};
use kika::catalog::interview::{self, Category};
use kika::catalog::offices::{self, Prefecture};
use kika::i18n::Lang;

#[test]
fn test_common_sentinel_is_a_wildcard() {
    // A common/common document appears for every selection.
    for &country in Country::all() {
        for &status in ResidenceStatus::all() {
            let rows = documents::filter(country, status);
            assert!(rows.iter().any(|d| d.id == "birth_certificate"));
        }
    }
}

#[test]
fn test_dimensions_are_anded() {
    // countries=[Common], statuses=[Worker]: country passes via the
    // wildcard, status fails for a student, so the row must not appear.
    let rows = documents::filter(Country::China, ResidenceStatus::Student);
    assert!(!rows.iter().any(|d| d.id == "employment_certificate"));

    // The same row appears once the status matches.
    let rows = documents::filter(Country::China, ResidenceStatus::Worker);
    assert!(rows.iter().any(|d| d.id == "employment_certificate"));
}

#[test]
fn test_marriage_documents_only_for_international_marriage() {
    for &status in ResidenceStatus::all() {
        let rows = documents::filter(Country::Philippines, status);
        let has_marriage = rows.iter().any(|d| d.id == "marriage_certificate");
        assert_eq!(has_marriage, status == ResidenceStatus::InternationalMarriage);
    }
}

#[test]
fn test_catalog_tags_use_the_sentinel_consistently() {
    // Every document carries at least one tag per dimension, and rows
    // relying on the wildcard use it exclusively within that dimension.
    for doc in documents::DOCUMENTS {
        assert!(!doc.countries.is_empty());
        assert!(!doc.statuses.is_empty());
        if doc.countries.contains(&CountryTag::Common) {
            assert_eq!(doc.countries.len(), 1, "{}: wildcard mixed with values", doc.id);
        }
        if doc.statuses.contains(&StatusTag::Common) {
            assert_eq!(doc.statuses.len(), 1, "{}: wildcard mixed with values", doc.id);
        }
    }
}

#[test]
fn test_office_search_prefecture_and_query() {
    // Prefecture alone returns all offices there, catalog order.
    let all_tokyo = offices::search(Prefecture::Tokyo, "", Lang::En);
    assert_eq!(all_tokyo.len(), 3);

    // A query narrows by name, case-insensitively.
    let hits = offices::search(Prefecture::Tokyo, "tachikawa", Lang::En);
    assert_eq!(hits.len(), 1);

    // The same text finds nothing in another prefecture.
    let hits = offices::search(Prefecture::Hokkaido, "tachikawa", Lang::En);
    assert!(hits.is_empty());
}

#[test]
fn test_office_search_matches_japanese_address() {
    let hits = offices::search(Prefecture::Hokkaido, "函館", Lang::En);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].phone, "0138-23-1101");
}

#[test]
fn test_office_search_depends_on_display_language() {
    // "bureau" appears in the English office names only.
    let en_hits = offices::search(Prefecture::Kanagawa, "bureau", Lang::En);
    assert_eq!(en_hits.len(), 1);
    let ja_hits = offices::search(Prefecture::Kanagawa, "bureau", Lang::Ja);
    assert!(ja_hits.is_empty());
}

#[test]
fn test_interview_filter_is_category_only() {
    let cards = interview::by_category(Category::BasicInfo);
    assert_eq!(cards.len(), 3);
    // Difficulty varies inside a category; the filter ignores it.
    let motivation = interview::by_category(Category::MotivationReason);
    let difficulties: Vec<_> = motivation.iter().map(|c| c.difficulty).collect();
    assert!(difficulties.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn test_flashcards_cover_all_categories() {
    let total: usize = Category::all()
        .iter()
        .map(|&c| interview::by_category(c).len())
        .sum();
    assert_eq!(total, interview::FLASHCARDS.len());
}
