// SPDX-License-Identifier: PMPL-1.0-or-later

//! Required-document checklist.
//!
//! Each row carries country and residence-status tags used purely for
//! filtering. The `Common` tag is a wildcard: a row tagged common for a
//! dimension matches any selection in that dimension. A row is shown when
//! BOTH dimensions match (each via its own tag-or-wildcard disjunction).

use crate::i18n::Key;
use crate::types::Priority;

/// Countries selectable in the checklist filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    China,
    Vietnam,
    Philippines,
    Nepal,
    Korea,
    Other,
}

impl Country {
    pub fn key(&self) -> Key {
        match self {
            Country::China => Key::China,
            Country::Vietnam => Key::Vietnam,
            Country::Philippines => Key::Philippines,
            Country::Nepal => Key::Nepal,
            Country::Korea => Key::Korea,
            Country::Other => Key::Other,
        }
    }

    pub fn all() -> &'static [Country] {
        &[
            Country::China,
            Country::Vietnam,
            Country::Philippines,
            Country::Nepal,
            Country::Korea,
            Country::Other,
        ]
    }
}

/// Residence statuses selectable in the checklist filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidenceStatus {
    Worker,
    Student,
    TechnicalIntern,
    InternationalMarriage,
    PermanentResident,
}

impl ResidenceStatus {
    pub fn key(&self) -> Key {
        match self {
            ResidenceStatus::Worker => Key::Worker,
            ResidenceStatus::Student => Key::Student,
            ResidenceStatus::TechnicalIntern => Key::TechnicalIntern,
            ResidenceStatus::InternationalMarriage => Key::InternationalMarriage,
            ResidenceStatus::PermanentResident => Key::PermanentResident,
        }
    }

    pub fn all() -> &'static [ResidenceStatus] {
        &[
            ResidenceStatus::Worker,
            ResidenceStatus::Student,
            ResidenceStatus::TechnicalIntern,
            ResidenceStatus::InternationalMarriage,
            ResidenceStatus::PermanentResident,
        ]
    }
}

/// Country tag on a catalog row. `Common` is the wildcard sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryTag {
    Common,
    For(Country),
}

/// Residence-status tag on a catalog row. `Common` is the wildcard sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Common,
    For(ResidenceStatus),
}

/// One checklist row.
#[derive(Debug, Clone, Copy)]
pub struct Document {
    pub id: &'static str,
    pub name: Key,
    pub countries: &'static [CountryTag],
    pub statuses: &'static [StatusTag],
    pub priority: Priority,
}

const COMMON_C: &[CountryTag] = &[CountryTag::Common];
const COMMON_S: &[StatusTag] = &[StatusTag::Common];

/// The checklist, in display order.
pub const DOCUMENTS: &[Document] = &[
    Document {
        id: "passport",
        name: Key::Passport,
        countries: COMMON_C,
        statuses: COMMON_S,
        priority: Priority::High,
    },
    Document {
        id: "birth_certificate",
        name: Key::BirthCertificate,
        countries: COMMON_C,
        statuses: COMMON_S,
        priority: Priority::High,
    },
    Document {
        id: "nationality_certificate",
        name: Key::NationalityCertificate,
        countries: COMMON_C,
        statuses: COMMON_S,
        priority: Priority::High,
    },
    Document {
        id: "residence_card",
        name: Key::ResidenceCard,
        countries: COMMON_C,
        statuses: COMMON_S,
        priority: Priority::High,
    },
    Document {
        id: "employment_certificate",
        name: Key::EmploymentCertificate,
        countries: COMMON_C,
        statuses: &[
            StatusTag::For(ResidenceStatus::Worker),
            StatusTag::For(ResidenceStatus::TechnicalIntern),
        ],
        priority: Priority::Medium,
    },
    Document {
        id: "income_certificate",
        name: Key::IncomeCertificate,
        countries: COMMON_C,
        statuses: &[
            StatusTag::For(ResidenceStatus::Worker),
            StatusTag::For(ResidenceStatus::TechnicalIntern),
        ],
        priority: Priority::Medium,
    },
    Document {
        id: "tax_certificate",
        name: Key::TaxCertificate,
        countries: COMMON_C,
        statuses: COMMON_S,
        priority: Priority::Medium,
    },
    Document {
        id: "marriage_certificate",
        name: Key::MarriageCertificate,
        countries: COMMON_C,
        statuses: &[StatusTag::For(ResidenceStatus::InternationalMarriage)],
        priority: Priority::Medium,
    },
    Document {
        id: "family_register",
        name: Key::FamilyRegister,
        countries: COMMON_C,
        statuses: &[StatusTag::For(ResidenceStatus::InternationalMarriage)],
        priority: Priority::Medium,
    },
    Document {
        id: "graduation_certificate",
        name: Key::GraduationCertificate,
        countries: COMMON_C,
        statuses: &[StatusTag::For(ResidenceStatus::Student)],
        priority: Priority::Low,
    },
];

/// Filter the checklist for a country and residence-status selection.
///
/// Both dimensions must match; within a dimension the wildcard tag or the
/// selected value suffices. Catalog order is preserved.
pub fn filter(country: Country, status: ResidenceStatus) -> Vec<&'static Document> {
    DOCUMENTS
        .iter()
        .filter(|d| country_matches(d.countries, country) && status_matches(d.statuses, status))
        .collect()
}

fn country_matches(tags: &[CountryTag], selected: Country) -> bool {
    tags.iter()
        .any(|t| matches!(t, CountryTag::Common) || matches!(t, CountryTag::For(c) if *c == selected))
}

fn status_matches(tags: &[StatusTag], selected: ResidenceStatus) -> bool {
    tags.iter()
        .any(|t| matches!(t, StatusTag::Common) || matches!(t, StatusTag::For(s) if *s == selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_tagged_rows_match_any_selection() {
        for &country in Country::all() {
            for &status in ResidenceStatus::all() {
                let rows = filter(country, status);
                assert!(
                    rows.iter().any(|d| d.id == "passport"),
                    "passport is common/common and must always appear"
                );
            }
        }
    }

    #[test]
    fn both_dimensions_must_match() {
        // Worker-only documents disappear for a student even though their
        // country tag is the wildcard.
        let rows = filter(Country::China, ResidenceStatus::Student);
        assert!(!rows.iter().any(|d| d.id == "employment_certificate"));
        assert!(rows.iter().any(|d| d.id == "graduation_certificate"));
    }

    #[test]
    fn worker_sees_employment_documents() {
        let rows = filter(Country::Vietnam, ResidenceStatus::Worker);
        let ids: Vec<_> = rows.iter().map(|d| d.id).collect();
        assert!(ids.contains(&"employment_certificate"));
        assert!(ids.contains(&"income_certificate"));
        assert!(!ids.contains(&"marriage_certificate"));
        assert!(!ids.contains(&"graduation_certificate"));
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let rows = filter(Country::Korea, ResidenceStatus::PermanentResident);
        let positions: Vec<usize> = rows
            .iter()
            .map(|d| DOCUMENTS.iter().position(|x| x.id == d.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
