// SPDX-License-Identifier: PMPL-1.0-or-later

//! Legal affairs bureau directory.
//!
//! Office names and services are localized; street addresses stay in
//! Japanese, as printed on the bureaus' own materials. Search is exact on
//! the prefecture plus an optional case-insensitive substring match on the
//! localized name or the address. No ranking: results keep catalog order.

use crate::i18n::{self, Key, Lang};

/// Prefectures with at least one office in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefecture {
    Hokkaido,
    Aomori,
    Miyagi,
    Tokyo,
    Kanagawa,
    Saitama,
}

impl Prefecture {
    pub fn key(&self) -> Key {
        match self {
            Prefecture::Hokkaido => Key::Hokkaido,
            Prefecture::Aomori => Key::Aomori,
            Prefecture::Miyagi => Key::Miyagi,
            Prefecture::Tokyo => Key::Tokyo,
            Prefecture::Kanagawa => Key::Kanagawa,
            Prefecture::Saitama => Key::Saitama,
        }
    }

    pub fn all() -> &'static [Prefecture] {
        &[
            Prefecture::Hokkaido,
            Prefecture::Aomori,
            Prefecture::Miyagi,
            Prefecture::Tokyo,
            Prefecture::Kanagawa,
            Prefecture::Saitama,
        ]
    }
}

/// One directory row.
#[derive(Debug, Clone, Copy)]
pub struct LegalOffice {
    pub name: Key,
    pub prefecture: Prefecture,
    pub address: &'static str,
    pub phone: &'static str,
    pub hours: &'static str,
    pub consultation_days: Key,
    pub latitude: f64,
    pub longitude: f64,
    pub services: &'static [Key],
}

/// The directory, in catalog order.
pub const OFFICES: &[LegalOffice] = &[
    LegalOffice {
        name: Key::SapporoLegalOffice,
        prefecture: Prefecture::Hokkaido,
        address: "札幌市中央区北1条西13丁目",
        phone: "011-251-1101",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 43.0618,
        longitude: 141.3545,
        services: &[
            Key::NaturalizationConsultation,
            Key::NationalityConsultation,
            Key::FamilyRegisterConsultation,
        ],
    },
    LegalOffice {
        name: Key::HakodateLegalOffice,
        prefecture: Prefecture::Hokkaido,
        address: "函館市本町24-1",
        phone: "0138-23-1101",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 41.7688,
        longitude: 140.7289,
        services: &[
            Key::NaturalizationConsultation,
            Key::RegistrationConsultation,
        ],
    },
    LegalOffice {
        name: Key::AomoriLegalOffice,
        prefecture: Prefecture::Aomori,
        address: "青森市新町1-3-1",
        phone: "017-722-1101",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 40.8243,
        longitude: 140.7403,
        services: &[
            Key::NaturalizationConsultation,
            Key::FamilyRegisterConsultation,
        ],
    },
    LegalOffice {
        name: Key::SendaiLegalOffice,
        prefecture: Prefecture::Miyagi,
        address: "仙台市青葉区本町3-3-1",
        phone: "022-221-1101",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 38.2688,
        longitude: 140.8721,
        services: &[
            Key::NaturalizationConsultation,
            Key::NationalityConsultation,
            Key::FamilyRegisterConsultation,
            Key::RegistrationConsultation,
        ],
    },
    LegalOffice {
        name: Key::TokyoLegalOffice,
        prefecture: Prefecture::Tokyo,
        address: "東京都千代田区霞が関1-1-1",
        phone: "03-3580-4111",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 35.6762,
        longitude: 139.6503,
        services: &[
            Key::NaturalizationConsultation,
            Key::NationalityConsultation,
            Key::FamilyRegisterConsultation,
            Key::RegistrationConsultation,
        ],
    },
    LegalOffice {
        name: Key::TokyoShinjukuOffice,
        prefecture: Prefecture::Tokyo,
        address: "東京都新宿区北新宿1-8-22",
        phone: "03-3363-7000",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 35.7013,
        longitude: 139.6916,
        services: &[
            Key::NaturalizationConsultation,
            Key::NationalityConsultation,
        ],
    },
    LegalOffice {
        name: Key::TokyoTachikawaOffice,
        prefecture: Prefecture::Tokyo,
        address: "立川市緑町4-2",
        phone: "042-524-2716",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 35.7141,
        longitude: 139.4075,
        services: &[
            Key::NaturalizationConsultation,
            Key::RegistrationConsultation,
        ],
    },
    LegalOffice {
        name: Key::YokohamaLegalOffice,
        prefecture: Prefecture::Kanagawa,
        address: "横浜市中区山下町2",
        phone: "045-201-1101",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 35.4437,
        longitude: 139.638,
        services: &[
            Key::NaturalizationConsultation,
            Key::FamilyRegisterConsultation,
        ],
    },
    LegalOffice {
        name: Key::SaitamaLegalOffice,
        prefecture: Prefecture::Saitama,
        address: "さいたま市浦和区高砂3-15-1",
        phone: "048-822-1101",
        hours: "8:30-17:15",
        consultation_days: Key::Weekdays,
        latitude: 35.8569,
        longitude: 139.6489,
        services: &[
            Key::NaturalizationConsultation,
            Key::RegistrationConsultation,
        ],
    },
];

/// Search the directory.
///
/// Prefecture equality is always required. A non-empty query additionally
/// requires a case-insensitive substring match on the name as resolved in
/// `lang`, or on the address.
pub fn search(prefecture: Prefecture, query: &str, lang: Lang) -> Vec<&'static LegalOffice> {
    let query = query.trim().to_lowercase();
    OFFICES
        .iter()
        .filter(|office| office.prefecture == prefecture)
        .filter(|office| {
            if query.is_empty() {
                return true;
            }
            let name = i18n::resolve(lang, office.name).to_lowercase();
            name.contains(&query) || office.address.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_all_offices_in_prefecture() {
        let hits = search(Prefecture::Tokyo, "", Lang::En);
        assert_eq!(hits.len(), 3);
        let elsewhere = search(Prefecture::Kanagawa, "", Lang::En);
        assert_eq!(elsewhere.len(), 1);
    }

    #[test]
    fn query_narrows_by_localized_name_case_insensitively() {
        let hits = search(Prefecture::Tokyo, "SHINJUKU", Lang::En);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, Key::TokyoShinjukuOffice);
    }

    #[test]
    fn query_matches_address_too() {
        let hits = search(Prefecture::Tokyo, "立川", Lang::En);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, Key::TokyoTachikawaOffice);
    }

    #[test]
    fn query_never_crosses_prefecture() {
        // Shinjuku exists only in Tokyo; searching Kanagawa finds nothing.
        let hits = search(Prefecture::Kanagawa, "shinjuku", Lang::En);
        assert!(hits.is_empty());
    }

    #[test]
    fn results_keep_catalog_order() {
        let hits = search(Prefecture::Tokyo, "", Lang::Ja);
        let names: Vec<Key> = hits.iter().map(|o| o.name).collect();
        assert_eq!(
            names,
            vec![
                Key::TokyoLegalOffice,
                Key::TokyoShinjukuOffice,
                Key::TokyoTachikawaOffice
            ]
        );
    }
}
