// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interview-preparation flashcards.
//!
//! 18 cards across six categories, three per category. Filtering is exact
//! category equality only; difficulty is display metadata.

use crate::i18n::Key;
use crate::types::Difficulty;

/// Flashcard category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    BasicInfo,
    MotivationReason,
    LifeWork,
    FamilyRelatives,
    JapaneseAbility,
    Other,
}

impl Category {
    pub fn key(&self) -> Key {
        match self {
            Category::BasicInfo => Key::BasicInfo,
            Category::MotivationReason => Key::MotivationReason,
            Category::LifeWork => Key::LifeWork,
            Category::FamilyRelatives => Key::FamilyRelatives,
            Category::JapaneseAbility => Key::JapaneseAbility,
            Category::Other => Key::Other,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::BasicInfo,
            Category::MotivationReason,
            Category::LifeWork,
            Category::FamilyRelatives,
            Category::JapaneseAbility,
            Category::Other,
        ]
    }
}

/// One flashcard: question, sample answer, and tips for the interviewee.
#[derive(Debug, Clone, Copy)]
pub struct Flashcard {
    pub number: u8,
    pub category: Category,
    pub question: Key,
    pub sample_answer: Key,
    pub tips: Key,
    pub difficulty: Difficulty,
}

macro_rules! card {
    ($n:literal, $cat:ident, $q:ident, $a:ident, $t:ident, $d:ident) => {
        Flashcard {
            number: $n,
            category: Category::$cat,
            question: Key::$q,
            sample_answer: Key::$a,
            tips: Key::$t,
            difficulty: Difficulty::$d,
        }
    };
}

/// All flashcards, in presentation order.
#[rustfmt::skip]
pub const FLASHCARDS: &[Flashcard] = &[
    card!(1,  BasicInfo,        InterviewQ1,  InterviewA1,  InterviewTip1,  Easy),
    card!(2,  BasicInfo,        InterviewQ2,  InterviewA2,  InterviewTip2,  Easy),
    card!(3,  BasicInfo,        InterviewQ3,  InterviewA3,  InterviewTip3,  Easy),
    card!(4,  MotivationReason, InterviewQ4,  InterviewA4,  InterviewTip4,  Medium),
    card!(5,  MotivationReason, InterviewQ5,  InterviewA5,  InterviewTip5,  Easy),
    card!(6,  MotivationReason, InterviewQ6,  InterviewA6,  InterviewTip6,  Medium),
    card!(7,  LifeWork,         InterviewQ7,  InterviewA7,  InterviewTip7,  Easy),
    card!(8,  LifeWork,         InterviewQ8,  InterviewA8,  InterviewTip8,  Medium),
    card!(9,  LifeWork,         InterviewQ9,  InterviewA9,  InterviewTip9,  Medium),
    card!(10, FamilyRelatives,  InterviewQ10, InterviewA10, InterviewTip10, Easy),
    card!(11, FamilyRelatives,  InterviewQ11, InterviewA11, InterviewTip11, Medium),
    card!(12, FamilyRelatives,  InterviewQ12, InterviewA12, InterviewTip12, Medium),
    card!(13, JapaneseAbility,  InterviewQ13, InterviewA13, InterviewTip13, Hard),
    card!(14, JapaneseAbility,  InterviewQ14, InterviewA14, InterviewTip14, Hard),
    card!(15, JapaneseAbility,  InterviewQ15, InterviewA15, InterviewTip15, Hard),
    card!(16, Other,            InterviewQ16, InterviewA16, InterviewTip16, Medium),
    card!(17, Other,            InterviewQ17, InterviewA17, InterviewTip17, Medium),
    card!(18, Other,            InterviewQ18, InterviewA18, InterviewTip18, Hard),
];

/// Cards in a category, in presentation order.
pub fn by_category(category: Category) -> Vec<&'static Flashcard> {
    FLASHCARDS
        .iter()
        .filter(|card| card.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_three_cards() {
        for &category in Category::all() {
            assert_eq!(by_category(category).len(), 3, "{category:?}");
        }
    }

    #[test]
    fn category_filter_is_exact() {
        for card in by_category(Category::JapaneseAbility) {
            assert_eq!(card.category, Category::JapaneseAbility);
        }
    }

    #[test]
    fn card_numbers_are_sequential() {
        for (i, card) in FLASHCARDS.iter().enumerate() {
            assert_eq!(card.number as usize, i + 1);
        }
    }
}
