// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localization catalog for KIKA.
//!
//! Embeds the display strings for all supported languages as compile-time
//! static tables, one table per language. Lookup is O(n) on the key list,
//! which is fine for the ~220 keys we have; resolution happens a handful
//! of times per command, not in a hot loop.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()`, `Lang::from_code()`, `Lang::display_name()`
//!    and `Lang::flag()`
//! 3. Create a `src/i18n/xx.rs` table file and wire it into `table_for()`
//! 4. Add the variant to `Lang::all()`; the completeness test will fail
//!    until every [`Key`] has an entry in the new table
//!
//! ## Adding a new key
//!
//! 1. Add a variant to [`Key`], its identifier to `Key::as_str()` and the
//!    variant to `Key::ALL`
//! 2. Add an entry to every language table; the completeness test enforces
//!    that no table is left behind

use serde::{Deserialize, Serialize};

/// Supported display languages.
///
/// Each variant maps to a fixed language tag. The enum backs the CLI
/// `--lang` flag and the persisted language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
    Ja,
    En,
    ZhHans,
    ZhHant,
    Vi,
    Ko,
    Fil,
    Ne,
}

impl Lang {
    /// Language tag for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
            Lang::ZhHans => "zh-Hans",
            Lang::ZhHant => "zh-Hant",
            Lang::Vi => "vi",
            Lang::Ko => "ko",
            Lang::Fil => "fil",
            Lang::Ne => "ne",
        }
    }

    /// Parse a language tag into a supported language.
    ///
    /// Returns `None` for unsupported tags. Matching is case-insensitive so
    /// `zh-hans` and `zh-Hans` both resolve.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.to_ascii_lowercase().as_str() {
            "ja" => Some(Lang::Ja),
            "en" => Some(Lang::En),
            "zh-hans" => Some(Lang::ZhHans),
            "zh-hant" => Some(Lang::ZhHant),
            "vi" => Some(Lang::Vi),
            "ko" => Some(Lang::Ko),
            "fil" => Some(Lang::Fil),
            "ne" => Some(Lang::Ne),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[
            Lang::Ja,
            Lang::En,
            Lang::ZhHans,
            Lang::ZhHant,
            Lang::Vi,
            Lang::Ko,
            Lang::Fil,
            Lang::Ne,
        ]
    }

    /// Native name of the language, as shown in the language picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Lang::Ja => "日本語",
            Lang::En => "English",
            Lang::ZhHans => "中文（简体）",
            Lang::ZhHant => "中文（繁體）",
            Lang::Vi => "Tiếng Việt",
            Lang::Ko => "한국어",
            Lang::Fil => "Filipino",
            Lang::Ne => "नेपाली",
        }
    }

    /// Flag emoji for the language picker.
    pub fn flag(&self) -> &'static str {
        match self {
            Lang::Ja => "🇯🇵",
            Lang::En => "🇺🇸",
            Lang::ZhHans => "🇨🇳",
            Lang::ZhHant => "🇹🇼",
            Lang::Vi => "🇻🇳",
            Lang::Ko => "🇰🇷",
            Lang::Fil => "🇵🇭",
            Lang::Ne => "🇳🇵",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ja
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Keys ───────────────────────────────────────────────────────────

/// Typed localization key.
///
/// A closed set: every display string the engine can produce is named
/// here, and every language table carries an entry for every variant.
/// The stable snake_case identifier from [`Key::as_str`] doubles as the
/// fallback display value when a table entry is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // Common labels
    AppName,
    Yes,
    No,
    Next,
    Back,
    Done,
    Result,
    Question,
    Error,
    Success,
    // Time filters
    All,
    Today,
    ThisWeek,
    ThisMonth,
    Expired,
    Overdue,
    // Parameterized formats
    ProgressFormat,
    PercentageFormat,
    DaysLater,
    // Diagnosis
    DiagnosisTitle,
    DiagnosisQ1,
    DiagnosisQ2,
    DiagnosisQ3,
    DiagnosisQ4,
    DiagnosisQ5,
    DiagnosisQ6,
    DiagnosisQ7,
    DiagnosisQ8,
    DiagnosisQ9,
    DiagnosisQ10,
    CriminalRecordExplanation,
    Eligible,
    PossibleEligibility,
    InsufficientEligibility,
    EligibilityScore,
    DetailedResult,
    NextSteps,
    // Diagnosis next steps
    DiagnosisStep1Title,
    DiagnosisStep1Desc,
    DiagnosisStep2Title,
    DiagnosisStep2Desc,
    DiagnosisStep3Title,
    DiagnosisStep3Desc,
    DiagnosisStep4Title,
    DiagnosisStep4Desc,
    DiagnosisStepNg1Title,
    DiagnosisStepNg1Desc,
    DiagnosisStepNg2Title,
    DiagnosisStepNg2Desc,
    DiagnosisStepNg3Title,
    DiagnosisStepNg3Desc,
    // Document checklist
    DocumentChecklist,
    SelectCountry,
    SelectStatus,
    NecessaryDocumentProgress,
    NoDocumentsFound,
    Common,
    China,
    Vietnam,
    Philippines,
    Nepal,
    Korea,
    Other,
    Worker,
    Student,
    TechnicalIntern,
    InternationalMarriage,
    PermanentResident,
    // Document names
    Passport,
    BirthCertificate,
    NationalityCertificate,
    ResidenceCard,
    EmploymentCertificate,
    IncomeCertificate,
    TaxCertificate,
    MarriageCertificate,
    FamilyRegister,
    GraduationCertificate,
    // Priority and difficulty
    Low,
    Medium,
    High,
    Easy,
    Hard,
    // Legal office search
    LegalOfficeSearch,
    SearchLegalOffice,
    Prefecture,
    Address,
    PhoneNumber,
    BusinessHours,
    ConsultationDays,
    Weekdays,
    NoLegalOfficeFound,
    TryDifferentSearch,
    // Office names
    SapporoLegalOffice,
    HakodateLegalOffice,
    AomoriLegalOffice,
    SendaiLegalOffice,
    TokyoLegalOffice,
    TokyoShinjukuOffice,
    TokyoTachikawaOffice,
    YokohamaLegalOffice,
    SaitamaLegalOffice,
    // Prefectures
    Hokkaido,
    Aomori,
    Miyagi,
    Tokyo,
    Kanagawa,
    Saitama,
    // Office services
    NaturalizationConsultation,
    NationalityConsultation,
    FamilyRegisterConsultation,
    RegistrationConsultation,
    // Interview preparation
    InterviewPreparation,
    QuestionCategory,
    NoQuestionsFound,
    SampleAnswer,
    TipsAndNotes,
    BasicInfo,
    MotivationReason,
    LifeWork,
    FamilyRelatives,
    JapaneseAbility,
    // Step guide
    StepGuide,
    ProgressStatus,
    StepCompleted,
    // Procedure steps
    Step1Title,
    Step1Desc,
    Step2Title,
    Step2Desc,
    Step3Title,
    Step3Desc,
    Step4Title,
    Step4Desc,
    Step5Title,
    Step5Desc,
    Step6Title,
    Step6Desc,
    Step7Title,
    Step7Desc,
    // Translation support
    TranslationSupport,
    SelectLanguage,
    SelectDocument,
    OriginalText,
    TranslatedText,
    ShowTemplate,
    Translate,
    Copy,
    Faq,
    FaqQ1,
    FaqQ2,
    FaqQ3,
    FaqA1,
    FaqA2,
    FaqA3,
    // Reminders
    NotificationDeadlineManagement,
    AddReminder,
    NoReminders,
    NoMatchingReminders,
    Priority,
    Category,
    Title,
    Deadline,
    // Reminder categories
    Consultation,
    DocumentPreparation,
    Application,
    Interview,
    // Interview flashcards
    InterviewQ1,
    InterviewA1,
    InterviewTip1,
    InterviewQ2,
    InterviewA2,
    InterviewTip2,
    InterviewQ3,
    InterviewA3,
    InterviewTip3,
    InterviewQ4,
    InterviewA4,
    InterviewTip4,
    InterviewQ5,
    InterviewA5,
    InterviewTip5,
    InterviewQ6,
    InterviewA6,
    InterviewTip6,
    InterviewQ7,
    InterviewA7,
    InterviewTip7,
    InterviewQ8,
    InterviewA8,
    InterviewTip8,
    InterviewQ9,
    InterviewA9,
    InterviewTip9,
    InterviewQ10,
    InterviewA10,
    InterviewTip10,
    InterviewQ11,
    InterviewA11,
    InterviewTip11,
    InterviewQ12,
    InterviewA12,
    InterviewTip12,
    InterviewQ13,
    InterviewA13,
    InterviewTip13,
    InterviewQ14,
    InterviewA14,
    InterviewTip14,
    InterviewQ15,
    InterviewA15,
    InterviewTip15,
    InterviewQ16,
    InterviewA16,
    InterviewTip16,
    InterviewQ17,
    InterviewA17,
    InterviewTip17,
    InterviewQ18,
    InterviewA18,
    InterviewTip18,
}

impl Key {
    /// The stable string identifier of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::AppName => "app_name",
            Key::Yes => "yes",
            Key::No => "no",
            Key::Next => "next",
            Key::Back => "back",
            Key::Done => "done",
            Key::Result => "result",
            Key::Question => "question",
            Key::Error => "error",
            Key::Success => "success",
            Key::All => "all",
            Key::Today => "today",
            Key::ThisWeek => "this_week",
            Key::ThisMonth => "this_month",
            Key::Expired => "expired",
            Key::Overdue => "overdue",
            Key::ProgressFormat => "progress_format",
            Key::PercentageFormat => "percentage_format",
            Key::DaysLater => "days_later",
            Key::DiagnosisTitle => "diagnosis_title",
            Key::DiagnosisQ1 => "diagnosis_q1",
            Key::DiagnosisQ2 => "diagnosis_q2",
            Key::DiagnosisQ3 => "diagnosis_q3",
            Key::DiagnosisQ4 => "diagnosis_q4",
            Key::DiagnosisQ5 => "diagnosis_q5",
            Key::DiagnosisQ6 => "diagnosis_q6",
            Key::DiagnosisQ7 => "diagnosis_q7",
            Key::DiagnosisQ8 => "diagnosis_q8",
            Key::DiagnosisQ9 => "diagnosis_q9",
            Key::DiagnosisQ10 => "diagnosis_q10",
            Key::CriminalRecordExplanation => "criminal_record_explanation",
            Key::Eligible => "eligible",
            Key::PossibleEligibility => "possible_eligibility",
            Key::InsufficientEligibility => "insufficient_eligibility",
            Key::EligibilityScore => "eligibility_score",
            Key::DetailedResult => "detailed_result",
            Key::NextSteps => "next_steps",
            Key::DiagnosisStep1Title => "diagnosis_step1_title",
            Key::DiagnosisStep1Desc => "diagnosis_step1_desc",
            Key::DiagnosisStep2Title => "diagnosis_step2_title",
            Key::DiagnosisStep2Desc => "diagnosis_step2_desc",
            Key::DiagnosisStep3Title => "diagnosis_step3_title",
            Key::DiagnosisStep3Desc => "diagnosis_step3_desc",
            Key::DiagnosisStep4Title => "diagnosis_step4_title",
            Key::DiagnosisStep4Desc => "diagnosis_step4_desc",
            Key::DiagnosisStepNg1Title => "diagnosis_step_ng1_title",
            Key::DiagnosisStepNg1Desc => "diagnosis_step_ng1_desc",
            Key::DiagnosisStepNg2Title => "diagnosis_step_ng2_title",
            Key::DiagnosisStepNg2Desc => "diagnosis_step_ng2_desc",
            Key::DiagnosisStepNg3Title => "diagnosis_step_ng3_title",
            Key::DiagnosisStepNg3Desc => "diagnosis_step_ng3_desc",
            Key::DocumentChecklist => "document_checklist",
            Key::SelectCountry => "select_country",
            Key::SelectStatus => "select_status",
            Key::NecessaryDocumentProgress => "necessary_document_progress",
            Key::NoDocumentsFound => "no_documents_found",
            Key::Common => "common",
            Key::China => "china",
            Key::Vietnam => "vietnam",
            Key::Philippines => "philippines",
            Key::Nepal => "nepal",
            Key::Korea => "korea",
            Key::Other => "other",
            Key::Worker => "worker",
            Key::Student => "student",
            Key::TechnicalIntern => "technical_intern",
            Key::InternationalMarriage => "international_marriage",
            Key::PermanentResident => "permanent_resident",
            Key::Passport => "passport",
            Key::BirthCertificate => "birth_certificate",
            Key::NationalityCertificate => "nationality_certificate",
            Key::ResidenceCard => "residence_card",
            Key::EmploymentCertificate => "employment_certificate",
            Key::IncomeCertificate => "income_certificate",
            Key::TaxCertificate => "tax_certificate",
            Key::MarriageCertificate => "marriage_certificate",
            Key::FamilyRegister => "family_register",
            Key::GraduationCertificate => "graduation_certificate",
            Key::Low => "low",
            Key::Medium => "medium",
            Key::High => "high",
            Key::Easy => "easy",
            Key::Hard => "hard",
            Key::LegalOfficeSearch => "legal_office_search",
            Key::SearchLegalOffice => "search_legal_office",
            Key::Prefecture => "prefecture",
            Key::Address => "address",
            Key::PhoneNumber => "phone_number",
            Key::BusinessHours => "business_hours",
            Key::ConsultationDays => "consultation_days",
            Key::Weekdays => "weekdays",
            Key::NoLegalOfficeFound => "no_legal_office_found",
            Key::TryDifferentSearch => "try_different_search",
            Key::SapporoLegalOffice => "sapporo_legal_office",
            Key::HakodateLegalOffice => "hakodate_legal_office",
            Key::AomoriLegalOffice => "aomori_legal_office",
            Key::SendaiLegalOffice => "sendai_legal_office",
            Key::TokyoLegalOffice => "tokyo_legal_office",
            Key::TokyoShinjukuOffice => "tokyo_shinjuku_office",
            Key::TokyoTachikawaOffice => "tokyo_tachikawa_office",
            Key::YokohamaLegalOffice => "yokohama_legal_office",
            Key::SaitamaLegalOffice => "saitama_legal_office",
            Key::Hokkaido => "hokkaido",
            Key::Aomori => "aomori",
            Key::Miyagi => "miyagi",
            Key::Tokyo => "tokyo",
            Key::Kanagawa => "kanagawa",
            Key::Saitama => "saitama",
            Key::NaturalizationConsultation => "naturalization_consultation",
            Key::NationalityConsultation => "nationality_consultation",
            Key::FamilyRegisterConsultation => "family_register_consultation",
            Key::RegistrationConsultation => "registration_consultation",
            Key::InterviewPreparation => "interview_preparation",
            Key::QuestionCategory => "question_category",
            Key::NoQuestionsFound => "no_questions_found",
            Key::SampleAnswer => "sample_answer",
            Key::TipsAndNotes => "tips_and_notes",
            Key::BasicInfo => "basic_info",
            Key::MotivationReason => "motivation_reason",
            Key::LifeWork => "life_work",
            Key::FamilyRelatives => "family_relatives",
            Key::JapaneseAbility => "japanese_ability",
            Key::StepGuide => "step_guide",
            Key::ProgressStatus => "progress_status",
            Key::StepCompleted => "step_completed",
            Key::Step1Title => "step1_title",
            Key::Step1Desc => "step1_desc",
            Key::Step2Title => "step2_title",
            Key::Step2Desc => "step2_desc",
            Key::Step3Title => "step3_title",
            Key::Step3Desc => "step3_desc",
            Key::Step4Title => "step4_title",
            Key::Step4Desc => "step4_desc",
            Key::Step5Title => "step5_title",
            Key::Step5Desc => "step5_desc",
            Key::Step6Title => "step6_title",
            Key::Step6Desc => "step6_desc",
            Key::Step7Title => "step7_title",
            Key::Step7Desc => "step7_desc",
            Key::TranslationSupport => "translation_support",
            Key::SelectLanguage => "select_language",
            Key::SelectDocument => "select_document",
            Key::OriginalText => "original_text",
            Key::TranslatedText => "translated_text",
            Key::ShowTemplate => "show_template",
            Key::Translate => "translate",
            Key::Copy => "copy",
            Key::Faq => "faq",
            Key::FaqQ1 => "faq_q1",
            Key::FaqQ2 => "faq_q2",
            Key::FaqQ3 => "faq_q3",
            Key::FaqA1 => "faq_a1",
            Key::FaqA2 => "faq_a2",
            Key::FaqA3 => "faq_a3",
            Key::NotificationDeadlineManagement => "notification_deadline_management",
            Key::AddReminder => "add_reminder",
            Key::NoReminders => "no_reminders",
            Key::NoMatchingReminders => "no_matching_reminders",
            Key::Priority => "priority",
            Key::Category => "category",
            Key::Title => "title",
            Key::Deadline => "deadline",
            Key::Consultation => "consultation",
            Key::DocumentPreparation => "document_preparation",
            Key::Application => "application",
            Key::Interview => "interview",
            Key::InterviewQ1 => "interview_q1",
            Key::InterviewA1 => "interview_a1",
            Key::InterviewTip1 => "interview_tip1",
            Key::InterviewQ2 => "interview_q2",
            Key::InterviewA2 => "interview_a2",
            Key::InterviewTip2 => "interview_tip2",
            Key::InterviewQ3 => "interview_q3",
            Key::InterviewA3 => "interview_a3",
            Key::InterviewTip3 => "interview_tip3",
            Key::InterviewQ4 => "interview_q4",
            Key::InterviewA4 => "interview_a4",
            Key::InterviewTip4 => "interview_tip4",
            Key::InterviewQ5 => "interview_q5",
            Key::InterviewA5 => "interview_a5",
            Key::InterviewTip5 => "interview_tip5",
            Key::InterviewQ6 => "interview_q6",
            Key::InterviewA6 => "interview_a6",
            Key::InterviewTip6 => "interview_tip6",
            Key::InterviewQ7 => "interview_q7",
            Key::InterviewA7 => "interview_a7",
            Key::InterviewTip7 => "interview_tip7",
            Key::InterviewQ8 => "interview_q8",
            Key::InterviewA8 => "interview_a8",
            Key::InterviewTip8 => "interview_tip8",
            Key::InterviewQ9 => "interview_q9",
            Key::InterviewA9 => "interview_a9",
            Key::InterviewTip9 => "interview_tip9",
            Key::InterviewQ10 => "interview_q10",
            Key::InterviewA10 => "interview_a10",
            Key::InterviewTip10 => "interview_tip10",
            Key::InterviewQ11 => "interview_q11",
            Key::InterviewA11 => "interview_a11",
            Key::InterviewTip11 => "interview_tip11",
            Key::InterviewQ12 => "interview_q12",
            Key::InterviewA12 => "interview_a12",
            Key::InterviewTip12 => "interview_tip12",
            Key::InterviewQ13 => "interview_q13",
            Key::InterviewA13 => "interview_a13",
            Key::InterviewTip13 => "interview_tip13",
            Key::InterviewQ14 => "interview_q14",
            Key::InterviewA14 => "interview_a14",
            Key::InterviewTip14 => "interview_tip14",
            Key::InterviewQ15 => "interview_q15",
            Key::InterviewA15 => "interview_a15",
            Key::InterviewTip15 => "interview_tip15",
            Key::InterviewQ16 => "interview_q16",
            Key::InterviewA16 => "interview_a16",
            Key::InterviewTip16 => "interview_tip16",
            Key::InterviewQ17 => "interview_q17",
            Key::InterviewA17 => "interview_a17",
            Key::InterviewTip17 => "interview_tip17",
            Key::InterviewQ18 => "interview_q18",
            Key::InterviewA18 => "interview_a18",
            Key::InterviewTip18 => "interview_tip18",
        }
    }

    /// Every key, for table completeness checks.
    pub const ALL: &'static [Key] = &[
        Key::AppName,
        Key::Yes,
        Key::No,
        Key::Next,
        Key::Back,
        Key::Done,
        Key::Result,
        Key::Question,
        Key::Error,
        Key::Success,
        Key::All,
        Key::Today,
        Key::ThisWeek,
        Key::ThisMonth,
        Key::Expired,
        Key::Overdue,
        Key::ProgressFormat,
        Key::PercentageFormat,
        Key::DaysLater,
        Key::DiagnosisTitle,
        Key::DiagnosisQ1,
        Key::DiagnosisQ2,
        Key::DiagnosisQ3,
        Key::DiagnosisQ4,
        Key::DiagnosisQ5,
        Key::DiagnosisQ6,
        Key::DiagnosisQ7,
        Key::DiagnosisQ8,
        Key::DiagnosisQ9,
        Key::DiagnosisQ10,
        Key::CriminalRecordExplanation,
        Key::Eligible,
        Key::PossibleEligibility,
        Key::InsufficientEligibility,
        Key::EligibilityScore,
        Key::DetailedResult,
        Key::NextSteps,
        Key::DiagnosisStep1Title,
        Key::DiagnosisStep1Desc,
        Key::DiagnosisStep2Title,
        Key::DiagnosisStep2Desc,
        Key::DiagnosisStep3Title,
        Key::DiagnosisStep3Desc,
        Key::DiagnosisStep4Title,
        Key::DiagnosisStep4Desc,
        Key::DiagnosisStepNg1Title,
        Key::DiagnosisStepNg1Desc,
        Key::DiagnosisStepNg2Title,
        Key::DiagnosisStepNg2Desc,
        Key::DiagnosisStepNg3Title,
        Key::DiagnosisStepNg3Desc,
        Key::DocumentChecklist,
        Key::SelectCountry,
        Key::SelectStatus,
        Key::NecessaryDocumentProgress,
        Key::NoDocumentsFound,
        Key::Common,
        Key::China,
        Key::Vietnam,
        Key::Philippines,
        Key::Nepal,
        Key::Korea,
        Key::Other,
        Key::Worker,
        Key::Student,
        Key::TechnicalIntern,
        Key::InternationalMarriage,
        Key::PermanentResident,
        Key::Passport,
        Key::BirthCertificate,
        Key::NationalityCertificate,
        Key::ResidenceCard,
        Key::EmploymentCertificate,
        Key::IncomeCertificate,
        Key::TaxCertificate,
        Key::MarriageCertificate,
        Key::FamilyRegister,
        Key::GraduationCertificate,
        Key::Low,
        Key::Medium,
        Key::High,
        Key::Easy,
        Key::Hard,
        Key::LegalOfficeSearch,
        Key::SearchLegalOffice,
        Key::Prefecture,
        Key::Address,
        Key::PhoneNumber,
        Key::BusinessHours,
        Key::ConsultationDays,
        Key::Weekdays,
        Key::NoLegalOfficeFound,
        Key::TryDifferentSearch,
        Key::SapporoLegalOffice,
        Key::HakodateLegalOffice,
        Key::AomoriLegalOffice,
        Key::SendaiLegalOffice,
        Key::TokyoLegalOffice,
        Key::TokyoShinjukuOffice,
        Key::TokyoTachikawaOffice,
        Key::YokohamaLegalOffice,
        Key::SaitamaLegalOffice,
        Key::Hokkaido,
        Key::Aomori,
        Key::Miyagi,
        Key::Tokyo,
        Key::Kanagawa,
        Key::Saitama,
        Key::NaturalizationConsultation,
        Key::NationalityConsultation,
        Key::FamilyRegisterConsultation,
        Key::RegistrationConsultation,
        Key::InterviewPreparation,
        Key::QuestionCategory,
        Key::NoQuestionsFound,
        Key::SampleAnswer,
        Key::TipsAndNotes,
        Key::BasicInfo,
        Key::MotivationReason,
        Key::LifeWork,
        Key::FamilyRelatives,
        Key::JapaneseAbility,
        Key::StepGuide,
        Key::ProgressStatus,
        Key::StepCompleted,
        Key::Step1Title,
        Key::Step1Desc,
        Key::Step2Title,
        Key::Step2Desc,
        Key::Step3Title,
        Key::Step3Desc,
        Key::Step4Title,
        Key::Step4Desc,
        Key::Step5Title,
        Key::Step5Desc,
        Key::Step6Title,
        Key::Step6Desc,
        Key::Step7Title,
        Key::Step7Desc,
        Key::TranslationSupport,
        Key::SelectLanguage,
        Key::SelectDocument,
        Key::OriginalText,
        Key::TranslatedText,
        Key::ShowTemplate,
        Key::Translate,
        Key::Copy,
        Key::Faq,
        Key::FaqQ1,
        Key::FaqQ2,
        Key::FaqQ3,
        Key::FaqA1,
        Key::FaqA2,
        Key::FaqA3,
        Key::NotificationDeadlineManagement,
        Key::AddReminder,
        Key::NoReminders,
        Key::NoMatchingReminders,
        Key::Priority,
        Key::Category,
        Key::Title,
        Key::Deadline,
        Key::Consultation,
        Key::DocumentPreparation,
        Key::Application,
        Key::Interview,
        Key::InterviewQ1,
        Key::InterviewA1,
        Key::InterviewTip1,
        Key::InterviewQ2,
        Key::InterviewA2,
        Key::InterviewTip2,
        Key::InterviewQ3,
        Key::InterviewA3,
        Key::InterviewTip3,
        Key::InterviewQ4,
        Key::InterviewA4,
        Key::InterviewTip4,
        Key::InterviewQ5,
        Key::InterviewA5,
        Key::InterviewTip5,
        Key::InterviewQ6,
        Key::InterviewA6,
        Key::InterviewTip6,
        Key::InterviewQ7,
        Key::InterviewA7,
        Key::InterviewTip7,
        Key::InterviewQ8,
        Key::InterviewA8,
        Key::InterviewTip8,
        Key::InterviewQ9,
        Key::InterviewA9,
        Key::InterviewTip9,
        Key::InterviewQ10,
        Key::InterviewA10,
        Key::InterviewTip10,
        Key::InterviewQ11,
        Key::InterviewA11,
        Key::InterviewTip11,
        Key::InterviewQ12,
        Key::InterviewA12,
        Key::InterviewTip12,
        Key::InterviewQ13,
        Key::InterviewA13,
        Key::InterviewTip13,
        Key::InterviewQ14,
        Key::InterviewA14,
        Key::InterviewTip14,
        Key::InterviewQ15,
        Key::InterviewA15,
        Key::InterviewTip15,
        Key::InterviewQ16,
        Key::InterviewA16,
        Key::InterviewTip16,
        Key::InterviewQ17,
        Key::InterviewA17,
        Key::InterviewTip17,
        Key::InterviewQ18,
        Key::InterviewA18,
        Key::InterviewTip18,
    ];
}

// ─── Resolution ─────────────────────────────────────────────────────

/// Look up the display string for `key` in `lang`.
///
/// When the language table has no entry for the key, the raw key
/// identifier is returned; absent translations degrade silently rather
/// than erroring.
///
/// # Examples
///
/// ```
/// use kika::i18n::{resolve, Key, Lang};
/// assert_eq!(resolve(Lang::En, Key::Eligible), "Eligible");
/// assert_eq!(resolve(Lang::Ja, Key::Eligible), "申請可能");
/// ```
pub fn resolve(lang: Lang, key: Key) -> &'static str {
    lookup(table_for(lang), key).unwrap_or_else(|| key.as_str())
}

fn lookup(table: &'static [(Key, &'static str)], key: Key) -> Option<&'static str> {
    for &(k, v) in table {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn table_for(lang: Lang) -> &'static [(Key, &'static str)] {
    match lang {
        Lang::Ja => super::ja::TABLE,
        Lang::En => super::en::TABLE,
        Lang::ZhHans => super::zh_hans::TABLE,
        Lang::ZhHant => super::zh_hant::TABLE,
        Lang::Vi => super::vi::TABLE,
        Lang::Ko => super::ko::TABLE,
        Lang::Fil => super::fil::TABLE,
        Lang::Ne => super::ne::TABLE,
    }
}

// ─── Placeholder substitution ───────────────────────────────────────

/// Substitute `%d` / `%@` placeholders in a template, left to right.
///
/// `%%` renders a literal percent sign. Surplus placeholders are left
/// verbatim and surplus arguments are ignored; mismatched counts are the
/// caller's responsibility.
pub fn fmt_args(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('d') | Some('@') => {
                let marker = *chars.peek().unwrap_or(&'d');
                chars.next();
                match args.get(next_arg) {
                    Some(arg) => {
                        out.push_str(arg);
                        next_arg += 1;
                    }
                    None => {
                        out.push('%');
                        out.push(marker);
                    }
                }
            }
            _ => out.push('%'),
        }
    }
    out
}

/// Resolve a parameterized key and substitute its placeholders.
pub fn resolve_args(lang: Lang, key: Key, args: &[&str]) -> String {
    fmt_args(resolve(lang, key), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_in_every_language() {
        for &lang in Lang::all() {
            for &key in Key::ALL {
                assert!(
                    lookup(table_for(lang), key).is_some(),
                    "{} table is missing '{}'",
                    lang,
                    key.as_str()
                );
            }
        }
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        for &lang in Lang::all() {
            let table = table_for(lang);
            assert_eq!(
                table.len(),
                Key::ALL.len(),
                "{} table entry count mismatch",
                lang
            );
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let first = resolve(Lang::Vi, Key::DiagnosisTitle);
        let second = resolve(Lang::Vi, Key::DiagnosisTitle);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_entry_falls_back_to_key_identifier() {
        // A deliberately partial table: the fallback law says resolution
        // degrades to the raw identifier, never to another language.
        const PARTIAL: &[(Key, &str)] = &[(Key::Yes, "oui")];
        assert_eq!(lookup(PARTIAL, Key::Yes), Some("oui"));
        assert_eq!(lookup(PARTIAL, Key::No), None);
        assert_eq!(
            lookup(PARTIAL, Key::No).unwrap_or_else(|| Key::No.as_str()),
            "no"
        );
    }

    #[test]
    fn lang_code_roundtrip() {
        for &lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("zh-hant"), Some(Lang::ZhHant));
        assert_eq!(Lang::from_code("xx"), None);
    }

    #[test]
    fn known_translations() {
        assert_eq!(resolve(Lang::Ja, Key::Yes), "はい");
        assert_eq!(resolve(Lang::En, Key::DiagnosisTitle), "Naturalization Eligibility Diagnosis");
        assert_eq!(resolve(Lang::Ko, Key::Passport), "여권");
        assert_eq!(resolve(Lang::ZhHant, Key::China), "中國");
    }

    #[test]
    fn fmt_args_substitutes_in_order() {
        assert_eq!(fmt_args("Question %d of %d", &["3", "10"]), "Question 3 of 10");
        assert_eq!(fmt_args("%d%%", &["80"]), "80%");
        assert_eq!(fmt_args("%d日後", &["3"]), "3日後");
    }

    #[test]
    fn fmt_args_tolerates_mismatched_counts() {
        // surplus placeholders stay verbatim
        assert_eq!(fmt_args("%d of %d", &["1"]), "1 of %d");
        // surplus arguments are ignored
        assert_eq!(fmt_args("%d", &["1", "2"]), "1");
    }
}
