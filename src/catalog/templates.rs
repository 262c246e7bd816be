// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation templates for foreign-issued certificates.
//!
//! Each template pairs an English-language source layout with a Japanese
//! sample translation, plus the certification block the bureaus expect the
//! translator to attach. Templates are starting points; applicants adapt
//! the bracketed placeholders.

use crate::i18n::Key;

/// Documents a template exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateDocument {
    BirthCertificate,
    MarriageCertificate,
    NationalityCertificate,
    GraduationCertificate,
    EmploymentCertificate,
    TaxCertificate,
}

impl TemplateDocument {
    pub fn key(&self) -> Key {
        match self {
            TemplateDocument::BirthCertificate => Key::BirthCertificate,
            TemplateDocument::MarriageCertificate => Key::MarriageCertificate,
            TemplateDocument::NationalityCertificate => Key::NationalityCertificate,
            TemplateDocument::GraduationCertificate => Key::GraduationCertificate,
            TemplateDocument::EmploymentCertificate => Key::EmploymentCertificate,
            TemplateDocument::TaxCertificate => Key::TaxCertificate,
        }
    }

    pub fn all() -> &'static [TemplateDocument] {
        &[
            TemplateDocument::BirthCertificate,
            TemplateDocument::MarriageCertificate,
            TemplateDocument::NationalityCertificate,
            TemplateDocument::GraduationCertificate,
            TemplateDocument::EmploymentCertificate,
            TemplateDocument::TaxCertificate,
        ]
    }
}

/// Template text plus its sample translation.
#[derive(Debug, Clone, Copy)]
pub struct TranslationTemplate {
    pub document: TemplateDocument,
    pub template: &'static str,
    pub sample_translation: &'static str,
}

pub const TEMPLATES: &[TranslationTemplate] = &[
    TranslationTemplate {
        document: TemplateDocument::BirthCertificate,
        template: "CERTIFICATE OF BIRTH\n\nThis is to certify that [Full Name] was born on [Date of Birth] at [Place of Birth] to [Father's Full Name] and [Mother's Full Name].\n\nDate of Issue: [Date]\nIssuing Authority: [Authority Name]\nOfficial Seal: [Seal]\n\nI, [Translator Name], hereby certify that this is a true and accurate translation of the original document.\n\nTranslator's Signature: [Signature]\nDate: [Date]",
        sample_translation: "出生証明書\n\n氏名：[氏名]が[日付]に[場所]で[父の氏名]と[母の氏名]の子として出生したことを証明します。\n\n発行日：[日付]\n発行機関：[機関名]",
    },
    TranslationTemplate {
        document: TemplateDocument::MarriageCertificate,
        template: "MARRIAGE CERTIFICATE\n\nThis is to certify that [Groom's Name] and [Bride's Name] were married on [Date] at [Place].\n\nDate of Issue: [Date]\nIssuing Authority: [Authority Name]",
        sample_translation: "婚姻証明書\n\n[新郎の氏名]と[新婦の氏名]が[日付]に[場所]で婚姻したことを証明します。\n\n発行日：[日付]\n発行機関：[機関名]",
    },
    TranslationTemplate {
        document: TemplateDocument::NationalityCertificate,
        template: "CERTIFICATE OF NATIONALITY\n\nThis is to certify that [Full Name], born on [Date of Birth], is a national of [Country].\n\nDate of Issue: [Date]\nIssuing Authority: [Authority Name]",
        sample_translation: "国籍証明書\n\n[氏名]（[日付]生）が[国名]の国民であることを証明します。\n\n発行日：[日付]\n発行機関：[機関名]",
    },
    TranslationTemplate {
        document: TemplateDocument::GraduationCertificate,
        template: "CERTIFICATE OF GRADUATION\n\nThis is to certify that [Full Name] graduated from [School Name] on [Date].\n\nDate of Issue: [Date]\nIssuing Authority: [School Name]",
        sample_translation: "卒業証明書\n\n[氏名]が[日付]に[学校名]を卒業したことを証明します。\n\n発行日：[日付]\n発行機関：[学校名]",
    },
    TranslationTemplate {
        document: TemplateDocument::EmploymentCertificate,
        template: "CERTIFICATE OF EMPLOYMENT\n\nThis is to certify that [Full Name] has been employed by [Company Name] as [Position] since [Date].\n\nDate of Issue: [Date]\nIssuing Authority: [Company Name]",
        sample_translation: "在職証明書\n\n[氏名]が[日付]より[会社名]に[役職]として在職していることを証明します。\n\n発行日：[日付]\n発行機関：[会社名]",
    },
    TranslationTemplate {
        document: TemplateDocument::TaxCertificate,
        template: "TAX PAYMENT CERTIFICATE\n\nThis is to certify that [Full Name] has paid taxes amounting to [Amount] for the fiscal year [Year].\n\nDate of Issue: [Date]\nIssuing Authority: [Authority Name]",
        sample_translation: "納税証明書\n\n[氏名]が[年度]年度分の税金[金額]を納付したことを証明します。\n\n発行日：[日付]\n発行機関：[機関名]",
    },
];

/// Look up the template for a document.
pub fn template_for(document: TemplateDocument) -> &'static TranslationTemplate {
    // TEMPLATES is ordered to mirror TemplateDocument::all().
    &TEMPLATES[document as usize]
}

/// Frequently asked questions about certified translations.
pub const FAQ: &[(Key, Key)] = &[
    (Key::FaqQ1, Key::FaqA1),
    (Key::FaqQ2, Key::FaqA2),
    (Key::FaqQ3, Key::FaqA3),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_document_has_a_template() {
        for &doc in TemplateDocument::all() {
            let t = template_for(doc);
            assert_eq!(t.document, doc);
            assert!(t.template.contains('['), "placeholders present");
            assert!(!t.sample_translation.is_empty());
        }
    }
}
