// SPDX-License-Identifier: PMPL-1.0-or-later

//! English string table.

use super::catalog::Key;

#[rustfmt::skip]
pub(super) const TABLE: &[(Key, &str)] = &[
    // Common labels
    (Key::AppName, "KIKA+"),
    (Key::Yes, "Yes"),
    (Key::No, "No"),
    (Key::Next, "Next"),
    (Key::Back, "Back"),
    (Key::Done, "Done"),
    (Key::Result, "Result"),
    (Key::Question, "Question"),
    (Key::Error, "Error"),
    (Key::Success, "Success"),
    // Time filters
    (Key::All, "All"),
    (Key::Today, "Today"),
    (Key::ThisWeek, "This Week"),
    (Key::ThisMonth, "This Month"),
    (Key::Expired, "Expired"),
    (Key::Overdue, "Overdue"),
    // Parameterized formats
    (Key::ProgressFormat, "Question %d of %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d days later"),
    // Diagnosis
    (Key::DiagnosisTitle, "Naturalization Eligibility Diagnosis"),
    (Key::DiagnosisQ1, "Have you lived in Japan continuously for more than 5 years?"),
    (Key::DiagnosisQ2, "Are you 20 years or older and have the capacity to be an adult under your home country's law?"),
    (Key::DiagnosisQ3, "Are you of good conduct?"),
    (Key::DiagnosisQ4, "Can you make a living from your own assets or skills, or those of your spouse or other relatives who share your livelihood?"),
    (Key::DiagnosisQ5, "Do you have no nationality, or should you lose your nationality by acquiring Japanese nationality?"),
    (Key::DiagnosisQ6, "After the enforcement date of the Japanese Constitution, have you ever planned, advocated, organized, or joined a political party or other organization that planned or advocated the destruction of the Japanese Constitution or the government established under it by force?"),
    (Key::DiagnosisQ7, "Are you currently residing in Japan?"),
    (Key::DiagnosisQ8, "Can you prepare the documents required for naturalization application?"),
    (Key::DiagnosisQ9, "Can you read and write Japanese?"),
    (Key::DiagnosisQ10, "Do you understand the naturalization application procedure?"),
    (Key::CriminalRecordExplanation, "No criminal record, paying taxes, no traffic violations, etc."),
    (Key::Eligible, "Eligible"),
    (Key::PossibleEligibility, "Possibly Eligible"),
    (Key::InsufficientEligibility, "Insufficient Eligibility"),
    (Key::EligibilityScore, "Eligibility Score"),
    (Key::DetailedResult, "Detailed Result"),
    (Key::NextSteps, "Next Steps"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "Prepare Required Documents"),
    (Key::DiagnosisStep1Desc, "Gather the documents required for your naturalization application."),
    (Key::DiagnosisStep2Title, "Consult the Legal Affairs Bureau"),
    (Key::DiagnosisStep2Desc, "Book a pre-application consultation at your local Legal Affairs Bureau."),
    (Key::DiagnosisStep3Title, "Submit Your Application"),
    (Key::DiagnosisStep3Desc, "Submit the application to the Legal Affairs Bureau once your documents are ready."),
    (Key::DiagnosisStep4Title, "Prepare for the Interview"),
    (Key::DiagnosisStep4Desc, "Practice the questions commonly asked in the naturalization interview."),
    (Key::DiagnosisStepNg1Title, "Missing Required Documents"),
    (Key::DiagnosisStepNg1Desc, "Make sure every document required for the application is ready."),
    (Key::DiagnosisStepNg2Title, "Insufficient Period of Residence"),
    (Key::DiagnosisStepNg2Desc, "The application requires a minimum period of residence. Check whether you meet it."),
    (Key::DiagnosisStepNg3Title, "Other Requirements Not Met"),
    (Key::DiagnosisStepNg3Desc, "Review the other application requirements once more."),
    // Document checklist
    (Key::DocumentChecklist, "Document Checklist"),
    (Key::SelectCountry, "Select Country"),
    (Key::SelectStatus, "Select Residence Status"),
    (Key::NecessaryDocumentProgress, "Required Documents Progress"),
    (Key::NoDocumentsFound, "No documents found"),
    (Key::Common, "Common"),
    (Key::China, "China"),
    (Key::Vietnam, "Vietnam"),
    (Key::Philippines, "Philippines"),
    (Key::Nepal, "Nepal"),
    (Key::Korea, "Korea"),
    (Key::Other, "Other"),
    (Key::Worker, "Worker"),
    (Key::Student, "Student"),
    (Key::TechnicalIntern, "Technical Intern"),
    (Key::InternationalMarriage, "International Marriage"),
    (Key::PermanentResident, "Permanent Resident"),
    // Document names
    (Key::Passport, "Passport"),
    (Key::BirthCertificate, "Birth Certificate"),
    (Key::NationalityCertificate, "Nationality Certificate"),
    (Key::ResidenceCard, "Residence Card"),
    (Key::EmploymentCertificate, "Employment Certificate"),
    (Key::IncomeCertificate, "Income Certificate"),
    (Key::TaxCertificate, "Tax Certificate"),
    (Key::MarriageCertificate, "Marriage Certificate"),
    (Key::FamilyRegister, "Family Register Certificate"),
    (Key::GraduationCertificate, "Graduation Certificate"),
    // Priority and difficulty
    (Key::Low, "Low"),
    (Key::Medium, "Medium"),
    (Key::High, "High"),
    (Key::Easy, "Beginner"),
    (Key::Hard, "Advanced"),
    // Legal office search
    (Key::LegalOfficeSearch, "Legal Office Search"),
    (Key::SearchLegalOffice, "Search Legal Offices"),
    (Key::Prefecture, "Prefecture"),
    (Key::Address, "Address"),
    (Key::PhoneNumber, "Phone Number"),
    (Key::BusinessHours, "Business Hours"),
    (Key::ConsultationDays, "Consultation Days"),
    (Key::Weekdays, "Weekdays"),
    (Key::NoLegalOfficeFound, "No legal office found"),
    (Key::TryDifferentSearch, "Try different search criteria"),
    // Office names
    (Key::SapporoLegalOffice, "Sapporo Legal Affairs Bureau"),
    (Key::HakodateLegalOffice, "Hakodate District Legal Affairs Bureau"),
    (Key::AomoriLegalOffice, "Aomori District Legal Affairs Bureau"),
    (Key::SendaiLegalOffice, "Sendai Legal Affairs Bureau"),
    (Key::TokyoLegalOffice, "Tokyo Legal Affairs Bureau"),
    (Key::TokyoShinjukuOffice, "Tokyo Legal Affairs Bureau Shinjuku Branch"),
    (Key::TokyoTachikawaOffice, "Tokyo Legal Affairs Bureau Tachikawa Branch"),
    (Key::YokohamaLegalOffice, "Yokohama District Legal Affairs Bureau"),
    (Key::SaitamaLegalOffice, "Saitama District Legal Affairs Bureau"),
    // Prefectures
    (Key::Hokkaido, "Hokkaido"),
    (Key::Aomori, "Aomori Prefecture"),
    (Key::Miyagi, "Miyagi Prefecture"),
    (Key::Tokyo, "Tokyo"),
    (Key::Kanagawa, "Kanagawa Prefecture"),
    (Key::Saitama, "Saitama Prefecture"),
    // Office services
    (Key::NaturalizationConsultation, "Naturalization Consultation"),
    (Key::NationalityConsultation, "Nationality Consultation"),
    (Key::FamilyRegisterConsultation, "Family Register Consultation"),
    (Key::RegistrationConsultation, "Registration Consultation"),
    // Interview preparation
    (Key::InterviewPreparation, "Interview Preparation"),
    (Key::QuestionCategory, "Question Category"),
    (Key::NoQuestionsFound, "No questions found"),
    (Key::SampleAnswer, "Sample Answer"),
    (Key::TipsAndNotes, "Tips & Notes"),
    (Key::BasicInfo, "Basic Information"),
    (Key::MotivationReason, "Motivation & Reasons"),
    (Key::LifeWork, "Life & Work"),
    (Key::FamilyRelatives, "Family & Relatives"),
    (Key::JapaneseAbility, "Japanese Ability"),
    // Step guide
    (Key::StepGuide, "Step Guide"),
    (Key::ProgressStatus, "Progress"),
    (Key::StepCompleted, "Steps Completed"),
    // Procedure steps
    (Key::Step1Title, "Initial Consultation"),
    (Key::Step1Desc, "Confirm the requirements and required documents at the Legal Affairs Bureau."),
    (Key::Step2Title, "Document Collection"),
    (Key::Step2Desc, "Collect the required certificates from both your home country and Japan."),
    (Key::Step3Title, "Application Preparation"),
    (Key::Step3Desc, "Prepare the application form and supporting documents."),
    (Key::Step4Title, "Filing the Application"),
    (Key::Step4Desc, "File the complete application with your local Legal Affairs Bureau."),
    (Key::Step5Title, "Examination"),
    (Key::Step5Desc, "The Legal Affairs Bureau examines the application. Additional documents may be requested."),
    (Key::Step6Title, "Interview"),
    (Key::Step6Desc, "Attend the interview with the case officer."),
    (Key::Step7Title, "Decision"),
    (Key::Step7Desc, "If approved, the decision is published in the official gazette and follow-up procedures begin."),
    // Translation support
    (Key::TranslationSupport, "Translation Support"),
    (Key::SelectLanguage, "Select Language"),
    (Key::SelectDocument, "Select Document"),
    (Key::OriginalText, "Original Text"),
    (Key::TranslatedText, "Translated Text"),
    (Key::ShowTemplate, "Show Template"),
    (Key::Translate, "Translate"),
    (Key::Copy, "Copy"),
    (Key::Faq, "FAQ"),
    (Key::FaqQ1, "Is translation required?"),
    (Key::FaqQ2, "Is notarization required?"),
    (Key::FaqQ3, "Should I request professional translation?"),
    (Key::FaqA1, "Yes, documents written in a foreign language must be translated into Japanese."),
    (Key::FaqA2, "Yes, the translator's signature and seal are required."),
    (Key::FaqA3, "Notarization may be required in some cases."),
    // Reminders
    (Key::NotificationDeadlineManagement, "Notifications & Deadlines"),
    (Key::AddReminder, "Add Reminder"),
    (Key::NoReminders, "No reminders"),
    (Key::NoMatchingReminders, "No matching reminders"),
    (Key::Priority, "Priority"),
    (Key::Category, "Category"),
    (Key::Title, "Title"),
    (Key::Deadline, "Deadline"),
    // Reminder categories
    (Key::Consultation, "Consultation"),
    (Key::DocumentPreparation, "Document Preparation"),
    (Key::Application, "Application"),
    (Key::Interview, "Interview"),
    // Interview flashcards
    (Key::InterviewQ1, "What is your name?"),
    (Key::InterviewA1, "My name is [Name]."),
    (Key::InterviewTip1, "Speak clearly and slowly."),
    (Key::InterviewQ2, "Where were you born?"),
    (Key::InterviewA2, "I was born in [Country]."),
    (Key::InterviewTip2, "Tell your birthplace accurately."),
    (Key::InterviewQ3, "When did you come to Japan?"),
    (Key::InterviewA3, "I came to Japan in [Year]."),
    (Key::InterviewTip3, "Remember the year you came to Japan accurately."),
    (Key::InterviewQ4, "Why do you want to naturalize?"),
    (Key::InterviewA4, "Because I want to live permanently in Japan."),
    (Key::InterviewTip4, "Explain the reason in your own words."),
    (Key::InterviewQ5, "What do you like about Japan?"),
    (Key::InterviewA5, "I like Japanese culture and people."),
    (Key::InterviewTip5, "Give specific reasons."),
    (Key::InterviewQ6, "Will you continue to live in Japan after naturalization?"),
    (Key::InterviewA6, "Yes, I will continue to live in Japan."),
    (Key::InterviewTip6, "Show your intention to continue living in Japan."),
    (Key::InterviewQ7, "What is your current occupation?"),
    (Key::InterviewA7, "I am a [Occupation]."),
    (Key::InterviewTip7, "Tell your current occupation accurately."),
    (Key::InterviewQ8, "Is your work going well?"),
    (Key::InterviewA8, "Yes, it's going well."),
    (Key::InterviewTip8, "Show that you have a stable occupation."),
    (Key::InterviewQ9, "Is your income stable?"),
    (Key::InterviewA9, "Yes, it's stable."),
    (Key::InterviewTip9, "Show that you are economically stable."),
    (Key::InterviewQ10, "How many family members do you have?"),
    (Key::InterviewA10, "I have [Number] family members."),
    (Key::InterviewTip10, "Tell your family composition accurately."),
    (Key::InterviewQ11, "Do your family members live in Japan?"),
    (Key::InterviewA11, "Yes, my family lives in Japan."),
    (Key::InterviewTip11, "Tell your family situation accurately."),
    (Key::InterviewQ12, "Do you have a good relationship with your family?"),
    (Key::InterviewA12, "Yes, it's good."),
    (Key::InterviewTip12, "Show that you have a good relationship with your family."),
    (Key::InterviewQ13, "How well can you speak Japanese?"),
    (Key::InterviewA13, "I can handle daily conversation without problems."),
    (Key::InterviewTip13, "Evaluate your Japanese ability appropriately."),
    (Key::InterviewQ14, "Are you continuing to study Japanese?"),
    (Key::InterviewA14, "Yes, I continue to study."),
    (Key::InterviewTip14, "Show your motivation for learning Japanese."),
    (Key::InterviewQ15, "Do you understand Japanese laws?"),
    (Key::InterviewA15, "I understand basic laws."),
    (Key::InterviewTip15, "Show your understanding of Japanese laws."),
    (Key::InterviewQ16, "Do you pay taxes properly?"),
    (Key::InterviewA16, "Yes, I pay them properly."),
    (Key::InterviewTip16, "Show that you fulfill your tax obligations."),
    (Key::InterviewQ17, "Do you have any criminal record?"),
    (Key::InterviewA17, "No, I don't."),
    (Key::InterviewTip17, "Show that you are of good conduct."),
    (Key::InterviewQ18, "Do you have any other questions?"),
    (Key::InterviewA18, "Not particularly."),
    (Key::InterviewTip18, "Answer concisely."),
];
