// SPDX-License-Identifier: PMPL-1.0-or-later

//! Nepali string table.

use super::catalog::Key;

#[rustfmt::skip]
pub(super) const TABLE: &[(Key, &str)] = &[
    // Common labels
    (Key::AppName, "KIKA+"),
    (Key::Yes, "हो"),
    (Key::No, "होइन"),
    (Key::Next, "अर्को"),
    (Key::Back, "फिर्ता"),
    (Key::Done, "सम्पन्न"),
    (Key::Result, "परिणाम"),
    (Key::Question, "प्रश्न"),
    (Key::Error, "त्रुटि"),
    (Key::Success, "सफल"),
    // Time filters
    (Key::All, "सबै"),
    (Key::Today, "आज"),
    (Key::ThisWeek, "यो हप्ता"),
    (Key::ThisMonth, "यो महिना"),
    (Key::Expired, "म्याद सकियो"),
    (Key::Overdue, "म्याद नाघ्यो"),
    // Parameterized formats
    (Key::ProgressFormat, "प्रश्न %d / %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d दिन पछि"),
    // Diagnosis
    (Key::DiagnosisTitle, "नागरिकता योग्यता जाँच"),
    (Key::DiagnosisQ1, "तपाईं जापानमा 5 वर्ष भन्दा बढी लगातार बस्नुभएको छ?"),
    (Key::DiagnosisQ2, "तपाईं 20 वर्ष वा माथिका हुनुहुन्छ र आफ्नो देशको कानुन अनुसार वयस्क क्षमता राख्नुहुन्छ?"),
    (Key::DiagnosisQ3, "तपाईंको चरित्र राम्रो छ?"),
    (Key::DiagnosisQ4, "तपाईं आफ्नो वा साझा जीविकाको साथी वा अन्य आफन्तको सम्पत्ति वा कौशलबाट जीविका चलाउन सक्नुहुन्छ?"),
    (Key::DiagnosisQ5, "तपाईंसँग राष्ट्रियता छैन, वा जापानी राष्ट्रियता प्राप्त गरेर त्यो राष्ट्रियता गुमाउनुपर्छ?"),
    (Key::DiagnosisQ6, "जापानी संविधान लागू भएको दिन पछि, तपाईंले कहिल्यै जापानी संविधान वा यसको अधीनमा स्थापित सरकारलाई हिंसा द्वारा नष्ट गर्ने योजना वा दाबी गर्नुभएको छ, वा यस्तो योजना वा दाबी गर्ने राजनीतिक दल वा अन्य संगठन गठन वा सामेल हुनुभएको छ?"),
    (Key::DiagnosisQ7, "तपाईं हाल जापानमा बस्नुहुन्छ?"),
    (Key::DiagnosisQ8, "तपाईं नागरिकता आवेदनको लागि आवश्यक कागजातहरू तयार गर्न सक्नुहुन्छ?"),
    (Key::DiagnosisQ9, "तपाईं जापानी पढ्न र लेख्न सक्नुहुन्छ?"),
    (Key::DiagnosisQ10, "तपाईं नागरिकता आवेदन प्रक्रिया बुझ्नुहुन्छ?"),
    (Key::CriminalRecordExplanation, "अपराधको इतिहास छैन, कर तिर्छ, यातायात उल्लङ्घन छैन, आदि"),
    (Key::Eligible, "योग्य"),
    (Key::PossibleEligibility, "सम्भावित योग्य"),
    (Key::InsufficientEligibility, "अपर्याप्त योग्यता"),
    (Key::EligibilityScore, "योग्यता स्कोर"),
    (Key::DetailedResult, "विस्तृत परिणाम"),
    (Key::NextSteps, "अर्को चरणहरू"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "आवश्यक कागजातको तयारी"),
    (Key::DiagnosisStep1Desc, "नागरिकता आवेदनका लागि आवश्यक कागजातहरू जम्मा गर्नुहोस्।"),
    (Key::DiagnosisStep2Title, "कानूनी मामिला ब्यूरोमा परामर्श"),
    (Key::DiagnosisStep2Desc, "आफ्नो क्षेत्रको कानूनी मामिला ब्यूरोमा पूर्व परामर्शको समय लिनुहोस्।"),
    (Key::DiagnosisStep3Title, "आवेदन पेश गर्नुहोस्"),
    (Key::DiagnosisStep3Desc, "कागजात तयार भएपछि कानूनी मामिला ब्यूरोमा आवेदन पेश गर्नुहोस्।"),
    (Key::DiagnosisStep4Title, "अन्तर्वार्ताको तयारी"),
    (Key::DiagnosisStep4Desc, "अन्तर्वार्तामा प्रायः सोधिने प्रश्नहरूको अभ्यास गर्नुहोस्।"),
    (Key::DiagnosisStepNg1Title, "आवश्यक कागजात अपुग"),
    (Key::DiagnosisStepNg1Desc, "आवेदनका लागि आवश्यक सबै कागजात तयार छन् कि जाँच गर्नुहोस्।"),
    (Key::DiagnosisStepNg2Title, "बसोबास अवधि अपुग"),
    (Key::DiagnosisStepNg2Desc, "आवेदनका लागि निश्चित बसोबास अवधि आवश्यक छ। सर्त पूरा भएको छ कि जाँच गर्नुहोस्।"),
    (Key::DiagnosisStepNg3Title, "अन्य सर्तहरू पूरा नभएको"),
    (Key::DiagnosisStepNg3Desc, "अन्य आवेदन सर्तहरू फेरि एकपटक जाँच गर्नुहोस्।"),
    // Document checklist
    (Key::DocumentChecklist, "कागजात चेकलिस्ट"),
    (Key::SelectCountry, "देश छान्नुहोस्"),
    (Key::SelectStatus, "बसोबास स्थिति छान्नुहोस्"),
    (Key::NecessaryDocumentProgress, "आवश्यक कागजात प्रगति"),
    (Key::NoDocumentsFound, "सम्बन्धित कागजातहरू फेला परेनन्"),
    (Key::Common, "साझा"),
    (Key::China, "चीन"),
    (Key::Vietnam, "भियतनाम"),
    (Key::Philippines, "फिलिपिन्स"),
    (Key::Nepal, "नेपाल"),
    (Key::Korea, "कोरिया"),
    (Key::Other, "अन्य"),
    (Key::Worker, "कामदार"),
    (Key::Student, "विद्यार्थी"),
    (Key::TechnicalIntern, "प्राविधिक इन्टर्न"),
    (Key::InternationalMarriage, "अन्तर्राष्ट्रिय विवाह"),
    (Key::PermanentResident, "स्थायी निवासी"),
    // Document names
    (Key::Passport, "राहदानी"),
    (Key::BirthCertificate, "जन्म प्रमाणपत्र"),
    (Key::NationalityCertificate, "राष्ट्रियता प्रमाणपत्र"),
    (Key::ResidenceCard, "बसोबास कार्ड"),
    (Key::EmploymentCertificate, "रोजगारी प्रमाणपत्र"),
    (Key::IncomeCertificate, "आय प्रमाणपत्र"),
    (Key::TaxCertificate, "कर प्रमाणपत्र"),
    (Key::MarriageCertificate, "विवाह प्रमाणपत्र"),
    (Key::FamilyRegister, "पारिवारिक दर्ता प्रमाणपत्र"),
    (Key::GraduationCertificate, "स्नातक प्रमाणपत्र"),
    // Priority and difficulty
    (Key::Low, "कम"),
    (Key::Medium, "मध्यम"),
    (Key::High, "उच्च"),
    (Key::Easy, "प्रारम्भिक"),
    (Key::Hard, "उच्च"),
    // Legal office search
    (Key::LegalOfficeSearch, "कानूनी कार्यालय खोज"),
    (Key::SearchLegalOffice, "कानूनी मामिला ब्यूरो खोज्नुहोस्"),
    (Key::Prefecture, "प्रान्त"),
    (Key::Address, "ठेगाना"),
    (Key::PhoneNumber, "फोन नम्बर"),
    (Key::BusinessHours, "कार्यालय समय"),
    (Key::ConsultationDays, "परामर्श दिन"),
    (Key::Weekdays, "कार्यदिन"),
    (Key::NoLegalOfficeFound, "कानूनी मामिला ब्यूरो फेला परेन"),
    (Key::TryDifferentSearch, "अरू खोज मापदण्डहरू प्रयास गर्नुहोस्"),
    // Office names
    (Key::SapporoLegalOffice, "सप्पोरो कानूनी कार्यालय"),
    (Key::HakodateLegalOffice, "हाकोदाते जिल्ला कानूनी कार्यालय"),
    (Key::AomoriLegalOffice, "आओमोरी जिल्ला कानूनी कार्यालय"),
    (Key::SendaiLegalOffice, "सेन्दाई कानूनी कार्यालय"),
    (Key::TokyoLegalOffice, "टोकियो कानूनी कार्यालय"),
    (Key::TokyoShinjukuOffice, "टोकियो कानूनी कार्यालय शिन्जुकु शाखा"),
    (Key::TokyoTachikawaOffice, "टोकियो कानूनी कार्यालय ताचिकावा शाखा"),
    (Key::YokohamaLegalOffice, "योकोहामा जिल्ला कानूनी कार्यालय"),
    (Key::SaitamaLegalOffice, "साइतामा जिल्ला कानूनी कार्यालय"),
    // Prefectures
    (Key::Hokkaido, "होक्काइदो"),
    (Key::Aomori, "आओमोरी प्रान्त"),
    (Key::Miyagi, "मियागी प्रान्त"),
    (Key::Tokyo, "टोकियो"),
    (Key::Kanagawa, "कानागावा प्रान्त"),
    (Key::Saitama, "साइतामा प्रान्त"),
    // Office services
    (Key::NaturalizationConsultation, "नागरिकता परामर्श"),
    (Key::NationalityConsultation, "राष्ट्रियता परामर्श"),
    (Key::FamilyRegisterConsultation, "परिवार दर्ता परामर्श"),
    (Key::RegistrationConsultation, "दर्ता परामर्श"),
    // Interview preparation
    (Key::InterviewPreparation, "अन्तर्वार्ता तयारी"),
    (Key::QuestionCategory, "प्रश्न वर्ग"),
    (Key::NoQuestionsFound, "प्रश्न फेला परेन"),
    (Key::SampleAnswer, "नमूना उत्तर"),
    (Key::TipsAndNotes, "सुझाव र ध्यान दिनुपर्ने कुरा"),
    (Key::BasicInfo, "आधारभूत जानकारी"),
    (Key::MotivationReason, "उद्देश्य・कारण"),
    (Key::LifeWork, "जीवन・काम"),
    (Key::FamilyRelatives, "परिवार・नातेदार"),
    (Key::JapaneseAbility, "जापानी भाषा क्षमता"),
    // Step guide
    (Key::StepGuide, "चरण गाइड"),
    (Key::ProgressStatus, "प्रगति स्थिति"),
    (Key::StepCompleted, "चरण पूरा"),
    // Procedure steps
    (Key::Step1Title, "प्रारम्भिक परामर्श"),
    (Key::Step1Desc, "कानूनी मामिला ब्यूरोमा नागरिकताका सर्त र आवश्यक कागजात पुष्टि गर्नुहोस्।"),
    (Key::Step2Title, "कागजात सङ्कलन"),
    (Key::Step2Desc, "आफ्नो देश र जापान दुवैबाट आवश्यक प्रमाणपत्रहरू सङ्कलन गर्नुहोस्।"),
    (Key::Step3Title, "आवेदन तयारी"),
    (Key::Step3Desc, "आवेदन फारम भर्नुहोस् र संलग्न कागजातहरू तयार गर्नुहोस्।"),
    (Key::Step4Title, "आवेदन पेश"),
    (Key::Step4Desc, "आफ्नो क्षेत्रको कानूनी मामिला ब्यूरोमा पूरा आवेदन पेश गर्नुहोस्।"),
    (Key::Step5Title, "जाँच"),
    (Key::Step5Desc, "कानूनी मामिला ब्यूरोले आवेदन जाँच गर्छ; थप कागजात माग्न सक्छ।"),
    (Key::Step6Title, "अन्तर्वार्ता"),
    (Key::Step6Desc, "जिम्मेवार अधिकृतसँगको अन्तर्वार्तामा सहभागी हुनुहोस्।"),
    (Key::Step7Title, "नतिजा सूचना"),
    (Key::Step7Desc, "स्वीकृत भएमा सरकारी राजपत्रमा प्रकाशित हुन्छ र त्यसपछिका प्रक्रियाहरू गरिन्छ।"),
    // Translation support
    (Key::TranslationSupport, "अनुवाद समर्थन"),
    (Key::SelectLanguage, "भाषा छान्नुहोस्"),
    (Key::SelectDocument, "कागजात छान्नुहोस्"),
    (Key::OriginalText, "मूल पाठ"),
    (Key::TranslatedText, "अनुवाद परिणाम"),
    (Key::ShowTemplate, "टेम्पलेट देखाउनुहोस्"),
    (Key::Translate, "अनुवाद"),
    (Key::Copy, "प्रतिलिपि"),
    (Key::Faq, "बारम्बार सोधिने प्रश्नहरू"),
    (Key::FaqQ1, "अनुवाद आवश्यक छ?"),
    (Key::FaqQ2, "नोटरी आवश्यक छ?"),
    (Key::FaqQ3, "म पेशेवर अनुवाद माग्नु पर्छ?"),
    (Key::FaqA1, "हो, विदेशी भाषामा लेखिएका कागजातको जापानी अनुवाद आवश्यक छ।"),
    (Key::FaqA2, "हो, अनुवादकको हस्ताक्षर र छाप आवश्यक छ।"),
    (Key::FaqA3, "अवस्था अनुसार नोटरी आवश्यक पर्न सक्छ।"),
    // Reminders
    (Key::NotificationDeadlineManagement, "सूचना・म्याद व्यवस्थापन"),
    (Key::AddReminder, "रिमाइन्डर थप्नुहोस्"),
    (Key::NoReminders, "रिमाइन्डर छैन"),
    (Key::NoMatchingReminders, "मिल्दो रिमाइन्डर छैन"),
    (Key::Priority, "प्राथमिकता"),
    (Key::Category, "वर्ग"),
    (Key::Title, "शीर्षक"),
    (Key::Deadline, "म्याद"),
    // Reminder categories
    (Key::Consultation, "परामर्श"),
    (Key::DocumentPreparation, "कागजात तयारी"),
    (Key::Application, "आवेदन"),
    (Key::Interview, "अन्तर्वार्ता"),
    // Interview flashcards
    (Key::InterviewQ1, "तपाईंको नाम के हो?"),
    (Key::InterviewA1, "मेरो नाम [नाम] हो।"),
    (Key::InterviewTip1, "स्पष्ट र धीमै बोल्नुहोस्।"),
    (Key::InterviewQ2, "तपाईं कहाँ जन्मनुभयो?"),
    (Key::InterviewA2, "म [देश] मा जन्मेको हुँ।"),
    (Key::InterviewTip2, "जन्मस्थान सही बताउनुहोस्।"),
    (Key::InterviewQ3, "तपाईं कहिले जापान आउनुभयो?"),
    (Key::InterviewA3, "म [वर्ष] मा जापान आएको हुँ।"),
    (Key::InterviewTip3, "जापान आएको वर्ष सही सम्झनुहोस्।"),
    (Key::InterviewQ4, "तपाईं किन नागरिकता चाहनुहुन्छ?"),
    (Key::InterviewA4, "किनभने म जापानमा स्थायी रूपमा बस्न चाहन्छु।"),
    (Key::InterviewTip4, "आफ्नै शब्दमा कारण व्याख्या गर्नुहोस्।"),
    (Key::InterviewQ5, "तपाईंलाई जापानको के मन पर्छ?"),
    (Key::InterviewA5, "मलाई जापानी संस्कृति र मान्छेहरू मन पर्छ।"),
    (Key::InterviewTip5, "विशिष्ट कारणहरू दिनुहोस्।"),
    (Key::InterviewQ6, "नागरिकता पछि पनि तपाईं जापानमा बस्नेछन्?"),
    (Key::InterviewA6, "हो, म जापानमा बस्नेछु।"),
    (Key::InterviewTip6, "जापानमा बस्ने इच्छा देखाउनुहोस्।"),
    (Key::InterviewQ7, "तपाईंको हालको पेशा के हो?"),
    (Key::InterviewA7, "म [पेशा] हुँ।"),
    (Key::InterviewTip7, "हालको पेशा सही बताउनुहोस्।"),
    (Key::InterviewQ8, "काम राम्रोसँग चलिरहेको छ?"),
    (Key::InterviewA8, "हो, राम्रोसँग चलिरहेको छ।"),
    (Key::InterviewTip8, "स्थिर पेशा भएको देखाउनुहोस्।"),
    (Key::InterviewQ9, "आम्दानी स्थिर छ?"),
    (Key::InterviewA9, "हो, स्थिर छ।"),
    (Key::InterviewTip9, "आर्थिक रूपमा स्थिर भएको देखाउनुहोस्।"),
    (Key::InterviewQ10, "तपाईंको परिवारमा कति जना छन्?"),
    (Key::InterviewA10, "मसँग [संख्या] जना परिवार छन्।"),
    (Key::InterviewTip10, "परिवारको संरचना सही बताउनुहोस्।"),
    (Key::InterviewQ11, "तपाईंको परिवार जापानमा बस्छन्?"),
    (Key::InterviewA11, "हो, मेरो परिवार जापानमा बस्छ।"),
    (Key::InterviewTip11, "परिवारको स्थिति सही बताउनुहोस्।"),
    (Key::InterviewQ12, "परिवारसँगको सम्बन्ध राम्रो छ?"),
    (Key::InterviewA12, "हो, राम्रो छ।"),
    (Key::InterviewTip12, "परिवारसँग राम्रो सम्बन्ध भएको देखाउनुहोस्।"),
    (Key::InterviewQ13, "तपाईं कति जापानी बोल्न सक्नुहुन्छ?"),
    (Key::InterviewA13, "दैनिक कुराकानीमा समस्या छैन।"),
    (Key::InterviewTip13, "जापानी क्षमतालाई उचित रूपमा मूल्याङ्कन गर्नुहोस्।"),
    (Key::InterviewQ14, "तपाईं जापानी सिक्न जारी राख्नुहुन्छ?"),
    (Key::InterviewA14, "हो, म सिक्न जारी राख्छु।"),
    (Key::InterviewTip14, "जापानी सिक्ने इच्छा देखाउनुहोस्।"),
    (Key::InterviewQ15, "तपाईं जापानी कानुन बुझ्नुहुन्छ?"),
    (Key::InterviewA15, "म आधारभूत कानुनहरू बुझ्छु।"),
    (Key::InterviewTip15, "जापानी कानुनको बुझाइ देखाउनुहोस्।"),
    (Key::InterviewQ16, "तपाईं कर सही तिर्नुहुन्छ?"),
    (Key::InterviewA16, "हो, म सही तिर्छु।"),
    (Key::InterviewTip16, "कर दायित्व पूरा गर्ने देखाउनुहोस्।"),
    (Key::InterviewQ17, "तपाईंसँग अपराधको इतिहास छ?"),
    (Key::InterviewA17, "होइन, छैन।"),
    (Key::InterviewTip17, "राम्रो चरित्र भएको देखाउनुहोस्।"),
    (Key::InterviewQ18, "तपाईंसँग अरू प्रश्नहरू छन्?"),
    (Key::InterviewA18, "विशेष छैन।"),
    (Key::InterviewTip18, "संक्षिप्त रूपमा जवाफ दिनुहोस्।"),
];
