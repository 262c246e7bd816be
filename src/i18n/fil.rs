// SPDX-License-Identifier: PMPL-1.0-or-later

//! Filipino string table.

use super::catalog::Key;

#[rustfmt::skip]
pub(super) const TABLE: &[(Key, &str)] = &[
    // Common labels
    (Key::AppName, "KIKA+"),
    (Key::Yes, "Oo"),
    (Key::No, "Hindi"),
    (Key::Next, "Susunod"),
    (Key::Back, "Bumalik"),
    (Key::Done, "Tapos na"),
    (Key::Result, "Resulta"),
    (Key::Question, "Tanong"),
    (Key::Error, "Error"),
    (Key::Success, "Tagumpay"),
    // Time filters
    (Key::All, "Lahat"),
    (Key::Today, "Ngayon"),
    (Key::ThisWeek, "Ngayong Linggo"),
    (Key::ThisMonth, "Ngayong Buwan"),
    (Key::Expired, "Expired"),
    (Key::Overdue, "Overdue"),
    // Parameterized formats
    (Key::ProgressFormat, "Tanong %d ng %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d araw mamaya"),
    // Diagnosis
    (Key::DiagnosisTitle, "Pagsusuri ng kuwalipikasyon sa naturalisasyon"),
    (Key::DiagnosisQ1, "Nakatira ka na ba nang tuloy-tuloy sa Japan ng mahigit 5 taon?"),
    (Key::DiagnosisQ2, "Ikaw ba ay 20 taong gulang o mas matanda at may kakayahan na maging adult ayon sa batas ng iyong bansa?"),
    (Key::DiagnosisQ3, "Mabuti ba ang iyong ugali?"),
    (Key::DiagnosisQ4, "Makakabuhay ka ba mula sa iyong sariling ari-arian o kasanayan, o ng iyong asawa o ibang kamag-anak na kasama sa iyong pamumuhay?"),
    (Key::DiagnosisQ5, "Wala ka bang nasyonalidad, o dapat mawala ang iyong nasyonalidad kapag nakuha mo ang nasyonalidad ng Japan?"),
    (Key::DiagnosisQ6, "Pagkatapos ng petsa ng pagpapatupad ng Konstitusyon ng Japan, nagplano, nag-advocate, nag-organisa, o sumali ka na ba sa partido politikal o ibang organisasyon na nagplano o nag-advocate ng pagwasak sa Konstitusyon ng Japan o gobyerno na itinatag sa ilalim nito sa pamamagitan ng dahas?"),
    (Key::DiagnosisQ7, "Nakatira ka ba ngayon sa Japan?"),
    (Key::DiagnosisQ8, "Makakapaghanda ka ba ng mga dokumento na kinakailangan para sa aplikasyon ng naturalisasyon?"),
    (Key::DiagnosisQ9, "Makakabasa at makakasulat ka ba ng Japanese?"),
    (Key::DiagnosisQ10, "Naiintindihan mo ba ang proseso ng aplikasyon ng naturalisasyon?"),
    (Key::CriminalRecordExplanation, "Walang criminal record, nagbabayad ng tax, walang traffic violation, atbp."),
    (Key::Eligible, "Kuwalipikado"),
    (Key::PossibleEligibility, "Posibleng kuwalipikado"),
    (Key::InsufficientEligibility, "Hindi sapat ang kuwalipikasyon"),
    (Key::EligibilityScore, "Marka ng kuwalipikasyon"),
    (Key::DetailedResult, "Detalyadong resulta"),
    (Key::NextSteps, "Mga susunod na hakbang"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "Ihanda ang mga Kinakailangang Dokumento"),
    (Key::DiagnosisStep1Desc, "Kolektahin ang mga dokumentong kailangan para sa aplikasyon ng naturalisasyon."),
    (Key::DiagnosisStep2Title, "Kumonsulta sa Legal Affairs Bureau"),
    (Key::DiagnosisStep2Desc, "Mag-book ng konsultasyon sa inyong lokal na Legal Affairs Bureau."),
    (Key::DiagnosisStep3Title, "Isumite ang Aplikasyon"),
    (Key::DiagnosisStep3Desc, "Isumite ang aplikasyon sa Legal Affairs Bureau kapag kumpleto na ang mga dokumento."),
    (Key::DiagnosisStep4Title, "Maghanda para sa Interbyu"),
    (Key::DiagnosisStep4Desc, "Magsanay sa mga tanong na madalas itanong sa interbyu."),
    (Key::DiagnosisStepNg1Title, "Kulang ang mga Kinakailangang Dokumento"),
    (Key::DiagnosisStepNg1Desc, "Siguraduhing kumpleto ang lahat ng dokumentong kailangan para sa aplikasyon."),
    (Key::DiagnosisStepNg2Title, "Kulang ang Panahon ng Paninirahan"),
    (Key::DiagnosisStepNg2Desc, "Nangangailangan ang aplikasyon ng tiyak na panahon ng paninirahan. Suriin kung natutugunan ito."),
    (Key::DiagnosisStepNg3Title, "Hindi Natugunan ang Ibang Kondisyon"),
    (Key::DiagnosisStepNg3Desc, "Suriin muli ang iba pang kondisyon ng aplikasyon."),
    // Document checklist
    (Key::DocumentChecklist, "Listahan ng mga dokumento"),
    (Key::SelectCountry, "Pumili ng Bansa"),
    (Key::SelectStatus, "Pumili ng Status ng Paninirahan"),
    (Key::NecessaryDocumentProgress, "Progreso ng mga Kinakailangang Dokumento"),
    (Key::NoDocumentsFound, "Walang nahanap na dokumento"),
    (Key::Common, "Karaniwan"),
    (Key::China, "Tsina"),
    (Key::Vietnam, "Vietnam"),
    (Key::Philippines, "Pilipinas"),
    (Key::Nepal, "Nepal"),
    (Key::Korea, "Korea"),
    (Key::Other, "Iba pa"),
    (Key::Worker, "Manggagawa"),
    (Key::Student, "Mag-aaral"),
    (Key::TechnicalIntern, "Teknikal na Intern"),
    (Key::InternationalMarriage, "Internasyonal na Kasal"),
    (Key::PermanentResident, "Permanenteng Resident"),
    // Document names
    (Key::Passport, "Pasaporte"),
    (Key::BirthCertificate, "Birth Certificate"),
    (Key::NationalityCertificate, "Sertipiko ng Nasyonalidad"),
    (Key::ResidenceCard, "Residence Card"),
    (Key::EmploymentCertificate, "Sertipiko ng Trabaho"),
    (Key::IncomeCertificate, "Sertipiko ng Kita"),
    (Key::TaxCertificate, "Sertipiko ng Buwis"),
    (Key::MarriageCertificate, "Marriage Certificate"),
    (Key::FamilyRegister, "Sertipiko ng Family Register"),
    (Key::GraduationCertificate, "Sertipiko ng Pagtatapos"),
    // Priority and difficulty
    (Key::Low, "Mababa"),
    (Key::Medium, "Katamtaman"),
    (Key::High, "Mataas"),
    (Key::Easy, "Panimula"),
    (Key::Hard, "Abante"),
    // Legal office search
    (Key::LegalOfficeSearch, "Paghahanap ng tanggapan ng legal"),
    (Key::SearchLegalOffice, "Maghanap ng Legal Affairs Bureau"),
    (Key::Prefecture, "Prefektura"),
    (Key::Address, "Address"),
    (Key::PhoneNumber, "Numero ng Telepono"),
    (Key::BusinessHours, "Oras ng Opisina"),
    (Key::ConsultationDays, "Araw ng Konsultasyon"),
    (Key::Weekdays, "Lunes hanggang Biyernes"),
    (Key::NoLegalOfficeFound, "Walang nahanap na Legal Affairs Bureau"),
    (Key::TryDifferentSearch, "Subukan ang ibang search criteria"),
    // Office names
    (Key::SapporoLegalOffice, "Tanggapan ng Legal Affairs ng Sapporo"),
    (Key::HakodateLegalOffice, "Tanggapan ng Legal Affairs ng Distrito ng Hakodate"),
    (Key::AomoriLegalOffice, "Tanggapan ng Legal Affairs ng Distrito ng Aomori"),
    (Key::SendaiLegalOffice, "Tanggapan ng Legal Affairs ng Sendai"),
    (Key::TokyoLegalOffice, "Tanggapan ng Legal Affairs ng Tokyo"),
    (Key::TokyoShinjukuOffice, "Sangay ng Shinjuku ng Tanggapan ng Legal Affairs ng Tokyo"),
    (Key::TokyoTachikawaOffice, "Sangay ng Tachikawa ng Tanggapan ng Legal Affairs ng Tokyo"),
    (Key::YokohamaLegalOffice, "Tanggapan ng Legal Affairs ng Distrito ng Yokohama"),
    (Key::SaitamaLegalOffice, "Tanggapan ng Legal Affairs ng Distrito ng Saitama"),
    // Prefectures
    (Key::Hokkaido, "Hokkaido"),
    (Key::Aomori, "Prepektura ng Aomori"),
    (Key::Miyagi, "Prepektura ng Miyagi"),
    (Key::Tokyo, "Tokyo"),
    (Key::Kanagawa, "Prepektura ng Kanagawa"),
    (Key::Saitama, "Prepektura ng Saitama"),
    // Office services
    (Key::NaturalizationConsultation, "Konsultasyon sa Naturalisasyon"),
    (Key::NationalityConsultation, "Konsultasyon sa Nasyonalidad"),
    (Key::FamilyRegisterConsultation, "Konsultasyon sa Rehistro ng Pamilya"),
    (Key::RegistrationConsultation, "Konsultasyon sa Rehistrasyon"),
    // Interview preparation
    (Key::InterviewPreparation, "Pagpapahanda sa interbyu"),
    (Key::QuestionCategory, "Kategorya ng Tanong"),
    (Key::NoQuestionsFound, "Walang nahanap na tanong"),
    (Key::SampleAnswer, "Halimbawang Sagot"),
    (Key::TipsAndNotes, "Mga Tip at Paalala"),
    (Key::BasicInfo, "Pangunahing Impormasyon"),
    (Key::MotivationReason, "Motibasyon・Dahilan"),
    (Key::LifeWork, "Pamumuhay・Trabaho"),
    (Key::FamilyRelatives, "Pamilya・Kamag-anak"),
    (Key::JapaneseAbility, "Kakayahan sa Nihongo"),
    // Step guide
    (Key::StepGuide, "Gabay sa mga hakbang"),
    (Key::ProgressStatus, "Kalagayan ng Progreso"),
    (Key::StepCompleted, "Nakumpletong Hakbang"),
    // Procedure steps
    (Key::Step1Title, "Paunang Konsultasyon"),
    (Key::Step1Desc, "Kumpirmahin ang mga kondisyon at kinakailangang dokumento sa Legal Affairs Bureau."),
    (Key::Step2Title, "Pagkolekta ng Dokumento"),
    (Key::Step2Desc, "Kolektahin ang mga kinakailangang sertipiko mula sa sariling bansa at Japan."),
    (Key::Step3Title, "Paghahanda ng Aplikasyon"),
    (Key::Step3Desc, "Punan ang application form at ihanda ang mga kalakip na dokumento."),
    (Key::Step4Title, "Pagsusumite ng Aplikasyon"),
    (Key::Step4Desc, "Isumite ang kumpletong aplikasyon sa lokal na Legal Affairs Bureau."),
    (Key::Step5Title, "Pagsusuri"),
    (Key::Step5Desc, "Susuriin ng Legal Affairs Bureau ang aplikasyon; maaaring humingi ng karagdagang dokumento."),
    (Key::Step6Title, "Interbyu"),
    (Key::Step6Desc, "Dumalo sa interbyu kasama ang opisyal na namamahala."),
    (Key::Step7Title, "Abiso ng Resulta"),
    (Key::Step7Desc, "Kapag naaprubahan, ilalathala ito sa opisyal na gazette at isasagawa ang mga susunod na hakbang."),
    // Translation support
    (Key::TranslationSupport, "Suporta sa pagsasalin"),
    (Key::SelectLanguage, "Piliin ang Wika"),
    (Key::SelectDocument, "Piliin ang Dokumento"),
    (Key::OriginalText, "Orihinal na Teksto"),
    (Key::TranslatedText, "Resulta ng Salin"),
    (Key::ShowTemplate, "Ipakita ang Template"),
    (Key::Translate, "Isalin"),
    (Key::Copy, "Kopyahin"),
    (Key::Faq, "FAQ"),
    (Key::FaqQ1, "Kailangan ba ng pagsasalin?"),
    (Key::FaqQ2, "Kailangan ba ng notaryo?"),
    (Key::FaqQ3, "Dapat bang humiling ng propesyonal na pagsasalin?"),
    (Key::FaqA1, "Oo, ang mga dokumentong nakasulat sa wikang banyaga ay nangangailangan ng salin sa Nihongo."),
    (Key::FaqA2, "Oo, kailangan ang lagda at selyo ng tagasalin."),
    (Key::FaqA3, "Depende sa kaso, maaaring kailanganin ang notaryo."),
    // Reminders
    (Key::NotificationDeadlineManagement, "Pamamahala ng Abiso・Deadline"),
    (Key::AddReminder, "Magdagdag ng Paalala"),
    (Key::NoReminders, "Walang paalala"),
    (Key::NoMatchingReminders, "Walang tumutugmang paalala"),
    (Key::Priority, "Prayoridad"),
    (Key::Category, "Kategorya"),
    (Key::Title, "Pamagat"),
    (Key::Deadline, "Deadline"),
    // Reminder categories
    (Key::Consultation, "Konsultasyon"),
    (Key::DocumentPreparation, "Paghahanda ng Dokumento"),
    (Key::Application, "Aplikasyon"),
    (Key::Interview, "Interbyu"),
    // Interview flashcards
    (Key::InterviewQ1, "Ano ang pangalan mo?"),
    (Key::InterviewA1, "Ang pangalan ko ay [Pangalan]."),
    (Key::InterviewTip1, "Magsalita nang malinaw at mabagal."),
    (Key::InterviewQ2, "Saan ka ipinanganak?"),
    (Key::InterviewA2, "Ipinanganak ako sa [Bansa]."),
    (Key::InterviewTip2, "Sabihin nang tumpak ang lugar ng kapanganakan."),
    (Key::InterviewQ3, "Kailan ka pumunta sa Japan?"),
    (Key::InterviewA3, "Pumunta ako sa Japan noong [Taon]."),
    (Key::InterviewTip3, "Tandaan nang tumpak ang taon na pumunta ka sa Japan."),
    (Key::InterviewQ4, "Bakit gusto mong mag-naturalisasyon?"),
    (Key::InterviewA4, "Dahil gusto kong manirahan nang permanente sa Japan."),
    (Key::InterviewTip4, "Ipaliwanag ang dahilan sa sarili mong salita."),
    (Key::InterviewQ5, "Ano ang gusto mo sa Japan?"),
    (Key::InterviewA5, "Gusto ko ang kultura at mga tao ng Japan."),
    (Key::InterviewTip5, "Magbigay ng mga tiyak na dahilan."),
    (Key::InterviewQ6, "Magpapatuloy ka bang manirahan sa Japan pagkatapos ng naturalisasyon?"),
    (Key::InterviewA6, "Oo, magpapatuloy akong manirahan sa Japan."),
    (Key::InterviewTip6, "Ipakita ang iyong intensyon na magpatuloy na manirahan sa Japan."),
    (Key::InterviewQ7, "Ano ang kasalukuyan mong trabaho?"),
    (Key::InterviewA7, "Ako ay [Trabaho]."),
    (Key::InterviewTip7, "Sabihin nang tumpak ang kasalukuyan mong trabaho."),
    (Key::InterviewQ8, "Maayos ba ang iyong trabaho?"),
    (Key::InterviewA8, "Oo, maayos."),
    (Key::InterviewTip8, "Ipakita na mayroon kang matatag na trabaho."),
    (Key::InterviewQ9, "Matatag ba ang iyong kita?"),
    (Key::InterviewA9, "Oo, matatag."),
    (Key::InterviewTip9, "Ipakita na matatag ka sa ekonomiya."),
    (Key::InterviewQ10, "Ilan ang miyembro ng iyong pamilya?"),
    (Key::InterviewA10, "Mayroon akong [Bilang] miyembro ng pamilya."),
    (Key::InterviewTip10, "Sabihin nang tumpak ang komposisyon ng pamilya."),
    (Key::InterviewQ11, "Nakatira ba sa Japan ang mga miyembro ng iyong pamilya?"),
    (Key::InterviewA11, "Oo, nakatira sa Japan ang aking pamilya."),
    (Key::InterviewTip11, "Sabihin nang tumpak ang sitwasyon ng pamilya."),
    (Key::InterviewQ12, "Mabuti ba ang iyong relasyon sa pamilya?"),
    (Key::InterviewA12, "Oo, mabuti."),
    (Key::InterviewTip12, "Ipakita na mayroon kang mabuting relasyon sa pamilya."),
    (Key::InterviewQ13, "Gaano ka kagaling mag-Japanese?"),
    (Key::InterviewA13, "Kaya kong makipag-usap sa araw-araw nang walang problema."),
    (Key::InterviewTip13, "I-evaluate nang naaangkop ang iyong kakayahan sa Japanese."),
    (Key::InterviewQ14, "Nagpapatuloy ka bang mag-aral ng Japanese?"),
    (Key::InterviewA14, "Oo, nagpapatuloy akong mag-aral."),
    (Key::InterviewTip14, "Ipakita ang iyong motibasyon sa pag-aaral ng Japanese."),
    (Key::InterviewQ15, "Naiintindihan mo ba ang mga batas ng Japan?"),
    (Key::InterviewA15, "Naiintindihan ko ang mga pangunahing batas."),
    (Key::InterviewTip15, "Ipakita ang iyong pag-unawa sa mga batas ng Japan."),
    (Key::InterviewQ16, "Nagbabayad ka ba ng buwis nang maayos?"),
    (Key::InterviewA16, "Oo, nagbabayad ako nang maayos."),
    (Key::InterviewTip16, "Ipakita na tinutupad mo ang iyong obligasyon sa pagbabayad ng buwis."),
    (Key::InterviewQ17, "Mayroon ka bang kriminal na rekord?"),
    (Key::InterviewA17, "Hindi, wala."),
    (Key::InterviewTip17, "Ipakita na mayroon kang mabuting ugali."),
    (Key::InterviewQ18, "Mayroon ka bang ibang tanong?"),
    (Key::InterviewA18, "Walang partikular."),
    (Key::InterviewTip18, "Sumagot nang maikli."),
];
