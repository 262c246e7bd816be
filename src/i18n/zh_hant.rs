// SPDX-License-Identifier: PMPL-1.0-or-later

//! Traditional Chinese string table.

use super::catalog::Key;

#[rustfmt::skip]
pub(super) const TABLE: &[(Key, &str)] = &[
    // Common labels
    (Key::AppName, "KIKA+"),
    (Key::Yes, "是"),
    (Key::No, "否"),
    (Key::Next, "下一步"),
    (Key::Back, "返回"),
    (Key::Done, "完成"),
    (Key::Result, "結果"),
    (Key::Question, "問題"),
    (Key::Error, "錯誤"),
    (Key::Success, "成功"),
    // Time filters
    (Key::All, "全部"),
    (Key::Today, "今天"),
    (Key::ThisWeek, "本週"),
    (Key::ThisMonth, "本月"),
    (Key::Expired, "已過期"),
    (Key::Overdue, "已逾期"),
    // Parameterized formats
    (Key::ProgressFormat, "問題 %d / %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d天後"),
    // Diagnosis
    (Key::DiagnosisTitle, "歸化資格診斷"),
    (Key::DiagnosisQ1, "您在日本連續居住超過5年了嗎？"),
    (Key::DiagnosisQ2, "您是否年滿20歲，並且根據您本國法律具有成年能力？"),
    (Key::DiagnosisQ3, "您的品行良好嗎？"),
    (Key::DiagnosisQ4, "您能否依靠自己的資產或技能，或者依靠與您共同生活的配偶或其他親屬的資產或技能維持生計？"),
    (Key::DiagnosisQ5, "您是否沒有國籍，或者應該在取得日本國籍時失去您的國籍？"),
    (Key::DiagnosisQ6, "在日本憲法實施日期之後，您是否曾經計劃、主張、組織或加入計劃或主張以暴力破壞日本憲法或在其下建立的政府的政黨或其他組織？"),
    (Key::DiagnosisQ7, "您目前是否居住在日本？"),
    (Key::DiagnosisQ8, "您能否準備歸化申請所需的文件？"),
    (Key::DiagnosisQ9, "您能否讀寫日語？"),
    (Key::DiagnosisQ10, "您是否了解歸化申請程序？"),
    (Key::CriminalRecordExplanation, "沒有犯罪記錄、按時納稅、沒有交通違規等"),
    (Key::Eligible, "符合資格"),
    (Key::PossibleEligibility, "可能符合資格"),
    (Key::InsufficientEligibility, "資格不足"),
    (Key::EligibilityScore, "資格分數"),
    (Key::DetailedResult, "詳細結果"),
    (Key::NextSteps, "下一步驟"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "準備所需文件"),
    (Key::DiagnosisStep1Desc, "收集歸化申請所需的文件。"),
    (Key::DiagnosisStep2Title, "諮詢法務局"),
    (Key::DiagnosisStep2Desc, "在管轄的法務局預約事前諮詢。"),
    (Key::DiagnosisStep3Title, "提交申請"),
    (Key::DiagnosisStep3Desc, "文件齊全後向法務局提交申請書。"),
    (Key::DiagnosisStep4Title, "準備面試"),
    (Key::DiagnosisStep4Desc, "練習面試中常被問到的問題。"),
    (Key::DiagnosisStepNg1Title, "所需文件缺失"),
    (Key::DiagnosisStepNg1Desc, "請確保已準備好所有申請所需的文件。"),
    (Key::DiagnosisStepNg2Title, "在留期間不足"),
    (Key::DiagnosisStepNg2Desc, "申請需要一定的在留期間。請確認是否符合條件。"),
    (Key::DiagnosisStepNg3Title, "其他要求未達成"),
    (Key::DiagnosisStepNg3Desc, "請再次確認其他申請要求。"),
    // Document checklist
    (Key::DocumentChecklist, "文件檢查清單"),
    (Key::SelectCountry, "選擇國家"),
    (Key::SelectStatus, "選擇居留資格"),
    (Key::NecessaryDocumentProgress, "必要文件進度"),
    (Key::NoDocumentsFound, "未找到相應文件"),
    (Key::Common, "通用"),
    (Key::China, "中國"),
    (Key::Vietnam, "越南"),
    (Key::Philippines, "菲律賓"),
    (Key::Nepal, "尼泊爾"),
    (Key::Korea, "韓國"),
    (Key::Other, "其他"),
    (Key::Worker, "工作者"),
    (Key::Student, "學生"),
    (Key::TechnicalIntern, "技能實習生"),
    (Key::InternationalMarriage, "國際婚姻"),
    (Key::PermanentResident, "永久居民"),
    // Document names
    (Key::Passport, "護照"),
    (Key::BirthCertificate, "出生證明書"),
    (Key::NationalityCertificate, "國籍證明書"),
    (Key::ResidenceCard, "在留卡"),
    (Key::EmploymentCertificate, "在職證明書"),
    (Key::IncomeCertificate, "收入證明書"),
    (Key::TaxCertificate, "納稅證明書"),
    (Key::MarriageCertificate, "結婚證明書"),
    (Key::FamilyRegister, "家族登記證明書"),
    (Key::GraduationCertificate, "畢業證明書"),
    // Priority and difficulty
    (Key::Low, "低"),
    (Key::Medium, "中"),
    (Key::High, "高"),
    (Key::Easy, "初級"),
    (Key::Hard, "高級"),
    // Legal office search
    (Key::LegalOfficeSearch, "法務局搜尋"),
    (Key::SearchLegalOffice, "搜尋法務局"),
    (Key::Prefecture, "都道府縣"),
    (Key::Address, "地址"),
    (Key::PhoneNumber, "電話號碼"),
    (Key::BusinessHours, "辦公時間"),
    (Key::ConsultationDays, "諮詢日"),
    (Key::Weekdays, "平日"),
    (Key::NoLegalOfficeFound, "找不到法務局"),
    (Key::TryDifferentSearch, "請嘗試其他搜尋條件"),
    // Office names
    (Key::SapporoLegalOffice, "札幌法務局"),
    (Key::HakodateLegalOffice, "函館地方法務局"),
    (Key::AomoriLegalOffice, "青森地方法務局"),
    (Key::SendaiLegalOffice, "仙台法務局"),
    (Key::TokyoLegalOffice, "東京法務局"),
    (Key::TokyoShinjukuOffice, "東京法務局新宿分所"),
    (Key::TokyoTachikawaOffice, "東京法務局立川分所"),
    (Key::YokohamaLegalOffice, "橫濱地方法務局"),
    (Key::SaitamaLegalOffice, "埼玉地方法務局"),
    // Prefectures
    (Key::Hokkaido, "北海道"),
    (Key::Aomori, "青森縣"),
    (Key::Miyagi, "宮城縣"),
    (Key::Tokyo, "東京都"),
    (Key::Kanagawa, "神奈川縣"),
    (Key::Saitama, "埼玉縣"),
    // Office services
    (Key::NaturalizationConsultation, "歸化諮詢"),
    (Key::NationalityConsultation, "國籍諮詢"),
    (Key::FamilyRegisterConsultation, "戶籍諮詢"),
    (Key::RegistrationConsultation, "登記諮詢"),
    // Interview preparation
    (Key::InterviewPreparation, "面試準備"),
    (Key::QuestionCategory, "問題類別"),
    (Key::NoQuestionsFound, "找不到問題"),
    (Key::SampleAnswer, "範例回答"),
    (Key::TipsAndNotes, "技巧和注意事項"),
    (Key::BasicInfo, "基本資訊"),
    (Key::MotivationReason, "動機・理由"),
    (Key::LifeWork, "生活・工作"),
    (Key::FamilyRelatives, "家庭・親屬"),
    (Key::JapaneseAbility, "日語能力"),
    // Step guide
    (Key::StepGuide, "步驟指南"),
    (Key::ProgressStatus, "進度狀況"),
    (Key::StepCompleted, "步驟完成"),
    // Procedure steps
    (Key::Step1Title, "事前諮詢"),
    (Key::Step1Desc, "在法務局確認歸化的條件和所需文件。"),
    (Key::Step2Title, "收集文件"),
    (Key::Step2Desc, "從本國和日本收集所需的證明文件。"),
    (Key::Step3Title, "製作申請文件"),
    (Key::Step3Desc, "填寫申請書並準備附件文件。"),
    (Key::Step4Title, "提交申請"),
    (Key::Step4Desc, "向管轄的法務局提交全部申請文件。"),
    (Key::Step5Title, "審查"),
    (Key::Step5Desc, "法務局進行審查，可能會要求補充文件。"),
    (Key::Step6Title, "面試"),
    (Key::Step6Desc, "接受負責官員的面試。"),
    (Key::Step7Title, "結果通知"),
    (Key::Step7Desc, "獲得許可後將在官報上公告，隨後辦理後續手續。"),
    // Translation support
    (Key::TranslationSupport, "翻譯支援"),
    (Key::SelectLanguage, "選擇語言"),
    (Key::SelectDocument, "選擇文件"),
    (Key::OriginalText, "原文"),
    (Key::TranslatedText, "翻譯結果"),
    (Key::ShowTemplate, "顯示範本"),
    (Key::Translate, "翻譯"),
    (Key::Copy, "複製"),
    (Key::Faq, "常見問題"),
    (Key::FaqQ1, "需要翻譯嗎？"),
    (Key::FaqQ2, "需要公證嗎？"),
    (Key::FaqQ3, "應該請求專業翻譯嗎？"),
    (Key::FaqA1, "是的，用外語書寫的文件需要日語翻譯。"),
    (Key::FaqA2, "是的，需要翻譯者的簽名和蓋章。"),
    (Key::FaqA3, "根據情況可能需要公證。"),
    // Reminders
    (Key::NotificationDeadlineManagement, "通知・期限管理"),
    (Key::AddReminder, "新增提醒"),
    (Key::NoReminders, "沒有提醒"),
    (Key::NoMatchingReminders, "沒有符合的提醒"),
    (Key::Priority, "優先級"),
    (Key::Category, "類別"),
    (Key::Title, "標題"),
    (Key::Deadline, "期限"),
    // Reminder categories
    (Key::Consultation, "諮詢"),
    (Key::DocumentPreparation, "文件準備"),
    (Key::Application, "申請"),
    (Key::Interview, "面試"),
    // Interview flashcards
    (Key::InterviewQ1, "您的姓名是什麼？"),
    (Key::InterviewA1, "我的姓名是[姓名]。"),
    (Key::InterviewTip1, "請清楚且緩慢地說話。"),
    (Key::InterviewQ2, "您出生在哪裡？"),
    (Key::InterviewA2, "我出生在[國家]。"),
    (Key::InterviewTip2, "請準確說出您的出生地。"),
    (Key::InterviewQ3, "您什麼時候來到日本？"),
    (Key::InterviewA3, "我在[年份]來到日本。"),
    (Key::InterviewTip3, "請準確記住您來到日本的年份。"),
    (Key::InterviewQ4, "您為什麼想要歸化？"),
    (Key::InterviewA4, "因為我想要永久居住在日本。"),
    (Key::InterviewTip4, "請用自己的話解釋原因。"),
    (Key::InterviewQ5, "您喜歡日本的什麼？"),
    (Key::InterviewA5, "我喜歡日本的文化和人民。"),
    (Key::InterviewTip5, "請給出具體的理由。"),
    (Key::InterviewQ6, "歸化後您會繼續居住在日本嗎？"),
    (Key::InterviewA6, "是的，我會繼續居住在日本。"),
    (Key::InterviewTip6, "請表現出繼續居住日本的意願。"),
    (Key::InterviewQ7, "您目前的職業是什麼？"),
    (Key::InterviewA7, "我是[職業]。"),
    (Key::InterviewTip7, "請準確說出您目前的職業。"),
    (Key::InterviewQ8, "您的工作順利嗎？"),
    (Key::InterviewA8, "是的，很順利。"),
    (Key::InterviewTip8, "請表現出您有穩定的職業。"),
    (Key::InterviewQ9, "您的收入穩定嗎？"),
    (Key::InterviewA9, "是的，很穩定。"),
    (Key::InterviewTip9, "請表現出您在經濟上穩定。"),
    (Key::InterviewQ10, "您有多少家庭成員？"),
    (Key::InterviewA10, "我有[數量]個家庭成員。"),
    (Key::InterviewTip10, "請準確說出您的家庭構成。"),
    (Key::InterviewQ11, "您的家庭成員居住在日本嗎？"),
    (Key::InterviewA11, "是的，我的家庭居住在日本。"),
    (Key::InterviewTip11, "請準確說出您的家庭情況。"),
    (Key::InterviewQ12, "您與家人的關係良好嗎？"),
    (Key::InterviewA12, "是的，很好。"),
    (Key::InterviewTip12, "請表現出您與家人關係良好。"),
    (Key::InterviewQ13, "您的日語程度如何？"),
    (Key::InterviewA13, "日常會話沒有問題。"),
    (Key::InterviewTip13, "請適當評價日語能力。"),
    (Key::InterviewQ14, "您還在繼續學習日語嗎？"),
    (Key::InterviewA14, "是的，我繼續學習。"),
    (Key::InterviewTip14, "請表明學習日語的意願。"),
    (Key::InterviewQ15, "您理解日本的法律嗎？"),
    (Key::InterviewA15, "我理解基本的法律。"),
    (Key::InterviewTip15, "請表明對日本法律的理解。"),
    (Key::InterviewQ16, "您按時繳納稅金嗎？"),
    (Key::InterviewA16, "是的，我按時繳納。"),
    (Key::InterviewTip16, "請表明履行納稅義務。"),
    (Key::InterviewQ17, "您有犯罪記錄嗎？"),
    (Key::InterviewA17, "沒有。"),
    (Key::InterviewTip17, "請表明品行善良。"),
    (Key::InterviewQ18, "您還有其他問題嗎？"),
    (Key::InterviewA18, "沒有特別的問題。"),
    (Key::InterviewTip18, "請簡潔回答。"),
];
