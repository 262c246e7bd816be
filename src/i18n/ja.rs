// SPDX-License-Identifier: PMPL-1.0-or-later

//! Japanese string table.

use super::catalog::Key;

#[rustfmt::skip]
pub(super) const TABLE: &[(Key, &str)] = &[
    // Common labels
    (Key::AppName, "KIKA+"),
    (Key::Yes, "はい"),
    (Key::No, "いいえ"),
    (Key::Next, "次へ"),
    (Key::Back, "戻る"),
    (Key::Done, "完了"),
    (Key::Result, "結果"),
    (Key::Question, "質問"),
    (Key::Error, "エラー"),
    (Key::Success, "成功"),
    // Time filters
    (Key::All, "すべて"),
    (Key::Today, "今日"),
    (Key::ThisWeek, "今週"),
    (Key::ThisMonth, "今月"),
    (Key::Expired, "期限切れ"),
    (Key::Overdue, "期限超過"),
    // Parameterized formats
    (Key::ProgressFormat, "質問 %d / %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d日後"),
    // Diagnosis
    (Key::DiagnosisTitle, "帰化申請適性診断"),
    (Key::DiagnosisQ1, "日本に5年以上継続して住んでいますか？"),
    (Key::DiagnosisQ2, "20歳以上で、本国法によっても成年の能力を有していますか？"),
    (Key::DiagnosisQ3, "素行が善良ですか？"),
    (Key::DiagnosisQ4, "自己又は生計を一にする配偶者その他の親族の資産又は技能によって生計を営むことができるか？"),
    (Key::DiagnosisQ5, "国籍を有せず、又は日本の国籍の取得によってその国籍を失うべきですか？"),
    (Key::DiagnosisQ6, "日本国憲法施行の日以後において、日本国憲法又はその下に成立した政府を暴力で破壊することを企て、若しくは主張し、又はこれを企て、若しくは主張する政党その他の団体を結成し、若しくはこれに加入したことがありますか？"),
    (Key::DiagnosisQ7, "現在、日本に在留していますか？"),
    (Key::DiagnosisQ8, "帰化申請に必要な書類を準備できますか？"),
    (Key::DiagnosisQ9, "日本語の読み書きができますか？"),
    (Key::DiagnosisQ10, "帰化申請の手続きを理解していますか？"),
    (Key::CriminalRecordExplanation, "犯罪歴がない、税金を納めている、交通違反がないことなど"),
    (Key::Eligible, "申請可能"),
    (Key::PossibleEligibility, "申請可能性あり"),
    (Key::InsufficientEligibility, "申請条件不十分"),
    (Key::EligibilityScore, "適性スコア"),
    (Key::DetailedResult, "詳細結果"),
    (Key::NextSteps, "次のステップ"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "必要書類の準備"),
    (Key::DiagnosisStep1Desc, "帰化申請に必要な書類を集めましょう。"),
    (Key::DiagnosisStep2Title, "法務局への相談"),
    (Key::DiagnosisStep2Desc, "管轄の法務局で事前相談の予約を取りましょう。"),
    (Key::DiagnosisStep3Title, "申請書の提出"),
    (Key::DiagnosisStep3Desc, "書類が揃ったら法務局に申請書を提出します。"),
    (Key::DiagnosisStep4Title, "面接の準備"),
    (Key::DiagnosisStep4Desc, "面接でよく聞かれる質問を練習しましょう。"),
    (Key::DiagnosisStepNg1Title, "必要書類の不足"),
    (Key::DiagnosisStepNg1Desc, "申請に必要な書類がすべて揃っているか確認しましょう。"),
    (Key::DiagnosisStepNg2Title, "在留期間の不足"),
    (Key::DiagnosisStepNg2Desc, "申請には一定の在留期間が必要です。条件を満たしているか確認しましょう。"),
    (Key::DiagnosisStepNg3Title, "その他の要件未達成"),
    (Key::DiagnosisStepNg3Desc, "その他の申請要件をもう一度確認しましょう。"),
    // Document checklist
    (Key::DocumentChecklist, "書類チェックリスト"),
    (Key::SelectCountry, "国を選択"),
    (Key::SelectStatus, "在留資格を選択"),
    (Key::NecessaryDocumentProgress, "必要書類進捗"),
    (Key::NoDocumentsFound, "書類が見つかりません"),
    (Key::Common, "共通"),
    (Key::China, "中国"),
    (Key::Vietnam, "ベトナム"),
    (Key::Philippines, "フィリピン"),
    (Key::Nepal, "ネパール"),
    (Key::Korea, "韓国"),
    (Key::Other, "その他"),
    (Key::Worker, "労働者"),
    (Key::Student, "学生"),
    (Key::TechnicalIntern, "技能実習生"),
    (Key::InternationalMarriage, "国際結婚"),
    (Key::PermanentResident, "永住者"),
    // Document names
    (Key::Passport, "パスポート"),
    (Key::BirthCertificate, "出生証明書"),
    (Key::NationalityCertificate, "国籍証明書"),
    (Key::ResidenceCard, "在留カード"),
    (Key::EmploymentCertificate, "在職証明書"),
    (Key::IncomeCertificate, "所得証明書"),
    (Key::TaxCertificate, "納税証明書"),
    (Key::MarriageCertificate, "結婚証明書"),
    (Key::FamilyRegister, "家族登録証明書"),
    (Key::GraduationCertificate, "卒業証明書"),
    // Priority and difficulty
    (Key::Low, "低"),
    (Key::Medium, "中級"),
    (Key::High, "高"),
    (Key::Easy, "初級"),
    (Key::Hard, "上級"),
    // Legal office search
    (Key::LegalOfficeSearch, "法務局検索"),
    (Key::SearchLegalOffice, "法務局検索"),
    (Key::Prefecture, "都道府県"),
    (Key::Address, "住所"),
    (Key::PhoneNumber, "電話番号"),
    (Key::BusinessHours, "営業時間"),
    (Key::ConsultationDays, "相談日"),
    (Key::Weekdays, "平日"),
    (Key::NoLegalOfficeFound, "法務局が見つかりません"),
    (Key::TryDifferentSearch, "別の条件で検索してください"),
    // Office names
    (Key::SapporoLegalOffice, "札幌法務局"),
    (Key::HakodateLegalOffice, "函館地方法務局"),
    (Key::AomoriLegalOffice, "青森地方法務局"),
    (Key::SendaiLegalOffice, "仙台法務局"),
    (Key::TokyoLegalOffice, "東京法務局"),
    (Key::TokyoShinjukuOffice, "東京法務局新宿出張所"),
    (Key::TokyoTachikawaOffice, "東京法務局立川出張所"),
    (Key::YokohamaLegalOffice, "横浜地方法務局"),
    (Key::SaitamaLegalOffice, "さいたま地方法務局"),
    // Prefectures
    (Key::Hokkaido, "北海道"),
    (Key::Aomori, "青森県"),
    (Key::Miyagi, "宮城県"),
    (Key::Tokyo, "東京都"),
    (Key::Kanagawa, "神奈川県"),
    (Key::Saitama, "埼玉県"),
    // Office services
    (Key::NaturalizationConsultation, "帰化相談"),
    (Key::NationalityConsultation, "国籍相談"),
    (Key::FamilyRegisterConsultation, "戸籍相談"),
    (Key::RegistrationConsultation, "登記相談"),
    // Interview preparation
    (Key::InterviewPreparation, "面接準備"),
    (Key::QuestionCategory, "質問カテゴリー"),
    (Key::NoQuestionsFound, "質問が見つかりません"),
    (Key::SampleAnswer, "サンプル回答"),
    (Key::TipsAndNotes, "コツと注意事項"),
    (Key::BasicInfo, "基本情報"),
    (Key::MotivationReason, "動機・理由"),
    (Key::LifeWork, "生活・仕事"),
    (Key::FamilyRelatives, "家族・親族"),
    (Key::JapaneseAbility, "日本語能力"),
    // Step guide
    (Key::StepGuide, "ステップガイド"),
    (Key::ProgressStatus, "進捗状況"),
    (Key::StepCompleted, "ステップ完了"),
    // Procedure steps
    (Key::Step1Title, "事前相談"),
    (Key::Step1Desc, "法務局で帰化の要件と必要書類を確認します。"),
    (Key::Step2Title, "書類収集"),
    (Key::Step2Desc, "本国と日本の両方で必要な証明書を集めます。"),
    (Key::Step3Title, "申請書類の作成"),
    (Key::Step3Desc, "申請書と添付書類を作成します。"),
    (Key::Step4Title, "申請の提出"),
    (Key::Step4Desc, "管轄の法務局に申請書一式を提出します。"),
    (Key::Step5Title, "審査"),
    (Key::Step5Desc, "法務局による審査が行われます。追加書類を求められることがあります。"),
    (Key::Step6Title, "面接"),
    (Key::Step6Desc, "担当官との面接を受けます。"),
    (Key::Step7Title, "結果通知"),
    (Key::Step7Desc, "許可されると官報に告示され、その後の手続きを行います。"),
    // Translation support
    (Key::TranslationSupport, "翻訳サポート"),
    (Key::SelectLanguage, "言語選択"),
    (Key::SelectDocument, "書類選択"),
    (Key::OriginalText, "原文"),
    (Key::TranslatedText, "翻訳結果"),
    (Key::ShowTemplate, "テンプレート表示"),
    (Key::Translate, "翻訳"),
    (Key::Copy, "コピー"),
    (Key::Faq, "よくある質問"),
    (Key::FaqQ1, "翻訳は必要ですか？"),
    (Key::FaqQ2, "翻訳者の署名は必要ですか？"),
    (Key::FaqQ3, "公証は必要ですか？"),
    (Key::FaqA1, "はい、外国語で書かれた書類は日本語翻訳が必要です。"),
    (Key::FaqA2, "はい、翻訳者による署名と印鑑が必要です。"),
    (Key::FaqA3, "場合によっては公証が必要になることがあります。"),
    // Reminders
    (Key::NotificationDeadlineManagement, "通知・期限管理"),
    (Key::AddReminder, "リマインダー追加"),
    (Key::NoReminders, "リマインダーがありません"),
    (Key::NoMatchingReminders, "該当するリマインダーがありません"),
    (Key::Priority, "優先度"),
    (Key::Category, "カテゴリー"),
    (Key::Title, "タイトル"),
    (Key::Deadline, "期限"),
    // Reminder categories
    (Key::Consultation, "相談"),
    (Key::DocumentPreparation, "書類準備"),
    (Key::Application, "申請"),
    (Key::Interview, "面接"),
    // Interview flashcards
    (Key::InterviewQ1, "お名前を教えてください。"),
    (Key::InterviewA1, "私の名前は[名前]です。"),
    (Key::InterviewTip1, "はっきりと、ゆっくりと話してください。"),
    (Key::InterviewQ2, "お生まれはどちらですか？"),
    (Key::InterviewA2, "私は[国名]で生まれました。"),
    (Key::InterviewTip2, "出身地を正確に伝えてください。"),
    (Key::InterviewQ3, "いつ日本に来ましたか？"),
    (Key::InterviewA3, "私は[年]に日本に来ました。"),
    (Key::InterviewTip3, "来日した年を正確に覚えておいてください。"),
    (Key::InterviewQ4, "なぜ帰化を希望するのですか？"),
    (Key::InterviewA4, "日本で永続的に生活したいからです。"),
    (Key::InterviewTip4, "自分の言葉で理由を説明してください。"),
    (Key::InterviewQ5, "日本が好きな理由は何ですか？"),
    (Key::InterviewA5, "日本の文化と人々が好きだからです。"),
    (Key::InterviewTip5, "具体的な理由を挙げてください。"),
    (Key::InterviewQ6, "帰化後も日本に住み続けますか？"),
    (Key::InterviewA6, "はい、日本に住み続けます。"),
    (Key::InterviewTip6, "確実に日本に住み続ける意思を示してください。"),
    (Key::InterviewQ7, "現在の職業は何ですか？"),
    (Key::InterviewA7, "私は[職業]です。"),
    (Key::InterviewTip7, "現在の職業を正確に伝えてください。"),
    (Key::InterviewQ8, "仕事は順調ですか？"),
    (Key::InterviewA8, "はい、順調です。"),
    (Key::InterviewTip8, "安定した職業であることを示してください。"),
    (Key::InterviewQ9, "収入は安定していますか？"),
    (Key::InterviewA9, "はい、安定しています。"),
    (Key::InterviewTip9, "経済的に安定していることを示してください。"),
    (Key::InterviewQ10, "家族は何人ですか？"),
    (Key::InterviewA10, "私の家族は[人数]人です。"),
    (Key::InterviewTip10, "家族構成を正確に伝えてください。"),
    (Key::InterviewQ11, "家族は日本に住んでいますか？"),
    (Key::InterviewA11, "はい、家族は日本に住んでいます。"),
    (Key::InterviewTip11, "家族の状況を正確に伝えてください。"),
    (Key::InterviewQ12, "家族との関係は良好ですか？"),
    (Key::InterviewA12, "はい、良好です。"),
    (Key::InterviewTip12, "家族との関係が良好であることを示してください。"),
    (Key::InterviewQ13, "日本語はどの程度できますか？"),
    (Key::InterviewA13, "日常会話は問題ありません。"),
    (Key::InterviewTip13, "日本語能力を適切に評価してください。"),
    (Key::InterviewQ14, "日本語の勉強は続けていますか？"),
    (Key::InterviewA14, "はい、継続して勉強しています。"),
    (Key::InterviewTip14, "日本語学習への意欲を示してください。"),
    (Key::InterviewQ15, "日本の法律は理解していますか？"),
    (Key::InterviewA15, "基本的な法律は理解しています。"),
    (Key::InterviewTip15, "日本の法律への理解を示してください。"),
    (Key::InterviewQ16, "税金はきちんと払っていますか？"),
    (Key::InterviewA16, "はい、きちんと払っています。"),
    (Key::InterviewTip16, "納税義務を果たしていることを示してください。"),
    (Key::InterviewQ17, "犯罪歴はありますか？"),
    (Key::InterviewA17, "いいえ、ありません。"),
    (Key::InterviewTip17, "素行が善良であることを示してください。"),
    (Key::InterviewQ18, "他に質問はありますか？"),
    (Key::InterviewA18, "特にありません。"),
    (Key::InterviewTip18, "簡潔に答えてください。"),
];
