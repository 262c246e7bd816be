// SPDX-License-Identifier: PMPL-1.0-or-later

//! Simplified Chinese string table.

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
    (Key::Result, "结果"),
    (Key::Question, "问题"),
    (Key::Error, "错误"),
    (Key::Success, "成功"),
    // Time filters
    (Key::All, "全部"),
    (Key::Today, "今天"),
    (Key::ThisWeek, "本周"),
    (Key::ThisMonth, "本月"),
    (Key::Expired, "已过期"),
    (Key::Overdue, "逾期"),
    // Parameterized formats
    (Key::ProgressFormat, "问题 %d / %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d天后"),
    // Diagnosis
    (Key::DiagnosisTitle, "归化资格诊断"),
    (Key::DiagnosisQ1, "您在日本连续居住超过5年了吗？"),
    (Key::DiagnosisQ2, "您是否20岁以上，并且根据本国法律具有成年能力？"),
    (Key::DiagnosisQ3, "您的品行是否良好？"),
    (Key::DiagnosisQ4, "您是否能够依靠自己或共同生活的配偶或其他亲属的资产或技能维持生计？"),
    (Key::DiagnosisQ5, "您是否没有国籍，或者应该因取得日本国籍而失去原国籍？"),
    (Key::DiagnosisQ6, "在日本宪法实施日之后，您是否曾经计划、主张、组织或加入计划或主张用暴力破坏日本宪法或在其下成立的政府的政党或其他组织？"),
    (Key::DiagnosisQ7, "您目前是否在日本居住？"),
    (Key::DiagnosisQ8, "您是否能够准备归化申请所需的文件？"),
    (Key::DiagnosisQ9, "您是否能够读写日语？"),
    (Key::DiagnosisQ10, "您是否理解归化申请程序？"),
    (Key::CriminalRecordExplanation, "无犯罪记录、按时纳税、无交通违规等"),
    (Key::Eligible, "符合资格"),
    (Key::PossibleEligibility, "可能符合资格"),
    (Key::InsufficientEligibility, "资格不足"),
    (Key::EligibilityScore, "资格评分"),
    (Key::DetailedResult, "详细结果"),
    (Key::NextSteps, "下一步"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "准备所需文件"),
    (Key::DiagnosisStep1Desc, "收集归化申请所需的文件。"),
    (Key::DiagnosisStep2Title, "咨询法务局"),
    (Key::DiagnosisStep2Desc, "在管辖的法务局预约事前咨询。"),
    (Key::DiagnosisStep3Title, "提交申请"),
    (Key::DiagnosisStep3Desc, "文件齐全后向法务局提交申请书。"),
    (Key::DiagnosisStep4Title, "准备面试"),
    (Key::DiagnosisStep4Desc, "练习面试中常被问到的问题。"),
    (Key::DiagnosisStepNg1Title, "所需文件缺失"),
    (Key::DiagnosisStepNg1Desc, "请确保已准备好所有申请所需的文件。"),
    (Key::DiagnosisStepNg2Title, "在留期间不足"),
    (Key::DiagnosisStepNg2Desc, "申请需要一定的在留期间。请确认是否符合条件。"),
    (Key::DiagnosisStepNg3Title, "其他要求未达成"),
    (Key::DiagnosisStepNg3Desc, "请再次确认其他申请要求。"),
    // Document checklist
    (Key::DocumentChecklist, "文件清单"),
    (Key::SelectCountry, "选择国家"),
    (Key::SelectStatus, "选择在留资格"),
    (Key::NecessaryDocumentProgress, "必要文件进度"),
    (Key::NoDocumentsFound, "未找到相应文件"),
    (Key::Common, "通用"),
    (Key::China, "中国"),
    (Key::Vietnam, "越南"),
    (Key::Philippines, "菲律宾"),
    (Key::Nepal, "尼泊尔"),
    (Key::Korea, "韩国"),
    (Key::Other, "其他"),
    (Key::Worker, "工作者"),
    (Key::Student, "学生"),
    (Key::TechnicalIntern, "技能实习生"),
    (Key::InternationalMarriage, "国际婚姻"),
    (Key::PermanentResident, "永久居民"),
    // Document names
    (Key::Passport, "护照"),
    (Key::BirthCertificate, "出生证明书"),
    (Key::NationalityCertificate, "国籍证明书"),
    (Key::ResidenceCard, "在留卡"),
    (Key::EmploymentCertificate, "在职证明书"),
    (Key::IncomeCertificate, "收入证明书"),
    (Key::TaxCertificate, "纳税证明书"),
    (Key::MarriageCertificate, "结婚证明书"),
    (Key::FamilyRegister, "家族登记证明书"),
    (Key::GraduationCertificate, "毕业证明书"),
    // Priority and difficulty
    (Key::Low, "低"),
    (Key::Medium, "中"),
    (Key::High, "高"),
    (Key::Easy, "初级"),
    (Key::Hard, "高级"),
    // Legal office search
    (Key::LegalOfficeSearch, "法务局搜索"),
    (Key::SearchLegalOffice, "法务局检索"),
    (Key::Prefecture, "都道府县"),
    (Key::Address, "地址"),
    (Key::PhoneNumber, "电话号码"),
    (Key::BusinessHours, "办公时间"),
    (Key::ConsultationDays, "咨询日"),
    (Key::Weekdays, "平日"),
    (Key::NoLegalOfficeFound, "未找到法务局"),
    (Key::TryDifferentSearch, "请尝试其他搜索条件"),
    // Office names
    (Key::SapporoLegalOffice, "札幌法务局"),
    (Key::HakodateLegalOffice, "函馆地方法务局"),
    (Key::AomoriLegalOffice, "青森地方法务局"),
    (Key::SendaiLegalOffice, "仙台法务局"),
    (Key::TokyoLegalOffice, "东京法务局"),
    (Key::TokyoShinjukuOffice, "东京法务局新宿分所"),
    (Key::TokyoTachikawaOffice, "东京法务局立川分所"),
    (Key::YokohamaLegalOffice, "横滨地方法务局"),
    (Key::SaitamaLegalOffice, "埼玉地方法务局"),
    // Prefectures
    (Key::Hokkaido, "北海道"),
    (Key::Aomori, "青森县"),
    (Key::Miyagi, "宫城县"),
    (Key::Tokyo, "东京都"),
    (Key::Kanagawa, "神奈川县"),
    (Key::Saitama, "埼玉县"),
    // Office services
    (Key::NaturalizationConsultation, "归化咨询"),
    (Key::NationalityConsultation, "国籍咨询"),
    (Key::FamilyRegisterConsultation, "户籍咨询"),
    (Key::RegistrationConsultation, "登记咨询"),
    // Interview preparation
    (Key::InterviewPreparation, "面试准备"),
    (Key::QuestionCategory, "问题类别"),
    (Key::NoQuestionsFound, "未找到问题"),
    (Key::SampleAnswer, "示例回答"),
    (Key::TipsAndNotes, "技巧与注意事项"),
    (Key::BasicInfo, "基本信息"),
    (Key::MotivationReason, "动机・理由"),
    (Key::LifeWork, "生活・工作"),
    (Key::FamilyRelatives, "家庭・亲属"),
    (Key::JapaneseAbility, "日语能力"),
    // Step guide
    (Key::StepGuide, "步骤指南"),
    (Key::ProgressStatus, "进度状况"),
    (Key::StepCompleted, "步骤完成"),
    // Procedure steps
    (Key::Step1Title, "事前咨询"),
    (Key::Step1Desc, "在法务局确认归化的条件和所需文件。"),
    (Key::Step2Title, "收集文件"),
    (Key::Step2Desc, "从本国和日本收集所需的证明文件。"),
    (Key::Step3Title, "制作申请文件"),
    (Key::Step3Desc, "填写申请书并准备附件文件。"),
    (Key::Step4Title, "提交申请"),
    (Key::Step4Desc, "向管辖的法务局提交全部申请文件。"),
    (Key::Step5Title, "审查"),
    (Key::Step5Desc, "法务局进行审查，可能会要求补充文件。"),
    (Key::Step6Title, "面试"),
    (Key::Step6Desc, "接受负责官员的面试。"),
    (Key::Step7Title, "结果通知"),
    (Key::Step7Desc, "获得许可后将在官报上公告，随后办理后续手续。"),
    // Translation support
    (Key::TranslationSupport, "翻译支持"),
    (Key::SelectLanguage, "选择语言"),
    (Key::SelectDocument, "选择文件"),
    (Key::OriginalText, "原文"),
    (Key::TranslatedText, "翻译结果"),
    (Key::ShowTemplate, "显示模板"),
    (Key::Translate, "翻译"),
    (Key::Copy, "复制"),
    (Key::Faq, "常见问题"),
    (Key::FaqQ1, "需要翻译吗？"),
    (Key::FaqQ2, "需要公证吗？"),
    (Key::FaqQ3, "应该请求专业翻译吗？"),
    (Key::FaqA1, "是的，用外语书写的文件需要日语翻译。"),
    (Key::FaqA2, "是的，需要翻译者的签名和盖章。"),
    (Key::FaqA3, "根据情况可能需要公证。"),
    // Reminders
    (Key::NotificationDeadlineManagement, "通知・期限管理"),
    (Key::AddReminder, "添加提醒"),
    (Key::NoReminders, "没有提醒"),
    (Key::NoMatchingReminders, "没有符合条件的提醒"),
    (Key::Priority, "优先级"),
    (Key::Category, "类别"),
    (Key::Title, "标题"),
    (Key::Deadline, "期限"),
    // Reminder categories
    (Key::Consultation, "咨询"),
    (Key::DocumentPreparation, "文件准备"),
    (Key::Application, "申请"),
    (Key::Interview, "面试"),
    // Interview flashcards
    (Key::InterviewQ1, "请问您的姓名？"),
    (Key::InterviewA1, "我的名字是[姓名]。"),
    (Key::InterviewTip1, "请清楚、缓慢地说话。"),
    (Key::InterviewQ2, "您出生在哪里？"),
    (Key::InterviewA2, "我出生在[国家]。"),
    (Key::InterviewTip2, "请准确告知出生地。"),
    (Key::InterviewQ3, "您什么时候来到日本？"),
    (Key::InterviewA3, "我在[年份]来到日本。"),
    (Key::InterviewTip3, "请准确记住来日本的年份。"),
    (Key::InterviewQ4, "您为什么希望归化？"),
    (Key::InterviewA4, "因为我想在日本永久生活。"),
    (Key::InterviewTip4, "请用自己的话说明理由。"),
    (Key::InterviewQ5, "您喜欢日本的什么？"),
    (Key::InterviewA5, "我喜欢日本的文化和人民。"),
    (Key::InterviewTip5, "请举出具体的理由。"),
    (Key::InterviewQ6, "归化后您会继续在日本居住吗？"),
    (Key::InterviewA6, "是的，我会继续在日本居住。"),
    (Key::InterviewTip6, "请表明继续在日本居住的意愿。"),
    (Key::InterviewQ7, "您现在的职业是什么？"),
    (Key::InterviewA7, "我是[职业]。"),
    (Key::InterviewTip7, "请准确告知现在的职业。"),
    (Key::InterviewQ8, "工作顺利吗？"),
    (Key::InterviewA8, "是的，很顺利。"),
    (Key::InterviewTip8, "请表明有稳定的职业。"),
    (Key::InterviewQ9, "收入稳定吗？"),
    (Key::InterviewA9, "是的，很稳定。"),
    (Key::InterviewTip9, "请表明经济稳定。"),
    (Key::InterviewQ10, "您有几个家庭成员？"),
    (Key::InterviewA10, "我有[人数]个家庭成员。"),
    (Key::InterviewTip10, "请准确告知家庭构成。"),
    (Key::InterviewQ11, "您的家人在日本居住吗？"),
    (Key::InterviewA11, "是的，我的家人在日本居住。"),
    (Key::InterviewTip11, "请准确告知家庭状况。"),
    (Key::InterviewQ12, "您与家人的关系良好吗？"),
    (Key::InterviewA12, "是的，很好。"),
    (Key::InterviewTip12, "请表明与家人关系良好。"),
    (Key::InterviewQ13, "您的日语程度如何？"),
    (Key::InterviewA13, "日常会话没有问题。"),
    (Key::InterviewTip13, "请适当评价日语能力。"),
    (Key::InterviewQ14, "您还在继续学习日语吗？"),
    (Key::InterviewA14, "是的，我继续学习。"),
    (Key::InterviewTip14, "请表明学习日语的意愿。"),
    (Key::InterviewQ15, "您理解日本的法律吗？"),
    (Key::InterviewA15, "我理解基本的法律。"),
    (Key::InterviewTip15, "请表明对日本法律的理解。"),
    (Key::InterviewQ16, "您按时缴纳税金吗？"),
    (Key::InterviewA16, "是的，我按时缴纳。"),
    (Key::InterviewTip16, "请表明履行纳税义务。"),
    (Key::InterviewQ17, "您有犯罪记录吗？"),
    (Key::InterviewA17, "没有。"),
    (Key::InterviewTip17, "请表明品行善良。"),
    (Key::InterviewQ18, "您还有其他问题吗？"),
    (Key::InterviewA18, "没有特别的问题。"),
    (Key::InterviewTip18, "请简洁回答。"),
];
