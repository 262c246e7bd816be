// SPDX-License-Identifier: PMPL-1.0-or-later

//! Korean string table.

use super::catalog::Key;

#[rustfmt::skip]
pub(super) const TABLE: &[(Key, &str)] = &[
    // Common labels
    (Key::AppName, "KIKA+"),
    (Key::Yes, "예"),
    (Key::No, "아니오"),
    (Key::Next, "다음"),
    (Key::Back, "뒤로"),
    (Key::Done, "완료"),
    (Key::Result, "결과"),
    (Key::Question, "질문"),
    (Key::Error, "오류"),
    (Key::Success, "성공"),
    // Time filters
    (Key::All, "전체"),
    (Key::Today, "오늘"),
    (Key::ThisWeek, "이번 주"),
    (Key::ThisMonth, "이번 달"),
    (Key::Expired, "기한 만료"),
    (Key::Overdue, "기한 초과"),
    // Parameterized formats
    (Key::ProgressFormat, "질문 %d / %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d일 후"),
    // Diagnosis
    (Key::DiagnosisTitle, "귀화 자격 진단"),
    (Key::DiagnosisQ1, "일본에서 5년 이상 연속으로 거주하고 계십니까?"),
    (Key::DiagnosisQ2, "20세 이상이며, 본국 법에 따라 성년 능력을 가지고 계십니까?"),
    (Key::DiagnosisQ3, "품행이 선량하십니까?"),
    (Key::DiagnosisQ4, "자신 또는 생계를 같이하는 배우자나 다른 친족의 자산이나 기능으로 생계를 영위할 수 있습니까?"),
    (Key::DiagnosisQ5, "국적이 없거나, 일본 국적 취득으로 인해 그 국적을 잃어야 합니까?"),
    (Key::DiagnosisQ6, "일본국 헌법 시행일 이후, 일본국 헌법이나 그 아래 성립된 정부를 폭력으로 파괴하려는 계획이나 주장을 하거나, 이를 계획하거나 주장하는 정당이나 다른 단체를 결성하거나 가입한 적이 있습니까?"),
    (Key::DiagnosisQ7, "현재 일본에 체류하고 계십니까?"),
    (Key::DiagnosisQ8, "귀화 신청에 필요한 서류를 준비할 수 있습니까?"),
    (Key::DiagnosisQ9, "일본어 읽기와 쓰기를 할 수 있습니까?"),
    (Key::DiagnosisQ10, "귀화 신청 절차를 이해하고 계십니까?"),
    (Key::CriminalRecordExplanation, "범죄 경력이 없고, 세금을 납부하고, 교통 위반이 없는 등"),
    (Key::Eligible, "자격 있음"),
    (Key::PossibleEligibility, "자격 가능성 있음"),
    (Key::InsufficientEligibility, "자격 부족"),
    (Key::EligibilityScore, "자격 점수"),
    (Key::DetailedResult, "상세 결과"),
    (Key::NextSteps, "다음 단계"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "필요 서류 준비"),
    (Key::DiagnosisStep1Desc, "귀화 신청에 필요한 서류를 모읍시다."),
    (Key::DiagnosisStep2Title, "법무국 상담"),
    (Key::DiagnosisStep2Desc, "관할 법무국에서 사전 상담을 예약합시다."),
    (Key::DiagnosisStep3Title, "신청서 제출"),
    (Key::DiagnosisStep3Desc, "서류가 준비되면 법무국에 신청서를 제출합니다."),
    (Key::DiagnosisStep4Title, "면접 준비"),
    (Key::DiagnosisStep4Desc, "면접에서 자주 나오는 질문을 연습합시다."),
    (Key::DiagnosisStepNg1Title, "필요 서류 부족"),
    (Key::DiagnosisStepNg1Desc, "신청에 필요한 서류가 모두 준비되었는지 확인합시다."),
    (Key::DiagnosisStepNg2Title, "체류 기간 부족"),
    (Key::DiagnosisStepNg2Desc, "신청에는 일정한 체류 기간이 필요합니다. 조건을 충족하는지 확인합시다."),
    (Key::DiagnosisStepNg3Title, "기타 요건 미충족"),
    (Key::DiagnosisStepNg3Desc, "기타 신청 요건을 다시 한번 확인합시다."),
    // Document checklist
    (Key::DocumentChecklist, "서류 체크리스트"),
    (Key::SelectCountry, "국가 선택"),
    (Key::SelectStatus, "체류 자격 선택"),
    (Key::NecessaryDocumentProgress, "필요 서류 진척"),
    (Key::NoDocumentsFound, "해당하는 서류를 찾을 수 없습니다"),
    (Key::Common, "공통"),
    (Key::China, "중국"),
    (Key::Vietnam, "베트남"),
    (Key::Philippines, "필리핀"),
    (Key::Nepal, "네팔"),
    (Key::Korea, "한국"),
    (Key::Other, "기타"),
    (Key::Worker, "근로자"),
    (Key::Student, "유학생"),
    (Key::TechnicalIntern, "기능실습생"),
    (Key::InternationalMarriage, "국제결혼"),
    (Key::PermanentResident, "영주자"),
    // Document names
    (Key::Passport, "여권"),
    (Key::BirthCertificate, "출생증명서"),
    (Key::NationalityCertificate, "국적증명서"),
    (Key::ResidenceCard, "재류카드"),
    (Key::EmploymentCertificate, "재직증명서"),
    (Key::IncomeCertificate, "소득증명서"),
    (Key::TaxCertificate, "납세증명서"),
    (Key::MarriageCertificate, "결혼증명서"),
    (Key::FamilyRegister, "가족관계증명서"),
    (Key::GraduationCertificate, "졸업증명서"),
    // Priority and difficulty
    (Key::Low, "낮음"),
    (Key::Medium, "보통"),
    (Key::High, "높음"),
    (Key::Easy, "초급"),
    (Key::Hard, "상급"),
    // Legal office search
    (Key::LegalOfficeSearch, "법무국 검색"),
    (Key::SearchLegalOffice, "법무국 검색"),
    (Key::Prefecture, "도도부현"),
    (Key::Address, "주소"),
    (Key::PhoneNumber, "전화번호"),
    (Key::BusinessHours, "영업시간"),
    (Key::ConsultationDays, "상담일"),
    (Key::Weekdays, "평일"),
    (Key::NoLegalOfficeFound, "법무국을 찾을 수 없습니다"),
    (Key::TryDifferentSearch, "다른 조건으로 검색해 주세요"),
    // Office names
    (Key::SapporoLegalOffice, "삿포로 법무국"),
    (Key::HakodateLegalOffice, "하코다테 지방법무국"),
    (Key::AomoriLegalOffice, "아오모리 지방법무국"),
    (Key::SendaiLegalOffice, "센다이 법무국"),
    (Key::TokyoLegalOffice, "도쿄 법무국"),
    (Key::TokyoShinjukuOffice, "도쿄 법무국 신주쿠 출장소"),
    (Key::TokyoTachikawaOffice, "도쿄 법무국 다치카와 출장소"),
    (Key::YokohamaLegalOffice, "요코하마 지방법무국"),
    (Key::SaitamaLegalOffice, "사이타마 지방법무국"),
    // Prefectures
    (Key::Hokkaido, "홋카이도"),
    (Key::Aomori, "아오모리현"),
    (Key::Miyagi, "미야기현"),
    (Key::Tokyo, "도쿄도"),
    (Key::Kanagawa, "가나가와현"),
    (Key::Saitama, "사이타마현"),
    // Office services
    (Key::NaturalizationConsultation, "귀화 상담"),
    (Key::NationalityConsultation, "국적 상담"),
    (Key::FamilyRegisterConsultation, "호적 상담"),
    (Key::RegistrationConsultation, "등기 상담"),
    // Interview preparation
    (Key::InterviewPreparation, "면접 준비"),
    (Key::QuestionCategory, "질문 카테고리"),
    (Key::NoQuestionsFound, "질문을 찾을 수 없습니다"),
    (Key::SampleAnswer, "샘플 답변"),
    (Key::TipsAndNotes, "요령과 주의사항"),
    (Key::BasicInfo, "기본 정보"),
    (Key::MotivationReason, "동기・이유"),
    (Key::LifeWork, "생활・일"),
    (Key::FamilyRelatives, "가족・친족"),
    (Key::JapaneseAbility, "일본어 능력"),
    // Step guide
    (Key::StepGuide, "단계별 가이드"),
    (Key::ProgressStatus, "진척 상황"),
    (Key::StepCompleted, "단계 완료"),
    // Procedure steps
    (Key::Step1Title, "사전 상담"),
    (Key::Step1Desc, "법무국에서 귀화 요건과 필요 서류를 확인합니다."),
    (Key::Step2Title, "서류 수집"),
    (Key::Step2Desc, "본국과 일본 양쪽에서 필요한 증명서를 수집합니다."),
    (Key::Step3Title, "신청 서류 작성"),
    (Key::Step3Desc, "신청서와 첨부 서류를 작성합니다."),
    (Key::Step4Title, "신청 제출"),
    (Key::Step4Desc, "관할 법무국에 신청 서류 일체를 제출합니다."),
    (Key::Step5Title, "심사"),
    (Key::Step5Desc, "법무국의 심사가 진행되며 추가 서류를 요구받을 수 있습니다."),
    (Key::Step6Title, "면접"),
    (Key::Step6Desc, "담당관과의 면접을 받습니다."),
    (Key::Step7Title, "결과 통지"),
    (Key::Step7Desc, "허가되면 관보에 고시되며 이후 절차를 진행합니다."),
    // Translation support
    (Key::TranslationSupport, "번역 지원"),
    (Key::SelectLanguage, "언어 선택"),
    (Key::SelectDocument, "문서 선택"),
    (Key::OriginalText, "원문"),
    (Key::TranslatedText, "번역 결과"),
    (Key::ShowTemplate, "템플릿 표시"),
    (Key::Translate, "번역"),
    (Key::Copy, "복사"),
    (Key::Faq, "자주 묻는 질문"),
    (Key::FaqQ1, "번역이 필요한가요?"),
    (Key::FaqQ2, "공증이 필요한가요?"),
    (Key::FaqQ3, "전문 번역을 요청해야 하나요?"),
    (Key::FaqA1, "네, 외국어로 작성된 서류는 일본어 번역이 필요합니다."),
    (Key::FaqA2, "네, 번역자의 서명과 날인이 필요합니다."),
    (Key::FaqA3, "경우에 따라 공증이 필요할 수 있습니다."),
    // Reminders
    (Key::NotificationDeadlineManagement, "알림・기한 관리"),
    (Key::AddReminder, "리마인더 추가"),
    (Key::NoReminders, "리마인더가 없습니다"),
    (Key::NoMatchingReminders, "해당하는 리마인더가 없습니다"),
    (Key::Priority, "우선순위"),
    (Key::Category, "카테고리"),
    (Key::Title, "제목"),
    (Key::Deadline, "기한"),
    // Reminder categories
    (Key::Consultation, "상담"),
    (Key::DocumentPreparation, "서류 준비"),
    (Key::Application, "신청서"),
    (Key::Interview, "면접"),
    // Interview flashcards
    (Key::InterviewQ1, "이름이 무엇입니까?"),
    (Key::InterviewA1, "제 이름은 [이름]입니다."),
    (Key::InterviewTip1, "명확하고 천천히 말하세요."),
    (Key::InterviewQ2, "어디서 태어났습니까?"),
    (Key::InterviewA2, "저는 [국가]에서 태어났습니다."),
    (Key::InterviewTip2, "출생지를 정확히 말하세요."),
    (Key::InterviewQ3, "언제 일본에 왔습니까?"),
    (Key::InterviewA3, "저는 [년도]에 일본에 왔습니다."),
    (Key::InterviewTip3, "일본에 온 년도를 정확히 기억하세요."),
    (Key::InterviewQ4, "왜 귀화를 원하십니까?"),
    (Key::InterviewA4, "일본에서 영구적으로 살고 싶기 때문입니다."),
    (Key::InterviewTip4, "자신의 말로 이유를 설명하세요."),
    (Key::InterviewQ5, "일본의 무엇을 좋아하십니까?"),
    (Key::InterviewA5, "일본 문화와 사람들을 좋아합니다."),
    (Key::InterviewTip5, "구체적인 이유를 들어보세요."),
    (Key::InterviewQ6, "귀화 후에도 일본에 계속 살겠습니까?"),
    (Key::InterviewA6, "네, 일본에 계속 살겠습니다."),
    (Key::InterviewTip6, "일본에 계속 살겠다는 의지를 보여주세요."),
    (Key::InterviewQ7, "현재 직업이 무엇입니까?"),
    (Key::InterviewA7, "저는 [직업]입니다."),
    (Key::InterviewTip7, "현재 직업을 정확히 말하세요."),
    (Key::InterviewQ8, "일이 순조롭습니까?"),
    (Key::InterviewA8, "네, 순조롭습니다."),
    (Key::InterviewTip8, "안정적인 직업임을 보여주세요."),
    (Key::InterviewQ9, "수입이 안정적입니까?"),
    (Key::InterviewA9, "네, 안정적입니다."),
    (Key::InterviewTip9, "경제적으로 안정적임을 보여주세요."),
    (Key::InterviewQ10, "가족은 몇 명입니까?"),
    (Key::InterviewA10, "제 가족은 [명수]명입니다."),
    (Key::InterviewTip10, "가족 구성을 정확히 말하세요."),
    (Key::InterviewQ11, "가족이 일본에 살고 있습니까?"),
    (Key::InterviewA11, "네, 가족이 일본에 살고 있습니다."),
    (Key::InterviewTip11, "가족 상황을 정확히 말하세요."),
    (Key::InterviewQ12, "가족과의 관계가 좋습니까?"),
    (Key::InterviewA12, "네, 좋습니다."),
    (Key::InterviewTip12, "가족과의 관계가 좋음을 보여주세요."),
    (Key::InterviewQ13, "일본어는 어느 정도 할 수 있습니까?"),
    (Key::InterviewA13, "일상 회화는 문제없습니다."),
    (Key::InterviewTip13, "일본어 능력을 적절히 평가하세요."),
    (Key::InterviewQ14, "일본어 공부를 계속하고 있습니까?"),
    (Key::InterviewA14, "네, 계속 공부하고 있습니다."),
    (Key::InterviewTip14, "일본어 학습에 대한 의지를 보여주세요."),
    (Key::InterviewQ15, "일본 법률을 이해하고 있습니까?"),
    (Key::InterviewA15, "기본적인 법률은 이해하고 있습니다."),
    (Key::InterviewTip15, "일본 법률에 대한 이해를 보여주세요."),
    (Key::InterviewQ16, "세금을 제대로 내고 있습니까?"),
    (Key::InterviewA16, "네, 제대로 내고 있습니다."),
    (Key::InterviewTip16, "납세 의무를 이행하고 있음을 보여주세요."),
    (Key::InterviewQ17, "범죄 경력이 있습니까?"),
    (Key::InterviewA17, "아니요, 없습니다."),
    (Key::InterviewTip17, "품행이 선량함을 보여주세요."),
    (Key::InterviewQ18, "다른 질문이 있습니까?"),
    (Key::InterviewA18, "특별히 없습니다."),
    (Key::InterviewTip18, "간결하게 답하세요."),
];
