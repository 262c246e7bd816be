// SPDX-License-Identifier: PMPL-1.0-or-later

//! Vietnamese string table.

use super::catalog::Key;

#[rustfmt::skip]
pub(super) const TABLE: &[(Key, &str)] = &[
    // Common labels
    (Key::AppName, "KIKA+"),
    (Key::Yes, "Có"),
    (Key::No, "Không"),
    (Key::Next, "Tiếp theo"),
    (Key::Back, "Quay lại"),
    (Key::Done, "Hoàn thành"),
    (Key::Result, "Kết quả"),
    (Key::Question, "Câu hỏi"),
    (Key::Error, "Lỗi"),
    (Key::Success, "Thành công"),
    // Time filters
    (Key::All, "Tất cả"),
    (Key::Today, "Hôm nay"),
    (Key::ThisWeek, "Tuần này"),
    (Key::ThisMonth, "Tháng này"),
    (Key::Expired, "Hết hạn"),
    (Key::Overdue, "Quá hạn"),
    // Parameterized formats
    (Key::ProgressFormat, "Câu hỏi %d / %d"),
    (Key::PercentageFormat, "%d%%"),
    (Key::DaysLater, "%d ngày sau"),
    // Diagnosis
    (Key::DiagnosisTitle, "Chẩn đoán đủ điều kiện nhập tịch"),
    (Key::DiagnosisQ1, "Bạn đã sống liên tục ở Nhật Bản hơn 5 năm chưa?"),
    (Key::DiagnosisQ2, "Bạn có từ 20 tuổi trở lên và có năng lực trưởng thành theo luật nước mình không?"),
    (Key::DiagnosisQ3, "Bạn có hạnh kiểm tốt không?"),
    (Key::DiagnosisQ4, "Bạn có thể sinh sống bằng tài sản hoặc kỹ năng của mình, hoặc của vợ/chồng hoặc người thân khác cùng sinh hoạt không?"),
    (Key::DiagnosisQ5, "Bạn có không có quốc tịch, hoặc sẽ mất quốc tịch khi có được quốc tịch Nhật Bản không?"),
    (Key::DiagnosisQ6, "Sau ngày Hiến pháp Nhật Bản có hiệu lực, bạn có từng lập kế hoạch, chủ trương, tổ chức hoặc tham gia đảng phái hoặc tổ chức khác lập kế hoạch hoặc chủ trương phá hoại Hiến pháp Nhật Bản hoặc chính phủ được thành lập dưới nó bằng bạo lực không?"),
    (Key::DiagnosisQ7, "Bạn hiện tại có đang cư trú ở Nhật Bản không?"),
    (Key::DiagnosisQ8, "Bạn có thể chuẩn bị các tài liệu cần thiết cho đơn xin nhập tịch không?"),
    (Key::DiagnosisQ9, "Bạn có thể đọc và viết tiếng Nhật không?"),
    (Key::DiagnosisQ10, "Bạn có hiểu thủ tục xin nhập tịch không?"),
    (Key::CriminalRecordExplanation, "Không có tiền án tiền sự, đóng thuế, không vi phạm giao thông, v.v."),
    (Key::Eligible, "Đủ điều kiện"),
    (Key::PossibleEligibility, "Có thể đủ điều kiện"),
    (Key::InsufficientEligibility, "Không đủ điều kiện"),
    (Key::EligibilityScore, "Điểm đủ điều kiện"),
    (Key::DetailedResult, "Kết quả chi tiết"),
    (Key::NextSteps, "Các bước tiếp theo"),
    // Diagnosis next steps
    (Key::DiagnosisStep1Title, "Chuẩn bị giấy tờ cần thiết"),
    (Key::DiagnosisStep1Desc, "Thu thập các giấy tờ cần thiết cho đơn xin nhập quốc tịch."),
    (Key::DiagnosisStep2Title, "Tư vấn tại Cục Pháp vụ"),
    (Key::DiagnosisStep2Desc, "Đặt lịch tư vấn trước tại Cục Pháp vụ địa phương."),
    (Key::DiagnosisStep3Title, "Nộp đơn xin"),
    (Key::DiagnosisStep3Desc, "Nộp đơn cho Cục Pháp vụ khi giấy tờ đã đầy đủ."),
    (Key::DiagnosisStep4Title, "Chuẩn bị phỏng vấn"),
    (Key::DiagnosisStep4Desc, "Luyện tập các câu hỏi thường gặp trong buổi phỏng vấn."),
    (Key::DiagnosisStepNg1Title, "Thiếu giấy tờ cần thiết"),
    (Key::DiagnosisStepNg1Desc, "Hãy kiểm tra xem đã chuẩn bị đủ các giấy tờ cần thiết cho đơn xin chưa."),
    (Key::DiagnosisStepNg2Title, "Thời gian cư trú chưa đủ"),
    (Key::DiagnosisStepNg2Desc, "Đơn xin yêu cầu một thời gian cư trú nhất định. Hãy kiểm tra xem bạn có đáp ứng không."),
    (Key::DiagnosisStepNg3Title, "Chưa đạt các điều kiện khác"),
    (Key::DiagnosisStepNg3Desc, "Hãy kiểm tra lại các điều kiện xin khác một lần nữa."),
    // Document checklist
    (Key::DocumentChecklist, "Danh sách tài liệu"),
    (Key::SelectCountry, "Chọn quốc gia"),
    (Key::SelectStatus, "Chọn tư cách lưu trú"),
    (Key::NecessaryDocumentProgress, "Tiến độ giấy tờ cần thiết"),
    (Key::NoDocumentsFound, "Không tìm thấy tài liệu phù hợp"),
    (Key::Common, "Chung"),
    (Key::China, "Trung Quốc"),
    (Key::Vietnam, "Việt Nam"),
    (Key::Philippines, "Philippines"),
    (Key::Nepal, "Nepal"),
    (Key::Korea, "Hàn Quốc"),
    (Key::Other, "Khác"),
    (Key::Worker, "Người lao động"),
    (Key::Student, "Sinh viên"),
    (Key::TechnicalIntern, "Thực tập sinh kỹ thuật"),
    (Key::InternationalMarriage, "Hôn nhân quốc tế"),
    (Key::PermanentResident, "Thường trú nhân"),
    // Document names
    (Key::Passport, "Hộ chiếu"),
    (Key::BirthCertificate, "Giấy khai sinh"),
    (Key::NationalityCertificate, "Giấy chứng nhận quốc tịch"),
    (Key::ResidenceCard, "Thẻ lưu trú"),
    (Key::EmploymentCertificate, "Giấy chứng nhận việc làm"),
    (Key::IncomeCertificate, "Giấy chứng nhận thu nhập"),
    (Key::TaxCertificate, "Giấy chứng nhận nộp thuế"),
    (Key::MarriageCertificate, "Giấy chứng nhận kết hôn"),
    (Key::FamilyRegister, "Giấy chứng nhận hộ tịch"),
    (Key::GraduationCertificate, "Bằng tốt nghiệp"),
    // Priority and difficulty
    (Key::Low, "Thấp"),
    (Key::Medium, "Trung bình"),
    (Key::High, "Cao"),
    (Key::Easy, "Sơ cấp"),
    (Key::Hard, "Cao cấp"),
    // Legal office search
    (Key::LegalOfficeSearch, "Tìm kiếm văn phòng pháp lý"),
    (Key::SearchLegalOffice, "Tìm kiếm Cục Pháp vụ"),
    (Key::Prefecture, "Tỉnh thành"),
    (Key::Address, "Địa chỉ"),
    (Key::PhoneNumber, "Số điện thoại"),
    (Key::BusinessHours, "Giờ làm việc"),
    (Key::ConsultationDays, "Ngày tư vấn"),
    (Key::Weekdays, "Ngày thường"),
    (Key::NoLegalOfficeFound, "Không tìm thấy Cục Pháp vụ"),
    (Key::TryDifferentSearch, "Thử tìm kiếm với tiêu chí khác"),
    // Office names
    (Key::SapporoLegalOffice, "Cục Pháp chế Sapporo"),
    (Key::HakodateLegalOffice, "Cục Pháp chế Quận Hakodate"),
    (Key::AomoriLegalOffice, "Cục Pháp chế Quận Aomori"),
    (Key::SendaiLegalOffice, "Cục Pháp chế Sendai"),
    (Key::TokyoLegalOffice, "Cục Pháp chế Tokyo"),
    (Key::TokyoShinjukuOffice, "Chi nhánh Shinjuku Cục Pháp chế Tokyo"),
    (Key::TokyoTachikawaOffice, "Chi nhánh Tachikawa Cục Pháp chế Tokyo"),
    (Key::YokohamaLegalOffice, "Cục Pháp chế Quận Yokohama"),
    (Key::SaitamaLegalOffice, "Cục Pháp chế Quận Saitama"),
    // Prefectures
    (Key::Hokkaido, "Hokkaido"),
    (Key::Aomori, "Tỉnh Aomori"),
    (Key::Miyagi, "Tỉnh Miyagi"),
    (Key::Tokyo, "Tokyo"),
    (Key::Kanagawa, "Tỉnh Kanagawa"),
    (Key::Saitama, "Tỉnh Saitama"),
    // Office services
    (Key::NaturalizationConsultation, "Tư vấn nhập tịch"),
    (Key::NationalityConsultation, "Tư vấn quốc tịch"),
    (Key::FamilyRegisterConsultation, "Tư vấn hộ tịch"),
    (Key::RegistrationConsultation, "Tư vấn đăng ký"),
    // Interview preparation
    (Key::InterviewPreparation, "Chuẩn bị phỏng vấn"),
    (Key::QuestionCategory, "Danh mục câu hỏi"),
    (Key::NoQuestionsFound, "Không tìm thấy câu hỏi"),
    (Key::SampleAnswer, "Câu trả lời mẫu"),
    (Key::TipsAndNotes, "Mẹo và lưu ý"),
    (Key::BasicInfo, "Thông tin cơ bản"),
    (Key::MotivationReason, "Động cơ・Lý do"),
    (Key::LifeWork, "Cuộc sống・Công việc"),
    (Key::FamilyRelatives, "Gia đình・Họ hàng"),
    (Key::JapaneseAbility, "Năng lực tiếng Nhật"),
    // Step guide
    (Key::StepGuide, "Hướng dẫn từng bước"),
    (Key::ProgressStatus, "Tình trạng tiến độ"),
    (Key::StepCompleted, "Bước hoàn thành"),
    // Procedure steps
    (Key::Step1Title, "Tư vấn ban đầu"),
    (Key::Step1Desc, "Xác nhận điều kiện và giấy tờ cần thiết tại Cục Pháp vụ."),
    (Key::Step2Title, "Thu thập giấy tờ"),
    (Key::Step2Desc, "Thu thập các giấy chứng nhận cần thiết từ cả nước mình và Nhật Bản."),
    (Key::Step3Title, "Soạn hồ sơ xin"),
    (Key::Step3Desc, "Điền đơn xin và chuẩn bị các giấy tờ kèm theo."),
    (Key::Step4Title, "Nộp hồ sơ"),
    (Key::Step4Desc, "Nộp toàn bộ hồ sơ cho Cục Pháp vụ địa phương."),
    (Key::Step5Title, "Thẩm tra"),
    (Key::Step5Desc, "Cục Pháp vụ thẩm tra hồ sơ, có thể yêu cầu bổ sung giấy tờ."),
    (Key::Step6Title, "Phỏng vấn"),
    (Key::Step6Desc, "Tham dự buổi phỏng vấn với cán bộ phụ trách."),
    (Key::Step7Title, "Thông báo kết quả"),
    (Key::Step7Desc, "Nếu được chấp thuận sẽ công bố trên công báo, sau đó làm các thủ tục tiếp theo."),
    // Translation support
    (Key::TranslationSupport, "Hỗ trợ dịch thuật"),
    (Key::SelectLanguage, "Chọn ngôn ngữ"),
    (Key::SelectDocument, "Chọn tài liệu"),
    (Key::OriginalText, "Văn bản gốc"),
    (Key::TranslatedText, "Kết quả dịch"),
    (Key::ShowTemplate, "Hiển thị mẫu"),
    (Key::Translate, "Dịch"),
    (Key::Copy, "Sao chép"),
    (Key::Faq, "Câu hỏi thường gặp"),
    (Key::FaqQ1, "Có cần dịch thuật không?"),
    (Key::FaqQ2, "Có cần công chứng không?"),
    (Key::FaqQ3, "Có nên yêu cầu dịch thuật chuyên nghiệp không?"),
    (Key::FaqA1, "Có, giấy tờ viết bằng tiếng nước ngoài cần có bản dịch tiếng Nhật."),
    (Key::FaqA2, "Có, cần chữ ký và con dấu của người dịch."),
    (Key::FaqA3, "Tùy trường hợp có thể cần công chứng."),
    // Reminders
    (Key::NotificationDeadlineManagement, "Quản lý thông báo・thời hạn"),
    (Key::AddReminder, "Thêm lời nhắc"),
    (Key::NoReminders, "Không có lời nhắc"),
    (Key::NoMatchingReminders, "Không có lời nhắc phù hợp"),
    (Key::Priority, "Mức độ ưu tiên"),
    (Key::Category, "Danh mục"),
    (Key::Title, "Tiêu đề"),
    (Key::Deadline, "Thời hạn"),
    // Reminder categories
    (Key::Consultation, "Tư vấn"),
    (Key::DocumentPreparation, "Chuẩn bị tài liệu"),
    (Key::Application, "Đơn xin"),
    (Key::Interview, "Phỏng vấn"),
    // Interview flashcards
    (Key::InterviewQ1, "Tên của bạn là gì?"),
    (Key::InterviewA1, "Tên tôi là [Tên]."),
    (Key::InterviewTip1, "Hãy nói rõ ràng và chậm rãi."),
    (Key::InterviewQ2, "Bạn sinh ra ở đâu?"),
    (Key::InterviewA2, "Tôi sinh ra ở [Quốc gia]."),
    (Key::InterviewTip2, "Hãy nói chính xác nơi sinh."),
    (Key::InterviewQ3, "Bạn đến Nhật Bản khi nào?"),
    (Key::InterviewA3, "Tôi đến Nhật Bản vào năm [Năm]."),
    (Key::InterviewTip3, "Hãy nhớ chính xác năm bạn đến Nhật Bản."),
    (Key::InterviewQ4, "Tại sao bạn muốn nhập tịch?"),
    (Key::InterviewA4, "Vì tôi muốn sống lâu dài ở Nhật Bản."),
    (Key::InterviewTip4, "Hãy giải thích lý do bằng lời của mình."),
    (Key::InterviewQ5, "Bạn thích gì về Nhật Bản?"),
    (Key::InterviewA5, "Tôi thích văn hóa và con người Nhật Bản."),
    (Key::InterviewTip5, "Hãy đưa ra lý do cụ thể."),
    (Key::InterviewQ6, "Bạn có tiếp tục sống ở Nhật Bản sau khi nhập tịch không?"),
    (Key::InterviewA6, "Vâng, tôi sẽ tiếp tục sống ở Nhật Bản."),
    (Key::InterviewTip6, "Hãy thể hiện ý định tiếp tục sống ở Nhật Bản."),
    (Key::InterviewQ7, "Nghề nghiệp hiện tại của bạn là gì?"),
    (Key::InterviewA7, "Tôi là [Nghề nghiệp]."),
    (Key::InterviewTip7, "Hãy nói chính xác nghề nghiệp hiện tại."),
    (Key::InterviewQ8, "Công việc có thuận lợi không?"),
    (Key::InterviewA8, "Vâng, rất thuận lợi."),
    (Key::InterviewTip8, "Hãy thể hiện có nghề nghiệp ổn định."),
    (Key::InterviewQ9, "Thu nhập có ổn định không?"),
    (Key::InterviewA9, "Vâng, rất ổn định."),
    (Key::InterviewTip9, "Hãy thể hiện ổn định về kinh tế."),
    (Key::InterviewQ10, "Bạn có bao nhiêu thành viên gia đình?"),
    (Key::InterviewA10, "Tôi có [Số] thành viên gia đình."),
    (Key::InterviewTip10, "Hãy nói chính xác cấu trúc gia đình."),
    (Key::InterviewQ11, "Thành viên gia đình có sống ở Nhật Bản không?"),
    (Key::InterviewA11, "Vâng, gia đình tôi sống ở Nhật Bản."),
    (Key::InterviewTip11, "Hãy nói chính xác tình hình gia đình."),
    (Key::InterviewQ12, "Mối quan hệ với gia đình có tốt không?"),
    (Key::InterviewA12, "Vâng, rất tốt."),
    (Key::InterviewTip12, "Hãy thể hiện mối quan hệ tốt với gia đình."),
    (Key::InterviewQ13, "Bạn nói tiếng Nhật như thế nào?"),
    (Key::InterviewA13, "Tôi có thể giao tiếp hàng ngày mà không gặp vấn đề."),
    (Key::InterviewTip13, "Hãy đánh giá khả năng tiếng Nhật một cách phù hợp."),
    (Key::InterviewQ14, "Bạn có tiếp tục học tiếng Nhật không?"),
    (Key::InterviewA14, "Vâng, tôi tiếp tục học."),
    (Key::InterviewTip14, "Hãy thể hiện động lực học tiếng Nhật."),
    (Key::InterviewQ15, "Bạn có hiểu luật pháp Nhật Bản không?"),
    (Key::InterviewA15, "Tôi hiểu các luật cơ bản."),
    (Key::InterviewTip15, "Hãy thể hiện sự hiểu biết về luật pháp Nhật Bản."),
    (Key::InterviewQ16, "Bạn có đóng thuế đúng không?"),
    (Key::InterviewA16, "Vâng, tôi đóng thuế đúng."),
    (Key::InterviewTip16, "Hãy thể hiện thực hiện nghĩa vụ thuế."),
    (Key::InterviewQ17, "Bạn có tiền án tiền sự không?"),
    (Key::InterviewA17, "Không, tôi không có."),
    (Key::InterviewTip17, "Hãy thể hiện hạnh kiểm tốt."),
    (Key::InterviewQ18, "Bạn có câu hỏi nào khác không?"),
    (Key::InterviewA18, "Không có gì đặc biệt."),
    (Key::InterviewTip18, "Hãy trả lời ngắn gọn."),
];
