//! Page view-models against a mock backend

use std::sync::Arc;

use charity_admin_client::{AdminApi, ApiError, ClientSettings, MemoryCredentialStore};
use charity_admin_types::{
	BeneficiaryRequestFilters, Choice, Decimal, ProjectStatus, ReviewFilter, ReviewStatus,
};
use charity_admin_ui::{
	AmountError, BeneficiaryRequestsPage, DashboardState, FeedbackPage, GiftDonationsPage,
	LoginState, ProjectsPage, ReviewCommand, SessionRedirect, ViewError, VolunteerRequestsPage,
	VolunteersPage,
};
use futures::StreamExt;
use futures_signals::signal::SignalExt;
use mockito::{Matcher, Mock, Server, ServerGuard};
use rstest::rstest;

const PROJECTS: &str = r#"[
	{"id": 1, "type": {"id": 1, "name": "صحي"}, "name": "دواء", "description": "",
	 "total_amount": 500, "current_amount": 450, "status": "جاري",
	 "priority": "مرتفع", "duration_type": "مؤقت"},
	{"id": 2, "type": {"id": 1, "name": "صحي"}, "name": "عيادة", "description": "",
	 "total_amount": null, "current_amount": 0, "status": "جاري",
	 "priority": "مرتفع", "duration_type": "تطوعي"}
]"#;

fn api_for(server: &ServerGuard) -> AdminApi {
	let settings = ClientSettings::new(&format!("{}/api/", server.url())).unwrap();
	AdminApi::with_credentials(settings, Arc::new(MemoryCredentialStore::with_token("t"))).unwrap()
}

async fn projects_page(server: &mut ServerGuard) -> (Arc<ProjectsPage>, Mock) {
	let listing = server
		.mock("GET", "/api/getProjectsByFilters")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(PROJECTS)
		.create_async()
		.await;
	let page = ProjectsPage::new(api_for(server));
	page.load().await.unwrap();
	(page, listing)
}

#[rstest]
#[tokio::test]
async fn test_donation_patches_progress() {
	let mut server = Server::new_async().await;
	let (page, _listing) = projects_page(&mut server).await;
	let donate = server
		.mock("POST", "/api/admin/donateToProject")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("id".into(), "1".into()),
			Matcher::UrlEncoded("amount".into(), "50".into()),
		]))
		.with_status(200)
		.create_async()
		.await;

	page.open_donate(1).unwrap();
	page.quick_donate(50).await.unwrap();

	donate.assert_async().await;
	let project = page.list().get(&1).unwrap();
	assert_eq!(project.current_amount, Decimal::from(500));
	assert_eq!(project.status, ProjectStatus::Finished);
	assert!(!page.donate.is_open());
	assert_eq!(
		page.notice.get_cloned().as_deref(),
		Some("تم التبرع بمبلغ 50$ للمشروع بنجاح!")
	);
}

#[rstest]
#[case("100", AmountError::ExceedsRemaining)]
#[case("0", AmountError::NotPositive)]
#[case("خمسون", AmountError::NotPositive)]
#[tokio::test]
async fn test_invalid_donation_sends_nothing(#[case] input: &str, #[case] expected: AmountError) {
	let mut server = Server::new_async().await;
	let (page, _listing) = projects_page(&mut server).await;
	let donate = server
		.mock("POST", "/api/admin/donateToProject")
		.match_query(Matcher::Any)
		.expect(0)
		.create_async()
		.await;

	page.open_donate(1).unwrap();
	page.donate.set_amount(input);
	let err = page.submit_donation().await.unwrap_err();

	assert!(matches!(err, ViewError::InvalidAmount(actual) if actual == expected));
	assert_eq!(page.donate.error.get_cloned(), Some(expected.to_string()));
	assert_eq!(page.list().get(&1).unwrap().current_amount, Decimal::from(450));
	donate.assert_async().await;
}

#[rstest]
#[tokio::test]
async fn test_failed_donation_reverts() {
	let mut server = Server::new_async().await;
	let (page, _listing) = projects_page(&mut server).await;
	let _mock = server
		.mock("POST", "/api/admin/donateToProject")
		.match_query(Matcher::Any)
		.with_status(422)
		.with_body(r#"{"message": "رصيد المحفظة غير كاف"}"#)
		.create_async()
		.await;

	page.open_donate(1).unwrap();
	page.donate.set_amount("20");
	assert!(page.submit_donation().await.is_err());

	assert_eq!(page.list().get(&1).unwrap().current_amount, Decimal::from(450));
	assert_eq!(
		page.donate.error.get_cloned().as_deref(),
		Some("رصيد المحفظة غير كاف")
	);
	assert!(page.donate.is_open());
	assert!(!page.donate.is_submitting.get());
}

#[rstest]
#[tokio::test]
async fn test_volunteer_project_is_not_donatable() {
	let mut server = Server::new_async().await;
	let (page, _listing) = projects_page(&mut server).await;

	assert!(matches!(page.open_donate(2), Err(ViewError::NotDonatable)));
	assert!(matches!(page.request_complete(1), Err(ViewError::ActionUnavailable)));
}

#[rstest]
#[tokio::test]
async fn test_delete_goes_through_confirmation() {
	let mut server = Server::new_async().await;
	let (page, _listing) = projects_page(&mut server).await;
	let delete = server
		.mock("DELETE", "/api/admin/deleteProject")
		.match_query(Matcher::UrlEncoded("id".into(), "2".into()))
		.with_status(200)
		.create_async()
		.await;

	page.open_detail(2).unwrap();
	page.request_delete(2).unwrap();
	assert!(page.confirm.is_visible.get());
	assert_eq!(page.list().len(), 2);

	page.confirm().await.unwrap();

	delete.assert_async().await;
	assert!(page.list().get(&2).is_none());
	assert!(!page.detail.is_open());
	assert!(matches!(page.confirm().await, Err(ViewError::NothingSelected)));
}

#[rstest]
#[tokio::test]
async fn test_complete_marks_finished() {
	let mut server = Server::new_async().await;
	let (page, _listing) = projects_page(&mut server).await;
	let _mock = server
		.mock("POST", "/api/admin/markVolunteerProjectAsCompleted")
		.match_query(Matcher::UrlEncoded("id".into(), "2".into()))
		.with_status(200)
		.create_async()
		.await;

	page.request_complete(2).unwrap();
	page.confirm().await.unwrap();

	assert_eq!(page.list().get(&2).unwrap().status, ProjectStatus::Finished);
}

#[rstest]
#[tokio::test]
async fn test_ban_drops_volunteer_from_tab() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/filterVolunteersByBan/false")
		.with_status(200)
		.with_body(r#"[{"id": 7, "full_name": "سامر", "email": "s@x", "role": "volunteer", "ban": 0},
		               {"id": 8, "full_name": "رنا", "email": "r@x", "role": "volunteer", "ban": 0}]"#)
		.create_async()
		.await;
	let ban = server
		.mock("POST", "/api/admin/banVolunteer")
		.match_body(Matcher::Json(serde_json::json!({"id": 7})))
		.with_status(200)
		.create_async()
		.await;

	let page = VolunteersPage::new(api_for(&server));
	page.load().await.unwrap();
	page.request_ban(7).unwrap();
	assert_eq!(page.confirm.message.get_cloned(), "هل أنت متأكد من حظر هذا المتطوع؟");
	page.confirm_ban().await.unwrap();

	ban.assert_async().await;
	let visible: Vec<u64> = page.list().visible().iter().map(|v| v.id).collect();
	assert_eq!(visible, vec![8]);
}

#[rstest]
#[tokio::test]
async fn test_failed_ban_shows_generic_message() {
	let mut server = Server::new_async().await;
	let list = server
		.mock("GET", "/api/filterVolunteersByBan/false")
		.with_status(200)
		.with_body(r#"[{"id": 7, "full_name": "سامر", "email": "s@x", "role": "volunteer", "ban": 0}]"#)
		.expect(2)
		.create_async()
		.await;
	let _mock = server
		.mock("POST", "/api/admin/banVolunteer")
		.with_status(500)
		.create_async()
		.await;

	let page = VolunteersPage::new(api_for(&server));
	page.load().await.unwrap();
	page.request_ban(7).unwrap();
	assert!(page.confirm_ban().await.is_err());

	list.assert_async().await;
	assert!(!page.list().get(&7).unwrap().ban);
	assert_eq!(page.list().error.get_cloned().as_deref(), Some("فشل في حظر المتطوع"));
}

#[rstest]
#[tokio::test]
async fn test_all_statuses_fetches_each_tab() {
	let mut server = Server::new_async().await;
	let tabs = server
		.mock("GET", Matcher::Regex("^/api/getVolunteerRequestsByStatus/".into()))
		.with_status(200)
		.with_body("[]")
		.expect(3)
		.create_async()
		.await;

	let page = VolunteerRequestsPage::new(api_for(&server));
	page.set_filter(ReviewFilter::status(Choice::All)).await.unwrap();

	tabs.assert_async().await;
}

#[rstest]
#[tokio::test]
async fn test_accept_volunteer_request() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", Matcher::Regex("^/api/getVolunteerRequestsByStatus/".into()))
		.with_status(200)
		.with_body(r#"[{"id": 3, "full_name": "هادي", "volunteer_status": "معلق"}]"#)
		.create_async()
		.await;
	let _mock = server
		.mock("POST", "/api/admin/approveVolunteerRequest")
		.match_body(Matcher::Json(serde_json::json!({"id": 3})))
		.with_status(200)
		.create_async()
		.await;

	let page = VolunteerRequestsPage::new(api_for(&server));
	page.load().await.unwrap();
	page.request_review(ReviewCommand::Accept(3)).unwrap();
	page.confirm().await.unwrap();

	assert_eq!(
		page.list().get(&3).unwrap().volunteer_status,
		ReviewStatus::Accepted
	);
	assert!(page.list().visible().is_empty());
	assert_eq!(page.notice.get_cloned().as_deref(), Some("تم قبول الطلب بنجاح"));
	assert!(matches!(
		page.request_review(ReviewCommand::Reject(3)),
		Err(ViewError::ActionUnavailable)
	));
}

#[rstest]
#[tokio::test]
async fn test_show_beneficiary_request() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/showBeneficiaryRequest")
		.match_query(Matcher::UrlEncoded("id".into(), "12".into()))
		.with_status(200)
		.with_body(r#"{"id": 12, "full_name": "ليلى", "phone_number": "0933", "status": "معلق", "monthly_rent": 150}"#)
		.create_async()
		.await;

	let page = BeneficiaryRequestsPage::new(api_for(&server));
	page.show_request(12).await.unwrap();

	let request = page.detail.selected().unwrap();
	assert_eq!(request.full_name, "ليلى");
	assert!(request.detail_fields().any(|(key, value)| key == "monthly_rent" && value == "150"));
}

#[rstest]
#[tokio::test]
async fn test_show_request_failure() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/showBeneficiaryRequest")
		.match_query(Matcher::Any)
		.with_status(404)
		.create_async()
		.await;

	let page = BeneficiaryRequestsPage::new(api_for(&server));
	assert!(page.show_request(12).await.is_err());
	assert!(!page.detail.is_open());
	assert_eq!(
		page.list().error.get_cloned().as_deref(),
		Some("فشل تحميل تفاصيل الطلب")
	);
}

#[rstest]
#[tokio::test]
async fn test_feedback_accept_reloads() {
	let mut server = Server::new_async().await;
	let list = server
		.mock("GET", Matcher::Regex("^/api/getFilteredFeedbacks/".into()))
		.with_status(200)
		.with_body(r#"[{"id": 5, "user_name": "أحمد", "message": "شكراً", "status": "معلق"}]"#)
		.expect(2)
		.create_async()
		.await;
	let accept = server
		.mock("POST", "/api/admin/acceptFeedback")
		.match_query(Matcher::UrlEncoded("id".into(), "5".into()))
		.with_status(200)
		.create_async()
		.await;

	let page = FeedbackPage::new(api_for(&server));
	page.load().await.unwrap();
	page.accept(5).await.unwrap();

	accept.assert_async().await;
	list.assert_async().await;
}

#[rstest]
#[tokio::test]
async fn test_mark_gift_delivered() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/getFilteredGiftDelivered/false")
		.with_status(200)
		.with_body(r#"[{"id": 9, "recipient_name": "منى", "recipient_number": "0944", "amount": "25.5", "delivered": 0}]"#)
		.create_async()
		.await;
	let _mock = server
		.mock("POST", "/api/admin/giftDelivered")
		.match_query(Matcher::UrlEncoded("id".into(), "9".into()))
		.with_status(200)
		.create_async()
		.await;

	let page = GiftDonationsPage::new(api_for(&server));
	page.load().await.unwrap();
	page.mark_delivered(9).await.unwrap();

	assert!(page.list().get(&9).unwrap().delivered);
	assert!(page.list().visible().is_empty());
	assert!(matches!(page.mark_delivered(9).await, Err(ViewError::ActionUnavailable)));
}

#[rstest]
#[tokio::test]
async fn test_expired_session_raises_redirect() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/getProjectsByFilters")
		.match_query(Matcher::Any)
		.with_status(401)
		.create_async()
		.await;

	let api = api_for(&server);
	let redirect = SessionRedirect::install(&api);
	let page = ProjectsPage::new(api.clone());

	let err = page.load().await.unwrap_err();
	assert!(matches!(err, ViewError::Api(ApiError::SessionExpired)));
	let mut changes = redirect.login_required_signal().to_stream();
	assert_eq!(changes.next().await, Some(true));
	assert!(!api.is_authenticated());

	redirect.acknowledge();
	assert!(!redirect.login_required());
}

#[rstest]
#[tokio::test]
async fn test_dashboard_and_monthly_batch() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/statistics")
		.with_status(200)
		.with_body(r#"{"donors": 4, "health_projects_balance": 100, "housing_projects_balance": "50.5"}"#)
		.create_async()
		.await;
	let _mock = server
		.mock("GET", "/api/beneficiariesPerYear")
		.with_status(200)
		.with_body(r#"[{"year": "2024", "beneficiaries": 10}, {"year": "2025", "beneficiaries": 15}]"#)
		.create_async()
		.await;
	let _mock = server
		.mock("POST", "/api/admin/doAllMonthlyDonations")
		.with_status(200)
		.with_body(r#"{"message": "تم تنفيذ التبرعات الشهرية"}"#)
		.create_async()
		.await;

	let dashboard = DashboardState::new(api_for(&server));
	dashboard.load().await.unwrap();
	let statistics = dashboard.statistics.get_cloned().unwrap();
	assert_eq!(statistics.donors, 4);
	assert_eq!(statistics.total_balance(), "150.5".parse::<Decimal>().unwrap());
	assert_eq!(dashboard.total_beneficiaries(), 25);

	let message = dashboard.run_monthly().await.unwrap();
	assert_eq!(message, "تم تنفيذ التبرعات الشهرية");
	assert!(!dashboard.running_monthly.get());
}

#[rstest]
#[tokio::test]
async fn test_login_failure_message() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/api/admin/login")
		.with_status(401)
		.with_body(r#"{"message": "بيانات الدخول غير صحيحة"}"#)
		.create_async()
		.await;

	let settings = ClientSettings::new(&format!("{}/api/", server.url())).unwrap();
	let login = LoginState::new(AdminApi::new(settings).unwrap());
	login.email.set("admin@example.org".into());
	login.password.set("wrong".into());

	assert!(login.submit().await.is_err());
	assert_eq!(
		login.error.get_cloned().as_deref(),
		Some("بيانات الدخول غير صحيحة")
	);
	assert!(!login.is_submitting.get());
}

#[rstest]
#[tokio::test]
async fn test_detail_modal_leaves_list_untouched() {
	let mut server = Server::new_async().await;
	let (page, _listing) = projects_page(&mut server).await;
	let before = page.list().visible();

	for _ in 0..2 {
		page.open_detail(1).unwrap();
		assert_eq!(page.detail.selected().map(|project| project.id), Some(1));
		page.close_detail();
	}

	assert!(!page.detail.is_open());
	assert_eq!(page.list().visible(), before);
	assert!(matches!(page.open_detail(42), Err(ViewError::UnknownItem)));
}

#[rstest]
#[tokio::test]
async fn test_default_ban_tab_fetches_on_first_switch() {
	let mut server = Server::new_async().await;
	let listing = server
		.mock("GET", "/api/filterVolunteersByBan/false")
		.with_status(200)
		.with_body(r#"[{"id": 7, "full_name": "سامر", "email": "s@x", "role": "volunteer", "ban": 0}]"#)
		.create_async()
		.await;

	let page = VolunteersPage::new(api_for(&server));
	page.show_banned(false).await.unwrap();

	listing.assert_async().await;
	assert_eq!(page.list().visible().len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_default_delivered_tab_fetches_on_first_switch() {
	let mut server = Server::new_async().await;
	let listing = server
		.mock("GET", "/api/getFilteredGiftDelivered/false")
		.with_status(200)
		.with_body(r#"[{"id": 9, "recipient_name": "منى", "recipient_number": "0944", "amount": "25.5", "delivered": 0}]"#)
		.create_async()
		.await;

	let page = GiftDonationsPage::new(api_for(&server));
	page.show_delivered(false).await.unwrap();

	listing.assert_async().await;
	assert_eq!(page.list().visible().len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_default_review_tab_fetches_on_first_switch() {
	let mut server = Server::new_async().await;
	let listing = server
		.mock("GET", Matcher::Regex("^/api/getFilteredFeedbacks/".into()))
		.with_status(200)
		.with_body(r#"[{"id": 5, "user_name": "أحمد", "message": "شكراً", "status": "معلق"}]"#)
		.expect(1)
		.create_async()
		.await;

	let page = FeedbackPage::new(api_for(&server));
	page.set_filter(ReviewFilter::default()).await.unwrap();

	listing.assert_async().await;
	assert_eq!(page.list().len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_default_beneficiary_request_tab_fetches_on_first_switch() {
	let mut server = Server::new_async().await;
	let listing = server
		.mock("GET", Matcher::Regex("^/api/getFilteredBeneficiaryRequests".into()))
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body(r#"[{"id": 12, "full_name": "ليلى", "phone_number": "0933", "status": "معلق"}]"#)
		.expect(1)
		.create_async()
		.await;

	let page = BeneficiaryRequestsPage::new(api_for(&server));
	page.set_filters(BeneficiaryRequestFilters::default()).await.unwrap();

	listing.assert_async().await;
	assert_eq!(page.list().len(), 1);
}

#[rstest]
#[tokio::test]
async fn test_ban_keeps_detail_of_another_volunteer_open() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/filterVolunteersByBan/false")
		.with_status(200)
		.with_body(r#"[{"id": 7, "full_name": "سامر", "email": "s@x", "role": "volunteer", "ban": 0},
		               {"id": 8, "full_name": "رنا", "email": "r@x", "role": "volunteer", "ban": 0}]"#)
		.create_async()
		.await;
	let _mock = server
		.mock("POST", "/api/admin/banVolunteer")
		.with_status(200)
		.create_async()
		.await;

	let page = VolunteersPage::new(api_for(&server));
	page.load().await.unwrap();
	page.open_detail(8).unwrap();
	page.request_ban(7).unwrap();
	page.confirm_ban().await.unwrap();

	assert_eq!(page.detail.selected().map(|volunteer| volunteer.id), Some(8));

	page.request_ban(8).unwrap();
	page.confirm_ban().await.unwrap();
	assert!(!page.detail.is_open());
}
