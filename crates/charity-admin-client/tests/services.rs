//! Endpoint shapes of each resource service

use std::sync::Arc;

use charity_admin_client::{
	AdminApi, ApiError, ClientSettings, EndpointContract, MemoryCredentialStore,
};
use charity_admin_types::{
	BeneficiaryRequestFilters, Choice, Decimal, Dimension, Dimensions, ProjectFilters,
	ProjectStatus, ProjectType, ReviewStatus,
};
use mockito::{Matcher, Server};
use rstest::rstest;
use serde_json::json;

const PROJECTS: &str = r#"[
	{"id": 1, "type": {"id": 1, "name": "صحي"}, "name": "a", "description": "",
	 "total_amount": 500, "current_amount": 100, "status": "جاري",
	 "priority": "مرتفع", "duration_type": "مؤقت"}
]"#;

fn api_for(server: &Server, contract: EndpointContract) -> AdminApi {
	let settings = ClientSettings::new(&format!("{}/api/", server.url()))
		.unwrap()
		.with_contract(contract);
	AdminApi::with_credentials(settings, Arc::new(MemoryCredentialStore::with_token("t"))).unwrap()
}

fn logged_out_api(server: &Server) -> AdminApi {
	let settings = ClientSettings::new(&format!("{}/api/", server.url())).unwrap();
	AdminApi::new(settings).unwrap()
}

#[tokio::test]
async fn test_login_stores_token() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/api/admin/login")
		.match_header("authorization", Matcher::Missing)
		.match_body(Matcher::Json(
			json!({"email": "admin@example.org", "password": "pw"}),
		))
		.with_status(200)
		.with_body(r#"{"token": "fresh"}"#)
		.create_async()
		.await;

	let api = logged_out_api(&server);
	api.auth().login(" admin@example.org ", "pw").await.unwrap();

	assert!(api.auth().is_authenticated());
	mock.assert_async().await;

	api.auth().logout().unwrap();
	assert!(!api.is_authenticated());
}

#[rstest]
#[case(r#"{"user": {"id": 1}}"#)]
#[case(r#"{"token": ""}"#)]
#[tokio::test]
async fn test_login_without_token_fails(#[case] body: &str) {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/api/admin/login")
		.with_status(200)
		.with_body(body)
		.create_async()
		.await;

	let api = logged_out_api(&server);
	let err = api.auth().login("a@b.c", "pw").await.unwrap_err();

	assert!(matches!(err, ApiError::MissingToken));
	assert!(!api.is_authenticated());
}

#[tokio::test]
async fn test_rejected_login_is_a_server_error() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/api/admin/login")
		.with_status(401)
		.with_body(r#"{"message": "بيانات الدخول غير صحيحة"}"#)
		.create_async()
		.await;

	let api = logged_out_api(&server);
	let err = api.auth().login("a@b.c", "wrong").await.unwrap_err();

	assert_eq!(err.backend_message(), Some("بيانات الدخول غير صحيحة"));
}

#[tokio::test]
async fn test_filter_bag_listing_pushes_every_dimension() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/api/getProjectsByFilters")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("status".into(), "جاري".into()),
			Matcher::UrlEncoded("type".into(), "صحي".into()),
		]))
		.with_status(200)
		.with_body(PROJECTS)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	let listing = api.projects().list(&ProjectFilters::default()).await.unwrap();

	assert_eq!(listing.projects.len(), 1);
	assert_eq!(listing.applied, Dimension::PROJECT.into_iter().collect::<Dimensions>());
	mock.assert_async().await;
}

#[tokio::test]
async fn test_per_dimension_listing_prefers_type() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/api/getProjectsByType/%D8%B5%D8%AD%D9%8A")
		.with_status(200)
		.with_body(PROJECTS)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::PerDimension);
	let listing = api.projects().list(&ProjectFilters::default()).await.unwrap();

	assert_eq!(listing.applied, Dimensions::from([Dimension::Type]));
	assert_eq!(listing.projects[0].type_name(), Some(&ProjectType::Health));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_per_dimension_listing_falls_back_to_status() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/api/filterProjectByStatus/%D9%85%D9%86%D8%AA%D9%87%D9%8A")
		.with_status(200)
		.with_body("[]")
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::PerDimension);
	let filters = ProjectFilters::all().with_status(ProjectStatus::Finished);
	let listing = api.projects().list(&filters).await.unwrap();

	assert!(listing.projects.is_empty());
	assert_eq!(listing.applied, Dimensions::from([Dimension::Status]));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_per_dimension_listing_needs_a_specific_dimension() {
	let server = Server::new_async().await;
	let api = api_for(&server, EndpointContract::PerDimension);

	let err = api.projects().list(&ProjectFilters::all()).await.unwrap_err();

	assert!(matches!(err, ApiError::UnsupportedQuery(_)));
}

#[rstest]
#[case("admin/markVolunteerProjectAsCompleted")]
#[case("admin/donateToProject")]
#[tokio::test]
async fn test_project_actions_send_id_in_query(#[case] path: &str) {
	let mut server = Server::new_async().await;
	let mut expected = vec![Matcher::UrlEncoded("id".into(), "3".into())];
	if path.ends_with("donateToProject") {
		expected.push(Matcher::UrlEncoded("amount".into(), "50".into()));
	}
	let mock = server
		.mock("POST", format!("/api/{path}").as_str())
		.match_query(Matcher::AllOf(expected))
		.with_status(200)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	if path.ends_with("donateToProject") {
		api.projects().donate(3, Decimal::new(5000, 2)).await.unwrap();
	} else {
		api.projects().mark_volunteer_completed(3).await.unwrap();
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn test_volunteer_completion_posts_empty_json_object() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/api/admin/markVolunteerProjectAsCompleted")
		.match_query(Matcher::UrlEncoded("id".into(), "3".into()))
		.match_header("content-type", Matcher::Regex("^application/json".into()))
		.match_body(Matcher::Json(json!({})))
		.with_status(200)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	api.projects().mark_volunteer_completed(3).await.unwrap();

	mock.assert_async().await;
}

#[tokio::test]
async fn test_volunteer_actions_send_id_in_body() {
	let mut server = Server::new_async().await;
	let ban = server
		.mock("POST", "/api/admin/banVolunteer")
		.match_body(Matcher::Json(json!({"id": 7})))
		.with_status(200)
		.create_async()
		.await;
	let approve = server
		.mock("POST", "/api/admin/approveVolunteerRequest")
		.match_body(Matcher::Json(json!({"id": 8})))
		.with_status(200)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	api.volunteers().ban(7).await.unwrap();
	api.volunteers().approve_request(8).await.unwrap();

	ban.assert_async().await;
	approve.assert_async().await;
}

#[tokio::test]
async fn test_volunteers_by_ban_flag() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/api/filterVolunteersByBan/true")
		.with_status(200)
		.with_body(r#"[{"id": 4, "full_name": "x", "email": "x@y.z", "role": "volunteer", "ban": 1}]"#)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	let volunteers = api.volunteers().by_ban(true).await.unwrap();

	assert!(volunteers[0].ban);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_beneficiary_ban_uses_phone_number() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", "/api/admin/unblockBeneficiary")
		.match_body(Matcher::Json(json!({"phone_number": "0999111222"})))
		.with_status(200)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	api.beneficiaries().unblock("0999111222").await.unwrap();

	mock.assert_async().await;
}

#[tokio::test]
async fn test_beneficiary_requests_drop_all_segment() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/api/getFilteredBeneficiaryRequests/%D9%85%D8%B9%D9%84%D9%82")
		.with_status(200)
		.with_body("[]")
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	let filters = BeneficiaryRequestFilters::default().with_type(Choice::All);
	api.beneficiaries().requests(&filters).await.unwrap();

	mock.assert_async().await;
}

#[tokio::test]
async fn test_show_beneficiary_request() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/showBeneficiaryRequest")
		.match_query(Matcher::UrlEncoded("id".into(), "12".into()))
		.with_status(200)
		.with_body(r#"{"id": 12, "full_name": "ليلى", "phone_number": "0933", "status": "معلق", "income_source": "لا يوجد"}"#)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	let request = api.beneficiaries().show_request(12).await.unwrap();

	assert_eq!(request.income_source, "لا يوجد");
	assert_eq!(request.status, ReviewStatus::Pending);
}

#[tokio::test]
async fn test_gift_and_feedback_endpoints() {
	let mut server = Server::new_async().await;
	let gifts = server
		.mock("GET", "/api/getFilteredGiftDelivered/false")
		.with_status(200)
		.with_body(r#"[{"id": 2, "recipient_name": "r", "recipient_number": "1", "amount": 25, "delivered": false, "full_name": "d", "email": "d@e.f"}]"#)
		.create_async()
		.await;
	let deliver = server
		.mock("POST", "/api/admin/giftDelivered")
		.match_query(Matcher::UrlEncoded("id".into(), "2".into()))
		.with_status(200)
		.create_async()
		.await;
	let reject = server
		.mock("POST", "/api/admin/rejectFeedback")
		.match_query(Matcher::UrlEncoded("id".into(), "5".into()))
		.with_status(200)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	let pending = api.gifts().filtered(false).await.unwrap();
	assert_eq!(pending[0].amount, Decimal::from(25));
	api.gifts().mark_delivered(2).await.unwrap();
	api.feedback().reject(5).await.unwrap();

	gifts.assert_async().await;
	deliver.assert_async().await;
	reject.assert_async().await;
}

#[tokio::test]
async fn test_monthly_batch_returns_message() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("POST", "/api/admin/doAllMonthlyDonations")
		.with_status(200)
		.with_body(r#"{"message": "تم تنفيذ التبرعات الشهرية"}"#)
		.create_async()
		.await;

	let api = api_for(&server, EndpointContract::FilterBag);
	let report = api.monthly().run().await.unwrap();

	assert_eq!(report.message, "تم تنفيذ التبرعات الشهرية");
}
