//! End-to-end tests for the appointment submission gate.
//!
//! Uses wiremock to verify that invalid forms never reach the network and
//! that valid ones produce the expected request.

use chrono::{Duration, Local};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hospital_api_rs::client::HospitalClient;
use hospital_api_rs::error::{ApiError, Error};
use hospital_console_rs::forms::{AppointmentForm, Field, SubmitError};

const FORM_FMT: &str = "%Y-%m-%dT%H:%M";

#[tokio::test]
async fn past_start_time_blocks_submission_without_network_call() {
    let server = MockServer::start().await;

    // Expect zero requests: the gate must suppress the call.
    Mock::given(method("POST"))
        .and(path("/add_appointment"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let yesterday = Local::now().naive_local() - Duration::days(1);
    let mut form = AppointmentForm::new(2, 1);
    form.set_start_time(&yesterday.format(FORM_FMT).to_string());

    let client = HospitalClient::new(server.uri());
    let err = form.submit(&client).await.unwrap_err();

    match err {
        SubmitError::Invalid(errors) => {
            // The derived end time is also in the past here, so only assert
            // on the from-time error being present exactly once.
            let from_errors: Vec<_> = errors
                .iter()
                .filter(|e| e.field == Field::FromTime)
                .collect();
            assert_eq!(from_errors.len(), 1);
        }
        other => panic!("expected Invalid, got {other:?}"),
    }

    // MockServer verifies expect(0) on drop.
}

#[tokio::test]
async fn valid_form_posts_appointment() {
    let server = MockServer::start().await;

    let start = Local::now().naive_local() + Duration::days(7);
    let start_str = start.format("%Y-%m-%dT%H:%M").to_string();

    Mock::given(method("POST"))
        .and(path("/add_appointment"))
        .and(body_string_contains("\"patient_id\":2"))
        .and(body_string_contains("\"doctor_id\":1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "id": 31
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = AppointmentForm::new(2, 1);
    form.set_start_time(&start_str);
    form.notes = "first visit".to_string();

    let client = HospitalClient::new(server.uri());
    let status = form.submit(&client).await.unwrap();
    assert_eq!(status.id, Some(31));
}

#[tokio::test]
async fn server_rejection_preserves_form_for_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add_appointment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Doctor is double-booked"
        })))
        .mount(&server)
        .await;

    let start = Local::now().naive_local() + Duration::days(7);
    let mut form = AppointmentForm::new(2, 1);
    form.set_start_time(&start.format(FORM_FMT).to_string());

    let client = HospitalClient::new(server.uri());
    let err = form.submit(&client).await.unwrap_err();

    match err {
        SubmitError::Api(Error::Api(ApiError::Rejected { message })) => {
            assert_eq!(message, "Doctor is double-booked");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    // The form is untouched and can be resubmitted as-is.
    assert!(!form.from_time().is_empty());
    assert!(form.validate().is_empty());
}

#[tokio::test]
async fn edit_submission_targets_the_record() {
    let server = MockServer::start().await;

    let start = Local::now().naive_local() + Duration::days(3);

    Mock::given(method("POST"))
        .and(path("/edit_appointment/9"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut form = AppointmentForm::new(2, 1);
    form.set_start_time(&start.format(FORM_FMT).to_string());

    let client = HospitalClient::new(server.uri());
    let status = form.submit_edit(9, &client).await.unwrap();
    assert!(status.success);
}
