//! Application lifecycle: submission, role gating, shelter ownership
//! isolation and the status state machine, end to end.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::TestApp;
use serde_json::json;
use uuid::Uuid;

use petconnect_core::applications;
use petconnect_core::models::application::ApplicationStatus;

#[tokio::test]
async fn full_adoption_workflow() {
    let app = TestApp::spawn().await;

    let (shelter_token, shelter_user) = app
        .register("Happy Paws", "haven@x.com", "sheltersecret", "shelter")
        .await;
    let pet = app.create_pet(&shelter_token, "Luna").await;
    assert_eq!(pet["name"], "Luna");
    assert_eq!(pet["shelterId"], shelter_user["id"]);
    assert_eq!(pet["goodWithKids"], true);
    assert_eq!(pet["traits"], json!(["playful"]));

    let (adopter_token, adopter_user) = app
        .register("Alice", "alice@x.com", "P@ssw0rd1", "adopter")
        .await;

    let before = Utc::now();
    let (status, application) = app
        .request(
            "POST",
            "/api/applications",
            Some(&adopter_token),
            Some(json!({
                "petId": pet["id"],
                "homeType": "house",
                "hasYard": true,
                "reason": "Always wanted a husky",
            })),
        )
        .await;
    let after = Utc::now();
    assert_eq!(status, StatusCode::CREATED, "{application}");

    // Forced initialization regardless of client input.
    assert_eq!(application["status"], "pending");
    let submitted: DateTime<Utc> = application["submittedDate"]
        .as_str()
        .expect("submittedDate")
        .parse()
        .expect("rfc3339");
    assert!(submitted >= before && submitted <= after);

    // Shelter routing derived from the pet row.
    assert_eq!(application["shelterId"], shelter_user["id"]);
    assert_eq!(application["applicantId"], adopter_user["id"]);
    // Contact fields defaulted from the caller's identity.
    assert_eq!(application["applicantName"], "Alice");
    assert_eq!(application["applicantEmail"], "alice@x.com");

    // The owning shelter sees the application, joined with pet info.
    let (status, list) = app
        .request("GET", "/api/applications", Some(&shelter_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().expect("array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], application["id"]);
    assert_eq!(list[0]["petName"], "Luna");
    assert_eq!(list[0]["status"], "pending");

    // The adopter sees it too, under their own scope.
    let (_, list) = app
        .request("GET", "/api/applications", Some(&adopter_token), None)
        .await;
    assert_eq!(list.as_array().expect("array").len(), 1);

    // A different shelter can neither see nor approve it.
    let (rival_token, _) = app
        .register("Rival Rescue", "rival@x.com", "sheltersecret", "shelter")
        .await;
    let (_, rival_list) = app
        .request("GET", "/api/applications", Some(&rival_token), None)
        .await;
    assert_eq!(rival_list.as_array().expect("array").len(), 0);

    let patch_uri = format!("/api/applications/{}/status", application["id"].as_str().unwrap());
    let (status, _) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&rival_token),
            Some(json!({"status": "approved"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The owning shelter approves, then completes.
    let (status, updated) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "approved"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "approved");

    let (status, updated) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");

    app.stop().await;
}

#[tokio::test]
async fn role_gating_on_guarded_endpoints() {
    let app = TestApp::spawn().await;

    let (shelter_token, _) = app
        .register("Happy Paws", "haven@x.com", "sheltersecret", "shelter")
        .await;
    let (adopter_token, _) = app
        .register("Alice", "alice@x.com", "P@ssw0rd1", "adopter")
        .await;
    let pet = app.create_pet(&shelter_token, "Luna").await;

    // Adopters cannot list pets for adoption.
    let (status, _) = app
        .request(
            "POST",
            "/api/pets",
            Some(&adopter_token),
            Some(json!({"name": "Rex", "species": "dog"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Shelters cannot submit applications.
    let (status, _) = app
        .request(
            "POST",
            "/api/applications",
            Some(&shelter_token),
            Some(json!({"petId": pet["id"]})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Adopters cannot transition applications.
    let (status, _) = app
        .request(
            "PATCH",
            "/api/applications/00000000-0000-0000-0000-000000000001/status",
            Some(&adopter_token),
            Some(json!({"status": "approved"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    app.stop().await;
}

#[tokio::test]
async fn client_supplied_shelter_and_status_are_ignored() {
    let app = TestApp::spawn().await;

    let (shelter_token, shelter_user) = app
        .register("Happy Paws", "haven@x.com", "sheltersecret", "shelter")
        .await;
    let pet = app.create_pet(&shelter_token, "Luna").await;
    let (adopter_token, _) = app
        .register("Alice", "alice@x.com", "P@ssw0rd1", "adopter")
        .await;

    // A spoofed shelterId and a pre-approved status are both discarded.
    let (status, application) = app
        .request(
            "POST",
            "/api/applications",
            Some(&adopter_token),
            Some(json!({
                "petId": pet["id"],
                "shelterId": "11111111-1111-1111-1111-111111111111",
                "status": "approved",
                "submittedDate": "1999-01-01T00:00:00Z",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(application["shelterId"], shelter_user["id"]);
    assert_eq!(application["status"], "pending");
    assert!(application["submittedDate"].as_str().unwrap().starts_with("2"));

    app.stop().await;
}

#[tokio::test]
async fn submitting_for_a_missing_pet_is_not_found() {
    let app = TestApp::spawn().await;

    let (adopter_token, _) = app
        .register("Alice", "alice@x.com", "P@ssw0rd1", "adopter")
        .await;

    let (status, body) = app
        .request(
            "POST",
            "/api/applications",
            Some(&adopter_token),
            Some(json!({"petId": "00000000-0000-0000-0000-000000000042"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Pet not found");

    // And an absent petId is a validation failure.
    let (status, body) = app
        .request("POST", "/api/applications", Some(&adopter_token), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "petId is required");

    app.stop().await;
}

#[tokio::test]
async fn status_machine_rejects_bad_literals_and_illegal_edges() {
    let app = TestApp::spawn().await;

    let (shelter_token, _) = app
        .register("Happy Paws", "haven@x.com", "sheltersecret", "shelter")
        .await;
    let pet = app.create_pet(&shelter_token, "Luna").await;
    let (adopter_token, _) = app
        .register("Alice", "alice@x.com", "P@ssw0rd1", "adopter")
        .await;

    let (_, application) = app
        .request(
            "POST",
            "/api/applications",
            Some(&adopter_token),
            Some(json!({"petId": pet["id"]})),
        )
        .await;
    let patch_uri = format!(
        "/api/applications/{}/status",
        application["id"].as_str().unwrap()
    );

    // Unknown literal.
    let (status, body) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "archived"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");

    // Known literal, illegal edge: pending cannot jump to completed.
    let (status, _) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Reject, then verify rejected is terminal.
    let (status, _) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "rejected"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "pending"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    app.stop().await;
}

#[tokio::test]
async fn racing_status_writes_cannot_overwrite_a_terminal_state() {
    let app = TestApp::spawn().await;

    let (shelter_token, shelter_user) = app
        .register("Happy Paws", "haven@x.com", "sheltersecret", "shelter")
        .await;
    let pet = app.create_pet(&shelter_token, "Luna").await;
    let (adopter_token, _) = app
        .register("Alice", "alice@x.com", "P@ssw0rd1", "adopter")
        .await;

    let (_, application) = app
        .request(
            "POST",
            "/api/applications",
            Some(&adopter_token),
            Some(json!({"petId": pet["id"]})),
        )
        .await;
    let application_id: Uuid = application["id"].as_str().unwrap().parse().unwrap();
    let shelter_id: Uuid = shelter_user["id"].as_str().unwrap().parse().unwrap();

    // One writer lands a rejection first.
    let patch_uri = format!("/api/applications/{application_id}/status");
    let (status, _) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "rejected"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // A second writer that validated its edge while the row was still
    // pending updates nothing: the write is predicated on that snapshot.
    let stale = applications::set_status(
        &app.pool,
        application_id,
        shelter_id,
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
    )
    .await
    .expect("set_status");
    assert!(stale.is_none(), "stale write must not apply");

    // The rejection stands.
    let (_, list) = app
        .request("GET", "/api/applications", Some(&shelter_token), None)
        .await;
    assert_eq!(list[0]["status"], "rejected");

    // And the HTTP surface reports the losing edge as a bad transition.
    let (status, body) = app
        .request(
            "PATCH",
            &patch_uri,
            Some(&shelter_token),
            Some(json!({"status": "approved"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Cannot change status from rejected to approved");

    app.stop().await;
}
