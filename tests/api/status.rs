use serde_json::json;

use crate::helpers::spawn_app;

#[tokio::test]
async fn post_status_returns_the_created_check() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post_status(&json!({ "client_name": "uptime-bot" })).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["client_name"], "uptime-bot");
    assert!(body["id"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn get_status_returns_checks_in_insertion_order() {
    // Arrange
    let app = spawn_app().await;
    app.post_status(&json!({ "client_name": "first" })).await;
    app.post_status(&json!({ "client_name": "second" })).await;

    // Act
    let response = app.get_status().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let checks: Vec<serde_json::Value> = response.json().await.unwrap();
    let names: Vec<&str> = checks
        .iter()
        .map(|check| check["client_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[tokio::test]
async fn empty_client_name_is_rejected_with_a_422() {
    // Arrange
    let app = spawn_app().await;

    for body in [json!({ "client_name": "" }), json!({ "client_name": "   " })] {
        // Act
        let response = app.post_status(&body).await;

        // Assert
        assert_eq!(422, response.status().as_u16());
    }

    // Nothing was recorded
    let checks: Vec<serde_json::Value> = app.get_status().await.json().await.unwrap();
    assert!(checks.is_empty());
}

#[tokio::test]
async fn status_checks_do_not_show_up_as_submissions() {
    // Arrange
    let app = spawn_app().await;
    app.post_status(&json!({ "client_name": "uptime-bot" })).await;

    // Act
    let submissions: Vec<serde_json::Value> = app.get_submissions().await.json().await.unwrap();

    // Assert
    assert!(submissions.is_empty());
}
