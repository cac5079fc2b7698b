//! API integration tests
//!
//! These tests require a running PostgreSQL instance with the migrations
//! applied and DATABASE_URL set; they are skipped otherwise.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::fixtures::*;
use integration_tests::{check_test_env, TestServer};
use reqwest::StatusCode;

async fn create_user(server: &TestServer, prefix: &str) -> UserBody {
    let response = server
        .post("/api/v1/users", &CreateUserBody::unique(prefix))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.unwrap()
}

async fn create_room(server: &TestServer, user: &UserBody, name: &str) -> RoomBody {
    let response = server
        .post_as(
            &user.id,
            "/api/v1/rooms",
            &CreateRoomBody {
                name: name.to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.unwrap()
}

async fn fetch_summary(server: &TestServer, user: &UserBody, room_id: &str) -> SummaryBody {
    let response = server
        .get_as(&user.id, &format!("/api/v1/rooms/{room_id}/summary"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server, "asha").await;

    let response = server
        .get(&format!("/api/v1/users/{}", user.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: UserBody = response.json().await.unwrap();
    assert_eq!(fetched.name, user.name);
}

#[tokio::test]
async fn test_create_user_with_blank_name_fails() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/users",
            &CreateUserBody {
                name: "   ".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/99").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Room Tests
// ============================================================================

#[tokio::test]
async fn test_create_room_requires_identity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/rooms",
            &CreateRoomBody {
                name: "Flat 3B".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_room_bootstraps_tray() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server, "asha").await;
    let room = create_room(&server, &user, "Flat 3B").await;
    assert!(room.active_tray_id.is_some());

    let summary = fetch_summary(&server, &user, &room.id).await;
    assert!(summary.is_member);
    assert_eq!(summary.members.len(), 1);
    assert!(summary.tray.is_some());
    assert_eq!(summary.eggs.len(), 30);
    assert!(summary.counts.is_empty());
    assert_eq!(summary.target_per_member, 15);

    for (i, egg) in summary.eggs.iter().enumerate() {
        assert_eq!(egg.position, i as i32);
        assert!(egg.eaten_by.is_none());
    }
}

#[tokio::test]
async fn test_summary_of_missing_room_is_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = create_user(&server, "asha").await;
    let response = server
        .get_as(&user.id, "/api/v1/rooms/99/summary")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_rooms_with_member_counts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let asha = create_user(&server, "asha").await;
    let ben = create_user(&server, "ben").await;
    let room = create_room(&server, &asha, "Flat 3B").await;

    let response = server
        .post_empty_as(&ben.id, &format!("/api/v1/rooms/{}/join", room.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get_as(&ben.id, "/api/v1/users/@me/rooms").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rooms: Vec<RoomListEntryBody> = response.json().await.unwrap();

    let entry = rooms.iter().find(|r| r.id == room.id).expect("room listed");
    assert_eq!(entry.member_count, 2);
}

// ============================================================================
// Join Tests
// ============================================================================

#[tokio::test]
async fn test_join_room_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let asha = create_user(&server, "asha").await;
    let ben = create_user(&server, "ben").await;
    let room = create_room(&server, &asha, "Flat 3B").await;

    let join: JoinBody = server
        .post_empty_as(&ben.id, &format!("/api/v1/rooms/{}/join", room.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(join.joined);

    let rejoin: JoinBody = server
        .post_empty_as(&ben.id, &format!("/api/v1/rooms/{}/join", room.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!rejoin.joined);

    let summary = fetch_summary(&server, &ben, &room.id).await;
    assert_eq!(summary.members.len(), 2);
}

// ============================================================================
// Tray Tests
// ============================================================================

#[tokio::test]
async fn test_non_member_cannot_start_tray() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let asha = create_user(&server, "asha").await;
    let ben = create_user(&server, "ben").await;
    let room = create_room(&server, &asha, "Flat 3B").await;

    let response = server
        .post_as(
            &ben.id,
            &format!("/api/v1/rooms/{}/trays", room.id),
            &CreateTrayBody { label: None },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_new_tray_supersedes_previous() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let asha = create_user(&server, "asha").await;
    let room = create_room(&server, &asha, "Flat 3B").await;
    let first_tray_id = room.active_tray_id.clone().unwrap();

    let response = server
        .post_as(
            &asha.id,
            &format!("/api/v1/rooms/{}/trays", room.id),
            &CreateTrayBody {
                label: Some("Round two".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let tray: TrayBody = response.json().await.unwrap();
    assert_eq!(tray.label, "Round two");
    assert_ne!(tray.id, first_tray_id);

    let summary = fetch_summary(&server, &asha, &room.id).await;
    assert_eq!(summary.tray.map(|t| t.id), Some(tray.id));
    assert_eq!(summary.eggs.len(), 30);
}

// ============================================================================
// Egg Toggle Tests
// ============================================================================

/// The full shared-tray scenario: claim, conflict, release.
#[tokio::test]
async fn test_toggle_scenario() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let asha = create_user(&server, "asha").await;
    let ben = create_user(&server, "ben").await;
    let room = create_room(&server, &asha, "Flat 3B").await;

    server
        .post_empty_as(&ben.id, &format!("/api/v1/rooms/{}/join", room.id))
        .await
        .unwrap();

    let summary = fetch_summary(&server, &ben, &room.id).await;
    let egg_id = summary.eggs[5].id.clone();

    // Ben claims egg 5
    let toggle: ToggleBody = server
        .post_empty_as(&ben.id, &format!("/api/v1/eggs/{egg_id}/toggle"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(toggle.claimed);

    let summary = fetch_summary(&server, &ben, &room.id).await;
    assert_eq!(summary.counts.get(&ben.id), Some(&1));
    assert_eq!(summary.eggs[5].eaten_by.as_deref(), Some(ben.id.as_str()));

    // Asha cannot steal it
    let response = server
        .post_empty_as(&asha.id, &format!("/api/v1/eggs/{egg_id}/toggle"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: ErrorBody = response.json().await.unwrap();
    assert_eq!(error.error.code, "EGG_ALREADY_CLAIMED");

    let summary = fetch_summary(&server, &asha, &room.id).await;
    assert_eq!(summary.counts.get(&ben.id), Some(&1));

    // Ben releases it again
    let toggle: ToggleBody = server
        .post_empty_as(&ben.id, &format!("/api/v1/eggs/{egg_id}/toggle"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!toggle.claimed);

    let summary = fetch_summary(&server, &ben, &room.id).await;
    assert!(summary.counts.is_empty());
    assert!(summary.eggs[5].eaten_by.is_none());
}

#[tokio::test]
async fn test_non_member_cannot_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let asha = create_user(&server, "asha").await;
    let ben = create_user(&server, "ben").await;
    let room = create_room(&server, &asha, "Flat 3B").await;

    let summary = fetch_summary(&server, &asha, &room.id).await;
    let egg_id = summary.eggs[0].id.clone();

    let response = server
        .post_empty_as(&ben.id, &format!("/api/v1/eggs/{egg_id}/toggle"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
