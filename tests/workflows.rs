mod common;

use axum::http::StatusCode;
use common::*;

#[tokio::test]
async fn new_student_joins_two_activities_then_leaves_one() {
    let (app, _) = test_app();
    let student = "newcomer@mergington.edu";

    for activity in ["Programming Class", "Art Workshop"] {
        let (status, _) = signup(&app, activity, student).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = unregister(&app, "Programming Class", student).await;
    assert_eq!(status, StatusCode::OK);

    let catalog = activities(&app).await;
    assert!(!catalog
        .get("Programming Class")
        .unwrap()
        .has_participant(student));
    assert!(catalog.get("Art Workshop").unwrap().has_participant(student));
}

#[tokio::test]
async fn signup_then_unregister_restores_roster() {
    let (app, _) = test_app();
    let before = participants(&app, "Programming Class").await;

    signup(&app, "Programming Class", TEST_EMAIL).await;
    unregister(&app, "Programming Class", TEST_EMAIL).await;

    assert_eq!(participants(&app, "Programming Class").await, before);
}

#[tokio::test]
async fn unregister_then_signup_again_moves_to_end() {
    let (app, _) = test_app();

    let (status, _) = unregister(&app, "Chess Club", "michael@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = signup(&app, "Chess Club", "michael@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        participants(&app, "Chess Club").await,
        vec!["daniel@mergington.edu", "michael@mergington.edu"]
    );
}

#[tokio::test]
async fn participant_order_is_kept() {
    let (app, _) = test_app();
    let students = [
        "actor1@mergington.edu",
        "actor2@mergington.edu",
        "actor3@mergington.edu",
    ];

    for student in students {
        signup(&app, "Drama Club", student).await;
    }
    assert_eq!(
        participants(&app, "Drama Club").await,
        vec![
            "ella@mergington.edu",
            "jack@mergington.edu",
            "actor1@mergington.edu",
            "actor2@mergington.edu",
            "actor3@mergington.edu",
        ]
    );

    unregister(&app, "Drama Club", students[1]).await;
    assert_eq!(
        participants(&app, "Drama Club").await,
        vec![
            "ella@mergington.edu",
            "jack@mergington.edu",
            "actor1@mergington.edu",
            "actor3@mergington.edu",
        ]
    );
}

#[tokio::test]
async fn many_operations_keep_roster_consistent() {
    let (app, _) = test_app();
    let emails: Vec<String> = (0..10)
        .map(|i| format!("consistency_test_{}@mergington.edu", i))
        .collect();

    // Chess Club: 12 places, 2 seeded.
    for email in &emails {
        let (status, _) = signup(&app, "Chess Club", email).await;
        assert_eq!(status, StatusCode::OK);
    }
    for email in &emails[..5] {
        let (status, _) = unregister(&app, "Chess Club", email).await;
        assert_eq!(status, StatusCode::OK);
    }
    for email in &emails[..3] {
        let (status, _) = signup(&app, "Chess Club", email).await;
        assert_eq!(status, StatusCode::OK);
    }

    let roster = participants(&app, "Chess Club").await;
    assert_eq!(roster.len(), 2 + 5 + 3);
    for email in emails[..3].iter().chain(&emails[5..]) {
        assert_eq!(roster.iter().filter(|p| *p == email).count(), 1);
    }
    for email in &emails[3..5] {
        assert!(!roster.contains(email));
    }
}

#[tokio::test]
async fn concurrent_signups_never_exceed_capacity() {
    let (app, _) = test_app();

    // Basketball Club: 15 places, 2 seeded.
    let tasks: Vec<_> = (0..40)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                signup(&app, "Basketball Club", &format!("perf_test_{}@mergington.edu", i))
                    .await
                    .0
            })
        })
        .collect();

    let mut accepted = 0;
    let mut rejected = 0;
    for task in tasks {
        match task.await.unwrap() {
            StatusCode::OK => accepted += 1,
            StatusCode::BAD_REQUEST => rejected += 1,
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(accepted, 13);
    assert_eq!(rejected, 27);
    assert_eq!(participants(&app, "Basketball Club").await.len(), 15);
}

#[tokio::test]
async fn reset_restores_seed_between_scenarios() {
    let (app, state) = test_app();
    let seed = activities(&app).await;

    signup(&app, "Science Club", TEST_EMAIL).await;
    unregister(&app, "Gym Class", "john@mergington.edu").await;
    assert_ne!(activities(&app).await, seed);

    state.store.reset_to_seed();
    assert_eq!(activities(&app).await, seed);
}

#[tokio::test]
async fn every_activity_stays_within_capacity() {
    let (app, _) = test_app();

    for round in 0..35 {
        for name in activities(&app).await.names() {
            signup(&app, name, &format!("round{}@mergington.edu", round)).await;
        }
    }

    for activity in &activities(&app).await {
        assert_eq!(
            activity.participants.len(),
            activity.max_participants as usize,
            "{} should be exactly full",
            activity.name
        );
    }
}
