mod support;

use cube_dodge::domain::SessionState;
use cube_dodge::domain::tuning::GameTuning;
use cube_dodge::{GameEvent, ShootingPolicy};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn session_task_follows_the_tokio_clock() {
    let (session, task) = support::spawn(
        1000.0,
        800.0,
        support::settings(support::calm_tuning(), ShootingPolicy::Disabled),
    );
    session.send(GameEvent::Start).await.expect("session accepts start");

    tokio::time::sleep(Duration::from_millis(1010)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.state, SessionState::Active);
    assert_eq!(snapshot.elapsed_seconds, 1);
    assert!(snapshot.hazards.is_empty());

    tokio::time::sleep(Duration::from_millis(1000)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.elapsed_seconds, 2);
    assert_eq!(snapshot.hazards.len(), 1);

    tokio::time::sleep(Duration::from_millis(8000)).await;
    assert_eq!(session.snapshot().spawn_interval_ms, 1500);

    session.shutdown();
    task.await.expect("session task joins");
}

#[tokio::test(start_paused = true)]
async fn falling_hazard_ends_the_session_and_freezes_the_score() {
    // A viewport as wide as the player guarantees every hazard lines up with it.
    let (session, task) = support::spawn(
        50.0,
        400.0,
        support::settings(GameTuning::default(), ShootingPolicy::Disabled),
    );
    session.send(GameEvent::Start).await.expect("session accepts start");

    // First hazard at 2000 ms reaches the player (top 175) after 25 ticks of 5 units.
    tokio::time::sleep(Duration::from_millis(2510)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.state, SessionState::Ended);
    assert_eq!(snapshot.last_score, 2);
    assert!(snapshot.hazards.is_empty());

    tokio::time::sleep(Duration::from_secs(30)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.elapsed_seconds, 2);
    assert!(snapshot.hazards.is_empty());

    session.send(GameEvent::Start).await.expect("restart");
    tokio::time::sleep(Duration::from_millis(1010)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.state, SessionState::Active);
    assert_eq!(snapshot.elapsed_seconds, 1);
    assert_eq!(snapshot.last_score, 2);

    session.shutdown();
    task.await.expect("session task joins");
}

#[tokio::test(start_paused = true)]
async fn keys_and_shots_flow_through_the_session() {
    let (session, task) = support::spawn(
        1000.0,
        800.0,
        support::settings(support::calm_tuning(), ShootingPolicy::WhileActive),
    );
    session.send(GameEvent::Start).await.expect("start");
    session
        .send(GameEvent::KeyDown {
            key: "ArrowDown".to_string(),
        })
        .await
        .expect("key down");
    session
        .send(GameEvent::KeyDown {
            key: "x".to_string(),
        })
        .await
        .expect("fire");

    tokio::time::sleep(Duration::from_millis(105)).await;
    let snapshot = session.snapshot();
    assert_eq!(snapshot.player.top, 425.0);
    assert_eq!(snapshot.projectiles.len(), 1);
    assert_eq!(snapshot.projectiles[0].top, 350.0);

    session
        .send(GameEvent::KeyUp {
            key: "ArrowDown".to_string(),
        })
        .await
        .expect("key up");
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(session.snapshot().player.top, 425.0);

    session.shutdown();
    task.await.expect("session task joins");
}
