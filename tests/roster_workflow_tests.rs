mod utils;
use axum::http::StatusCode;
use squadsplit::{reports, RosterRepository};
use utils::TestSetup;

const ROSTER: &str = "Ali,8,7,6,8,9,Forward
Reza,9,6,6,7,7,Defender
Sara,7,8,8,6,6,Midfield
Omid,6,5,7,9,8
Nima,5,6,5,5,5,Goalkeeper
Leila,4,4,4,4,4,Winger";

#[tokio::test]
async fn submit_then_view_every_report() {
    let setup = TestSetup::new();

    let (status, report) = setup.post("/decide", ROSTER).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        report.starts_with("Team 1"),
        "unexpected report: {}",
        report
    );
    assert!(report.contains("- Ali (7.50) - Forward"));
    assert!(report.contains("- Omid"));
    assert!(report.contains(" - Unknown"));

    // Document exists on disk after the submission
    assert!(setup.roster_path.exists());

    let (status, board) = setup.get("/leaderboard").await;
    assert_eq!(status, StatusCode::OK);
    let first_line = board.lines().nth(1).expect("leaderboard should have entries");
    assert_eq!(first_line, "1. Ali - 7.50");
    assert_eq!(board.lines().count(), 7);

    let (status, stats) = setup.get("/stats").await;
    assert_eq!(status, StatusCode::OK);
    let order: Vec<usize> = ["Ali", "Reza", "Sara", "Omid", "Nima", "Leila"]
        .iter()
        .map(|name| stats.find(name).expect("every player should be listed"))
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn teams_are_dealt_round_robin() {
    let setup = TestSetup::new();
    setup.post("/decide", ROSTER).await;

    let roster = setup.repository.load().await.unwrap();
    let teams = squadsplit::partition(&roster, 3).unwrap();

    let sizes: Vec<usize> = teams.iter().map(|t| t.len()).collect();
    assert_eq!(sizes, vec![2, 2, 2]);

    let ranked: Vec<&str> = roster.ranked().into_iter().map(|(name, _)| name).collect();
    for (index, name) in ranked.iter().enumerate() {
        assert!(teams[index % 3].names().contains(name));
    }
}

#[tokio::test]
async fn resubmitting_same_roster_is_idempotent() {
    let setup = TestSetup::new();

    setup.post("/decide", ROSTER).await;
    let first = setup.repository.load().await.unwrap();

    setup.post("/decide", ROSTER).await;
    let second = setup.repository.load().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second.len(), 6);
}

#[tokio::test]
async fn update_overwrites_player_record() {
    let setup = TestSetup::new();
    setup.post("/decide", ROSTER).await;

    let (status, _) = setup.post("/decide", "Leila,10,10,10,10,10,Striker").await;
    assert_eq!(status, StatusCode::OK);

    let roster = setup.repository.load().await.unwrap();
    assert_eq!(roster.len(), 6);
    let leila = roster.get("Leila").unwrap();
    assert_eq!(leila.position(), "Striker");

    let (_, board) = setup.get("/leaderboard").await;
    assert_eq!(board.lines().nth(1), Some("1. Leila - 10.00"));
}

#[tokio::test]
async fn bad_submission_keeps_document_untouched() {
    let setup = TestSetup::new();
    setup.post("/decide", ROSTER).await;
    let before = std::fs::read(&setup.roster_path).unwrap();

    let (status, message) = setup
        .post("/decide", "Kian,5,5,5,5,5\nBad,1,2,three,4,5")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(message.contains("Line 2"));
    assert!(message.contains("tactical"));

    let after = std::fs::read(&setup.roster_path).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn roster_survives_restart() {
    let setup = TestSetup::new();
    setup.post("/decide", ROSTER).await;
    let (_, board_before) = setup.get("/leaderboard").await;

    let setup = setup.reopen();
    let (_, board_after) = setup.get("/leaderboard").await;

    assert_eq!(board_before, board_after);
    let roster = setup.repository.load().await.unwrap();
    assert_eq!(roster.get("Omid").unwrap().position(), "Unknown");
}

#[tokio::test]
async fn reset_clears_persisted_state() {
    let setup = TestSetup::new();
    setup.post("/decide", ROSTER).await;

    let (status, body) = setup.post("/reset", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, reports::RESET_CONFIRMATION);
    assert!(!setup.roster_path.exists());
    assert!(setup.repository.load().await.unwrap().is_empty());

    let (_, teams) = setup.get("/teams").await;
    assert_eq!(teams.matches("(no players)").count(), 3);
}

#[tokio::test]
async fn views_on_fresh_install() {
    let setup = TestSetup::new();

    let (status, board) = setup.get("/leaderboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(board, reports::EMPTY_ROSTER);

    let (status, greeting) = setup.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(greeting, reports::start_text());

    let (status, help) = setup.get("/help").await;
    assert_eq!(status, StatusCode::OK);
    assert!(help.contains("/decide"));

    // Reading must not create the document
    assert!(!setup.roster_path.exists());
}
