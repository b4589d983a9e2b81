//! Crate-level tests for the game module

#[cfg(test)]
mod support {
    use crate::domain::entities::GameSession;
    use crate::domain::repository::GameSessionRepository;
    use crate::domain::value_objects::{OwnerName, Secret};
    use crate::infra::memory::MemoryGameRepository;
    use chrono::Utc;
    use kernel::id::GameSessionId;

    /// Store a fresh open session with a known secret.
    pub async fn seed_session(repo: &MemoryGameRepository, secret: &str) -> GameSessionId {
        let session = GameSession::new(
            Secret::parse(secret).unwrap(),
            OwnerName::new("Tester").unwrap(),
            Utc::now(),
        );
        repo.create(&session).await.unwrap();
        session.id
    }
}

#[cfg(test)]
mod property_tests {
    use crate::domain::entities::GuessRecord;
    use crate::domain::hint::infer_hints;
    use crate::domain::services::{generate_secret, score};
    use crate::domain::value_objects::{Guess, Secret};
    use chrono::Utc;
    use kernel::id::GameSessionId;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn arb_secret() -> impl Strategy<Value = Secret> {
        any::<u64>().prop_map(|seed| generate_secret(&mut StdRng::seed_from_u64(seed)))
    }

    /// Any four digits, repeats allowed
    fn arb_guess() -> impl Strategy<Value = Guess> {
        prop::array::uniform4(0u8..10).prop_map(|digits| Guess::from_digits(digits).unwrap())
    }

    fn arb_distinct_guess() -> impl Strategy<Value = Guess> {
        arb_secret().prop_map(|s| Guess::from_digits(*s.digits()).unwrap())
    }

    fn records(secret: &Secret, guesses: &[Guess]) -> Vec<GuessRecord> {
        let session_id = GameSessionId::new();
        guesses
            .iter()
            .enumerate()
            .map(|(i, guess)| GuessRecord {
                session_id,
                sequence: i as u32 + 1,
                guess: *guess,
                score: score(secret, guess),
                guessed_at: Utc::now(),
            })
            .collect()
    }

    proptest! {
        #[test]
        fn distinct_guess_total_is_bounded(secret in arb_secret(), guess in arb_distinct_guess()) {
            let s = score(&secret, &guess);
            prop_assert!(s.total() <= 4);
        }

        #[test]
        fn secret_scores_four_bulls_against_itself(secret in arb_secret()) {
            let guess = Guess::from_digits(*secret.digits()).unwrap();
            let s = score(&secret, &guess);
            prop_assert_eq!((s.bulls, s.cows), (4, 0));
            prop_assert!(s.is_win());
        }

        #[test]
        fn score_is_deterministic(secret in arb_secret(), guess in arb_guess()) {
            prop_assert_eq!(score(&secret, &guess), score(&secret, &guess));
        }

        #[test]
        fn each_position_scores_by_membership(secret in arb_secret(), guess in arb_guess()) {
            let s = score(&secret, &guess);
            let present = guess.digits().iter().filter(|&&d| secret.contains(d)).count();
            prop_assert_eq!(usize::from(s.total()), present);
        }

        #[test]
        fn hint_sets_are_disjoint_and_sound(
            secret in arb_secret(),
            guesses in prop::collection::vec(arb_guess(), 0..12),
        ) {
            let summary = infer_hints(&records(&secret, &guesses));

            prop_assert!(summary.confirmed.is_disjoint(summary.eliminated));
            prop_assert!(summary.confirmed.is_disjoint(summary.untried));
            prop_assert!(summary.eliminated.is_disjoint(summary.untried));

            for d in summary.confirmed.iter() {
                prop_assert!(secret.contains(d));
            }
            for d in summary.eliminated.iter() {
                prop_assert!(!secret.contains(d));
            }
            prop_assert_eq!(summary.guesses_analyzed, guesses.len());
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::support::seed_session;
    use crate::application::*;
    use crate::domain::entities::SessionState;
    use crate::domain::repository::{GameSessionRepository, RankingRepository};
    use crate::error::GameError;
    use crate::infra::memory::MemoryGameRepository;
    use kernel::id::GameSessionId;
    use std::sync::Arc;

    fn guess(session_id: GameSessionId, number: &str) -> SubmitGuessInput {
        SubmitGuessInput {
            session_id,
            number: number.to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_game_creates_open_session() {
        let repo = Arc::new(MemoryGameRepository::new());
        let output = NewGameUseCase::new(repo.clone())
            .execute("  Alice ")
            .await
            .unwrap();

        let session = repo.find_by_id(output.session_id).await.unwrap().unwrap();
        assert_eq!(session.owner_name.as_str(), "Alice");
        assert_eq!(session.state(), SessionState::Open);
    }

    #[tokio::test]
    async fn test_new_game_rejects_blank_name() {
        let repo = Arc::new(MemoryGameRepository::new());
        let result = NewGameUseCase::new(repo).execute("   ").await;
        assert!(matches!(result, Err(GameError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_new_games_get_distinct_ids() {
        let repo = Arc::new(MemoryGameRepository::new());
        let use_case = NewGameUseCase::new(repo);
        let a = use_case.execute("A").await.unwrap().session_id;
        let b = use_case.execute("B").await.unwrap().session_id;
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_partial_match_is_not_a_win() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "1234").await;
        let use_case = SubmitGuessUseCase::new(repo.clone(), SessionLocks::new());

        let output = use_case.execute(guess(id, "1243")).await.unwrap();
        assert_eq!((output.bulls, output.cows), (2, 2));
        assert!(!output.won);
        assert!(output.result.is_none());
    }

    #[tokio::test]
    async fn test_win_finalizes_once() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "1234").await;
        let use_case = SubmitGuessUseCase::new(repo.clone(), SessionLocks::new());

        use_case.execute(guess(id, "5678")).await.unwrap();
        use_case.execute(guess(id, "4321")).await.unwrap();
        let output = use_case.execute(guess(id, "1234")).await.unwrap();

        assert!(output.won);
        let result = output.result.unwrap();
        assert_eq!(result.guess_count, 3);
        assert!(result.duration_secs > 0.0);

        let ranking = repo.find(result.ranking_id).await.unwrap().unwrap();
        assert_eq!(ranking.guess_count, 3);
        assert_eq!(ranking.owner_name, "Tester");
        assert_eq!(ranking.session_id, Some(id));

        let session = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.completed_at, Some(ranking.ended_at));
    }

    #[tokio::test]
    async fn test_guess_after_win_is_rejected_without_logging() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "9012").await;
        let use_case = SubmitGuessUseCase::new(repo.clone(), SessionLocks::new());

        use_case.execute(guess(id, "9012")).await.unwrap();
        let again = use_case.execute(guess(id, "9012")).await;

        assert!(matches!(again, Err(GameError::SessionAlreadyCompleted)));
        assert_eq!(repo.list_guesses(id).await.unwrap().len(), 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_guess_is_not_logged() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "1234").await;
        let use_case = SubmitGuessUseCase::new(repo.clone(), SessionLocks::new());

        for bad in ["", "123", "12345", "12a4", "12 34"] {
            let result = use_case.execute(guess(id, bad)).await;
            assert!(
                matches!(result, Err(GameError::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(repo.list_guesses(id).await.unwrap().is_empty());

        // Repeated digits are accepted
        assert!(use_case.execute(guess(id, "1111")).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let repo = Arc::new(MemoryGameRepository::new());
        let missing = GameSessionId::new();

        let result = SubmitGuessUseCase::new(repo.clone(), SessionLocks::new())
            .execute(guess(missing, "1234"))
            .await;
        assert!(matches!(result, Err(GameError::SessionNotFound)));

        let result = RequestHintUseCase::new(repo.clone()).execute(missing).await;
        assert!(matches!(result, Err(GameError::SessionNotFound)));

        let result = SurrenderUseCase::new(repo.clone(), SessionLocks::new())
            .execute(missing)
            .await;
        assert!(matches!(result, Err(GameError::SessionNotFound)));

        let result = ViewSessionUseCase::new(repo).execute(missing).await;
        assert!(matches!(result, Err(GameError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_hint_flow() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "5678").await;
        let hints = RequestHintUseCase::new(repo.clone());
        let guesses = SubmitGuessUseCase::new(repo.clone(), SessionLocks::new());

        let empty = hints.execute(id).await.unwrap();
        assert!(!empty.has_data());
        assert!(empty.untried.is_empty());

        guesses.execute(guess(id, "1234")).await.unwrap();
        let summary = hints.execute(id).await.unwrap();
        assert_eq!(summary.eliminated.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(summary.digits_needed(), 4);

        guesses.execute(guess(id, "8765")).await.unwrap();
        let summary = hints.execute(id).await.unwrap();
        assert_eq!(summary.confirmed.to_vec(), vec![5, 6, 7, 8]);
        assert!(summary.all_confirmed());
        assert_eq!(summary.untried.to_vec(), vec![0, 9]);

        guesses.execute(guess(id, "5678")).await.unwrap();
        let result = hints.execute(id).await;
        assert!(matches!(result, Err(GameError::SessionAlreadyCompleted)));
    }

    #[tokio::test]
    async fn test_surrender_reveals_answer_and_is_terminal() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "3579").await;
        let locks = SessionLocks::new();
        let surrender = SurrenderUseCase::new(repo.clone(), locks.clone());
        let guesses = SubmitGuessUseCase::new(repo.clone(), locks);

        guesses.execute(guess(id, "1234")).await.unwrap();
        let output = surrender.execute(id).await.unwrap();
        assert_eq!(output.answer.to_string(), "3579");

        let result = guesses.execute(guess(id, "3579")).await;
        assert!(matches!(result, Err(GameError::SessionAbandoned)));
        let result = RequestHintUseCase::new(repo.clone()).execute(id).await;
        assert!(matches!(result, Err(GameError::SessionAbandoned)));
        let result = surrender.execute(id).await;
        assert!(matches!(result, Err(GameError::SessionAbandoned)));

        assert!(repo.list_all().await.unwrap().is_empty());
        assert_eq!(repo.list_guesses(id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_surrender_after_win_is_rejected() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "1234").await;
        SubmitGuessUseCase::new(repo.clone(), SessionLocks::new())
            .execute(guess(id, "1234"))
            .await
            .unwrap();

        let result = SurrenderUseCase::new(repo.clone(), SessionLocks::new())
            .execute(id)
            .await;
        assert!(matches!(result, Err(GameError::SessionAlreadyCompleted)));

        let session = repo.find_by_id(id).await.unwrap().unwrap();
        assert!(session.abandoned_at.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_hides_answer_until_finished() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "2468").await;
        let view = ViewSessionUseCase::new(repo.clone());

        SubmitGuessUseCase::new(repo.clone(), SessionLocks::new())
            .execute(guess(id, "2486"))
            .await
            .unwrap();

        let open = view.execute(id).await.unwrap();
        assert_eq!(open.state, SessionState::Open);
        assert!(open.answer.is_none());
        assert!(open.finished_at.is_none());
        assert_eq!(open.guesses.len(), 1);
        assert_eq!((open.guesses[0].score.bulls, open.guesses[0].score.cows), (2, 2));

        SurrenderUseCase::new(repo.clone(), SessionLocks::new())
            .execute(id)
            .await
            .unwrap();

        let finished = view.execute(id).await.unwrap();
        assert_eq!(finished.state, SessionState::Abandoned);
        assert_eq!(finished.answer.map(|s| s.to_string()).as_deref(), Some("2468"));
        assert!(finished.finished_at.is_some());
    }

    #[tokio::test]
    async fn test_top_rankings_order_and_limit() {
        let repo = Arc::new(MemoryGameRepository::new());
        let guesses = SubmitGuessUseCase::new(repo.clone(), SessionLocks::new());

        // Three finished games taking 3, 1 and 2 guesses
        for attempts in [3usize, 1, 2] {
            let id = seed_session(&repo, "1234").await;
            for _ in 1..attempts {
                guesses.execute(guess(id, "5678")).await.unwrap();
            }
            guesses.execute(guess(id, "1234")).await.unwrap();
        }

        let top = TopRankingsUseCase::new(repo.clone(), Arc::new(GameConfig::default()));
        let counts: Vec<u32> = top
            .execute(None)
            .await
            .unwrap()
            .iter()
            .map(|e| e.guess_count)
            .collect();
        assert_eq!(counts, vec![1, 2, 3]);

        assert_eq!(top.execute(Some(2)).await.unwrap().len(), 2);
        assert_eq!(top.execute(Some(0)).await.unwrap().len(), 1);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::support::seed_session;
    use crate::application::{SessionLocks, SubmitGuessInput, SubmitGuessUseCase};
    use crate::domain::entities::{GameSession, GuessRecord, NewGuess, RecordedGuess};
    use crate::domain::repository::{GameSessionRepository, RankingRepository};
    use crate::error::{GameError, GameResult};
    use crate::infra::memory::MemoryGameRepository;
    use chrono::{DateTime, Utc};
    use kernel::id::GameSessionId;
    use std::sync::Arc;
    use std::time::Duration;

    /// Store with slow session reads, so two processes' read-score-write
    /// sequences overlap.
    struct SlowReads(MemoryGameRepository);

    impl GameSessionRepository for SlowReads {
        async fn create(&self, session: &GameSession) -> GameResult<()> {
            self.0.create(session).await
        }

        async fn find_by_id(&self, id: GameSessionId) -> GameResult<Option<GameSession>> {
            let session = self.0.find_by_id(id).await;
            tokio::time::sleep(Duration::from_millis(5)).await;
            session
        }

        async fn list_guesses(&self, id: GameSessionId) -> GameResult<Vec<GuessRecord>> {
            self.0.list_guesses(id).await
        }

        async fn record_guess(&self, guess: &NewGuess) -> GameResult<RecordedGuess> {
            self.0.record_guess(guess).await
        }

        async fn mark_abandoned(&self, id: GameSessionId, at: DateTime<Utc>) -> GameResult<()> {
            self.0.mark_abandoned(id, at).await
        }
    }

    /// Two server processes: one store, separate lock registries.
    fn two_processes(
        repo: &MemoryGameRepository,
    ) -> (SubmitGuessUseCase<SlowReads>, SubmitGuessUseCase<SlowReads>) {
        let store = Arc::new(SlowReads(repo.clone()));
        (
            SubmitGuessUseCase::new(store.clone(), SessionLocks::new()),
            SubmitGuessUseCase::new(store, SessionLocks::new()),
        )
    }

    fn submit(session_id: GameSessionId, number: &str) -> SubmitGuessInput {
        SubmitGuessInput {
            session_id,
            number: number.to_string(),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_winning_guesses_rank_once() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "1234").await;
        let use_case = Arc::new(SubmitGuessUseCase::new(repo.clone(), SessionLocks::new()));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let use_case = use_case.clone();
                tokio::spawn(async move {
                    use_case
                        .execute(SubmitGuessInput {
                            session_id: id,
                            number: "1234".to_string(),
                        })
                        .await
                })
            })
            .collect();

        let mut wins = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(output) => {
                    assert!(output.won);
                    assert_eq!(output.result.unwrap().guess_count, 1);
                    wins += 1;
                }
                Err(GameError::SessionAlreadyCompleted) => rejected += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!((wins, rejected), (1, 1));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
        assert_eq!(repo.list_guesses(id).await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_guesses_get_distinct_sequences() {
        let repo = Arc::new(MemoryGameRepository::new());
        let id = seed_session(&repo, "1234").await;
        let use_case = Arc::new(SubmitGuessUseCase::new(repo.clone(), SessionLocks::new()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let use_case = use_case.clone();
                tokio::spawn(async move {
                    use_case
                        .execute(SubmitGuessInput {
                            session_id: id,
                            number: "5678".to_string(),
                        })
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let log = repo.list_guesses(id).await.unwrap();
        let sequences: Vec<u32> = log.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, (1..=16).collect::<Vec<_>>());
        assert!(log.windows(2).all(|w| w[0].guessed_at <= w[1].guessed_at));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_store_numbers_guesses_across_processes() {
        let repo = MemoryGameRepository::new();
        let id = seed_session(&repo, "1234").await;
        let (first, second) = two_processes(&repo);

        let (a, b) = tokio::join!(
            first.execute(submit(id, "5678")),
            second.execute(submit(id, "5678")),
        );
        a.unwrap();
        b.unwrap();

        let sequences: Vec<u32> = repo
            .list_guesses(id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.sequence)
            .collect();
        assert_eq!(sequences, vec![1, 2]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_store_ranks_one_win_across_processes() {
        let repo = MemoryGameRepository::new();
        let id = seed_session(&repo, "1234").await;
        let (first, second) = two_processes(&repo);

        let (a, b) = tokio::join!(
            first.execute(submit(id, "1234")),
            second.execute(submit(id, "1234")),
        );

        let mut wins = 0;
        let mut rejected = 0;
        for result in [a, b] {
            match result {
                Ok(output) => {
                    assert_eq!(output.result.unwrap().guess_count, 1);
                    wins += 1;
                }
                Err(GameError::SessionAlreadyCompleted) => rejected += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!((wins, rejected), (1, 1));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
        assert_eq!(repo.list_guesses(id).await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_sessions_do_not_interfere() {
        let repo = Arc::new(MemoryGameRepository::new());
        let a = seed_session(&repo, "1234").await;
        let b = seed_session(&repo, "5678").await;
        let use_case = Arc::new(SubmitGuessUseCase::new(repo.clone(), SessionLocks::new()));

        let (ra, rb) = tokio::join!(
            use_case.execute(SubmitGuessInput {
                session_id: a,
                number: "1234".to_string(),
            }),
            use_case.execute(SubmitGuessInput {
                session_id: b,
                number: "5678".to_string(),
            }),
        );

        assert!(ra.unwrap().won);
        assert!(rb.unwrap().won);
        assert_eq!(repo.top(10).await.unwrap().len(), 2);
    }
}

#[cfg(test)]
mod router_tests {
    use super::support::seed_session;
    use crate::application::config::GameConfig;
    use crate::infra::memory::MemoryGameRepository;
    use crate::presentation::router::game_router;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_new_game_endpoint() {
        let app = game_router(MemoryGameRepository::new(), GameConfig::default());

        let (status, body) = send(&app, Method::POST, "/game/new", Some(json!({"name": "Ann"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let session_id = body["sessionId"].as_str().unwrap().to_string();

        let (status, body) = send(&app, Method::GET, &format!("/game/{session_id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Ann");
        assert_eq!(body["state"], "open");
        assert!(body.get("answer").is_none());

        let (status, body) = send(&app, Method::POST, "/game/new", Some(json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_play_to_win_over_http() {
        let repo = MemoryGameRepository::new();
        let id = seed_session(&repo, "1234").await;
        let app = game_router(repo, GameConfig::default());

        let (status, body) = send(
            &app,
            Method::POST,
            "/game/guess",
            Some(json!({"sessionId": id.to_string(), "number": "1243"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"bulls": 2, "cows": 2, "won": false}));

        let (_, body) = send(&app, Method::GET, &format!("/game/{id}/hint"), None).await;
        assert_eq!(body["hasData"], true);
        assert_eq!(body["confirmed"], json!([1, 2, 3, 4]));
        assert_eq!(body["allConfirmed"], true);
        assert_eq!(body["digitsNeeded"], 0);

        let (status, body) = send(
            &app,
            Method::POST,
            "/game/guess",
            Some(json!({"sessionId": id.to_string(), "number": "１２３４"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["won"], true);
        assert_eq!(body["guessCount"], 2);
        assert!(body["rankingId"].is_i64());

        let (status, body) = send(
            &app,
            Method::POST,
            "/game/guess",
            Some(json!({"sessionId": id.to_string(), "number": "1234"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["title"], "Conflict");

        let (status, body) = send(&app, Method::GET, "/rankings?limit=5", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["guessCount"], 2);
        assert_eq!(body[0]["name"], "Tester");
    }

    #[tokio::test]
    async fn test_surrender_over_http() {
        let repo = MemoryGameRepository::new();
        let id = seed_session(&repo, "0987").await;
        let app = game_router(repo, GameConfig::default());

        let (status, body) = send(
            &app,
            Method::POST,
            "/game/surrender",
            Some(json!({"sessionId": id.to_string()})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], "0987");

        let (status, _) = send(&app, Method::GET, &format!("/game/{id}/hint"), None).await;
        assert_eq!(status, StatusCode::GONE);

        let (_, body) = send(&app, Method::GET, &format!("/game/{id}"), None).await;
        assert_eq!(body["state"], "abandoned");
        assert_eq!(body["answer"], "0987");
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let app = game_router(MemoryGameRepository::new(), GameConfig::default());

        let (status, _) = send(&app, Method::GET, "/game/not-a-uuid/hint", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let unknown = kernel::id::GameSessionId::new();
        let (status, body) = send(&app, Method::GET, &format!("/game/{unknown}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["action"], "Start a new game");

        let (status, _) = send(
            &app,
            Method::POST,
            "/game/guess",
            Some(json!({"sessionId": unknown.to_string(), "number": "12"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, Method::GET, "/rankings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::domain::value_objects::{CodeError, NameError};
    use crate::error::GameError;
    use axum::response::IntoResponse;
    use kernel::error::{app_error::AppError, kind::ErrorKind};

    #[test]
    fn test_error_kinds() {
        assert_eq!(GameError::SessionNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(GameError::SessionAlreadyCompleted.kind(), ErrorKind::Conflict);
        assert_eq!(GameError::SessionAbandoned.kind(), ErrorKind::Gone);
        assert_eq!(
            GameError::InvalidInput("x".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            GameError::Internal("x".into()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_validation_errors_become_invalid_input() {
        let err: GameError = CodeError::NotADigit('x').into();
        assert!(matches!(err, GameError::InvalidInput(ref m) if m.contains("0-9")));

        let err: GameError = NameError::Empty.into();
        assert!(matches!(err, GameError::InvalidInput(_)));
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let app_err: AppError = GameError::Internal("secret column corrupt".into()).into();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert!(!app_err.message().contains("corrupt"));
    }

    #[test]
    fn test_persistence_maps_through_kernel() {
        let app_err: AppError = GameError::Persistence(sqlx::Error::PoolTimedOut).into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);

        let response = GameError::Persistence(sqlx::Error::WorkerCrashed).into_response();
        assert_eq!(response.status().as_u16(), 500);
    }

    #[test]
    fn test_into_response_status() {
        assert_eq!(GameError::SessionAbandoned.into_response().status().as_u16(), 410);
        assert_eq!(
            GameError::SessionAlreadyCompleted
                .into_response()
                .status()
                .as_u16(),
            409
        );
    }
}
