//! Application Layer - Use cases
//!
//! Orchestrates domain logic and persistence for each game operation.

pub mod config;
pub mod new_game;
pub mod rankings;
pub mod request_hint;
pub mod session_locks;
pub mod submit_guess;
pub mod surrender;
pub mod view_session;

pub use config::GameConfig;
pub use new_game::{NewGameOutput, NewGameUseCase};
pub use rankings::TopRankingsUseCase;
pub use request_hint::RequestHintUseCase;
pub use session_locks::{SessionLease, SessionLocks};
pub use submit_guess::{SubmitGuessInput, SubmitGuessOutput, SubmitGuessUseCase, WinResult};
pub use surrender::{SurrenderOutput, SurrenderUseCase};
pub use view_session::{SessionSnapshot, ViewSessionUseCase};
