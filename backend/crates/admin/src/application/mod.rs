//! Application Layer - Use cases

pub mod check_session;
pub mod config;
pub mod manage_rankings;
pub mod sign_in;
pub mod sign_out;

pub use check_session::CheckSessionUseCase;
pub use config::AdminConfig;
pub use manage_rankings::{
    DeleteRankingUseCase, ListRankingsUseCase, UpdateRankingInput, UpdateRankingUseCase,
};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
