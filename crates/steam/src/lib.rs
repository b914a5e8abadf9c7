pub mod account;
pub mod game;
pub mod id;

// Re-export primary types.
pub use account::{AccountType, Universe};
pub use game::{GameId, GameType};
pub use id::{DESKTOP_INSTANCE, SteamId};

/// Errors for Steam identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("invalid universe: {0}")]
    InvalidUniverse(u8),

    #[error("invalid account type: {0}")]
    InvalidAccountType(u8),

    #[error("invalid steam id: {0}")]
    InvalidSteamId(String),
}
