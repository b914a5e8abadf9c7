use std::fmt;

use serde::{Deserialize, Serialize};

const APP_ID_MASK: u64 = 0x00FF_FFFF;
const TYPE_SHIFT: u32 = 24;
const TYPE_MASK: u64 = 0xFF;
const MOD_ID_SHIFT: u32 = 32;

/// Kind of game a `GameId` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum GameType {
    App = 0,
    GameMod = 1,
    Shortcut = 2,
    P2p = 3,
}

impl GameType {
    fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(GameType::App),
            1 => Some(GameType::GameMod),
            2 => Some(GameType::Shortcut),
            3 => Some(GameType::P2p),
            _ => None,
        }
    }
}

/// A 64-bit game identifier: app id (24 bits), type (8 bits), mod id (32 bits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(u64);

impl GameId {
    /// A plain application id. App ids wider than 24 bits are truncated.
    pub fn from_app_id(app_id: u32) -> Self {
        GameId(u64::from(app_id) & APP_ID_MASK)
    }

    pub fn from_parts(app_id: u32, game_type: GameType, mod_id: u32) -> Self {
        GameId(
            (u64::from(app_id) & APP_ID_MASK)
                | ((game_type as u64) << TYPE_SHIFT)
                | (u64::from(mod_id) << MOD_ID_SHIFT),
        )
    }

    pub const fn from_u64(raw: u64) -> Self {
        GameId(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn app_id(&self) -> u32 {
        (self.0 & APP_ID_MASK) as u32
    }

    /// Returns `None` for type bits Steam does not define.
    pub fn game_type(&self) -> Option<GameType> {
        GameType::from_bits(((self.0 >> TYPE_SHIFT) & TYPE_MASK) as u8)
    }

    pub fn mod_id(&self) -> u32 {
        (self.0 >> MOD_ID_SHIFT) as u32
    }

    pub fn is_valid(&self) -> bool {
        let mod_flagged = self.mod_id() & 0x8000_0000 != 0;
        match self.game_type() {
            Some(GameType::App) => self.app_id() != 0,
            Some(GameType::GameMod) | Some(GameType::P2p) => self.app_id() != 0 && mod_flagged,
            Some(GameType::Shortcut) => mod_flagged,
            None => false,
        }
    }
}

impl From<u64> for GameId {
    fn from(raw: u64) -> Self {
        GameId(raw)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
