//! Well-known Steam settings derived from the configuration file.

use serde::{Deserialize, Serialize};
use vaporcore_steam::{GameId, SteamId};

use crate::store::ConfigStore;

/// File loaded when no path is given, relative to the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "vaporcore.ini";

pub const SECTION_STEAM: &str = "Steam";

pub const KEY_APP_ID: &str = "app_id";
pub const KEY_STEAM_ID: &str = "steam_id";
pub const KEY_USERNAME: &str = "username";
pub const KEY_LANGUAGE: &str = "language";

pub const DEFAULT_APP_ID: u32 = 0;
pub const DEFAULT_STEAM_ID: u64 = 76561198000000000;
pub const DEFAULT_USERNAME: &str = "VaporCore User";
pub const DEFAULT_LANGUAGE: &str = "english";

/// Steam identity and locale reported back through the emulated SDK.
///
/// Computed once per load; absent keys fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SteamSettings {
    pub app_id: u32,
    pub steam_id: SteamId,
    pub username: String,
    pub language: String,
}

impl Default for SteamSettings {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID,
            steam_id: SteamId::from_u64(DEFAULT_STEAM_ID),
            username: DEFAULT_USERNAME.into(),
            language: DEFAULT_LANGUAGE.into(),
        }
    }
}

impl SteamSettings {
    /// Reads the `[Steam]` section of a store through its typed getters.
    pub fn from_store(store: &ConfigStore) -> Self {
        Self {
            app_id: store.get_u32(SECTION_STEAM, KEY_APP_ID, DEFAULT_APP_ID),
            steam_id: SteamId::from_u64(store.get_u64(
                SECTION_STEAM,
                KEY_STEAM_ID,
                DEFAULT_STEAM_ID,
            )),
            username: store.get_string(SECTION_STEAM, KEY_USERNAME, DEFAULT_USERNAME),
            language: store.get_string(SECTION_STEAM, KEY_LANGUAGE, DEFAULT_LANGUAGE),
        }
    }

    pub fn game_id(&self) -> GameId {
        GameId::from_app_id(self.app_id)
    }
}
