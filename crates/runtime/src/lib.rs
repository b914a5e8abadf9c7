//! Process-level VaporCore state.
//!
//! [`Runtime`] replaces the global singletons of the SDK entry points: it
//! owns the one [`ConfigStore`], counts `init`/`shutdown` pairs and hands out
//! the configuration-backed values that the SDK surface reports.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use vaporcore_config::{ConfigStore, DEFAULT_CONFIG_FILENAME, SteamSettings};
use vaporcore_steam::{GameId, SteamId};

/// Handle of a communication pipe to the (emulated) Steam client. 0 is none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HSteamPipe(pub i32);

/// Handle of a user connected through a pipe. 0 is none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HSteamUser(pub i32);

/// Pipe handed out by the first successful `init`.
pub const DEFAULT_PIPE: HSteamPipe = HSteamPipe(1);
/// The global client user.
pub const DEFAULT_CLIENT_USER: HSteamUser = HSteamUser(1);

/// Explicitly owned process state.
pub struct Runtime {
    config_path: PathBuf,
    config: ConfigStore,
    init_count: u32,
    pipe: HSteamPipe,
    user: HSteamUser,
}

impl Runtime {
    /// Creates an uninitialized runtime that will read `config_path` on init.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            config: ConfigStore::new(),
            init_count: 0,
            pipe: HSteamPipe::default(),
            user: HSteamUser::default(),
        }
    }

    /// Creates a runtime for `vaporcore.ini` in the working directory.
    pub fn with_default_config() -> Self {
        Self::new(DEFAULT_CONFIG_FILENAME)
    }

    /// Loads configuration and connects the global user.
    ///
    /// A missing config file is not a failure: the runtime runs on built-in
    /// defaults. Calling `init` while already initialized does nothing.
    pub fn init(&mut self) -> bool {
        if self.is_initialized() {
            debug!("runtime already initialized");
            return true;
        }

        if !self.config.load(&self.config_path) {
            info!(path = %self.config_path.display(), "no config file, running on defaults");
        }

        let settings = self.config.settings();
        debug!(
            app_id = settings.app_id,
            steam_id = %settings.steam_id,
            username = %settings.username,
            language = %settings.language,
            "configuration ready"
        );

        self.pipe = DEFAULT_PIPE;
        self.user = DEFAULT_CLIENT_USER;
        self.init_count += 1;
        true
    }

    /// Releases the user and pipe. The configuration returns to built-in
    /// defaults once every `init` has been matched.
    pub fn shutdown(&mut self) {
        info!(init_count = self.init_count, "shutting down");

        self.init_count = self.init_count.saturating_sub(1);
        self.pipe = HSteamPipe::default();
        self.user = HSteamUser::default();

        if self.init_count == 0 {
            self.config = ConfigStore::new();
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.pipe != HSteamPipe::default()
    }

    pub fn init_count(&self) -> u32 {
        self.init_count
    }

    pub fn pipe(&self) -> HSteamPipe {
        self.pipe
    }

    pub fn user(&self) -> HSteamUser {
        self.user
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The configuration store, for reads beyond the well-known settings.
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn settings(&self) -> &SteamSettings {
        self.config.settings()
    }

    /// `ISteamUtils::GetAppID`: the app id as carried by the game id, so
    /// only its low 24 bits survive.
    pub fn app_id(&self) -> u32 {
        self.game_id().app_id()
    }

    pub fn game_id(&self) -> GameId {
        self.settings().game_id()
    }

    /// The account the emulated client is logged in as.
    pub fn steam_id(&self) -> SteamId {
        self.settings().steam_id
    }

    /// `ISteamFriends::GetPersonaName`.
    pub fn persona_name(&self) -> &str {
        &self.settings().username
    }

    /// `ISteamApps::GetCurrentGameLanguage`.
    pub fn current_game_language(&self) -> &str {
        &self.settings().language
    }

    /// `ISteamUtils::GetSteamUILanguage`; the client and game share one setting.
    pub fn steam_ui_language(&self) -> &str {
        &self.settings().language
    }

    /// There is no offline mode, so an initialized runtime is always logged on.
    pub fn is_logged_on(&self) -> bool {
        self.is_initialized()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::with_default_config()
    }
}
