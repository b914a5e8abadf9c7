use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SteamError;
use crate::account::{AccountType, Universe};

const ACCOUNT_ID_MASK: u64 = 0xFFFF_FFFF;
const INSTANCE_SHIFT: u32 = 32;
const INSTANCE_MASK: u64 = 0x000F_FFFF;
const TYPE_SHIFT: u32 = 52;
const TYPE_MASK: u64 = 0xF;
const UNIVERSE_SHIFT: u32 = 56;
const UNIVERSE_MASK: u64 = 0xFF;

/// Instance used by individual accounts logged in from a desktop client.
pub const DESKTOP_INSTANCE: u32 = 1;

/// A 64-bit Steam account identifier.
///
/// Layout, least significant bits first: account id (32), instance (20),
/// account type (4), universe (8).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SteamId(u64);

impl SteamId {
    /// The all-zero, invalid Steam ID.
    pub const NIL: SteamId = SteamId(0);

    /// Builds a Steam ID from its parts.
    ///
    /// Individual accounts get the desktop instance, every other type gets 0.
    pub fn new(account_id: u32, universe: Universe, account_type: AccountType) -> Self {
        let instance = if account_type == AccountType::Individual {
            DESKTOP_INSTANCE
        } else {
            0
        };
        Self::from_parts(account_id, instance, account_type, universe)
    }

    /// Builds a Steam ID from every field, masking the instance to 20 bits.
    pub fn from_parts(
        account_id: u32,
        instance: u32,
        account_type: AccountType,
        universe: Universe,
    ) -> Self {
        let raw = u64::from(account_id)
            | ((u64::from(instance) & INSTANCE_MASK) << INSTANCE_SHIFT)
            | ((account_type as u64 & TYPE_MASK) << TYPE_SHIFT)
            | ((universe as u64 & UNIVERSE_MASK) << UNIVERSE_SHIFT);
        SteamId(raw)
    }

    /// Wraps a raw 64-bit value without validation.
    pub const fn from_u64(raw: u64) -> Self {
        SteamId(raw)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The 32-bit account id (low half).
    pub fn account_id(&self) -> u32 {
        (self.0 & ACCOUNT_ID_MASK) as u32
    }

    pub fn account_instance(&self) -> u32 {
        ((self.0 >> INSTANCE_SHIFT) & INSTANCE_MASK) as u32
    }

    /// Decodes the account type nibble, or errors for values Steam does not define.
    pub fn account_type(&self) -> Result<AccountType, SteamError> {
        AccountType::try_from(((self.0 >> TYPE_SHIFT) & TYPE_MASK) as u8)
    }

    pub fn universe(&self) -> Result<Universe, SteamError> {
        Universe::try_from(((self.0 >> UNIVERSE_SHIFT) & UNIVERSE_MASK) as u8)
    }

    /// Reports whether this ID could name a real account.
    ///
    /// Universe and type must be known and non-invalid, individual accounts
    /// need a non-zero account id and an instance no higher than the web
    /// instance (4), clans must use instance 0.
    pub fn is_valid(&self) -> bool {
        let (Ok(universe), Ok(account_type)) = (self.universe(), self.account_type()) else {
            return false;
        };
        if universe == Universe::Invalid || account_type == AccountType::Invalid {
            return false;
        }
        match account_type {
            AccountType::Individual => self.account_id() != 0 && self.account_instance() <= 4,
            AccountType::Clan => self.account_id() != 0 && self.account_instance() == 0,
            AccountType::GameServer => self.account_id() != 0,
            _ => true,
        }
    }

    /// Renders the Steam3 text form, e.g. `[U:1:52079950]`.
    pub fn steam3(&self) -> Result<String, SteamError> {
        let account_type = self.account_type()?;
        let universe = self.universe()?;
        Ok(format!(
            "[{}:{}:{}]",
            account_type.steam3_letter(),
            universe as u8,
            self.account_id()
        ))
    }
}

impl From<u64> for SteamId {
    fn from(raw: u64) -> Self {
        SteamId(raw)
    }
}

impl From<SteamId> for u64 {
    fn from(id: SteamId) -> Self {
        id.0
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId {
    type Err = SteamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(SteamId)
            .map_err(|e| SteamError::InvalidSteamId(format!("{s:?}: {e}")))
    }
}
