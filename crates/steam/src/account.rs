use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SteamError;

/// Steam universe a Steam ID belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Universe {
    Invalid = 0,
    Public = 1,
    Beta = 2,
    Internal = 3,
    Dev = 4,
}

impl TryFrom<u8> for Universe {
    type Error = SteamError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Universe::Invalid),
            1 => Ok(Universe::Public),
            2 => Ok(Universe::Beta),
            3 => Ok(Universe::Internal),
            4 => Ok(Universe::Dev),
            other => Err(SteamError::InvalidUniverse(other)),
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Universe::Invalid => write!(f, "invalid"),
            Universe::Public => write!(f, "public"),
            Universe::Beta => write!(f, "beta"),
            Universe::Internal => write!(f, "internal"),
            Universe::Dev => write!(f, "dev"),
        }
    }
}

/// Kind of account a Steam ID refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum AccountType {
    Invalid = 0,
    Individual = 1,
    Multiseat = 2,
    GameServer = 3,
    AnonGameServer = 4,
    Pending = 5,
    ContentServer = 6,
    Clan = 7,
    Chat = 8,
    ConsoleUser = 9,
    AnonUser = 10,
}

impl AccountType {
    /// Returns the letter used for this type in Steam3 text form (`[U:1:1234]`).
    ///
    /// Console users have no letter of their own and render as `I`.
    pub fn steam3_letter(&self) -> char {
        match self {
            AccountType::Invalid | AccountType::ConsoleUser => 'I',
            AccountType::Individual => 'U',
            AccountType::Multiseat => 'M',
            AccountType::GameServer => 'G',
            AccountType::AnonGameServer => 'A',
            AccountType::Pending => 'P',
            AccountType::ContentServer => 'C',
            AccountType::Clan => 'g',
            AccountType::Chat => 'T',
            AccountType::AnonUser => 'a',
        }
    }
}

impl TryFrom<u8> for AccountType {
    type Error = SteamError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AccountType::Invalid),
            1 => Ok(AccountType::Individual),
            2 => Ok(AccountType::Multiseat),
            3 => Ok(AccountType::GameServer),
            4 => Ok(AccountType::AnonGameServer),
            5 => Ok(AccountType::Pending),
            6 => Ok(AccountType::ContentServer),
            7 => Ok(AccountType::Clan),
            8 => Ok(AccountType::Chat),
            9 => Ok(AccountType::ConsoleUser),
            10 => Ok(AccountType::AnonUser),
            other => Err(SteamError::InvalidAccountType(other)),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountType::Invalid => "invalid",
            AccountType::Individual => "individual",
            AccountType::Multiseat => "multiseat",
            AccountType::GameServer => "game server",
            AccountType::AnonGameServer => "anonymous game server",
            AccountType::Pending => "pending",
            AccountType::ContentServer => "content server",
            AccountType::Clan => "clan",
            AccountType::Chat => "chat",
            AccountType::ConsoleUser => "console user",
            AccountType::AnonUser => "anonymous user",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_from_u8() {
        assert_eq!(Universe::try_from(1).unwrap(), Universe::Public);
        assert_eq!(Universe::try_from(4).unwrap(), Universe::Dev);
        assert!(matches!(
            Universe::try_from(9),
            Err(SteamError::InvalidUniverse(9))
        ));
    }

    #[test]
    fn account_type_from_u8() {
        assert_eq!(AccountType::try_from(1).unwrap(), AccountType::Individual);
        assert_eq!(AccountType::try_from(7).unwrap(), AccountType::Clan);
        assert!(AccountType::try_from(11).is_err());
    }

    #[test]
    fn steam3_letters() {
        assert_eq!(AccountType::Individual.steam3_letter(), 'U');
        assert_eq!(AccountType::GameServer.steam3_letter(), 'G');
        assert_eq!(AccountType::Clan.steam3_letter(), 'g');
    }

    #[test]
    fn universe_json_name() {
        let json = serde_json::to_string(&Universe::Public).unwrap();
        assert_eq!(json, "\"public\"");
    }
}
