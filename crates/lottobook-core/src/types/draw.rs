use crate::types::{Date, NumberSet};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use ulid::Ulid;

/// Identity of an official draw result.
pub type DrawId = Ulid;

///
/// GameTag
///
/// Label of the game a draw belongs to (e.g. "6aus49"). Opaque to the
/// engine; carried so callers can file results per game.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GameTag(String);

impl GameTag {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for GameTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameTag {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

///
/// Draw
///
/// One official draw result: when it happened, which game, and the six
/// drawn numbers. The engine matches on date and numbers and echoes the
/// rest back.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Draw {
    pub id: DrawId,
    pub date: Date,
    pub game: GameTag,
    pub numbers: NumberSet,
}

impl Draw {
    #[must_use]
    pub const fn new(id: DrawId, date: Date, game: GameTag, numbers: NumberSet) -> Self {
        Self {
            id,
            date,
            game,
            numbers,
        }
    }
}
