use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum GameMode {
    Solo = 0,
    Duo = 1
}

impl TryFrom<i32> for GameMode {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(GameMode::Solo),
            1 => Ok(GameMode::Duo),
            _ => Err(())
        }
    }
}

impl From<GameMode> for i16 {
    fn from(mode: GameMode) -> Self {
        mode as i16
    }
}
