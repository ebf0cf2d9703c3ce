use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::{Display, EnumIter, EnumString};

/// Leaderboard region. Discriminants match the `region` column of the store.
#[derive(
    Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Region {
    Us = 1,
    Eu = 2,
    Ap = 3
}

impl TryFrom<i32> for Region {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Region::Us),
            2 => Ok(Region::Eu),
            3 => Ok(Region::Ap),
            _ => Err(())
        }
    }
}

impl From<Region> for i16 {
    fn from(region: Region) -> Self {
        region as i16
    }
}
