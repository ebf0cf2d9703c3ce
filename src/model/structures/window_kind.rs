use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The period a [`Window`](super::window::Window) spans.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WindowKind {
    Season,
    Week,
    Day
}
