use serde::{Deserialize, Serialize};

/// A votable product as served by the products API.
///
/// Field names stay capitalized on the wire to match the existing
/// `/products` payload. Every field defaults so a partial record
/// deserializes with empty values instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Id", default)]
    pub id: u32,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Slug", default)]
    pub slug: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// Per-card vote indicator. Nothing transitions it yet; cards stay
/// `Unset` until vote submission is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoteState {
    #[default]
    Unset,
    Upvoted,
    Downvoted,
}

impl VoteState {
    /// Text shown in the card heading next to the product name.
    pub fn indicator(self) -> &'static str {
        match self {
            VoteState::Unset => "",
            VoteState::Upvoted => "▲",
            VoteState::Downvoted => "▼",
        }
    }
}
