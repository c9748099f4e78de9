pub mod api_client;
pub mod fetch;
pub mod sample;

pub use api_client::{CharacterClient, ClientError, ResourceClient};
pub use fetch::{
    CANCELLED, FetchResource, FetchStatus, FetchTracker, Generation,
};
pub use sample::{Sample, unique_random_characters};

use serde::{Deserialize, Serialize};

/// Highest character id the public character API serves.
pub const MAX_CHARACTER_ID: i64 = 826;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct CharacterId(pub i64);

/// The part of a character payload the game cares about. Any other fields
/// the API sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub status: String,
    pub species: String,
    /// Avatar URL
    pub image: String,
}
