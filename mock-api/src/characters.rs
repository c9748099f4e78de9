//! Fixture characters served by the mock api.

use client::{Character, CharacterId, MAX_CHARACTER_ID};

const AVATAR_URL: &str = "https://rickandmortyapi.com/api/character/avatar";

/// (name, status, species) of the first few ids. Later ids get generated
/// placeholder details.
const KNOWN: &[(&str, &str, &str)] = &[
    ("Rick Sanchez", "Alive", "Human"),
    ("Morty Smith", "Alive", "Human"),
    ("Summer Smith", "Alive", "Human"),
    ("Beth Smith", "Alive", "Human"),
    ("Jerry Smith", "Alive", "Human"),
    ("Abadango Cluster Princess", "Alive", "Alien"),
    ("Abradolf Lincler", "unknown", "Human"),
    ("Adjudicator Rick", "Dead", "Human"),
    ("Agency Director", "Dead", "Human"),
    ("Alan Rails", "Dead", "Human"),
    ("Albert Einstein", "Dead", "Human"),
    ("Alexander", "Dead", "Human"),
];

/// Look up a character, `None` outside `[1, MAX_CHARACTER_ID]`.
pub fn character(id: CharacterId) -> Option<Character> {
    if !(1..=MAX_CHARACTER_ID).contains(&id.0) {
        return None;
    }

    let (name, status, species) = match KNOWN.get(id.0 as usize - 1) {
        Some((name, status, species)) => {
            (name.to_string(), status.to_string(), species.to_string())
        }
        None => (
            format!("Character {id}"),
            "unknown".to_string(),
            "unknown".to_string(),
        ),
    };

    Some(Character {
        id,
        name,
        status,
        species,
        image: format!("{AVATAR_URL}/{id}.jpeg"),
    })
}
