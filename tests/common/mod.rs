//! Shared fixtures: a cozy-keepsakes style data set and a perfect-memory
//! solver used to drive the engine to completion.

#![allow(dead_code)]

use std::collections::BTreeMap;

use keepsake_match::{Deck, GameData, GameLibrary, MatchEngine, MatchError, SelectionOutcome};

pub const KEEPSAKES_JSON: &str = r#"{
    "content": [
        {"id": "raven", "label": "Raven", "image": "assets/characters/raven.png"},
        {"id": "willow", "label": "Willow", "image": "assets/characters/willow.png"},
        {"id": "salem", "label": "Salem", "image": "assets/characters/salem.png"},
        {"id": "bo", "label": "Bo", "image": "assets/characters/bo.png"},
        {"id": "security-blanket", "label": "Security Blanket", "image": "assets/items/security-blanket.png"},
        {"id": "cat-bed", "label": "Cat Bed", "image": "assets/items/cat-bed.png"},
        {"id": "cookie", "label": "Cookie", "image": "assets/items/cookie.png"},
        {"id": "feather", "label": "Feather", "image": "assets/items/feather.png"},
        {"id": "leaf", "label": "Leaf", "image": "assets/items/leaf.png"},
        {"id": "mouse", "label": "Mouse", "image": "assets/items/mouse.png"},
        {"id": "rock", "label": "Rock", "image": "assets/items/rock.png"},
        {"id": "sock", "label": "Sock", "image": "assets/items/sock.png"}
    ],
    "counterparts": [
        {"subject": "raven", "counterpart": "security-blanket"},
        {"subject": "willow", "counterpart": "feather"},
        {"subject": "salem", "counterpart": "mouse"},
        {"subject": "bo", "counterpart": "cookie"}
    ],
    "levels": [
        {"id": 1, "name": "Level 1 - Cozy Start (2x4)", "cols": 4, "rows": 2, "mode": "identical",
         "pool": ["raven", "willow", "salem", "bo"]},
        {"id": 2, "name": "Level 2 - Friends & Finds (3x4)", "cols": 4, "rows": 3, "mode": "identical",
         "pool": ["raven", "willow", "salem", "bo", "cookie", "mouse"]},
        {"id": 3, "name": "Level 3 - Memory Meadow (4x4)", "cols": 4, "rows": 4, "mode": "identical",
         "pool": ["raven", "willow", "salem", "bo", "cookie", "mouse", "sock", "leaf"]},
        {"id": 4, "name": "Level 4 - Story Pairs (4x4)", "cols": 4, "rows": 4, "mode": "story",
         "back": "assets/backs/raven-seal-aged.png"},
        {"id": 5, "name": "Level 5 - Cozy Chaos (4x5)", "cols": 5, "rows": 4, "mode": "story+decoys",
         "pool": ["security-blanket", "cat-bed", "cookie", "feather", "leaf", "mouse", "rock", "sock"],
         "back": "assets/backs/raven-seal-aged.png"}
    ]
}"#;

pub fn keepsakes() -> GameLibrary {
    GameData::from_json(KEEPSAKES_JSON)
        .and_then(GameData::into_library)
        .expect("fixture data is valid")
}

/// Positions grouped by match key, in deck order.
pub fn positions_by_key(deck: &Deck) -> BTreeMap<String, Vec<usize>> {
    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for card in deck.cards() {
        groups
            .entry(card.match_key.as_str().to_string())
            .or_default()
            .push(card.position);
    }
    groups
}

/// Play a started engine to completion without a single mismatch.
///
/// Returns every pair outcome in order.
pub fn solve(engine: &mut MatchEngine, deck: &Deck) -> Result<Vec<SelectionOutcome>, MatchError> {
    let mut outcomes = Vec::new();
    for positions in positions_by_key(deck).values() {
        for pair in positions.chunks(2) {
            if let [a, b] = *pair {
                engine.select_card(a)?;
                outcomes.push(engine.select_card(b)?);
            }
        }
    }
    Ok(outcomes)
}
