//! Deck builder integration tests.
//!
//! These cover the three pairing modes against realistic level data:
//! - Identical: distinct picks, exactly two cards per key
//! - StoryMatch: subject/counterpart faces, cyclic repetition
//! - StoryWithDecoys: decoy top-up with collision-free keys

mod common;

use std::collections::BTreeMap;

use keepsake_match::{
    build_deck, ContentId, ContentRegistry, ContentDescriptor, CounterpartMap, GameRng, LevelId,
    LevelSpec, MatchError, MatchKey, PairingMode, ScriptedRng,
};

fn registry(ids: &[&str]) -> ContentRegistry {
    ContentRegistry::from_descriptors(
        ids.iter().map(|id| ContentDescriptor::new(*id, *id, format!("{}.png", id))),
    )
    .unwrap()
}

fn face_counts(deck: &keepsake_match::Deck) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for card in deck.cards() {
        *counts.entry(card.content_id.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Identical
// =============================================================================

/// 2x2 grid, pool ["a", "b"]: exactly two of each.
#[test]
fn test_identical_two_by_two() {
    let level = LevelSpec::new(LevelId::new(1), "Tiny", 2, 2, PairingMode::Identical)
        .with_pool(["a", "b"]);

    let deck = build_deck(&level, &registry(&["a", "b"]), &CounterpartMap::new(), &mut GameRng::new(5))
        .unwrap();

    let counts = face_counts(&deck);
    assert_eq!(counts["a"], 2);
    assert_eq!(counts["b"], 2);
    assert_eq!(counts.len(), 2);
}

#[test]
fn test_identical_picks_are_distinct() {
    let library = common::keepsakes();

    for seed in 0..20 {
        let deck = library.build_deck(LevelId::new(3), &mut GameRng::new(seed)).unwrap();
        let counts = face_counts(&deck);

        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&c| c == 2));
    }
}

#[test]
fn test_identical_picks_vary_with_seed() {
    let ids = ["a", "b", "c", "d", "e", "f"];
    let level = LevelSpec::new(LevelId::new(1), "Surplus", 2, 2, PairingMode::Identical).with_pool(ids);
    let reg = registry(&ids);

    let pick_sets: std::collections::BTreeSet<Vec<String>> = (0..30)
        .map(|seed| {
            let deck = build_deck(&level, &reg, &CounterpartMap::new(), &mut GameRng::new(seed)).unwrap();
            face_counts(&deck).into_keys().collect()
        })
        .collect();

    assert!(pick_sets.len() > 1);
    assert!(pick_sets.iter().all(|picks| picks.len() == 2));
}

#[test]
fn test_identical_exact_scripted_deck() {
    let level = LevelSpec::new(LevelId::new(1), "Tiny", 2, 2, PairingMode::Identical)
        .with_pool(["a", "b"]);

    // Pool shuffle: i=1 → 0 (swap) → [b, a]
    // Card shuffle of [b, b, a, a]: i=3 → 0, i=2 → 2, i=1 → 1 → [a, b, a, b]
    let mut rng = ScriptedRng::new(vec![0, 0, 2, 1]);
    let deck = build_deck(&level, &registry(&["a", "b"]), &CounterpartMap::new(), &mut rng).unwrap();

    let faces: Vec<_> = deck.cards().iter().map(|c| c.content_id.as_str()).collect();
    assert_eq!(faces, vec!["a", "b", "a", "b"]);
}

// =============================================================================
// Story modes
// =============================================================================

#[test]
fn test_story_level_faces() {
    let library = common::keepsakes();
    let deck = library.build_deck(LevelId::new(4), &mut GameRng::new(8)).unwrap();

    // 16 slots over 4 natural pairs: each face twice, each key four times.
    let counts = face_counts(&deck);
    assert_eq!(counts.len(), 8);
    assert!(counts.values().all(|&c| c == 2));
    assert!(deck.key_counts().values().all(|&c| c == 4));
    assert!(deck.is_winnable());

    for card in deck.cards() {
        let key = card.match_key.as_str();
        assert!(key.starts_with("story:"));
    }
}

#[test]
fn test_story_subject_and_counterpart_share_key() {
    let library = common::keepsakes();
    let deck = library.build_deck(LevelId::new(4), &mut GameRng::new(8)).unwrap();
    let key = MatchKey::story(&ContentId::new("raven"));

    let mut faces: Vec<_> = deck
        .cards()
        .iter()
        .filter(|c| c.match_key == key)
        .map(|c| c.content_id.as_str())
        .collect();
    faces.sort_unstable();
    assert_eq!(faces, vec!["raven", "raven", "security-blanket", "security-blanket"]);
}

/// pairCount = 5 with 2 natural pairs → exactly 3 decoys, never colliding.
#[test]
fn test_decoys_with_repeated_content() {
    let level = LevelSpec::new(LevelId::new(5), "Chaos", 5, 2, PairingMode::StoryWithDecoys)
        .with_pool(["sock", "rock"]);
    let reg = registry(&["raven", "security-blanket", "willow", "feather", "sock", "rock"]);
    let map = CounterpartMap::new()
        .with("raven", "security-blanket")
        .with("willow", "feather");

    for seed in 0..25 {
        let deck = build_deck(&level, &reg, &map, &mut GameRng::new(seed)).unwrap();
        let counts = deck.key_counts();

        let decoys: Vec<_> = counts.keys().filter(|k| k.as_str().starts_with("same:")).collect();
        assert_eq!(decoys.len(), 3);
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&c| c == 2));

        // Each decoy key's two cards show the same face.
        for key in decoys {
            let faces: Vec<_> = deck
                .cards()
                .iter()
                .filter(|c| &&c.match_key == key)
                .map(|c| &c.content_id)
                .collect();
            assert_eq!(faces[0], faces[1]);
        }
    }
}

#[test]
fn test_fixture_decoy_level() {
    let library = common::keepsakes();
    let deck = library.build_deck(LevelId::new(5), &mut GameRng::new(99)).unwrap();

    // 10 pairs: 4 story + 6 decoys
    let counts = deck.key_counts();
    assert_eq!(counts.len(), 10);
    let story = counts.keys().filter(|k| k.as_str().starts_with("story:")).count();
    assert_eq!(story, 4);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_error_taxonomy() {
    let reg = registry(&["a", "b"]);
    let map = CounterpartMap::new();
    let mut rng = GameRng::new(0);

    let odd = LevelSpec::new(LevelId::new(1), "Odd", 1, 1, PairingMode::Identical).with_pool(["a"]);
    assert!(matches!(
        build_deck(&odd, &reg, &map, &mut rng),
        Err(MatchError::InvalidLevel { .. })
    ));

    let short = LevelSpec::new(LevelId::new(2), "Short", 3, 2, PairingMode::Identical).with_pool(["a", "b"]);
    assert_eq!(
        build_deck(&short, &reg, &map, &mut rng).unwrap_err(),
        MatchError::InsufficientPool { needed: 3, available: 2 }
    );

    let unknown = LevelSpec::new(LevelId::new(3), "Unknown", 2, 1, PairingMode::Identical).with_pool(["c"]);
    assert_eq!(
        build_deck(&unknown, &reg, &map, &mut rng).unwrap_err(),
        MatchError::UnknownContentId(ContentId::new("c"))
    );

    // Counting raw pool length would let ["a", "a", "b"] fill two pairs.
    let echo = LevelSpec::new(LevelId::new(4), "Echo", 2, 2, PairingMode::Identical)
        .with_pool(["a", "a", "b"]);
    assert!(matches!(
        build_deck(&echo, &reg, &map, &mut rng),
        Err(MatchError::InvalidLevel { .. })
    ));
}
