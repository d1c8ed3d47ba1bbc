//! Integration tests for the JSON shapes exchanged with the store.

use serde_json::json;
use tie_sheet::{
    apply_selection, build_bracket, Bracket, EngineConfig, SelectionEvent, Slot, Team,
};

#[test]
fn team_list_reads_optional_fields() {
    let teams: Vec<Team> = serde_json::from_value(json!([
        { "id": "a", "name": "Lions", "seed": 2,
          "players": [{ "id": "p1", "name": "Ana", "position": "Keeper", "number": "1" }] },
        { "id": "b", "name": "Tigers" }
    ]))
    .unwrap();
    assert_eq!(teams[0].seed, Some(2));
    assert_eq!(teams[0].players()[0].number.as_deref(), Some("1"));
    assert_eq!(teams[1].seed, None);
    assert!(teams[1].players().is_empty());
}

#[test]
fn bracket_writes_empty_slots_as_null_and_omits_unset_winner() {
    let teams = vec![
        Team { id: "a".into(), ..Team::new("Lions").with_seed(1) },
        Team { id: "b".into(), ..Team::new("Tigers").with_seed(2) },
        Team { id: "c".into(), ..Team::new("Bears").with_seed(3) },
    ];
    let bracket = build_bracket(&teams).unwrap();
    let value = serde_json::to_value(&bracket).unwrap();

    assert_eq!(
        value["rounds"][0]["matches"][0],
        json!({ "id": "r1-m1", "teams": [{ "id": "a", "name": "Lions", "seed": 1 }, null] })
    );
    assert_eq!(
        value["rounds"][1],
        json!({ "name": "Final", "matches": [{ "id": "r2-m1", "teams": [null, null] }] })
    );
}

#[test]
fn winner_is_written_as_slot_index() {
    let teams = vec![Team::new("Lions").with_seed(1), Team::new("Tigers").with_seed(2)];
    let bracket = build_bracket(&teams).unwrap();
    let event: SelectionEvent =
        serde_json::from_value(json!({ "roundIndex": 0, "matchIndex": 0, "slotIndex": 1 }))
            .unwrap();
    let decided = apply_selection(&bracket, &event, &EngineConfig::default()).unwrap();

    let value = serde_json::to_value(&decided).unwrap();
    assert_eq!(value["rounds"][0]["matches"][0]["winner"], json!(1));

    let back: Bracket = serde_json::from_value(value).unwrap();
    assert_eq!(back, decided);
}

#[test]
fn stored_bracket_accepts_null_winner() {
    let bracket: Bracket = serde_json::from_value(json!({
        "rounds": [{ "name": "Round 1", "matches": [
            { "id": "r1-m1", "teams": [null, null], "winner": null },
            { "id": "r1-m2", "teams": [null, null], "winner": 0 }
        ] }]
    }))
    .unwrap();
    assert_eq!(bracket.rounds[0].matches[0].winner, None);
    assert_eq!(bracket.rounds[0].matches[1].winner, Some(Slot::First));
}

#[test]
fn stored_bracket_rejects_bad_winner_and_slot_count() {
    let bad_winner = serde_json::from_value::<Bracket>(json!({
        "rounds": [{ "name": "Final", "matches": [
            { "id": "r1-m1", "teams": [null, null], "winner": 2 }
        ] }]
    }));
    assert!(bad_winner.is_err());

    let three_slots = serde_json::from_value::<Bracket>(json!({
        "rounds": [{ "name": "Final", "matches": [
            { "id": "r1-m1", "teams": [null, null, null] }
        ] }]
    }));
    assert!(three_slots.is_err());
}
