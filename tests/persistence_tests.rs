//! Save, load, and resume across the codec and both stores.

use pig_engine::persist::SAVE_FORMAT_VERSION;
use pig_engine::{
    decode, encode, Difficulty, FileStore, GameRng, MemoryStore, NullSink, PersistError, PigGame,
    PigGameBuilder, SaveGame, SaveStore, ScriptedRolls, Seat,
};

/// Alice at 40 points against a veteran computer, mid-turn with 6 at
/// risk.
fn mid_game() -> PigGame {
    let mut game = PigGameBuilder::new("Alice")
        .vs_computer()
        .difficulty(Difficulty::Veteran)
        .roll_source(ScriptedRolls::new([2, 4]))
        .build()
        .unwrap();
    game.add_bonus(40).unwrap();
    game.roll().unwrap();
    game.roll().unwrap();
    game
}

#[test]
fn mid_game_snapshot_round_trips() {
    let game = mid_game();
    assert_eq!(game.state().player1().score(), 40);
    assert_eq!(game.turn_total(), 6);

    let bytes = encode(game.state()).unwrap();
    let restored = decode(&bytes).unwrap();

    assert_eq!(&restored, game.state());
    assert_eq!(restored.player1().name(), "Alice");
    assert_eq!(restored.player1().score(), 40);
    assert_eq!(restored.turn_total(), 6);
    assert_eq!(restored.difficulty(), Difficulty::Veteran);
    assert!(restored.is_vs_computer());
    assert_eq!(restored.current_seat(), Seat::One);
    let history: Vec<u8> = restored.roll_history().iter().copied().collect();
    assert_eq!(history, vec![2, 4]);
}

#[test]
fn resumed_game_plays_on() {
    let game = mid_game();
    let bytes = encode(game.state()).unwrap();
    let restored = decode(&bytes).unwrap();

    let mut resumed = PigGame::resume(restored, ScriptedRolls::new([5]), NullSink).unwrap();
    resumed.roll().unwrap();
    assert_eq!(resumed.turn_total(), 11);
    resumed.hold().unwrap();
    assert_eq!(resumed.state().player1().score(), 51);
}

#[test]
fn memory_store_save_and_load() {
    let game = mid_game();
    let mut store = MemoryStore::new();
    store.write("autosave", &encode(game.state()).unwrap()).unwrap();

    let restored = decode(&store.read("autosave").unwrap()).unwrap();
    assert_eq!(&restored, game.state());
}

#[test]
fn file_store_save_load_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path()).unwrap();

    let game = mid_game();
    store.write("slot-b", &encode(game.state()).unwrap()).unwrap();
    store.write("slot-a", b"placeholder").unwrap();

    assert_eq!(store.list().unwrap(), vec!["slot-b", "slot-a"]);

    let restored = decode(&store.read("slot-b").unwrap()).unwrap();
    assert_eq!(&restored, game.state());

    // A finished write leaves nothing but the .sav files behind.
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|name| name.ends_with(".sav")));
}

#[test]
fn file_store_overwrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path()).unwrap();

    store.write("slot", b"old").unwrap();
    store.write("slot", b"new").unwrap();

    assert_eq!(store.read("slot").unwrap(), b"new");
    assert_eq!(store.list().unwrap(), vec!["slot"]);
}

#[test]
fn missing_save_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path()).unwrap();

    assert!(matches!(
        store.read("nothing"),
        Err(PersistError::NotFound(_))
    ));
}

#[test]
fn truncated_save_is_corrupt_and_load_has_no_side_effects() {
    let game = mid_game();
    let mut bytes = encode(game.state()).unwrap();
    bytes.truncate(bytes.len() / 2);

    assert!(matches!(decode(&bytes), Err(PersistError::CorruptData(_))));
}

#[test]
fn tampered_scores_fail_validation() {
    let game = mid_game();
    let mut record = SaveGame::from_state(game.state());
    assert_eq!(record.version, SAVE_FORMAT_VERSION);

    // Claim the game ended even though nobody reached the target.
    record.game_over = true;
    record.winner_id = Some(record.player1_id);
    let bytes = bincode::serialize(&record).unwrap();

    assert!(matches!(decode(&bytes), Err(PersistError::InvalidState(_))));
}

#[test]
fn finished_game_round_trips_through_a_store() {
    let mut game = PigGameBuilder::new("Alice")
        .vs_human("Bob")
        .roll_source(ScriptedRolls::new([]))
        .build()
        .unwrap();
    game.add_bonus(100).unwrap();
    assert!(game.game_over());

    let mut store = MemoryStore::new();
    store.write("final", &encode(game.state()).unwrap()).unwrap();

    let restored = decode(&store.read("final").unwrap()).unwrap();
    assert!(restored.game_over());
    assert_eq!(restored.winner(), Some(Seat::One));
    assert_eq!(restored.winner_board().unwrap().score(), 100);

    // A finished game resumes only far enough to be restarted.
    let mut resumed = PigGame::resume(restored, GameRng::new(7), NullSink).unwrap();
    assert!(resumed.roll().is_err());
    resumed.restart();
    assert!(!resumed.game_over());
}
