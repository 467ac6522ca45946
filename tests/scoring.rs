use rand::rngs::SmallRng;
use rand::SeedableRng;

use baduk::scoring::{complete_game, evaluate_territory, remove_dead_stones, score_game, PointStatus};
use baduk::{GameState, RandomBot, Stone};

#[test]
fn completed_random_game_scores_consistently() {
    let mut bot = RandomBot::new(SmallRng::seed_from_u64(3));
    let game = GameState::new_game_with_komi(5, 11);

    let done = complete_game(&game, &mut bot);
    assert!(done.is_over());

    let board = done.board();
    let map = evaluate_territory(board);
    for point in map.points() {
        // stones always count for their own color
        match board.stone_at(point) {
            Some(Stone::Black) => assert_eq!(map.at(point), PointStatus::Black),
            Some(Stone::White) => assert_eq!(map.at(point), PointStatus::White),
            None => {}
        }
    }

    let score = score_game(&done);
    assert_eq!(score.komi_2, 11);
    assert!(score.black + score.white <= 25);
    // komi is a half point, a draw is impossible
    assert!(score.winner().is_some());
}

#[test]
fn dead_stone_removal_keeps_live_stones_only() {
    // a lone white stone walled into black's corner is dead, the
    // surrounding black stones are not
    let game = GameState::new_game(5);
    let moves = [
        "C1", "A2", "C2", "PASS", "C3", "PASS", "B3", "PASS", "A3", "PASS", "D2", "PASS",
    ];
    let mut game = game;
    for s in moves {
        let mv = s.parse().unwrap();
        assert!(game.is_move_legal(mv));
        game = game.apply_move(mv);
    }

    let mut bot = RandomBot::new(SmallRng::seed_from_u64(8));
    let cleaned = remove_dead_stones(&game, &mut bot, 40);

    let original = game.board();
    assert_eq!(cleaned.rows(), original.rows());
    for point in original.points() {
        // removal only ever deletes stones
        match cleaned.stone_at(point) {
            None => {}
            Some(stone) => assert_eq!(original.stone_at(point), Some(stone)),
        }
    }

    // the enclosed white stone does not survive the vote
    assert_eq!(cleaned.stone_at("A2".parse().unwrap()), None);
    // black's wall does
    assert_eq!(cleaned.stone_at("B3".parse().unwrap()), Some(Stone::Black));
}

#[test]
#[should_panic(expected = "at least one playout round")]
fn dead_stone_removal_requires_rounds() {
    let game = GameState::new_game(5);
    let mut bot = RandomBot::new(SmallRng::seed_from_u64(0));
    remove_dead_stones(&game, &mut bot, 0);
}
