use rand::rngs::SmallRng;
use rand::SeedableRng;

use baduk::scoring::score_game;
use baduk::{Agent, GameState, RandomBot, Stone};

fn main() {
    let mut game = GameState::new_game_with_komi(9, 11);
    let mut black_bot = RandomBot::new(SmallRng::from_entropy());
    let mut white_bot = RandomBot::new(SmallRng::from_entropy());

    while !game.is_over() {
        println!("{}", game.board());

        let bot: &mut dyn Agent = match game.next_player() {
            Stone::Black => &mut black_bot,
            Stone::White => &mut white_bot,
        };
        let mv = bot.select_move(&game);
        println!("{} plays {}\n", game.next_player(), mv);
        game = game.apply_move(mv);
    }

    println!("{}", game.board());
    let score = score_game(&game);
    println!("black {} white {} (komi {})", score.black, score.white, score.komi_2 as f64 / 2.0);
    match score.winner() {
        Some(winner) => println!("{} wins", winner),
        None => println!("draw"),
    }
}
