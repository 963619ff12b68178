use flipstone::ai::greedy::{move_score, GreedyBot};
use flipstone::ai::simple::RandomBot;
use flipstone::ai::Bot;
use flipstone::board::{Board, BoardDone, Player};
use flipstone::game::{FlipBoard, Tile};
use flipstone::util::board_gen::random_board_with_moves;
use flipstone::util::tiny::consistent_rng;

#[test]
fn takes_center_on_empty_board() {
    let board = FlipBoard::new(5);

    // placing the only stone: +1 stone difference plus the center bonus
    assert_eq!(move_score(&board, Tile::new(2, 2), Player::B), 1015);
    assert_eq!(move_score(&board, Tile::new(2, 1), Player::B), 1005);
    assert_eq!(move_score(&board, Tile::new(1, 1), Player::B), 1005);
    assert_eq!(move_score(&board, Tile::new(0, 0), Player::B), 1000);
    assert_eq!(move_score(&board, Tile::new(4, 2), Player::B), 1000);

    // the center is the unique maximum, so the pick is deterministic
    let mut bot = GreedyBot::new(consistent_rng());
    assert_eq!(bot.select_move(&board), Ok(Tile::new(2, 2)));
}

#[test]
fn prefers_capture_over_position() {
    // white's corner stone is in atari, black can flip it by playing B1
    let board = FlipBoard::from_fen("...../...../...../b..../w.... b").unwrap();

    // 2 flipped-in-effect stones of difference on top of the placed one
    assert_eq!(move_score(&board, Tile::new(1, 0), Player::B), 3000);
    assert_eq!(move_score(&board, Tile::new(2, 2), Player::B), 1015);

    let mut bot = GreedyBot::new(consistent_rng());
    let mv = bot.select_move(&board).unwrap();
    assert_eq!(mv, Tile::new(1, 0));

    let mut child = board.clone();
    child.play(mv).unwrap();
    assert_eq!(child.to_fen(), "...../...../...../b..../bb... w");
}

#[test]
fn pressure_and_atari_bonuses() {
    // a lone white corner stone with two liberties
    let board = FlipBoard::from_fen("...../...../...../...../w.... b").unwrap();

    // taking a liberty puts the stone in atari: pressure plus atari bonus
    assert_eq!(move_score(&board, Tile::new(1, 0), Player::B), 1070);
    assert_eq!(move_score(&board, Tile::new(0, 1), Player::B), 1070);
    // unrelated placements only score the stone itself
    assert_eq!(move_score(&board, Tile::new(4, 4), Player::B), 1000);

    let mut bot = GreedyBot::new(consistent_rng());
    let mv = bot.select_move(&board).unwrap();
    assert!(mv == Tile::new(1, 0) || mv == Tile::new(0, 1), "picked {}", mv);
}

#[test]
fn pressure_without_atari() {
    // the white stone keeps two liberties, so only the plain pressure bonus applies
    let board = FlipBoard::from_fen("..w../...../...../...../..... b").unwrap();

    assert_eq!(move_score(&board, Tile::new(1, 4), Player::B), 1020);
    assert_eq!(move_score(&board, Tile::new(3, 4), Player::B), 1020);
}

#[test]
fn avoids_feeding_own_stones() {
    // playing A1 strands the white stone between two black ones and flips it away, a net
    // swing of -1 despite the placement itself; only the near-center bonus is left on top
    let board = FlipBoard::from_fen(".../b../.b. w").unwrap();

    assert_eq!(move_score(&board, Tile::new(0, 0), Player::A), -995);
    // B2 touches both black stones: two pressure bonuses on top of the center bonus
    assert_eq!(move_score(&board, Tile::new(1, 1), Player::A), 1055);

    let mut bot = GreedyBot::new(consistent_rng());
    assert_eq!(bot.select_move(&board), Ok(Tile::new(1, 1)));
}

#[test]
fn selected_moves_are_available() {
    let mut rng = consistent_rng();
    let mut greedy = GreedyBot::new(consistent_rng());
    let mut random = RandomBot::new(consistent_rng());

    for n in [0, 5, 12, 20] {
        let board = random_board_with_moves(&FlipBoard::new(5), n, &mut rng);

        let mv = greedy.select_move(&board).unwrap();
        assert_eq!(board.is_available_move(mv), Ok(true), "greedy picked {} on\n{}", mv, board);

        let mv = random.select_move(&board).unwrap();
        assert_eq!(board.is_available_move(mv), Ok(true), "random picked {} on\n{}", mv, board);
    }
}

#[test]
fn done_board_yields_no_move() {
    let mut board = FlipBoard::new(5);
    board.end_early();

    let mut bot = GreedyBot::new(consistent_rng());
    assert_eq!(bot.select_move(&board), Err(BoardDone));
}
