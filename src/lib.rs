#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! The engine for a small flip-capture stone game, exposed through a
//! [Board](crate::board::Board) abstraction for deterministic two player games.
//!
//! # The game
//!
//! Two players alternate placing stones on a square grid ([FlipBoard](crate::game::FlipBoard),
//! 5x5 in the shipped configuration). When a group of stones runs out of liberties it is not
//! removed as in Go: it flips to the opposing color, but only if the number of distinct
//! surrounding enemy stones is at least the size of the group. When the board fills up, the
//! player with the most stones wins. A single-player campaign is supported through
//! [LevelSettings](crate::game::LevelSettings), which pre-places a per-level number of
//! handicap stones for the AI.
//!
//! Utilities that work for any [Board](crate::board::Board):
//! * [RandomBot](crate::ai::simple::RandomBot), which simply picks a random move.
//! * Random board generation functions, see [board_gen](crate::util::board_gen).
//!
//! The built-in opponent is [GreedyBot](crate::ai::greedy::GreedyBot), a one-ply greedy
//! heuristic without lookahead.
//!
//! # Examples
//!
//! ## List the available moves on a board and play one
//!
//! ```
//! use internal_iterator::InternalIterator;
//!
//! use flipstone::board::{Board, BoardMoves, Player};
//! use flipstone::game::{FlipBoard, Tile};
//!
//! let mut board = FlipBoard::new(5);
//! println!("{}", board);
//!
//! board.available_moves().unwrap().for_each(|mv| {
//!     println!("{}", mv)
//! });
//!
//! board.play(Tile::new(2, 2)).unwrap();
//! assert_eq!(board.stone_at(Tile::new(2, 2)), Some(Player::B));
//! assert_eq!(board.next_player(), Player::A);
//! ```
//!
//! ## Start a campaign level and let the greedy bot answer
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! use flipstone::ai::greedy::GreedyBot;
//! use flipstone::ai::Bot;
//! use flipstone::board::Board;
//! use flipstone::game::{FlipBoard, LevelSettings};
//!
//! let mut rng = SmallRng::from_entropy();
//! let mut board = FlipBoard::new_level(&LevelSettings::standard(), 1, &mut rng);
//!
//! let mut bot = GreedyBot::new(SmallRng::from_entropy());
//! let mv = bot.select_move(&board).unwrap();
//! assert!(board.is_available_move(mv).unwrap());
//! board.play(mv).unwrap();
//! ```

pub mod board;

pub mod ai;

pub mod game;

pub mod util;
