//! # runfast-engine: Run Fast Rules Engine
//!
//! A server-authoritative engine for the shedding game Run Fast. Players are
//! dealt a split deck and take turns playing card combinations that must beat
//! the previous play, until one seat empties its hand.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text format
//! - [`deck`] - Deck variants, shuffling and round-robin dealing
//! - [`hand`] - Classification of a card set into a move kind and strength
//! - [`rules`] - Beat comparison, game settings and the first-turn rule
//! - [`authority`] - Turn and ownership checks for client commands
//! - [`game`] - Turn/round state machine for one game
//! - [`engine`] - Room orchestration: seat registry, commands, events, records
//! - [`events`] - Outbound domain events and the delivery seam
//! - [`player`] - Seats, true hands and player actions
//! - [`logger`] - GameRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use runfast_engine::cards::parse_cards;
//! use runfast_engine::hand::{classify, MoveKind};
//!
//! let cards = parse_cards("3H 3S 3D 7C 9C").unwrap();
//! let hand = classify(&cards, false);
//! assert_eq!(hand.kind, MoveKind::TripletWithTwo);
//! assert_eq!(hand.strength, 3);
//! ```
//!
//! ## Deterministic Games
//!
//! Every shuffle draws from a seeded ChaCha20 RNG, so a room replays exactly
//! from its seed, settings and seats:
//!
//! ```rust
//! use runfast_engine::engine::Engine;
//! use runfast_engine::rules::GameSettings;
//!
//! let deal = |seed| {
//!     let mut e = Engine::new(GameSettings::default(), Some(seed));
//!     e.register_seat(0, "a").unwrap();
//!     e.register_seat(1, "b").unwrap();
//!     e.start_game().unwrap();
//!     e.record().unwrap().dealt.clone()
//! };
//! assert_eq!(deal(42), deal(42));
//! ```

pub mod authority;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
