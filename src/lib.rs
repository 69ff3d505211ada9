#![deny(clippy::all)]
//! # hilo_equity
//!
//! Equity calculation for five card Omaha Hi-Lo (8-or-better).
//!
//! Every player holds five hole cards and must make each of their hands
//! from exactly two hole cards and three board cards. The pot is split
//! between the best high hand and the best qualifying low hand; when no
//! low qualifies the high hand takes everything.
//!
//! The crate is split into two modules:
//!
//! * [`core`] has the card model: values, suits, cards, card sets, decks,
//!   and combination iteration.
//! * [`omaha`] has the hand evaluation for high and low hands, the two
//!   hole + three board search, and the monte carlo equity simulation.
//!
//! # Examples
//!
//! ```
//! use hilo_equity::core::parse_cards;
//! use hilo_equity::omaha::compute_equity;
//!
//! let hands = vec![
//!     parse_cards("As Ah Ks Kh 2c").unwrap(),
//!     parse_cards("Qs Qh Js Jh Tc").unwrap(),
//! ];
//! let board = parse_cards("3d 4d 9c").unwrap();
//! let report = compute_equity(&hands, &board, 1_000).unwrap();
//!
//! let total: f64 = report.players().map(|(_, p)| p.equity).sum();
//! assert!((total - 100.0).abs() < 1e-6);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to the poker variant being played.
pub mod core;

/// Everything specific to Omaha Hi-Lo lives here:
/// high and low ranking, best hand search, pot splitting,
/// and equity simulation.
pub mod omaha;
