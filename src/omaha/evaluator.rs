use tracing::event;

use crate::core::{Card, CardBitSet, CardIter, Deck, HiLoError, Result, Suit, Value};

use super::high::{HandCategory, HighRank, Rankable};
use super::low::LowRank;

/// How many hole cards every player holds.
pub const HOLE_CARDS: usize = 5;
/// How many cards a complete board has.
pub const BOARD_CARDS: usize = 5;
/// Hole cards that must play in every hand.
const HOLE_CARDS_USED: usize = 2;
/// Board cards that must play in every hand.
const BOARD_CARDS_USED: usize = 3;

/// The best five cards found for a player along with their rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BestHand<R> {
    /// The five cards that play, highest value first.
    pub cards: [Card; 5],
    pub rank: R,
}

/// Best high hand, see [`best_high`].
pub type HighHand = BestHand<HighRank>;
/// Best low hand, see [`best_low`].
pub type LowHand = BestHand<LowRank>;

impl<R> BestHand<R> {
    fn from_set(set: CardBitSet, rank: R) -> Self {
        let mut cards = [Card::new(Value::Two, Suit::Spade); 5];
        for (slot, card) in cards.iter_mut().zip(set.iter()) {
            *slot = card;
        }
        cards.sort_unstable_by(|a, b| b.cmp(a));
        Self { cards, rank }
    }

    /// How many of the playing cards came from `cards`.
    pub fn count_from(&self, cards: &[Card]) -> usize {
        self.cards.iter().filter(|c| cards.contains(c)).count()
    }
}

/// Every pair of hole cards a player could use.
///
/// Pairs only depend on the hole cards so the simulation computes them
/// once per player instead of once per trial.
pub fn hole_pairs(hole: &[Card]) -> Vec<CardBitSet> {
    CardIter::new(hole, HOLE_CARDS_USED).collect()
}

/// Every triple of board cards that could play.
pub fn board_triples(board: &[Card]) -> Vec<CardBitSet> {
    CardIter::new(board, BOARD_CARDS_USED).collect()
}

/// Best high hand out of every pair x triple. The first combination found
/// wins among equals. `None` only when one of the inputs is empty.
pub(crate) fn best_high_of(
    pairs: &[CardBitSet],
    triples: &[CardBitSet],
) -> Option<(CardBitSet, HighRank)> {
    let mut best: Option<(CardBitSet, HighRank)> = None;
    for &pair in pairs {
        for &triple in triples {
            let hand = pair | triple;
            let rank = hand.rank_high();
            match best {
                Some((_, best_rank)) if best_rank >= rank => {}
                _ => best = Some((hand, rank)),
            }
        }
    }
    best
}

/// Best qualifying low out of every pair x triple, or `None` when no
/// combination makes an 8-or-better low.
pub(crate) fn best_low_of(
    pairs: &[CardBitSet],
    triples: &[CardBitSet],
) -> Option<(CardBitSet, LowRank)> {
    let mut best: Option<(CardBitSet, LowRank)> = None;
    for &pair in pairs {
        for &triple in triples {
            let hand = pair | triple;
            let Some(rank) = hand.rank_low() else {
                continue;
            };
            match best {
                Some((_, best_rank)) if best_rank <= rank => {}
                _ => best = Some((hand, rank)),
            }
        }
    }
    best
}

/// Find the best high hand using exactly two of the `hole` cards and
/// exactly three of the `board` cards.
///
/// Every combination is tried: with five hole cards and a complete board
/// that's C(5,2) x C(5,3) = 100 hands, with four hole cards 60. Returns
/// `None` if there are fewer than two hole cards or three board cards.
///
/// # Examples
///
/// ```
/// use hilo_equity::core::parse_cards;
/// use hilo_equity::omaha::{best_high, HandCategory};
///
/// // Four spades in the hand but only two can play, so no flush.
/// let hole = parse_cards("As Ks Qs Js 2d").unwrap();
/// let board = parse_cards("3s 4h 8c 9d Tc").unwrap();
/// let best = best_high(&hole, &board).unwrap();
/// assert_eq!(HandCategory::Straight, best.rank.category());
/// ```
pub fn best_high(hole: &[Card], board: &[Card]) -> Option<HighHand> {
    best_high_of(&hole_pairs(hole), &board_triples(board))
        .map(|(set, rank)| BestHand::from_set(set, rank))
}

/// Find the best 8-or-better low using exactly two of the `hole` cards
/// and exactly three of the `board` cards. `None` when nothing qualifies.
pub fn best_low(hole: &[Card], board: &[Card]) -> Option<LowHand> {
    best_low_of(&hole_pairs(hole), &board_triples(board))
        .map(|(set, rank)| BestHand::from_set(set, rank))
}

/// Check that every card shows up at most once across all of `groups`.
/// Returns the deck of everything not used.
pub(crate) fn remaining_deck<'a, I>(groups: I) -> Result<Deck>
where
    I: IntoIterator<Item = &'a [Card]>,
{
    let mut deck = Deck::default();
    for cards in groups {
        if let Some(dupe) = deck.remove_all(cards.iter().copied()) {
            return Err(HiLoError::DuplicateCard(dupe));
        }
    }
    Ok(deck)
}

/// Result of [`analyze_single`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandAnalysis {
    pub hand: Vec<Card>,
    pub board: Vec<Card>,
    /// The best high hand.
    pub high: HighHand,
    /// Category of the best high hand, for display.
    pub category: HandCategory,
    /// The best low, if any low qualifies.
    pub low: Option<LowHand>,
}

impl HandAnalysis {
    pub fn has_low(&self) -> bool {
        self.low.is_some()
    }
}

/// Analyze one hand against a complete board.
///
/// The hand must be exactly five cards and the board exactly five cards,
/// none repeated.
///
/// # Examples
///
/// ```
/// use hilo_equity::core::parse_cards;
/// use hilo_equity::omaha::{analyze_single, HandCategory};
///
/// let hand = parse_cards("As 2s Kd Kc 9h").unwrap();
/// let board = parse_cards("3s 4s 5s Kh Qh").unwrap();
/// let analysis = analyze_single(&hand, &board).unwrap();
///
/// assert_eq!(HandCategory::StraightFlush, analysis.category);
/// assert_eq!("5-4-3-2-A", analysis.low.unwrap().rank.to_string());
/// ```
pub fn analyze_single(hand: &[Card], board: &[Card]) -> Result<HandAnalysis> {
    if hand.len() != HOLE_CARDS {
        return Err(HiLoError::InvalidHandSize {
            player: 1,
            expected: HOLE_CARDS,
            found: hand.len(),
        });
    }
    if board.len() != BOARD_CARDS {
        return Err(HiLoError::InvalidAnalysisBoard { found: board.len() });
    }
    remaining_deck([hand, board])?;

    let pairs = hole_pairs(hand);
    let triples = board_triples(board);
    let (high_set, high_rank) =
        best_high_of(&pairs, &triples).ok_or(HiLoError::InvalidAnalysisBoard {
            found: board.len(),
        })?;
    let high = BestHand::from_set(high_set, high_rank);
    let low = best_low_of(&pairs, &triples).map(|(set, rank)| BestHand::from_set(set, rank));

    event!(
        tracing::Level::TRACE,
        high = ?high.rank,
        low = ?low.map(|l| l.rank),
        "Analyzed hand"
    );

    Ok(HandAnalysis {
        hand: hand.to_vec(),
        board: board.to_vec(),
        high,
        category: high_rank.category(),
        low,
    })
}
