use std::fmt;

use super::error::{HiLoError, Result};

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Take a u8 (0..=12) and turn it into a value.
    /// Anything larger is clamped to Ace.
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(12))]
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range (It should
    /// be).
    ///
    /// # Examples
    ///
    /// ```
    /// use hilo_equity::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// Face value used for high hands, 2 through 14 with the ace high.
    pub fn high_value(self) -> u8 {
        self as u8 + 2
    }

    /// Face value used for low hands. The ace plays as 1.
    pub fn low_value(self) -> u8 {
        match self {
            Self::Ace => 1,
            v => v.high_value(),
        }
    }

    /// Can this value be part of an 8-or-better low?
    pub fn is_low(self) -> bool {
        self == Self::Ace || self <= Self::Eight
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Translate a u8 (0..=3) into a suit. Anything larger is a diamond.
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s.min(3))]
    }

    /// Given a character that represents a suit try and parse that char.
    /// The unicode suit symbols are accepted too.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            's' | '♠' => Some(Self::Spade),
            'h' | '♥' => Some(Self::Heart),
            'd' | '♦' => Some(Self::Diamond),
            'c' | '♣' => Some(Self::Club),
            _ => None,
        }
    }

    /// Parse a whole suit token: a single letter, a symbol,
    /// or the english name in singular or plural.
    ///
    /// # Examples
    ///
    /// ```
    /// use hilo_equity::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_token("Hearts"));
    /// assert_eq!(Some(Suit::Club), Suit::from_token("c"));
    /// assert_eq!(None, Suit::from_token("x"));
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }
        match token.to_ascii_lowercase().as_str() {
            "spade" | "spades" => Some(Self::Spade),
            "heart" | "hearts" => Some(Self::Heart),
            "diamond" | "diamonds" => Some(Self::Diamond),
            "club" | "clubs" => Some(Self::Club),
            _ => None,
        }
    }

    /// This Suit to a char
    pub fn to_char(self) -> char {
        match self {
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Diamond => 'd',
            Self::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<&str> for Card {
    type Error = HiLoError;

    fn try_from(value: &str) -> Result<Self> {
        parse_card(value)
    }
}

/// Parse a single card.
///
/// The first char is the value (`2-9`, `T`, `J`, `Q`, `K`, `A`) and the rest
/// is the suit token, see [`Suit::from_token`]. Case doesn't matter.
///
/// # Examples
///
/// ```
/// use hilo_equity::core::{parse_card, Card, Suit, Value};
///
/// assert_eq!(Card::new(Value::Ace, Suit::Spade), parse_card("As").unwrap());
/// assert_eq!(Card::new(Value::Ten, Suit::Heart), parse_card("thearts").unwrap());
/// assert!(parse_card("Zx").is_err());
/// ```
pub fn parse_card(text: &str) -> Result<Card> {
    let text = text.trim();
    let mut chars = text.chars();
    let value = chars
        .next()
        .and_then(Value::from_char)
        .ok_or_else(|| HiLoError::InvalidCard(text.to_string()))?;
    let suit =
        Suit::from_token(chars.as_str()).ok_or_else(|| HiLoError::InvalidCard(text.to_string()))?;
    Ok(Card::new(value, suit))
}

/// Parse a whitespace separated list of cards.
///
/// An empty (or all whitespace) string is an empty list. A token
/// that isn't a single card is tried as a run of two char cards,
/// so `"AsKh 2c"` and `"As Kh 2c"` parse the same.
pub fn parse_cards(text: &str) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    for token in text.split_whitespace() {
        match parse_card(token) {
            Ok(card) => cards.push(card),
            Err(e) => {
                let chars: Vec<char> = token.chars().collect();
                if chars.len() < 4 || chars.len() % 2 != 0 {
                    return Err(e);
                }
                for pair in chars.chunks(2) {
                    let s: String = pair.iter().collect();
                    cards.push(parse_card(&s).map_err(|_| e.clone())?);
                }
            }
        }
    }
    Ok(cards)
}
