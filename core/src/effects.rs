//! Recovering numeric effects from authored card text.
//!
//! Card content is written as prose ("Deal 6 damage.", "Gain 5 Block.").
//! Amounts are pulled out once, when a [`Card`](crate::types::Card) is
//! built, so the rest of the engine only sees structured numbers.

use crate::types::{CardEffect, CardType};

/// Keyword preceding a damage amount
pub const DAMAGE_KEYWORD: &str = "Deal ";
/// Keyword preceding a block amount
pub const BLOCK_KEYWORD: &str = "Gain ";

/// Find the first `keyword` immediately followed by a decimal number.
///
/// Returns `None` when no occurrence carries digits or the number does
/// not fit an `i32`.
pub fn parse_amount(text: &str, keyword: &str) -> Option<i32> {
    for (start, _) in text.match_indices(keyword) {
        let rest = &text[start + keyword.len()..];
        let digits_len = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        if digits_len == 0 {
            continue;
        }
        return rest[..digits_len].parse::<i32>().ok();
    }
    None
}

/// Structured effect for a card of `card_type` described by `description`.
pub fn parse_effect(card_type: CardType, description: &str) -> CardEffect {
    match card_type {
        CardType::Attack => CardEffect {
            damage: parse_amount(description, DAMAGE_KEYWORD).unwrap_or(0),
            block: 0,
        },
        CardType::Skill => CardEffect {
            damage: 0,
            block: parse_amount(description, BLOCK_KEYWORD).unwrap_or(0),
        },
        CardType::Power | CardType::Status | CardType::Curse => CardEffect::default(),
    }
}
