use super::*;
use crate::catalog::{sort_hand, standard_hand};
use crate::resolver::select_chain;

fn ids(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(|c| c.id).collect()
}

#[test]
fn test_single_select_takes_only_pressed_card() {
    let hand = vec![strike(1), strike(2), defend(3)];
    let chain = select_chain(&hand, 2, 3, false);
    assert_eq!(ids(&chain), vec![2]);
}

#[test]
fn test_unaffordable_or_missing_press_selects_nothing() {
    let hand = vec![card(1, 4, CardType::Attack), strike(2)];
    assert!(select_chain(&hand, 1, 3, false).is_empty());
    assert!(select_chain(&hand, 1, 3, true).is_empty());
    assert!(select_chain(&hand, 99, 3, true).is_empty());
}

#[test]
fn test_multi_select_takes_same_type_pressed_first() {
    let hand = vec![strike(1), defend(2), strike(3)];
    let chain = select_chain(&hand, 3, 3, true);
    assert_eq!(ids(&chain), vec![3, 1], "Pressed card leads, then hand order");
}

#[test]
fn test_multi_select_skips_unaffordable_and_continues() {
    let hand = vec![
        card(1, 2, CardType::Attack),
        card(2, 2, CardType::Attack),
        card(3, 1, CardType::Attack),
    ];
    let chain = select_chain(&hand, 1, 3, true);
    assert_eq!(ids(&chain), vec![1, 3]);
}

#[test]
fn test_free_cards_are_selectable_with_zero_mana() {
    let hand = vec![card(1, 0, CardType::Skill), card(2, 0, CardType::Skill)];
    let chain = select_chain(&hand, 2, 0, true);
    assert_eq!(ids(&chain), vec![2, 1]);
}

#[test]
fn test_selection_never_exceeds_mana() {
    let hands = [standard_hand(), sort_hand()];
    for hand in hands.iter() {
        for mana in 0..=6 {
            for pressed in hand.iter() {
                for multi in [false, true] {
                    let chain = select_chain(hand, pressed.id, mana, multi);
                    let cost: i32 = chain.iter().map(|c| c.cost).sum();
                    assert!(
                        cost <= mana,
                        "pressed {} mana {} multi {} cost {}",
                        pressed.id,
                        mana,
                        multi,
                        cost
                    );
                    if let Some(first) = chain.first() {
                        assert_eq!(first.id, pressed.id);
                        assert!(chain.iter().all(|c| c.card_type == first.card_type));
                    }
                }
            }
        }
    }
}
