//! Minimal solitaire variant for exercising the engine.
//!
//! Not one of the shipped variants - a deliberately small rule set that
//! still drives every engine seam: layout, legality plans, stock draws
//! recorded as generic operations, waste recycling, scoring, and the win
//! predicate.
//!
//! Rules: all 52 cards start face down in the stock. A draw turns the top
//! stock card face up onto the waste; when the stock is empty a draw
//! recycles the waste back into the stock. The top waste card may move to
//! a foundation - Ace on an empty foundation, otherwise same suit one rank
//! up - for 10 points. The game is won when all four foundations are
//! complete.

use crate::cards::{CardId, Rank};
use crate::core::PileId;
use crate::engine::{EngineCore, GameEngine, OperationBatch};
use crate::rules::{MovePlan, Rules};

/// Points for landing a card on a foundation.
const FOUNDATION_SCORE: i32 = 10;

/// The minimal validation variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleSolitaire;

impl SimpleSolitaire {
    /// Face-down draw pile.
    pub const STOCK: PileId = PileId::new(0);
    /// Face-up discard the stock draws onto.
    pub const WASTE: PileId = PileId::new(1);
    /// The four build piles, Ace to King.
    pub const FOUNDATIONS: [PileId; 4] = [
        PileId::new(2),
        PileId::new(3),
        PileId::new(4),
        PileId::new(5),
    ];
}

impl Rules for SimpleSolitaire {
    fn name(&self) -> &'static str {
        "Simple"
    }

    fn layout(&self, core: &mut EngineCore, order: &[CardId]) {
        core.table.add_pile(Self::STOCK);
        core.table.add_pile(Self::WASTE);
        for foundation in Self::FOUNDATIONS {
            core.table.add_pile(foundation);
        }

        // Every card starts face down in the stock; the deck reset already
        // turned them face down.
        for &card in order {
            core.table.push(Self::STOCK, card);
        }
    }

    fn evaluate(
        &self,
        core: &EngineCore,
        from: PileId,
        to: PileId,
        card: CardId,
    ) -> Option<MovePlan> {
        if from != Self::WASTE || !Self::FOUNDATIONS.contains(&to) {
            return None;
        }
        // Only the exposed waste card may move.
        if core.table.top_card(from)? != card {
            return None;
        }

        let legal = match core.table.top_card(to) {
            None => card.rank() == Rank::Ace,
            Some(top) => {
                top.suit() == card.suit() && card.rank().index() == top.rank().index() + 1
            }
        };

        legal.then(|| MovePlan::single(from, to, &[card], FOUNDATION_SCORE))
    }

    fn is_won(&self, core: &EngineCore) -> bool {
        Self::FOUNDATIONS
            .iter()
            .all(|&foundation| core.table.len(foundation) == 13)
    }
}

impl GameEngine<SimpleSolitaire> {
    /// Draw from the stock, or recycle the waste when the stock is empty.
    ///
    /// Counts as one gesture: it registers a move and records a generic
    /// reversal. Returns `false` when both piles are empty.
    pub fn draw(&mut self) -> bool {
        let core = self.core_mut();

        if let Some(card) = core.table.pop_top(SimpleSolitaire::STOCK) {
            core.table.push(SimpleSolitaire::WASTE, card);
            core.deck.card_mut(card).face_down = false;

            let mut batch = OperationBatch::new();
            batch.push_generic(move |core: &mut EngineCore| {
                if let Some(card) = core.table.pop_top(SimpleSolitaire::WASTE) {
                    core.table.push(SimpleSolitaire::STOCK, card);
                    core.deck.card_mut(card).face_down = true;
                }
            });

            self.register_move(0);
            self.record_moves(batch);
            return true;
        }

        // Stock exhausted: flip the waste back over, top card first, which
        // restores the original stock order.
        let count = core.table.len(SimpleSolitaire::WASTE);
        if count == 0 {
            return false;
        }
        while let Some(card) = core.table.pop_top(SimpleSolitaire::WASTE) {
            core.table.push(SimpleSolitaire::STOCK, card);
            core.deck.card_mut(card).face_down = true;
        }

        let mut batch = OperationBatch::new();
        batch.push_generic(move |core: &mut EngineCore| {
            for _ in 0..count {
                if let Some(card) = core.table.pop_top(SimpleSolitaire::STOCK) {
                    core.table.push(SimpleSolitaire::WASTE, card);
                    core.deck.card_mut(card).face_down = false;
                }
            }
        });

        self.register_move(0);
        self.record_moves(batch);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    fn dealt_engine() -> GameEngine<SimpleSolitaire> {
        let mut engine = GameEngine::with_seed(SimpleSolitaire, 42);
        engine.deal();
        engine
    }

    #[test]
    fn test_layout_puts_everything_in_the_stock() {
        let engine = dealt_engine();
        let core = engine.core();

        assert_eq!(core.table.len(SimpleSolitaire::STOCK), DECK_SIZE);
        assert_eq!(core.table.total_cards(), DECK_SIZE);
        for &card in core.table.cards(SimpleSolitaire::STOCK) {
            assert!(core.deck.card(card).face_down);
        }
    }

    #[test]
    fn test_draw_turns_top_card_face_up_on_waste() {
        let mut engine = dealt_engine();
        let top = engine.core().table.top_card(SimpleSolitaire::STOCK).unwrap();

        assert!(engine.draw());

        let core = engine.core();
        assert_eq!(core.table.top_card(SimpleSolitaire::WASTE), Some(top));
        assert!(!core.deck.card(top).face_down);
        assert_eq!(engine.moves(), 1);
    }

    #[test]
    fn test_undo_draw_restores_stock() {
        let mut engine = dealt_engine();
        let before: Vec<_> = engine.core().table.cards(SimpleSolitaire::STOCK).to_vec();

        engine.draw();
        engine.undo_move();

        let core = engine.core();
        assert_eq!(core.table.cards(SimpleSolitaire::STOCK), before.as_slice());
        assert!(core.table.is_empty(SimpleSolitaire::WASTE));
        let top = *before.last().unwrap();
        assert!(core.deck.card(top).face_down);
    }

    #[test]
    fn test_recycle_restores_stock_order() {
        let mut engine = dealt_engine();
        let original: Vec<_> = engine.core().table.cards(SimpleSolitaire::STOCK).to_vec();

        for _ in 0..DECK_SIZE {
            assert!(engine.draw());
        }
        assert!(engine.core().table.is_empty(SimpleSolitaire::STOCK));

        // Next draw recycles.
        assert!(engine.draw());

        let core = engine.core();
        assert_eq!(core.table.cards(SimpleSolitaire::STOCK), original.as_slice());
        assert!(core.table.is_empty(SimpleSolitaire::WASTE));
    }

    #[test]
    fn test_undo_recycle_restores_waste() {
        let mut engine = dealt_engine();
        for _ in 0..DECK_SIZE {
            engine.draw();
        }
        let waste_before: Vec<_> = engine.core().table.cards(SimpleSolitaire::WASTE).to_vec();

        engine.draw(); // recycle
        engine.undo_move();

        let core = engine.core();
        assert_eq!(core.table.cards(SimpleSolitaire::WASTE), waste_before.as_slice());
        assert!(core.table.is_empty(SimpleSolitaire::STOCK));
    }

    #[test]
    fn test_draw_with_no_cards_anywhere_fails() {
        let mut engine = GameEngine::with_seed(SimpleSolitaire, 1);
        engine.deal();
        engine.core_mut().table.clear_cards();

        assert!(!engine.draw());
        assert_eq!(engine.moves(), 0);
    }

    #[test]
    fn test_only_ace_starts_a_foundation() {
        let mut engine = dealt_engine();
        let foundation = SimpleSolitaire::FOUNDATIONS[0];

        // Force a known card onto the waste.
        let core = engine.core_mut();
        core.table.clear_cards();
        core.table.push(SimpleSolitaire::WASTE, CardId::new(5));

        assert!(!engine.check_and_move_card(SimpleSolitaire::WASTE, foundation, CardId::new(5), false));

        let core = engine.core_mut();
        core.table.clear_cards();
        core.table.push(SimpleSolitaire::WASTE, CardId::new(0)); // ace of hearts

        assert!(engine.check_and_move_card(SimpleSolitaire::WASTE, foundation, CardId::new(0), false));
        assert_eq!(engine.score(), FOUNDATION_SCORE);
    }

    #[test]
    fn test_foundation_builds_same_suit_ascending() {
        let mut engine = dealt_engine();
        let foundation = SimpleSolitaire::FOUNDATIONS[0];

        let core = engine.core_mut();
        core.table.clear_cards();
        core.table.push(foundation, CardId::new(0)); // ace of hearts
        core.table.push(SimpleSolitaire::WASTE, CardId::new(14)); // two of diamonds

        // Wrong suit.
        assert!(!engine.check_and_move_card(SimpleSolitaire::WASTE, foundation, CardId::new(14), false));

        let core = engine.core_mut();
        core.table.clear_cards();
        core.table.push(foundation, CardId::new(0));
        core.table.push(SimpleSolitaire::WASTE, CardId::new(1)); // two of hearts

        assert!(engine.check_and_move_card(SimpleSolitaire::WASTE, foundation, CardId::new(1), false));
    }

    #[test]
    fn test_buried_waste_card_cannot_move() {
        let mut engine = dealt_engine();
        let foundation = SimpleSolitaire::FOUNDATIONS[0];

        let core = engine.core_mut();
        core.table.clear_cards();
        core.table.push(SimpleSolitaire::WASTE, CardId::new(0)); // buried ace
        core.table.push(SimpleSolitaire::WASTE, CardId::new(20));

        assert!(!engine.check_and_move_card(SimpleSolitaire::WASTE, foundation, CardId::new(0), false));
    }

    #[test]
    fn test_win_detected_on_last_foundation_card() {
        let mut engine = dealt_engine();
        let core = engine.core_mut();
        core.table.clear_cards();

        // Fill every foundation, holding back the king of spades.
        for (suit, &foundation) in SimpleSolitaire::FOUNDATIONS.iter().enumerate() {
            let base = suit as u8 * 13;
            let top = if suit == 3 { 12 } else { 13 };
            for rank in 0..top {
                core.table.push(foundation, CardId::new(base + rank));
            }
        }
        core.table.push(SimpleSolitaire::WASTE, CardId::new(51));

        assert!(!engine.is_won());
        assert!(engine.check_and_move_card(
            SimpleSolitaire::WASTE,
            SimpleSolitaire::FOUNDATIONS[3],
            CardId::new(51),
            false,
        ));
        assert!(engine.is_won());
    }
}
