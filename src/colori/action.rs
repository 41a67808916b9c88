use super::ability::Ability;
use super::color::Color;
use super::phase::Pending;
use super::phase::Phase;
use super::phase::Turn;
use super::state::GameState;
use crate::CardId;
use rand::prelude::*;

/// Action phase. The acting player destroys drafted cards to push their
/// abilities onto a stack, answers whatever prompt the stack raises,
/// and eventually ends the turn. Every method panics on input the
/// current prompt does not accept.
impl GameState {
    pub fn turn(&self) -> Option<&Turn> {
        match self.phase {
            Phase::Action(ref turn) => Some(turn),
            _ => None,
        }
    }
    pub fn pending(&self) -> Option<Pending> {
        self.turn().and_then(|turn| turn.pending)
    }

    fn turn_mut(&mut self) -> &mut Turn {
        match self.phase {
            Phase::Action(ref mut turn) => turn,
            _ => panic!("no action phase in progress"),
        }
    }
    fn require(&self, check: impl FnOnce(Option<Pending>) -> bool, what: &str) {
        assert!(check(self.pending()), "{} while {:?} pending", what, self.pending());
    }
    /// clear the answered prompt and keep resolving the stack
    fn answered(&mut self, rng: &mut impl Rng) {
        self.turn_mut().pending = None;
        self.resolve(rng);
    }

    /// pop abilities until one needs input or the stack is empty.
    fn resolve(&mut self, rng: &mut impl Rng) {
        loop {
            let turn = self.turn_mut();
            if turn.pending.is_some() {
                return;
            }
            let Some(ability) = turn.stack.pop() else {
                return;
            };
            let actor = turn.actor;
            log::trace!("player {} resolves {}", actor, ability);
            let player = &mut self.players[actor];
            let pending = match ability {
                Ability::Workshop { count } if !player.workshop.is_empty() => {
                    Some(Pending::Workshop { count })
                }
                Ability::Workshop { .. } => None,
                Ability::DrawCards { count } => {
                    player.draw(count, rng);
                    None
                }
                Ability::MixColors { count } if count > 0 => Some(Pending::Mix { remaining: count }),
                Ability::MixColors { .. } => None,
                Ability::DestroyCards { count } => Some(Pending::Destroy { count }),
                Ability::Sell => {
                    match self.buyer_display.iter().any(|c| player.affords(c)) {
                        true => Some(Pending::Buyer),
                        false => None,
                    }
                }
                Ability::GainDucats { count } => {
                    player.ducats += count;
                    None
                }
                Ability::GainSecondary => Some(Pending::Secondary),
                Ability::GainPrimary => Some(Pending::Primary),
                Ability::ChangeTertiary if !player.tertiaries().is_empty() => {
                    Some(Pending::LoseTertiary)
                }
                Ability::ChangeTertiary => None,
            };
            self.turn_mut().pending = pending;
        }
    }

    // ===== IDLE =====

    pub fn destroy_drafted(&mut self, id: CardId, rng: &mut impl Rng) {
        self.require(|p| p.is_none(), "destroy drafted card");
        let actor = self.turn_mut().actor;
        let card = self.players[actor].take_drafted(id);
        self.destroyed.push(card);
        self.turn_mut().stack.push(card.card.ability());
        self.resolve(rng);
    }

    pub fn end_turn(&mut self) {
        self.require(|p| p.is_none(), "end turn");
        let n = self.n();
        let starter = self.starter();
        let turn = self.turn_mut();
        let actor = turn.actor;
        let next = (actor + 1) % n;
        turn.actor = next;
        turn.stack.clear();
        turn.pending = None;
        let player = &mut self.players[actor];
        let mut spent = std::mem::take(&mut player.workshop);
        spent.append(&mut player.drafted);
        player.discard.append(&mut spent);
        if next == starter {
            self.end_round();
        }
    }

    // ===== PROMPTS =====

    /// store materials and pips of the chosen cards, or
    /// trigger a single action card's workshop effects.
    pub fn workshop(&mut self, ids: &[CardId], rng: &mut impl Rng) {
        let Some(Pending::Workshop { count }) = self.pending() else {
            panic!("workshop while {:?} pending", self.pending())
        };
        assert!(!ids.is_empty(), "workshop nothing");
        let actor = self.turn_mut().actor;
        let cards = ids
            .iter()
            .map(|id| self.players[actor].take_workshop(*id))
            .collect::<Vec<_>>();
        let actions = cards.iter().filter(|c| c.card.is_action()).count();
        assert!(
            (actions == 0 && cards.len() <= count) || (actions == 1 && cards.len() == 1),
            "illegal workshop selection {:?}",
            ids
        );
        let player = &mut self.players[actor];
        let mut effects = Vec::new();
        for card in cards {
            match card.card.is_action() {
                true => effects.extend(card.card.workshop().iter().rev().copied()),
                false => {
                    card.card.materials().iter().for_each(|m| player.materials.add(*m));
                    card.card.pips().iter().for_each(|c| player.wheel.add(*c, 1));
                }
            }
            player.discard.push(card);
        }
        self.turn_mut().stack.extend(effects);
        self.answered(rng);
    }

    pub fn skip_workshop(&mut self, rng: &mut impl Rng) {
        self.require(|p| matches!(p, Some(Pending::Workshop { .. })), "skip workshop");
        self.answered(rng);
    }

    /// destroy drawn cards, pushing each one's ability.
    pub fn destroy_drawn(&mut self, ids: &[CardId], rng: &mut impl Rng) {
        let Some(Pending::Destroy { count }) = self.pending() else {
            panic!("destroy drawn while {:?} pending", self.pending())
        };
        assert!(ids.len() <= count, "destroying {} of {}", ids.len(), count);
        let actor = self.turn_mut().actor;
        for id in ids {
            let card = self.players[actor].take_workshop(*id);
            self.destroyed.push(card);
            self.turn_mut().stack.push(card.card.ability());
        }
        self.answered(rng);
    }

    pub fn mix(&mut self, a: Color, b: Color, rng: &mut impl Rng) {
        let Some(Pending::Mix { remaining }) = self.pending() else {
            panic!("mix while {:?} pending", self.pending())
        };
        let actor = self.turn_mut().actor;
        self.players[actor].wheel.mix(a, b);
        match remaining {
            1 => self.answered(rng),
            _ => self.turn_mut().pending = Some(Pending::Mix { remaining: remaining - 1 }),
        }
    }

    pub fn skip_mix(&mut self, rng: &mut impl Rng) {
        self.require(|p| matches!(p, Some(Pending::Mix { .. })), "skip mix");
        self.answered(rng);
    }

    /// pay for a displayed buyer and refill the display.
    pub fn sell(&mut self, id: CardId, rng: &mut impl Rng) {
        self.require(|p| p == Some(Pending::Buyer), "sell");
        let actor = self.turn_mut().actor;
        let index = self
            .buyer_display
            .iter()
            .position(|c| c.id == id)
            .unwrap_or_else(|| panic!("buyer {} not displayed", id));
        let contract = self.buyer_display.remove(index);
        let player = &mut self.players[actor];
        assert!(player.affords(&contract), "cannot afford {}", contract);
        player.materials.remove(contract.buyer.material);
        player.wheel.pay(&contract.buyer.cost);
        log::trace!("player {} sells to {}", actor, contract);
        player.buyers.push(contract);
        self.buyer_display.extend(self.buyer_deck.pop());
        self.answered(rng);
    }

    pub fn gain_secondary(&mut self, color: Color, rng: &mut impl Rng) {
        self.require(|p| p == Some(Pending::Secondary), "gain secondary");
        assert!(color.is_secondary(), "{} is not secondary", color);
        let actor = self.turn_mut().actor;
        self.players[actor].wheel.add(color, 1);
        self.answered(rng);
    }

    pub fn gain_primary(&mut self, color: Color, rng: &mut impl Rng) {
        self.require(|p| p == Some(Pending::Primary), "gain primary");
        assert!(color.is_primary(), "{} is not primary", color);
        let actor = self.turn_mut().actor;
        self.players[actor].wheel.add(color, 1);
        self.answered(rng);
    }

    pub fn lose_tertiary(&mut self, color: Color) {
        self.require(|p| p == Some(Pending::LoseTertiary), "lose tertiary");
        assert!(color.is_tertiary(), "{} is not tertiary", color);
        let turn = self.turn_mut();
        let actor = turn.actor;
        turn.pending = Some(Pending::GainTertiary { lost: color });
        assert!(self.players[actor].wheel.remove(color), "no {} to lose", color);
    }

    pub fn gain_tertiary(&mut self, color: Color, rng: &mut impl Rng) {
        let Some(Pending::GainTertiary { lost }) = self.pending() else {
            panic!("gain tertiary while {:?} pending", self.pending())
        };
        assert!(color.is_tertiary() && color != lost, "cannot swap {} for {}", lost, color);
        let actor = self.turn_mut().actor;
        self.players[actor].wheel.add(color, 1);
        self.answered(rng);
    }
}
