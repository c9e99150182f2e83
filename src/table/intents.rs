use crate::bet;
use crate::card::Card;
use crate::error::{ActionError, BetError};
use crate::outcome::Outcome;

use super::{
    DealerTicket, MSG_DEALER_TURN, MSG_INVALID_BET, MSG_PLACE_BET, MSG_PLAYER_TURN, Phase, Table,
};

impl Table {
    /// Places a bet and deals the opening hands.
    ///
    /// On success the bankroll is debited and four cards are dealt in the
    /// order player, dealer, player, dealer. A dealt blackjack resolves
    /// the round on the spot; otherwise the player acts next.
    ///
    /// A rejected bet leaves the table in betting with the status line set
    /// to "Invalid bet amount" and nothing else changed.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InvalidState`] outside the betting phase,
    /// [`BetError::NonPositive`] for a zero amount, or
    /// [`BetError::InsufficientFunds`] for a bet exceeding the bankroll.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }

        let amount = match bet::validate(amount, self.bankroll) {
            Ok(amount) => amount,
            Err(err) => {
                self.message = MSG_INVALID_BET;
                return Err(err);
            }
        };

        self.bankroll -= amount;
        self.bet = Some(amount);

        self.player.clear();
        self.dealer.clear();

        // Opening deal: player, dealer, player, dealer.
        for _ in 0..2 {
            let card = self.draw_card();
            self.player.add_card(card);
            let card = self.draw_card();
            self.dealer.add_card(card);
        }

        if self.player.value().is_blackjack {
            // The dealer's hand is not examined here.
            self.settle(Outcome::PlayerBlackjack);
        } else {
            self.phase = Phase::PlayerTurn;
            self.message = MSG_PLAYER_TURN;
        }

        Ok(())
    }

    /// Parses number-like bet input and places the bet.
    ///
    /// Junk input is rejected at the boundary with the same status line as
    /// any other invalid bet, never coerced.
    ///
    /// # Errors
    ///
    /// As [`Self::place_bet`], plus [`BetError::NotANumber`] for input
    /// that does not parse as an integer and [`BetError::NonPositive`]
    /// for negative amounts.
    pub fn place_bet_str(&mut self, raw: &str) -> Result<(), BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }

        match bet::parse(raw) {
            Ok(amount) => self.place_bet(amount),
            Err(err) => {
                self.message = MSG_INVALID_BET;
                Err(err)
            }
        }
    }

    /// Player action: hit.
    ///
    /// Draws one card into the player's hand and returns it. A bust
    /// resolves the round immediately with the bet forfeited; otherwise
    /// the player may act again, even on 21.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.draw_card();
        self.player.add_card(card);

        if self.player.value().is_bust {
            self.settle(Outcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: stand.
    ///
    /// Reveals the hole card, enters the dealer's turn and returns the
    /// ticket that schedules dealer play. The host drives
    /// [`dealer_step`](Self::dealer_step) with it, pacing calls by
    /// [`dealer_step_delay`](crate::TableOptions::dealer_step_delay).
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] outside the player's turn.
    pub fn stand(&mut self) -> Result<DealerTicket, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.phase = Phase::DealerTurn;
        self.message = MSG_DEALER_TURN;
        self.dealer.reveal_hole();

        Ok(DealerTicket { round: self.round })
    }

    /// Resets the table for the next round.
    ///
    /// Clears both hands and the bet and returns to betting; the bankroll
    /// carries over and the shoe is replaced only when exhausted.
    /// Callable from the resolved phase, or from the dealer's turn to
    /// abort a pending dealer sequence; outstanding tickets are
    /// invalidated either way, so a stale scheduled step can never reach
    /// the new round.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] during betting or the
    /// player's turn.
    pub fn play_again(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Resolved | Phase::DealerTurn) {
            return Err(ActionError::InvalidState);
        }

        self.round += 1;
        self.player.clear();
        self.dealer.clear();
        self.bet = None;

        if self.shoe.is_empty() {
            self.replace_shoe();
        }

        self.phase = Phase::Betting;
        self.message = MSG_PLACE_BET;

        Ok(())
    }
}
