use crate::error::DealerError;
use crate::hand::HandValue;
use crate::options::RoundingMode;
use crate::outcome::{Outcome, RoundSummary};

use super::{DealerStep, DealerTicket, Phase, Table};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Table {
    /// Whether the dealer policy calls for another card.
    ///
    /// Draws strictly below 17; a soft 17 also draws unless
    /// `stand_on_soft_17` is set.
    fn dealer_must_draw(&self, value: HandValue) -> bool {
        if value.total > 17 {
            return false;
        }
        if value.total == 17 && (!value.is_soft || self.options.stand_on_soft_17) {
            return false;
        }
        true
    }

    /// Runs one step of dealer play.
    ///
    /// Draws at most one card per call so each hit is independently
    /// observable; the policy's stopping test is re-evaluated on every
    /// step, never precomputed. When the dealer stands or busts the round
    /// settles and the summary is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DealerError::Cancelled`] for a ticket from a round that
    /// was since reset, and [`DealerError::InvalidState`] outside the
    /// dealer's turn.
    pub fn dealer_step(&mut self, ticket: DealerTicket) -> Result<DealerStep, DealerError> {
        if ticket.round != self.round {
            return Err(DealerError::Cancelled);
        }
        if self.phase != Phase::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let value = self.dealer.value();
        if self.dealer_must_draw(value) {
            let card = self.draw_card();
            self.dealer.add_card(card);
            Ok(DealerStep::Drew(card))
        } else {
            Ok(DealerStep::Settled(self.showdown()))
        }
    }

    /// Runs dealer play to settlement without pacing.
    ///
    /// Equivalent to stepping [`dealer_step`](Self::dealer_step) until it
    /// settles.
    ///
    /// # Errors
    ///
    /// As [`dealer_step`](Self::dealer_step).
    pub fn dealer_play(&mut self, ticket: DealerTicket) -> Result<RoundSummary, DealerError> {
        loop {
            if let DealerStep::Settled(summary) = self.dealer_step(ticket)? {
                return Ok(summary);
            }
        }
    }

    /// Compares the final hands and settles.
    fn showdown(&mut self) -> RoundSummary {
        let dealer = self.dealer.value();
        let player = self.player.value();

        let outcome = if dealer.is_bust {
            Outcome::DealerBust
        } else if player.total > dealer.total {
            Outcome::PlayerWin
        } else if dealer.total > player.total {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };

        self.settle(outcome)
    }

    /// Resolves the round: reveals the hole card, credits the payout,
    /// sets the status line and enters the resolved phase.
    pub(super) fn settle(&mut self, outcome: Outcome) -> RoundSummary {
        self.dealer.reveal_hole();

        let bet = self.bet.unwrap_or(0);
        let payout = self.payout(outcome, bet);
        self.bankroll += payout;
        self.phase = Phase::Resolved;
        self.message = outcome.message();

        RoundSummary {
            outcome,
            bet,
            payout,
            player_total: self.player.value().total,
            dealer_total: self.dealer.value().total,
        }
    }

    /// The payout credited for an outcome, stake included where returned.
    fn payout(&self, outcome: Outcome, bet: usize) -> usize {
        match outcome {
            Outcome::PlayerBust | Outcome::DealerWin => 0,
            Outcome::DealerBust | Outcome::PlayerWin => bet * 2,
            Outcome::Push => bet,
            Outcome::PlayerBlackjack => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (bet as f64) * self.options.blackjack_pays;
                bet + round_amount(winnings, self.options.rounding_blackjack)
            }
        }
    }
}
