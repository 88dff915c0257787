//! Game-session state machine.
//!
//! `GameSession` is plain in-memory state: status, the drawn-ball
//! sequence, and the winner once there is one. The caller persists it
//! and serializes access per room; nothing here locks.
//!
//! The drawn-ball list is append-only while a game is active, never
//! repeats a number, and is cleared when a game (re)starts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::Card;
use crate::core::{GameRng, PlayerId, Variant};
use crate::error::EngineError;
use crate::win::{evaluate, first_winner, MarkSource, WinVerdict};

/// Lifecycle of a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created, not yet started.
    Waiting,
    /// Balls are being drawn.
    Active,
    /// Temporarily halted; drawn balls are kept.
    Paused,
    /// Finished, possibly with a winner.
    Ended,
}

/// One room's game state: status, drawn balls, winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    variant: Variant,
    status: GameStatus,
    drawn: Vec<u8>,
    winner: Option<PlayerId>,
}

impl GameSession {
    /// Create a session in the `Waiting` state.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            status: GameStatus::Waiting,
            drawn: Vec::new(),
            winner: None,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Balls drawn so far, in draw order.
    #[must_use]
    pub fn drawn_balls(&self) -> &[u8] {
        &self.drawn
    }

    /// Whether a ball has been drawn.
    #[must_use]
    pub fn is_drawn(&self, ball: u8) -> bool {
        self.drawn.contains(&ball)
    }

    /// Balls still in the cage.
    #[must_use]
    pub fn remaining_balls(&self) -> usize {
        self.variant.max_ball() as usize - self.drawn.len()
    }

    /// Start (or restart) the game.
    ///
    /// Restarting from `Paused` or `Ended` clears the drawn balls and the
    /// winner. Starting an already-active game is an error.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.status == GameStatus::Active {
            return Err(EngineError::GameAlreadyActive);
        }
        self.status = GameStatus::Active;
        self.drawn.clear();
        self.winner = None;
        Ok(())
    }

    /// Pause an active game, keeping its drawn balls.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        if self.status != GameStatus::Active {
            return Err(EngineError::NoActiveGame);
        }
        self.status = GameStatus::Paused;
        Ok(())
    }

    /// End the game unconditionally.
    pub fn end(&mut self) {
        self.status = GameStatus::Ended;
    }

    /// Draw one ball uniformly from those not yet drawn.
    pub fn draw_ball(&mut self, rng: &mut GameRng) -> Result<u8, EngineError> {
        if self.status != GameStatus::Active {
            return Err(EngineError::NoActiveGame);
        }

        let undrawn: Vec<u8> = (1..=self.variant.max_ball())
            .filter(|b| !self.drawn.contains(b))
            .collect();
        let ball = *rng.choose(&undrawn).ok_or(EngineError::BallsExhausted)?;

        self.drawn.push(ball);
        debug!(ball, drawn = self.drawn.len(), "ball drawn");
        Ok(ball)
    }

    /// Apply a client-reported mark update and check the card for a win.
    ///
    /// Marking a number that has not been drawn is rejected; unmarking is
    /// always allowed (players may retract) except for the free cell. A
    /// verdict ends the session and records the winner.
    pub fn update_mark(
        &mut self,
        card: &mut Card,
        position: usize,
        marked: bool,
    ) -> Result<Option<WinVerdict>, EngineError> {
        let number = card
            .number_at(position)
            .ok_or(EngineError::InvalidPosition(position))?;
        if marked && number > 0 && !self.is_drawn(number) {
            return Err(EngineError::NumberNotDrawn(number));
        }

        card.set_mark(position, marked)?;

        let verdict = evaluate(card, &self.drawn, MarkSource::ClientMarks)?;
        if let Some(win) = &verdict {
            self.record_win(win);
        }
        Ok(verdict)
    }

    /// Scan all cards (in the given, typically creation, order) against
    /// the authoritative drawn-ball list. The first winner ends the
    /// session.
    pub fn check_wins_after_draw<'a, I>(&mut self, cards: I) -> Result<Option<WinVerdict>, EngineError>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        if self.status != GameStatus::Active {
            return Err(EngineError::NoActiveGame);
        }

        let verdict = first_winner(cards, &self.drawn)?;
        if let Some(win) = &verdict {
            self.record_win(win);
        }
        Ok(verdict)
    }

    fn record_win(&mut self, verdict: &WinVerdict) {
        self.status = GameStatus::Ended;
        self.winner = Some(verdict.player);
        debug!(card = %verdict.card, player = %verdict.player, pattern = %verdict.pattern, "game won");
    }
}
