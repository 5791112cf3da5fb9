use std::time::{Duration, Instant};

use common::games::{GameOverNotification, SessionRng};
use common::games::tictactoe::{Mark, MoveError, Position, TicTacToeSession, TicTacToeSessionSettings};

use crate::constants::EVENT_LOG_SIZE;
use super::LocalBroadcaster;

/// A session played on this machine. The bot waits `bot_delay` before
/// answering; the UI drives it by calling `update` every frame.
pub struct LocalGame {
    session: TicTacToeSession<LocalBroadcaster>,
    bot_delay: Duration,
    bot_turn_started: Option<Instant>,
}

impl LocalGame {
    pub fn new(
        settings: TicTacToeSessionSettings,
        seed: Option<u64>,
        bot_delay: Duration,
        now: Instant,
    ) -> Result<Self, String> {
        let rng = seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
        let session = TicTacToeSession::new(settings, rng, LocalBroadcaster::new(EVENT_LOG_SIZE))?;

        let mut game = Self {
            session,
            bot_delay,
            bot_turn_started: None,
        };
        game.announce_new_game();
        game.schedule_bot_turn(now);
        Ok(game)
    }

    pub fn session(&self) -> &TicTacToeSession<LocalBroadcaster> {
        &self.session
    }

    pub fn restart(&mut self, now: Instant) {
        self.session.start_new_game();
        self.announce_new_game();
        self.schedule_bot_turn(now);
    }

    pub fn click_cell(&mut self, position: Position, now: Instant) -> Result<(), MoveError> {
        self.session.handle_human_move(position)?;
        self.schedule_bot_turn(now);
        Ok(())
    }

    pub fn reset_scoreboard(&mut self) {
        self.session.reset_scoreboard();
        self.session.broadcaster_mut().push_event("Score reset");
    }

    pub fn is_bot_thinking(&self) -> bool {
        self.bot_turn_started.is_some()
    }

    /// Plays the pending bot move once its delay has passed. Returns the
    /// time still left when the bot is waiting.
    pub fn update(&mut self, now: Instant) -> Option<Duration> {
        let started = self.bot_turn_started?;
        let elapsed = now.saturating_duration_since(started);
        if elapsed < self.bot_delay {
            return Some(self.bot_delay - elapsed);
        }

        self.bot_turn_started = None;
        self.session.play_bot_turn();
        None
    }

    pub fn take_game_over(&mut self) -> Option<GameOverNotification> {
        self.session.broadcaster_mut().take_game_over()
    }

    fn schedule_bot_turn(&mut self, now: Instant) {
        self.bot_turn_started = self.session.is_bot_turn().then_some(now);
    }

    fn announce_new_game(&mut self) {
        let Some(x_name) = self.session.seat_for_mark(Mark::X).map(|seat| seat.name.clone()) else {
            return;
        };
        self.session
            .broadcaster_mut()
            .push_event(format!("New game, {} plays X", x_name));
    }
}
