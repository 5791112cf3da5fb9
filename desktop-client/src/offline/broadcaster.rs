use common::games::{GameBroadcaster, GameOverNotification, MoveUpdate};
use common::games::tictactoe::GameStatus;
use ringbuffer::{AllocRingBuffer, RingBuffer};

/// Keeps the most recent session events for the info panel and holds the
/// game-over notification until the UI picks it up.
pub struct LocalBroadcaster {
    event_log: AllocRingBuffer<String>,
    pending_game_over: Option<GameOverNotification>,
}

impl LocalBroadcaster {
    pub fn new(capacity: usize) -> Self {
        Self {
            event_log: AllocRingBuffer::new(capacity),
            pending_game_over: None,
        }
    }

    pub fn push_event(&mut self, message: impl Into<String>) {
        self.event_log.enqueue(message.into());
    }

    pub fn event_log(&self) -> &AllocRingBuffer<String> {
        &self.event_log
    }

    pub fn take_game_over(&mut self) -> Option<GameOverNotification> {
        self.pending_game_over.take()
    }
}

impl GameBroadcaster for LocalBroadcaster {
    fn broadcast_move(&mut self, update: MoveUpdate) {
        let bot_marker = if update.by_bot { " (Bot)" } else { "" };
        self.push_event(format!(
            "{}{} placed {} at {}",
            update.player_name, bot_marker, update.mark, update.position
        ));
    }

    fn broadcast_game_over(&mut self, notification: GameOverNotification) {
        match (&notification.winner_name, notification.status) {
            (Some(name), status) => self.push_event(format!("{} wins ({})", name, status)),
            (None, GameStatus::Draw) => self.push_event("Draw"),
            (None, status) => self.push_event(format!("Game over ({})", status)),
        }
        self.pending_game_over = Some(notification);
    }
}
