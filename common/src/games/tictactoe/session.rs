use crate::config::Validate;
use crate::games::{GameBroadcaster, GameOverNotification, MoveUpdate, SessionRng};
use crate::{log, log_error};
use super::bot_controller::{BotDecision, BotInput, analyze};
use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::scoreboard::Scoreboard;
use super::settings::{DEFAULT_BOT_NAME, TicTacToeSessionSettings};
use super::types::{FirstPlayerMode, GameMode, Mark, Position};

pub const HOST_SEAT: usize = 0;
pub const GUEST_SEAT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub is_bot: bool,
}

/// Owns the game state for a series of games between two seats. Marks are
/// reassigned on every new game; the scoreboard carries over.
pub struct TicTacToeSession<B: GameBroadcaster> {
    settings: TicTacToeSessionSettings,
    seats: [Seat; 2],
    x_seat: usize,
    game_state: TicTacToeGameState,
    scoreboard: Scoreboard,
    rng: SessionRng,
    broadcaster: B,
    last_decision: Option<BotDecision>,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(
        settings: TicTacToeSessionSettings,
        rng: SessionRng,
        broadcaster: B,
    ) -> Result<Self, String> {
        settings.validate()?;

        let guest = match settings.mode {
            GameMode::VersusBot => Seat {
                name: DEFAULT_BOT_NAME.to_string(),
                is_bot: true,
            },
            GameMode::TwoPlayers => Seat {
                name: settings.guest_name.trim().to_string(),
                is_bot: false,
            },
        };
        let host = Seat {
            name: settings.host_name.trim().to_string(),
            is_bot: false,
        };

        let mut session = Self {
            settings,
            seats: [host, guest],
            x_seat: HOST_SEAT,
            game_state: TicTacToeGameState::new(),
            scoreboard: Scoreboard::new(),
            rng,
            broadcaster,
            last_decision: None,
        };
        session.start_new_game();
        Ok(session)
    }

    pub fn start_new_game(&mut self) {
        self.game_state.reset();
        self.last_decision = None;
        self.x_seat = match self.settings.first_player_mode {
            FirstPlayerMode::Host => HOST_SEAT,
            FirstPlayerMode::Random => {
                if self.rng.random_bool() {
                    HOST_SEAT
                } else {
                    GUEST_SEAT
                }
            }
        };

        log!(
            "New game ({}): {} plays X, {} plays O",
            self.settings.mode,
            self.seats[self.x_seat].name,
            self.seats[1 - self.x_seat].name
        );
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn reset_scoreboard(&mut self) {
        self.scoreboard.reset();
    }

    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn last_decision(&self) -> Option<BotDecision> {
        self.last_decision
    }

    pub fn seat_index_for_mark(&self, mark: Mark) -> Option<usize> {
        match mark {
            Mark::X => Some(self.x_seat),
            Mark::O => Some(1 - self.x_seat),
            Mark::Empty => None,
        }
    }

    pub fn seat_for_mark(&self, mark: Mark) -> Option<&Seat> {
        self.seat_index_for_mark(mark).map(|index| &self.seats[index])
    }

    pub fn mark_for_seat(&self, seat: usize) -> Mark {
        if seat == self.x_seat { Mark::X } else { Mark::O }
    }

    /// The seat to move, or `None` once the game is over.
    pub fn current_seat_index(&self) -> Option<usize> {
        if self.game_state.is_finished() {
            return None;
        }
        self.seat_index_for_mark(self.game_state.current_mark)
    }

    pub fn current_seat(&self) -> Option<&Seat> {
        self.current_seat_index().map(|index| &self.seats[index])
    }

    pub fn is_bot_turn(&self) -> bool {
        self.current_seat().is_some_and(|seat| seat.is_bot)
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_seat().is_some_and(|seat| !seat.is_bot)
    }

    pub fn handle_human_move(&mut self, position: Position) -> Result<(), MoveError> {
        if self.game_state.is_finished() {
            return Err(MoveError::GameOver);
        }
        if self.is_bot_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.apply_move(position)
    }

    /// Searches and plays the bot's move. Does nothing when it is not the
    /// bot's turn.
    pub fn play_bot_turn(&mut self) -> Option<BotDecision> {
        if !self.is_bot_turn() {
            return None;
        }

        let decision = analyze(&BotInput::from_game_state(&self.game_state))?;
        log!(
            "Bot plays {} at {} (score {}, {} nodes)",
            self.game_state.current_mark,
            decision.position,
            decision.score,
            decision.nodes_visited
        );

        if let Err(e) = self.apply_move(decision.position) {
            log_error!("Bot move rejected: {}", e);
            return None;
        }

        self.last_decision = Some(decision);
        Some(decision)
    }

    fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        let mark = self.game_state.current_mark;
        let seat_index = self.current_seat_index().ok_or(MoveError::GameOver)?;

        self.game_state.place_mark(position)?;

        let seat = &self.seats[seat_index];
        self.broadcaster.broadcast_move(MoveUpdate {
            mark,
            position,
            player_name: seat.name.clone(),
            by_bot: seat.is_bot,
        });

        if self.game_state.is_finished() {
            self.finish_game();
        }

        Ok(())
    }

    fn finish_game(&mut self) {
        let status = self.game_state.status;
        let winner_name = match status.winner().and_then(|mark| self.seat_index_for_mark(mark)) {
            Some(seat_index) => {
                self.scoreboard.record_win(seat_index);
                Some(self.seats[seat_index].name.clone())
            }
            None => {
                self.scoreboard.record_draw();
                None
            }
        };

        match winner_name {
            Some(ref name) => log!("Game over: {} wins ({})", name, status),
            None => log!("Game over: draw"),
        }

        self.broadcaster.broadcast_game_over(GameOverNotification {
            status,
            winning_line: self.game_state.winning_line,
            winner_name,
            scoreboard: self.scoreboard,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameStatus;

    #[derive(Default)]
    struct RecordingBroadcaster {
        moves: Vec<MoveUpdate>,
        game_overs: Vec<GameOverNotification>,
    }

    impl GameBroadcaster for RecordingBroadcaster {
        fn broadcast_move(&mut self, update: MoveUpdate) {
            self.moves.push(update);
        }

        fn broadcast_game_over(&mut self, notification: GameOverNotification) {
            self.game_overs.push(notification);
        }
    }

    fn versus_bot(first_player_mode: FirstPlayerMode, seed: u64) -> TicTacToeSession<RecordingBroadcaster> {
        let settings = TicTacToeSessionSettings::versus_bot("Alice")
            .with_first_player_mode(first_player_mode);
        TicTacToeSession::new(settings, SessionRng::new(seed), RecordingBroadcaster::default())
            .unwrap()
    }

    fn two_players() -> TicTacToeSession<RecordingBroadcaster> {
        let settings = TicTacToeSessionSettings::two_players("Alice", "Bob");
        TicTacToeSession::new(settings, SessionRng::new(1), RecordingBroadcaster::default())
            .unwrap()
    }

    /// Human always takes the lowest free cell; the bot answers each move.
    fn play_naive_human_game(session: &mut TicTacToeSession<RecordingBroadcaster>) {
        while !session.game_state().is_finished() {
            if session.is_bot_turn() {
                assert!(session.play_bot_turn().is_some());
            } else {
                let position = session.game_state().board.available_moves()[0];
                session.handle_human_move(position).unwrap();
            }
        }
    }

    #[test]
    fn test_host_moves_first_with_x() {
        let session = versus_bot(FirstPlayerMode::Host, 0);
        assert_eq!(session.mark_for_seat(HOST_SEAT), Mark::X);
        assert!(session.is_human_turn());
        assert_eq!(session.current_seat().unwrap().name, "Alice");
        assert_eq!(session.seats()[GUEST_SEAT].name, DEFAULT_BOT_NAME);
    }

    #[test]
    fn test_bot_answers_human_move() {
        let mut session = versus_bot(FirstPlayerMode::Host, 0);
        session.handle_human_move(Position::new(0)).unwrap();
        assert!(session.is_bot_turn());

        let decision = session.play_bot_turn().unwrap();
        assert_eq!(session.game_state().board.get(decision.position), Some(Mark::O));
        assert_eq!(session.last_decision(), Some(decision));
        assert!(session.is_human_turn());

        let moves = &session.broadcaster().moves;
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].player_name, "Alice");
        assert!(!moves[0].by_bot);
        assert_eq!(moves[1].mark, Mark::O);
        assert!(moves[1].by_bot);
    }

    #[test]
    fn test_human_cannot_move_on_bot_turn() {
        let mut session = versus_bot(FirstPlayerMode::Host, 0);
        session.handle_human_move(Position::new(4)).unwrap();
        let err = session.handle_human_move(Position::new(0)).unwrap_err();
        assert_eq!(err, MoveError::NotYourTurn);
        assert_eq!(session.game_state().board.get(Position::new(0)), Some(Mark::Empty));
    }

    #[test]
    fn test_invalid_human_move_is_rejected_without_events() {
        let mut session = versus_bot(FirstPlayerMode::Host, 0);
        let err = session.handle_human_move(Position::new(12)).unwrap_err();
        assert!(err.is_invalid_move());
        assert!(session.broadcaster().moves.is_empty());
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_bot_does_not_move_on_human_turn() {
        let mut session = versus_bot(FirstPlayerMode::Host, 0);
        assert_eq!(session.play_bot_turn(), None);
        assert_eq!(session.game_state().board.available_moves().len(), 9);
    }

    #[test]
    fn test_random_first_player_assigns_both_ways() {
        let mut bot_first = 0;
        let mut host_first = 0;
        for seed in 0..64 {
            let session = versus_bot(FirstPlayerMode::Random, seed);
            if session.is_bot_turn() {
                assert_eq!(session.mark_for_seat(GUEST_SEAT), Mark::X);
                bot_first += 1;
            } else {
                assert_eq!(session.mark_for_seat(HOST_SEAT), Mark::X);
                host_first += 1;
            }
        }
        assert!(bot_first > 0);
        assert!(host_first > 0);
    }

    #[test]
    fn test_naive_human_never_beats_bot() {
        for seed in 0..8 {
            let mut session = versus_bot(FirstPlayerMode::Random, seed);
            play_naive_human_game(&mut session);

            let scoreboard = session.scoreboard();
            assert_eq!(scoreboard.games_played(), 1);
            assert_eq!(scoreboard.wins(HOST_SEAT), 0);

            let game_overs = &session.broadcaster().game_overs;
            assert_eq!(game_overs.len(), 1);
            assert_ne!(game_overs[0].winner_name.as_deref(), Some("Alice"));
        }
    }

    #[test]
    fn test_finished_game_rejects_moves_until_restart() {
        let mut session = versus_bot(FirstPlayerMode::Host, 0);
        play_naive_human_game(&mut session);

        let free = session.game_state().board.available_moves();
        if let Some(&position) = free.first() {
            assert_eq!(session.handle_human_move(position), Err(MoveError::GameOver));
        }
        assert_eq!(session.play_bot_turn(), None);
        assert!(session.current_seat().is_none());

        session.start_new_game();
        assert_eq!(session.game_state().status, GameStatus::InProgress);
        assert_eq!(session.scoreboard().games_played(), 1);
        assert!(session.last_decision().is_none());
    }

    #[test]
    fn test_two_player_game_records_winner() {
        let mut session = two_players();
        assert!(!session.is_bot_turn());
        for index in [0, 3, 1, 4, 2] {
            session.handle_human_move(Position::new(index)).unwrap();
        }

        assert_eq!(session.game_state().status, GameStatus::XWon);
        assert_eq!(session.scoreboard().wins(HOST_SEAT), 1);

        let notification = &session.broadcaster().game_overs[0];
        assert_eq!(notification.winner_name.as_deref(), Some("Alice"));
        assert_eq!(notification.winning_line.unwrap().cells.map(Position::index), [0, 1, 2]);
        assert_eq!(notification.scoreboard.wins(HOST_SEAT), 1);
    }

    #[test]
    fn test_two_player_draw_is_recorded() {
        let mut session = two_players();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.handle_human_move(Position::new(index)).unwrap();
        }
        assert_eq!(session.scoreboard().draws(), 1);
        assert_eq!(session.broadcaster().game_overs[0].winner_name, None);
    }

    #[test]
    fn test_reset_scoreboard() {
        let mut session = two_players();
        for index in [0, 3, 1, 4, 2] {
            session.handle_human_move(Position::new(index)).unwrap();
        }
        session.reset_scoreboard();
        assert_eq!(session.scoreboard().games_played(), 0);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = TicTacToeSessionSettings::two_players("Alice", "");
        let result = TicTacToeSession::new(settings, SessionRng::new(0), RecordingBroadcaster::default());
        assert!(result.is_err());
    }
}
