use common::games::tictactoe::{BOARD_SIDE, Mark, Position, TicTacToeGameState, WinningLine};
use eframe::egui;
use ringbuffer::RingBuffer;

use crate::offline::LocalGame;

pub struct TicTacToeGameUi {
    last_hover: Option<Position>,
}

impl TicTacToeGameUi {
    const BOARD_PADDING: f32 = 40.0;
    const INFO_PANEL_WIDTH: f32 = 240.0;
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_ANIMATION_SECS: f32 = 0.42;
    const WIN_LINE_ANIMATION_SECS: f32 = 0.5;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    pub fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let available_board_width =
            available_width - Self::INFO_PANEL_WIDTH - (Self::BOARD_PADDING * 2.0);
        let available_board_height = available_height - (Self::BOARD_PADDING * 2.0);

        let cell_size = available_board_width.min(available_board_height) / BOARD_SIDE as f32;

        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Draws the board and returns the cell the player clicked, if any.
    /// Clicks are only reported while `accepts_input` is set.
    pub fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        cell_size: f32,
        accepts_input: bool,
    ) -> Option<Position> {
        let board_size = cell_size * BOARD_SIDE as f32;
        let sense = if accepts_input { egui::Sense::click() } else { egui::Sense::hover() };

        let (rect, response) = ui.allocate_exact_size(egui::vec2(board_size, board_size), sense);

        let ctx = ui.ctx().clone();
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        self.last_hover = None;
        if accepts_input
            && let Some(hover_pos) = response.hover_pos()
        {
            let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
            let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

            if col < BOARD_SIDE && row < BOARD_SIDE {
                let position = Position::from_row_col(row, col);
                if state.board.get(position) == Some(Mark::Empty) {
                    painter.rect_filled(
                        Self::cell_rect(rect, position, cell_size),
                        0.0,
                        egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                    );
                }
                self.last_hover = Some(position);
            }
        }

        // Empty cells animate towards 0, so a freshly placed mark grows from there.
        for position in Position::all() {
            let mark = state.board.get(position).unwrap_or(Mark::Empty);
            let progress = ctx.animate_bool_with_time(
                egui::Id::new(("tictactoe_cell", position.index())),
                !mark.is_empty(),
                Self::MARK_ANIMATION_SECS,
            );
            let (cell_rect, opacity) = mark_transform(Self::cell_rect(rect, position, cell_size), progress);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect, opacity),
                Mark::O => self.draw_o(painter, cell_rect, opacity),
                Mark::Empty => {}
            }
        }

        let line_progress = ctx.animate_bool_with_time(
            egui::Id::new("tictactoe_winning_line"),
            state.winning_line.is_some(),
            Self::WIN_LINE_ANIMATION_SECS,
        );
        if let Some(line) = state.winning_line {
            Self::draw_winning_line(painter, rect, line, cell_size, line_progress);
        }

        if accepts_input && response.clicked() {
            return self.last_hover;
        }
        None
    }

    fn cell_rect(board_rect: egui::Rect, position: Position, cell_size: f32) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + position.col() as f32 * cell_size,
                board_rect.top() + position.row() as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect, opacity: f32) {
        let padding = rect.width() * 0.2;
        let color = egui::Color32::from_rgb(220, 50, 50).gamma_multiply(opacity);
        let stroke = egui::Stroke::new(4.0, color);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect, opacity: f32) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let color = egui::Color32::from_rgb(50, 50, 220).gamma_multiply(opacity);

        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(4.0, color));
    }

    fn draw_winning_line(
        painter: &egui::Painter,
        rect: egui::Rect,
        line: WinningLine,
        cell_size: f32,
        progress: f32,
    ) {
        let center = |position: Position| {
            egui::pos2(
                rect.left() + (position.col() as f32 + 0.5) * cell_size,
                rect.top() + (position.row() as f32 + 0.5) * cell_size,
            )
        };
        let start = center(line.start());
        painter.line_segment(
            [start, partial_line_end(start, center(line.end()), progress)],
            egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
        );
    }

    pub fn render_info_panel(&self, ui: &mut egui::Ui, game: &LocalGame) {
        let session = game.session();
        let state = session.game_state();

        ui.heading("TicTacToe");
        ui.label(session.settings().mode.to_string());
        ui.separator();

        for mark in [Mark::X, Mark::O] {
            if let Some(seat) = session.seat_for_mark(mark) {
                let bot_marker = if seat.is_bot { " (Bot)" } else { "" };
                ui.label(format!("{}: {}{}", mark, seat.name, bot_marker));
            }
        }

        ui.separator();

        if let Some(seat) = session.current_seat() {
            let mark = state.current_mark;
            if seat.is_bot {
                ui.horizontal(|ui| {
                    ui.label(format!("{} is thinking ({})", seat.name, mark));
                    if game.is_bot_thinking() {
                        ui.spinner();
                    }
                });
            } else {
                ui.colored_label(egui::Color32::GREEN, format!("{}'s turn ({})", seat.name, mark));
            }
        } else {
            ui.colored_label(egui::Color32::GREEN, state.status.to_string());
        }

        ui.separator();
        ui.heading("Score");
        let scoreboard = session.scoreboard();
        for (index, seat) in session.seats().iter().enumerate() {
            ui.label(format!("{}: {}", seat.name, scoreboard.wins(index)));
        }
        ui.label(format!("Draws: {}", scoreboard.draws()));

        if let Some(decision) = session.last_decision() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "Bot: {} (score {}, {} nodes)",
                    decision.position, decision.score, decision.nodes_visited
                ))
                .small()
                .color(egui::Color32::GRAY),
            );
        }

        ui.separator();
        ui.heading("Events");
        egui::ScrollArea::vertical()
            .id_salt("tictactoe_event_log")
            .max_height(160.0)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                let event_log = session.broadcaster().event_log();
                if event_log.is_empty() {
                    ui.label(egui::RichText::new("No events yet...").italics().color(egui::Color32::GRAY));
                } else {
                    for event in event_log {
                        ui.label(event);
                    }
                }
            });
    }
}

/// Cell rect scaled around its center and the opacity for a mark that is
/// `progress` (0..=1) through its appear animation.
fn mark_transform(cell_rect: egui::Rect, progress: f32) -> (egui::Rect, f32) {
    let progress = progress.clamp(0.0, 1.0);
    let scale = 0.5 + 0.5 * progress;
    (egui::Rect::from_center_size(cell_rect.center(), cell_rect.size() * scale), progress)
}

fn partial_line_end(start: egui::Pos2, end: egui::Pos2, progress: f32) -> egui::Pos2 {
    start + (end - start) * progress.clamp(0.0, 1.0)
}
