/// Running results for the two seats of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: [u32; 2],
    draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self, seat: usize) {
        if let Some(wins) = self.wins.get_mut(seat) {
            *wins += 1;
        }
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    pub fn wins(&self, seat: usize) -> u32 {
        self.wins.get(seat).copied().unwrap_or(0)
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games_played(&self) -> u32 {
        self.wins.iter().sum::<u32>() + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
