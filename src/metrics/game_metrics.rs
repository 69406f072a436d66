use std::time::{Duration, Instant};

/// Statistics across the games of one process
pub struct GameMetrics {
    /// Start of the current unpaused stretch, `None` while the clock is stopped
    running_since: Option<Instant>,
    /// Play time banked before the current stretch
    banked: Duration,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub games_won: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            running_since: Some(Instant::now()),
            banked: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            games_won: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked + self.running_since.map_or(Duration::ZERO, |t| t.elapsed());
    }

    pub fn on_game_start(&mut self) {
        self.running_since = Some(Instant::now());
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
    }

    /// Stop or restart the play clock
    pub fn set_paused(&mut self, paused: bool) {
        match (paused, self.running_since) {
            (true, Some(since)) => {
                self.banked += since.elapsed();
                self.running_since = None;
            }
            (false, None) => self.running_since = Some(Instant::now()),
            _ => {}
        }
        self.update();
    }

    pub fn on_game_over(&mut self, final_score: u32, won: bool) {
        self.set_paused(true);
        self.games_played += 1;
        if won {
            self.games_won += 1;
        }
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
