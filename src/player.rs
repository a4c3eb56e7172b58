use std::fmt;

/// Score keeping for one participant. Holds no I/O; prompting lives in
/// the game's turn controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    round_points: u32,
    total_points: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            round_points: 0,
            total_points: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn round_points(&self) -> u32 {
        self.round_points
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    /// Add points to the current round.
    pub fn add_points(&mut self, points: u32) {
        self.round_points += points;
    }

    /// Fold the round's points into the total and start the next round at 0.
    pub fn fold_round(&mut self) {
        self.total_points += self.round_points;
        self.round_points = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} total points: {}", self.name, self.total_points)
    }
}
