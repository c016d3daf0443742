use std::fmt;

/// Score and lives readout drawn in the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub score: u32,
    pub lives: u32,
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}        Lives: {}", self.score, self.lives)
    }
}

/// Terminal snapshot of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub won: bool,
    pub final_score: u32,
}

impl RoundResult {
    pub fn headline(&self) -> &'static str {
        if self.won { "You Win!" } else { "Game Over!" }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Final Score: {}", self.headline(), self.final_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_text() {
        let overlay = Overlay { score: 12, lives: 2 };
        assert_eq!(overlay.to_string(), "Score: 12        Lives: 2");
    }

    #[test]
    fn test_round_result_text() {
        let won = RoundResult {
            won: true,
            final_score: 60,
        };
        let lost = RoundResult {
            won: false,
            final_score: 7,
        };
        assert_eq!(won.to_string(), "You Win! Final Score: 60");
        assert_eq!(lost.to_string(), "Game Over! Final Score: 7");
    }
}
