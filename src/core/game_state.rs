//! Game state: the click counter and the two-image rotation.

use std::path::{Path, PathBuf};

/// Persisted part of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub click_count: u64,
}

impl GameState {
    #[cfg(test)]
    pub fn new(click_count: u64) -> Self {
        Self { click_count }
    }

    /// Register one click.
    pub fn click(&mut self) -> u64 {
        self.click_count = self.click_count.saturating_add(1);
        self.click_count
    }

    /// Text shown in the counter label.
    pub fn counter_text(&self) -> String {
        format!("Clicks: {}", self.click_count)
    }
}

/// Ordered pair of button images with the index currently shown.
#[derive(Debug, Clone)]
pub struct ImageCycle {
    paths: [PathBuf; 2],
    index: usize,
}

impl ImageCycle {
    pub fn new(paths: [PathBuf; 2]) -> Self {
        Self { paths, index: 0 }
    }

    /// Index of the current image, always 0 or 1.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Path {
        &self.paths[self.index]
    }

    /// Move to the next image and return its index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.paths.len();
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> ImageCycle {
        ImageCycle::new([PathBuf::from("a.png"), PathBuf::from("b.png")])
    }

    #[test]
    fn test_clicks_accumulate() {
        let mut state = GameState::new(7);
        for _ in 0..25 {
            state.click();
        }
        assert_eq!(state.click_count, 32);
        assert_eq!(state.counter_text(), "Clicks: 32");
    }

    #[test]
    fn test_click_saturates() {
        let mut state = GameState::new(u64::MAX);
        assert_eq!(state.click(), u64::MAX);
    }

    #[test]
    fn test_cycle_alternates() {
        let mut cycle = cycle();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current(), Path::new("a.png"));

        for k in 1..=9 {
            assert_eq!(cycle.advance(), k % 2);
        }
        assert_eq!(cycle.current(), Path::new("b.png"));
    }
}
