//! Text diagram of the board for logs and terminal hosts.
//!
//! ```text
//! Top:     W 2  .    .  ...
//! Point:    13   14   15 ...
//! ```
//!
//! Points 13-24 run along the top row, 12-1 along the bottom row, using
//! 1-based labels. Each occupied point shows `W` or `B` and the count.

use std::fmt;

use super::model::Board;
use crate::core::Player;

fn symbol(player: Player) -> char {
    match player {
        Player::White => 'W',
        Player::Black => 'B',
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, board: &Board, points: impl Iterator<Item = usize>) -> fmt::Result {
    for point in points {
        let slot = board.slot(point);
        match slot.owner() {
            Some(owner) => write!(f, " {}{:<2} ", symbol(owner), slot.count())?,
            None => write!(f, "  .  ")?,
        }
    }
    writeln!(f)
}

fn write_labels(f: &mut fmt::Formatter<'_>, labels: impl Iterator<Item = usize>) -> fmt::Result {
    for label in labels {
        write!(f, "{label:>4} ")?;
    }
    writeln!(f)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Top:   ")?;
        write_cells(f, self, 12..24)?;
        write!(f, "Point: ")?;
        write_labels(f, 13..25)?;
        writeln!(f, "       {}", "=".repeat(60))?;
        write!(f, "Point: ")?;
        write_labels(f, (1..13).rev())?;
        write!(f, "Bottom:")?;
        write_cells(f, self, (0..12).rev())?;

        writeln!(
            f,
            "Bar:  White {}, Black {}",
            self.bar_count(Player::White),
            self.bar_count(Player::Black)
        )?;
        write!(
            f,
            "Home: White {}, Black {}",
            self.home_count(Player::White),
            self.home_count(Player::Black)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_opening() {
        let text = Board::new().to_string();

        assert!(text.contains("W2"));
        assert!(text.contains("B5"));
        assert!(text.contains("Bar:  White 0, Black 0"));
        assert!(text.ends_with("Home: White 0, Black 0"));
        assert_eq!(text.lines().count(), 7);
    }
}
