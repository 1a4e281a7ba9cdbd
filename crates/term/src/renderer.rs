//! TerminalRenderer: incremental cell drawing on a real terminal.
//!
//! Each board cell maps to a fixed two-column span so the 36x19 board comes
//! out roughly square in a typical terminal font. Terminal cells have no
//! sub-cell pixels to connect, so the entering direction from the draw
//! contract only selects between the connected-trail glyph and the isolated
//! one (fruit, fresh spawn).

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_snake_engine::BoardView;
use tui_snake_types::{
    Direction, Position, GRID_HEIGHT, GRID_WIDTH, SCORE_DISPLAY_MAX, SCORE_GAME_OVER,
};

/// Two terminal columns per board cell
const CELL_COLUMNS: u16 = 2;

const TRAIL_GLYPH: &str = "██";
const ISOLATED_GLYPH: &str = "▓▓";
const EMPTY_GLYPH: &str = "  ";

/// Terminal column and row of a cell's left character
///
/// Row 0 and column 0 hold the border, so the board starts at (1, 1).
fn cell_origin(pos: Position) -> (u16, u16) {
    (1 + CELL_COLUMNS * pos.x as u16, 1 + pos.y as u16)
}

/// The text shown on the score line
///
/// The internal score is unbounded; only the rendered value is clamped.
fn score_text(value: u32) -> String {
    format!("Score: {:02}", value.min(SCORE_DISPLAY_MAX))
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn put_cell(&mut self, pos: Position, color: Color, glyph: &str) -> Result<()> {
        let (col, row) = cell_origin(pos);
        self.stdout.queue(cursor::MoveTo(col, row))?;
        self.stdout.queue(SetForegroundColor(color))?;
        self.stdout.queue(Print(glyph))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl BoardView for TerminalRenderer {
    fn draw_board(&mut self) -> Result<()> {
        let inner = CELL_COLUMNS * GRID_WIDTH as u16;

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout
            .queue(Print(format!("┌{}┐", "─".repeat(inner as usize))))?;
        for y in 0..GRID_HEIGHT as u16 {
            self.stdout.queue(cursor::MoveTo(0, 1 + y))?;
            self.stdout.queue(Print("│"))?;
            self.stdout.queue(cursor::MoveTo(1 + inner, 1 + y))?;
            self.stdout.queue(Print("│"))?;
        }
        self.stdout
            .queue(cursor::MoveTo(0, 1 + GRID_HEIGHT as u16))?;
        self.stdout
            .queue(Print(format!("└{}┘", "─".repeat(inner as usize))))?;

        self.stdout
            .queue(cursor::MoveTo(1, 2 + GRID_HEIGHT as u16))?;
        self.stdout.queue(Print(score_text(0)))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_cell(&mut self, pos: Position, dir: Direction) -> Result<()> {
        match dir {
            Direction::None => self.put_cell(pos, Color::Red, ISOLATED_GLYPH),
            _ => self.put_cell(pos, Color::Green, TRAIL_GLYPH),
        }
    }

    fn clear_cell(&mut self, pos: Position) -> Result<()> {
        self.put_cell(pos, Color::Reset, EMPTY_GLYPH)
    }

    fn print_score(&mut self, value: u32) -> Result<()> {
        if value == SCORE_GAME_OVER {
            self.stdout
                .queue(cursor::MoveTo(1, 3 + GRID_HEIGHT as u16))?;
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
            self.stdout
                .queue(Print("GAME OVER - [r]estart [q]uit"))?;
            self.stdout.queue(SetAttribute(Attribute::Reset))?;
        } else {
            self.stdout
                .queue(cursor::MoveTo(1, 2 + GRID_HEIGHT as u16))?;
            self.stdout.queue(Print(score_text(value)))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_origin_leaves_room_for_the_border() {
        assert_eq!(cell_origin(Position::new(0, 0)), (1, 1));
        assert_eq!(cell_origin(Position::new(1, 0)), (3, 1));
        assert_eq!(cell_origin(Position::new(35, 18)), (71, 19));
    }

    #[test]
    fn test_score_text_clamps_to_display_range() {
        assert_eq!(score_text(0), "Score: 00");
        assert_eq!(score_text(7), "Score: 07");
        assert_eq!(score_text(99), "Score: 99");
        assert_eq!(score_text(250), "Score: 99");
    }
}
