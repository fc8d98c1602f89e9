use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use log::debug;

use crate::assets::Sprite;
use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::types::Rect;

const TEXT_COLOR: Color = Color::White;

/// Drawing surface the frame driver paints each tick.
pub trait Canvas {
    fn draw_background(&mut self, background: &Sprite);
    fn blit(&mut self, sprite: &Sprite, at: Rect);
    /// Text anchored at a playfield position.
    fn draw_text(&mut self, text: &str, x: f64, y: f64);
    /// Text centred horizontally on the playfield.
    fn draw_centered_text(&mut self, text: &str, y: f64);
    fn present(&mut self) -> io::Result<()>;
}

// --- ScreenBuffer for simulated rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
    pub cursor_x: u16,
    pub cursor_y: u16,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            buffer: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            if self.cursor_y < self.height && self.cursor_x < self.width {
                self.buffer[self.cursor_y as usize][self.cursor_x as usize] = c;
            }
            self.cursor_x = self.cursor_x.saturating_add(1);
        }
    }

    pub fn row(&self, y: u16) -> String {
        self.buffer.get(y as usize).map(|r| r.iter().collect()).unwrap_or_default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row(y).contains(needle))
    }

    pub fn print_to_log(&self) {
        debug!("--- Screen Buffer ---");
        for y in 0..self.height {
            debug!("{}", self.row(y));
        }
        debug!("---------------------");
    }
}

// --- OutputTarget enum to handle stdout or ScreenBuffer ---
pub enum OutputTarget {
    Stdout(Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn queue_move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => queue!(s, MoveTo(x, y)),
            OutputTarget::ScreenBuffer(sb) => {
                sb.move_to(x, y);
                Ok(())
            }
        }
    }

    pub fn queue_text(&mut self, text: &str, color: Color) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => queue!(s, SetForegroundColor(color), Print(text)),
            OutputTarget::ScreenBuffer(sb) => {
                sb.write_str(text);
                Ok(())
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => {
                queue!(s, ResetColor)?;
                s.flush()
            }
            OutputTarget::ScreenBuffer(sb) => {
                sb.print_to_log();
                Ok(())
            }
        }
    }
}

// --- GameGrid: the playfield scaled onto character cells ---
pub struct GameGrid {
    pub cells: Vec<Vec<(char, Color)>>,
    pub width: u16,
    pub height: u16,
}

impl GameGrid {
    pub fn new(width: u16, height: u16) -> Self {
        GameGrid {
            cells: vec![vec![(' ', Color::Reset); width as usize]; height as usize],
            width,
            height,
        }
    }

    pub fn set_cell(&mut self, x: u16, y: u16, glyph: char, color: Color) {
        if y < self.height && x < self.width {
            self.cells[y as usize][x as usize] = (glyph, color);
        }
    }

    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        self.cells.get(y as usize).and_then(|row| row.get(x as usize)).map(|cell| cell.0)
    }

    pub fn fill(&mut self, glyph: char, color: Color) {
        for row in &mut self.cells {
            row.fill((glyph, color));
        }
    }

    pub fn column_of(&self, x: f64) -> i64 {
        (x * self.width as f64 / SCREEN_WIDTH).floor() as i64
    }

    pub fn row_of(&self, y: f64) -> i64 {
        (y * self.height as f64 / SCREEN_HEIGHT).floor() as i64
    }

    /// Paints a playfield rectangle. Anything on screen covers at least one
    /// cell; parts outside the grid are clipped.
    pub fn paint_rect(&mut self, rect: Rect, glyph: char, color: Color) {
        if rect.right() <= 0.0 || rect.left() >= SCREEN_WIDTH || rect.bottom() <= 0.0 || rect.top() >= SCREEN_HEIGHT {
            return;
        }
        let x0 = self.column_of(rect.left());
        let x1 = ((rect.right() * self.width as f64 / SCREEN_WIDTH).ceil() as i64).max(x0 + 1);
        let y0 = self.row_of(rect.top());
        let y1 = ((rect.bottom() * self.height as f64 / SCREEN_HEIGHT).ceil() as i64).max(y0 + 1);

        for y in y0.max(0)..y1.min(self.height as i64) {
            for x in x0.max(0)..x1.min(self.width as i64) {
                self.set_cell(x as u16, y as u16, glyph, color);
            }
        }
    }

    pub fn put_str(&mut self, x: i64, y: i64, text: &str, color: Color) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        for (i, c) in text.chars().enumerate() {
            let cx = x + i as i64;
            if cx >= 0 && cx < self.width as i64 {
                self.set_cell(cx as u16, y as u16, c, color);
            }
        }
    }

    pub fn render(&self, out: &mut OutputTarget) -> io::Result<()> {
        for (y, row) in self.cells.iter().enumerate() {
            out.queue_move_to(0, y as u16)?;
            let mut run = String::new();
            let mut run_color = None;
            for &(glyph, color) in row {
                if run_color.is_some_and(|c| c != color) {
                    out.queue_text(&run, run_color.unwrap_or(Color::Reset))?;
                    run.clear();
                }
                run_color = Some(color);
                run.push(glyph);
            }
            if let Some(color) = run_color {
                out.queue_text(&run, color)?;
            }
        }
        Ok(())
    }
}

/// Canvas that paints into a `GameGrid` and writes it to an `OutputTarget`.
pub struct TerminalCanvas {
    pub grid: GameGrid,
    pub out: OutputTarget,
}

impl TerminalCanvas {
    pub fn new(width: u16, height: u16, out: OutputTarget) -> Self {
        TerminalCanvas { grid: GameGrid::new(width, height), out }
    }

    pub fn screen(&self) -> Option<&ScreenBuffer> {
        match &self.out {
            OutputTarget::ScreenBuffer(sb) => Some(sb),
            OutputTarget::Stdout(_) => None,
        }
    }
}

impl Canvas for TerminalCanvas {
    fn draw_background(&mut self, background: &Sprite) {
        self.grid.fill(background.glyph, background.color);
    }

    /// Only the top-left of `at` is used; the image keeps its own size.
    fn blit(&mut self, sprite: &Sprite, at: Rect) {
        let area = Rect::new(at.x, at.y, sprite.width, sprite.height);
        self.grid.paint_rect(area, sprite.glyph, sprite.color);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        let (col, row) = (self.grid.column_of(x), self.grid.row_of(y));
        self.grid.put_str(col, row, text, TEXT_COLOR);
    }

    fn draw_centered_text(&mut self, text: &str, y: f64) {
        let col = (self.grid.width as i64 - text.chars().count() as i64) / 2;
        let row = self.grid.row_of(y);
        self.grid.put_str(col, row, text, TEXT_COLOR);
    }

    fn present(&mut self) -> io::Result<()> {
        self.grid.render(&mut self.out)?;
        self.out.flush()
    }
}
