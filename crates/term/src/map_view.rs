//! MapView: maps a session's glyph matrix and status into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GlyphMatrix, Status};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Glyph, Terrain};

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub width: u16,
    pub height: u16,
}

impl TermSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLUE: Rgb = Rgb::new(90, 130, 255);

/// Columns of padding before the status text.
const STATUS_INDENT: u16 = 2;

/// Draws the map window on the top rows and the status line on the last row.
#[derive(Debug, Clone)]
pub struct MapView {
    floor: char,
    wall: char,
    out_of_bounds: char,
    player: char,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            floor: ' ',
            wall: '█',
            out_of_bounds: '░',
            player: '@',
        }
    }
}

impl MapView {
    pub fn with_player_char(mut self, player: char) -> Self {
        self.player = player;
        self
    }

    /// Character and style for one glyph.
    pub fn glyph_cell(&self, glyph: Glyph) -> (char, CellStyle) {
        match glyph {
            Glyph::Player => (self.player, CellStyle::fg(BLUE).bold()),
            Glyph::Terrain(Terrain::Floor) => (self.floor, CellStyle::default()),
            Glyph::Terrain(Terrain::Wall) => (self.wall, CellStyle::default()),
            Glyph::Terrain(Terrain::OutOfBounds) => (
                self.out_of_bounds,
                CellStyle::fg(Rgb::new(110, 110, 120)),
            ),
        }
    }

    fn status_style(status: Status) -> CellStyle {
        match status {
            Status::Help => CellStyle::fg(BLUE),
            Status::Collision => CellStyle::default().bold(),
        }
    }

    /// Render into an existing framebuffer, resizing it to `size`.
    pub fn render_into(
        &self,
        glyphs: &GlyphMatrix,
        status: Status,
        size: TermSize,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(size.width, size.height);
        fb.clear(CellStyle::default().into_cell(' '));
        if size.height == 0 {
            return;
        }

        let status_row = size.height - 1;
        let map_rows = glyphs.height().min(status_row);
        for row in 0..map_rows {
            for (col, &glyph) in (0..size.width).zip(glyphs.row(row)) {
                let (ch, style) = self.glyph_cell(glyph);
                fb.put_char(col, row, ch, style);
            }
        }

        fb.put_str(STATUS_INDENT, status_row, status.text(), Self::status_style(status));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, glyphs: &GlyphMatrix, status: Status, size: TermSize) -> FrameBuffer {
        let mut fb = FrameBuffer::new(size.width, size.height);
        self.render_into(glyphs, status, size, &mut fb);
        fb
    }
}
