//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure layout, no I/O. The palette follows the original desktop build:
//! indigo background, four block colors, pink game-over accents.

use crate::core::piece::occupied_offsets;
use crate::core::snapshot::{GameSnapshot, PieceSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::EMPTY_CELL;

const PLAYFIELD_BG: Rgb = Rgb::new(31, 25, 76);
const GRID_DOT: Rgb = Rgb::new(62, 52, 150);
const BORDER_FG: Rgb = Rgb::new(200, 200, 210);
const TEXT_FG: Rgb = Rgb::new(255, 255, 255);
const ACCENT: Rgb = Rgb::new(252, 91, 122);

/// Block colors for cell values 1..=4.
const BLOCK_COLORS: [Rgb; 4] = [
    Rgb::new(239, 98, 98),
    Rgb::new(86, 199, 133),
    Rgb::new(93, 146, 244),
    Rgb::new(229, 197, 82),
];

fn block_color(value: u8) -> Rgb {
    BLOCK_COLORS[(value as usize - 1) % BLOCK_COLORS.len()]
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct GameView {
    /// Board cell width in terminal columns; two columns per cell roughly
    /// squares the typical terminal glyph aspect ratio.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render one frame. The playfield is centered; a side panel carries the
    /// next-piece preview, score, and level; a popup overlays on game over.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = snap.cols as u16 * self.cell_w;
        let field_h = snap.rows as u16;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;
        const PANEL_W: u16 = 14;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);
        self.draw_field(&mut fb, snap, start_x + 1, start_y + 1);
        self.draw_piece(&mut fb, &snap.active, start_x + 1, start_y + 1, snap.rows);
        self.draw_panel(&mut fb, snap, start_x + frame_w + 2, start_y + 1);

        if snap.game_over {
            self.draw_game_over(&mut fb, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(BORDER_FG, Rgb::default());
        for dx in 1..w.saturating_sub(1) {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_field(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y0: u16) {
        let empty = CellStyle::new(GRID_DOT, PLAYFIELD_BG);
        for y in 0..snap.rows {
            for x in 0..snap.cols {
                let value = snap.cell(x, y);
                let cx = x0 + x as u16 * self.cell_w;
                let cy = y0 + y as u16;
                if value == EMPTY_CELL {
                    fb.fill_rect(cx, cy, self.cell_w, 1, ' ', empty);
                    fb.put_char(cx, cy, '·', empty);
                } else {
                    let style = CellStyle::new(PLAYFIELD_BG, block_color(value));
                    fb.fill_rect(cx, cy, self.cell_w, 1, ' ', style);
                }
            }
        }
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        piece: &PieceSnapshot,
        x0: u16,
        y0: u16,
        rows: usize,
    ) {
        let style = CellStyle::new(PLAYFIELD_BG, block_color(piece.color));
        for &off in &occupied_offsets(piece.kind, piece.orientation) {
            let x = piece.x + (off % 4) as i16;
            let y = piece.y + (off / 4) as i16;
            // Cells above the top edge are simply not drawn.
            if y < 0 || y as usize >= rows || x < 0 {
                continue;
            }
            fb.fill_rect(x0 + x as u16 * self.cell_w, y0 + y as u16, self.cell_w, 1, ' ', style);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y0: u16) {
        let label = CellStyle::new(BORDER_FG, Rgb::default());
        let value = CellStyle::new(TEXT_FG, Rgb::default()).bold();

        fb.put_str(x0, y0, "NEXT", label);
        let preview = CellStyle::new(PLAYFIELD_BG, block_color(snap.next.color));
        for &off in &occupied_offsets(snap.next.kind, snap.next.orientation) {
            let px = x0 + (off % 4) as u16 * self.cell_w;
            let py = y0 + 2 + (off / 4) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, ' ', preview);
        }

        fb.put_str(x0, y0 + 8, "SCORE", label);
        fb.put_str(x0, y0 + 9, &snap.score.to_string(), value);
        fb.put_str(x0, y0 + 11, "LEVEL", label);
        fb.put_str(x0, y0 + 12, &snap.level.to_string(), value);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let popup_w: u16 = 24;
        let popup_h: u16 = 7;
        let px = x + w.saturating_sub(popup_w) / 2;
        let py = y + h.saturating_sub(popup_h) / 2;

        let body = CellStyle::new(TEXT_FG, Rgb::default());
        let accent = CellStyle::new(ACCENT, Rgb::default());

        fb.fill_rect(px, py, popup_w, popup_h, ' ', body);
        self.draw_popup_frame(fb, px, py, popup_w, popup_h, accent);
        fb.put_str(px + (popup_w - 10) / 2, py + 2, "GAME OVER!", body.bold());
        fb.put_str(px + 2, py + 4, "press r to restart", accent);
        fb.put_str(px + 2, py + 5, "press q to quit", accent);
    }

    fn draw_popup_frame(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }
}
