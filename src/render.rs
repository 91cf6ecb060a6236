use crate::config::Config;
use crate::game::Game;

const APPLE_COLOR: [u8; 3] = [220, 50, 50];
const SNAKE_COLOR: [u8; 3] = [80, 220, 80];
const TEXT_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Draws into the RGBA framebuffer: flat-colored cells for the entities plus
/// bitmap text for the HUD. Holds the pixel geometry so cell coordinates can
/// be scaled without threading the config everywhere.
pub struct Renderer {
    width: u32,
    height: u32,
    cell: u32,
    background: [u8; 3],
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.window_width(),
            height: config.window_height(),
            cell: config.cell_size,
            background: config.background,
        }
    }

    pub fn draw(&self, frame: &mut [u8], game: &Game) {
        let [r, g, b] = self.background;
        for px in frame.chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, 0xFF]);
        }

        let apple = game.apple().position;
        self.fill_cell(frame, apple.x, apple.y, APPLE_COLOR);
        for seg in game.snake().body() {
            self.fill_cell(frame, seg.x, seg.y, SNAKE_COLOR);
        }

        if game.paused() {
            self.draw_game_over(frame, game.last_score());
        } else {
            let score = format!("SCORE: {}", game.score());
            self.draw_text(frame, &score, self.width.saturating_sub(200), 10, 2);
        }
    }

    fn draw_game_over(&self, frame: &mut [u8], score: usize) {
        let line1 = format!("GAME OVER  SCORE: {score}");
        let line2 = "PRESS ENTER TO RESTART  ESC TO QUIT";
        let x = self.width / 5;
        let y = self.height * 3 / 8;
        self.draw_text(frame, &line1, x, y, 3);
        self.draw_text(frame, line2, x, y + 60, 2);
    }

    fn fill_cell(&self, frame: &mut [u8], cell_x: i32, cell_y: i32, color: [u8; 3]) {
        // off-grid cells (the growth placeholder) are simply not drawn
        if cell_x < 0 || cell_y < 0 {
            return;
        }
        let x0 = cell_x as u32 * self.cell;
        let y0 = cell_y as u32 * self.cell;
        for py in y0..(y0 + self.cell).min(self.height) {
            for px in x0..(x0 + self.cell).min(self.width) {
                self.set_pixel(frame, px, py, [color[0], color[1], color[2], 0xFF]);
            }
        }
    }

    fn set_pixel(&self, frame: &mut [u8], x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        if i + 4 <= frame.len() {
            frame[i..i + 4].copy_from_slice(&rgba);
        }
    }

    fn draw_text(&self, frame: &mut [u8], text: &str, x: u32, y: u32, scale: u32) {
        let mut cx = x;
        for ch in text.chars() {
            self.draw_char(frame, ch, cx, y, scale);
            cx += 6 * scale;
        }
    }

    fn draw_char(&self, frame: &mut [u8], ch: char, x: u32, y: u32, scale: u32) {
        let Some(rows) = glyph_5x7(ch) else { return };
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..5u32 {
                if (row >> (4 - rx)) & 1 == 1 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.set_pixel(
                                frame,
                                x + rx * scale + sx,
                                y + ry as u32 * scale + sy,
                                TEXT_COLOR,
                            );
                        }
                    }
                }
            }
        }
    }
}

// 5x7 uppercase bitmap font, one bit per pixel per row.
fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    Some(match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        ' ' => [0b00000; 7],
        _ => return None,
    })
}
