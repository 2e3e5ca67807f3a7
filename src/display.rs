// display dimensions
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Monochrome 64x32 framebuffer, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [bool; DISPLAY_WIDTH * DISPLAY_HEIGHT],
}

impl Framebuffer {
    pub fn new() -> Self {
        Framebuffer {
            pixels: [false; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    /// Whether the pixel at `(x, y)` is on. Out-of-range coordinates are off.
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT && self.pixels[y * DISPLAY_WIDTH + x]
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels[..]
    }

    /// XOR a sprite onto the screen, one byte per row, MSB leftmost.
    ///
    /// The starting point wraps around the screen; pixels running past the
    /// right or bottom edge are clipped. Returns `true` if any pixel that
    /// was on got turned off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let x = x as usize % DISPLAY_WIDTH;
        let y = y as usize % DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, byte) in rows.iter().enumerate() {
            let py = y + row;
            if py >= DISPLAY_HEIGHT {
                break;
            }

            for col in 0..8 {
                let px = x + col;
                if px >= DISPLAY_WIDTH {
                    break;
                }

                if byte & (0x80 >> col) != 0 {
                    let pixel = &mut self.pixels[py * DISPLAY_WIDTH + px];
                    collision |= *pixel;
                    *pixel = !*pixel;
                }
            }
        }

        collision
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
