//! Lines and rectangles on top of [`Framebuffer::set_pixel`].
//!
//! Every primitive is clipped pixel by pixel, so shapes that run past the
//! display edge are drawn partially rather than rejected.

use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

impl Framebuffer {
    /// Draws a line between two points, both endpoints included.
    ///
    /// Endpoints may lie anywhere; only the part of the line on the display is drawn.
    pub fn draw_line(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, value: bool) {
        self.line(wide(x0), wide(y0), wide(x1), wide(y1), value);
    }

    /// Draws a rectangle with its top-left corner at `(x, y)`.
    ///
    /// An outlined rectangle is four lines through the corners `x + w - 1` and
    /// `y + h - 1`, so a zero or one pixel wide rectangle collapses onto
    /// overlapping edges instead of being skipped.
    pub fn draw_rectangle(&mut self, x: usize, y: usize, w: usize, h: usize, value: bool, filled: bool) {
        if filled {
            for i in x..x.saturating_add(w).min(WIDTH) {
                for j in y..y.saturating_add(h).min(HEIGHT) {
                    self.set_pixel(i, j, value);
                }
            }
        } else {
            let (left, top) = (wide(x), wide(y));
            let right = left + wide(w) - 1;
            let bottom = top + wide(h) - 1;
            self.line(left, top, right, top, value);
            self.line(left, bottom, right, bottom, value);
            self.line(left, top, left, bottom, value);
            self.line(right, top, right, bottom, value);
        }
    }

    pub fn clear_area(&mut self, x: usize, y: usize, w: usize, h: usize) {
        self.draw_rectangle(x, y, w, h, false, true);
    }

    fn line(&mut self, x0: i128, y0: i128, x1: i128, y1: i128, value: bool) {
        // keeps every product below inside i128
        let (x0, y0) = (x0.clamp(-LIMIT, LIMIT), y0.clamp(-LIMIT, LIMIT));
        let (x1, y1) = (x1.clamp(-LIMIT, LIMIT), y1.clamp(-LIMIT, LIMIT));
        let Some((mut x0, mut y0)) = enter_window(x0, y0, x1, y1) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x0, y0, value);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
            if leaving(x0, sx, WIDTH) || leaving(y0, sy, HEIGHT) {
                break;
            }
        }
    }

    fn plot(&mut self, x: i128, y: i128, value: bool) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            self.set_pixel(x, y, value);
        }
    }
}

/// Lines starting further than this outside the display are first advanced to
/// this distance, so the walk towards the display stays short.
const MARGIN: i128 = 1024;
const LIMIT: i128 = 1 << 62;

fn wide(v: usize) -> i128 {
    v as i128
}

/// True once `p` has passed the display edge it is moving away from.
fn leaving(p: i128, step: i128, size: usize) -> bool {
    if step > 0 {
        p >= wide(size)
    } else {
        p < 0
    }
}

/// Steps along one axis until `p` is within `MARGIN` of the display, or `None`
/// if it never gets there.
fn steps_to_enter(p: i128, step: i128, delta: i128, size: usize) -> Option<i128> {
    let (lo, hi) = (-MARGIN, wide(size) + MARGIN);
    if (lo..hi).contains(&p) {
        Some(0)
    } else if delta == 0 {
        None
    } else if p < lo && step > 0 {
        Some(lo - p)
    } else if p >= hi && step < 0 {
        Some(p - (hi - 1))
    } else {
        None
    }
}

/// Moves a far-away start point along the line to the edge of the window around
/// the display. Returns `None` when the line never comes near the display.
fn enter_window(x0: i128, y0: i128, x1: i128, y1: i128) -> Option<(i128, i128)> {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let nx = steps_to_enter(x0, sx, dx, WIDTH)?;
    let ny = steps_to_enter(y0, sy, dy, HEIGHT)?;
    if nx == 0 && ny == 0 {
        return Some((x0, y0));
    }

    if dx >= dy {
        let n = nx.max(if dy == 0 { 0 } else { ny * dx / dy });
        if n > dx {
            return None;
        }
        Some((x0 + sx * n, y0 + sy * ((n * dy + dx / 2) / dx)))
    } else {
        let n = ny.max(if dx == 0 { 0 } else { nx * dy / dx });
        if n > dy {
            return None;
        }
        Some((x0 + sx * ((n * dx + dy / 2) / dy), y0 + sy * n))
    }
}
