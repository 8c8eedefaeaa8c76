use std::collections::VecDeque;

use image::RgbaImage;

use super::mask::{Class, Mask};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    Queued,
    Done,
}

/// Scanline flood fill over the passable cells of a mask.
///
/// Every queued point expands to its full horizontal run, and only the runs
/// on the rows above and below are queued, which keeps the queue short for
/// large uniform backgrounds.
struct Flood<'a> {
    mask: &'a Mask,
    visits: Vec<Visit>,
    queue: VecDeque<(u32, u32)>,
}

impl<'a> Flood<'a> {
    fn new(mask: &'a Mask) -> Self {
        let border = (mask.width as usize + mask.height as usize) * 2;
        Self {
            mask,
            visits: vec![Visit::Unseen; mask.cells.len()],
            queue: VecDeque::with_capacity(border),
        }
    }

    /// Queue every passable pixel touching the image border.
    fn seed_border(&mut self) {
        let (w, h) = (self.mask.width, self.mask.height);
        self.queue_runs(0, w - 1, 0);
        if h > 1 {
            self.queue_runs(0, w - 1, h - 1);
        }
        for y in 1..h.saturating_sub(1) {
            self.queue_runs(0, 0, y);
            if w > 1 {
                self.queue_runs(w - 1, w - 1, y);
            }
        }
    }

    /// Queue one point per unseen passable run within `left..=right` on row `y`.
    fn queue_runs(&mut self, left: u32, right: u32, y: u32) {
        let mut x = left;
        while x <= right {
            if !self.is_open(x, y) {
                x += 1;
                continue;
            }
            self.queue.push_back((x, y));
            while x <= right && self.is_open(x, y) {
                let idx = self.mask.index(x, y);
                self.visits[idx] = Visit::Queued;
                x += 1;
            }
        }
    }

    #[inline]
    fn is_open(&self, x: u32, y: u32) -> bool {
        let idx = self.mask.index(x, y);
        self.visits[idx] == Visit::Unseen && self.mask.cells[idx].is_passable()
    }

    #[inline]
    fn can_extend(&self, x: u32, y: u32) -> bool {
        let idx = self.mask.index(x, y);
        self.visits[idx] != Visit::Done && self.mask.cells[idx].is_passable()
    }

    /// Widest passable run on row `y` containing `x`, or `None` if already filled.
    fn span(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        if !self.can_extend(x, y) {
            return None;
        }
        let mut left = x;
        while left > 0 && self.can_extend(left - 1, y) {
            left -= 1;
        }
        let mut right = x;
        while right + 1 < self.mask.width && self.can_extend(right + 1, y) {
            right += 1;
        }
        Some((left, right))
    }
}

/// Apply the mask to `output`, only where the background touches the border.
///
/// Enclosed regions of background color stay untouched.
pub(super) fn clear_edge_connected(output: &mut RgbaImage, mask: &Mask) {
    if mask.width == 0 || mask.height == 0 {
        return;
    }
    debug_assert_eq!(output.dimensions(), (mask.width, mask.height));

    let mut flood = Flood::new(mask);
    flood.seed_border();

    while let Some((x, y)) = flood.queue.pop_front() {
        let Some((left, right)) = flood.span(x, y) else {
            continue;
        };

        for sx in left..=right {
            let idx = mask.index(sx, y);
            flood.visits[idx] = Visit::Done;
            let alpha = &mut output.get_pixel_mut(sx, y)[3];
            match mask.cells[idx] {
                Class::Clear => *alpha = 0,
                Class::Edge(edge) => *alpha = edge,
                Class::Keep => {}
            }
        }

        if y > 0 {
            flood.queue_runs(left, right, y - 1);
        }
        if y + 1 < mask.height {
            flood.queue_runs(left, right, y + 1);
        }
    }
}
