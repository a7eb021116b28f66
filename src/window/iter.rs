//! Coordinate iterator over a window

use super::{Coordinates, MAX_DIMS, Window};
use std::iter::FusedIterator;

/// Iterator over every coordinate of a [`Window`].
///
/// Dimension 0 varies fastest. The iterator owns a copy of the window, so a
/// fresh traversal is always one `window.iter()` away.
#[derive(Clone, Debug)]
pub struct WindowIter {
    window: Window,
    next: Option<Coordinates>,
    remaining: usize,
}

impl WindowIter {
    pub(super) fn new(window: Window) -> Self {
        let remaining = window.num_iterations_total();
        let next = (remaining > 0).then(|| {
            let mut start = Coordinates::origin();
            for d in 0..MAX_DIMS {
                start.set(d, window.dimension(d).start());
            }
            start
        });

        Self {
            window,
            next,
            remaining,
        }
    }

    fn advance(&mut self, mut coords: Coordinates) -> Option<Coordinates> {
        for d in 0..MAX_DIMS {
            let dim = self.window.dimension(d);
            coords[d] += dim.step();
            if coords[d] < dim.end() {
                return Some(coords);
            }
            coords[d] = dim.start();
        }
        None
    }
}

impl Iterator for WindowIter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Coordinates> {
        let current = self.next?;
        self.next = self.advance(current);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindowIter {}

impl FusedIterator for WindowIter {}
