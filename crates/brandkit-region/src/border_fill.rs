//! Border-connected fill
//!
//! Recolors every pixel that matches a predicate and can be reached from
//! the image border through a 4-connected path of matching pixels. Matching
//! pixels enclosed by non-matching ones are left alone, which is what keeps
//! white lettering white when a white logo background is replaced.
//!
//! The traversal is a multi-source BFS: the whole perimeter is the seed
//! set, the frontier is a FIFO queue and a dense visited grid guarantees
//! each pixel is recolored at most once.

use crate::error::{RegionError, RegionResult};
use crate::predicate::ColorPredicate;
use brandkit_core::{Pix, PixMut, Rgba};
use std::collections::VecDeque;

/// BFS state shared by the mutating fill and the read-only mask.
struct Flood {
    width: u32,
    height: u32,
    visited: Vec<bool>,
    frontier: VecDeque<(u32, u32)>,
}

impl Flood {
    /// Seed from the full outer ring, keeping only matching pixels.
    fn seeded(width: u32, height: u32, is_match: impl Fn(u32, u32) -> bool) -> Self {
        let mut frontier = VecDeque::new();
        for x in 0..width {
            for y in [0, height - 1] {
                if is_match(x, y) {
                    frontier.push_back((x, y));
                }
            }
        }
        for y in 0..height {
            for x in [0, width - 1] {
                if is_match(x, y) {
                    frontier.push_back((x, y));
                }
            }
        }

        Flood {
            width,
            height,
            visited: vec![false; width as usize * height as usize],
            frontier,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Pop the next unvisited coordinate and mark it visited.
    fn next(&mut self) -> Option<(u32, u32)> {
        while let Some((x, y)) = self.frontier.pop_front() {
            let i = self.index(x, y);
            if self.visited[i] {
                continue;
            }
            self.visited[i] = true;
            return Some((x, y));
        }
        None
    }

    /// Queue the unvisited, matching 4-neighbors of `(x, y)`.
    fn push_neighbors(&mut self, x: u32, y: u32, is_match: impl Fn(u32, u32) -> bool) {
        let neighbors = [
            (x > 0).then(|| (x - 1, y)),
            (x + 1 < self.width).then(|| (x + 1, y)),
            (y > 0).then(|| (x, y - 1)),
            (y + 1 < self.height).then(|| (x, y + 1)),
        ];
        for (nx, ny) in neighbors.into_iter().flatten() {
            if !self.visited[self.index(nx, ny)] && is_match(nx, ny) {
                self.frontier.push_back((nx, ny));
            }
        }
    }
}

/// Recolor the border-connected matching region in place.
///
/// Every pixel reachable from the image border through 4-connected pixels
/// satisfying `matches` is set to `target`; no other pixel is modified.
/// The predicate is evaluated against the current pixel value when a pixel
/// is inspected.
///
/// The caller must ensure `matches(target)` is false. This function does
/// not check it; [`replace_border_connected`] does.
///
/// # Returns
///
/// The number of pixels recolored.
pub fn fill_border_connected<P>(pix: &mut PixMut, matches: &P, target: Rgba) -> u32
where
    P: ColorPredicate + ?Sized,
{
    let mut flood = Flood::seeded(pix.width(), pix.height(), |x, y| {
        matches.matches(pix.get_pixel_unchecked(x, y))
    });

    let mut filled_count = 0u32;
    while let Some((x, y)) = flood.next() {
        pix.set_pixel_unchecked(x, y, target);
        filled_count += 1;
        flood.push_neighbors(x, y, |nx, ny| {
            matches.matches(pix.get_pixel_unchecked(nx, ny))
        });
    }

    filled_count
}

/// Return a recolored copy of `pix`.
///
/// Same traversal as [`fill_border_connected`], but the input is left
/// untouched.
///
/// # Errors
///
/// Returns [`RegionError::TargetMatchesPredicate`] if `target` itself
/// satisfies `matches`.
pub fn replace_border_connected<P>(pix: &Pix, matches: &P, target: Rgba) -> RegionResult<Pix>
where
    P: ColorPredicate + ?Sized,
{
    if matches.matches(target) {
        return Err(RegionError::TargetMatchesPredicate(target));
    }
    let mut output = pix.to_mut();
    fill_border_connected(&mut output, matches, target);
    Ok(output.into())
}

/// Membership of the border-connected region, one flag per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    count: u32,
}

impl RegionMask {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether `(x, y)` belongs to the region. Out of bounds is `false`.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width
            && y < self.height
            && self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Number of pixels in the region.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Check whether the region is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over the coordinates in the region, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(move |(i, _)| ((i % w) as u32, (i / w) as u32))
    }
}

/// Compute the border-connected matching region without modifying `pix`.
pub fn border_connected_mask<P>(pix: &Pix, matches: &P) -> RegionMask
where
    P: ColorPredicate + ?Sized,
{
    let is_match = |x: u32, y: u32| matches.matches(pix.get_pixel_unchecked(x, y));
    let mut flood = Flood::seeded(pix.width(), pix.height(), is_match);

    let mut count = 0u32;
    while let Some((x, y)) = flood.next() {
        count += 1;
        flood.push_neighbors(x, y, is_match);
    }

    RegionMask {
        width: pix.width(),
        height: pix.height(),
        bits: flood.visited,
        count,
    }
}
