//! Upper/lower tangent search between two horizontally separated hulls.
//!
//! Both searches start from the facing extremes (rightmost vertex of the left
//! hull, leftmost vertex of the right hull) and alternately rotate one pointer
//! at a time until a full pass moves neither. An orientation of exactly zero
//! stops a pointer, so collinear vertices beyond the current one are never
//! taken.
//!
//! Termination: in exact arithmetic each pointer only moves one way and never
//! passes its start, so a search makes at most `|L| + |R|` moves. A move cap of
//! `2 (|L| + |R|) + 2` bounds floating-point cycling; when it is hit the current
//! pair is returned as is.

use crate::geom2::{orientation, Point2};

/// Tangent endpoints: `left` indexes the left hull, `right` the right hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub left: usize,
    pub right: usize,
}

/// Index of the point with the largest x; the first one wins on ties.
pub fn rightmost(hull: &[Point2]) -> usize {
    let mut idx = 0;
    for (i, p) in hull.iter().enumerate().skip(1) {
        if p.x > hull[idx].x {
            idx = i;
        }
    }
    idx
}

/// Index of the point with the smallest x; the first one wins on ties.
pub fn leftmost(hull: &[Point2]) -> usize {
    let mut idx = 0;
    for (i, p) in hull.iter().enumerate().skip(1) {
        if p.x < hull[idx].x {
            idx = i;
        }
    }
    idx
}

#[inline]
fn next(i: usize, n: usize) -> usize {
    (i + 1) % n
}

#[inline]
fn prev(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

#[inline]
fn move_cap(left: &[Point2], right: &[Point2]) -> usize {
    2 * (left.len() + right.len()) + 2
}

/// Upper tangent: both hulls lie on or below the line `left[l] → right[r]`.
///
/// Pre: both hulls non-empty and counterclockwise; `left` lies left of `right`.
pub fn upper_tangent(left: &[Point2], right: &[Point2]) -> Tangent {
    let (nl, nr) = (left.len(), right.len());
    let mut l = rightmost(left);
    let mut r = leftmost(right);
    let cap = move_cap(left, right);
    let mut moves = 0usize;

    let mut done = false;
    while !done && moves < cap {
        done = true;
        // counterclockwise on the left hull while the next vertex is above
        while moves < cap {
            let nx = next(l, nl);
            if orientation(right[r], left[l], left[nx]) >= 0.0 {
                break;
            }
            l = nx;
            moves += 1;
            done = false;
        }
        // clockwise on the right hull while the previous vertex is above
        while moves < cap {
            let pv = prev(r, nr);
            if orientation(left[l], right[r], right[pv]) <= 0.0 {
                break;
            }
            r = pv;
            moves += 1;
            done = false;
        }
    }
    Tangent { left: l, right: r }
}

/// Lower tangent: both hulls lie on or above the line `left[l] → right[r]`.
///
/// Pre: both hulls non-empty and counterclockwise; `left` lies left of `right`.
pub fn lower_tangent(left: &[Point2], right: &[Point2]) -> Tangent {
    let (nl, nr) = (left.len(), right.len());
    let mut l = rightmost(left);
    let mut r = leftmost(right);
    let cap = move_cap(left, right);
    let mut moves = 0usize;

    let mut done = false;
    while !done && moves < cap {
        done = true;
        // clockwise on the left hull while the previous vertex is below
        while moves < cap {
            let pv = prev(l, nl);
            if orientation(right[r], left[l], left[pv]) <= 0.0 {
                break;
            }
            l = pv;
            moves += 1;
            done = false;
        }
        // counterclockwise on the right hull while the next vertex is below
        while moves < cap {
            let nx = next(r, nr);
            if orientation(left[l], right[r], right[nx]) >= 0.0 {
                break;
            }
            r = nx;
            moves += 1;
            done = false;
        }
    }
    Tangent { left: l, right: r }
}
