//! Reading-order sorting of the fragments on one page.
//!
//! Two fragments share a row when their baselines are closer than half the
//! taller fragment's height; within a row they read left to right, and rows
//! read top to bottom (descending `y`, since the y axis points up).
//!
//! That relation is only a local order. A chain of fragments whose heights
//! sit near the threshold can yield `a < b`, `b < c` and `c < a`, so there
//! is no total order to recover. The page is therefore sorted with an
//! explicit stable merge sort that never checks comparator consistency:
//! the output is fully determined by the input order, and when the
//! comparator cannot separate two fragments the one extracted first stays
//! first. Adversarial inputs may still come out in a surprising order;
//! that is accepted as part of best-effort layout recovery.

use std::cmp::Ordering;

use crate::model::{Page, TextFragment};

/// Compare two fragments by approximate reading order.
///
/// `row_tolerance` is the fraction of the taller height inside which the
/// fragments count as one row (0.5 by default). NaN coordinates compare
/// as `Equal`.
pub fn reading_order(a: &TextFragment, b: &TextFragment, row_tolerance: f32) -> Ordering {
    let threshold = a.height.max(b.height) * row_tolerance;
    if (a.y - b.y).abs() < threshold {
        a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
    } else {
        b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal)
    }
}

/// Return the page's fragments in approximate reading order.
pub fn order_fragments(page: &Page, row_tolerance: f32) -> Vec<&TextFragment> {
    let non_finite = page
        .fragments
        .iter()
        .filter(|f| !f.has_finite_geometry())
        .count();
    if non_finite > 0 {
        log::warn!(
            "{} fragment(s) with non-finite coordinates; their order is undefined",
            non_finite
        );
    }

    let mut compare =
        |a: &&TextFragment, b: &&TextFragment| reading_order(a, b, row_tolerance);
    stable_merge_sort(page.fragments.iter().collect(), &mut compare)
}

/// Top-down merge sort that keeps the left element on anything but a
/// strict `Less` from the right, so ties preserve input order.
fn stable_merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = stable_merge_sort(items, compare);
    let right = stable_merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if compare(r, l) == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);

    merged
}
