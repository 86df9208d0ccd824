//! # Path Merger
//!
//! Stitches polyline fragments that share endpoints into continuous paths.
//!
//! Drawings often split one wall run across several primitives. Before the
//! fragments become wall paths they are deduplicated by their unordered
//! endpoint pair and then joined greedily:
//!
//! ```text
//! tail → head   a b c + c d   = a b c d
//! head ← tail   a b c + x a   = x a b c
//! tail → tail   a b c + d c   = a b c d
//! head → head   a b c + a x   = c b a x
//! ```


use crate::spatial::GridKey;
use glam::DVec2;
use std::collections::HashSet;

/// Stable key of a fragment's unordered endpoint pair, `"x1,y1:x2,y2"`.
///
/// The lexicographically smaller point (x, then y) comes first.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use wall_network::merge::fragment_key;
///
/// let key = fragment_key(DVec2::new(5.0, 0.0), DVec2::new(0.0, 0.5));
/// assert_eq!(key, "0,0.5:5,0");
/// assert_eq!(key, fragment_key(DVec2::new(0.0, 0.5), DVec2::new(5.0, 0.0)));
/// ```
pub fn fragment_key(head: DVec2, tail: DVec2) -> String {
    let (first, second) = if head.x < tail.x || (head.x == tail.x && head.y < tail.y) {
        (head, tail)
    } else {
        (tail, head)
    };
    format!("{},{}:{},{}", first.x, first.y, second.x, second.y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Join {
    Append,
    Prepend,
    AppendReversed,
    ReverseThenAppend,
}

/// Greedy endpoint joiner for polyline fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathMerger;

impl PathMerger {
    /// Creates a merger.
    pub fn new() -> Self {
        Self
    }

    /// Drops short and duplicate fragments, then joins the rest.
    ///
    /// Each output path is seeded with the first unconsumed fragment. The
    /// remaining fragments are scanned from the back, and the scan repeats
    /// until a full pass joins nothing.
    pub fn merge(&self, fragments: Vec<Vec<DVec2>>) -> Vec<Vec<DVec2>> {
        let mut seen = HashSet::new();
        let mut remaining: Vec<Vec<DVec2>> = fragments
            .into_iter()
            .filter(|f| f.len() >= 2)
            .filter(|f| seen.insert(fragment_key(f[0], f[f.len() - 1])))
            .collect();

        let mut merged = Vec::new();
        while !remaining.is_empty() {
            let mut current = remaining.remove(0);

            loop {
                let mut joined_any = false;
                let mut i = remaining.len();
                while i > 0 {
                    i -= 1;
                    if let Some(join) = classify(&current, &remaining[i]) {
                        let fragment = remaining.remove(i);
                        current = apply(current, fragment, join);
                        joined_any = true;
                    }
                }
                if !joined_any {
                    break;
                }
            }

            merged.push(current);
        }
        merged
    }
}

fn same_point(a: DVec2, b: DVec2) -> bool {
    GridKey::from_point(a) == GridKey::from_point(b)
}

fn classify(path: &[DVec2], fragment: &[DVec2]) -> Option<Join> {
    let (head, tail) = (path[0], path[path.len() - 1]);
    let (f_head, f_tail) = (fragment[0], fragment[fragment.len() - 1]);

    if same_point(tail, f_head) {
        Some(Join::Append)
    } else if same_point(head, f_tail) {
        Some(Join::Prepend)
    } else if same_point(tail, f_tail) {
        Some(Join::AppendReversed)
    } else if same_point(head, f_head) {
        Some(Join::ReverseThenAppend)
    } else {
        None
    }
}

fn apply(mut path: Vec<DVec2>, mut fragment: Vec<DVec2>, join: Join) -> Vec<DVec2> {
    match join {
        Join::Append => {
            path.extend_from_slice(&fragment[1..]);
            path
        }
        Join::Prepend => {
            fragment.extend_from_slice(&path[1..]);
            fragment
        }
        Join::AppendReversed => {
            fragment.reverse();
            path.extend_from_slice(&fragment[1..]);
            path
        }
        Join::ReverseThenAppend => {
            path.reverse();
            path.extend_from_slice(&fragment[1..]);
            path
        }
    }
}
