//! Set operations on [`RealSet`]

use super::set::{Bound, Endpoint, Exclusion, Interval, RealSet};
use std::cmp::Ordering;

/// Endpoints closer than this are treated as the same point
const ENDPOINT_TOLERANCE: f64 = 1e-12;

pub fn endpoint_cmp(a: &Endpoint, b: &Endpoint) -> Ordering {
    if a.value == b.value || (a.approx - b.approx).abs() <= ENDPOINT_TOLERANCE {
        return Ordering::Equal;
    }
    a.approx.total_cmp(&b.approx)
}

pub fn bounds_contradict(min: &Bound, max: &Bound) -> bool {
    use Bound as B;
    match (min, max) {
        (B::Unbounded, _) | (_, B::Unbounded) => false,
        (B::Inclusive(a), B::Inclusive(b)) => endpoint_cmp(a, b) == Ordering::Greater,
        (B::Inclusive(a), B::Exclusive(b))
        | (B::Exclusive(a), B::Inclusive(b))
        | (B::Exclusive(a), B::Exclusive(b)) => endpoint_cmp(a, b) != Ordering::Less,
    }
}

/// The tighter of two lower bounds
fn max_lower(a: Bound, b: Bound) -> Bound {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, x) | (x, B::Unbounded) => x,
        (a, b) => {
            let (ea, eb) = (a.endpoint(), b.endpoint());
            match ea.zip(eb).map(|(x, y)| endpoint_cmp(x, y)) {
                Some(Ordering::Greater) => a,
                Some(Ordering::Less) => b,
                _ => {
                    if matches!(a, B::Exclusive(_)) {
                        a
                    } else {
                        b
                    }
                }
            }
        }
    }
}

/// The tighter of two upper bounds
fn min_upper(a: Bound, b: Bound) -> Bound {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, x) | (x, B::Unbounded) => x,
        (a, b) => {
            let (ea, eb) = (a.endpoint(), b.endpoint());
            match ea.zip(eb).map(|(x, y)| endpoint_cmp(x, y)) {
                Some(Ordering::Less) => a,
                Some(Ordering::Greater) => b,
                _ => {
                    if matches!(a, B::Exclusive(_)) {
                        a
                    } else {
                        b
                    }
                }
            }
        }
    }
}

pub fn intersect_intervals(a: &Interval, b: &Interval) -> Option<Interval> {
    let min = max_lower(a.min.clone(), b.min.clone());
    let max = min_upper(a.max.clone(), b.max.clone());
    if bounds_contradict(&min, &max) {
        None
    } else {
        Some(Interval::new(min, max))
    }
}

pub fn intersect(a: &RealSet, b: &RealSet) -> RealSet {
    let mut intervals = Vec::new();
    for x in &a.intervals {
        for y in &b.intervals {
            if let Some(ix) = intersect_intervals(x, y) {
                intervals.push(ix);
            }
        }
    }
    let mut exclusions = a.exclusions.clone();
    merge_exclusions(&mut exclusions, &b.exclusions);
    let intervals = merge_intervals(intervals);
    if intervals.is_empty() {
        return RealSet::empty();
    }
    RealSet {
        intervals,
        exclusions,
    }
}

/// Union of two sets
///
/// A point stays excluded only if both operands exclude it; exclusions are
/// compared structurally, so this is exact for the families the domain
/// analyzer produces and conservative otherwise.
pub fn union(a: &RealSet, b: &RealSet) -> RealSet {
    if a.is_empty() {
        return b.clone();
    }
    if b.is_empty() {
        return a.clone();
    }
    let mut intervals = a.intervals.clone();
    intervals.extend(b.intervals.iter().cloned());
    let exclusions = a
        .exclusions
        .iter()
        .filter(|e| b.exclusions.contains(e))
        .cloned()
        .collect();
    RealSet {
        intervals: merge_intervals(intervals),
        exclusions,
    }
}

fn merge_exclusions(into: &mut Vec<Exclusion>, more: &[Exclusion]) {
    for e in more {
        if !into.contains(e) {
            into.push(e.clone());
        }
    }
}

/// Sort intervals and merge those that overlap or touch
pub fn merge_intervals(mut ranges: Vec<Interval>) -> Vec<Interval> {
    if ranges.is_empty() {
        return ranges;
    }

    ranges.sort_by(|a, b| compare_lower_bounds(&a.min, &b.min));

    let mut merged: Vec<Interval> = Vec::new();
    let mut current = ranges[0].clone();

    for next in ranges.iter().skip(1) {
        if ranges_adjacent_or_overlap(&current, next) {
            current = Interval::new(
                min_lower(&current.min, &next.min),
                max_upper(&current.max, &next.max),
            );
        } else {
            merged.push(current);
            current = next.clone();
        }
    }
    merged.push(current);
    merged
}

fn compare_lower_bounds(a: &Bound, b: &Bound) -> Ordering {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, B::Unbounded) => Ordering::Equal,
        (B::Unbounded, _) => Ordering::Less,
        (_, B::Unbounded) => Ordering::Greater,
        (B::Inclusive(v1), B::Inclusive(v2)) | (B::Exclusive(v1), B::Exclusive(v2)) => {
            endpoint_cmp(v1, v2)
        }
        (B::Inclusive(v1), B::Exclusive(v2)) => match endpoint_cmp(v1, v2) {
            Ordering::Equal => Ordering::Less,
            other => other,
        },
        (B::Exclusive(v1), B::Inclusive(v2)) => match endpoint_cmp(v1, v2) {
            Ordering::Equal => Ordering::Greater,
            other => other,
        },
    }
}

fn compare_upper_bounds(a: &Bound, b: &Bound) -> Ordering {
    use Bound as B;
    match (a, b) {
        (B::Unbounded, B::Unbounded) => Ordering::Equal,
        (B::Unbounded, _) => Ordering::Greater,
        (_, B::Unbounded) => Ordering::Less,
        (B::Inclusive(v1), B::Inclusive(v2)) | (B::Exclusive(v1), B::Exclusive(v2)) => {
            endpoint_cmp(v1, v2)
        }
        (B::Inclusive(v1), B::Exclusive(v2)) => match endpoint_cmp(v1, v2) {
            Ordering::Equal => Ordering::Greater,
            other => other,
        },
        (B::Exclusive(v1), B::Inclusive(v2)) => match endpoint_cmp(v1, v2) {
            Ordering::Equal => Ordering::Less,
            other => other,
        },
    }
}

fn ranges_adjacent_or_overlap(r1: &Interval, r2: &Interval) -> bool {
    use Bound as B;
    match (&r1.max, &r2.min) {
        (B::Unbounded, _) | (_, B::Unbounded) => true,
        (B::Inclusive(v1), B::Inclusive(v2))
        | (B::Inclusive(v1), B::Exclusive(v2))
        | (B::Exclusive(v1), B::Inclusive(v2)) => endpoint_cmp(v1, v2) != Ordering::Less,
        (B::Exclusive(v1), B::Exclusive(v2)) => endpoint_cmp(v1, v2) == Ordering::Greater,
    }
}

fn min_lower(a: &Bound, b: &Bound) -> Bound {
    if compare_lower_bounds(a, b) == Ordering::Greater {
        b.clone()
    } else {
        a.clone()
    }
}

fn max_upper(a: &Bound, b: &Bound) -> Bound {
    if compare_upper_bounds(a, b) == Ordering::Less {
        b.clone()
    } else {
        a.clone()
    }
}
