use macroquad::math::Rect;

use crate::actor::Actor;

/// Overlap with positive area; rects that only share an edge do not touch.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}

/// Index of the first actor in `others` that overlaps `subject`.
pub fn first_hit<A: Actor, B: Actor>(subject: &A, others: &[B]) -> Option<usize> {
    let rect = subject.rect();
    others.iter().position(|other| overlaps(&rect, &other.rect()))
}
