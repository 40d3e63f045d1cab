use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;

use serde::Serialize;

use crate::types::rosary_data::{BeadKind, VisualBead};

pub const BEAD_COUNT: usize = 60;
pub const CRUCIFIX_INDEX: usize = 0;
pub const PENDANT_LEN: usize = 4;
pub const LOOP_START: usize = 1 + PENDANT_LEN; // 5
pub const LOOP_LEN: usize = 55;
pub const BEADS_PER_LOOP_DECADE: usize = 11;
/// Clicking the centerpiece lands here: one past the last real bead.
pub const CONCLUSION_SLOT: usize = BEAD_COUNT;

pub const MAJOR_RADIUS: f32 = 7.0; // Our Father beads
pub const MINOR_RADIUS: f32 = 5.0; // Hail Mary beads

pub const VIEW_BOX: (f32, f32) = (400.0, 380.0);
pub const CENTERPIECE: Point = Point { x: 200.0, y: 175.0 };
const CENTERPIECE_REACH: f32 = 20.0;

const CRUCIFIX_ANCHOR: Point = Point { x: 220.0, y: 290.0 };
const PENDANT_X: f32 = 200.0;
const PENDANT_YS: [f32; PENDANT_LEN] = [265.0, 240.0, 220.0, 200.0];

const LOOP_CENTER: Point = Point { x: 200.0, y: 90.0 };
const LOOP_RADIUS_X: f32 = 95.0;
const LOOP_RADIUS_Y: f32 = 75.0;

// Beads this small (the crucifix anchor has r = 0) still get a usable click area.
const MIN_HIT_RADIUS: f32 = 9.0;

/// The cross hangs below its anchor: a vertical bar and a crossbar a little below the top.
pub const CROSS_LENGTH: f32 = 40.0;
pub const CROSS_ARM: f32 = 12.0;
pub const CROSS_BAR_DROP: f32 = 12.0;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    fn of(bead: &VisualBead) -> Self {
        Point { x: bead.cx, y: bead.cy }
    }
}

fn bead(center: Point, kind: BeadKind) -> VisualBead {
    let r = match kind {
        BeadKind::Major => MAJOR_RADIUS,
        BeadKind::Minor => MINOR_RADIUS,
    };
    VisualBead { cx: center.x, cy: center.y, r, kind }
}

/// Crucifix anchor, the four pendant beads, then the 55 loop beads.
pub fn build_layout() -> Vec<VisualBead> {
    let mut layout = Vec::with_capacity(BEAD_COUNT);

    // The cross itself is drawn separately; this is where the chain meets it.
    layout.push(VisualBead { cx: CRUCIFIX_ANCHOR.x, cy: CRUCIFIX_ANCHOR.y, r: 0.0, kind: BeadKind::Major });

    for (i, &y) in PENDANT_YS.iter().enumerate() {
        let kind = if i == 0 { BeadKind::Major } else { BeadKind::Minor };
        layout.push(bead(Point { x: PENDANT_X, y }, kind));
    }

    // Start at the bottom of the ellipse and walk counter-clockwise (angle subtracted).
    for i in 0..LOOP_LEN {
        let angle = FRAC_PI_2 - (i as f32 / LOOP_LEN as f32) * TAU;
        let center = Point {
            x: LOOP_CENTER.x + angle.cos() * LOOP_RADIUS_X,
            y: LOOP_CENTER.y + angle.sin() * LOOP_RADIUS_Y,
        };
        let kind = if i % BEADS_PER_LOOP_DECADE == 0 { BeadKind::Major } else { BeadKind::Minor };
        layout.push(bead(center, kind));
    }

    layout
}

/// Straight chain segments between beads, in drawing order.
pub fn chain_segments(layout: &[VisualBead]) -> Vec<(Point, Point)> {
    let mut segments = Vec::with_capacity(LOOP_LEN + PENDANT_LEN + 2);
    let last = layout.len() - 1;

    let below_centerpiece = Point { x: CENTERPIECE.x, y: CENTERPIECE.y + CENTERPIECE_REACH };
    segments.push((below_centerpiece, Point::of(&layout[PENDANT_LEN])));
    for i in (2..=PENDANT_LEN).rev() {
        segments.push((Point::of(&layout[i]), Point::of(&layout[i - 1])));
    }
    segments.push((Point::of(&layout[1]), Point::of(&layout[CRUCIFIX_INDEX])));

    for i in LOOP_START..last {
        segments.push((Point::of(&layout[i]), Point::of(&layout[i + 1])));
    }
    segments.push((Point::of(&layout[last]), Point::of(&layout[LOOP_START])));

    let above_centerpiece = Point { x: CENTERPIECE.x, y: CENTERPIECE.y - CENTERPIECE_REACH };
    segments.push((above_centerpiece, Point::of(&layout[LOOP_START])));

    segments
}

/// SVG path data (`M x y L x y ...`) for the whole chain.
pub fn chain_path(layout: &[VisualBead]) -> String {
    let mut path = String::new();
    for (from, to) in chain_segments(layout) {
        // Writing into a String cannot fail.
        let _ = write!(path, "M {} {} L {} {} ", from.x, from.y, to.x, to.y);
    }
    path
}

/// Which bead slot (including `CONCLUSION_SLOT` for the centerpiece) lies under a point.
pub fn hit_test(layout: &[VisualBead], x: f32, y: f32) -> Option<usize> {
    let distance = |cx: f32, cy: f32| ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();

    if let Some(anchor) = layout.get(CRUCIFIX_INDEX) {
        let on_cross = (x - anchor.cx).abs() <= CROSS_ARM && (anchor.cy..=anchor.cy + CROSS_LENGTH).contains(&y);
        if on_cross {
            return Some(CRUCIFIX_INDEX);
        }
    }

    let nearest = layout
        .iter()
        .enumerate()
        .map(|(i, b)| (i, distance(b.cx, b.cy), b.r.max(MIN_HIT_RADIUS)))
        .filter(|&(_, d, reach)| d <= reach)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _, _)| i);

    nearest.or_else(|| {
        (distance(CENTERPIECE.x, CENTERPIECE.y) <= CENTERPIECE_REACH * 0.75).then_some(CONCLUSION_SLOT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_sixty_slots_with_anchor_first() {
        let layout = build_layout();
        assert_eq!(layout.len(), 60);
        assert_eq!(layout[0].r, 0.0);
        assert_eq!(layout[1].kind, BeadKind::Major);
        assert!(layout[2..5].iter().all(|b| b.kind == BeadKind::Minor));
        assert!(layout[1..5].windows(2).all(|w| w[0].cy > w[1].cy));
    }

    #[test]
    fn loop_has_five_major_beads_every_eleven() {
        let layout = build_layout();
        let majors: Vec<usize> = layout[LOOP_START..]
            .iter()
            .enumerate()
            .filter(|(_, b)| b.kind == BeadKind::Major)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(majors, vec![0, 11, 22, 33, 44]);
    }

    #[test]
    fn loop_starts_at_the_bottom_and_runs_counter_clockwise() {
        let layout = build_layout();
        let first = layout[LOOP_START];
        assert!((first.cx - 200.0).abs() < 1e-3);
        assert!((first.cy - 165.0).abs() < 1e-3);
        // y grows downwards, so counter-clockwise from the bottom heads right then up.
        assert!(layout[LOOP_START + 1].cx > first.cx);
        assert!(layout[LOOP_START + 1].cy < first.cy);
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(build_layout(), build_layout());
    }

    #[test]
    fn chain_connects_pendant_loop_and_centerpiece() {
        let layout = build_layout();
        let segments = chain_segments(&layout);
        assert_eq!(segments.len(), 61);
        let path = chain_path(&layout);
        assert!(path.starts_with("M 200 195 L 200 200 "));
        assert_eq!(path.matches('M').count(), 61);
    }

    #[test]
    fn hit_test_finds_beads_anchor_and_centerpiece() {
        let layout = build_layout();
        assert_eq!(hit_test(&layout, 200.0, 240.0), Some(2));
        assert_eq!(hit_test(&layout, 221.0, 291.0), Some(CRUCIFIX_INDEX));
        assert_eq!(hit_test(&layout, 220.0, 302.0), Some(CRUCIFIX_INDEX));
        assert_eq!(hit_test(&layout, 220.0, 315.0), Some(CRUCIFIX_INDEX));
        assert_eq!(hit_test(&layout, layout[30].cx + 1.0, layout[30].cy), Some(30));
        assert_eq!(hit_test(&layout, 200.0, 175.0), Some(CONCLUSION_SLOT));
        assert_eq!(hit_test(&layout, 5.0, 5.0), None);
    }

    #[test]
    fn whole_cross_is_clickable() {
        let layout = build_layout();
        for (x, y) in [(220.0, 290.0), (210.0, 302.0), (232.0, 302.0), (208.0, 302.0), (220.0, 328.0), (220.0, 330.0)] {
            assert_eq!(hit_test(&layout, x, y), Some(CRUCIFIX_INDEX), "({}, {})", x, y);
        }
        assert_eq!(hit_test(&layout, 220.0, 345.0), None);
        assert_eq!(hit_test(&layout, 240.0, 302.0), None);
    }
}
