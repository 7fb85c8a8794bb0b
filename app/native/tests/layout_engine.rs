//! Integration tests for the tile layout engine.
//!
//! Drives `TileLayout` through the public API on a simulated platform and
//! checks the geometry committed to it.

use pretty_assertions::assert_eq;
use tessera_lib::config::{LayoutAxis, TileConfig};
use tessera_lib::tiling::{
    AxisKind, Layout, LayoutParams, MoveFlags, Rect, SimulatedPlatform, TileLayout, Window, WindowId,
    calculate_layout,
};

const DIRECTIONAL: [LayoutAxis; 4] = [
    LayoutAxis::LeftToRight,
    LayoutAxis::RightToLeft,
    LayoutAxis::TopToBottom,
    LayoutAxis::BottomToTop,
];

// =============================================================================
// Helpers
// =============================================================================

fn square() -> Rect { Rect::new(0, 0, 1000, 1000) }

fn new_layout(area: Rect) -> TileLayout<SimulatedPlatform> { TileLayout::new(SimulatedPlatform::new(area)) }

/// Creates windows 1..=count in order, so the last one ends up at the head.
fn create_windows(layout: &mut TileLayout<SimulatedPlatform>, count: WindowId) {
    for id in 1..=count {
        layout.window_created(Window::new(id), false);
    }
}

fn order(layout: &TileLayout<SimulatedPlatform>) -> Vec<WindowId> { layout.windows().ids().collect() }

fn windows(count: WindowId) -> Vec<Window> { (1..=count).map(Window::new).collect() }

// =============================================================================
// Reference Example
// =============================================================================

#[test]
fn test_default_layout_three_windows() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 3);
    assert_eq!(order(&layout), vec![3, 2, 1]);

    layout.reflow();

    let platform = layout.platform();
    assert_eq!(platform.frame_of(3), Some(Rect::new(0, 0, 600, 1000)));
    assert_eq!(platform.frame_of(2), Some(Rect::new(600, 0, 400, 500)));
    assert_eq!(platform.frame_of(1), Some(Rect::new(600, 500, 400, 500)));
    assert_eq!(layout.layout_symbol(3), "[]=");
}

#[test]
fn test_reflow_commits_one_batch_with_tile_flags() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 4);
    layout.reflow();

    let batches = layout.platform().batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 4);
    assert!(batches[0].iter().all(|mv| mv.flags == MoveFlags::TILE));
}

// =============================================================================
// Coverage
// =============================================================================

/// Frames of every directional configuration partition the working area.
#[test]
fn test_frames_partition_working_area() {
    let areas = [square(), Rect::new(0, 25, 1920, 1055), Rect::new(-1280, 0, 1279, 1023)];

    for area in areas {
        for primary in DIRECTIONAL {
            for region in DIRECTIONAL {
                for count in 1..=7 {
                    for master_count in 0..=count {
                        for fraction in [0.0, 0.33, 0.6, 1.0] {
                            let params = LayoutParams {
                                primary_axis: primary,
                                master_area_axis: region,
                                stack_area_axis: region,
                                master_fraction: fraction,
                                master_count,
                            };
                            let frames = calculate_layout(&windows(count as WindowId), &area, &params);
                            assert_partition(&area, &frames, &params);
                        }
                    }
                }
            }
        }
    }
}

fn assert_partition(area: &Rect, frames: &[(WindowId, Rect)], params: &LayoutParams) {
    let total: i64 = frames.iter().map(|(_, frame)| frame.area()).sum();
    assert_eq!(total, area.area(), "area not covered for {params:?} in {area}");

    for (i, (_, a)) in frames.iter().enumerate() {
        assert!(area.contains_rect(a), "{a} escapes {area} for {params:?}");
        for (_, b) in &frames[i + 1..] {
            assert!(!a.intersects(b), "{a} overlaps {b} for {params:?}");
        }
    }
}

#[test]
fn test_monocle_primary_gives_everyone_the_working_area() {
    let params = LayoutParams {
        primary_axis: LayoutAxis::Monocle,
        master_area_axis: LayoutAxis::Monocle,
        stack_area_axis: LayoutAxis::Monocle,
        ..LayoutParams::default()
    };
    let frames = calculate_layout(&windows(4), &square(), &params);

    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|(_, frame)| *frame == square()));
}

#[test]
fn test_every_window_gets_exactly_one_frame() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 20);
    layout.adjust_master_count(3);

    let frames = layout.compute_frames(&square());
    let mut ids: Vec<WindowId> = frames.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids[..4].to_vec(), order(&layout)[..4].to_vec(), "Master windows come first, in order");

    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

// =============================================================================
// Clamping
// =============================================================================

#[test]
fn test_master_fraction_is_idempotent_at_bounds() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 2);

    for _ in 0..30 {
        layout.adjust_master_fraction(0.1);
        assert!(layout.params().master_fraction <= 1.0);
    }
    assert!((layout.params().master_fraction - 1.0).abs() < f64::EPSILON);
    layout.adjust_master_fraction(0.1);
    assert!((layout.params().master_fraction - 1.0).abs() < f64::EPSILON);

    for _ in 0..30 {
        layout.adjust_master_fraction(-0.1);
        assert!(layout.params().master_fraction >= 0.0);
    }
    assert!(layout.params().master_fraction.abs() < f64::EPSILON);
}

#[test]
fn test_master_count_never_negative() {
    let mut layout = new_layout(square());
    for delta in [-3, 2, -1, -1, -1, 5, -10, 1] {
        layout.adjust_master_count(delta);
    }
    assert_eq!(layout.params().master_count, 1);
    assert_eq!(layout.platform().batches().len(), 8, "Every adjustment reflows");
}

#[test]
fn test_config_values_are_clamped() {
    let config = TileConfig {
        master_area_factor: 7.5,
        master_area_windows_count: 0,
        ..TileConfig::default()
    };
    let mut layout = TileLayout::from_config(SimulatedPlatform::new(square()), &config);
    create_windows(&mut layout, 2);
    layout.reflow();

    assert!((layout.params().master_fraction - 1.0).abs() < f64::EPSILON);
    // No master windows: the stack takes the whole area
    assert_eq!(layout.platform().frame_of(2), Some(Rect::new(0, 0, 1000, 500)));
    assert_eq!(layout.platform().frame_of(1), Some(Rect::new(0, 500, 1000, 500)));
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_shift_next_then_previous_restores_order() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 4);
    let before = order(&layout);

    // Every window but the tail can move forward
    for &id in &before[..before.len() - 1] {
        assert!(layout.shift_next(id));
        assert!(layout.shift_previous(id));
        assert_eq!(order(&layout), before);
    }
}

#[test]
fn test_shift_on_tiny_orderings_is_noop() {
    let mut layout = new_layout(square());
    assert!(!layout.shift_next(1));
    assert!(!layout.shift_previous(1));

    create_windows(&mut layout, 1);
    assert!(!layout.shift_next(1));
    assert!(!layout.shift_previous(1));
    assert!(!layout.shift_to_head(1));
    assert!(layout.platform().batches().is_empty());
}

#[test]
fn test_promote_head_is_noop() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 3);

    assert!(!layout.shift_to_head(3));
    assert!(layout.platform().batches().is_empty());

    assert!(layout.shift_to_head(1));
    assert_eq!(order(&layout), vec![1, 3, 2]);
    assert_eq!(layout.platform().frame_of(1), Some(Rect::new(0, 0, 600, 1000)));
}

#[test]
fn test_create_then_destroy_round_trip() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 3);
    let before = order(&layout);

    layout.window_created(Window::new(9), true);
    assert_eq!(order(&layout)[0], 9);
    layout.window_destroyed(9, true);

    assert_eq!(order(&layout), before);
}

// =============================================================================
// Axis Changes
// =============================================================================

#[test]
fn test_axis_change_notifies_listeners() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut layout = new_layout(square());
    let sink = Rc::clone(&seen);
    layout.on_layout_changed(move |params| sink.borrow_mut().push(params.primary_axis));

    layout.cycle_axis(AxisKind::Primary);
    layout.set_primary_axis(LayoutAxis::RightToLeft);
    layout.set_primary_axis(LayoutAxis::TopToBottom);

    assert_eq!(*seen.borrow(), vec![LayoutAxis::RightToLeft, LayoutAxis::TopToBottom]);
}

#[test]
fn test_right_to_left_mirrors_default_layout() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 3);
    layout.set_primary_axis(LayoutAxis::RightToLeft);

    let platform = layout.platform();
    assert_eq!(platform.frame_of(3), Some(Rect::new(400, 0, 600, 1000)));
    assert_eq!(platform.frame_of(2), Some(Rect::new(0, 0, 400, 500)));
    assert_eq!(platform.frame_of(1), Some(Rect::new(0, 500, 400, 500)));
    assert_eq!(layout.layout_symbol(3), "=[]");
}

#[test]
fn test_working_area_change_is_picked_up_on_next_reflow() {
    let mut layout = new_layout(square());
    create_windows(&mut layout, 1);
    layout.reflow();

    layout.platform_mut().set_working_area(Rect::new(1000, 0, 800, 600));
    layout.reflow();
    assert_eq!(layout.platform().frame_of(1), Some(Rect::new(1000, 0, 800, 600)));
}
