#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// progress_percent
// =============================================================

#[test]
fn progress_is_proportional_to_offset() {
    let max = 2000.0;
    for s in [0.0, 250.0, 1000.0, 1999.0, 2000.0] {
        let metrics = ScrollMetrics::new(s, max + 800.0, 800.0);
        assert_eq!(progress_percent(metrics), s / max * 100.0);
    }
}

#[test]
fn progress_midpoint() {
    assert_eq!(progress_percent(ScrollMetrics::new(500.0, 1800.0, 800.0)), 50.0);
}

#[test]
fn unscrollable_page_reports_zero() {
    assert_eq!(progress_percent(ScrollMetrics::new(0.0, 800.0, 800.0)), 0.0);
    assert_eq!(progress_percent(ScrollMetrics::new(0.0, 600.0, 800.0)), 0.0);
}

#[test]
fn overscroll_is_clamped() {
    assert_eq!(progress_percent(ScrollMetrics::new(-40.0, 1800.0, 800.0)), 0.0);
    assert_eq!(progress_percent(ScrollMetrics::new(1200.0, 1800.0, 800.0)), 100.0);
}

#[test]
fn progress_never_nan() {
    let p = progress_percent(ScrollMetrics::new(10.0, f64::NAN, 800.0));
    assert!(!p.is_nan());
}

#[test]
fn progress_style_sets_width() {
    let patch = progress_style(ScrollMetrics::new(250.0, 1800.0, 800.0));
    assert_eq!(patch.get("width"), Some("25%"));
}

// =============================================================
// NavbarStyle
// =============================================================

#[test]
fn navbar_top_until_threshold_exceeded() {
    assert_eq!(NavbarStyle::for_offset(0.0, 50.0), NavbarStyle::Top);
    assert_eq!(NavbarStyle::for_offset(50.0, 50.0), NavbarStyle::Top);
    assert_eq!(NavbarStyle::for_offset(50.5, 50.0), NavbarStyle::Scrolled);
}

#[test]
fn navbar_patches() {
    let top = NavbarStyle::Top.patch();
    assert_eq!(top.get("backdrop-filter"), Some("blur(10px)"));
    assert_eq!(top.get("box-shadow"), Some("none"));

    let scrolled = NavbarStyle::Scrolled.patch();
    assert_eq!(scrolled.get("backdrop-filter"), Some("blur(15px)"));
    assert_eq!(scrolled.get("box-shadow"), Some("0 5px 20px rgba(0, 0, 0, 0.1)"));
}

#[test]
fn navbar_style_is_idempotent() {
    let a = NavbarStyle::for_offset(300.0, 50.0).patch();
    let b = NavbarStyle::for_offset(300.0, 50.0).patch();
    assert_eq!(a, b);
}

// =============================================================
// FrameGate
// =============================================================

#[test]
fn gate_admits_one_request_per_frame() {
    let mut gate = FrameGate::default();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.request());
    assert!(gate.is_pending());
}

#[test]
fn gate_reopens_after_frame() {
    let mut gate = FrameGate::default();
    gate.request();
    gate.complete();
    assert!(!gate.is_pending());
    assert!(gate.request());
}
