use super::*;
use crate::types::Size;

// =============================================================
// join_classes / button classes
// =============================================================

#[test]
fn join_classes_skips_blank_parts() {
    assert_eq!(join_classes(["a", "", "  ", " b "]), "a b");
    assert_eq!(join_classes([]), "");
}

#[test]
fn button_class_defaults() {
    assert_eq!(
        button_class(ButtonVariant::default(), ButtonSize::default(), false, ""),
        "btn btn--primary btn--md"
    );
}

#[test]
fn button_class_with_loading_and_extra() {
    assert_eq!(
        button_class(ButtonVariant::Danger, ButtonSize::Sm, true, "w-full"),
        "btn btn--danger btn--sm btn--loading w-full"
    );
}

#[test]
fn button_group_orientation() {
    assert!(button_group_class(Orientation::Vertical).ends_with("--vertical"));
    assert!(button_group_class(Orientation::default()).ends_with("--horizontal"));
}

// =============================================================
// Status badges
// =============================================================

#[test]
fn status_words_map_to_variants() {
    assert_eq!(status_variant_for("Completed"), BadgeVariant::Success);
    assert_eq!(status_variant_for("in_progress"), BadgeVariant::Warning);
    assert_eq!(status_variant_for("In-Review"), BadgeVariant::Warning);
    assert_eq!(status_variant_for(" overdue "), BadgeVariant::Error);
    assert_eq!(status_variant_for("archived"), BadgeVariant::Info);
}

#[test]
fn badge_class_includes_variant_and_size() {
    assert_eq!(badge_class(BadgeVariant::Error, Size::Sm), "badge badge--error badge--sm");
}

// =============================================================
// progress_percent
// =============================================================

#[test]
fn progress_percent_scales_and_clamps() {
    assert!((progress_percent(25.0, 100.0) - 25.0).abs() < f64::EPSILON);
    assert!((progress_percent(3.0, 4.0) - 75.0).abs() < f64::EPSILON);
    assert!((progress_percent(150.0, 100.0) - 100.0).abs() < f64::EPSILON);
    assert!(progress_percent(-5.0, 100.0).abs() < f64::EPSILON);
}

#[test]
fn progress_percent_degenerate_max_is_zero() {
    assert!(progress_percent(5.0, 0.0).abs() < f64::EPSILON);
    assert!(progress_percent(5.0, -1.0).abs() < f64::EPSILON);
    assert!(progress_percent(5.0, f64::NAN).abs() < f64::EPSILON);
    assert!(progress_percent(f64::NAN, 10.0).abs() < f64::EPSILON);
}

// =============================================================
// grid / activities / navigation
// =============================================================

#[test]
fn grid_class_uses_resolved_columns() {
    assert_eq!(
        grid_class(ResponsiveColumns::default()),
        "grid grid-sm-1 grid-md-2 grid-lg-3 grid-xl-4"
    );
}

fn activities(n: usize) -> Vec<ActivityItemData> {
    (0..n)
        .map(|i| ActivityItemData {
            id: i.to_string(),
            ..ActivityItemData::default()
        })
        .collect()
}

#[test]
fn visible_activities_defaults_to_ten() {
    let items = activities(15);
    let shown = visible_activities(&items, None);
    assert_eq!(shown.len(), DEFAULT_MAX_ACTIVITIES);
    assert_eq!(shown[0].id, "0");
}

#[test]
fn visible_activities_respects_limit_and_short_lists() {
    let items = activities(3);
    assert_eq!(visible_activities(&items, Some(2)).len(), 2);
    assert_eq!(visible_activities(&items, Some(50)).len(), 3);
    assert!(visible_activities(&items, Some(0)).is_empty());
}

#[test]
fn mark_active_matches_href_or_label() {
    let items = vec![
        NavigationItem {
            label: "Dashboard".to_owned(),
            href: "/".to_owned(),
            ..NavigationItem::default()
        },
        NavigationItem {
            label: "Reports".to_owned(),
            href: "/reports".to_owned(),
            active: true,
            ..NavigationItem::default()
        },
    ];
    let marked = mark_active(&items, "dashboard");
    assert!(marked[0].active);
    assert!(!marked[1].active);

    let by_href = mark_active(&items, "/reports");
    assert!(!by_href[0].active);
    assert!(by_href[1].active);
}
