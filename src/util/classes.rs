//! CSS class and display helpers for the presentational components.
//!
//! DESIGN
//! ======
//! Components stay thin: anything that decides a class name, a percentage or
//! which items to show is a pure function here so it can be tested without
//! rendering.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

use crate::types::{
    ActivityItemData, BadgeVariant, ButtonSize, ButtonVariant, NavigationItem, Orientation,
    ResponsiveColumns, Size,
};

/// Activity feeds show this many entries when no limit is given.
pub const DEFAULT_MAX_ACTIVITIES: usize = 10;

/// Join non-empty class fragments with single spaces.
#[must_use]
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    loading: bool,
    extra: &str,
) -> String {
    let variant_class = format!("btn--{}", variant.as_str());
    let size_class = format!("btn--{}", size.as_str());
    join_classes([
        "btn",
        variant_class.as_str(),
        size_class.as_str(),
        if loading { "btn--loading" } else { "" },
        extra,
    ])
}

#[must_use]
pub fn button_group_class(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "btn-group btn-group--horizontal",
        Orientation::Vertical => "btn-group btn-group--vertical",
    }
}

#[must_use]
pub fn badge_class(variant: BadgeVariant, size: Size) -> String {
    format!("badge badge--{} badge--{}", variant.as_str(), size.as_str())
}

/// Badge variant implied by a free-form status label.
#[must_use]
pub fn status_variant_for(status: &str) -> BadgeVariant {
    let normalized = status.trim().to_ascii_lowercase().replace(['_', '-'], " ");
    match normalized.as_str() {
        "completed" | "complete" | "approved" | "active" | "passed" | "published" | "online" => {
            BadgeVariant::Success
        }
        "pending" | "in progress" | "draft" | "review" | "in review" | "scheduled" => {
            BadgeVariant::Warning
        }
        "failed" | "rejected" | "overdue" | "error" | "offline" | "expired" => BadgeVariant::Error,
        _ => BadgeVariant::Info,
    }
}

/// Percentage of `value` in `0..=max`, clamped to `0.0..=100.0`.
///
/// A non-positive or non-finite `max` yields `0.0`.
#[must_use]
pub fn progress_percent(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Responsive grid classes, e.g. `grid grid-sm-1 grid-md-2 grid-lg-3 grid-xl-4`.
#[must_use]
pub fn grid_class(columns: ResponsiveColumns) -> String {
    let (sm, md, lg, xl) = columns.resolved();
    format!("grid grid-sm-{sm} grid-md-{md} grid-lg-{lg} grid-xl-{xl}")
}

/// The first `max_items` activities, in feed order.
#[must_use]
pub fn visible_activities(
    items: &[ActivityItemData],
    max_items: Option<usize>,
) -> &[ActivityItemData] {
    let limit = max_items.unwrap_or(DEFAULT_MAX_ACTIVITIES);
    &items[..items.len().min(limit)]
}

/// Copy of `items` with `active` set on the entry whose `href` or label
/// matches `current_page`.
#[must_use]
pub fn mark_active(items: &[NavigationItem], current_page: &str) -> Vec<NavigationItem> {
    items
        .iter()
        .map(|item| NavigationItem {
            active: item.href == current_page || item.label.eq_ignore_ascii_case(current_page),
            ..item.clone()
        })
        .collect()
}
