//! Stat cards, status badges and progress bars.

use leptos::prelude::*;

use crate::types::{BadgeVariant, ResponsiveColumns, Size, StatCardData};
use crate::util::classes::{badge_class, grid_class, progress_percent, status_variant_for};

#[component]
pub fn StatCard(stat: StatCardData) -> impl IntoView {
    let style = stat.color.as_ref().map(|color| format!("--stat-color: {color}"));
    view! {
        <div class="stat-card" style=style>
            {stat.icon.map(|icon| view! { <span class="stat-card__icon" aria-hidden="true">{icon}</span> })}
            <span class="stat-card__value">{stat.value.to_string()}</span>
            <span class="stat-card__label">{stat.label}</span>
        </div>
    }
}

#[component]
pub fn StatsGrid(
    stats: Vec<StatCardData>,
    #[prop(optional)] columns: ResponsiveColumns,
) -> impl IntoView {
    view! {
        <div class=grid_class(columns)>
            {stats.into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
        </div>
    }
}

/// Status pill. Without an explicit variant the colour follows the status text.
#[component]
pub fn StatusBadge(
    #[prop(into)] status: String,
    #[prop(optional)] variant: Option<BadgeVariant>,
    #[prop(optional)] size: Size,
) -> impl IntoView {
    let variant = variant.unwrap_or_else(|| status_variant_for(&status));
    view! { <span class=badge_class(variant, size)>{status}</span> }
}

#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<f64>,
    #[prop(default = 100.0)] max: f64,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional)] size: Size,
    #[prop(optional)] show_label: bool,
) -> impl IntoView {
    let percent = move || progress_percent(value.get(), max);
    let color = color.unwrap_or_else(|| "var(--color-primary)".to_owned());
    view! {
        <div
            class=format!("progress progress--{}", size.as_str())
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax=max.to_string()
            aria-valuenow=move || value.get().to_string()
        >
            <div
                class="progress__fill"
                style:width=move || format!("{:.0}%", percent())
                style:background-color=color
            ></div>
            <Show when=move || show_label>
                <span class="progress__label">{move || format!("{:.0}%", percent())}</span>
            </Show>
        </div>
    }
}
