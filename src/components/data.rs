//! Data display: cards, grids and the activity feed.

use leptos::prelude::*;

use crate::components::stats::{ProgressBar, StatusBadge};
use crate::types::{ActivityItemData, ActivityType, BadgeVariant, ResponsiveColumns};
use crate::util::classes::{grid_class, visible_activities};

#[component]
pub fn DataCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] status: Option<String>,
    #[prop(optional)] status_variant: Option<BadgeVariant>,
    /// Percent complete, 0-100.
    #[prop(optional)]
    progress: Option<f64>,
    #[prop(default = true)] hover_effect: bool,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <article
            class="data-card"
            class:data-card--hover=hover_effect
            class:data-card--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <header class="data-card__header">
                <h3 class="data-card__title">{title}</h3>
                {status.map(|status| match status_variant {
                    Some(variant) => view! { <StatusBadge status=status variant=variant/> }.into_any(),
                    None => view! { <StatusBadge status=status/> }.into_any(),
                })}
            </header>
            {subtitle.map(|subtitle| view! { <p class="data-card__subtitle">{subtitle}</p> })}
            {progress.map(|progress| view! { <ProgressBar value=progress show_label=true/> })}
            {children.map(|children| view! { <div class="data-card__body">{children()}</div> })}
        </article>
    }
}

/// Responsive grid rendering each item through `render`.
#[component]
pub fn DataGrid<T, F, V>(
    items: Vec<T>,
    #[prop(optional)] columns: ResponsiveColumns,
    render: F,
) -> impl IntoView
where
    T: 'static,
    F: Fn(T) -> V + 'static,
    V: IntoView + 'static,
{
    view! {
        <div class=grid_class(columns)>
            {items.into_iter().map(render).collect_view()}
        </div>
    }
}

#[component]
pub fn ActivityItem(item: ActivityItemData) -> impl IntoView {
    let dot_class = format!("activity-item__dot activity-item__dot--{}", item.kind.as_str());
    view! {
        <li class="activity-item">
            <span class=dot_class title=activity_label(item.kind) aria-hidden="true">{item.icon}</span>
            <div class="activity-item__content">
                <p class="activity-item__title">{item.title}</p>
                <p class="activity-item__description">{item.description}</p>
                <p class="activity-item__meta">
                    <time>{item.timestamp}</time>
                    {item.user.map(|user| view! { <span class="activity-item__user">{format!(" · {user}")}</span> })}
                </p>
            </div>
        </li>
    }
}

#[component]
pub fn ActivityFeed(
    activities: Vec<ActivityItemData>,
    #[prop(default = "Recent Activity".to_owned(), into)] title: String,
    /// Defaults to ten entries.
    #[prop(optional)]
    max_items: Option<usize>,
) -> impl IntoView {
    let shown = visible_activities(&activities, max_items).to_vec();
    let empty = shown.is_empty();
    view! {
        <section class="activity-feed">
            <h3 class="activity-feed__title">{title}</h3>
            {if empty {
                view! { <p class="activity-feed__empty">"No recent activity"</p> }.into_any()
            } else {
                view! {
                    <ul class="activity-feed__list">
                        {shown.into_iter().map(|item| view! { <ActivityItem item=item/> }).collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

/// Tooltip text for an activity's status dot.
pub fn activity_label(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::Success => "Completed",
        ActivityType::Info => "Update",
        ActivityType::Warning => "Attention",
        ActivityType::Error => "Failed",
    }
}
