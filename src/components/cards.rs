//! App-specific cards for applications, assessments and reports.
//!
//! DESIGN
//! ======
//! Each card takes the matching data model from `types` rather than a flat
//! list of string props, and exposes row actions through `ActionButtons`.

use leptos::prelude::*;

use crate::components::button::ActionButtons;
use crate::components::stats::{ProgressBar, StatusBadge};
use crate::types::{Application, Assessment, Report, Size};

#[component]
pub fn AppCard(
    app: Application,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let status_style = format!("--status-color: {}", app.status_color);
    view! {
        <a
            href=app.href
            class="app-card"
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <span class="app-card__icon" aria-hidden="true">{app.icon}</span>
            <h3 class="app-card__title">{app.title}</h3>
            <p class="app-card__description">{app.description}</p>
            <span class="app-card__status" style=status_style>{app.status}</span>
            {app.version.map(|version| view! { <span class="app-card__version">{format!("v{version}")}</span> })}
        </a>
    }
}

#[component]
pub fn AssessmentCard(
    assessment: Assessment,
    #[prop(optional)] on_edit: Option<Callback<()>>,
    #[prop(optional)] on_view: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
    #[prop(optional)] on_export: Option<Callback<()>>,
) -> impl IntoView {
    let Assessment {
        name,
        kind,
        status,
        progress,
        assignee,
        last_modified,
        due_date,
        ..
    } = assessment;

    view! {
        <article class="assessment-card">
            <header class="assessment-card__header">
                <h3 class="assessment-card__name">{name}</h3>
                <StatusBadge status=status size=Size::Sm/>
            </header>
            <p class="assessment-card__type">{kind}</p>
            <ProgressBar value=f64::from(progress) show_label=true/>
            <dl class="assessment-card__meta">
                <dt>"Assignee"</dt><dd>{assignee}</dd>
                <dt>"Modified"</dt><dd>{last_modified}</dd>
                <dt>"Due"</dt><dd>{due_date}</dd>
            </dl>
            <ActionButtons
                on_edit=on_edit
                on_view=on_view
                on_delete=on_delete
                on_export=on_export
                show_download=false
                show_regenerate=false
            />
        </article>
    }
}

#[component]
pub fn ReportCard(
    report: Report,
    #[prop(optional)] on_download: Option<Callback<()>>,
    #[prop(optional)] on_view: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
    #[prop(optional)] on_regenerate: Option<Callback<()>>,
    #[prop(optional)] on_share: Option<Callback<()>>,
) -> impl IntoView {
    let downloads = match report.download_count {
        1 => "1 download".to_owned(),
        n => format!("{n} downloads"),
    };
    view! {
        <article class="report-card">
            <header class="report-card__header">
                <h3 class="report-card__name">{report.name}</h3>
                <StatusBadge status=report.status size=Size::Sm/>
            </header>
            <p class="report-card__type">{format!("{} · {}", report.kind, report.format.to_uppercase())}</p>
            {report.description.map(|text| view! { <p class="report-card__description">{text}</p> })}
            <dl class="report-card__meta">
                <dt>"Generated"</dt><dd>{report.generated_date}</dd>
                <dt>"By"</dt><dd>{report.generated_by}</dd>
                <dt>"Size"</dt><dd>{report.file_size}</dd>
            </dl>
            <span class="report-card__downloads">{downloads}</span>
            <div class="report-card__actions">
                <ActionButtons
                    on_download=on_download
                    on_view=on_view
                    on_delete=on_delete
                    on_regenerate=on_regenerate
                    show_edit=false
                    show_export=false
                />
                {on_share.map(|on_share| view! {
                    <button class="btn btn--ghost btn--sm" type="button" on:click=move |_| on_share.run(())>
                        "Share"
                    </button>
                })}
            </div>
        </article>
    }
}
