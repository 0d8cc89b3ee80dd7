//! Page chrome: header, footer, page shell and sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their content in `PageLayout` so every screen gets the same
//! navigation, document title and terminal-style footer.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::terminal::TerminalPrompt;
use crate::types::{BackgroundVariant, NavigationItem};
use crate::util::classes::mark_active;

#[component]
pub fn AppHeader(
    #[prop(into)] current_page: String,
    #[prop(optional)] navigation: Vec<NavigationItem>,
) -> impl IntoView {
    let items = mark_active(&navigation, &current_page);
    view! {
        <header class="app-header">
            <a href="/" class="app-header__brand">"Joint Standards Dashboard"</a>
            <nav class="app-header__nav">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <a
                            href=item.href
                            class="app-header__link"
                            class:app-header__link--active=item.active
                            aria-current=item.active.then_some("page")
                        >
                            {item.icon.map(|icon| view! { <span class="app-header__icon" aria-hidden="true">{icon}</span> })}
                            {item.label}
                        </a>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub fn AppFooter(
    #[prop(into)] prompt_path: String,
    #[prop(into)] prompt_command: String,
    #[prop(default = "System operational".to_owned(), into)] status_text: String,
) -> impl IntoView {
    view! {
        <footer class="app-footer">
            <TerminalPrompt path=prompt_path command=prompt_command/>
            <span class="app-footer__status">{status_text}</span>
        </footer>
    }
}

/// Full page shell: document title, header, intro, content and footer.
#[component]
pub fn PageLayout(
    #[prop(into)] current_page: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] footer_prompt_path: String,
    #[prop(into)] footer_prompt_command: String,
    #[prop(optional, into)] footer_status_text: Option<String>,
    #[prop(optional)] navigation: Vec<NavigationItem>,
    children: Children,
) -> impl IntoView {
    let footer = match footer_status_text {
        Some(status_text) => view! {
            <AppFooter prompt_path=footer_prompt_path prompt_command=footer_prompt_command status_text=status_text/>
        }
        .into_any(),
        None => view! {
            <AppFooter prompt_path=footer_prompt_path prompt_command=footer_prompt_command/>
        }
        .into_any(),
    };

    view! {
        <Title text=format!("{title} | Joint Standards Dashboard")/>
        <div class="page-layout">
            <AppHeader current_page=current_page navigation=navigation/>
            <main class="page-layout__main">
                <div class="page-layout__intro">
                    <h1 class="page-layout__title">{title}</h1>
                    <p class="page-layout__description">{description}</p>
                </div>
                {children()}
            </main>
            {footer}
        </div>
    }
}

#[component]
pub fn PageSection(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] prompt_path: Option<String>,
    #[prop(optional, into)] prompt_command: Option<String>,
    #[prop(optional)] background: BackgroundVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="page-section"
            class:page-section--surface=background == BackgroundVariant::Surface
        >
            {prompt_command.map(|command| view! {
                <TerminalPrompt path=prompt_path.unwrap_or_else(|| "~".to_owned()) command=command/>
            })}
            {title.map(|title| view! { <h2 class="page-section__title">{title}</h2> })}
            {subtitle.map(|subtitle| view! { <p class="page-section__subtitle">{subtitle}</p> })}
            {children()}
        </section>
    }
}
