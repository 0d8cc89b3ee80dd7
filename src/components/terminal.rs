//! Terminal-styled chrome used across the dashboard.

use leptos::prelude::*;

use crate::types::Size;

/// Framed panel with optional macOS-style window dots.
#[component]
pub fn TerminalWindow(
    #[prop(default = true)] show_dots: bool,
    #[prop(optional)] padding: Size,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class_name = format!("terminal-window terminal-window--pad-{} {class}", padding.as_str());
    view! {
        <div class=class_name.trim_end().to_owned()>
            {show_dots.then(|| view! {
                <div class="terminal-window__dots" aria-hidden="true">
                    <span class="terminal-window__dot terminal-window__dot--red"></span>
                    <span class="terminal-window__dot terminal-window__dot--yellow"></span>
                    <span class="terminal-window__dot terminal-window__dot--green"></span>
                </div>
            })}
            <div class="terminal-window__body">{children()}</div>
        </div>
    }
}

/// `user@jsd:<path>$ <command>` prompt line.
#[component]
pub fn TerminalPrompt(#[prop(into)] path: String, #[prop(into)] command: String) -> impl IntoView {
    view! {
        <p class="terminal-prompt">
            <span class="terminal-prompt__user">"user@jsd"</span>
            ":"
            <span class="terminal-prompt__path">{path}</span>
            "$ "
            <span class="terminal-prompt__command">{command}</span>
        </p>
    }
}
