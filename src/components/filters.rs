//! Search box, select filter, and the panel that frames them.

use leptos::prelude::*;

use crate::components::terminal::TerminalPrompt;
use crate::types::{FilterOption, Size};

#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = "search".to_owned(), into)] id: String,
    #[prop(optional)] size: Size,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_owned());
    let label_for = id.clone();
    view! {
        <div class=format!("search-input search-input--{}", size.as_str())>
            {label.map(move |label| view! { <label class="search-input__label" for=label_for>{label}</label> })}
            <input
                id=id
                class="search-input__field"
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn FilterSelect(
    #[prop(into)] value: Signal<String>,
    options: Vec<FilterOption>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = "filter".to_owned(), into)] id: String,
    #[prop(optional)] size: Size,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let label_for = id.clone();
    view! {
        <div class=format!("filter-select filter-select--{}", size.as_str())>
            {label.map(move |label| view! { <label class="filter-select__label" for=label_for>{label}</label> })}
            <select
                id=id
                class="filter-select__field"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(on_change) = on_change {
                        on_change.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|option| {
                        let selected = {
                            let option_value = option.value.clone();
                            move || value.get() == option_value
                        };
                        view! {
                            <option value=option.value disabled=option.disabled selected=selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn FilterPanel(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] prompt_path: Option<String>,
    #[prop(optional, into)] prompt_command: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="filter-panel">
            {prompt_command.map(|command| view! {
                <TerminalPrompt path=prompt_path.unwrap_or_else(|| "~".to_owned()) command=command/>
            })}
            {title.map(|title| view! { <h3 class="filter-panel__title">{title}</h3> })}
            <div class="filter-panel__controls">{children()}</div>
        </section>
    }
}
