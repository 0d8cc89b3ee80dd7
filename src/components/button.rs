//! Buttons: single button, grouped buttons, and the card action row.

use leptos::prelude::*;

use crate::types::{ButtonSize, ButtonType, ButtonVariant, Orientation};
use crate::util::classes::{button_class, button_group_class};

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    /// Shows a spinner and disables the button.
    #[prop(into, optional)]
    loading: MaybeProp<bool>,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let class_name = move || button_class(variant, size, is_loading(), &class);

    view! {
        <button
            class=class_name
            type=button_type.as_str()
            disabled=move || disabled.get().unwrap_or(false) || is_loading()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            <Show when=is_loading>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}

#[component]
pub fn ButtonGroup(
    #[prop(optional)] orientation: Orientation,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=button_group_class(orientation) role="group">
            {children()}
        </div>
    }
}

/// Edit/view/delete/export/download/regenerate row used on cards.
///
/// A button renders only when its callback is supplied and its `show_*`
/// flag is left on. Callbacks take `Option` so cards can forward their own
/// optional handlers unchanged.
#[component]
#[allow(clippy::fn_params_excessive_bools, clippy::too_many_arguments)]
pub fn ActionButtons(
    #[prop(optional_no_strip)] on_edit: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_view: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_export: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_download: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_regenerate: Option<Callback<()>>,
    #[prop(default = true)] show_edit: bool,
    #[prop(default = true)] show_view: bool,
    #[prop(default = true)] show_delete: bool,
    #[prop(default = true)] show_export: bool,
    #[prop(default = true)] show_download: bool,
    #[prop(default = true)] show_regenerate: bool,
    #[prop(default = ButtonSize::Sm)] size: ButtonSize,
) -> impl IntoView {
    let actions = [
        ("View", ButtonVariant::Secondary, on_view.filter(|_| show_view)),
        ("Edit", ButtonVariant::Secondary, on_edit.filter(|_| show_edit)),
        ("Export", ButtonVariant::Secondary, on_export.filter(|_| show_export)),
        ("Download", ButtonVariant::Primary, on_download.filter(|_| show_download)),
        ("Regenerate", ButtonVariant::Warning, on_regenerate.filter(|_| show_regenerate)),
        ("Delete", ButtonVariant::Danger, on_delete.filter(|_| show_delete)),
    ];

    let buttons = actions
        .into_iter()
        .filter_map(|(label, variant, callback)| {
            callback.map(|callback| {
                view! {
                    <button
                        class=button_class(variant, size, false, "action-buttons__btn")
                        type="button"
                        title=label
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            callback.run(());
                        }
                    >
                        {label}
                    </button>
                }
            })
        })
        .collect_view();

    view! { <div class="action-buttons">{buttons}</div> }
}
