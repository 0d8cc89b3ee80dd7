//! Email/password login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin view over [`LoginFormController`]: DOM events are forwarded to the
//! controller and its state is mirrored into an `RwSignal` for rendering.
//! The host supplies the async login call and owns the form-level error.

use leptos::prelude::*;

use crate::auth::{LoginFormConfig, LoginFormController, LoginHandler};
use crate::state::login_form::{Field, LoginFormData, LoginFormState};
use crate::types::{ButtonSize, ButtonVariant};
use crate::util::classes::button_class;

/// Login form with email, password and optional "remember me".
///
/// Static options come from `config`. The reactive `loading` and `error`
/// props override `config.loading` and `config.error` whenever they are set.
#[component]
pub fn LoginForm(
    #[prop(optional)] config: LoginFormConfig,
    /// Authentication call run after local validation passes.
    #[prop(optional)]
    on_login: Option<LoginHandler>,
    /// Receives the submitted data once `on_login` resolves.
    #[prop(optional)]
    on_login_event: Option<Callback<LoginFormData>>,
    #[prop(into, optional)] loading: MaybeProp<bool>,
    /// Form-level error owned by the host.
    #[prop(into, optional)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let mut config = config;
    if let Some(message) = error.get_untracked() {
        config.error = message;
    }
    let base_loading = config.loading;
    let show_remember_me = config.show_remember_me;
    let show_links = config.show_links;
    let controller = LoginFormController::new(&config, on_login);

    let form = RwSignal::new(controller.state());
    controller.observe(move |state| form.set(state.clone()));
    if let Some(on_login_event) = on_login_event {
        controller.on_login_event(move |data| on_login_event.run(data.clone()));
    }
    let controller = StoredValue::new_local(controller);

    Effect::new(move || {
        if let Some(message) = error.get() {
            controller.with_value(|c| c.set_external_error(message));
        }
    });

    let is_loading = move || loading.get().unwrap_or(base_loading);
    let is_busy = move || is_loading() || form.with(LoginFormState::submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked().unwrap_or(base_loading) {
            return;
        }
        let Some(controller) = controller.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            controller.submit().await;
        });
    };

    let field_error = move |field: Field| form.with(|s| s.error(field).to_owned());
    let submit_class = move || {
        button_class(ButtonVariant::Primary, ButtonSize::Lg, is_busy(), "login-form__submit")
    };

    view! {
        <form class="login-form" novalidate=true on:submit=on_submit>
            {move || {
                let message = form.with(|s| s.external_error().to_owned());
                (!message.is_empty())
                    .then(|| view! { <div class="login-form__alert" role="alert">{message}</div> })
            }}

            <div class="login-form__field">
                <label class="login-form__label" for="login-email">"Email"</label>
                <input
                    id="login-email"
                    class="login-form__input"
                    class:login-form__input--invalid=move || !field_error(Field::Email).is_empty()
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || form.with(|s| s.email().to_owned())
                    disabled=is_loading
                    on:input=move |ev| {
                        controller.with_value(|c| c.set_field(Field::Email, event_target_value(&ev)));
                    }
                    on:focus=move |_| controller.with_value(|c| c.focus(Field::Email))
                    on:blur=move |_| controller.with_value(|c| c.blur(Field::Email))
                />
                {move || {
                    let message = field_error(Field::Email);
                    (!message.is_empty())
                        .then(|| view! { <p class="login-form__error">{message}</p> })
                }}
            </div>

            <div class="login-form__field">
                <label class="login-form__label" for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="login-form__input"
                    class:login-form__input--invalid=move || !field_error(Field::Password).is_empty()
                    type="password"
                    autocomplete="current-password"
                    placeholder="••••••••"
                    prop:value=move || form.with(|s| s.password().to_owned())
                    disabled=is_loading
                    on:input=move |ev| {
                        controller.with_value(|c| c.set_field(Field::Password, event_target_value(&ev)));
                    }
                    on:focus=move |_| controller.with_value(|c| c.focus(Field::Password))
                    on:blur=move |_| controller.with_value(|c| c.blur(Field::Password))
                />
                {move || {
                    let message = field_error(Field::Password);
                    (!message.is_empty())
                        .then(|| view! { <p class="login-form__error">{message}</p> })
                }}
            </div>

            {show_remember_me.then(|| view! {
                <label class="login-form__remember">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(LoginFormState::remember_me)
                        disabled=is_loading
                        on:change=move |ev| {
                            controller.with_value(|c| c.set_remember_me(event_target_checked(&ev)));
                        }
                    />
                    <span>"Remember me"</span>
                </label>
            })}

            <button class=submit_class type="submit" disabled=is_busy>
                {move || if is_busy() { "Signing in…" } else { "Sign in" }}
            </button>

            {show_links.then(|| view! {
                <div class="login-form__links">
                    <a href="/forgot-password" class="login-form__link">"Forgot password?"</a>
                    <a href="/signup" class="login-form__link">"Create an account"</a>
                </div>
            })}
        </form>
    }
}
