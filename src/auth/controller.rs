//! Login form controller: owns form state and drives submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller sits between the `LoginForm` component and the host. The
//! component forwards DOM events (`input`, `focus`, `blur`, `submit`) to it and
//! mirrors its state into a signal through [`LoginFormController::observe`].
//! The host injects the authentication call as a [`LoginHandler`] and may
//! listen for the `login` event.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded. State sits behind `Rc<RefCell<_>>` and no borrow is held
//! across the login future, so edits are accepted while a submit is in
//! flight. A second `submit` during an outstanding one is a no-op. There is
//! no cancellation: dropping a pending `submit` future only releases the
//! in-flight flag, and no `login` event is emitted for it.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::config::LoginFormConfig;
use super::error::LoginError;
use crate::state::login_form::{Field, LoginFormData, LoginFormState, SubmitStart};
use crate::util::validation::PasswordPolicy;

/// Future returned by a [`LoginHandler`].
pub type LoginFuture = LocalBoxFuture<'static, Result<(), LoginError>>;

/// Injected authentication call.
pub type LoginHandler = Rc<dyn Fn(LoginFormData) -> LoginFuture>;

type StateObserver = Rc<dyn Fn(&LoginFormState)>;
type LoginListener = Rc<dyn Fn(&LoginFormData)>;

/// Build a [`LoginHandler`] from an async closure.
pub fn login_handler<F, Fut>(f: F) -> LoginHandler
where
    F: Fn(LoginFormData) -> Fut + 'static,
    Fut: Future<Output = Result<(), LoginError>> + 'static,
{
    Rc::new(move |data| Box::pin(f(data)))
}

/// Cheaply cloneable handle to one form's state.
#[derive(Clone)]
pub struct LoginFormController {
    inner: Rc<Inner>,
}

struct Inner {
    state: RefCell<LoginFormState>,
    policy: PasswordPolicy,
    on_login: Option<LoginHandler>,
    observers: RefCell<Vec<StateObserver>>,
    listeners: RefCell<Vec<LoginListener>>,
}

impl LoginFormController {
    pub fn new(config: &LoginFormConfig, on_login: Option<LoginHandler>) -> Self {
        let policy = config.password_policy.clone();
        let mut state = LoginFormState::new(&config.initial_email, &policy);
        state.set_external_error(config.error.clone());
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(state),
                policy,
                on_login,
                observers: RefCell::new(Vec::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Copy of the current state.
    pub fn state(&self) -> LoginFormState {
        self.inner.state.borrow().clone()
    }

    /// Call `observer` after every state change.
    pub fn observe(&self, observer: impl Fn(&LoginFormState) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Subscribe to the `login` event.
    pub fn on_login_event(&self, listener: impl Fn(&LoginFormData) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.update(|state, policy| state.set_field(field, value, policy));
    }

    pub fn set_remember_me(&self, value: bool) {
        self.update(|state, _| state.set_remember_me(value));
    }

    pub fn focus(&self, field: Field) {
        self.update(|state, _| state.focus(field));
    }

    pub fn blur(&self, field: Field) {
        self.update(|state, policy| state.blur(field, policy));
    }

    /// Validate both fields and publish their messages.
    pub fn validate(&self) -> bool {
        self.update(LoginFormState::validate)
    }

    /// Host-side error channel; pass an empty string to clear.
    pub fn set_external_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.update(|state, _| state.set_external_error(message));
    }

    /// Validate and, if valid and idle, run the login operation.
    ///
    /// Never fails: invalid input ends in visible field messages and a
    /// rejected operation ends with `submitting` cleared.
    pub async fn submit(&self) {
        let snapshot = match self.update(LoginFormState::begin_submit) {
            SubmitStart::Invalid => {
                log::debug!("login submit blocked by validation");
                return;
            }
            SubmitStart::InFlight => {
                log::debug!("login submit ignored; attempt already in flight");
                return;
            }
            SubmitStart::Started(snapshot) => snapshot,
        };

        log::debug!(
            "login submit started (remember_me={})",
            snapshot.remember_me
        );
        let in_flight = InFlight { controller: self };
        let outcome = match self.inner.on_login.clone() {
            Some(handler) => handler(snapshot.clone()).await,
            None => Ok(()),
        };
        drop(in_flight);

        match outcome {
            Ok(()) => self.emit_login(&snapshot),
            Err(err) => log::warn!("login operation failed: {} ({})", err, err.code.as_str()),
        }
    }

    fn update<R>(&self, f: impl FnOnce(&mut LoginFormState, &PasswordPolicy) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.inner.state.borrow_mut();
            let result = f(&mut state, &self.inner.policy);
            (result, state.clone())
        };
        let observers = self.inner.observers.borrow().clone();
        for observer in &observers {
            observer(&snapshot);
        }
        result
    }

    fn emit_login(&self, data: &LoginFormData) {
        let listeners = self.inner.listeners.borrow().clone();
        log::debug!("login event emitted to {} listener(s)", listeners.len());
        for listener in &listeners {
            listener(data);
        }
    }
}

/// Clears `submitting` when dropped, whether the login future settled or the
/// `submit` future was abandoned mid-await.
struct InFlight<'a> {
    controller: &'a LoginFormController,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.controller.update(|state, _| state.finish_submit());
    }
}
