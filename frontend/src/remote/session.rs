//! Signed-in state shared by every component of the page.
//!
//! `SessionStore` is a cheap handle (an `Rc`) handed down through a Yew
//! context. It keeps the current [`Session`] in memory and in
//! `localStorage`, refreshes the access token once it expires and pushes an
//! [`AuthEvent`] to every subscriber whenever the signed-in state changes.
//! Only this module mutates the session.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::Utc;
use web_sys::Storage;
use yew::Callback;

use common::auth::{require_verified, SignUpForm};
use common::error::RemoteError;
use common::model::session::{AuthEvent, AuthUser, Session, SignUpOutcome};
use common::requests::auth::AuthRequests;

use super::{call, call_unit, Remote};
use crate::config::SETTINGS;

const STORAGE_KEY: &str = "scholarhub.auth.session";

struct Inner {
    session: RefCell<Option<Session>>,
    listeners: RefCell<Vec<(usize, Callback<AuthEvent>)>>,
    next_listener: Cell<usize>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<Inner>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Keeps a listener registered until dropped.
pub struct Subscription {
    inner: Weak<Inner>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn persist(session: Option<&Session>) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match session {
        Some(session) => match serde_json::to_string(session) {
            Ok(raw) => storage.set_item(STORAGE_KEY, &raw),
            Err(e) => {
                log::error!("Could not serialize session: {e}");
                return;
            }
        },
        None => storage.remove_item(STORAGE_KEY),
    };
    if let Err(e) = result {
        log::error!("Could not update stored session: {e:?}");
    }
}

impl SessionStore {
    /// Handle primed with whatever session the browser kept. Call
    /// [`SessionStore::restore`] before trusting it.
    pub fn load() -> Self {
        let session = local_storage()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("Discarding stored session: {e}");
                    None
                }
            });

        Self {
            inner: Rc::new(Inner {
                session: RefCell::new(session),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    pub fn subscribe(&self, callback: Callback<AuthEvent>) -> Subscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, callback));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn emit(&self, event: AuthEvent) {
        log::debug!("Auth event: {:?}", event);
        let listeners: Vec<Callback<AuthEvent>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for listener in listeners {
            listener.emit(event);
        }
    }

    fn store(&self, session: Option<Session>) {
        persist(session.as_ref());
        *self.inner.session.borrow_mut() = session;
    }

    fn clear(&self) {
        self.store(None);
        self.emit(AuthEvent::SignedOut);
    }

    /// Validates the stored session (refreshing it if needed) and announces
    /// the initial state.
    pub async fn restore(&self) {
        let _ = self.active_session().await;
        self.emit(AuthEvent::InitialSession);
    }

    /// Current session with a usable access token, if any.
    pub async fn active_session(&self) -> Option<Session> {
        let session = self.inner.session.borrow().clone()?;
        if !session.is_expired(Utc::now()) {
            return Some(session);
        }

        log::info!("Access token expired, refreshing");
        let refreshed = match AuthRequests::new(&SETTINGS).refresh(&session.refresh_token) {
            Ok(request) => call::<Session>(request).await,
            Err(e) => Err(e),
        };
        match refreshed {
            Ok(fresh) => {
                let fresh = fresh.stamp_expiry(Utc::now());
                self.store(Some(fresh.clone()));
                self.emit(AuthEvent::TokenRefreshed);
                Some(fresh)
            }
            Err(e) => {
                log::warn!("Token refresh failed: {e}");
                self.clear();
                None
            }
        }
    }

    /// Table client acting as the signed-in user when there is one.
    pub async fn remote(&self) -> Remote {
        match self.active_session().await {
            Some(session) => Remote::with_token(session.access_token),
            None => Remote::anonymous(),
        }
    }

    /// Asks the auth API who the token belongs to. A rejected token ends
    /// the session; other failures fall back to the cached user.
    pub async fn current_user(&self) -> Option<AuthUser> {
        let session = self.active_session().await?;
        let request = AuthRequests::new(&SETTINGS).get_user(&session.access_token);
        match call::<AuthUser>(request).await {
            Ok(user) => {
                let mut updated = session;
                updated.user = user.clone();
                self.store(Some(updated));
                Some(user)
            }
            Err(e) if e.is_unauthorized() => {
                log::warn!("Stored session rejected: {e}");
                self.clear();
                None
            }
            Err(e) => {
                log::warn!("Could not fetch user, using cached profile: {e}");
                Some(session.user)
            }
        }
    }

    /// Password sign-in. Only a verified account ends up signed in.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, RemoteError> {
        let auth = AuthRequests::new(&SETTINGS);
        let session = call::<Session>(auth.sign_in_with_password(email, password)?)
            .await?
            .stamp_expiry(Utc::now());

        if let Err(e) = require_verified(&session.user) {
            if let Err(logout) = call_unit(auth.sign_out(&session.access_token)).await {
                log::warn!("Could not revoke unverified session: {logout}");
            }
            return Err(e);
        }

        self.store(Some(session.clone()));
        self.emit(AuthEvent::SignedIn);
        Ok(session)
    }

    /// Registers an account; the user still has to follow the verification
    /// link before signing in.
    pub async fn sign_up(
        &self,
        form: &SignUpForm,
        redirect_to: &str,
    ) -> Result<SignUpOutcome, RemoteError> {
        let request = AuthRequests::new(&SETTINGS).sign_up(
            &form.email,
            &form.password,
            &form.metadata(),
            redirect_to,
        )?;
        let outcome = call::<SignUpOutcome>(request).await?;
        log::info!("Account created for {}", outcome.user().id);
        Ok(outcome)
    }

    pub async fn sign_out(&self) -> Result<(), RemoteError> {
        let token = match self.inner.session.borrow().as_ref() {
            Some(session) => session.access_token.clone(),
            None => return Ok(()),
        };
        match call_unit(AuthRequests::new(&SETTINGS).sign_out(&token)).await {
            Ok(()) => {}
            Err(e) if e.is_unauthorized() => {
                log::info!("Token already revoked: {e}");
            }
            Err(e) => return Err(e),
        }
        self.clear();
        Ok(())
    }
}
