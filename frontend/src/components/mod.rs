pub mod admin;
pub mod card_grid;
pub mod detail;
pub mod helpers;
pub mod listings;
pub mod login;
pub mod navigation;

use yew::html::Scope;
use yew::{Callback, Component};

use crate::remote::session::SessionStore;

/// Session handle provided by the root component.
pub fn session_of<C: Component>(link: &Scope<C>) -> SessionStore {
    match link.context::<SessionStore>(Callback::noop()) {
        Some((session, _)) => session,
        None => {
            log::warn!("No session context, falling back to stored session");
            SessionStore::load()
        }
    }
}
