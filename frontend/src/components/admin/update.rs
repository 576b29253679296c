//! Message handling for the admin dashboard.
//!
//! Every write goes straight to the remote table; on success the user is
//! told and the whole list is fetched again, on failure the remote message
//! is shown as is.

use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use common::display::admin::{mutation_error_alert, ListingForm};
use common::error::RemoteError;
use common::model::listing::{Listing, ListingId};
use common::requests::filter::CategoryFilter;

use crate::components::helpers::{alert, confirm, iso_to_local_input, local_input_to_iso, now_iso};
use crate::remote::session::SessionStore;
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::{DetailsTab, Msg, Mutation};
use super::state::{Access, AdminDashboard, TableState};

const EDIT_LOAD_FAILED: &str = "❌ Could not load scholarship for editing.";
const INVALID_DEADLINE: &str = "Please enter a valid deadline.";
const DELETE_PROMPT: &str = "Are you sure you want to delete this scholarship?";

pub fn update(dashboard: &mut AdminDashboard, ctx: &Context<AdminDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::AccessChecked(granted) => {
            if granted {
                dashboard.access = Access::Granted;
                ctx.link().send_message(Msg::Load);
            } else {
                log::info!("Admin dashboard requires login");
                dashboard.access = Access::Denied;
            }
            true
        }
        Msg::Load => {
            fetch_all(&dashboard.session, ctx.link(), Msg::Loaded);
            false
        }
        Msg::Loaded(result) => {
            apply_listings(dashboard, result);
            true
        }
        Msg::Refresh => {
            fetch_all(&dashboard.session, ctx.link(), Msg::Refreshed);
            false
        }
        Msg::Refreshed(result) => {
            apply_listings(dashboard, result);
            alert("Data refreshed!");
            true
        }
        Msg::OpenCreate => {
            dashboard.reset_form();
            open_top_sheet(&dashboard.dialog_ref);
            true
        }
        Msg::Edit(id) => {
            let session = dashboard.session.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = session.remote().await.fetch_listing(&id).await;
                link.send_message(Msg::EditLoaded(result));
            });
            false
        }
        Msg::EditLoaded(Ok(listing)) => {
            let local_deadline = iso_to_local_input(listing.deadline.as_deref());
            dashboard.form = ListingForm::from_listing(&listing, local_deadline);
            dashboard.editing = Some(listing.id);
            dashboard.details_tab = DetailsTab::Editor;
            open_top_sheet(&dashboard.dialog_ref);
            true
        }
        Msg::EditLoaded(Err(e)) => {
            log::error!("Error loading scholarship for edit: {e}");
            alert(EDIT_LOAD_FAILED);
            false
        }
        Msg::SetField(field, value) => {
            dashboard.form.set(field, value);
            true
        }
        Msg::SetDetailsTab(tab) => {
            dashboard.details_tab = tab;
            true
        }
        Msg::CloseDialog => {
            close_top_sheet(&dashboard.dialog_ref);
            dashboard.reset_form();
            true
        }
        Msg::Submit => submit(dashboard, ctx),
        Msg::Saved(mutation, Ok(())) => {
            dashboard.saving = false;
            log::info!("{:?} succeeded", mutation);
            alert(mutation.success_message());
            if mutation != Mutation::Delete {
                close_top_sheet(&dashboard.dialog_ref);
                dashboard.reset_form();
            }
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Saved(mutation, Err(e)) => {
            dashboard.saving = false;
            log::error!("{:?} failed: {e}", mutation);
            alert(&mutation_error_alert(&e.message()));
            true
        }
        Msg::Delete(id) => {
            if !confirm(DELETE_PROMPT) {
                return false;
            }
            log::info!("Deleting scholarship {id}");
            let session = dashboard.session.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = session.remote().await.delete_listing(&id).await;
                link.send_message(Msg::Saved(Mutation::Delete, result));
            });
            false
        }
    }
}

fn fetch_all<F>(session: &SessionStore, link: &Scope<AdminDashboard>, done: F)
where
    F: FnOnce(Result<Vec<Listing>, RemoteError>) -> Msg + 'static,
{
    let session = session.clone();
    let link = link.clone();
    spawn_local(async move {
        let result = session
            .remote()
            .await
            .list_listings(&CategoryFilter::Any)
            .await;
        link.send_message(done(result));
    });
}

fn apply_listings(dashboard: &mut AdminDashboard, result: Result<Vec<Listing>, RemoteError>) {
    dashboard.table = match result {
        Ok(listings) => TableState::Loaded(listings),
        Err(e) => {
            log::error!("Error loading scholarships: {e}");
            TableState::Failed
        }
    };
}

fn submit(dashboard: &mut AdminDashboard, ctx: &Context<AdminDashboard>) -> bool {
    if dashboard.saving {
        return false;
    }

    let Some(deadline) = local_input_to_iso(&dashboard.form.deadline) else {
        alert(&mutation_error_alert(&INVALID_DEADLINE));
        return false;
    };
    let mut draft = dashboard.form.to_draft(deadline);

    let editing: Option<ListingId> = dashboard.editing.clone();
    if editing.is_none() {
        draft.created_at = Some(now_iso());
    }

    dashboard.saving = true;
    let session = dashboard.session.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let remote = session.remote().await;
        let (mutation, result) = match editing {
            Some(id) => (Mutation::Update, remote.update_listing(&id, &draft).await),
            None => (Mutation::Create, remote.insert_listing(&draft).await),
        };
        link.send_message(Msg::Saved(mutation, result));
    });
    true
}
