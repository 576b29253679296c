//! Runtime state of the admin dashboard.

use yew::NodeRef;

use common::display::admin::ListingForm;
use common::model::listing::{Listing, ListingId};

use super::messages::DetailsTab;
use crate::remote::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Checking,
    Denied,
    Granted,
}

pub enum TableState {
    Loading,
    Loaded(Vec<Listing>),
    Failed,
}

pub struct AdminDashboard {
    pub session: SessionStore,
    pub access: Access,
    pub table: TableState,

    /// Values of the create/edit dialog.
    pub form: ListingForm,
    /// Row being edited; `None` while the dialog creates a new one.
    pub editing: Option<ListingId>,
    pub details_tab: DetailsTab,
    pub dialog_ref: NodeRef,
    /// A write is in flight; further submits are ignored.
    pub saving: bool,
}

impl AdminDashboard {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            access: Access::Checking,
            table: TableState::Loading,
            form: ListingForm::default(),
            editing: None,
            details_tab: DetailsTab::Editor,
            dialog_ref: NodeRef::default(),
            saving: false,
        }
    }

    /// Back to an empty dialog in create mode.
    pub fn reset_form(&mut self) {
        self.form = ListingForm::default();
        self.editing = None;
        self.details_tab = DetailsTab::Editor;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update Scholarship"
        } else {
            "Add Scholarship"
        }
    }
}
