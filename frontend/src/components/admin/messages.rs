use common::display::admin::FormField;
use common::error::RemoteError;
use common::model::listing::{Listing, ListingId};

/// Which write the dashboard just sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    pub fn success_message(self) -> &'static str {
        match self {
            Mutation::Create => "✅ Scholarship added successfully!",
            Mutation::Update => "✅ Scholarship updated successfully!",
            Mutation::Delete => "✅ Scholarship deleted successfully!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsTab {
    Editor,
    Preview,
}

pub enum Msg {
    AccessChecked(bool),
    Load,
    Loaded(Result<Vec<Listing>, RemoteError>),
    Refresh,
    Refreshed(Result<Vec<Listing>, RemoteError>),
    OpenCreate,
    Edit(ListingId),
    EditLoaded(Result<Listing, RemoteError>),
    SetField(FormField, String),
    SetDetailsTab(DetailsTab),
    CloseDialog,
    Submit,
    Saved(Mutation, Result<(), RemoteError>),
    Delete(ListingId),
}
