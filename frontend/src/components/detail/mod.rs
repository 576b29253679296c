//! Detail page: one listing picked by the `id` query parameter.

use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::display::detail::DetailView;
use common::model::listing::Listing;
use common::pages::detail_id;

use super::helpers::{location_search, set_document_title};
use super::session_of;

mod view;

pub enum DetailState {
    Loading,
    NotFound,
    Loaded(Box<DetailView>),
}

pub enum Msg {
    Fetched(Option<Listing>),
}

pub struct DetailPage {
    state: DetailState,
}

impl Component for DetailPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let Some(id) = detail_id(&location_search()) else {
            log::warn!("Detail page opened without an id");
            return Self {
                state: DetailState::NotFound,
            };
        };

        let session = session_of(ctx.link());
        let link = ctx.link().clone();
        spawn_local(async move {
            let listing = match session.remote().await.fetch_listing(&id).await {
                Ok(listing) => Some(listing),
                Err(e) => {
                    log::error!("Error getting scholarship {id}: {e}");
                    None
                }
            };
            link.send_message(Msg::Fetched(listing));
        });

        Self {
            state: DetailState::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetched(Some(listing)) => {
                let detail = DetailView::build(&listing, Utc::now());
                set_document_title(&detail.document_title);
                self.state = DetailState::Loaded(Box::new(detail));
            }
            Msg::Fetched(None) => self.state = DetailState::NotFound,
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.state {
            DetailState::Loading => crate::app::loading(),
            DetailState::NotFound => view::not_found(),
            DetailState::Loaded(detail) => view::detail(detail),
        }
    }
}
