//! Catalogue pages: one component parameterized by the page's filter, card
//! template and empty-state message.

use chrono::Utc;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use common::display::card::{CardStyle, CardView};
use common::model::listing::{distinct_categories, Listing};
use common::pages::ListingPage;

use super::card_grid::CardGrid;
use super::session_of;
use crate::app::loading;
use crate::remote::session::SessionStore;

mod card;

use card::listing_card;

#[derive(Properties, PartialEq)]
pub struct CategoryListingProps {
    pub page: ListingPage,
}

pub enum Msg {
    Loaded(Vec<Listing>),
}

pub struct CategoryListing {
    listings: Option<Vec<Listing>>,
}

impl CategoryListing {
    fn fetch(session: SessionStore, page: ListingPage, link: Scope<Self>) {
        spawn_local(async move {
            let remote = session.remote().await;

            if page.card == CardStyle::Course {
                match remote.list_categories().await {
                    Ok(rows) => log::debug!(
                        "Categories in table: {:?}",
                        distinct_categories(&rows)
                    ),
                    Err(e) => log::debug!("Could not list categories: {e}"),
                }
            }

            let listings = match remote.list_listings(&page.filter).await {
                Ok(listings) => {
                    log::info!("Loaded {} rows for {}", listings.len(), page.heading);
                    listings
                }
                Err(e) => {
                    log::error!("Error getting {}: {e}", page.heading);
                    Vec::new()
                }
            };
            link.send_message(Msg::Loaded(listings));
        });
    }
}

impl Component for CategoryListing {
    type Message = Msg;
    type Properties = CategoryListingProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::fetch(
            session_of(ctx.link()),
            ctx.props().page.clone(),
            ctx.link().clone(),
        );
        Self { listings: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(listings) => {
                self.listings = Some(listings);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = &ctx.props().page;
        let body = match &self.listings {
            None => loading(),
            Some(listings) if listings.is_empty() => empty_state(page),
            Some(listings) => {
                let now = Utc::now();
                html! {
                    <CardGrid>
                        { for listings.iter().map(|listing| {
                            listing_card(&CardView::build(listing, page.card, now))
                        }) }
                    </CardGrid>
                }
            }
        };

        html! {
            <section>
                <h1 class="mb-4">{ page.heading }</h1>
                { body }
            </section>
        }
    }
}

fn empty_state(page: &ListingPage) -> Html {
    match page.empty.hint {
        Some(hint) => html! {
            <div class="alert alert-info text-center w-100">
                <h4>{ page.empty.title }</h4>
                <p class="mb-0">{ hint }</p>
            </div>
        },
        None => html! {
            <p class="text-center w-100">{ page.empty.title }</p>
        },
    }
}
