//! Login and sign-up forms.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::auth::{verification_succeeded, EMAIL_VERIFIED};

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::LoginPage;

use super::helpers::{location_search, strip_query};
use super::session_of;
use messages::Slot;
use state::BannerKind;

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = LoginPage::new(session_of(ctx.link()));

        if verification_succeeded(&location_search()) {
            let generation = page.show(Slot::Login, BannerKind::Success, EMAIL_VERIFIED.to_string());
            update::schedule_hide(ctx, Slot::Login, generation);
            strip_query();
        }

        let session = page.session.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let verified = session
                .current_user()
                .await
                .is_some_and(|user| user.is_verified());
            link.send_message(Msg::AlreadySignedIn(verified));
        });

        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
