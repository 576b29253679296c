//! Admin dashboard: statistics, the listing table and the create/edit
//! dialog. Any signed-in user may use it.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod form;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AdminDashboard;

use super::session_of;

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let dashboard = AdminDashboard::new(session_of(ctx.link()));

        let session = dashboard.session.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let signed_in = session.current_user().await.is_some();
            link.send_message(Msg::AccessChecked(signed_in));
        });

        dashboard
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
