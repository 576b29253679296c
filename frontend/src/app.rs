use wasm_bindgen_futures::spawn_local;
use yew::{html, Component, Context, ContextProvider, Html};

use common::pages::Page;

use crate::components::admin::AdminDashboard;
use crate::components::detail::DetailPage;
use crate::components::helpers::location_pathname;
use crate::components::listings::CategoryListing;
use crate::components::login::LoginPage;
use crate::components::navigation::Navigation;
use crate::remote::session::SessionStore;

pub enum Msg {
    Restored,
}

/// Root component: restores the session, then mounts the navigation bar
/// and the page picked from the URL.
pub struct App {
    session: SessionStore,
    page: Page,
    ready: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let session = SessionStore::load();
        let page = Page::from_path(&location_pathname());
        log::info!("Mounting {:?} page", page);

        let link = ctx.link().clone();
        let restoring = session.clone();
        spawn_local(async move {
            restoring.restore().await;
            link.send_message(Msg::Restored);
        });

        Self {
            session,
            page,
            ready: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Restored => {
                self.ready = true;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<SessionStore> context={self.session.clone()}>
                if self.ready {
                    <Navigation active={self.page} />
                    <main class="container my-4">{ self.page_body() }</main>
                } else {
                    { loading() }
                }
            </ContextProvider<SessionStore>>
        }
    }
}

impl App {
    fn page_body(&self) -> Html {
        if let Some(listing) = self.page.listing() {
            return html! { <CategoryListing page={listing} /> };
        }
        match self.page {
            Page::Detail => html! { <DetailPage /> },
            Page::Admin => html! { <AdminDashboard /> },
            Page::Login => html! { <LoginPage /> },
            _ => Html::default(),
        }
    }
}

pub fn loading() -> Html {
    html! {
        <div class="text-center py-5">
            <div class="spinner-border text-primary" role="status">
                <span class="visually-hidden">{ "Loading..." }</span>
            </div>
        </div>
    }
}
