use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::error::RemoteError;
use common::model::session::{AuthEvent, AuthUser};
use common::pages::Page;

use super::helpers::{alert, redirect};
use super::session_of;
use crate::remote::session::{SessionStore, Subscription};

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active: Page,
}

pub enum Msg {
    AuthChanged(AuthEvent),
    UserLoaded(Option<AuthUser>),
    Logout,
    LogoutFailed(RemoteError),
}

/// Header bar: page links plus the login/logout area, kept in sync with
/// the session.
pub struct Navigation {
    session: SessionStore,
    user: Option<AuthUser>,
    _subscription: Subscription,
}

impl Navigation {
    fn load_user(&self, ctx: &Context<Self>) {
        let session = self.session.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::UserLoaded(session.current_user().await));
        });
    }
}

impl Component for Navigation {
    type Message = Msg;
    type Properties = NavigationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = session_of(ctx.link());
        let subscription = session.subscribe(ctx.link().callback(Msg::AuthChanged));
        let navigation = Self {
            session,
            user: None,
            _subscription: subscription,
        };
        navigation.load_user(ctx);
        navigation
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AuthChanged(AuthEvent::SignedOut) => {
                self.user = None;
                true
            }
            Msg::AuthChanged(_) => {
                self.load_user(ctx);
                false
            }
            Msg::UserLoaded(user) => {
                self.user = user.filter(AuthUser::is_verified);
                true
            }
            Msg::Logout => {
                let session = self.session.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match session.sign_out().await {
                        Ok(()) => redirect(Page::Home.file_name()),
                        Err(e) => link.send_message(Msg::LogoutFailed(e)),
                    }
                });
                false
            }
            Msg::LogoutFailed(e) => {
                log::error!("Logout failed: {e}");
                alert(&format!("Logout failed: {}", e.message()));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let active = ctx.props().active;
        let links = Page::NAV.iter().map(|page| {
            let class = classes!("nav-link", (*page == active).then_some("active"));
            html! {
                <li class="nav-item">
                    <a class={class} href={page.file_name()}>{ page.nav_label() }</a>
                </li>
            }
        });

        let auth = match &self.user {
            Some(user) => {
                let onclick = ctx.link().callback(|e: MouseEvent| {
                    e.prevent_default();
                    Msg::Logout
                });
                html! {
                    <li class="nav-item">
                        <a class="nav-link" href="#" {onclick}>
                            { format!("Logout ({})", user.display_name()) }
                        </a>
                    </li>
                }
            }
            None => html! {
                <>
                    <li class="nav-item">
                        <a class="nav-link" href={Page::Login.file_name()}>{ "Login" }</a>
                    </li>
                    <li class="nav-item">
                        <a class="nav-link" href={format!("{}#signup", Page::Login.file_name())}>
                            { "Sign Up" }
                        </a>
                    </li>
                </>
            },
        };

        html! {
            <nav class="navbar navbar-expand-lg navbar-dark bg-primary">
                <div class="container">
                    <a class="navbar-brand" href={Page::Home.file_name()}>{ "Scholarships Hub" }</a>
                    <ul class="navbar-nav me-auto">
                        { for links }
                    </ul>
                    <ul class="navbar-nav" id="auth-links">
                        { auth }
                    </ul>
                </div>
            </nav>
        }
    }
}
