use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use common::auth::{
    email_redirect_url, login_error_banner, sign_up_error_banner, SignUpForm, LOGIN_SUCCESS,
    SIGN_UP_SUCCESS,
};
use common::pages::Page;

use crate::components::helpers::{location_origin, redirect};
use crate::config::SETTINGS;

use super::messages::{Msg, Slot};
use super::state::{BannerKind, LoginPage};

const BANNER_MS: u32 = 5_000;
const REDIRECT_MS: u32 = 1_500;

/// Success banners disappear on their own.
pub fn schedule_hide(ctx: &Context<LoginPage>, slot: Slot, generation: u32) {
    let link = ctx.link().clone();
    spawn_local(async move {
        TimeoutFuture::new(BANNER_MS).await;
        link.send_message(Msg::HideBanner(slot, generation));
    });
}

fn success(page: &mut LoginPage, ctx: &Context<LoginPage>, slot: Slot, text: &str) {
    let generation = page.show(slot, BannerKind::Success, text.to_string());
    schedule_hide(ctx, slot, generation);
}

pub fn update(page: &mut LoginPage, ctx: &Context<LoginPage>, msg: Msg) -> bool {
    match msg {
        Msg::AlreadySignedIn(true) => {
            log::info!("Already signed in, leaving login page");
            redirect(Page::Home.file_name());
            false
        }
        Msg::AlreadySignedIn(false) => false,
        Msg::SetLoginEmail(email) => {
            page.login_email = email;
            true
        }
        Msg::SetLoginPassword(password) => {
            page.login_password = password;
            true
        }
        Msg::SubmitLogin => {
            if page.busy {
                return false;
            }
            page.busy = true;
            page.login_banner = None;

            let session = page.session.clone();
            let email = page.login_email.clone();
            let password = page.login_password.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = session.sign_in(&email, &password).await;
                link.send_message(Msg::LoginDone(result));
            });
            true
        }
        Msg::LoginDone(Ok(session)) => {
            page.busy = false;
            log::info!("Signed in as {}", session.user.display_name());
            success(page, ctx, Slot::Login, LOGIN_SUCCESS);
            spawn_local(async {
                TimeoutFuture::new(REDIRECT_MS).await;
                redirect(Page::Home.file_name());
            });
            true
        }
        Msg::LoginDone(Err(e)) => {
            page.busy = false;
            log::warn!("Login error: {e}");
            page.show(Slot::Login, BannerKind::Danger, login_error_banner(&e));
            true
        }
        Msg::SetSignUp(field, value) => {
            page.set_sign_up(field, value);
            true
        }
        Msg::SubmitSignUp => {
            if page.busy {
                return false;
            }
            page.busy = true;
            page.sign_up_banner = None;

            let session = page.session.clone();
            let form = page.sign_up.clone();
            let redirect_to = email_redirect_url(&location_origin(), &SETTINGS.base_path);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = session.sign_up(&form, &redirect_to).await;
                link.send_message(Msg::SignUpDone(result));
            });
            true
        }
        Msg::SignUpDone(Ok(_)) => {
            page.busy = false;
            page.sign_up = SignUpForm::default();
            success(page, ctx, Slot::SignUp, SIGN_UP_SUCCESS);
            true
        }
        Msg::SignUpDone(Err(e)) => {
            page.busy = false;
            log::warn!("Sign up error: {e}");
            page.show(Slot::SignUp, BannerKind::Danger, sign_up_error_banner(&e));
            true
        }
        Msg::HideBanner(slot, generation) => {
            let banner = page.banner_mut(slot);
            if banner.as_ref().is_some_and(|b| b.generation == generation) {
                *banner = None;
                true
            } else {
                false
            }
        }
    }
}
