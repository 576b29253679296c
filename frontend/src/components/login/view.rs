use yew::html::Scope;
use yew::prelude::*;

use crate::components::helpers::input_value;

use super::messages::{Msg, SignUpField};
use super::state::{Banner, LoginPage};

pub fn view(page: &LoginPage, ctx: &Context<LoginPage>) -> Html {
    let link = ctx.link();
    html! {
        <div class="row justify-content-center g-4">
            <div class="col-md-5">{ login_card(page, link) }</div>
            <div class="col-md-5" id="signup">{ sign_up_card(page, link) }</div>
        </div>
    }
}

fn banner(banner: &Option<Banner>, id: &'static str) -> Html {
    match banner {
        Some(banner) => html! {
            <div {id} class={banner.kind.class()} role="alert">{ banner.text.clone() }</div>
        },
        None => Html::default(),
    }
}

fn text_input(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: &str,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="mb-3">
            <label class="form-label" for={id}>{ label }</label>
            <input class="form-control" {id} type={kind} value={value.to_string()} required=true {oninput} />
        </div>
    }
}

fn login_card(page: &LoginPage, link: &Scope<LoginPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitLogin
    });

    html! {
        <div class="card shadow-sm">
            <div class="card-body">
                <h3 class="card-title mb-4">{ "Login" }</h3>
                { banner(&page.login_banner, "loginMessage") }
                <form id="loginForm" {onsubmit}>
                    { text_input("loginEmail", "Email", "email", &page.login_email,
                        link.callback(|e| Msg::SetLoginEmail(input_value(e)))) }
                    { text_input("loginPassword", "Password", "password", &page.login_password,
                        link.callback(|e| Msg::SetLoginPassword(input_value(e)))) }
                    <button type="submit" class="btn btn-primary w-100" disabled={page.busy}>
                        { "Login" }
                    </button>
                </form>
            </div>
        </div>
    }
}

fn sign_up_card(page: &LoginPage, link: &Scope<LoginPage>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitSignUp
    });
    let field = |id, label, kind, value: &str, target: SignUpField| {
        text_input(
            id,
            label,
            kind,
            value,
            link.callback(move |e| Msg::SetSignUp(target, input_value(e))),
        )
    };
    let form = &page.sign_up;

    html! {
        <div class="card shadow-sm">
            <div class="card-body">
                <h3 class="card-title mb-4">{ "Sign Up" }</h3>
                { banner(&page.sign_up_banner, "signupMessage") }
                <form id="signupForm" {onsubmit}>
                    <div class="row">
                        <div class="col">
                            { field("signupFirstName", "First Name", "text", &form.first_name, SignUpField::FirstName) }
                        </div>
                        <div class="col">
                            { field("signupLastName", "Last Name", "text", &form.last_name, SignUpField::LastName) }
                        </div>
                    </div>
                    { field("signupEmail", "Email", "email", &form.email, SignUpField::Email) }
                    { field("signupPhone", "Phone", "tel", &form.phone, SignUpField::Phone) }
                    { field("signupPassword", "Password", "password", &form.password, SignUpField::Password) }
                    <button type="submit" class="btn btn-success w-100" disabled={page.busy}>
                        { "Create Account" }
                    </button>
                </form>
            </div>
        </div>
    }
}
