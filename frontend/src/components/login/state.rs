use common::auth::SignUpForm;

use super::messages::{SignUpField, Slot};
use crate::remote::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert-success",
            BannerKind::Danger => "alert alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// Bumped on every new banner so stale hide timers are ignored.
    pub generation: u32,
}

pub struct LoginPage {
    pub session: SessionStore,
    pub login_email: String,
    pub login_password: String,
    pub sign_up: SignUpForm,
    pub login_banner: Option<Banner>,
    pub sign_up_banner: Option<Banner>,
    pub busy: bool,
    generation: u32,
}

impl LoginPage {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            login_email: String::new(),
            login_password: String::new(),
            sign_up: SignUpForm::default(),
            login_banner: None,
            sign_up_banner: None,
            busy: false,
            generation: 0,
        }
    }

    pub fn banner_mut(&mut self, slot: Slot) -> &mut Option<Banner> {
        match slot {
            Slot::Login => &mut self.login_banner,
            Slot::SignUp => &mut self.sign_up_banner,
        }
    }

    /// Replaces the banner of `slot` and returns its generation.
    pub fn show(&mut self, slot: Slot, kind: BannerKind, text: String) -> u32 {
        self.generation += 1;
        let generation = self.generation;
        *self.banner_mut(slot) = Some(Banner {
            kind,
            text,
            generation,
        });
        generation
    }

    pub fn set_sign_up(&mut self, field: SignUpField, value: String) {
        let slot = match field {
            SignUpField::FirstName => &mut self.sign_up.first_name,
            SignUpField::LastName => &mut self.sign_up.last_name,
            SignUpField::Email => &mut self.sign_up.email,
            SignUpField::Phone => &mut self.sign_up.phone,
            SignUpField::Password => &mut self.sign_up.password,
        };
        *slot = value;
    }
}
