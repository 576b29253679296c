use common::error::RemoteError;
use common::model::session::{Session, SignUpOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
}

/// The two message areas of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Login,
    SignUp,
}

pub enum Msg {
    AlreadySignedIn(bool),
    SetLoginEmail(String),
    SetLoginPassword(String),
    SubmitLogin,
    LoginDone(Result<Session, RemoteError>),
    SetSignUp(SignUpField, String),
    SubmitSignUp,
    SignUpDone(Result<SignUpOutcome, RemoteError>),
    /// Hides a banner unless a newer one replaced it meanwhile.
    HideBanner(Slot, u32),
}
