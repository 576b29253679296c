//! Shared models and pure logic for the ScholarHub catalogue.
//!
//! Everything in this crate is target independent: the browser client in
//! `frontend` executes the requests built here and renders the view models
//! computed here, so the behaviour can be unit tested without a browser.

pub mod auth;
pub mod config;
pub mod deadline;
pub mod display;
pub mod error;
pub mod markdown;
pub mod model;
pub mod pages;
pub mod requests;
pub mod responses;
