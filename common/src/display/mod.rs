//! View models computed from listings, ready for the templates to render.

pub mod admin;
pub mod card;
pub mod detail;

pub const CARD_PLACEHOLDER: &str = "https://via.placeholder.com/300x150?text=No+Image";
pub const DETAIL_PLACEHOLDER: &str = "https://via.placeholder.com/800x400?text=No+Image";
