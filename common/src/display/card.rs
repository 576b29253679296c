use chrono::{DateTime, Utc};

use crate::deadline::{days_until_deadline, DeadlineLabel};
use crate::model::listing::Listing;
use crate::pages::detail_href;

use super::CARD_PLACEHOLDER;

const SUMMARY_CHARS: usize = 100;

/// Card template used by a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Host university and country, "Apply Now". The catalogue home page
    /// also shows the start of the description.
    Scholarship { show_summary: bool },
    /// Provider line, "Enroll Now".
    Course,
}

/// Everything one card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub image_src: String,
    pub lazy_image: bool,
    pub badge: String,
    pub title: String,
    pub host_label: &'static str,
    pub host: String,
    pub summary: Option<String>,
    pub deadline: DeadlineLabel,
    pub urgent: bool,
    pub detail_href: String,
    pub apply_href: String,
    pub apply_label: &'static str,
    pub apply_class: &'static str,
}

impl CardView {
    pub fn build(listing: &Listing, style: CardStyle, now: DateTime<Utc>) -> Self {
        let deadline = days_until_deadline(listing.deadline.as_deref(), now);

        let (badge, host_label, host, apply_label, apply_class) = match style {
            CardStyle::Scholarship { .. } => (
                listing.category().unwrap_or("General"),
                "Host",
                host_line(listing),
                "Apply Now",
                "btn btn-primary",
            ),
            CardStyle::Course => (
                listing.category().unwrap_or("Online Course"),
                "Provider",
                listing.host_university().unwrap_or("Various").to_string(),
                "Enroll Now",
                "btn btn-success",
            ),
        };

        let summary = match style {
            CardStyle::Scholarship { show_summary: true } => Some(
                listing
                    .description()
                    .map(truncate_summary)
                    .unwrap_or_else(|| "No description available.".to_string()),
            ),
            _ => None,
        };

        Self {
            image_src: listing.image_url().unwrap_or(CARD_PLACEHOLDER).to_string(),
            lazy_image: style == CardStyle::Course,
            badge: badge.to_string(),
            title: listing.title().unwrap_or_default().to_string(),
            host_label,
            host,
            summary,
            deadline,
            urgent: deadline.is_urgent(),
            detail_href: detail_href(&listing.id),
            apply_href: listing.apply_link().unwrap_or("#").to_string(),
            apply_label,
            apply_class,
        }
    }
}

fn host_line(listing: &Listing) -> String {
    let parts: Vec<&str> = [listing.host_university(), listing.host_country()]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        "Not specified".to_string()
    } else {
        parts.join(", ")
    }
}

fn truncate_summary(description: &str) -> String {
    let head: String = description.chars().take(SUMMARY_CHARS).collect();
    format!("{}...", head)
}
