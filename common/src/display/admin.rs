use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::deadline::parse_timestamp;
use crate::model::listing::{Listing, ListingDraft, ListingId};

/// Summary counters on top of the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStats {
    pub total: usize,
    /// Deadline strictly after now.
    pub active: usize,
    /// Everything else, including rows without a usable deadline.
    pub expired: usize,
    /// Distinct raw category values; a missing category counts once.
    pub categories: usize,
}

impl ListingStats {
    pub fn compute(listings: &[Listing], now: DateTime<Utc>) -> Self {
        let total = listings.len();
        let active = listings
            .iter()
            .filter(|listing| {
                listing
                    .deadline
                    .as_deref()
                    .and_then(parse_timestamp)
                    .is_some_and(|deadline| deadline > now)
            })
            .count();
        let categories: HashSet<Option<&str>> =
            listings.iter().map(|l| l.category.as_deref()).collect();

        Self {
            total,
            active,
            expired: total - active,
            categories: categories.len(),
        }
    }
}

/// One row of the admin table.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRow {
    pub id: ListingId,
    pub title: String,
    pub category: String,
    pub deadline_raw: Option<String>,
    /// A missing deadline or a parsed one before now marks a row expired;
    /// text that does not parse as a date does not.
    pub expired: bool,
}

impl AdminRow {
    pub fn build(listing: &Listing, now: DateTime<Utc>) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title().unwrap_or("No title").to_string(),
            category: listing.category().unwrap_or("N/A").to_string(),
            deadline_raw: listing.deadline.clone(),
            expired: match listing.deadline.as_deref() {
                None => true,
                Some(raw) => parse_timestamp(raw).is_some_and(|deadline| deadline < now),
            },
        }
    }
}

/// Fields of the create/edit dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    HostUniversity,
    HostCountry,
    ApplyLink,
    Deadline,
    ImageUrl,
    Description,
    Details,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Title,
        FormField::Category,
        FormField::HostUniversity,
        FormField::HostCountry,
        FormField::ApplyLink,
        FormField::Deadline,
        FormField::ImageUrl,
        FormField::Description,
        FormField::Details,
    ];

    /// Column name, also used as the input's `name`.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Category => "category",
            FormField::HostUniversity => "host_university",
            FormField::HostCountry => "host_country",
            FormField::ApplyLink => "apply_link",
            FormField::Deadline => "deadline",
            FormField::ImageUrl => "image_url",
            FormField::Description => "description",
            FormField::Details => "details",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Category => "Category",
            FormField::HostUniversity => "Host University / Provider",
            FormField::HostCountry => "Host Country",
            FormField::ApplyLink => "Apply Link",
            FormField::Deadline => "Deadline",
            FormField::ImageUrl => "Image URL",
            FormField::Description => "Short Description",
            FormField::Details => "Details",
        }
    }

    /// `type` attribute for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::ApplyLink | FormField::ImageUrl => "url",
            FormField::Deadline => "datetime-local",
            _ => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Description | FormField::Details)
    }
}

/// Current values of the create/edit dialog, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingForm {
    pub title: String,
    pub category: String,
    pub host_university: String,
    pub host_country: String,
    pub apply_link: String,
    /// `datetime-local` value, `YYYY-MM-DDTHH:MM`.
    pub deadline: String,
    pub image_url: String,
    pub description: String,
    pub details: String,
}

impl ListingForm {
    /// Pre-fills the dialog for editing; `local_deadline` is the deadline
    /// already converted for the `datetime-local` input.
    pub fn from_listing(listing: &Listing, local_deadline: String) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            title: text(&listing.title),
            category: text(&listing.category),
            host_university: text(&listing.host_university),
            host_country: text(&listing.host_country),
            apply_link: text(&listing.apply_link),
            deadline: local_deadline,
            image_url: text(&listing.image_url),
            description: text(&listing.description),
            details: text(&listing.details),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Category => &self.category,
            FormField::HostUniversity => &self.host_university,
            FormField::HostCountry => &self.host_country,
            FormField::ApplyLink => &self.apply_link,
            FormField::Deadline => &self.deadline,
            FormField::ImageUrl => &self.image_url,
            FormField::Description => &self.description,
            FormField::Details => &self.details,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Category => &mut self.category,
            FormField::HostUniversity => &mut self.host_university,
            FormField::HostCountry => &mut self.host_country,
            FormField::ApplyLink => &mut self.apply_link,
            FormField::Deadline => &mut self.deadline,
            FormField::ImageUrl => &mut self.image_url,
            FormField::Description => &mut self.description,
            FormField::Details => &mut self.details,
        };
        *slot = value;
    }

    /// Payload for insert/update; `deadline_iso` is the form deadline
    /// converted to an ISO-8601 instant.
    pub fn to_draft(&self, deadline_iso: String) -> ListingDraft {
        ListingDraft {
            title: self.title.clone(),
            category: self.category.clone(),
            host_university: self.host_university.clone(),
            host_country: self.host_country.clone(),
            apply_link: self.apply_link.clone(),
            deadline: deadline_iso,
            image_url: self.image_url.clone(),
            description: self.description.clone(),
            details: self.details.clone(),
            created_at: None,
        }
    }
}

pub fn mutation_error_alert(err: &impl std::fmt::Display) -> String {
    format!("❌ Error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn listing(id: i64, category: Option<&str>, deadline: Option<&str>) -> Listing {
        Listing {
            id: ListingId::Number(id),
            title: None,
            category: category.map(str::to_string),
            host_university: None,
            host_country: None,
            deadline: deadline.map(str::to_string),
            apply_link: None,
            image_url: None,
            description: None,
            details: None,
            created_at: None,
        }
    }

    #[test]
    fn stats_split_active_and_expired() {
        let rows = vec![
            listing(1, Some("fellowship"), Some("2025-07-01T00:00:00Z")),
            listing(2, Some("fellowship"), Some("2025-05-01T00:00:00Z")),
            listing(3, Some("internship"), Some("2025-06-01T00:00:00Z")),
            listing(4, None, None),
            listing(5, Some("internship"), Some("not a date")),
        ];
        let stats = ListingStats::compute(&rows, now());
        assert_eq!(
            stats,
            ListingStats {
                total: 5,
                active: 1,
                expired: 4,
                categories: 3,
            }
        );
    }

    #[test]
    fn empty_table_has_zero_stats() {
        assert_eq!(ListingStats::compute(&[], now()), ListingStats::default());
    }

    #[test]
    fn rows_flag_past_and_missing_deadlines() {
        let past = AdminRow::build(&listing(1, None, Some("2025-05-01T00:00:00Z")), now());
        assert!(past.expired);
        assert_eq!(past.title, "No title");
        assert_eq!(past.category, "N/A");

        let future = AdminRow::build(&listing(2, Some("x"), Some("2025-08-01")), now());
        assert!(!future.expired);

        let missing = AdminRow::build(&listing(3, Some("x"), None), now());
        assert!(missing.expired);

        let unparsable = AdminRow::build(&listing(4, Some("x"), Some("not a date")), now());
        assert!(!unparsable.expired);
    }

    #[test]
    fn form_round_trip_through_fields() {
        let mut form = ListingForm::default();
        for field in FormField::ALL {
            form.set(field, field.name().to_uppercase());
        }
        assert_eq!(form.get(FormField::HostCountry), "HOST_COUNTRY");

        let draft = form.to_draft("2025-09-01T10:00:00.000Z".into());
        assert_eq!(draft.title, "TITLE");
        assert_eq!(draft.details, "DETAILS");
        assert_eq!(draft.deadline, "2025-09-01T10:00:00.000Z");
        assert!(draft.created_at.is_none());
    }

    #[test]
    fn edit_form_prefills_from_listing() {
        let mut row = listing(9, Some("internship"), Some("2025-08-01T00:00:00Z"));
        row.title = Some("Summer".into());
        let form = ListingForm::from_listing(&row, "2025-08-01T02:00".into());
        assert_eq!(form.title, "Summer");
        assert_eq!(form.category, "internship");
        assert_eq!(form.deadline, "2025-08-01T02:00");
        assert_eq!(form.image_url, "");
    }

    #[test]
    fn remote_errors_reach_the_alert_verbatim() {
        let err = RemoteError::from_response(
            400,
            r#"{"code":"22P02","message":"invalid input syntax for type bigint: \"999x\""}"#,
        );
        assert_eq!(
            mutation_error_alert(&err),
            "❌ Error: invalid input syntax for type bigint: \"999x\""
        );
    }
}
