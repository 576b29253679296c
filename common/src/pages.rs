//! The site's pages and what each listing page shows.

use crate::display::card::CardStyle;
use crate::model::listing::ListingId;
use crate::requests::encode_query;
use crate::requests::filter::CategoryFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Undergraduate,
    Fellowships,
    Internships,
    Courses,
    Detail,
    Admin,
    Login,
}

impl Page {
    /// Pages linked from the navigation bar, in order.
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::Undergraduate,
        Page::Fellowships,
        Page::Internships,
        Page::Courses,
        Page::Admin,
    ];

    /// Maps the last segment of `location.pathname` to a page. Unknown
    /// paths show the full catalogue.
    pub fn from_path(path: &str) -> Page {
        let file = path.rsplit('/').next().unwrap_or_default();
        match file {
            "undergraduate.html" => Page::Undergraduate,
            "fellowships.html" => Page::Fellowships,
            "internships.html" => Page::Internships,
            "courses.html" => Page::Courses,
            "detail.html" => Page::Detail,
            "admin.html" => Page::Admin,
            "login.html" => Page::Login,
            _ => Page::Home,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Undergraduate => "undergraduate.html",
            Page::Fellowships => "fellowships.html",
            Page::Internships => "internships.html",
            Page::Courses => "courses.html",
            Page::Detail => "detail.html",
            Page::Admin => "admin.html",
            Page::Login => "login.html",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "All Scholarships",
            Page::Undergraduate => "Undergraduate",
            Page::Fellowships => "Fellowships",
            Page::Internships => "Internships",
            Page::Courses => "Online Courses",
            Page::Detail => "Details",
            Page::Admin => "Admin",
            Page::Login => "Login",
        }
    }

    /// Listing configuration for the catalogue pages, `None` for the rest.
    pub fn listing(self) -> Option<ListingPage> {
        let scholarship = |heading, filter, empty| ListingPage {
            heading,
            filter,
            card: CardStyle::Scholarship { show_summary: false },
            empty: EmptyState { title: empty, hint: None },
        };

        match self {
            Page::Home => Some(ListingPage {
                heading: "Latest Scholarships",
                filter: CategoryFilter::Any,
                card: CardStyle::Scholarship { show_summary: true },
                empty: EmptyState {
                    title: "No scholarships found. Check back later!",
                    hint: None,
                },
            }),
            Page::Undergraduate => Some(scholarship(
                "Undergraduate Scholarships",
                CategoryFilter::exact("undergraduate"),
                "No undergraduate scholarships found. Check back later!",
            )),
            Page::Fellowships => Some(scholarship(
                "Fellowships",
                CategoryFilter::exact("fellowship"),
                "No fellowships found. Check back later!",
            )),
            Page::Internships => Some(scholarship(
                "Internships",
                CategoryFilter::exact("internship"),
                "No internships found. Check back later!",
            )),
            Page::Courses => Some(ListingPage {
                heading: "Online Courses",
                filter: CategoryFilter::online_courses(),
                card: CardStyle::Course,
                empty: EmptyState {
                    title: "No online courses available at the moment",
                    hint: Some("Check back later for new online learning opportunities!"),
                },
            }),
            Page::Detail | Page::Admin | Page::Login => None,
        }
    }
}

/// Message shown when a listing page has nothing to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    /// Secondary line; pages with a hint render the message as an alert box.
    pub hint: Option<&'static str>,
}

/// What a category page fetches and how it renders the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub heading: &'static str,
    pub filter: CategoryFilter,
    pub card: CardStyle,
    pub empty: EmptyState,
}

pub fn detail_href(id: &ListingId) -> String {
    format!(
        "{}?{}",
        Page::Detail.file_name(),
        encode_query([("id", id.to_string())])
    )
}

/// Listing id requested by the detail page's `location.search`. `None`
/// means the page shows its not-found state without fetching.
pub fn detail_id(search: &str) -> Option<ListingId> {
    query_param(search, "id").and_then(|raw| ListingId::parse(&raw))
}

/// Non-blank value of `key` in a `location.search` string.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/scholar/index.html"), Page::Home);
        assert_eq!(Page::from_path("/scholar/fellowships.html"), Page::Fellowships);
        assert_eq!(Page::from_path("courses.html"), Page::Courses);
        assert_eq!(Page::from_path("/detail.html"), Page::Detail);
        assert_eq!(Page::from_path("/missing.html"), Page::Home);
    }

    #[test]
    fn file_names_round_trip() {
        for page in [
            Page::Home,
            Page::Undergraduate,
            Page::Fellowships,
            Page::Internships,
            Page::Courses,
            Page::Detail,
            Page::Admin,
            Page::Login,
        ] {
            assert_eq!(Page::from_path(&format!("/x/{}", page.file_name())), page);
        }
    }

    #[test]
    fn category_pages_filter_strictly_except_courses() {
        assert_eq!(
            Page::Fellowships.listing().unwrap().filter,
            CategoryFilter::exact("fellowship")
        );
        assert_eq!(
            Page::Internships.listing().unwrap().filter,
            CategoryFilter::exact("internship")
        );
        assert_eq!(
            Page::Undergraduate.listing().unwrap().filter,
            CategoryFilter::exact("undergraduate")
        );
        assert_eq!(Page::Home.listing().unwrap().filter, CategoryFilter::Any);
        assert_eq!(
            Page::Courses.listing().unwrap().filter,
            CategoryFilter::online_courses()
        );
        assert!(Page::Detail.listing().is_none());
    }

    #[test]
    fn detail_id_requires_a_non_blank_value() {
        assert_eq!(detail_id("?id=42"), Some(ListingId::Number(42)));
        assert_eq!(
            detail_id("?ref=nav&id=abc-1"),
            Some(ListingId::Text("abc-1".into()))
        );
        assert_eq!(detail_id(""), None);
        assert_eq!(detail_id("?"), None);
        assert_eq!(detail_id("?id="), None);
        assert_eq!(detail_id("?id=%20"), None);
        assert_eq!(detail_id("?other=1"), None);
    }

    #[test]
    fn query_param_ignores_blank_values() {
        assert_eq!(query_param("?id=12", "id").as_deref(), Some("12"));
        assert_eq!(query_param("id=a%20b", "id").as_deref(), Some("a b"));
        assert_eq!(query_param("?id=", "id"), None);
        assert_eq!(query_param("?id=%20%20", "id"), None);
        assert_eq!(query_param("", "id"), None);
    }

    #[test]
    fn detail_links_encode_the_id() {
        assert_eq!(detail_href(&ListingId::Number(3)), "detail.html?id=3");
        assert_eq!(
            detail_href(&ListingId::Text("a b".into())),
            "detail.html?id=a+b"
        );
    }
}
