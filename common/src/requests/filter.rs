/// Keywords the online-course page matches, case-insensitively, anywhere
/// inside the category.
pub const COURSE_KEYWORDS: [&str; 6] = [
    "online course",
    "online-course",
    "course",
    "coursera",
    "edx",
    "udemy",
];

/// Restriction applied to the `category` column of a listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    /// Case-sensitive equality.
    Exact(String),
    /// Case-insensitive substring match against any of the keywords.
    Keywords(Vec<String>),
}

impl CategoryFilter {
    pub fn exact(category: &str) -> Self {
        CategoryFilter::Exact(category.to_string())
    }

    pub fn online_courses() -> Self {
        CategoryFilter::Keywords(COURSE_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }

    /// PostgREST query parameter for the filter, if any.
    pub fn query_pair(&self) -> Option<(String, String)> {
        match self {
            CategoryFilter::Any => None,
            CategoryFilter::Exact(expected) => {
                Some(("category".to_string(), format!("eq.{}", expected)))
            }
            CategoryFilter::Keywords(keywords) => {
                let clauses: Vec<String> = keywords
                    .iter()
                    .map(|k| format!("category.ilike.*{}*", k))
                    .collect();
                Some(("or".to_string(), format!("({})", clauses.join(","))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_filter_keeps_the_value_verbatim() {
        assert_eq!(
            CategoryFilter::exact("fellowship").query_pair(),
            Some(("category".into(), "eq.fellowship".into()))
        );
        assert_ne!(
            CategoryFilter::exact("Fellowship").query_pair(),
            CategoryFilter::exact("fellowship").query_pair()
        );
    }

    #[test]
    fn any_adds_no_parameter() {
        assert_eq!(CategoryFilter::Any.query_pair(), None);
    }

    #[test]
    fn query_pairs() {
        assert_eq!(
            CategoryFilter::exact("internship").query_pair(),
            Some(("category".into(), "eq.internship".into()))
        );
        assert_eq!(
            CategoryFilter::online_courses().query_pair(),
            Some((
                "or".into(),
                "(category.ilike.*online course*,category.ilike.*online-course*,\
                 category.ilike.*course*,category.ilike.*coursera*,\
                 category.ilike.*edx*,category.ilike.*udemy*)"
                    .into()
            ))
        );
    }
}
