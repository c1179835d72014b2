//! Author attribution helpers for rendering.

use serde::Serialize;

use crate::models::{AuthorProfile, AuthorType};

/// Shown when a piece has no linked authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Join author display names: `A`, `A & B`, `A, B & C`.
///
/// ```
/// use rawav_core::byline::join_names;
///
/// assert_eq!(join_names(&["Ann", "Ben", "Cat"]), "Ann, Ben & Cat");
/// assert_eq!(join_names(&[] as &[&str]), "Unknown Author");
/// ```
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => UNKNOWN_AUTHOR.to_string(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{} & {}", head.join(", "), last.as_ref())
        }
    }
}

/// Byline for a list of linked authors.
pub fn format_byline(authors: &[AuthorProfile]) -> String {
    let names: Vec<&str> = authors.iter().map(|a| a.display_name.as_str()).collect();
    join_names(&names)
}

/// Public profiles split by [`AuthorType`], each in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorGroups {
    pub founders: Vec<AuthorProfile>,
    pub external_contributors: Vec<AuthorProfile>,
    pub guests: Vec<AuthorProfile>,
}

impl AuthorGroups {
    pub fn from_profiles(profiles: impl IntoIterator<Item = AuthorProfile>) -> Self {
        let mut groups = Self::default();
        for p in profiles {
            match p.author_type {
                AuthorType::Founder => groups.founders.push(p),
                AuthorType::ExternalContributor => groups.external_contributors.push(p),
                AuthorType::Guest => groups.guests.push(p),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.founders.len() + self.external_contributors.len() + self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
