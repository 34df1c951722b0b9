//! Profile presentation rules for the dashboard.
//!
//! Each displayed field picks from an ordered list of sources; the first
//! non-empty one wins. Empty strings count as missing.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::SessionUser;

/// Label used when the user record offers nothing better.
pub const PLACEHOLDER_LABEL: &str = "User";
/// Avatar initial used when neither name nor email is known.
pub const PLACEHOLDER_INITIAL: &str = "U";

/// Visual weight of a security badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Good,
    Advisory,
}

impl BadgeTone {
    #[must_use]
    pub const fn css_modifier(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Advisory => "advisory",
        }
    }
}

/// A fixed account-security line on the dashboard. Not backed by any check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecurityBadge {
    pub label: &'static str,
    pub status: &'static str,
    pub tone: BadgeTone,
}

pub const SECURITY_BADGES: [SecurityBadge; 3] = [
    SecurityBadge { label: "Email Verified", status: "Complete", tone: BadgeTone::Good },
    SecurityBadge { label: "Strong Password", status: "Secure", tone: BadgeTone::Good },
    SecurityBadge { label: "Two-Factor Authentication", status: "Recommended", tone: BadgeTone::Advisory },
];

fn first_non_empty<'a>(sources: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    sources.into_iter().flatten().find(|s| !s.is_empty())
}

fn name(user: Option<&SessionUser>) -> Option<&str> {
    user.and_then(|u| u.name.as_deref())
}

fn email(user: Option<&SessionUser>) -> Option<&str> {
    user.and_then(|u| u.email.as_deref())
}

/// Text before the first `@`, or the whole address when there is none.
#[must_use]
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Greeting label: name, else the email's local part, else the placeholder.
#[must_use]
pub fn display_label(user: Option<&SessionUser>) -> String {
    first_non_empty([name(user), email(user).map(email_local_part)])
        .unwrap_or(PLACEHOLDER_LABEL)
        .to_owned()
}

/// Profile heading: name, else the placeholder.
#[must_use]
pub fn profile_heading(user: Option<&SessionUser>) -> String {
    first_non_empty([name(user)]).unwrap_or(PLACEHOLDER_LABEL).to_owned()
}

/// Avatar fallback: first character of the name, else of the email, else `U`.
#[must_use]
pub fn avatar_initial(user: Option<&SessionUser>) -> String {
    first_non_empty([name(user), email(user)])
        .and_then(|s| s.chars().next())
        .map_or_else(|| PLACEHOLDER_INITIAL.to_owned(), String::from)
}

/// Profile fields resolved for one render of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileCard {
    pub heading: String,
    pub label: String,
    pub initial: String,
    pub email: String,
    pub image: String,
}

impl ProfileCard {
    #[must_use]
    pub fn from_user(user: Option<&SessionUser>) -> Self {
        Self {
            heading: profile_heading(user),
            label: display_label(user),
            initial: avatar_initial(user),
            email: email(user).unwrap_or_default().to_owned(),
            image: user.and_then(|u| u.image.clone()).unwrap_or_default(),
        }
    }
}

/// What the avatar slot shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initial(String),
}

impl ProfileCard {
    /// The initial stands in when there is no image or the image failed to load.
    #[must_use]
    pub fn avatar(&self, image_failed: bool) -> Avatar {
        if self.image.is_empty() || image_failed {
            Avatar::Initial(self.initial.clone())
        } else {
            Avatar::Image(self.image.clone())
        }
    }
}
