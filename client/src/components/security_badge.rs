//! Account-security status row.

use leptos::prelude::*;

use crate::util::profile::SecurityBadge;

/// One static security line: colored dot, label and status badge.
#[component]
pub fn SecurityBadgeRow(badge: SecurityBadge) -> impl IntoView {
    let tone = badge.tone.css_modifier();
    view! {
        <div class=format!("security-row security-row--{tone}")>
            <div class="security-row__label">
                <span class=format!("security-row__dot security-row__dot--{tone}") aria-hidden="true"></span>
                <span>{badge.label}</span>
            </div>
            <span class=format!("badge badge--{tone}")>{badge.status}</span>
        </div>
    }
}
