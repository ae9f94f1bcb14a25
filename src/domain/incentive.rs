use serde::Deserialize;

/// One promotional incentive card. Declared in configuration, never mutated
/// at runtime; the page renders the list in declaration order.
#[derive(Clone, Debug, Deserialize)]
pub struct Incentive {
    pub icon: IncentiveIcon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum IncentiveIcon {
    Gift,
    Sparkles,
    Star,
}

impl IncentiveIcon {
    /// Inner markup of the 24x24 stroke icon rendered inside the card's
    /// `<svg>` element.
    pub fn glyph(&self) -> &'static str {
        match self {
            IncentiveIcon::Gift => {
                r#"<polyline points="20 12 20 22 4 22 4 12"/><rect x="2" y="7" width="20" height="5"/><line x1="12" y1="22" x2="12" y2="7"/><path d="M12 7H7.5a2.5 2.5 0 0 1 0-5C11 2 12 7 12 7z"/><path d="M12 7h4.5a2.5 2.5 0 0 0 0-5C13 2 12 7 12 7z"/>"#
            }
            IncentiveIcon::Sparkles => {
                r#"<path d="m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3L12 3z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#
            }
            IncentiveIcon::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
        }
    }
}
