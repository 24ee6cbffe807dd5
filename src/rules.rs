//! Text rules applied to playlist titles and descriptions.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Product area a show belongs to, derived from its title prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "ASP.NET")]
    AspNet,
    #[serde(rename = "Visual Studio")]
    VisualStudio,
    #[serde(rename = "Xamarin")]
    Xamarin,
    #[serde(rename = "Languages & Runtime")]
    LanguagesAndRuntime,
    #[serde(rename = "Desktop")]
    Desktop,
    #[serde(rename = "Cloud")]
    Cloud,
}

impl Category {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AspNet => "ASP.NET",
            Self::VisualStudio => "Visual Studio",
            Self::Xamarin => "Xamarin",
            Self::LanguagesAndRuntime => "Languages & Runtime",
            Self::Desktop => "Desktop",
            Self::Cloud => "Cloud",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered; the first matching prefix wins. Prefixes are case-sensitive.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["ASP.NET"], Category::AspNet),
    (&["Visual Studio", "Tooling"], Category::VisualStudio),
    (&["Xamarin", "Mobile"], Category::Xamarin),
    (&["Languages"], Category::LanguagesAndRuntime),
    (&["Windows Desktop", "Desktop"], Category::Desktop),
    (&["Cloud"], Category::Cloud),
];

#[must_use]
pub fn category(title: &str) -> Option<Category> {
    CATEGORY_RULES
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|p| title.starts_with(p)))
        .map(|(_, category)| *category)
}

/// Titles follow `<Show> - <Date> - <Topic>`. Anything with fewer than three
/// dash-separated segments has no topic.
#[must_use]
pub fn topic(title: &str) -> Option<String> {
    let pieces = title.split('-').collect::<Vec<_>>();
    if pieces.len() > 2 {
        pieces.last().map(|last| last.trim().to_string())
    } else {
        None
    }
}

static COMMUNITY_LINK_REGEXES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"https://www\.theurlist\.com/[a-zA-Z0-9/-]*").unwrap(),
        Regex::new(r"https://www\.one-tab\.com/[a-zA-Z0-9/-]*").unwrap(),
    ]
});

/// Finds the link to the episode's community resource list in its description.
///
/// The patterns are tried in order and the first one with any match wins,
/// even if a later pattern matches earlier in the text.
#[must_use]
pub fn community_links_url(description: &str) -> Option<String> {
    if description.trim().is_empty() {
        return None;
    }

    COMMUNITY_LINK_REGEXES
        .iter()
        .find_map(|re| re.find(description))
        .map(|m| m.as_str().to_string())
}
