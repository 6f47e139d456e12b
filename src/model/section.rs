// Section - the fixed set of content sections on the page
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Education,
    Projects,
    Contact,
}

impl Default for Section {
    fn default() -> Self {
        Self::Home
    }
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    /// Stable anchor key, as used by navigation links.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Education => "Education",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Parse an anchor key. Keys that name no section yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
