use serde::{Deserialize, Serialize};

/// Navigation targets a card can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Home,
    About,
    Contact,
}

impl PageId {
    /// Card order, left to right.
    pub const ALL: [PageId; 3] = [PageId::Home, PageId::About, PageId::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Home => "Welcome to our homepage",
            Self::About => "Learn more about us",
            Self::Contact => "Get in touch with our team",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "about" => Some(Self::About),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
