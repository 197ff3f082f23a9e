//! Portal sections and who may open them.

use super::Actor;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Clients,
    Projects,
    Content,
    Tasks,
    /// User management.
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Clients,
        Section::Projects,
        Section::Content,
        Section::Tasks,
        Section::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::Projects => "Projects",
            Self::Content => "Content",
            Self::Tasks => "Tasks",
            Self::Settings => "Settings",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

pub fn can_access(actor: Option<&Actor>, section: Section) -> bool {
    actor.is_some_and(|actor| actor.rules().sections.contains(&section))
}

/// Sections in navigation order; empty without an actor.
pub fn accessible_sections(actor: Option<&Actor>) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| can_access(actor, *section))
        .collect()
}
