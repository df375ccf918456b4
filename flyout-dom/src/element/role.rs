/// Role exposed to queries and assistive tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    None,
    Button,
    Menu,
    MenuItem,
    Separator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Button => "button",
            Role::Menu => "menu",
            Role::MenuItem => "menuitem",
            Role::Separator => "separator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
