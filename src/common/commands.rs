/// An entry of the shell's main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccounts,
    StartChat,
    Exit,
}

impl MenuChoice {
    /// Parses the numeric selection typed by the operator (`1`, `2` or `3`).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::CreateAccounts),
            2 => Some(MenuChoice::StartChat),
            3 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
