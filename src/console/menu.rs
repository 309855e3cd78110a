use std::fmt;

/// Entries of the main menu
///
/// Numbering is what the user types at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OpenAccount,
    ShowAccount,
    Deposit,
    Withdraw,
    Transfer,
    Exit,
    ListAccounts,
}

impl MenuChoice {
    /// All entries in display order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::OpenAccount,
        MenuChoice::ShowAccount,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Transfer,
        MenuChoice::Exit,
        MenuChoice::ListAccounts,
    ];

    /// Parse the user's reply to the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::OpenAccount),
            2 => Some(MenuChoice::ShowAccount),
            3 => Some(MenuChoice::Deposit),
            4 => Some(MenuChoice::Withdraw),
            5 => Some(MenuChoice::Transfer),
            6 => Some(MenuChoice::Exit),
            7 => Some(MenuChoice::ListAccounts),
            _ => None,
        }
    }

    /// The number typed to select this entry
    pub fn key(self) -> u8 {
        match self {
            MenuChoice::OpenAccount => 1,
            MenuChoice::ShowAccount => 2,
            MenuChoice::Deposit => 3,
            MenuChoice::Withdraw => 4,
            MenuChoice::Transfer => 5,
            MenuChoice::Exit => 6,
            MenuChoice::ListAccounts => 7,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::OpenAccount => "Open a new account",
            MenuChoice::ShowAccount => "Show account info",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::Transfer => "Transfer between accounts",
            MenuChoice::Exit => "Exit",
            MenuChoice::ListAccounts => "List all accounts",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}
