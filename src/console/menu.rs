/// The five main-menu commands, selected by typing `1` to `5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Statement,
    Withdraw,
    Deposit,
    ChangePin,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 5] = [
        MenuCommand::Statement,
        MenuCommand::Withdraw,
        MenuCommand::Deposit,
        MenuCommand::ChangePin,
        MenuCommand::Exit,
    ];

    /// Map a trimmed menu choice to a command. Anything but `1`..`5` is `None`.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuCommand::Statement),
            "2" => Some(MenuCommand::Withdraw),
            "3" => Some(MenuCommand::Deposit),
            "4" => Some(MenuCommand::ChangePin),
            "5" => Some(MenuCommand::Exit),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            MenuCommand::Statement => '1',
            MenuCommand::Withdraw => '2',
            MenuCommand::Deposit => '3',
            MenuCommand::ChangePin => '4',
            MenuCommand::Exit => '5',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Statement => "Account Statement",
            MenuCommand::Withdraw => "Withdraw Amount",
            MenuCommand::Deposit => "Lodge Amount (Deposit)",
            MenuCommand::ChangePin => "Change Pin",
            MenuCommand::Exit => "Exit",
        }
    }
}
