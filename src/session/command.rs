//! Menu choice definitions
//!
//! Represents the numbered options of the main menu.

/// Menu text printed before every choice prompt
pub const MENU: &str = "\n--- Bank Management System ---\n\
1. Create Account\n\
2. View All Accounts\n\
3. View Specific Account\n\
4. Deposit\n\
5. Withdraw\n\
6. Exit\n";

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    CreateAccount = 1,
    ViewAll = 2,
    ViewOne = 3,
    Deposit = 4,
    Withdraw = 5,
    Exit = 6,
}

impl MenuChoice {
    /// Map a typed number to a choice
    pub fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::CreateAccount),
            2 => Some(MenuChoice::ViewAll),
            3 => Some(MenuChoice::ViewOne),
            4 => Some(MenuChoice::Deposit),
            5 => Some(MenuChoice::Withdraw),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
