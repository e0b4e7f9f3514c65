//! Parsing one line of user input into a command.

/// A command entered at the prompt, with its raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// `add <name> <phone>`
    Add(String),
    /// `change <name> <phone>`
    Change(String),
    /// `phone <name>`
    Phone(String),
    ShowAll,
    /// `add_birthday <name> <YYYY-MM-DD>`
    AddBirthday(String),
    /// `add_email <name> <email>`
    AddEmail(String),
    /// `search_by_bd <days>`
    SearchByBirthday(String),
    /// `days_to_bd <name>`
    DaysToBirthday(String),
    /// `delete <name>`
    Delete(String),
    /// `search <text>`
    Search(String),
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a line of input.
    ///
    /// The keyword is the first word and is matched case-insensitively. The
    /// rest of the line, trimmed, is the argument and keeps its case.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::commands::Command;
    ///
    /// assert_eq!(
    ///     Command::parse("ADD Bill 0501234567"),
    ///     Command::Add("Bill 0501234567".to_string())
    /// );
    /// assert_eq!(Command::parse("show all"), Command::ShowAll);
    /// ```
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let lowered = line.to_lowercase();

        // Multi-word forms are matched on the whole line.
        match lowered.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["show", "all"] => return Self::ShowAll,
            ["good", "bye"] => return Self::Exit,
            _ => {}
        }

        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim().to_string()),
            None => (line, String::new()),
        };

        match keyword.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add(argument),
            "change" => Self::Change(argument),
            "phone" => Self::Phone(argument),
            "show_all" => Self::ShowAll,
            "add_birthday" => Self::AddBirthday(argument),
            "add_email" => Self::AddEmail(argument),
            "search_by_bd" => Self::SearchByBirthday(argument),
            "days_to_bd" => Self::DaysToBirthday(argument),
            "delete" => Self::Delete(argument),
            "search" => Self::Search(argument),
            "exit" | "close" | "goodbye" | "." => Self::Exit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}
