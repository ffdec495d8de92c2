use crate::config::AssetKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No argument: split, then build if the split succeeded.
    Default,
    Split,
    Build,
    Watch,
    /// Module table with usage notes (script profile only).
    List,
    Help,
    Invalid(String),
}

impl Command {
    /// Commands are case-insensitive; anything unknown becomes [`Command::Invalid`].
    pub fn parse(raw: Option<&str>, kind: AssetKind) -> Self {
        let Some(raw) = raw else {
            return Command::Default;
        };

        match raw.to_lowercase().as_str() {
            "split" => Command::Split,
            "build" => Command::Build,
            "watch" => Command::Watch,
            "list" if kind == AssetKind::Js => Command::List,
            "help" | "-h" | "--help" => Command::Help,
            _ => Command::Invalid(raw.to_string()),
        }
    }
}
