//! Match rules for routes.

/// Rule deciding whether a route applies to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// First whitespace-delimited token is `/<name>` (case-sensitive), optionally addressed as
    /// `/<name>@<bot_username>` to this bot. Arguments after the token are ignored.
    Command(String),
    /// Catch-all: matches every message, including ones without text.
    Any,
}

impl Predicate {
    /// Command predicate; a leading `/` in `name` is accepted and dropped.
    pub fn command(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix('/') {
            Some(stripped) => Predicate::Command(stripped.to_string()),
            None => Predicate::Command(name),
        }
    }

    /// Whether this rule applies to `text`. `bot_username` is the running bot's username, used to accept
    /// `/cmd@username`; a command addressed to another bot never matches.
    pub fn matches(&self, text: Option<&str>, bot_username: Option<&str>) -> bool {
        match self {
            Predicate::Any => true,
            Predicate::Command(name) => {
                let Some(token) = text.and_then(|t| t.split_whitespace().next()) else {
                    return false;
                };
                let Some(command) = token.strip_prefix('/') else {
                    return false;
                };
                match command.split_once('@') {
                    None => command == name,
                    Some((command, mention)) => {
                        command == name
                            && bot_username.is_some_and(|u| u.eq_ignore_ascii_case(mention))
                    }
                }
            }
        }
    }
}
