//! Help listing
//!
//! A fixed menu of command templates. Selecting one rewrites the query to
//! that command's prefix so the user can keep typing.

use std::path::Path;

use crate::results::{ResultAction, ResultItem};

/// A command template shown in the help menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    /// Shown after the action keyword in the title
    pub usage: &'static str,
    pub description: &'static str,
    /// Query suffix written after the action keyword when selected
    pub prefix: &'static str,
}

pub const HELP_ENTRIES: &[HelpEntry] = &[
    HelpEntry {
        usage: "-a [text]",
        description: "add macros",
        prefix: "-a ",
    },
    HelpEntry {
        usage: "-rl",
        description: "reload macros from data file",
        prefix: "-rl",
    },
    HelpEntry {
        usage: "[keyword]",
        description: "list macros",
        prefix: "-l ",
    },
    HelpEntry {
        usage: "-l [keyword]",
        description: "list all macros",
        prefix: "-l ",
    },
    HelpEntry {
        usage: "-r [keyword]",
        description: "remove macros",
        prefix: "-r ",
    },
    HelpEntry {
        usage: "-r --all",
        description: "remove all macros",
        prefix: "-r --all",
    },
];

/// Help menu for `action_keyword`
pub fn help_results(action_keyword: &str, icon: &Path) -> Vec<ResultItem> {
    HELP_ENTRIES
        .iter()
        .map(|entry| {
            ResultItem::new(
                format!("{} {}", action_keyword, entry.usage),
                entry.description,
                icon,
                ResultAction::change_query(format!("{} {}", action_keyword, entry.prefix)),
            )
        })
        .collect()
}
