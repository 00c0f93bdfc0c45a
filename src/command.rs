//! Query parsing
//!
//! Turns the text after the action keyword into a [`Command`]. The grammar is
//! a fixed set of dash-prefixed operators; anything that isn't one of them is
//! a plain search, never an error.
//!
//! ```text
//! <kw> -a <key> <content...>   add
//! <kw> -l [filter]             list
//! <kw> -r [filter]             remove
//! <kw> -r --all                remove all
//! <kw> -rl                     reload
//! <kw> -h | <kw> -             help
//! <kw> [text]                  search
//! ```

use tracing::debug;

/// Separator between query terms
const TERM_SEPARATOR: char = ' ';

/// Flag that turns `-r` into remove-all
const ALL_FLAG: &str = "--all";

/// A launcher query routed to this plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Keyword the user typed to reach the plugin
    pub action_keyword: String,
    /// Everything after the action keyword
    pub search: String,
}

impl Query {
    pub fn new(action_keyword: impl Into<String>, search: impl Into<String>) -> Self {
        Query {
            action_keyword: action_keyword.into(),
            search: search.into(),
        }
    }

    /// Build a query from a full launcher line such as `"mc -a sig Cheers"`
    ///
    /// The leading action keyword is dropped when present; otherwise the
    /// whole line is the search text.
    pub fn from_raw(raw: &str, action_keyword: &str) -> Self {
        let raw = raw.trim_start();
        let search = match raw.split_once(TERM_SEPARATOR) {
            Some((first, rest)) if first == action_keyword => rest.trim_start(),
            None if raw == action_keyword => "",
            _ => raw,
        };
        Query::new(action_keyword, search)
    }

    /// Non-empty terms of the search text
    pub fn terms(&self) -> Vec<&str> {
        terms(&self.search)
    }

    pub fn first_search(&self) -> &str {
        nth_term(&self.search, 0)
    }

    pub fn second_search(&self) -> &str {
        nth_term(&self.search, 1)
    }

    /// Terms from the second one onward, joined by single spaces
    pub fn second_to_end_search(&self) -> String {
        terms(&self.search)
            .into_iter()
            .skip(1)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The query text that re-targets this plugin with `suffix`
    pub fn with_keyword(&self, suffix: &str) -> String {
        format!("{} {}", self.action_keyword, suffix)
    }
}

fn terms(search: &str) -> Vec<&str> {
    search
        .split(TERM_SEPARATOR)
        .filter(|t| !t.is_empty())
        .collect()
}

fn nth_term(search: &str, n: usize) -> &str {
    search
        .split(TERM_SEPARATOR)
        .filter(|t| !t.is_empty())
        .nth(n)
        .unwrap_or("")
}

/// Dash-prefixed operators, matched case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    List,
    Add,
    Remove,
    Help,
    Reload,
}

impl Operator {
    /// Match a flag with its leading dashes already stripped
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag.to_ascii_lowercase().as_str() {
            "l" => Some(Operator::List),
            "a" => Some(Operator::Add),
            "r" => Some(Operator::Remove),
            "h" => Some(Operator::Help),
            "rl" => Some(Operator::Reload),
            _ => None,
        }
    }
}

/// What a query asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List { filter: String },
    Add { key: String, content: String },
    Remove { filter: String },
    RemoveAll,
    Reload,
    Search { text: String },
}

impl Command {
    /// Classify the search text of a query
    ///
    /// Add with empty content is still returned; the store rejects it when
    /// the entry is created.
    pub fn parse(search: &str) -> Self {
        let query = Query::new("", search);
        let first = query.first_search();

        if first == "-" {
            return Command::Help;
        }

        if !first.starts_with('-') {
            return Command::Search {
                text: search.to_string(),
            };
        }

        let Some(op) = Operator::from_flag(first.trim_start_matches('-')) else {
            debug!(flag = first, "Unknown operator, falling back to search");
            return Command::Search {
                text: search.to_string(),
            };
        };

        match op {
            Operator::Help => Command::Help,
            Operator::Remove if query.second_search().eq_ignore_ascii_case(ALL_FLAG) => {
                Command::RemoveAll
            }
            Operator::Remove => Command::Remove {
                filter: query.second_to_end_search(),
            },
            Operator::Add => Command::Add {
                key: query.second_search().to_string(),
                content: query
                    .terms()
                    .into_iter()
                    .skip(2)
                    .collect::<Vec<_>>()
                    .join(" "),
            },
            Operator::List => Command::List {
                filter: query.second_to_end_search(),
            },
            Operator::Reload => Command::Reload,
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List { .. } => "list",
            Command::Add { .. } => "add",
            Command::Remove { .. } => "remove",
            Command::RemoveAll => "remove_all",
            Command::Reload => "reload",
            Command::Search { .. } => "search",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(text: &str) -> Command {
        Command::Search {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_lone_dash_is_help() {
        assert_eq!(Command::parse("-"), Command::Help);
        assert_eq!(Command::parse("- whatever"), Command::Help);
    }

    #[test]
    fn test_help_flag_any_case() {
        assert_eq!(Command::parse("-h"), Command::Help);
        assert_eq!(Command::parse("-H"), Command::Help);
        assert_eq!(Command::parse("--h"), Command::Help);
    }

    #[test]
    fn test_add_splits_key_and_content() {
        assert_eq!(
            Command::parse("-a key some text"),
            Command::Add {
                key: "key".to_string(),
                content: "some text".to_string(),
            }
        );
    }

    #[test]
    fn test_add_without_content_still_parses() {
        assert_eq!(
            Command::parse("-a key"),
            Command::Add {
                key: "key".to_string(),
                content: String::new(),
            }
        );
        assert_eq!(
            Command::parse("-a"),
            Command::Add {
                key: String::new(),
                content: String::new(),
            }
        );
    }

    #[test]
    fn test_add_content_ignores_repeated_spaces() {
        let expected = Command::Add {
            key: "key".to_string(),
            content: "some text".to_string(),
        };
        assert_eq!(Command::parse("-a  key some text"), expected);
        assert_eq!(Command::parse("-a key  some text"), expected);
        assert_eq!(Command::parse("-a key some   text "), expected);
    }

    #[test]
    fn test_add_with_leading_space() {
        assert_eq!(
            Command::parse(" -a key some text"),
            Command::Add {
                key: "key".to_string(),
                content: "some text".to_string(),
            }
        );
    }

    #[test]
    fn test_remove_all() {
        assert_eq!(Command::parse("-r --all"), Command::RemoveAll);
        assert_eq!(Command::parse("-R --ALL"), Command::RemoveAll);
    }

    #[test]
    fn test_remove_with_filter() {
        assert_eq!(
            Command::parse("-r foo"),
            Command::Remove {
                filter: "foo".to_string()
            }
        );
        assert_eq!(
            Command::parse("-r foo bar"),
            Command::Remove {
                filter: "foo bar".to_string()
            }
        );
        assert_eq!(
            Command::parse("-r"),
            Command::Remove {
                filter: String::new()
            }
        );
    }

    #[test]
    fn test_list_and_reload() {
        assert_eq!(
            Command::parse("-l mail"),
            Command::List {
                filter: "mail".to_string()
            }
        );
        assert_eq!(Command::parse("-rl"), Command::Reload);
        assert_eq!(Command::parse("-RL"), Command::Reload);
    }

    #[test]
    fn test_unknown_operator_degrades_to_search() {
        assert_eq!(Command::parse("-zz anything"), search("-zz anything"));
        assert_eq!(Command::parse("--"), search("--"));
    }

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(Command::parse("plain text"), search("plain text"));
        assert_eq!(Command::parse(""), search(""));
    }

    #[test]
    fn test_query_from_raw_strips_keyword() {
        let q = Query::from_raw("mc -a sig Cheers", "mc");
        assert_eq!(q.action_keyword, "mc");
        assert_eq!(q.search, "-a sig Cheers");
        assert_eq!(q.first_search(), "-a");
        assert_eq!(q.second_search(), "sig");
        assert_eq!(q.second_to_end_search(), "sig Cheers");

        assert_eq!(Query::from_raw("mc", "mc").search, "");
        assert_eq!(Query::from_raw("hello world", "mc").search, "hello world");
        // Only a whole-token keyword counts
        assert_eq!(Query::from_raw("mcx y", "mc").search, "mcx y");
    }

    #[test]
    fn test_query_terms_skip_empty_entries() {
        let q = Query::new("mc", "  -l   a  b ");
        assert_eq!(q.terms(), vec!["-l", "a", "b"]);
        assert_eq!(q.second_to_end_search(), "a b");
        assert_eq!(q.with_keyword("-h"), "mc -h");
    }
}
