//! Presentable result items and the actions they carry.
//!
//! Actions are plain data. The host hands a selected item's action back to
//! [`crate::dispatcher::Dispatcher::execute`], which performs it.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::config::MacrosConfig;
use crate::macros::Macro;
use crate::relative_time::format_relative_time;

/// What selecting a result does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultAction {
    /// Copy the text to the clipboard and close
    Copy { content: String },
    /// Rewrite the launcher query and keep it open
    ChangeQuery { query: String, requery: bool },
    /// Create a macro
    Add { key: String, content: String },
    /// Remove the first macro with this macro's key
    Remove(Macro),
    RemoveAll,
    Reload,
}

impl ResultAction {
    pub fn change_query(query: impl Into<String>) -> Self {
        ResultAction::ChangeQuery {
            query: query.into(),
            requery: false,
        }
    }
}

/// Whether the launcher should close after an action ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Commit,
    KeepOpen,
}

/// One row in the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
    pub icon: PathBuf,
    pub action: ResultAction,
}

impl ResultItem {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: impl Into<PathBuf>,
        action: ResultAction,
    ) -> Self {
        ResultItem {
            title: title.into(),
            subtitle: subtitle.into(),
            icon: icon.into(),
            action,
        }
    }
}

type SubtitleFn<'a> = Box<dyn Fn(&Macro) -> String + 'a>;
type ActionFn<'a> = Box<dyn Fn(&Macro) -> ResultAction + 'a>;

/// Turns an ordered macro list into result items
///
/// Defaults: subtitle is the macro's age, action copies the content.
pub struct ResultBuilder<'a> {
    config: &'a MacrosConfig,
    now: DateTime<Utc>,
    subtitle: Option<SubtitleFn<'a>>,
    action: Option<ActionFn<'a>>,
}

impl<'a> ResultBuilder<'a> {
    pub fn new(config: &'a MacrosConfig) -> Self {
        Self::at(config, Utc::now())
    }

    /// Builder whose relative ages are measured from `now`
    pub fn at(config: &'a MacrosConfig, now: DateTime<Utc>) -> Self {
        ResultBuilder {
            config,
            now,
            subtitle: None,
            action: None,
        }
    }

    pub fn subtitle(mut self, f: impl Fn(&Macro) -> String + 'a) -> Self {
        self.subtitle = Some(Box::new(f));
        self
    }

    pub fn action(mut self, f: impl Fn(&Macro) -> ResultAction + 'a) -> Self {
        self.action = Some(Box::new(f));
        self
    }

    /// One item per macro, in the given order
    ///
    /// An empty input yields a single "No results" item that opens help.
    pub fn build(&self, macros: &[Macro]) -> Vec<ResultItem> {
        if macros.is_empty() {
            return vec![self.no_results()];
        }

        let icon = self.config.macro_icon();
        macros
            .iter()
            .map(|m| {
                let subtitle = match &self.subtitle {
                    Some(f) => f(m),
                    None => format_relative_time(self.now, m.created_time),
                };
                let action = match &self.action {
                    Some(f) => f(m),
                    None => ResultAction::Copy {
                        content: m.content.clone(),
                    },
                };
                ResultItem::new(m.content.clone(), subtitle, icon.clone(), action)
            })
            .collect()
    }

    fn no_results(&self) -> ResultItem {
        ResultItem::new(
            "No results",
            "click to view help",
            self.config.app_icon(),
            ResultAction::change_query(format!("{} -h", self.config.action_keyword)),
        )
    }
}
