//! Query routing and action execution
//!
//! `query` is read-only apart from remembering the action keyword; every
//! mutation happens in `execute`, when the host hands back the action of a
//! selected result.

use tracing::{debug, info, instrument, warn};

use crate::command::{Command, Query};
use crate::config::MacrosConfig;
use crate::error::Result;
use crate::help::help_results;
use crate::host::{ClipboardWriter, HostApi};
use crate::macros::{JsonFilePersistence, Macro, MacroPersistence, MacroStore};
use crate::results::{ActionOutcome, ResultAction, ResultBuilder, ResultItem};

pub struct Dispatcher<P: MacroPersistence = JsonFilePersistence> {
    store: MacroStore<P>,
    config: MacrosConfig,
}

impl<P: MacroPersistence> Dispatcher<P> {
    pub fn new(store: MacroStore<P>, config: MacrosConfig) -> Self {
        Dispatcher { store, config }
    }

    pub fn store(&self) -> &MacroStore<P> {
        &self.store
    }

    pub fn config(&self) -> &MacrosConfig {
        &self.config
    }

    /// Results for one launcher query
    ///
    /// Fails only when the query needs the macro list and the store is not
    /// loaded. Malformed queries degrade to a plain search.
    #[instrument(name = "macros_query", skip_all, fields(search = %query.search))]
    pub fn query(&mut self, query: &Query) -> Result<Vec<ResultItem>> {
        // Default completions reset the query to whichever keyword was used last
        self.config.action_keyword = query.action_keyword.clone();

        let command = Command::parse(&query.search);
        debug!(command = command.name(), "Dispatching query");

        match command {
            Command::Help => Ok(help_results(
                &self.config.action_keyword,
                &self.config.app_icon(),
            )),
            Command::Search { text } => self.search(&text),
            Command::List { filter } => self.search(&filter),
            Command::Remove { filter } => self.remove_candidates(&filter),
            Command::RemoveAll => Ok(vec![ResultItem::new(
                "Remove all macros?",
                "click to remove all macros",
                self.config.app_icon(),
                ResultAction::RemoveAll,
            )]),
            Command::Add { key, content } => Ok(vec![self.add_result(key, content)]),
            Command::Reload => Ok(vec![ResultItem::new(
                "Reload macros from data file?",
                "click to reload",
                self.config.app_icon(),
                ResultAction::Reload,
            )]),
        }
    }

    /// Every macro, newest first, each copying its content when selected
    pub fn all_results(&self) -> Result<Vec<ResultItem>> {
        let macros = self.store.find(|_| true)?;
        Ok(ResultBuilder::new(&self.config).build(&macros))
    }

    /// Perform a selected result's action
    ///
    /// Store failures are returned. A clipboard failure is reported to the
    /// host as a notification instead.
    #[instrument(name = "macros_execute", skip_all)]
    pub fn execute(
        &mut self,
        action: ResultAction,
        host: &mut dyn HostApi,
        clipboard: &mut dyn ClipboardWriter,
    ) -> Result<ActionOutcome> {
        let reset_query = self.reset_query();
        let icon = self.config.app_icon();

        match action {
            ResultAction::Copy { content } => {
                if let Err(e) = clipboard.set_text(&content) {
                    warn!(error = %e, "Copy to clipboard failed");
                    host.show_message("Failed", &e.user_message(), &icon);
                }
                Ok(ActionOutcome::Commit)
            }
            ResultAction::ChangeQuery { query, requery } => {
                host.change_query(&query, requery);
                Ok(ActionOutcome::KeepOpen)
            }
            ResultAction::Add { key, content } => {
                if self.store.add(Macro::new(key, content))? {
                    info!(count = self.store.len(), "Macro added");
                    host.change_query(&reset_query, false);
                }
                Ok(ActionOutcome::KeepOpen)
            }
            ResultAction::Remove(item) => {
                let removed = self.store.remove(&item)?;
                info!(key = %item.key, removed, "Macro remove handled");
                host.change_query(&reset_query, false);
                host.show_message("Success", "macro removed!", &icon);
                Ok(ActionOutcome::Commit)
            }
            ResultAction::RemoveAll => {
                self.store.remove_all()?;
                info!("All macros removed");
                host.change_query(&reset_query, false);
                host.show_message("Success", "all macros removed!", &icon);
                Ok(ActionOutcome::Commit)
            }
            ResultAction::Reload => {
                self.store.reload()?;
                info!(count = self.store.len(), "Macros reloaded");
                host.change_query(&reset_query, true);
                Ok(ActionOutcome::KeepOpen)
            }
        }
    }

    /// Macros whose key or content contains `text`; selecting one puts its
    /// content into the query
    fn search(&self, text: &str) -> Result<Vec<ResultItem>> {
        let needle = text.to_lowercase();
        let macros = self.store.find(|m| matches_filter(m, &needle))?;

        let mut results = ResultBuilder::new(&self.config)
            .action(|m| ResultAction::ChangeQuery {
                query: m.content.clone(),
                requery: true,
            })
            .build(&macros);

        if !text.is_empty() && macros.is_empty() {
            results.insert(0, self.new_item_result(text));
        }
        Ok(results)
    }

    /// Removal candidates, matched on key or content
    ///
    /// The removal itself is keyed: it deletes the first macro sharing the
    /// candidate's key, which may not be the one shown.
    fn remove_candidates(&self, filter: &str) -> Result<Vec<ResultItem>> {
        let needle = filter.to_lowercase();
        let macros = self.store.find(|m| matches_filter(m, &needle))?;

        Ok(ResultBuilder::new(&self.config)
            .subtitle(|_| "click to remove macro".to_string())
            .action(|m| ResultAction::Remove(m.clone()))
            .build(&macros))
    }

    fn add_result(&self, key: String, content: String) -> ResultItem {
        ResultItem::new(
            format!("add new item \"{}\"", key),
            content.clone(),
            self.config.app_icon(),
            ResultAction::Add { key, content },
        )
    }

    /// Offered when a search finds nothing: continue as an add command
    fn new_item_result(&self, text: &str) -> ResultItem {
        ResultItem::new(
            format!("add new item \"{}\"", text),
            "",
            self.config.app_icon(),
            ResultAction::change_query(format!("{} -a {} ", self.config.action_keyword, text)),
        )
    }

    fn reset_query(&self) -> String {
        format!("{} ", self.config.action_keyword)
    }
}

/// Case-insensitive substring match on key or content.
/// `needle_lower` must already be lowercase.
fn matches_filter(item: &Macro, needle_lower: &str) -> bool {
    contains_ignore_case(&item.key, needle_lower) || contains_ignore_case(&item.content, needle_lower)
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle_lower.is_ascii() {
        return contains_ignore_ascii_case(haystack, needle_lower);
    }
    haystack.to_lowercase().contains(needle_lower)
}

/// ASCII case-insensitive substring check.
/// `needle_lower` must already be lowercase.
/// No allocation - O(n*m) worst case.
#[inline]
fn contains_ignore_ascii_case(haystack: &str, needle_lower: &str) -> bool {
    let h = haystack.as_bytes();
    let n = needle_lower.as_bytes();
    if n.len() > h.len() {
        return false;
    }
    h.windows(n.len())
        .any(|window| window.iter().zip(n).all(|(a, b)| a.to_ascii_lowercase() == *b))
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
