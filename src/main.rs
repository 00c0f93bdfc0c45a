//! Command-line host for the macros plugin.
//!
//! Stands in for the launcher: runs one query, prints the numbered results
//! and optionally performs the action of one of them.
//!
//! ```bash
//! script-kit-macros query -- -a sig Best regards
//! script-kit-macros query --select 1 -- -a sig Best regards
//! script-kit-macros query sig
//! script-kit-macros all --select 1        # copy the newest macro
//! script-kit-macros set-folder ~/Dropbox/macros
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use script_kit_macros::config::{
    default_plugin_directory, load_settings, save_settings, MacrosConfig, DEFAULT_ACTION_KEYWORD,
    SETTINGS_FILE_NAME,
};
use script_kit_macros::error::ResultExt;
use script_kit_macros::host::{ArboardClipboard, HostApi};
use script_kit_macros::logging;
use script_kit_macros::{ActionOutcome, Dispatcher, MacroStore, Query, ResultItem};

#[derive(Debug, Parser)]
#[command(
    name = "script-kit-macros",
    version,
    about = "Text snippets driven by a launcher-style query"
)]
struct Cli {
    /// Action keyword the query is addressed to
    #[arg(long, short = 'k', default_value = DEFAULT_ACTION_KEYWORD)]
    keyword: String,

    /// Plugin directory holding icons, settings and the default data file
    #[arg(long)]
    plugin_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Run a query and print its results (use `--` before flag-like text)
    Query {
        /// Perform the action of result N (1-based)
        #[arg(long, short)]
        select: Option<usize>,

        /// Query text after the action keyword
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// List every macro; selecting one copies it to the clipboard
    All {
        /// Copy result N (1-based)
        #[arg(long, short)]
        select: Option<usize>,
    },
    /// Store macros in FOLDER from now on
    SetFolder { folder: String },
}

/// Launcher stand-in that prints what the plugin asks for
#[derive(Default)]
struct ConsoleHost {
    requery: Option<String>,
}

impl HostApi for ConsoleHost {
    fn change_query(&mut self, query: &str, requery: bool) {
        println!("query -> {:?}", query);
        if requery {
            self.requery = Some(query.to_string());
        }
    }

    fn show_message(&mut self, title: &str, body: &str, _icon: &Path) {
        println!("[{}] {}", title, body);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let plugin_dir = cli.plugin_dir.unwrap_or_else(default_plugin_directory);
    let settings = load_settings(&plugin_dir.join(SETTINGS_FILE_NAME));
    let config = MacrosConfig::new(plugin_dir, settings).with_action_keyword(cli.keyword);

    let (results, select) = match cli.command {
        CliCommand::SetFolder { folder } => return set_folder(&config, folder),
        CliCommand::Query { select, text } => {
            let mut dispatcher = activate(config);
            let query = Query::new(dispatcher.config().action_keyword.clone(), text.join(" "));
            let results = dispatcher.query(&query).context("Query failed")?;
            (results, select.map(|n| (n, dispatcher)))
        }
        CliCommand::All { select } => {
            let dispatcher = activate(config);
            let results = dispatcher.all_results().context("Listing macros failed")?;
            (results, select.map(|n| (n, dispatcher)))
        }
    };

    print_results(&results);

    if let Some((n, mut dispatcher)) = select {
        let item = n
            .checked_sub(1)
            .and_then(|i| results.get(i))
            .with_context(|| format!("No result #{} (got {})", n, results.len()))?;

        let mut host = ConsoleHost::default();
        let mut clipboard = ArboardClipboard::new();
        let outcome = dispatcher.execute(item.action.clone(), &mut host, &mut clipboard)?;
        info!(selected = n, ?outcome, "Executed result action");

        if let Some(raw) = host.requery.take() {
            let keyword = dispatcher.config().action_keyword.clone();
            let query = Query::from_raw(&raw, &keyword);
            if let Some(results) = dispatcher.query(&query).log_err() {
                print_results(&results);
            }
        }

        match outcome {
            ActionOutcome::Commit => println!("done"),
            ActionOutcome::KeepOpen => println!("(query stays open)"),
        }
    }

    Ok(())
}

/// Build the store and dispatcher. A failed load is reported but the
/// dispatcher still starts so `-rl` can recover.
fn activate(config: MacrosConfig) -> Dispatcher {
    let mut store = MacroStore::new(&config);
    if let Err(e) = store.load() {
        error!(error = %e, severity = ?e.severity(), "Failed to load macros");
        eprintln!("[{}] {}", e.severity().label(), e.user_message());
    }
    Dispatcher::new(store, config)
}

fn set_folder(config: &MacrosConfig, folder: String) -> Result<()> {
    let mut settings = config.settings.clone();
    settings.folder_path = Some(folder);
    save_settings(&config.settings_path(), &settings)?;
    println!(
        "macros folder set to {}",
        settings
            .data_folder()
            .unwrap_or_else(|| config.plugin_directory.clone())
            .display()
    );
    Ok(())
}

fn print_results(results: &[ResultItem]) {
    for (i, item) in results.iter().enumerate() {
        if item.subtitle.is_empty() {
            println!("{:>3}. {}", i + 1, item.title);
        } else {
            println!("{:>3}. {}  ({})", i + 1, item.title, item.subtitle);
        }
    }
}
