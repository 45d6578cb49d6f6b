use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use drugdev_search::{PageSize, SearchSession, SortOrder};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use super::{
    ClientArgs, OutputFormat, SelectionArgs, card_config, create_search_client, print_state,
    run_search,
};

const PROMPT: &str = "drugdev> ";

const HELP: &str = "Type search terms and press Enter to search.
  :limit N    results per page (10, 20, 50, 100)
  :sort KEY   relevance or pub_date
  :help       show this message
  :quit       exit";

#[derive(Args, Debug)]
pub struct Interactive {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Only mark "et al." when authors were actually left off the card
    #[arg(long)]
    pub true_count_et_al: bool,
}

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Search(String),
    Limit(PageSize),
    Sort(SortOrder),
    Help,
    Quit,
    Blank,
    Invalid(String),
}

impl Directive {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Directive::Blank;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Directive::Search(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "q" | "quit" | "exit" => Directive::Quit,
            "h" | "help" => Directive::Help,
            "limit" => match super::parse_page_size(arg) {
                Ok(size) => Directive::Limit(size),
                Err(e) => Directive::Invalid(e),
            },
            "sort" => match arg.parse::<SortOrder>() {
                Ok(sort) => Directive::Sort(sort),
                Err(e) => Directive::Invalid(e.to_string()),
            },
            other => Directive::Invalid(format!("Unknown command ':{other}'")),
        }
    }
}

impl Interactive {
    pub async fn execute(&self, client_args: &ClientArgs) -> Result<()> {
        let client = create_search_client(client_args)?;
        let config = card_config(self.true_count_et_al);

        let mut session = SearchSession::new();
        session.set_page_size(self.selection.limit);
        session.set_sort(SortOrder::from(self.selection.sort));

        let mut stdout = io::stdout();
        writeln!(stdout, "{HELP}")?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match Directive::parse(&line) {
                Directive::Blank => {}
                Directive::Quit => break,
                Directive::Help => writeln!(stdout, "{HELP}")?,
                Directive::Limit(size) => {
                    session.set_page_size(size);
                    writeln!(stdout, "Showing up to {size} results")?;
                }
                Directive::Sort(sort) => {
                    session.set_sort(sort);
                    writeln!(stdout, "Sorting by {sort}")?;
                }
                Directive::Invalid(message) => warn!("{message}"),
                Directive::Search(query) => {
                    session.set_query(query);
                    if run_search(&mut session, &client).await? {
                        print_state(session.state(), OutputFormat::Text, &config)?;
                    }
                }
            }
        }

        debug!(searches = session.latest_token(), "Interactive session finished");
        Ok(())
    }
}
