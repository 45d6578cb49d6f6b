use anyhow::{Result, bail};
use clap::Args;
use drugdev_search::{SearchSession, SearchState, SortOrder};
use tracing::{info, warn};

use super::{
    ClientArgs, OutputFormat, SelectionArgs, card_config, create_search_client, print_state,
    run_search,
};

#[derive(Args, Debug)]
pub struct Search {
    /// Free-text search terms
    pub query: String,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only mark "et al." when authors were actually left off the card
    #[arg(long)]
    pub true_count_et_al: bool,
}

impl Search {
    pub async fn execute(&self, client_args: &ClientArgs) -> Result<()> {
        let client = create_search_client(client_args)?;

        let mut session = SearchSession::new();
        session.set_query(self.query.as_str());
        session.set_page_size(self.selection.limit);
        session.set_sort(SortOrder::from(self.selection.sort));

        info!(
            query = %self.query,
            limit = %self.selection.limit,
            sort = %session.sort(),
            "Searching for drug development papers"
        );

        if !run_search(&mut session, &client).await? {
            warn!("Query is empty, nothing to search");
            return Ok(());
        }

        print_state(
            session.state(),
            self.format,
            &card_config(self.true_count_et_al),
        )?;

        check_outcome(session.state())
    }
}

/// Non-zero exit for a failed search
///
/// The user-facing message is already on stdout, so the error only names
/// the failure for the exit report.
fn check_outcome(state: &SearchState) -> Result<()> {
    if matches!(state, SearchState::Failed { .. }) {
        bail!("search did not complete");
    }
    Ok(())
}
