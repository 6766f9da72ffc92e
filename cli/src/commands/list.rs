use ccnv_common::config::Config;
use ccnv_core::{CatalogListing, HttpTransport, RateService};
use tracing::info;

use crate::terminal::{print, spinner};

/// Prints the catalog. An unreachable feed is reported but is not a failure.
pub fn list(cfg: &Config, show_spinner: bool) -> anyhow::Result<()> {
    let transport = HttpTransport::new(cfg)?;
    let mut service = RateService::new(transport, cfg.clone());

    let listing = spinner::while_waiting(show_spinner, "Fetching currency list...", || {
        service.list_currencies()
    });

    match listing {
        CatalogListing::Available(catalog) => {
            info!("{} currencies available", catalog.len());
            print::catalog(&catalog);
        }
        CatalogListing::Unavailable { reason } => print::catalog_unavailable(&reason),
    }

    Ok(())
}
