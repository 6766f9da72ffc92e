use std::io::IsTerminal;

use ccnv_common::currency::{CurrencyCatalog, ExchangeRate, Money};
use tracing::{error, info, warn};

use crate::terminal::format;
use crate::terminal::logging::{FAILURE_TARGET, PRINT_TARGET};

/// Colors only make sense when a person is looking at stdout.
pub fn initialize() {
    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn catalog(catalog: &CurrencyCatalog) {
    if catalog.is_empty() {
        warn!("the rate feed lists no currencies");
        return;
    }
    for (code, name) in catalog.iter() {
        print(&format::catalog_line(code, name));
    }
}

pub fn catalog_unavailable(reason: &str) {
    warn!("currency catalog unavailable: {reason}");
}

pub fn conversion(rate: &ExchangeRate, from: &Money, to: &Money) {
    print(&format::conversion_line(rate, from, to));
}

/// Reported even when diagnostics are switched off.
pub fn failure(err: &anyhow::Error) {
    error!(target: FAILURE_TARGET, raw_msg = %format!("{err:#}"));
}
