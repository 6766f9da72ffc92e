use anyhow::Context;
use ccnv_common::config::Config;
use ccnv_common::currency::{DEFAULT_PRECISION, ExchangeRate, Money};
use ccnv_core::{HttpTransport, RateService};
use tracing::info;

use crate::commands::ConversionRequest;
use crate::terminal::{print, spinner};

pub fn convert(request: &ConversionRequest, cfg: &Config, show_spinner: bool) -> anyhow::Result<()> {
    let source = Money::from_decimal(request.amount, request.from.as_str(), DEFAULT_PRECISION)?;

    let transport = HttpTransport::new(cfg)?;
    let mut service = RateService::new(transport, cfg.clone());

    let rate: ExchangeRate = spinner::while_waiting(
        show_spinner,
        format!("Fetching {} rates...", request.from),
        || service.get_rate(&request.from, &request.to),
    )
    .with_context(|| format!("cannot convert {} to {}", request.from, request.to))?;
    info!("{rate}");

    let target = source.exchange(&rate, request.precision)?;

    print::conversion(&rate, &source, &target);
    Ok(())
}
