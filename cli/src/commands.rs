pub mod convert;
pub mod list;

use std::process::ExitCode;
use std::time::Duration;

use ccnv_common::config::{Config, DEFAULT_BASE_URL};
use ccnv_common::currency::DEFAULT_PRECISION;
use clap::error::ErrorKind;
use clap::{ArgAction, ArgGroup, Parser};

const SAMPLES: &str = "Command line samples:
    ccnv -l
    ccnv -f eur -t usd
    ccnv -f usd -a 10 -t eur
    ccnv -f usd -a 25 -t uah";

#[derive(Parser, Debug)]
#[command(name = "ccnv")]
#[command(about = "Currency converter.")]
#[command(version, disable_version_flag = true, after_help = SAMPLES)]
#[command(group(ArgGroup::new("mode").required(true).multiple(true).args(["list", "from"])))]
pub struct CommandLine {
    /// List all available currencies
    #[arg(short, long)]
    pub list: bool,

    /// Currency to convert from (usd, eur, ...)
    #[arg(short, long, value_name = "CODE", requires = "to", value_parser = parse_code)]
    pub from: Option<String>,

    /// Currency to convert to (usd, eur, ...)
    #[arg(short, long, value_name = "CODE", requires = "from", value_parser = parse_code)]
    pub to: Option<String>,

    /// Amount to convert (10, 50, 100, ...)
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub amount: f64,

    /// Decimal digits of the converted amount
    #[arg(short, long, value_name = "DIGITS", default_value_t = DEFAULT_PRECISION,
          value_parser = clap::value_parser!(u32).range(0..=12))]
    pub precision: u32,

    /// Root URL of the rate feed
    #[arg(long, value_name = "URL", env = "CCNV_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Skip TLS certificate verification. Only for feeds behind a broken proxy.
    #[arg(long)]
    pub insecure: bool,

    /// Request timeout in seconds, 0 waits forever
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Print diagnostics to stderr, repeat for more detail
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

pub enum Mode {
    List,
    Convert(ConversionRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub precision: u32,
}

impl CommandLine {
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Listing wins when both a listing and a conversion were asked for.
    pub fn mode(&self) -> Mode {
        match (self.list, &self.from, &self.to) {
            (false, Some(from), Some(to)) => Mode::Convert(ConversionRequest {
                from: from.clone(),
                to: to.clone(),
                amount: self.amount,
                precision: self.precision,
            }),
            _ => Mode::List,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            insecure_tls: self.insecure,
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            ..Config::with_base_url(self.base_url.clone())
        }
    }
}

/// Prints clap's message and maps it to an exit code.
///
/// Help and version are successful outcomes, everything else is an invalid argument.
pub fn report_parse_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Currency codes are matched against the feed in lowercase.
fn parse_code(s: &str) -> Result<String, String> {
    let code = s.trim().to_ascii_lowercase();
    if code.is_empty() {
        return Err("currency code cannot be empty".to_string());
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("invalid currency code: {s}"));
    }
    Ok(code)
}
