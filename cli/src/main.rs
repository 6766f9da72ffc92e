mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Mode, convert, list};
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = match CommandLine::parse_args() {
        Ok(commands) => commands,
        Err(err) => return commands::report_parse_error(err),
    };

    logging::init_logging(commands.verbose);
    print::initialize();

    let cfg = commands.config();
    let show_spinner: bool = commands.verbose == 0;

    let result = match commands.mode() {
        Mode::List => list::list(&cfg, show_spinner),
        Mode::Convert(request) => convert::convert(&request, &cfg, show_spinner),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::failure(&err);
            ExitCode::FAILURE
        }
    }
}
