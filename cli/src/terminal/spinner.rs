use std::borrow::Cow;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Runs a blocking `task` behind a spinner on stderr.
///
/// Nothing is drawn when `enabled` is false or stderr is not a terminal.
pub fn while_waiting<T>(
    enabled: bool,
    message: impl Into<Cow<'static, str>>,
    task: impl FnOnce() -> T,
) -> T {
    if !enabled {
        return task();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(style());
    pb.set_message(message);
    pb.enable_steady_tick(TICK);

    let result = task();

    pb.finish_and_clear();
    result
}

fn style() -> ProgressStyle {
    match ProgressStyle::with_template("{spinner:.blue} {msg}") {
        Ok(style) => style.tick_strings(TICKS),
        Err(_) => ProgressStyle::default_spinner(),
    }
}
