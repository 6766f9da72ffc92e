use ccnv_common::currency::{ExchangeRate, Money};
use colored::*;

use crate::terminal::colors;

const UNKNOWN_DATE: &str = "unknown date";

pub fn date_label(rate: &ExchangeRate) -> ColoredString {
    match rate.date() {
        Some(date) => date.color(colors::TEXT_DEFAULT),
        None => UNKNOWN_DATE.color(colors::MUTED).italic(),
    }
}

pub fn rate_label(rate: &ExchangeRate) -> ColoredString {
    format!("rate: {}", rate.rate).color(colors::ACCENT)
}

pub fn money(amount: &Money) -> ColoredString {
    amount.to_string().color(colors::PRIMARY).bold()
}

/// `[2024-01-01] [rate: 0.91] 10.00 usd -> 9.10 eur`
pub fn conversion_line(rate: &ExchangeRate, from: &Money, to: &Money) -> String {
    let open: ColoredString = "[".color(colors::SEPARATOR);
    let close: ColoredString = "]".color(colors::SEPARATOR);
    format!(
        "{open}{}{close} {open}{}{close} {} {} {}",
        date_label(rate),
        rate_label(rate),
        money(from),
        "->".color(colors::SEPARATOR),
        money(to)
    )
}

/// `usd : US Dollar`
pub fn catalog_line(code: &str, name: &str) -> String {
    format!(
        "{} {} {}",
        code.color(colors::PRIMARY),
        ":".color(colors::SEPARATOR),
        name.color(colors::TEXT_DEFAULT)
    )
}
