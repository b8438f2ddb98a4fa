use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn banner(quiet: u8) {
    if quiet > 0 {
        return;
    }

    let text_content: String = format!("⟦ CONTACTR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::palette().primary).bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .color(colors::palette().separator);

    println!("{}{}{}", sep, text, sep);
}

pub fn header(msg: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    println!(
        "{}{}{}",
        "─".repeat(left).color(colors::palette().separator),
        formatted.to_uppercase().color(colors::palette().primary),
        "─".repeat(right).color(colors::palette().separator)
    );
}

pub fn blank() {
    println!();
}

pub fn fat_separator() {
    println!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::palette().separator)
    );
}

pub fn centerln(msg: &str) {
    let pad: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    println!("{}{}", " ".repeat(pad), msg);
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::palette().separator);
    println!(
        "{} {}",
        prefix,
        msg.as_ref().color(colors::palette().text_default)
    );
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!(
        "{}{}{}",
        "[".color(colors::palette().separator),
        idx.to_string().color(colors::palette().accent),
        "]".color(colors::palette().separator)
    );
    println!("{} {}", idx_str, name.color(colors::palette().primary));
}

/// One indented key/value branch per pair, keys dot-padded to align.
pub fn as_tree_one_level(key_value_pairs: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pairs
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pairs.iter().enumerate() {
        let last: bool = i + 1 == key_value_pairs.len();
        let glyph: &str = if last { "└─" } else { "├─" };
        let branch: ColoredString = glyph.color(colors::palette().separator);
        let dots: String = ".".repeat(key_width.saturating_sub(key.chars().count()) + 1);
        println!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::palette().text_default),
            dots.color(colors::palette().separator),
            ":".color(colors::palette().separator),
            value
        );
    }
}

pub fn contact_line(name: &str, phone: &str) {
    println!(
        "{} {} {}",
        name.color(colors::palette().text_default),
        "—".color(colors::palette().separator),
        phone.color(colors::palette().phone)
    );
}
