use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁",
];

/// Bar style for deferred generation runs.
pub fn batch_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {wide_bar:.green/black} {pos}/{len}")
        .unwrap()
        .tick_strings(TICK_STRINGS)
}

/// Spinner shown while the prefix lookup loads. Not shown when quiet.
pub fn load_spinner(msg: &str, quiet: u8) -> Option<ProgressBar> {
    if quiet > 0 {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(TICK_STRINGS);
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(msg.to_string());

    Some(pb)
}
