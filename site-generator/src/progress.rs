use indicatif::{ProgressBar, ProgressStyle};

/// Bar in the style used for every long batch in this tool.
pub fn progress_bar(len: usize, unit: &str, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let template = format!("[{{bar:40.green/blue}}] {{pos}}/{{len}} {unit} ({{percent}}%) {{msg}}");
    let style = ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏");
    pb.set_style(style);
    pb.set_message(message);
    pb
}
