use colored::*;
use tracing::info;

use cdnmap_common::config::Config;
use cdnmap_core::recon::ReconRecord;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

const TAGLINE: &str = "mapping what the CDN is supposed to hide";

/// Emits a raw line through the logging pipeline, without the
/// timestamp/level prefix.
pub fn print(msg: &str) {
    info!(target: "cdnmap::print", "{msg}");
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let text_content: String = format!("⟦ CDNMAP v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{sep}{text}{sep}"));
    centerln(&format!("{}", TAGLINE.italic().bright_black()));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    print(&line);
}

/// One `[FOUND:SECTION] domain ip asn provider country` result line.
pub fn found(section: &str, record: &ReconRecord) {
    let tag: ColoredString = format!("[FOUND:{section}]").color(colors::TEXT_DEFAULT).bold();
    let body: ColoredString = format!(
        "{} {} {} {} {}",
        record.domain, record.ip, record.asn, record.provider, record.country
    )
    .green();
    print(&format!("{tag} {body}"));
}

/// A TXT record line; free text, no structured fields.
pub fn found_txt(txt: &str) {
    let tag: ColoredString = "[FOUND:TXT]".color(colors::TEXT_DEFAULT).bold();
    print(&format!("{tag} {}", txt.color(colors::ACCENT)));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
