pub mod ask;
pub mod graph;
pub mod hexagram;
pub mod sequence;
pub mod trigram;

use colored::Colorize;
use iching_core::Catalog;

/// Load the bundled catalog, turning errors into CLI messages.
fn load_catalog() -> Result<Catalog, String> {
    Catalog::load().map_err(|e| e.to_string())
}

/// Draw one line: solid for yang, broken for yin, marked when changing.
fn draw_line(value: u8, changing: bool) -> String {
    let body = if value == 1 {
        "━━━━━━━━━"
    } else {
        "━━━━ ━━━━"
    };
    match (changing, value) {
        (true, 1) => format!("{} {}", body.yellow(), "o".yellow()),
        (true, _) => format!("{} {}", body.yellow(), "x".yellow()),
        (false, _) => body.to_string(),
    }
}

/// Print bottom-first lines top line first, indented.
fn print_lines(lines: &[u8]) {
    for &line in lines.iter().rev() {
        println!("    {}", draw_line(line, false));
    }
}
