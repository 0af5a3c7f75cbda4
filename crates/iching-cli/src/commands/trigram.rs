use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use iching_core::{Position, SymbolKind};

pub fn run(number: &str, list_hexagrams: bool, position: Option<&str>) -> Result<(), String> {
    let catalog = super::load_catalog()?;
    let number = SymbolKind::Trigram
        .parse_number(number)
        .map_err(|e| e.to_string())?;
    let trigram = catalog.trigram(number).map_err(|e| e.to_string())?;

    println!(
        "  {} {} {}",
        trigram.character,
        trigram.names.join(" / ").bold(),
        format!("[{}]", trigram.chinese_name).dimmed()
    );
    println!();
    println!("  number:    {}", trigram.number);
    println!("  binary:    {}", trigram.binary);
    println!("  attribute: {}", trigram.attribute);
    println!(
        "  images:    {} {}",
        trigram.images.join(", "),
        format!("({})", trigram.chinese_image).dimmed()
    );
    println!("  family:    {}", trigram.family_relationship);
    println!();
    super::print_lines(&trigram.lines);

    if !list_hexagrams {
        return Ok(());
    }

    let position = position
        .map(|p| p.parse::<Position>())
        .transpose()
        .map_err(|e| e.to_string())?;
    let hexagrams = catalog.trigram_hexagrams(trigram, position);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "", "Name", "Binary", "Position"]);
    for h in &hexagrams {
        let at = match (h.top_trigram == number, h.bottom_trigram == number) {
            (true, true) => "top, bottom",
            (true, false) => "top",
            _ => "bottom",
        };
        table.add_row(vec![
            h.number.to_string(),
            h.character.clone(),
            h.name().to_string(),
            h.binary.clone(),
            at.to_string(),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {} hexagrams", hexagrams.len());

    Ok(())
}
