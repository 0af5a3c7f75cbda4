use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use iching_core::{Catalog, Change, SymbolKind};

pub fn run(
    number: &str,
    list_changes: bool,
    change_to: Option<&str>,
    flip: Option<&str>,
) -> Result<(), String> {
    let catalog = super::load_catalog()?;
    let number = SymbolKind::Hexagram
        .parse_number(number)
        .map_err(|e| e.to_string())?;
    let hexagram = catalog.hexagram(number).map_err(|e| e.to_string())?;
    let top = catalog.top_trigram(hexagram).map_err(|e| e.to_string())?;
    let bottom = catalog.bottom_trigram(hexagram).map_err(|e| e.to_string())?;

    println!(
        "  {} {} {}",
        hexagram.character,
        hexagram.names.join(" / ").bold(),
        format!("[{}]", hexagram.chinese_name).dimmed()
    );
    println!();
    println!("  number: {}", hexagram.number);
    println!("  binary: {}", hexagram.binary);
    println!("  top:    {top}");
    println!("  bottom: {bottom}");
    println!();
    super::print_lines(&hexagram.lines);

    if let Some(target) = change_to {
        let target = SymbolKind::Hexagram
            .parse_number(target)
            .map_err(|e| e.to_string())?;
        let change = catalog
            .change_to(hexagram, target)
            .map_err(|e| e.to_string())?;
        println!();
        print_change(&catalog, change.as_ref())?;
    }

    if let Some(flip) = flip {
        // Non-digits become an out-of-range line value and are rejected below.
        let flips: Vec<u8> = flip
            .chars()
            .map(|c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()).unwrap_or(u8::MAX))
            .collect();
        let change = catalog
            .change_lines(hexagram, &flips)
            .map_err(|e| e.to_string())?;
        println!();
        print_change(&catalog, change.as_ref())?;
    }

    if list_changes {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["To", "", "Name", "Binary", "Changing lines"]);
        for change in catalog.changes(hexagram) {
            let target = catalog.hexagram(change.to).map_err(|e| e.to_string())?;
            let positions: Vec<String> = change
                .changing_positions()
                .iter()
                .map(ToString::to_string)
                .collect();
            table.add_row(vec![
                target.number.to_string(),
                target.character.clone(),
                target.name().to_string(),
                change.binary.clone(),
                positions.join(", "),
            ]);
        }
        println!();
        println!("{table}");
    }

    Ok(())
}

fn print_change(catalog: &Catalog, change: Option<&Change>) -> Result<(), String> {
    let Some(change) = change else {
        println!("  no change");
        return Ok(());
    };
    let target = catalog.hexagram(change.to).map_err(|e| e.to_string())?;
    let positions: Vec<String> = change
        .changing_positions()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  change: {change}");
    println!("  lines:  {}", positions.join(", "));
    println!("  becomes {}", target.to_string().bold());
    Ok(())
}
