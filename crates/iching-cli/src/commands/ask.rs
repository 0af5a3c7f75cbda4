use colored::Colorize;
use iching_oracle::{EntropyMode, Oracle, OracleConfig};

pub fn run(question: &str, seeded: bool, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog()?;
    let entropy = if seeded {
        EntropyMode::Seeded
    } else {
        EntropyMode::Mixed
    };
    let oracle = Oracle::new(&catalog, OracleConfig::default().with_entropy(entropy));
    let reading = oracle.ask(question).map_err(|e| e.to_string())?;

    if json {
        let content = serde_json::to_string_pretty(&reading)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{content}");
        return Ok(());
    }

    println!("  {} {}", "Question:".bold(), question);
    println!("  {}", format!("({entropy} entropy)").dimmed());
    println!();

    for (i, line) in reading.lines.iter().enumerate().rev() {
        println!(
            "  {}  {}  {} ({})",
            i + 1,
            super::draw_line(line.value(), line.is_changing()),
            line.sum,
            line.kind
        );
    }
    println!();
    println!("  {}", reading.hexagram.to_string().bold());

    match &reading.change {
        Some(change) => {
            let target = catalog.hexagram(change.to).map_err(|e| e.to_string())?;
            let positions: Vec<String> = change
                .changing_positions()
                .iter()
                .map(ToString::to_string)
                .collect();
            println!("  changing lines: {}", positions.join(", "));
            println!("  becomes {}", target.to_string().bold());
        }
        None => println!("  no changing lines"),
    }

    Ok(())
}
