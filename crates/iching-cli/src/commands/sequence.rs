pub fn run(name: &str) -> Result<(), String> {
    let catalog = super::load_catalog()?;
    let trigrams = catalog.trigram_sequence(name).map_err(|e| e.to_string())?;

    println!("  {name}");
    println!();
    for (i, t) in trigrams.iter().enumerate() {
        println!("  {}. {t}  {}", i + 1, t.images.join(", "));
    }

    Ok(())
}
