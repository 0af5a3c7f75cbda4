use std::path::Path;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog()?;
    let graph = catalog.as_graph();

    let content =
        serde_json::to_string_pretty(graph).map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote relationship graph");
        println!(
            "  Exported {} nodes and {} edges to {}",
            graph.nodes.len(),
            graph.edges.len(),
            path.display()
        );
    } else {
        println!("{content}");
    }

    Ok(())
}
