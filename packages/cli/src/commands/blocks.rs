use anyhow::Result;
use colored::Colorize;
use folio_editor::BlockRegistry;

/// Print the block palette
pub fn blocks() -> Result<()> {
    for entry in BlockRegistry::builtin().palette() {
        println!(
            "  {:<12} {}  {}",
            entry.kind.as_str().cyan(),
            entry.title.bright_white(),
            entry.description.dimmed()
        );
    }
    Ok(())
}
