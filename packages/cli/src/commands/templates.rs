use anyhow::Result;
use clap::Args;
use colored::Colorize;
use folio_workspace::{InMemoryBuilder, TemplateFilter};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Only list templates in this category ("all" lists everything)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Search template names and descriptions
    #[arg(short, long)]
    pub query: Option<String>,
}

pub fn templates(args: TemplatesArgs) -> Result<()> {
    let builder = InMemoryBuilder::with_fixtures()?;
    let filter = TemplateFilter {
        category: args.category,
        query: args.query,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let templates = runtime.block_on(builder.templates(&filter))?;

    if templates.is_empty() {
        println!("{}", "No templates found".yellow());
        return Ok(());
    }

    for template in &templates {
        println!(
            "{:>3}  {}  {}",
            template.id,
            template.name.bright_white().bold(),
            format!("[{}]", template.category).cyan()
        );
        println!("     {} ({} blocks)", template.description, template.blocks);
    }
    println!();
    println!("{} templates", templates.len().to_string().green());

    Ok(())
}
