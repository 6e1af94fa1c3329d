//! `jsonview` renders a JSON UI document as markup.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use jsonview_kit::prelude::*;

mod document;

use document::Document;

#[derive(Parser, Debug)]
#[command(name = "jsonview")]
#[command(about = "Render a JSON UI description as markup", version)]
struct Cli {
    /// Document file: a node sequence, or an object with `content`,
    /// `components`, `globals` and `config`
    file: PathBuf,

    /// Tag used when nothing else resolves
    #[arg(long)]
    default_element: Option<String>,

    /// Deepest child sequence to generate
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the slot partition of the root sequence
    #[arg(long)]
    slots: bool,

    /// List the locally registered components and exit
    #[arg(long)]
    components: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut document = Document::load(&cli.file)?;
    if let Some(tag) = cli.default_element {
        document.config.default_element = tag;
    }
    if let Some(depth) = cli.max_depth {
        document.config.max_depth = Some(depth);
    }
    log::debug!(
        "[JsonView] Loaded {} ({} local, {} global components)",
        cli.file.display(),
        document.components.len(),
        document.globals.len()
    );

    let generator =
        TreeGenerator::with_config(document.host(), document.registry(), document.config.clone());

    if cli.components {
        for name in generator.registered_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let view = JsonView::new(document.content);
    let children = if cli.slots {
        generator.generate(view.content(), true)
    } else {
        view.render(&generator)
    };
    let Some(children) = children else {
        bail!("document content is not a node sequence");
    };

    match children {
        Children::Nodes(nodes) => println!("{}", render_markup(&nodes)),
        Children::Slots(slots) => {
            for name in slots.names() {
                let content = slots.render(name).unwrap_or_default();
                println!("[{name}] {}", render_markup(&content));
            }
        }
    }

    Ok(())
}
