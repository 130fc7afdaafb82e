// ABOUTME: CLI that renders a generic feed (JSON) as a podcast RSS 2.0 document.
// ABOUTME: Reads from a file or stdin and writes XML to stdout or a file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use podfeed_feed::{to_podcast_xml, Feed, RenderOptions};
use tracing::debug;

/// Render a generic feed as podcast RSS.
#[derive(Parser, Debug)]
#[command(name = "podfeed")]
#[command(about = "Render a JSON feed as podcast RSS 2.0 XML", long_about = None)]
struct Args {
    /// JSON feed file. Use "-" or omit to read from stdin.
    input: Option<String>,

    /// Write XML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output without indentation.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Spaces per indentation level.
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Skip the <?xml ...?> declaration.
    #[arg(long, default_value_t = false)]
    no_declaration: bool,
}

impl Args {
    fn render_options(&self) -> RenderOptions {
        let opts = RenderOptions::new()
            .indent(self.indent)
            .xml_declaration(!self.no_declaration);
        if self.compact {
            opts.compact()
        } else {
            opts
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let target = args.input.as_deref().unwrap_or("-");

    let bytes = load_bytes(target)?;
    let feed: Feed = serde_json::from_slice(&bytes)
        .with_context(|| format!("invalid feed JSON in {}", display_name(target)))?;
    debug!(items = feed.items.len(), "loaded feed");

    let xml = to_podcast_xml(&feed, &args.render_options())?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{xml}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), "wrote podcast feed");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{xml}")?;
        }
    }

    Ok(())
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    fs::read(&path).with_context(|| format!("failed to read {}", target))
}

fn display_name(target: &str) -> &str {
    if target == "-" {
        "stdin"
    } else {
        target
    }
}
