use anyhow::{Context, Result, bail};
use blockpress_config::Config;
use blockpress_engine::{ContentDocument, DocumentRenderer, HtmlRenderer, io};
use relative_path::RelativePath;
use std::{env, fs, path::PathBuf, process};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <inspect|render|migrate> <record-file>", args[0]);
        eprintln!();
        eprintln!("  inspect  list the blocks behind a record's content field");
        eprintln!("  render   emit the public HTML rendering to stdout");
        eprintln!("  migrate  rewrite the record in canonical block form");
        process::exit(1);
    }

    if let Err(err) = run(&args[1], &args[2]) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(command: &str, record: &str) -> Result<()> {
    let config = Config::load().context("failed to load config file")?;
    let path = resolve_record_path(record, config.as_ref())?;
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read record file '{}'", path.display()))?;
    let document = ContentDocument::from_stored(&raw);

    match command {
        "inspect" => inspect(&document),
        "render" => {
            let renderer = match config.as_ref().and_then(|c| c.embed_host.as_deref()) {
                Some(host) => HtmlRenderer::with_embed_host(host),
                None => HtmlRenderer::new(),
            };
            print!("{}", renderer.render(&document));
        }
        "migrate" => {
            let canonical = document.serialize();
            if raw == canonical {
                println!("{} is already in canonical block form", path.display());
            } else {
                fs::write(&path, &canonical)
                    .with_context(|| format!("failed to write '{}'", path.display()))?;
                println!(
                    "Migrated {} ({} block{})",
                    path.display(),
                    document.len(),
                    if document.len() == 1 { "" } else { "s" }
                );
            }
        }
        other => bail!("unknown command '{other}' (expected inspect, render or migrate)"),
    }

    Ok(())
}

/// A record argument is either a path on disk or a path relative to the
/// configured content directory.
fn resolve_record_path(record: &str, config: Option<&Config>) -> Result<PathBuf> {
    let direct = PathBuf::from(record);
    if direct.exists() {
        return Ok(direct);
    }
    if let Some(config) = config {
        io::validate_content_dir(&config.content_path)
            .with_context(|| format!("invalid content directory '{}'", config.content_path.display()))?;
        let candidate = RelativePath::new(record).to_path(&config.content_path);
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    bail!("record file '{record}' not found");
}

fn inspect(document: &ContentDocument) {
    if document.is_empty() {
        println!("(no content)");
        return;
    }
    for (index, block) in document.blocks().iter().enumerate() {
        println!(
            "{:>3}. {:<9} [{}] {}",
            index,
            block.kind.block_type(),
            block.id,
            preview(block.kind.value())
        );
    }
}

fn preview(value: &str) -> String {
    let mut shortened: String = value.chars().take(48).collect();
    if shortened.len() < value.len() {
        shortened.push('…');
    }
    shortened.replace('\n', " ")
}
