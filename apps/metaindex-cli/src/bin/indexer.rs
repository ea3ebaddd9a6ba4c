use std::collections::BTreeMap;
use std::io::Write;
use std::{env, path::PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use metaindex_cli::{build_file, entity_kind_for, init_tracing, list_json_files};
use metaindex_core::config::{resolve_with_base, Config};
use metaindex_core::traits::IndexSink;
use metaindex_core::IndexDocument;
use metaindex_docs::EntityKind;
use metaindex_text::TantivyIndexer;

const USAGE: &str = "Usage: metaindex-indexer [DIR] [--type TAG] [--index PATH] [--recreate] [--dry-run]";

struct Args {
    data_dir: Option<PathBuf>,
    index_dir: Option<PathBuf>,
    kind: Option<EntityKind>,
    recreate: bool,
    dry_run: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let cwd = env::current_dir()?;
    let args: Vec<String> = env::args().skip(1).collect();
    let mut parsed = Args { data_dir: None, index_dir: None, kind: None, recreate: false, dry_run: false };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--type" | "-t" => {
                let tag = args.get(i + 1).ok_or_else(|| anyhow::anyhow!("--type requires an entity type\n{}", USAGE))?;
                parsed.kind = Some(tag.parse()?);
                i += 1;
            }
            "--index" => {
                let path = args.get(i + 1).ok_or_else(|| anyhow::anyhow!("--index requires a path\n{}", USAGE))?;
                parsed.index_dir = Some(resolve_with_base(&cwd, path));
                i += 1;
            }
            "--recreate" => parsed.recreate = true,
            "--dry-run" | "-n" => parsed.dry_run = true,
            "--help" | "-h" => { eprintln!("{}", USAGE); std::process::exit(0); }
            s if s.starts_with('-') => anyhow::bail!("Unknown flag: {}\n{}", s, USAGE),
            s => parsed.data_dir = Some(resolve_with_base(&cwd, s)),
        }
        i += 1;
    }
    Ok(parsed)
}

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let settings = config.settings()?;
    init_tracing(&settings.logging.filter);
    let args = parse_args()?;

    let data_dir = args.data_dir.unwrap_or_else(|| settings.entities_dir());
    let files = list_json_files(&data_dir);
    info!(dir = %data_dir.display(), files = files.len(), "scanning entity files");

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")?.progress_chars("#>-"));
    let mut by_kind: BTreeMap<&'static str, Vec<IndexDocument>> = BTreeMap::new();
    let mut failed = 0usize;
    for path in &files {
        pb.set_message(path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default());
        let built = entity_kind_for(path, args.kind).and_then(|kind| Ok((kind, build_file(kind, path)?)));
        match built {
            Ok((kind, docs)) => by_kind.entry(kind.type_tag()).or_default().extend(docs),
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(path = %path.display(), error = %reason, "skipping entity file");
                failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let built: usize = by_kind.values().map(Vec::len).sum();
    if args.dry_run {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for doc in by_kind.values().flatten() { writeln!(out, "{}", serde_json::to_string(doc)?)?; }
    } else {
        let index_dir = args.index_dir.unwrap_or_else(|| settings.tantivy_dir());
        let indexer = if args.recreate {
            TantivyIndexer::create(&index_dir, settings.index.writer_heap_bytes)?
        } else {
            TantivyIndexer::open_or_create(&index_dir, settings.index.writer_heap_bytes)?
        };
        for (entity_type, docs) in &by_kind { indexer.upsert_all(entity_type, docs)?; }
        info!(index = %index_dir.display(), total = indexer.num_docs()?, "index updated");
    }
    info!(files = files.len(), documents = built, failed, "indexing finished");
    Ok(())
}
