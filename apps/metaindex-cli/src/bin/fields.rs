use std::env;

use metaindex_core::config::Config;
use metaindex_docs::EntityKind;

// Print the field boosts the query layer should use for an entity type.
fn main() -> anyhow::Result<()> {
    let settings = Config::load()?.settings()?;
    metaindex_cli::init_tracing(&settings.logging.filter);
    let Some(tag) = env::args().nth(1) else {
        let tags: Vec<&str> = EntityKind::ALL.iter().map(|k| k.type_tag()).collect();
        eprintln!("Usage: metaindex-fields <{}>", tags.join("|"));
        std::process::exit(1);
    };
    let kind: EntityKind = tag.parse()?;
    println!("{}", serde_json::to_string_pretty(&kind.fields())?);
    Ok(())
}
