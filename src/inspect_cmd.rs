use anyhow::{Context, Result};

use argus_record::{FieldKind, FileSource, RecordSource};

use crate::cli::InspectArgs;

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Continuous => "continuous",
        FieldKind::DiscreteFixed => "discrete",
        FieldKind::DiscreteDataDriven => "discrete (data-driven)",
        FieldKind::Ignore => "ignored",
    }
}

/// Print a record file's header and field descriptors.
pub fn run(args: InspectArgs) -> Result<()> {
    let source = FileSource::open(&args.input)
        .with_context(|| format!("failed to open record file: {}", args.input.display()))?;
    let schema = source.schema();

    println!("file: {}", args.input.display());
    println!("records: {}", source.len());
    println!(
        "fields: {} ({} real, {} discrete)",
        schema.fields().len(),
        schema.real_count(),
        schema.discrete_count()
    );
    for field in schema.fields() {
        let vocab = match field.values() {
            Some(values) => format!(", {} categories", values.len()),
            None => String::new(),
        };
        println!(
            "  {:<24} {:<22} weight {}{}",
            field.name(),
            kind_label(field.kind()),
            field.weight(),
            vocab
        );
    }
    Ok(())
}
