//! Handler for `syncwave add`: format-preserving manifest edits.

use miette::Result;
use toml_edit::{Array, DocumentMut, Item, Table, Value};

use syncwave_core::MANIFEST_FILE;
use syncwave_util::errors::SyncwaveError;
use syncwave_util::progress;

/// Add (or replace) an `[emitter.<id>]` declaration in Syncwave.toml.
pub fn exec(
    id: &str,
    topics: &[String],
    syncs_after: &[String],
    triggered_by: &[String],
) -> Result<()> {
    let root = super::project_root()?;
    let manifest_path = root.join(MANIFEST_FILE);

    let content =
        std::fs::read_to_string(&manifest_path).map_err(|e| SyncwaveError::Manifest {
            message: format!("Failed to read {}: {e}", manifest_path.display()),
        })?;

    let mut doc: DocumentMut = content
        .parse()
        .map_err(|e| SyncwaveError::Manifest {
            message: format!("Failed to parse {MANIFEST_FILE}: {e}"),
        })?;

    if !doc.contains_key("emitter") {
        doc.insert("emitter", Item::Table(implicit_table()));
    }

    let mut entry = Table::new();
    if !topics.is_empty() {
        entry.insert("topics", Item::Value(string_array(topics)));
    }
    if !syncs_after.is_empty() {
        entry.insert("syncs-after", Item::Value(string_array(syncs_after)));
    }
    if !triggered_by.is_empty() {
        entry.insert("triggered-by", Item::Value(string_array(triggered_by)));
    }
    doc["emitter"][id] = Item::Table(entry);

    std::fs::write(&manifest_path, doc.to_string()).map_err(SyncwaveError::Io)?;
    progress::status("Added", &format!("emitter '{id}'"));
    println!("added emitter '{id}'");
    Ok(())
}

fn implicit_table() -> Table {
    let mut table = Table::new();
    table.set_implicit(true);
    table
}

fn string_array(values: &[String]) -> Value {
    let mut array = Array::new();
    for value in values {
        array.push(value.as_str());
    }
    Value::Array(array)
}
