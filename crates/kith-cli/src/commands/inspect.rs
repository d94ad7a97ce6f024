//! Inspect command - decode a blob file and list every person in it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kith_codec::decode;

use crate::style::{print_heading, print_labeled};

pub fn run(path: &Path) -> Result<()> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let decoded = decode(&bytes)
        .with_context(|| format!("{} does not hold a friendship blob", path.display()))?;

    print_heading(&format!(
        "Blob rooted at {}",
        decoded.graph[decoded.root].name()
    ));
    print_labeled("people", &decoded.graph.len().to_string());
    for id in decoded.graph.ids() {
        let person = &decoded.graph[id];
        let friends: Vec<&str> = person
            .friends()
            .iter()
            .map(|&friend| decoded.graph[friend].name())
            .collect();
        let marker = if id == decoded.root { " (root)" } else { "" };
        print_labeled(
            &format!("{}{marker}", person.name()),
            &format!("born {}, friends {friends:?}", person.born_in().date()),
        );
    }

    Ok(())
}
