//! Sample command - writes the bundled two-person friendship blob.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use kith_codec::encode;
use kith_graph::{PersonGraph, PersonId};

use crate::style::print_success;

/// Builds the Ivan and Petr pair the walkthroughs start from.
pub(crate) fn sample_graph() -> Result<(PersonGraph, PersonId)> {
    let mut graph = PersonGraph::new();
    let ivan = graph.add_person("Ivan", birthday(2020, 4, 12)?);
    let petr = graph.add_person("Petr", birthday(2021, 9, 27)?);
    graph.befriend(ivan, petr)?;
    Ok((graph, ivan))
}

fn birthday(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("{year}-{month:02}-{day:02} is not a calendar date"))?;
    Ok(date.into())
}

pub fn run(out: Option<&Path>) -> Result<()> {
    let (graph, root) = sample_graph()?;
    let bytes = encode(&graph, root)?;

    match out {
        Some(path) => {
            fs::write(path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            print_success(&format!("wrote sample blob to {}", path.display()));
        }
        None => {
            let text = String::from_utf8(bytes).context("encoded blobs are UTF-8 JSON")?;
            println!("{text}");
        }
    }

    Ok(())
}
