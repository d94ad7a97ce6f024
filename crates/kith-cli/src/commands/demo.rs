//! Demo command - guided walkthroughs of the library crates.
//!
//! Each walkthrough builds a small value, applies the operations the crate
//! is about, and prints every intermediate step.

use anyhow::{Context, Result};
use kith_codec::{decode, encode};
use kith_collections::{Queue, Stack};
use kith_matrix::Matrix;

use crate::commands::sample;
use crate::style::{print_heading, print_labeled, print_spacer};

/// Shows stack and queue versions sharing structure instead of copying.
pub fn collections() {
    print_heading("Persistent stack");
    let empty: Stack<i32> = Stack::new();
    let one = empty.push(1);
    let three = one.push(2).push(3);
    print_labeled("empty", &format!("{empty:?}"));
    print_labeled("after push 1", &format!("{one:?}"));
    print_labeled("after push 2, 3", &format!("{three:?}"));
    if let Some(rest) = three.pop() {
        print_labeled("after pop", &format!("{rest:?}"));
        print_labeled("the taller version", &format!("{three:?}"));
    }

    print_spacer();
    print_heading("Persistent queue");
    let queue = Queue::new()
        .enqueue("first")
        .enqueue("second")
        .enqueue("third");
    print_labeled("queue", &format!("{queue:?}"));
    print_labeled("head", &format!("{:?}", queue.peek()));
    if let Some(rest) = queue.dequeue() {
        print_labeled("after dequeue", &format!("{rest:?}"));
        print_labeled("the longer version", &format!("{queue:?}"));
    }
}

/// Adds, multiplies, and transposes two small matrices, then takes
/// determinants.
pub fn matrix() -> Result<()> {
    let left = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 3.0]])?;
    let right = Matrix::from_rows(vec![vec![2.0, 5.0], vec![7.0, 9.0]])?;

    print_heading("Left");
    println!("{left}");
    print_heading("Right");
    println!("{right}");

    print_spacer();
    print_heading("Sum");
    println!("{}", left.checked_add(&right)?);
    print_heading("Product");
    let product = left.checked_mul(&right)?;
    println!("{product}");
    print_heading("Product transposed");
    println!("{}", product.transpose());

    print_spacer();
    print_labeled("det(left)", &format!("{}", left.determinant()?));
    print_labeled("det(right)", &format!("{}", right.determinant()?));
    Ok(())
}

/// Round-trips the two-person cycle through JSON and prints both sides.
pub fn graph() -> Result<()> {
    let (graph, root) = sample::sample_graph()?;
    let bytes = encode(&graph, root)?;

    print_heading("Encoded blob");
    println!(
        "{}",
        std::str::from_utf8(&bytes).context("encoded blobs are UTF-8 JSON")?
    );

    let decoded = decode(&bytes)?;
    print_spacer();
    print_heading("Decoded graph");
    for id in decoded.graph.ids() {
        let person = &decoded.graph[id];
        let friends: Vec<&str> = person
            .friends()
            .iter()
            .map(|&friend| decoded.graph[friend].name())
            .collect();
        print_labeled(
            person.name(),
            &format!("born {}, friends {friends:?}", person.born_in().date()),
        );
    }

    let matches = graph.isomorphic(root, &decoded.graph, decoded.root)?;
    print_labeled("isomorphic to the original", &format!("{matches}"));
    Ok(())
}
