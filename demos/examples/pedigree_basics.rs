// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalize a mixed-format document and build the ancestor tree.
//!
//! Run:
//! - `cargo run -p pedigree_demos --example pedigree_basics`

use pedigree_records::normalize::normalize;
use pedigree_tree::PersonMap;
use serde_json::json;

fn main() {
    // Labels, snake_case and camelCase keys can be mixed freely.
    let document = json!({
        "people": [
            { "Sosa": 1, "Nom": "Jeanne Martin", "Date de naissance": "1901" },
            { "id": "2", "name": "Louis Martin", "birth_place": "Lyon" },
            { "ID": 3.0, "name": "Marie Roux", "deathDate": "1950" },
            { "id": 6, "name": "Paul Roux", "generation": 5 },
            { "id": 0, "name": "not a valid identifier" },
            "not a record"
        ]
    });

    let people = normalize(&document);
    println!("kept {} of 6 items", people.len());

    let store = PersonMap::from_people(people);
    println!("root: {:?}", store.root_id());

    let tree = match store.build_tree() {
        Ok(tree) => tree,
        Err(err) => {
            println!("no tree: {err}");
            return;
        }
    };
    for node in tree.iter() {
        println!(
            "{:>3}  generation {}  {}",
            node.id(),
            node.generation(),
            node.person().name
        );
    }
    println!("{} nodes, {} levels", tree.node_count(), tree.depth());
}
