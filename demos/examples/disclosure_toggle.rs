// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load a deep pedigree, then open and close branches.
//!
//! Run:
//! - `cargo run -p pedigree_demos --example disclosure_toggle`

use pedigree_chart::render::render_text;
use pedigree_chart::{ChartConfig, LoadState, Loader, StaticSource};
use serde_json::{Value, json};

#[tokio::main]
async fn main() {
    // Left-most line of six generations plus both maternal grandparents.
    let people: Vec<Value> = [1_u64, 2, 3, 4, 6, 7, 8, 16, 32]
        .iter()
        .map(|&id| json!({ "id": id, "name": format!("Ancestor {id}") }))
        .collect();
    let config = ChartConfig::default();
    let source =
        StaticSource::new().with_document(config.source.clone(), Value::from(people).to_string());

    let mut loader = Loader::new(source, config);
    if let LoadState::Error(message) | LoadState::Empty(message) = loader.load().await {
        println!("load failed: {message}");
        return;
    }

    let show = |label: &str, loader: &Loader<StaticSource>| {
        println!("-- {label}");
        if let Some(chart) = loader.chart() {
            print!("{}", render_text(&chart.tree, loader.disclosure()));
        }
    };

    show("default horizon", &loader);

    // 8 sits on the horizon with a hidden parent; toggling opens it.
    println!("toggle 8 -> {:?}", loader.toggle(8));
    show("8 expanded", &loader);

    // 3 is showing its parents; toggling closes it.
    println!("toggle 3 -> {:?}", loader.toggle(3));
    show("3 collapsed", &loader);

    // 64 is not in the pedigree, so nothing is written.
    println!("toggle 64 -> {:?}", loader.toggle(64));
}
