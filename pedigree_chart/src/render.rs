// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text presentation of the visible rows.

use std::collections::HashMap;

use pedigree_disclosure::state::DisclosureState;
use pedigree_disclosure::types::VisibleRow;
use pedigree_records::Person;
use pedigree_tree::TreeNode;

const INDENT: &str = "  ";

/// Affordance shown before a row: `[-]` when its parents are shown, `[+]` when they
/// exist but are hidden, blank for a leaf.
pub fn marker(row: &VisibleRow) -> &'static str {
    if row.is_expanded() {
        "[-]"
    } else if row.is_expandable() {
        "[+]"
    } else {
        "   "
    }
}

/// Birth and death summary, e.g. `° 1850 Lyon, † 1920`. Empty when nothing is known.
pub fn life_summary(person: &Person) -> String {
    let part = |symbol: &str, date: &str, place: &str| {
        let text = [date, place]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!text.is_empty()).then(|| format!("{symbol} {text}"))
    };
    [
        part("°", &person.birth_date, &person.birth_place),
        part("†", &person.death_date, &person.death_place),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}

/// Render one line per visible row, indented by level.
pub fn render_text(tree: &TreeNode, state: &DisclosureState) -> String {
    let nodes: HashMap<u64, &TreeNode> = tree.iter().map(|n| (n.id(), n)).collect();
    let mut out = String::new();
    for row in state.visible_rows(tree) {
        let Some(node) = nodes.get(&row.id) else {
            continue;
        };
        for _ in 0..row.level {
            out.push_str(INDENT);
        }
        out.push_str(&row_label(&row, node.person()));
        out.push('\n');
    }
    out
}

/// Text of one row without indentation: marker, identifier, name and life summary.
pub fn row_label(row: &VisibleRow, person: &Person) -> String {
    let mut label = format!("{} {}", marker(row), row.id);
    if !person.name.is_empty() {
        label.push(' ');
        label.push_str(&person.name);
    }
    let summary = life_summary(person);
    if !summary.is_empty() {
        label.push_str(" (");
        label.push_str(&summary);
        label.push(')');
    }
    label
}
