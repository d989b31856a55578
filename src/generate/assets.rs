//! Asset-catalog bundle generator.
//!
//! Produces a directory tree of `Contents.json` files: one catalog root,
//! one namespace-providing group per path segment, and one `.colorset`
//! leaf per color.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::types::{Color, ColorTable};

use super::naming::{capitalize_first, display_name};
use super::{Artifact, Options};

#[derive(Serialize)]
struct Info {
    author: &'static str,
    version: u32,
}

const INFO: Info = Info {
    author: "xcode",
    version: 1,
};

#[derive(Serialize)]
struct CatalogContents {
    info: Info,
}

#[derive(Serialize)]
struct GroupContents {
    info: Info,
    properties: GroupProperties,
}

#[derive(Serialize)]
struct GroupProperties {
    #[serde(rename = "provides-namespace")]
    provides_namespace: bool,
}

#[derive(Serialize)]
struct ColorSetContents {
    colors: [ColorEntry; 1],
    info: Info,
}

#[derive(Serialize)]
struct ColorEntry {
    color: ColorValue,
    idiom: &'static str,
}

#[derive(Serialize)]
struct ColorValue {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: Components,
}

#[derive(Serialize)]
struct Components {
    alpha: String,
    blue: String,
    green: String,
    red: String,
}

/// Generate an asset-catalog directory tree.
pub fn generate_assets(table: &ColorTable, options: &Options) -> Result<Artifact> {
    let mut colors = BTreeMap::new();

    for (name, _) in table.sorted() {
        let resolved = table.resolve(name)?;

        let mut path: Vec<String> = display_name(name)
            .split('/')
            .map(capitalize_first)
            .collect();
        let leaf = format!("{}.colorset", path.pop().unwrap_or_default());

        insert_colorset(&mut colors, &path, leaf, colorset_json(resolved));
    }

    let mut root = BTreeMap::new();
    root.insert("Contents.json".to_string(), Artifact::File(catalog_json()));

    // With a prefix, everything nests inside one extra top-level group.
    match options.prefix.as_deref() {
        Some(prefix) => {
            let mut group = new_group_tree();
            group.append(&mut colors);
            root.insert(display_name(prefix), Artifact::Directory(group));
        }
        None => root.append(&mut colors),
    }

    Ok(Artifact::Directory(root))
}

// Walk the group path, creating namespace groups lazily so names sharing
// a prefix land in the same directory.
fn insert_colorset(
    tree: &mut BTreeMap<String, Artifact>,
    path: &[String],
    leaf: String,
    json: String,
) {
    match path.split_first() {
        None => {
            let mut set = BTreeMap::new();
            set.insert("Contents.json".to_string(), Artifact::File(json));
            tree.insert(unique_leaf_name(tree, leaf), Artifact::Directory(set));
        }
        Some((segment, rest)) => {
            let entry = tree
                .entry(segment.clone())
                .or_insert_with(|| Artifact::Directory(new_group_tree()));
            if let Artifact::Directory(children) = entry {
                insert_colorset(children, rest, leaf, json);
            }
        }
    }
}

// Distinct names can collide after capitalization ("accent"/"Accent"
// both map to Accent.colorset, since table names are case-sensitive).
// Number later arrivals instead of overwriting the earlier colorset.
fn unique_leaf_name(tree: &BTreeMap<String, Artifact>, leaf: String) -> String {
    if !tree.contains_key(&leaf) {
        return leaf;
    }

    let stem = leaf.strip_suffix(".colorset").unwrap_or(&leaf);
    let mut counter = 2;
    loop {
        let candidate = format!("{stem} {counter}.colorset");
        if !tree.contains_key(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

fn new_group_tree() -> BTreeMap<String, Artifact> {
    let mut tree = BTreeMap::new();
    tree.insert("Contents.json".to_string(), Artifact::File(group_json()));
    tree
}

fn catalog_json() -> String {
    to_pretty(&CatalogContents { info: INFO })
}

fn group_json() -> String {
    to_pretty(&GroupContents {
        info: INFO,
        properties: GroupProperties {
            provides_namespace: true,
        },
    })
}

fn colorset_json(color: Color) -> String {
    to_pretty(&ColorSetContents {
        colors: [ColorEntry {
            color: ColorValue {
                color_space: "srgb",
                components: Components {
                    alpha: format!("{:.3}", f64::from(color.a) / 255.0),
                    blue: format!("0x{:02X}", color.b),
                    green: format!("0x{:02X}", color.g),
                    red: format!("0x{:02X}", color.r),
                },
            },
            idiom: "universal",
        }],
        info: INFO,
    })
}

// The structures above contain no maps or fallible values; serialization
// cannot fail.
fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
