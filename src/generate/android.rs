//! Android `colors.xml` generator.

use crate::error::Result;
use crate::types::{ColorDef, ColorTable};

use super::naming::snake_case;
use super::{Artifact, Options};

/// Generate an Android color-resource XML file.
///
/// References are emitted as `@color/` resource references so the
/// indirection survives into the generated file.
pub fn generate_android(table: &ColorTable, options: &Options) -> Result<Artifact> {
    let prefix = options
        .prefix
        .as_deref()
        .map(|p| snake_case(p) + "_")
        .unwrap_or_default();

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n");

    for (name, def) in table.sorted() {
        let resolved = table.resolve(name)?;

        let value = match def {
            ColorDef::Literal(_) => resolved.to_string(),
            ColorDef::Reference(referenced) => {
                format!("@color/{prefix}{}", snake_case(referenced))
            }
        };

        xml.push_str(&format!(
            "    <color name=\"{prefix}{}\">{value}</color>\n",
            snake_case(name)
        ));
    }

    xml.push_str("</resources>\n");

    Ok(Artifact::File(xml))
}
