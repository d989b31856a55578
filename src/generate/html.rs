//! HTML preview generator.

use crate::error::Result;
use crate::types::{ColorDef, ColorTable};

use super::naming::display_name;
use super::{Artifact, Options};

const HEAD: &str = r#"<html>
<head>
    <style type="text/css">
        .checkered {
            background-image:
                linear-gradient(45deg, #000 25%, transparent 25%),
                linear-gradient(45deg, transparent 75%, #000 75%),
                linear-gradient(45deg, transparent 75%, #000 75%),
                linear-gradient(45deg, #000 25%, transparent 25%);

            background-size: 30px 30px;

            background-position: 0 0, 0 0, -15px -15px, 15px 15px;
        }

        td {
            padding: 5px;
        }

        .swatch {
            width: 50px;
            height: 50px;
            display: inline-block;
        }
    </style>
</head>
<body>
<table>
    <thead>
    <tr>
        <th>&nbsp;</th>
        <th>Name</th>
        <th>Value</th>
    </tr>
    </thead>
    <tbody>
"#;

const FOOT: &str = r#"    </tbody>
</table>
</body>
</html>
"#;

/// Generate an HTML preview table with one row per color.
///
/// Swatches with partial alpha sit on a checkerboard so the transparency
/// is visible. Reference entries link to the row they point at.
pub fn generate_html(table: &ColorTable, _options: &Options) -> Result<Artifact> {
    let mut html = String::from(HEAD);

    for (name, def) in table.sorted() {
        let resolved = table.resolve(name)?;

        let value = match def {
            ColorDef::Literal(_) => resolved.to_string(),
            ColorDef::Reference(referenced) => format!(
                "<a href=\"#cref/{referenced}\">{}</a><br>{resolved}",
                display_name(referenced)
            ),
        };

        let swatch_class = if resolved.is_opaque() {
            ""
        } else {
            " class=\"checkered\""
        };

        html.push_str(&format!(
            "    <tr>\n\
             \x20       <td{swatch_class} id=\"cref/{name}\">\n\
             \x20           <span style=\"background:{resolved}\" class=\"swatch\">&nbsp;</span>\n\
             \x20       </td>\n\
             \x20       <td>{}</td>\n\
             \x20       <td>{value}</td>\n\
             \x20   </tr>\n",
            display_name(name)
        ));
    }

    html.push_str(FOOT);

    Ok(Artifact::File(html))
}
