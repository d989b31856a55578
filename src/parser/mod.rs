//! Parser for the color-list dialect.
//!
//! The language is line-oriented: each line binds a name to either a color
//! literal or a reference to another name.
//!
//! ```text
//! background      #fff
//! textPrimary     rgb(32, 32, 32)
//! overlay         rgba(0, 0, 0, 50%)
//! separator       white(128)
//! warning         hsv(40°, 255, 255)
//! button/accent   @textPrimary
//! ```
//!
//! Literal forms: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`,
//! `rgba()`, `white()` with one or two arguments, `hsv()` and `hsva()`.
//! Components accept plain bytes or `%` percentages; hue accepts `%`,
//! `°`/`deg`, or a plain byte scaled onto the color wheel.

mod cursor;

use crate::error::{Error, Result};
use crate::types::{Color, ColorDef, ColorTable};

use cursor::Cursor;

/// Parse a color list into a table.
///
/// This is the sole ingestion entry point for the textual dialect. The
/// whole parse fails on the first malformed line or duplicate name.
pub fn parse(input: &str) -> Result<ColorTable> {
    let mut parser = Parser::new(input);
    parser.color_list()
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    fn color_list(&mut self) -> Result<ColorTable> {
        let mut table = ColorTable::new();

        while !self.cursor.at_end() {
            let (name, def) = self.color_line().ok_or(Error::Syntax {
                line: self.cursor.line(),
            })?;
            table.insert(name, def)?;
        }

        Ok(table)
    }

    fn color_line(&mut self) -> Option<(String, ColorDef)> {
        let name = self.name()?;
        let def = self.color_def()?;
        if !self.end_of_line() {
            return None;
        }
        Some((name, def))
    }

    fn name(&mut self) -> Option<String> {
        self.cursor.skip_hspace();
        let name = self
            .cursor
            .take_while(|c| c.is_alphanumeric() || c == '_' || c == '/');
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    fn color_def(&mut self) -> Option<ColorDef> {
        if let Some(color) = self.color() {
            return Some(ColorDef::Literal(color));
        }
        if let Some(name) = self.reference() {
            return Some(ColorDef::Reference(name));
        }
        None
    }

    fn reference(&mut self) -> Option<String> {
        if !self.cursor.tag("@") {
            return None;
        }
        self.name()
    }

    // Ordered try-list. Each alternative commits once its leading token
    // matches; a later failure then fails the whole line.
    fn color(&mut self) -> Option<Color> {
        if self.cursor.tag("#") {
            return self.hex_color();
        }
        if self.cursor.tag("rgba") {
            let components = self.argument_list(4, 4)?;
            return Color::from_bytes(&components);
        }
        if self.cursor.tag("rgb") {
            let components = self.argument_list(3, 3)?;
            return Color::from_bytes(&components);
        }
        if self.cursor.tag("white") {
            let arguments = self.argument_list(1, 2)?;
            return Some(Color::white(
                arguments[0],
                arguments.get(1).copied().unwrap_or(255),
            ));
        }
        if self.cursor.tag("hsva") {
            return self.hsv(true);
        }
        if self.cursor.tag("hsv") {
            return self.hsv(false);
        }
        None
    }

    fn hex_color(&mut self) -> Option<Color> {
        let digits = self.cursor.take_while(|c| c.is_ascii_hexdigit());

        let bytes: Vec<u8> = match digits.len() {
            // Shorthand: each nibble expands to a full byte.
            3 | 4 => digits
                .chars()
                .map(|c| {
                    let nibble = c.to_digit(16).unwrap_or(0) as u8;
                    nibble << 4 | nibble
                })
                .collect(),
            6 | 8 => digits
                .as_bytes()
                .chunks(2)
                .map(|pair| {
                    let pair = std::str::from_utf8(pair).ok()?;
                    u8::from_str_radix(pair, 16).ok()
                })
                .collect::<Option<Vec<u8>>>()?,
            _ => return None,
        };

        Color::from_bytes(&bytes)
    }

    fn hsv(&mut self, with_alpha: bool) -> Option<Color> {
        if !self.cursor.tag("(") {
            return None;
        }
        let hue = self.degrees()?;
        if !self.cursor.tag(",") {
            return None;
        }
        let saturation = self.component()?;
        if !self.cursor.tag(",") {
            return None;
        }
        let value = self.component()?;

        let alpha = if with_alpha {
            if !self.cursor.tag(",") {
                return None;
            }
            self.component()?
        } else {
            255
        };

        if !self.cursor.tag(")") {
            return None;
        }

        Some(Color::from_hsv(hue, saturation, value, alpha))
    }

    fn argument_list(&mut self, min: usize, max: usize) -> Option<Vec<u8>> {
        if !self.cursor.tag("(") {
            return None;
        }
        let arguments = self.comma_separated()?;
        if !self.cursor.tag(")") {
            return None;
        }
        if arguments.len() < min || arguments.len() > max {
            return None;
        }
        Some(arguments)
    }

    fn comma_separated(&mut self) -> Option<Vec<u8>> {
        let mut components = vec![self.component()?];
        while self.cursor.tag(",") {
            components.push(self.component()?);
        }
        Some(components)
    }

    // A byte component: plain integers must fit u8 exactly (no clamping),
    // percentages are range-checked to 0..=100 then scaled with truncation.
    fn component(&mut self) -> Option<u8> {
        let mut value = self.cursor.int()?;

        if self.cursor.tag("%") {
            if !(0..=100).contains(&value) {
                return None;
            }
            value = value * 255 / 100;
        }

        u8::try_from(value).ok()
    }

    // Hue in degrees: `%` scales 0..=100 onto the wheel, `°`/`deg` passes
    // the integer through unranged, a bare integer is a byte scaled by
    // 360/255.
    fn degrees(&mut self) -> Option<i32> {
        let value = self.cursor.int()?;

        if self.cursor.tag("%") {
            if !(0..=100).contains(&value) {
                return None;
            }
            i32::try_from(value * 360 / 100).ok()
        } else if self.cursor.tag("°") || self.cursor.tag("deg") {
            i32::try_from(value).ok()
        } else {
            if !(0..=255).contains(&value) {
                return None;
            }
            i32::try_from(value * 360 / 255).ok()
        }
    }

    fn end_of_line(&mut self) -> bool {
        if !self.cursor.at_end() && !self.cursor.tag("\n") {
            return false;
        }
        self.cursor.skip_whitespace();
        true
    }
}
