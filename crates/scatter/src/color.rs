use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// An RGB color used to tell correct and incorrect votes apart.
/// Serialized as `#rrggbb`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Deserialize, serde::Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    values: [u8; 3],
}

pub const GREEN: Color = Color::new(0, 128, 0);
pub const RED: Color = Color::new(255, 0, 0);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { values: [r, g, b] }
    }

    pub const fn r(&self) -> u8 {
        self.values[0]
    }

    pub const fn g(&self) -> u8 {
        self.values[1]
    }

    pub const fn b(&self) -> u8 {
        self.values[2]
    }
}

/// Parses a color written as `#rrggbb`
impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Color, &'static str> {
        if s.len() != 7 {
            return Err("Wrong length RGB code encountered while parsing");
        }
        let rest = s.strip_prefix('#').ok_or(r##"Did not start with "#""##)?;
        let channel = |i: usize| -> Result<u8, &'static str> {
            let hex = rest.get(i..i + 2).ok_or("Could not parse RGB")?;
            u8::from_str_radix(hex, 16).or(Err("Not hexadecimal"))
        };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Color, &'static str> {
        s.parse()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}
