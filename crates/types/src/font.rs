use serde::{Deserialize, Serialize};

/// Weight of the built-in Helvetica family used for all invoice text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// PostScript name of the standard Type1 font for this weight.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Helvetica",
            FontWeight::Bold => "Helvetica-Bold",
        }
    }
}

/// Font selection for a single piece of drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub size: f32,
}

impl TextStyle {
    pub const fn regular(size: f32) -> Self {
        Self { weight: FontWeight::Regular, size }
    }

    pub const fn bold(size: f32) -> Self {
        Self { weight: FontWeight::Bold, size }
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::regular(9.0)
    }
}
