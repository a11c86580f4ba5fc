use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Discrete assessment chosen on the technical and legal screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Rating {
    #[default]
    Unset,
    Poor,
    Regular,
    Good,
    Excellent,
}

impl Rating {
    /// Highest ordinal weight a rating can carry.
    pub const MAX_WEIGHT: u32 = 4;

    /// Parse a rating label. Case-insensitive; Spanish labels accepted.
    /// Unknown labels are `Unset`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "excellent" | "excelente" => Self::Excellent,
            "good" | "bueno" | "buena" => Self::Good,
            "regular" => Self::Regular,
            "poor" | "malo" | "mala" | "deficiente" => Self::Poor,
            _ => Self::Unset,
        }
    }

    pub fn weight(self) -> u32 {
        match self {
            Self::Excellent => 4,
            Self::Good => 3,
            Self::Regular => 2,
            Self::Poor => 1,
            Self::Unset => 0,
        }
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }

    /// One step up, capped at `Good`. Unset and excellent stay put.
    pub fn step_up(self) -> Self {
        match self {
            Self::Poor => Self::Regular,
            Self::Regular => Self::Good,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Regular => "regular",
            Self::Poor => "poor",
            Self::Unset => "",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}
