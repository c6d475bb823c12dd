// Copyright 2025 Cowboy AI, LLC.

//! INEC connectivity level - the six-valued ordinal at the center of the domain

use crate::errors::DomainError;
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six-level INEC school-connectivity index
///
/// Defined by the education-ministry technical note: level 0 means
/// no adequate energy or no internet at all, level 5 means bandwidth and
/// Wi-Fi coverage both meet the regulatory minimums. Levels are ordinal
/// categories - comparisons are meaningful, arithmetic is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InecLevel {
    /// Level 0 - inadequate energy or no internet connection
    Level0,
    /// Level 1 - insufficient bandwidth and no Wi-Fi
    Level1,
    /// Level 2 - insufficient bandwidth, Wi-Fi present
    Level2,
    /// Level 3 - adequate bandwidth but no Wi-Fi
    Level3,
    /// Level 4 - adequate bandwidth, Wi-Fi present but under-provisioned
    Level4,
    /// Level 5 - fully connected
    Level5,
}

impl InecLevel {
    /// All levels in ascending order
    pub const ALL: [InecLevel; 6] = [
        InecLevel::Level0,
        InecLevel::Level1,
        InecLevel::Level2,
        InecLevel::Level3,
        InecLevel::Level4,
        InecLevel::Level5,
    ];

    /// Get the numeric value of this level
    pub fn as_u8(&self) -> u8 {
        match self {
            InecLevel::Level0 => 0,
            InecLevel::Level1 => 1,
            InecLevel::Level2 => 2,
            InecLevel::Level3 => 3,
            InecLevel::Level4 => 4,
            InecLevel::Level5 => 5,
        }
    }

    /// Check if this level falls in the dashboard's critical band (0-2)
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            InecLevel::Level0 | InecLevel::Level1 | InecLevel::Level2
        )
    }

    /// Get the upstream display label for this level
    ///
    /// The authoritative data set labels levels in Portuguese ("Nível 5");
    /// the label is part of the wire vocabulary, not a translation concern.
    pub fn label(&self) -> &'static str {
        match self {
            InecLevel::Level0 => "Nível 0",
            InecLevel::Level1 => "Nível 1",
            InecLevel::Level2 => "Nível 2",
            InecLevel::Level3 => "Nível 3",
            InecLevel::Level4 => "Nível 4",
            InecLevel::Level5 => "Nível 5",
        }
    }
}

impl fmt::Display for InecLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<u8> for InecLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InecLevel::Level0),
            1 => Ok(InecLevel::Level1),
            2 => Ok(InecLevel::Level2),
            3 => Ok(InecLevel::Level3),
            4 => Ok(InecLevel::Level4),
            5 => Ok(InecLevel::Level5),
            _ => Err(DomainError::InvalidLevel { value }),
        }
    }
}

impl From<InecLevel> for u8 {
    fn from(level: InecLevel) -> Self {
        level.as_u8()
    }
}

// The wire shape is the integer 0..=5, not a variant-name enum, so the
// schema is written by hand to match the serde representation.
impl JsonSchema for InecLevel {
    fn schema_name() -> String {
        "InecLevel".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        let mut schema = <u8>::json_schema(gen).into_object();
        schema.number().minimum = Some(0.0);
        schema.number().maximum = Some(5.0);
        schema.metadata().description =
            Some("INEC connectivity level, an ordinal in 0..=5".to_string());
        schema.into()
    }
}
