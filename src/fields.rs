//! Enumerations and field types for activity planning.
//!
//! This module defines the fixed list of quantity units an activity can be
//! measured in, and the set of form fields that validation reports against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit of measure for an activity's quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum QuantityType {
    #[serde(alias = "Pages")]
    Pages,
    #[serde(alias = "Chapters")]
    Chapters,
    #[serde(alias = "Words")]
    Words,
    #[serde(alias = "Problems")]
    Problems,
    #[serde(alias = "Reps")]
    Reps,
    #[serde(alias = "Minutes")]
    Minutes,
    #[serde(alias = "Hours")]
    Hours,
    #[serde(alias = "Sessions")]
    Sessions,
}

impl QuantityType {
    /// All quantity types in selection order.
    pub const ALL: [QuantityType; 8] = [
        QuantityType::Pages,
        QuantityType::Chapters,
        QuantityType::Words,
        QuantityType::Problems,
        QuantityType::Reps,
        QuantityType::Minutes,
        QuantityType::Hours,
        QuantityType::Sessions,
    ];

    /// Display name shown in the selector.
    pub fn name(self) -> &'static str {
        match self {
            QuantityType::Pages => "Pages",
            QuantityType::Chapters => "Chapters",
            QuantityType::Words => "Words",
            QuantityType::Problems => "Problems",
            QuantityType::Reps => "Reps",
            QuantityType::Minutes => "Minutes",
            QuantityType::Hours => "Hours",
            QuantityType::Sessions => "Sessions",
        }
    }

    /// Display names of every quantity type, in selection order.
    pub fn list_of_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|q| q.name()).collect()
    }

    /// Resolve a display name back to its quantity type (case-insensitive).
    pub fn from_name(name: &str) -> Option<QuantityType> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The inputs of the activity form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Details,
    Quantity,
    Duration,
    Date,
    QuantityType,
    Tasks,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Details,
        Field::QuantityType,
        Field::Quantity,
        Field::Duration,
        Field::Date,
        Field::Tasks,
    ];

    /// Label used when reporting problems with this field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Details => "Details",
            Field::Quantity => "Quantity",
            Field::Duration => "Duration",
            Field::Date => "Date",
            Field::QuantityType => "Quantity type",
            Field::Tasks => "Tasks",
        }
    }

    /// Help text describing what the user should enter.
    pub fn help(self) -> &'static str {
        match self {
            Field::Name => "Enter the name for your new activity.",
            Field::Details => "Enter any additional information for this activity.",
            Field::Quantity => "Enter how many times this activity needs to be completed.",
            Field::Duration => "Enter how long this Activity will take you to complete.",
            Field::Date => "Enter the date to complete this activity.",
            Field::QuantityType => "Select the unit the quantity is measured in.",
            Field::Tasks => "Add tasks to your activity to help stay organized and efficient.",
        }
    }

    /// Maximum number of characters the field accepts, if it is free text.
    pub fn char_limit(self) -> Option<usize> {
        match self {
            Field::Name => Some(NAME_LIMIT),
            Field::Details => Some(DETAILS_LIMIT),
            Field::Quantity | Field::Duration => Some(NUMBER_LIMIT),
            Field::Date | Field::QuantityType | Field::Tasks => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Character limit for the activity name.
pub const NAME_LIMIT: usize = 100;
/// Character limit for the free-text details.
pub const DETAILS_LIMIT: usize = 400;
/// Character limit for the quantity and duration inputs.
pub const NUMBER_LIMIT: usize = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_type_names_round_trip() {
        for q in QuantityType::ALL {
            assert_eq!(QuantityType::from_name(q.name()), Some(q));
        }
        assert_eq!(QuantityType::from_name(" pages "), Some(QuantityType::Pages));
        assert_eq!(QuantityType::from_name("furlongs"), None);
    }

    #[test]
    fn test_list_of_names_order() {
        let names = QuantityType::list_of_names();
        assert_eq!(names.len(), QuantityType::ALL.len());
        assert_eq!(names[0], "Pages");
    }

    #[test]
    fn test_char_limits() {
        assert_eq!(Field::Name.char_limit(), Some(100));
        assert_eq!(Field::Details.char_limit(), Some(400));
        assert_eq!(Field::Quantity.char_limit(), Some(50));
        assert_eq!(Field::Date.char_limit(), None);
    }
}
