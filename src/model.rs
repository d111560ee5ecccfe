use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NutrackError;

/// A single food item and its nutritional values.
///
/// Records carry no identity of their own; a record's position in the
/// store's ordered sequence is the only handle for editing and deleting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub food_item: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
}

impl Record {
    pub fn new(food_item: impl Into<String>, calories: f64, protein: f64, carbs: f64) -> Self {
        Self {
            food_item: food_item.into(),
            calories,
            protein,
            carbs,
        }
    }
}

/// A record field selected by name.
///
/// Field names arrive from the user as text; parsing one is the boundary
/// where unknown names are rejected, so everything past this point works
/// with a closed set of selectors instead of runtime name lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FoodItem,
    Calories,
    Protein,
    Carbs,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FoodItem => "food_item",
            Field::Calories => "calories",
            Field::Protein => "protein",
            Field::Carbs => "carbs",
        }
    }

    /// The numeric counterpart of this field, if it has one.
    /// `food_item` is the only non-numeric field.
    pub fn numeric(self) -> Option<NumericField> {
        match self {
            Field::FoodItem => None,
            Field::Calories => Some(NumericField::Calories),
            Field::Protein => Some(NumericField::Protein),
            Field::Carbs => Some(NumericField::Carbs),
        }
    }

    /// Read this field out of a record as a typed value.
    pub fn get(self, record: &Record) -> FieldValue {
        match self {
            Field::FoodItem => FieldValue::Text(record.food_item.clone()),
            Field::Calories => FieldValue::Number(record.calories),
            Field::Protein => FieldValue::Number(record.protein),
            Field::Carbs => FieldValue::Number(record.carbs),
        }
    }
}

impl FromStr for Field {
    type Err = NutrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food_item" => Ok(Field::FoodItem),
            "calories" => Ok(Field::Calories),
            "protein" => Ok(Field::Protein),
            "carbs" => Ok(Field::Carbs),
            other => Err(NutrackError::Field(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The subset of fields analytics can run over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Calories,
    Protein,
    Carbs,
}

impl NumericField {
    pub fn name(self) -> &'static str {
        match self {
            NumericField::Calories => "calories",
            NumericField::Protein => "protein",
            NumericField::Carbs => "carbs",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            NumericField::Calories => record.calories,
            NumericField::Protein => record.protein,
            NumericField::Carbs => record.carbs,
        }
    }
}

impl FromStr for NumericField {
    type Err = NutrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Field>()?
            .numeric()
            .ok_or_else(|| NutrackError::Field(s.to_string()))
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed field value for exact-match filtering.
///
/// Numeric fields compare as numbers after coercion, never as text, so a
/// filter for calories "200" matches a stored 200.0.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_field_names() {
        assert_eq!("food_item".parse::<Field>().unwrap(), Field::FoodItem);
        assert_eq!("calories".parse::<Field>().unwrap(), Field::Calories);
        assert_eq!("protein".parse::<Field>().unwrap(), Field::Protein);
        assert_eq!("carbs".parse::<Field>().unwrap(), Field::Carbs);
    }

    #[test]
    fn rejects_unknown_field_name() {
        let err = "unknown".parse::<Field>().unwrap_err();
        assert!(matches!(err, NutrackError::Field(name) if name == "unknown"));
    }

    #[test]
    fn food_item_is_not_numeric() {
        assert_eq!(Field::FoodItem.numeric(), None);
        let err = "food_item".parse::<NumericField>().unwrap_err();
        assert!(matches!(err, NutrackError::Field(_)));
    }

    #[test]
    fn gets_typed_values_out_of_a_record() {
        let record = Record::new("Oatmeal", 150.0, 5.0, 27.0);
        assert_eq!(
            Field::FoodItem.get(&record),
            FieldValue::Text("Oatmeal".to_string())
        );
        assert_eq!(Field::Calories.get(&record), FieldValue::Number(150.0));
        assert_eq!(NumericField::Protein.value(&record), 5.0);
    }
}
