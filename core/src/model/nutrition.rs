use serde::{Deserialize, Serialize};

use crate::model::entry::FormFields;

/// Daily nutrition totals. Saved as a whole; there is no partial merge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NutritionEntry {
    pub calories: String,
    pub carbs_grams: String,
    pub fat_grams: String,
    pub protein_grams: String,
}

impl NutritionEntry {
    pub fn new(
        calories: impl Into<String>,
        carbs_grams: impl Into<String>,
        fat_grams: impl Into<String>,
        protein_grams: impl Into<String>,
    ) -> Self {
        Self {
            calories: calories.into(),
            carbs_grams: carbs_grams.into(),
            fat_grams: fat_grams.into(),
            protein_grams: protein_grams.into(),
        }
    }
}

impl FormFields for NutritionEntry {
    const CATEGORY: &'static str = "nutrition";
    const KEYS: &'static [&'static str] = &["calories", "carbs", "fat", "protein"];
    const LABELS: &'static [&'static str] =
        &["Total calories", "Carbohydrate (g)", "Fat (g)", "Protein (g)"];

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.calories),
            1 => Some(&self.carbs_grams),
            2 => Some(&self.fat_grams),
            3 => Some(&self.protein_grams),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.calories),
            1 => Some(&mut self.carbs_grams),
            2 => Some(&mut self.fat_grams),
            3 => Some(&mut self.protein_grams),
            _ => None,
        }
    }
}

/// Form view over the two flat hydration/smoking fields of a day record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hydration {
    pub water_liters: String,
    pub cigarette_count: String,
}

impl FormFields for Hydration {
    const CATEGORY: &'static str = "hydration";
    const KEYS: &'static [&'static str] = &["water", "cigarettes"];
    const LABELS: &'static [&'static str] = &["Water (liters)", "Cigarettes"];

    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.water_liters),
            1 => Some(&self.cigarette_count),
            _ => None,
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.water_liters),
            1 => Some(&mut self.cigarette_count),
            _ => None,
        }
    }
}
