//! Derived body-composition figures.
//!
//! Every function returns `None` when an input it needs is missing, so callers
//! can pass through whatever the user has recorded so far.

use ironlog_types::Gender;
use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::helpers::math::{round_1, round_int};

/// Estimated body fat is clamped to this range (percent).
pub const BODY_FAT_RANGE: (f64, f64) = (5.0, 50.0);

/// Stand-in age used by the height/weight-only body-fat estimate.
pub const PLACEHOLDER_AGE: f64 = 25.0;

/// Healthy BMI band used for the ideal weight range.
pub const HEALTHY_BMI: (f64, f64) = (18.5, 24.9);

pub const SENIOR_AGE: u32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BmiCategory {
    #[serde(rename = "low")]
    #[strum(to_string = "low")]
    Underweight,
    /// Underweight for someone 65 or older.
    LowWeightCaution,
    Normal,
    Overweight,
    Obese,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealWeightRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCalorieNeeds {
    pub sedentary: i64,
    pub light: i64,
    pub moderate: i64,
    pub active: i64,
    pub very_active: i64,
}

fn height_m_squared(height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(height_m * height_m)
}

/// Unrounded `weight / height_m^2`.
pub fn raw_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    Some(weight_kg / height_m_squared(height_cm)?)
}

pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    raw_bmi(weight_kg?, height_cm?).map(round_1)
}

fn clamp_body_fat(value: f64) -> f64 {
    value.clamp(BODY_FAT_RANGE.0, BODY_FAT_RANGE.1)
}

/// Height/weight-only estimate: `1.39 * bmi + 0.16 * 25 - 10.34`.
pub fn basic_body_fat(bmi: Option<f64>) -> Option<f64> {
    let bmi = bmi?;
    Some(clamp_body_fat(round_1(1.39 * bmi + 0.16 * PLACEHOLDER_AGE - 10.34)))
}

/// Deurenberg-style estimate from BMI, age and gender.
pub fn advanced_body_fat(
    bmi: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
) -> Option<f64> {
    let bmi = bmi?;
    let age = f64::from(age?);
    let offset = match gender? {
        Gender::Male => -16.2,
        Gender::Female => -5.4,
        Gender::Other => return None,
    };
    Some(clamp_body_fat(round_1(1.20 * bmi + 0.23 * age + offset)))
}

pub fn ideal_weight_range(height_cm: Option<f64>) -> Option<IdealWeightRange> {
    let h2 = height_m_squared(height_cm?)?;
    Some(IdealWeightRange {
        min: round_1(HEALTHY_BMI.0 * h2),
        max: round_1(HEALTHY_BMI.1 * h2),
    })
}

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
pub fn bmr(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
) -> Option<i64> {
    let (weight, height, age) = (weight_kg?, height_cm?, f64::from(age?));
    let offset = match gender? {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
        Gender::Other => return None,
    };
    Some(round_int(10.0 * weight + 6.25 * height - 5.0 * age + offset))
}

impl DailyCalorieNeeds {
    pub const SEDENTARY: f64 = 1.2;
    pub const LIGHT: f64 = 1.375;
    pub const MODERATE: f64 = 1.55;
    pub const ACTIVE: f64 = 1.725;
    pub const VERY_ACTIVE: f64 = 1.9;

    pub fn from_bmr(bmr: Option<i64>) -> Option<Self> {
        let bmr = bmr? as f64;
        let scale = |m: f64| round_int(bmr * m);
        Some(Self {
            sedentary: scale(Self::SEDENTARY),
            light: scale(Self::LIGHT),
            moderate: scale(Self::MODERATE),
            active: scale(Self::ACTIVE),
            very_active: scale(Self::VERY_ACTIVE),
        })
    }
}

/// Standard adult bands.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// From 65 on a slightly higher BMI counts as healthy.
pub fn bmi_for_age_category(bmi: Option<f64>, age: Option<u32>) -> Option<BmiCategory> {
    let (bmi, age) = (bmi?, age?);
    if age < SENIOR_AGE {
        return Some(bmi_category(bmi));
    }
    Some(if bmi < 20.0 {
        BmiCategory::LowWeightCaution
    } else if bmi < 27.0 {
        BmiCategory::Normal
    } else {
        BmiCategory::Overweight
    })
}
