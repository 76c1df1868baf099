use chrono::NaiveDateTime;
use ironlog_types::{BodyMetricRecord, Gender};
use serde::Serialize;

use crate::body_composition::{
    BmiCategory, IdealWeightRange, advanced_body_fat, basic_body_fat, bmi, bmi_category,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyAnalysisEntry {
    pub date: NaiveDateTime,
    pub body_weight: Option<f64>,
    pub height_cm: Option<f64>,
    pub bmi: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub estimated_body_fat: Option<f64>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedBodyAnalysisEntry {
    #[serde(flatten)]
    pub entry: BodyAnalysisEntry,
    pub ideal_weight_range: Option<IdealWeightRange>,
    pub bmr: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiHistoryEntry {
    pub date: NaiveDateTime,
    pub weight: f64,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub note: Option<String>,
}

/// Builds one row per record. Every row uses the same `height_cm`, the
/// current height, even for dates before it was measured.
fn assemble<'a, I, F>(records: I, height_cm: Option<f64>, estimate: F) -> Vec<BodyAnalysisEntry>
where
    I: IntoIterator<Item = &'a BodyMetricRecord>,
    F: Fn(Option<f64>) -> Option<f64>,
{
    records
        .into_iter()
        .map(|record| {
            let bmi = bmi(record.body_weight, height_cm);
            BodyAnalysisEntry {
                date: record.date,
                body_weight: record.body_weight,
                height_cm,
                bmi,
                body_fat_percent: record.body_fat_percent,
                estimated_body_fat: estimate(bmi),
                note: record.note.clone(),
            }
        })
        .collect()
}

pub fn basic_history<'a, I>(records: I, height_cm: Option<f64>) -> Vec<BodyAnalysisEntry>
where
    I: IntoIterator<Item = &'a BodyMetricRecord>,
{
    assemble(records, height_cm, basic_body_fat)
}

pub fn advanced_history<'a, I>(
    records: I,
    height_cm: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
    ideal_weight_range: Option<IdealWeightRange>,
    bmr: Option<i64>,
) -> Vec<AdvancedBodyAnalysisEntry>
where
    I: IntoIterator<Item = &'a BodyMetricRecord>,
{
    assemble(records, height_cm, |bmi| advanced_body_fat(bmi, age, gender))
        .into_iter()
        .map(|entry| AdvancedBodyAnalysisEntry {
            entry,
            ideal_weight_range,
            bmr,
        })
        .collect()
}

pub fn bmi_history<'a, I>(records: I, height_cm: f64) -> Vec<BmiHistoryEntry>
where
    I: IntoIterator<Item = &'a BodyMetricRecord>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let weight = record.body_weight?;
            let bmi = bmi(Some(weight), Some(height_cm))?;
            Some(BmiHistoryEntry {
                date: record.date,
                weight,
                bmi,
                bmi_category: bmi_category(bmi),
                note: record.note.clone(),
            })
        })
        .collect()
}
