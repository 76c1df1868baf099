pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (v * factor).round() / factor
}

pub fn round_1(v: f64) -> f64 {
    round_to(v, 1)
}

pub fn round_int(v: f64) -> i64 {
    v.round() as i64
}
