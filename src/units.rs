//! Unit conversions between what the controls collect and what the simulator uses.

/// Pascals per pound-force per square inch.
pub const PA_PER_PSI: f64 = 6894.76;
/// Milliliters per cubic meter.
pub const ML_PER_M3: f64 = 1_000_000.0;

pub fn psi_to_pa(psi: f64) -> f64 {
    psi * PA_PER_PSI
}

pub fn ml_to_m3(ml: f64) -> f64 {
    ml / ML_PER_M3
}

pub fn m3_to_ml(m3: f64) -> f64 {
    m3 * ML_PER_M3
}
