use crate::simulation::SimulationConfig;
use crate::units::{ml_to_m3, psi_to_pa};

pub const PRESSURE_RANGE_PSI: (f64, f64) = (0.0, 80.0);
pub const WATER_RANGE_ML: (f64, f64) = (0.0, 900.0);

/// Slider state owned by the front end. Every change produces a new config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPanel {
    pub pressure_psi: f64,
    pub water_ml: f64,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            pressure_psi: 60.0,
            water_ml: 250.0,
        }
    }

    /// Update the pressure slider. Non-numeric input leaves the value unchanged.
    pub fn set_pressure_psi(&mut self, psi: f64) {
        if let Some(v) = clamp_reading(psi, PRESSURE_RANGE_PSI) {
            self.pressure_psi = v;
        }
    }

    /// Update the water slider. Non-numeric input leaves the value unchanged.
    pub fn set_water_ml(&mut self, ml: f64) {
        if let Some(v) = clamp_reading(ml, WATER_RANGE_ML) {
            self.water_ml = v;
        }
    }

    /// Config for the current slider positions. `simulate` validates it.
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig::new(psi_to_pa(self.pressure_psi), ml_to_m3(self.water_ml))
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_reading(value: f64, (min, max): (f64, f64)) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_panel_matches_default_config() {
        let config = ControlPanel::new().to_config();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_sliders_are_clamped() {
        let mut panel = ControlPanel::new();
        panel.set_pressure_psi(500.0);
        panel.set_water_ml(-20.0);
        assert_eq!(panel.pressure_psi, 80.0);
        assert_eq!(panel.water_ml, 0.0);
    }

    #[test]
    fn test_nan_reading_is_ignored() {
        let mut panel = ControlPanel::new();
        panel.set_pressure_psi(f64::NAN);
        panel.set_water_ml(f64::NAN);
        assert_eq!(panel, ControlPanel::new());
    }

    #[test]
    fn test_water_change_updates_config() {
        let mut panel = ControlPanel::new();
        panel.set_water_ml(400.0);
        let config = panel.to_config();
        assert_relative_eq!(config.initial_liquid_volume_m3, 0.0004, max_relative = 1e-12);
        assert_relative_eq!(config.initial_gas_volume_m3(), 0.0006, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_psi_is_rejected() {
        let mut panel = ControlPanel::new();
        panel.set_pressure_psi(0.0);
        assert!(crate::simulation::simulate(&panel.to_config()).is_err());
    }
}
