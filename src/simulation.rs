mod expansion;
mod gas;

pub use expansion::{simulate, SimulationResult, TrajectoryPoint};
pub use gas::AdiabaticGas;

use crate::error::{Error, Result};

/// Internal volume of the bottle [m³].
pub const VESSEL_VOLUME_M3: f64 = 0.001;
/// Water loaded into the bottle when nothing else is selected [m³].
pub const DEFAULT_LIQUID_VOLUME_M3: f64 = 0.00025;
/// Adiabatic index for air.
pub const ADIABATIC_INDEX: f64 = 1.4;
/// Atmospheric pressure [Pa].
pub const AMBIENT_PRESSURE_PA: f64 = 101_325.0;
/// Gas volume added per integration step [m³].
pub const VOLUME_STEP_M3: f64 = 0.000_001;
/// Upper bound on integration steps a single run may take.
pub const MAX_STEPS: f64 = 10_000_000.0;

/// Parameters for a single expansion run. Built fresh for every run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Absolute gas pressure at launch [Pa]
    pub initial_pressure_pa: f64,
    /// Internal volume of the vessel [m³]
    pub vessel_volume_m3: f64,
    /// Water in the vessel at launch [m³]
    pub initial_liquid_volume_m3: f64,
    pub adiabatic_index: f64,
    /// Pressure at which expansion stops doing useful work [Pa]
    pub ambient_pressure_pa: f64,
    /// Integration step [m³]
    pub volume_step_m3: f64,
}

impl SimulationConfig {
    /// Create a config for the standard bottle with the given pressure and water load.
    pub fn new(initial_pressure_pa: f64, initial_liquid_volume_m3: f64) -> Self {
        Self {
            initial_pressure_pa,
            vessel_volume_m3: VESSEL_VOLUME_M3,
            initial_liquid_volume_m3,
            adiabatic_index: ADIABATIC_INDEX,
            ambient_pressure_pa: AMBIENT_PRESSURE_PA,
            volume_step_m3: VOLUME_STEP_M3,
        }
    }

    /// Gas volume at launch: whatever the water does not occupy.
    pub fn initial_gas_volume_m3(&self) -> f64 {
        self.vessel_volume_m3 - self.initial_liquid_volume_m3
    }

    /// Check every precondition of the expansion loop.
    ///
    /// A pressure at or below ambient is accepted; it simply produces no expansion.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("initial pressure", self.initial_pressure_pa),
            ("vessel volume", self.vessel_volume_m3),
            ("initial liquid volume", self.initial_liquid_volume_m3),
            ("adiabatic index", self.adiabatic_index),
            ("ambient pressure", self.ambient_pressure_pa),
            ("volume step", self.volume_step_m3),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if self.initial_pressure_pa <= 0.0 {
            return Err(invalid(format!(
                "initial pressure must be > 0 Pa, got {}",
                self.initial_pressure_pa
            )));
        }
        if self.vessel_volume_m3 <= 0.0 {
            return Err(invalid(format!(
                "vessel volume must be > 0 m³, got {}",
                self.vessel_volume_m3
            )));
        }
        if self.initial_liquid_volume_m3 < 0.0
            || self.initial_liquid_volume_m3 >= self.vessel_volume_m3
        {
            return Err(invalid(format!(
                "initial liquid volume must lie in [0, {}) m³, got {}",
                self.vessel_volume_m3, self.initial_liquid_volume_m3
            )));
        }
        if self.adiabatic_index <= 0.0 {
            return Err(invalid(format!(
                "adiabatic index must be > 0, got {}",
                self.adiabatic_index
            )));
        }
        if self.ambient_pressure_pa < 0.0 {
            return Err(invalid(format!(
                "ambient pressure must be >= 0 Pa, got {}",
                self.ambient_pressure_pa
            )));
        }
        if self.volume_step_m3 <= 0.0 {
            return Err(invalid(format!(
                "volume step must be > 0 m³, got {}",
                self.volume_step_m3
            )));
        }
        let start = self.initial_gas_volume_m3();
        if start + self.volume_step_m3 == start
            || self.vessel_volume_m3 + self.volume_step_m3 == self.vessel_volume_m3
        {
            return Err(invalid(format!(
                "volume step {} m³ is below the float resolution of a {} m³ vessel",
                self.volume_step_m3, self.vessel_volume_m3
            )));
        }
        let steps = (self.vessel_volume_m3 - self.initial_gas_volume_m3()) / self.volume_step_m3;
        if steps > MAX_STEPS {
            return Err(invalid(format!(
                "volume step {} m³ needs {:.0} steps to fill the vessel, limit is {}",
                self.volume_step_m3, steps, MAX_STEPS
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    /// 60 psi over 250 ml of water.
    fn default() -> Self {
        Self::new(crate::units::psi_to_pa(60.0), DEFAULT_LIQUID_VOLUME_M3)
    }
}

fn invalid(msg: String) -> Error {
    log::warn!("rejected simulation config: {}", msg);
    Error::InvalidConfiguration(msg)
}
