use super::{AdiabaticGas, SimulationConfig};
use crate::error::Result;

/// One sample of the residual gas during expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Gas volume after the step [m³]
    pub gas_volume_m3: f64,
    /// Gas pressure at that volume [Pa]
    pub gas_pressure_pa: f64,
}

/// Output of one expansion run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationResult {
    /// Samples in increasing volume order. The launch state is not included.
    pub trajectory: Vec<TrajectoryPoint>,
    /// Trapezoid area of each step [J], parallel to `trajectory`.
    pub segment_work: Vec<f64>,
    /// Sum of `segment_work` [J].
    pub total_work: f64,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.trajectory.iter().map(|p| p.gas_volume_m3).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.trajectory.iter().map(|p| p.gas_pressure_pa).collect()
    }

    /// Last recorded sample, if the gas expanded at all.
    pub fn final_point(&self) -> Option<&TrajectoryPoint> {
        self.trajectory.last()
    }
}

/// Expand the gas charge from its launch volume to the full vessel volume.
///
/// The volume advances by a fixed step; pressure is evaluated at the advanced
/// volume and paired with the previous pressure (the launch pressure on the
/// first step) to form a trapezoid. The run stops before recording a step whose
/// pressure is at or below ambient, or once the volume reaches the vessel volume.
///
/// Returns an empty result when the launch pressure is not above ambient or the
/// bottle holds no water. Fails only when `config` does not validate.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationResult> {
    config.validate()?;

    let initial_volume = config.initial_gas_volume_m3();
    let final_volume = config.vessel_volume_m3;
    let step = config.volume_step_m3;
    let gas = AdiabaticGas::new(config.initial_pressure_pa, initial_volume, config.adiabatic_index);

    let mut result = SimulationResult::default();
    let mut volume = initial_volume;
    let mut previous_pressure = config.initial_pressure_pa;

    while volume < final_volume {
        volume += step;
        let pressure = gas.pressure_at(volume);

        if pressure <= config.ambient_pressure_pa {
            break;
        }

        let area = (pressure + previous_pressure) / 2.0 * step;
        result.total_work += area;
        result.segment_work.push(area);
        result.trajectory.push(TrajectoryPoint {
            gas_volume_m3: volume,
            gas_pressure_pa: pressure,
        });

        previous_pressure = pressure;
    }

    log::debug!(
        "expansion from {:.1} Pa over {:.6} m³: {} points, {:.2} J",
        config.initial_pressure_pa,
        initial_volume,
        result.len(),
        result.total_work
    );

    Ok(result)
}
