/// A lumped gas charge expanding reversibly with no heat exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdiabaticGas {
    /// Pressure at the reference volume [Pa]
    pub initial_pressure: f64,
    /// Reference volume [m³]
    pub initial_volume: f64,
    /// Ratio of specific heats (γ)
    pub gamma: f64,
}

impl AdiabaticGas {
    pub fn new(initial_pressure: f64, initial_volume: f64, gamma: f64) -> Self {
        Self {
            initial_pressure,
            initial_volume,
            gamma,
        }
    }

    /// Pressure after the gas has grown (or shrunk) to `volume`.
    ///
    ///   P(V) = P0 * (V0 / V)^γ
    pub fn pressure_at(&self, volume: f64) -> f64 {
        self.initial_pressure * (self.initial_volume / volume).powf(self.gamma)
    }

    /// Exact work done by the gas going from `from` to `to` [J].
    ///
    ///   W = P0·V0^γ · (to^(1-γ) - from^(1-γ)) / (1 - γ)
    ///
    /// Falls back to the isothermal form when γ = 1.
    pub fn work_between(&self, from: f64, to: f64) -> f64 {
        let pv = self.initial_pressure * self.initial_volume;
        if (self.gamma - 1.0).abs() < f64::EPSILON {
            return pv * (to / from).ln();
        }
        let exponent = 1.0 - self.gamma;
        let from_term = (self.initial_volume / from).powf(-exponent);
        let to_term = (self.initial_volume / to).powf(-exponent);
        pv * (from_term - to_term) / (self.gamma - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pressure_at_reference_volume() {
        let gas = AdiabaticGas::new(413_685.6, 0.00075, 1.4);
        assert_relative_eq!(gas.pressure_at(0.00075), 413_685.6, max_relative = 1e-12);
    }

    #[test]
    fn test_pressure_follows_pv_gamma_constant() {
        let gas = AdiabaticGas::new(300_000.0, 0.0005, 1.4);
        let v = 0.0008;
        let lhs = gas.pressure_at(v) * v.powf(1.4);
        let rhs = 300_000.0 * 0.0005f64.powf(1.4);
        assert_relative_eq!(lhs, rhs, max_relative = 1e-12);
    }

    #[test]
    fn test_pressure_drops_as_gas_expands() {
        let gas = AdiabaticGas::new(413_685.6, 0.00075, 1.4);
        assert!(gas.pressure_at(0.0009) < gas.pressure_at(0.0008));
    }

    #[test]
    fn test_work_for_bottle_expansion() {
        // P0·V0/(γ-1)·(1 - (V0/V)^(γ-1)) for 60 psi, 750 ml of air expanding to 1 l
        let gas = AdiabaticGas::new(413_685.6, 0.00075, 1.4);
        let expected = 413_685.6 * 0.00075 / 0.4 * (1.0 - 0.75f64.powf(0.4));
        assert_relative_eq!(gas.work_between(0.00075, 0.001), expected, max_relative = 1e-12);
        assert!(gas.work_between(0.00075, 0.001) > 84.0);
        assert!(gas.work_between(0.00075, 0.001) < 85.0);
    }

    #[test]
    fn test_isothermal_work() {
        let gas = AdiabaticGas::new(200_000.0, 0.0005, 1.0);
        let expected = 200_000.0 * 0.0005 * 2.0f64.ln();
        assert_relative_eq!(gas.work_between(0.0005, 0.001), expected, max_relative = 1e-12);
    }
}
