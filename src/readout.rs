use crate::simulation::SimulationResult;
use crate::units::m3_to_ml;

/// Trajectory in the units the chart displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub volumes_ml: Vec<f64>,
    pub pressures_pa: Vec<f64>,
    pub total_work_j: f64,
}

impl PlotSeries {
    pub fn work_label(&self) -> String {
        format!("Total Area: {:.2} J", self.total_work_j)
    }
}

pub fn read_plot_series(result: &SimulationResult) -> PlotSeries {
    PlotSeries {
        volumes_ml: result.volumes().into_iter().map(m3_to_ml).collect(),
        pressures_pa: result.pressures(),
        total_work_j: result.total_work,
    }
}

/// Fixed axes of the pressure/volume chart, mapped onto an SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub x_max_ml: f64,
    pub y_max_pa: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            x_max_ml: 1500.0,
            y_max_pa: 600_000.0,
        }
    }
}

impl ChartFrame {
    /// SVG coordinates of a data point. The y axis points down in SVG.
    pub fn project(&self, volume_ml: f64, pressure_pa: f64) -> (f64, f64) {
        let x = volume_ml / self.x_max_ml * self.width;
        let y = self.height - pressure_pa / self.y_max_pa * self.height;
        (x, y)
    }

    /// `points` attribute for the pressure curve.
    pub fn curve_points(&self, series: &PlotSeries) -> String {
        let points = series
            .volumes_ml
            .iter()
            .zip(&series.pressures_pa)
            .map(|(&v, &p)| self.project(v, p));
        join_points(points)
    }

    /// `points` attribute for the area under the curve, closed down to zero pressure.
    pub fn area_points(&self, series: &PlotSeries) -> String {
        let (first, last) = match (series.volumes_ml.first(), series.volumes_ml.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return String::new(),
        };
        let curve = series
            .volumes_ml
            .iter()
            .zip(&series.pressures_pa)
            .map(|(&v, &p)| self.project(v, p));
        let floor = [self.project(last, 0.0), self.project(first, 0.0)];
        join_points(curve.chain(floor))
    }
}

fn join_points(points: impl Iterator<Item = (f64, f64)>) -> String {
    points
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::TrajectoryPoint;

    fn two_point_result() -> SimulationResult {
        SimulationResult {
            trajectory: vec![
                TrajectoryPoint {
                    gas_volume_m3: 0.00075,
                    gas_pressure_pa: 300_000.0,
                },
                TrajectoryPoint {
                    gas_volume_m3: 0.0009,
                    gas_pressure_pa: 150_000.0,
                },
            ],
            segment_work: vec![0.3, 0.2],
            total_work: 84.316_7,
        }
    }

    #[test]
    fn test_series_is_in_millilitres() {
        let series = read_plot_series(&two_point_result());
        assert_eq!(series.volumes_ml.len(), 2);
        assert!((series.volumes_ml[0] - 750.0).abs() < 1e-9);
        assert!((series.volumes_ml[1] - 900.0).abs() < 1e-9);
        assert_eq!(series.pressures_pa, vec![300_000.0, 150_000.0]);
    }

    #[test]
    fn test_work_label_has_two_decimals_and_unit() {
        let series = read_plot_series(&two_point_result());
        assert_eq!(series.work_label(), "Total Area: 84.32 J");
    }

    #[test]
    fn test_projection_corners() {
        let frame = ChartFrame::default();
        assert_eq!(frame.project(0.0, 0.0), (0.0, 400.0));
        assert_eq!(frame.project(1500.0, 600_000.0), (600.0, 0.0));
    }

    #[test]
    fn test_area_closes_to_zero_pressure() {
        let frame = ChartFrame::default();
        let series = read_plot_series(&two_point_result());
        assert_eq!(frame.curve_points(&series), "300.0,200.0 360.0,300.0");
        assert_eq!(
            frame.area_points(&series),
            "300.0,200.0 360.0,300.0 360.0,400.0 300.0,400.0"
        );
    }

    #[test]
    fn test_empty_series_draws_nothing() {
        let frame = ChartFrame::default();
        let series = read_plot_series(&SimulationResult::default());
        assert!(frame.curve_points(&series).is_empty());
        assert!(frame.area_points(&series).is_empty());
        assert_eq!(series.work_label(), "Total Area: 0.00 J");
    }
}
