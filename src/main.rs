use std::process::ExitCode;

use water_rocket::simulation::{simulate, AdiabaticGas, SimulationConfig};
use water_rocket::units::{m3_to_ml, ml_to_m3, psi_to_pa};

const USAGE: &str = "usage: water_rocket [pressure_psi] [water_ml]";

fn parse_arg(arg: Option<String>, name: &str, default: f64) -> Result<f64, String> {
    match arg {
        None => Ok(default),
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|e| format!("{name} `{raw}` is not a number: {e}\n{USAGE}")),
    }
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let parsed = parse_arg(args.next(), "pressure_psi", 60.0)
        .and_then(|psi| parse_arg(args.next(), "water_ml", 250.0).map(|ml| (psi, ml)));
    let (psi, water_ml) = match parsed {
        Ok(values) => values,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let config = SimulationConfig::new(psi_to_pa(psi), ml_to_m3(water_ml));
    let result = match simulate(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Launch: {:.1} psi ({:.1} Pa), {:.0} ml water", psi, config.initial_pressure_pa, water_ml);
    println!("  Points: {}", result.len());
    if let (Some(first), Some(last)) = (result.trajectory.first(), result.final_point()) {
        println!(
            "  First  -> Volume: {:.1} ml, Pressure: {:.1} Pa",
            m3_to_ml(first.gas_volume_m3),
            first.gas_pressure_pa
        );
        println!(
            "  Last   -> Volume: {:.1} ml, Pressure: {:.1} Pa",
            m3_to_ml(last.gas_volume_m3),
            last.gas_pressure_pa
        );
        let gas = AdiabaticGas::new(
            config.initial_pressure_pa,
            config.initial_gas_volume_m3(),
            config.adiabatic_index,
        );
        let exact = gas.work_between(config.initial_gas_volume_m3(), last.gas_volume_m3);
        println!("  Work   -> Trapezoid: {:.2} J, Closed form: {:.2} J", result.total_work, exact);
    } else {
        println!("  No expansion above ambient; work: {:.2} J", result.total_work);
    }

    println!();
    println!("Pressure sweep at {:.0} ml water:", water_ml);
    for step in 1..=8 {
        let sweep_psi = step as f64 * 10.0;
        let sweep = SimulationConfig::new(psi_to_pa(sweep_psi), config.initial_liquid_volume_m3);
        match simulate(&sweep) {
            Ok(r) => println!("  {:>3.0} psi: {:>4} points, {:>8.2} J", sweep_psi, r.len(), r.total_work),
            Err(e) => println!("  {:>3.0} psi: {}", sweep_psi, e),
        }
    }

    ExitCode::SUCCESS
}
