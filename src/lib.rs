pub mod controls;
pub mod error;
pub mod readout;
pub mod simulation;
pub mod units;

use controls::{ControlPanel, PRESSURE_RANGE_PSI, WATER_RANGE_ML};
use readout::{read_plot_series, ChartFrame};
use simulation::{simulate, SimulationResult};
use log::Level;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const RUN_LOG_LIMIT: usize = 120;

/// The main GUI model: slider state plus the latest expansion run.
struct Model {
    controls: ControlPanel,
    outcome: error::Result<SimulationResult>,
    run_log: Vec<String>,
}

impl Model {
    /// Re-run the expansion for the current slider positions.
    fn rerun(&mut self) {
        let started = js_sys::Date::now();
        let outcome = simulate(&self.controls.to_config());
        let elapsed_ms = js_sys::Date::now() - started;

        let entry = match &outcome {
            Ok(result) => format!(
                "P: {:.0} psi | water: {:.0} ml | points: {} | work: {:.2} J | {:.1} ms",
                self.controls.pressure_psi,
                self.controls.water_ml,
                result.len(),
                result.total_work,
                elapsed_ms,
            ),
            Err(e) => format!(
                "P: {:.0} psi | water: {:.0} ml | {}",
                self.controls.pressure_psi, self.controls.water_ml, e
            ),
        };
        log::debug!("{}", entry);
        self.run_log.push(entry);
        if self.run_log.len() > RUN_LOG_LIMIT {
            self.run_log.drain(0..(self.run_log.len() - RUN_LOG_LIMIT));
        }
        self.outcome = outcome;
    }

    fn view_chart(&self) -> Html {
        let result = match &self.outcome {
            Ok(result) => result,
            Err(e) => return html! { <p style="color: darkred;">{ e.to_string() }</p> },
        };
        let frame = ChartFrame::default();
        let series = read_plot_series(result);
        let view_box = format!("0 0 {} {}", frame.width, frame.height);
        html! {
            <div>
                <h2>{ "Pressure vs Volume of Air" }</h2>
                <svg width={frame.width.to_string()} height={frame.height.to_string()} viewBox={view_box}
                    style="border: 1px solid #ccc;">
                    <polygon points={frame.area_points(&series)} fill="rgba(0, 0, 255, 0.2)" stroke="none" />
                    <polyline points={frame.curve_points(&series)} fill="none" stroke="steelblue" stroke-width="2" />
                    <text x={(frame.width - 10.0).to_string()} y={(frame.height - 10.0).to_string()}
                        text-anchor="end" font-size="12">
                        { series.work_label() }
                    </text>
                </svg>
                <p>{ format!("x: Volume of Air (0 to {} ml), y: Pressure (0 to {} Pa)", frame.x_max_ml, frame.y_max_pa) }</p>
            </div>
        }
    }
}

/// Messages for our Yew component.
enum Msg {
    SetPressure(f64),
    SetWaterVolume(f64),
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut model = Self {
            controls: ControlPanel::new(),
            outcome: Ok(SimulationResult::default()),
            run_log: Vec::new(),
        };
        model.rerun();
        model
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetPressure(psi) => self.controls.set_pressure_psi(psi),
            Msg::SetWaterVolume(ml) => self.controls.set_water_ml(ml),
        }
        self.rerun();
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_pressure = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetPressure(input.value_as_number())
        });
        let on_water = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetWaterVolume(input.value_as_number())
        });
        let run_text = self.run_log.join("\n");

        html! {
            <div style="font-family: sans-serif;">
                <h1>{ "Water Rocket Expansion Work" }</h1>
                <label>
                    { format!("Pressure: {:.0} psi ", self.controls.pressure_psi) }
                    <input type="range" min={PRESSURE_RANGE_PSI.0.to_string()} max={PRESSURE_RANGE_PSI.1.to_string()}
                        step="1" value={self.controls.pressure_psi.to_string()} oninput={on_pressure} />
                </label>
                <br />
                <label>
                    { format!("Water: {:.0} ml ", self.controls.water_ml) }
                    <input type="range" min={WATER_RANGE_ML.0.to_string()} max={WATER_RANGE_ML.1.to_string()}
                        step="10" value={self.controls.water_ml.to_string()} oninput={on_water} />
                </label>
                { self.view_chart() }
                <h2>{ "Run Log:" }</h2>
                <pre style="background-color: #f0f0f0; padding: 10px; max-height: 300px; overflow-y: scroll;">
                    { run_text }
                </pre>
            </div>
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    console_log::init_with_level(Level::Debug).expect("error initializing logger");
    yew::Renderer::<Model>::new().render();
}
