use crate::base::Protocol;
use crate::stress::{StrainInput, StressResponse, StressValues};
use crate::Result;
use plotpy::{Curve, Plot};
use std::ffi::OsStr;
use std::path::Path;

/// Holds the default directory for the stress-strain figures
pub const DEFAULT_PLOT_DIR: &str = "/tmp/libela";

/// Returns the default path of a figure
pub fn default_plot_path(model: &str, protocol: Protocol) -> String {
    format!("{}/{}_{}.svg", DEFAULT_PLOT_DIR, model, protocol.name())
}

/// Plots stress versus strain
pub struct StressPlotter {
    /// Do not draw the grid lines
    pub no_grid: bool,

    /// Holds all curves
    curves: Vec<Curve>,
}

impl StressPlotter {
    /// Allocates a new instance
    pub fn new() -> Self {
        StressPlotter {
            no_grid: false,
            curves: Vec::new(),
        }
    }

    /// Draws a stress-strain curve
    ///
    /// # Input
    ///
    /// * `strain` -- the strain values (x-axis)
    /// * `stress` -- the stress values (y-axis)
    /// * `config` -- a function `|curve| {}` to configure the curve
    pub fn draw<F>(&mut self, strain: &[f64], stress: &[f64], mut config: F)
    where
        F: FnMut(&mut Curve),
    {
        let mut curve = Curve::new();
        curve.set_marker_style("o").set_marker_void(true);
        config(&mut curve);
        curve.draw(&strain.to_vec(), &stress.to_vec());
        self.curves.push(curve);
    }

    /// Draws the curves of a stress evaluation
    ///
    /// # Input
    ///
    /// * `strain` -- the strain data as given to the evaluation
    /// * `response` -- the evaluation results
    pub fn draw_response(&mut self, strain: &StrainInput, response: &StressResponse) {
        let x = strain.as_list();
        match &response.values {
            StressValues::Scalar(value) => self.draw(&x, &[*value], |curve| {
                curve.set_label(&component_label(response, 0));
            }),
            StressValues::Array(values) => self.draw(&x, values.as_data(), |curve| {
                curve.set_label(&component_label(response, 0));
            }),
            StressValues::Pair(first, second) => {
                // rows 0 and 1 hold λ1 and λ2
                let n = first.dim();
                let (x1, x2) = x.split_at(n.min(x.len()));
                self.draw(x1, first.as_data(), |curve| {
                    curve.set_label(&component_label(response, 0));
                });
                self.draw(x2, second.as_data(), |curve| {
                    curve.set_label(&component_label(response, 1)).set_marker_style("s");
                });
            }
        }
    }

    /// Saves the figure
    ///
    /// **Note:** Call this function after [StressPlotter::draw()].
    ///
    /// # Input
    ///
    /// * `x_label` -- the label of the x-axis
    /// * `y_label` -- the label of the y-axis
    /// * `filepath` -- may be a String, &str, or Path
    pub fn save<P>(&self, x_label: &str, y_label: &str, filepath: &P) -> Result<()>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        if self.curves.is_empty() {
            return Err("there are no curves to plot".into());
        }
        if let Some(dir) = Path::new(filepath).parent() {
            std::fs::create_dir_all(dir)?;
        }
        let mut plot = Plot::new();
        for curve in &self.curves {
            plot.add(curve);
        }
        if self.no_grid {
            plot.set_labels(x_label, y_label);
        } else {
            plot.grid_and_labels(x_label, y_label);
        }
        plot.legend();
        plot.save(filepath)?;
        Ok(())
    }
}

/// Returns the label of a derived component, e.g., "cauchy 11"
fn component_label(response: &StressResponse, index: usize) -> String {
    match response.components.get(index) {
        Some(c) => format!(
            "{} {}{}",
            response.options.stress_type.name(),
            c.component.0 + 1,
            c.component.1 + 1
        ),
        None => response.options.stress_type.name().to_string(),
    }
}

/// Saves the figure of an evaluation (used when the plot option is set)
pub(crate) fn plot_response(strain: &StrainInput, response: &StressResponse) -> Result<String> {
    let path = match &response.options.plot_path {
        Some(p) => p.clone(),
        None => default_plot_path(&response.model, response.options.protocol),
    };
    let mut plotter = StressPlotter::new();
    plotter.draw_response(strain, response);
    let y_label = format!("{} stress", response.options.stress_type.name());
    plotter.save(response.options.strain_type.name(), &y_label, &path)?;
    Ok(path)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
