use std::path::Path;

use tracing::warn;

use super::params::SimulationParameters;
use crate::error::SimError;

// ---------------------------------------------------------------------------
// Text-entry parameter source
// ---------------------------------------------------------------------------

/// Raw text of the seven parameter entry fields, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterForm {
    pub initial_speed: String,
    pub launch_angle_deg: String,
    pub mass: String,
    pub air_density: String,
    pub drag_coefficient: String,
    pub cross_section_area: String,
    pub time_step: String,
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self::from_params(&SimulationParameters::default())
    }
}

impl ParameterForm {
    pub fn from_params(p: &SimulationParameters) -> Self {
        Self {
            initial_speed: p.initial_speed.to_string(),
            launch_angle_deg: p.launch_angle_deg.to_string(),
            mass: p.mass.to_string(),
            air_density: p.air_density.to_string(),
            drag_coefficient: p.drag_coefficient.to_string(),
            cross_section_area: p.cross_section_area.to_string(),
            time_step: p.time_step.to_string(),
        }
    }

    /// Parse every entry and validate the result.
    /// The first field that fails to parse is reported.
    pub fn parse(&self) -> Result<SimulationParameters, SimError> {
        let params = SimulationParameters {
            initial_speed: parse_field("initial_speed", &self.initial_speed)?,
            launch_angle_deg: parse_field("launch_angle_deg", &self.launch_angle_deg)?,
            mass: parse_field("mass", &self.mass)?,
            air_density: parse_field("air_density", &self.air_density)?,
            drag_coefficient: parse_field("drag_coefficient", &self.drag_coefficient)?,
            cross_section_area: parse_field("cross_section_area", &self.cross_section_area)?,
            time_step: parse_field("time_step", &self.time_step)?,
        };
        params.validate().inspect_err(|e| warn!("rejected parameters: {e}"))?;
        Ok(params)
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, SimError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => {
            warn!(field, raw, "unparseable parameter");
            Err(SimError::Validation {
                field,
                value: trimmed.to_string(),
            })
        }
    }
}

/// Load parameters from a JSON file. Absent fields keep their defaults.
pub fn load_parameters(path: impl AsRef<Path>) -> Result<SimulationParameters, SimError> {
    let text = std::fs::read_to_string(path)?;
    let params: SimulationParameters = serde_json::from_str(&text)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_parses_to_defaults() {
        let p = ParameterForm::default().parse().unwrap();
        assert_eq!(p, SimulationParameters::default());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let form = ParameterForm {
            initial_speed: "  250 ".into(),
            ..Default::default()
        };
        assert_eq!(form.parse().unwrap().initial_speed, 250.0);
    }

    #[test]
    fn reports_failing_field() {
        let form = ParameterForm {
            mass: "one kilo".into(),
            time_step: "abc".into(),
            ..Default::default()
        };
        match form.parse() {
            Err(SimError::Validation { field, value }) => {
                assert_eq!(field, "mass");
                assert_eq!(value, "one kilo");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_text_is_rejected() {
        let form = ParameterForm {
            launch_angle_deg: "inf".into(),
            ..Default::default()
        };
        assert!(matches!(form.parse(), Err(SimError::Validation { .. })));
    }

    #[test]
    fn zero_step_rejected_after_parsing() {
        let form = ParameterForm {
            time_step: "0".into(),
            ..Default::default()
        };
        assert!(matches!(
            form.parse(),
            Err(SimError::NonTerminationRisk { .. })
        ));
    }

    #[test]
    fn loads_json_file() {
        let path = std::env::temp_dir().join(format!(
            "ballistic_flight_params_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "launch_angle_deg": 30.0, "mass": 2.5 }"#).unwrap();
        let p = load_parameters(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(p.launch_angle_deg, 30.0);
        assert_eq!(p.mass, 2.5);
        assert_eq!(p.time_step, 0.01);
    }
}
