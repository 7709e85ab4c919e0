use serde::{Deserialize, Serialize};

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Launch and physical parameters for a single run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub initial_speed: f64,      // m/s
    pub launch_angle_deg: f64,   // degrees above horizontal
    pub mass: f64,               // kg
    pub air_density: f64,        // kg/m^3
    pub drag_coefficient: f64,   // dimensionless
    pub cross_section_area: f64, // m^2
    pub time_step: f64,          // s
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_speed: 100.0,
            launch_angle_deg: 45.0,
            mass: 1.0,
            air_density: 1.29,
            drag_coefficient: 0.15,
            cross_section_area: 0.01,
            time_step: 0.01,
        }
    }
}

impl SimulationParameters {
    /// Same launch with drag switched off.
    pub fn vacuum(self) -> Self {
        Self {
            air_density: 0.0,
            drag_coefficient: 0.0,
            cross_section_area: 0.0,
            ..self
        }
    }

    /// Same launch integrated with a different step size.
    pub fn with_time_step(self, time_step: f64) -> Self {
        Self { time_step, ..self }
    }

    /// Combined drag constant 0.5 * rho * Cd * A.
    pub fn drag_factor(&self) -> f64 {
        0.5 * self.air_density * self.drag_coefficient * self.cross_section_area
    }

    /// Named fields in form order.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("initial_speed", self.initial_speed),
            ("launch_angle_deg", self.launch_angle_deg),
            ("mass", self.mass),
            ("air_density", self.air_density),
            ("drag_coefficient", self.drag_coefficient),
            ("cross_section_area", self.cross_section_area),
            ("time_step", self.time_step),
        ]
    }

    /// Checks that the values describe a physical, terminating run.
    pub fn validate(&self) -> Result<(), SimError> {
        self.check_finite()?;

        if self.time_step <= 0.0 {
            return Err(SimError::NonTerminationRisk {
                time_step: self.time_step,
            });
        }
        positive("initial_speed", self.initial_speed)?;
        positive("mass", self.mass)?;
        non_negative("air_density", self.air_density)?;
        non_negative("drag_coefficient", self.drag_coefficient)?;
        non_negative("cross_section_area", self.cross_section_area)?;
        Ok(())
    }

    pub(crate) fn check_finite(&self) -> Result<(), SimError> {
        match self.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            Some((field, value)) => Err(SimError::Validation {
                field,
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SimError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SimError::OutOfRange {
            field,
            value,
            constraint: "> 0",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SimError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::OutOfRange {
            field,
            value,
            constraint: ">= 0",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn zero_step_is_non_termination_risk() {
        let p = SimulationParameters::default().with_time_step(0.0);
        assert!(matches!(
            p.validate(),
            Err(SimError::NonTerminationRisk { .. })
        ));
    }

    #[test]
    fn nan_is_rejected_before_range_checks() {
        let p = SimulationParameters {
            mass: f64::NAN,
            time_step: -1.0,
            ..Default::default()
        };
        match p.validate() {
            Err(SimError::Validation { field, .. }) => assert_eq!(field, "mass"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn negative_density_out_of_range() {
        let p = SimulationParameters {
            air_density: -0.1,
            ..Default::default()
        };
        match p.validate() {
            Err(SimError::OutOfRange { field, .. }) => assert_eq!(field, "air_density"),
            other => panic!("expected out-of-range error, got {:?}", other),
        }
    }

    #[test]
    fn vacuum_zeroes_drag_factor() {
        assert_eq!(SimulationParameters::default().vacuum().drag_factor(), 0.0);
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let p: SimulationParameters =
            serde_json::from_str(r#"{ "initial_speed": 50.0, "time_step": 0.001 }"#).unwrap();
        assert_eq!(p.initial_speed, 50.0);
        assert_eq!(p.time_step, 0.001);
        assert_eq!(p.launch_angle_deg, 45.0);
    }
}
