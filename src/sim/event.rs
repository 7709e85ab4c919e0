use super::result::{Sample, SimulationResult};

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Apex,
    Landing,
    Altitude { altitude: f64, ascending: bool },
}

/// A discrete event located at a recorded sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightEvent {
    pub index: usize,
    pub time: f64,
    pub kind: EventKind,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

/// Fires once, on the last sample before height starts to decrease.
#[derive(Default)]
pub struct ApexDetector {
    candidate: Option<Sample>,
    fired: bool,
}

impl ApexDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventDetector for ApexDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if current.pos.y > prev.pos.y {
            self.candidate = Some(*current);
            return None;
        }
        // Reported on the sample after the peak; `detect_events` rewinds it.
        if self.candidate.is_some() {
            self.fired = true;
            return Some(EventKind::Apex);
        }
        None
    }
}

/// Detects when height crosses a threshold (ascending or descending).
pub struct AltitudeDetector {
    pub altitude: f64,
    pub ascending: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: f64, ascending: bool) -> Self {
        Self { altitude, ascending, fired: false }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.ascending {
            prev.pos.y < self.altitude && current.pos.y >= self.altitude
        } else {
            prev.pos.y > self.altitude && current.pos.y <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Altitude {
                altitude: self.altitude,
                ascending: self.ascending,
            })
        } else {
            None
        }
    }
}

/// Fires once, on the first sample below launch height. A sample sitting
/// exactly on the ground after a descent also counts, which is where an
/// interpolated landing ends up.
#[derive(Default)]
pub struct LandingDetector {
    fired: bool,
}

impl LandingDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventDetector for LandingDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired || prev.pos.y < 0.0 {
            return None;
        }
        let touched = current.pos.y < 0.0 || (current.pos.y == 0.0 && prev.pos.y > 0.0);
        if touched {
            self.fired = true;
            Some(EventKind::Landing)
        } else {
            None
        }
    }
}

/// Run every detector over consecutive sample pairs of `result`.
/// Events come back in sample order.
pub fn detect_events(
    result: &SimulationResult,
    detectors: &mut [Box<dyn EventDetector>],
) -> Vec<FlightEvent> {
    let samples: Vec<Sample> = result.samples().collect();
    let mut events = Vec::new();

    for pair in samples.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                let at = if kind == EventKind::Apex { &pair[0] } else { &pair[1] };
                events.push(FlightEvent {
                    index: at.index,
                    time: at.time,
                    kind,
                });
            }
        }
    }

    events.sort_by_key(|e| e.index);
    events
}

/// Apex and landing detectors.
pub fn default_detectors() -> Vec<Box<dyn EventDetector>> {
    vec![Box::new(ApexDetector::new()), Box::new(LandingDetector::new())]
}
