use glam::f64::DVec2;

/// Position and velocity of a body, in meters and meters per second.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PV {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl PV {
    pub fn zero() -> Self {
        PV {
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
        }
    }

    pub fn new(pos: impl Into<DVec2>, vel: impl Into<DVec2>) -> Self {
        PV {
            pos: pos.into(),
            vel: vel.into(),
        }
    }

    /// Distance from the coordinate origin.
    pub fn radius(&self) -> f64 {
        self.pos.length()
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    pub fn filter_numerr(&self) -> Option<Self> {
        if !self.pos.is_finite() || !self.vel.is_finite() {
            None
        } else {
            Some(*self)
        }
    }
}

impl std::fmt::Display for PV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P({:0.3}, {:0.3}) V({:0.3}, {:0.3})",
            self.pos.x, self.pos.y, self.vel.x, self.vel.y
        )
    }
}

impl Into<PV> for ((f64, f64), (f64, f64)) {
    fn into(self) -> PV {
        let r: DVec2 = self.0.into();
        let v: DVec2 = self.1.into();
        PV::new(r, v)
    }
}

impl Into<PV> for (DVec2, DVec2) {
    fn into(self) -> PV {
        PV::new(self.0, self.1)
    }
}

pub fn write_csv(
    filename: &std::path::Path,
    signals: &[(&str, &[f64])],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(filename)?;

    let titles = signals.iter().map(|s| s.0);

    writer.write_record(titles)?;

    for i in 0.. {
        let iter = signals
            .iter()
            .map(|s| s.1.get(i))
            .map(|s| s.map(|e| format!("{:0.5}", e)))
            .collect::<Option<Vec<_>>>();
        if let Some(row) = iter {
            writer.write_record(row)?;
        } else {
            break;
        }
    }

    writer.flush()?;

    Ok(())
}
