//! Data-to-canvas mappings for chart axes.

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is empty.
    pub(crate) fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self, String> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(format!(
                "scale domain {}..{} is empty",
                domain.0, domain.1
            ));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Transform a domain value to a range value.
    pub(crate) fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }
}

/// Evenly spaced integer tick values covering `0..=max`.
///
/// The step is the smallest of 1, 2 or 5 times a power of ten that keeps the
/// tick count at or below `target`. The last tick is always `max`.
pub(crate) fn integer_ticks(max: u64, target: u64) -> Vec<u64> {
    let target = target.max(1);
    let mut magnitude = 1u64;
    let step = loop {
        if let Some(step) = [1, 2, 5]
            .into_iter()
            .map(|factor| factor * magnitude)
            .find(|step| max / step <= target)
        {
            break step;
        }
        magnitude *= 10;
    };

    let mut ticks: Vec<u64> = (0..=max).step_by(step as usize).collect();
    if ticks.last() != Some(&max) {
        ticks.push(max);
    }
    ticks
}
