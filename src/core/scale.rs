use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Domain covering `values` and zero, with an upper bound of at least 1.
    pub fn from_zero_based_values(values: &[f64]) -> ChartResult<Self> {
        let min = values.iter().copied().fold(0.0, f64::min);
        let max = values.iter().copied().fold(1.0, f64::max);
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` so that the domain start lands on `pixel_start`.
    pub fn domain_to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(pixel_start + normalized * (pixel_end - pixel_start))
    }

    /// Evenly spaced values from domain start to domain end, both included.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.domain_start];
        }
        let step = (self.domain_end - self.domain_start) / (count - 1) as f64;
        (0..count)
            .map(|i| self.domain_start + step * i as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;
    use approx::assert_relative_eq;

    #[test]
    fn maps_inverted_pixel_spans() {
        let scale = LinearScale::new(0.0, 100.0).expect("scale");
        let y = scale.domain_to_pixel(25.0, 400.0, 0.0).expect("map");
        assert_relative_eq!(y, 300.0);
    }

    #[test]
    fn zero_based_domain_has_unit_floor() {
        let scale = LinearScale::from_zero_based_values(&[]).expect("scale");
        assert_eq!(scale.domain(), (0.0, 1.0));
        let scale = LinearScale::from_zero_based_values(&[-4.0, 12.0]).expect("scale");
        assert_eq!(scale.domain(), (-4.0, 12.0));
    }

    #[test]
    fn ticks_include_both_ends() {
        let scale = LinearScale::new(0.0, 80.0).expect("scale");
        assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    }
}
