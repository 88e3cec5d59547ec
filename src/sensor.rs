//! Light sensor abstraction used to dismiss an active alarm.

/// Trait for abstracting the ambient light sensor.
///
/// Implement this for your ADC channel. Readings are normalized to the
/// 0.0-1.0 range (0 V to full-scale voltage); use [`normalize`] to convert raw
/// conversion results. Sampling blocks until one conversion is available and
/// cannot fail - handle any hardware errors internally.
pub trait LightSensor {
    /// Returns one normalized light-intensity reading.
    fn sample(&mut self) -> f32;
}

/// Full-scale count of a 12-bit converter.
pub const ADC_FULL_SCALE_12BIT: u16 = 4095;

/// Converts a raw ADC count into a reading in `[0.0, 1.0]`.
///
/// Counts above `full_scale` clamp to 1.0; a zero `full_scale` yields 0.0.
pub fn normalize(raw: u16, full_scale: u16) -> f32 {
    if full_scale == 0 {
        return 0.0;
    }
    let reading = (raw as f32) / (full_scale as f32);
    reading.clamp(0.0, 1.0)
}

/// Returns true if `reading` is dark enough to count as a covered sensor.
#[inline]
pub fn is_covered(reading: f32, threshold: f32) -> bool {
    reading < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;

    #[test]
    fn normalize_spans_full_scale() {
        assert_eq!(normalize(0, ADC_FULL_SCALE_12BIT), 0.0);
        assert_eq!(normalize(ADC_FULL_SCALE_12BIT, ADC_FULL_SCALE_12BIT), 1.0);
        assert_eq!(normalize(u16::MAX, ADC_FULL_SCALE_12BIT), 1.0);
        assert_eq!(normalize(100, 0), 0.0);

        let half = normalize(2048, ADC_FULL_SCALE_12BIT);
        assert!((half - 0.5).abs() < 0.001);
    }

    #[test]
    fn covered_is_strictly_below_threshold() {
        assert!(is_covered(0.02, 0.06));
        assert!(!is_covered(0.06, 0.06));
        assert!(!is_covered(0.5, 0.06));
    }
}
