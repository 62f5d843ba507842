//! Small numeric helpers shared by the simulation and the viewers

/// Clamped linear mapping of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Values at or above `in_max` map to `out_max`, values at or below `in_min`
/// map to `out_min`. The upper bound is tested first, so a collapsed input
/// range (`in_min == in_max`) never reaches the division.
pub fn linear_map(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if value >= in_max {
        return out_max;
    }
    if value <= in_min {
        return out_min;
    }

    let span_in = in_max - in_min;
    let span_out = out_max - out_min;

    // 0..1 position along the input span
    let scale = (value - in_min) / span_in;

    out_min + scale * span_out
}
