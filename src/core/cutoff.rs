// cutoff.rs - Frequency cutoff resolution

/// Validate the raw frequency argument at configuration time. Accepted
/// values: 0 (unset), a positive integer count of deviating rows, or a
/// relative frequency strictly between 0 and 1.
pub fn validate_frequency(freq: f64) -> Result<(), String> {
    if freq.is_nan() {
        return Err("Frequency must be a number".to_string());
    }
    if freq < 0.0 {
        return Err(format!(
            "Invalid frequency {}: must be a positive integer or a fraction between 0 and 1",
            freq
        ));
    }
    if freq >= 1.0 && freq.fract() != 0.0 {
        return Err(format!(
            "Invalid frequency {}: values of 1 or more must be whole sequence counts",
            freq
        ));
    }
    Ok(())
}

/// Resolve the raw frequency argument into a relative cutoff for an
/// alignment of `nrows` sequences. An integer argument means "at most this
/// many deviating rows" and depends on the row count, so the cutoff is
/// recomputed for every alignment record.
pub fn resolve_cutoff(freq: f64, nrows: usize) -> f64 {
    if freq >= 1.0 {
        freq / nrows as f64
    } else {
        freq
    }
}
