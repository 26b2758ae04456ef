//! Tunables threaded through the trapezoidation driver and the mountain
//! triangulator.

#[derive(Debug, Clone)]
pub struct TriangulationConfig {
    /// Upper bound, in degrees, on the angle an ear is allowed to have
    /// before the triangulator prefers to skip it in favour of a narrower
    /// one. Relaxed automatically if no ear in a mountain satisfies it.
    pub angle_threshold_degrees: f64,

    /// Margin, in degrees, by which `angle_threshold_degrees` is relaxed on
    /// a retry once every candidate ear has been rejected.
    pub angle_epsilon_degrees: f64,

    /// Seed for the edge-insertion permutation. `None` uses entropy from
    /// `rand::rng()`; `Some(seed)` makes the permutation (and hence the
    /// exact trapezoidation, though not the covered area) reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            angle_threshold_degrees: 150.0,
            angle_epsilon_degrees: 0.1,
            rng_seed: None,
        }
    }
}
