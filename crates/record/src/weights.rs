//! Per-field distance weights.

/// Distance weights aligned by field position: one per real field and one
/// per discrete field.
///
/// For real fields the weight scales the squared difference (and doubles
/// as the penalty when exactly one side is missing); for discrete fields
/// it is the cost of a category mismatch. Owned by the caller and passed
/// by reference into distance computations.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    /// One weight per real field, schema order.
    real: Vec<f64>,
    /// One weight per discrete field, schema order.
    discrete: Vec<f64>,
}

impl Weights {
    /// Creates weights from per-field vectors.
    pub fn new(real: Vec<f64>, discrete: Vec<f64>) -> Self {
        Self { real, discrete }
    }

    /// Uniform weight 1.0 for every field.
    pub fn uniform(real_count: usize, discrete_count: usize) -> Self {
        Self {
            real: vec![1.0; real_count],
            discrete: vec![1.0; discrete_count],
        }
    }

    /// Weights for the real fields.
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    /// Weights for the discrete fields.
    pub fn discrete(&self) -> &[f64] {
        &self.discrete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_fills_ones() {
        let w = Weights::uniform(3, 2);
        assert_eq!(w.real(), &[1.0, 1.0, 1.0]);
        assert_eq!(w.discrete(), &[1.0, 1.0]);
    }

    #[test]
    fn new_keeps_given_values() {
        let w = Weights::new(vec![0.5, 2.0], vec![3.0]);
        assert_eq!(w.real(), &[0.5, 2.0]);
        assert_eq!(w.discrete(), &[3.0]);
    }
}
