//! Quantum register with stochastic measurement

use crate::error::{Result, StateError};
use num_complex::Complex64;
use rand::Rng;

/// Smallest supported register size in qubits
pub const MIN_QUBITS: usize = 2;

/// Largest supported register size in qubits
///
/// The amplitude vector holds 2^size complex numbers; the cap keeps that
/// allocation bounded.
pub const MAX_QUBITS: usize = 8;

/// A quantum register of 2 to 8 qubits
///
/// Owns the full 2^n-length complex amplitude vector, indexed by the
/// integer whose bit *q* equals the value of qubit *q*. Instructions mutate
/// the register by wholesale replacement of the amplitude vector; between
/// completed instructions the squared magnitudes sum to 1.
///
/// # Example
/// ```
/// use qreg_state::QRegister;
///
/// let register = QRegister::new(3).unwrap();
/// assert_eq!(register.size(), 3);
/// assert_eq!(register.dimension(), 8);
/// assert_eq!(register.amplitudes()[0].re, 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct QRegister {
    size: usize,
    amplitudes: Vec<Complex64>,
}

impl QRegister {
    /// Create a register of `size` qubits in the all-zero basis state
    ///
    /// # Errors
    /// Returns [`StateError::InvalidSize`] unless 2 ≤ size ≤ 8.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_QUBITS..=MAX_QUBITS).contains(&size) {
            return Err(StateError::InvalidSize { size });
        }

        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << size];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self { size, amplitudes })
    }

    /// Number of qubits
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the amplitude vector (2^size)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// The amplitude of every basis index
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Replace the amplitude vector after a completed instruction scan
    ///
    /// Instructions must build the replacement in full before installing it:
    /// each old amplitude feeds two destination cells, so partial visibility
    /// of the new vector would corrupt later reads.
    pub(crate) fn replace_amplitudes(&mut self, next: Vec<Complex64>) {
        debug_assert_eq!(next.len(), self.amplitudes.len());
        self.amplitudes = next;
    }

    /// Measurement probability of every basis index
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Whether the squared magnitudes sum to 1 within `epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() < epsilon
    }

    /// Return the register to the all-zero basis state
    pub fn reset(&mut self) {
        for amplitude in &mut self.amplitudes {
            *amplitude = Complex64::new(0.0, 0.0);
        }
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Measure the whole register, collapsing it to one basis state
    ///
    /// Draws r uniform in [0, 1) and walks the cumulative probabilities in
    /// ascending index order, returning the first index where the
    /// accumulated probability reaches r. The last index serves as the
    /// fallback so floating round-off cannot prevent termination.
    ///
    /// The collapse is destructive and irreversible: the returned index's
    /// amplitude becomes 1 and every other amplitude 0. Repeated
    /// measurements of a collapsed register are deterministic.
    ///
    /// # Example
    /// ```
    /// use qreg_state::QRegister;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut register = QRegister::new(2).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// assert_eq!(register.measure_all(&mut rng), 0);
    /// ```
    pub fn measure_all(&mut self, rng: &mut impl Rng) -> usize {
        let r: f64 = rng.gen();

        let mut outcome = self.dimension() - 1;
        let mut cumulative = 0.0;
        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            cumulative += amplitude.norm_sqr();
            if cumulative >= r {
                outcome = index;
                break;
            }
        }

        for (index, amplitude) in self.amplitudes.iter_mut().enumerate() {
            *amplitude = if index == outcome {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            };
        }

        outcome
    }

    /// Measure a single qubit, collapsing only the inconsistent amplitudes
    ///
    /// Returns the observed bit. Amplitudes whose `qubit` bit disagrees with
    /// the outcome are zeroed and the survivors renormalized, so the rest of
    /// the register keeps its (conditional) distribution.
    ///
    /// # Errors
    /// Returns [`StateError::RegisterTooSmall`] for an out-of-range index.
    pub fn measure(&mut self, qubit: usize, rng: &mut impl Rng) -> Result<bool> {
        if qubit >= self.size {
            return Err(StateError::RegisterTooSmall {
                required: qubit + 1,
                actual: self.size,
            });
        }

        let mask = 1usize << qubit;
        let p_one: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(index, _)| index & mask != 0)
            .map(|(_, amplitude)| amplitude.norm_sqr())
            .sum();

        let outcome = rng.gen::<f64>() < p_one;
        let keep = if outcome { mask } else { 0 };
        let norm = if outcome {
            p_one.sqrt()
        } else {
            (1.0 - p_one).sqrt()
        };

        for (index, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if index & mask == keep {
                *amplitude /= norm;
            } else {
                *amplitude = Complex64::new(0.0, 0.0);
            }
        }

        Ok(outcome)
    }
}
