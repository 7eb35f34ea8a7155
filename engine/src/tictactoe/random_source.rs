/// The two random draws a difficulty-weighted move needs. Injected so that
/// callers can replay a seeded session or script the draws outright.
pub trait RandomSource {
    /// Uniform index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn selector(&mut self) -> f64;
}
