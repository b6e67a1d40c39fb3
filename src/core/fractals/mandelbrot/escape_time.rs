/// Outcome of iterating one sample point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EscapeTime {
    /// Left the bound on this 1-based step.
    Escaped(u32),
    /// Stayed bounded for every step up to the iteration cap.
    Bounded,
}
