// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    /// One step of the quadratic recurrence, `self² + c`.
    ///
    /// The operand order is fixed so that every platform rounds the same way:
    /// `real = re*re - im*im + c.re` and `imag = 2*re*im + c.im`.
    #[must_use]
    #[inline]
    pub fn square_plus(self, c: Self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag + c.real,
            imag: 2.0 * self.real * self.imag + c.imag,
        }
    }

    /// True when either component lies strictly outside `[-bound, bound]`.
    ///
    /// NaN compares false against everything, so a NaN component never
    /// counts as outside.
    #[must_use]
    #[inline]
    pub fn outside_square(&self, bound: f64) -> bool {
        self.real < -bound || bound < self.real || self.imag < -bound || bound < self.imag
    }
}
