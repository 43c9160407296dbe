use crate::Vector3;

/// A pair of vectors used by the reflection math.
///
/// [`Ray::reflect`] mirrors `start` about the axis held in `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub start: Vector3,
    pub end: Vector3,
}

impl Ray {
    /// Pair a vector with the axis it will be mirrored about.
    pub fn new(start: Vector3, end: Vector3) -> Self {
        Self { start, end }
    }

    /// Mirror `start` about the axis held in `end`.
    ///
    /// With `start = v` and `end = n` this is `2·n·(n·v) − v`, the reflection
    /// of `v` about the normal `n`.
    pub fn reflect(&self) -> Vector3 {
        let Self { start, end } = *self;
        end.multiply_scalar(2.0)
            .multiply_scalar(end.dot(start))
            .minus_vector(start)
    }
}

/// Reflect `v` about the normal `n`.
#[inline]
pub fn reflect(v: Vector3, n: Vector3) -> Vector3 {
    Ray::new(v, n).reflect()
}
