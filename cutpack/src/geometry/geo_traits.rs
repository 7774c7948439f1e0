use crate::fsize;

/// Trait for types that can detect a positive-area overlap between `Self` and `T`.
///
/// Touching edges or corners do not count as an overlap.
pub trait Intersects<T> {
    fn intersects(&self, other: &T) -> bool;
}

/// Trait for types that can fully contain `T`, boundaries included.
pub trait Encloses<T> {
    fn encloses(&self, other: &T) -> bool;
}

/// Trait for shared properties of rectangular shapes.
pub trait Shape {
    fn width(&self) -> fsize;

    fn height(&self) -> fsize;

    /// Area of the interior of the shape
    fn area(&self) -> fsize {
        self.width() * self.height()
    }
}
