/// Set of traits shared by geometric primitives
pub mod geo_traits;

/// Primitive geometric shapes
pub mod primitives;
