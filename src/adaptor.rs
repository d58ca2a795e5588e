/// This trait tells the crate how to work with the geometric types of your
/// choice. The mesh is generic over this adaptor, so any vector library can be
/// used to represent the positions of the vertices.
pub trait Adaptor<const DIM: usize> {
    type Vector: Clone + Copy;
    type Scalar: Clone + Copy;

    /// Create a vector from its coordinates.
    fn vector(coords: [Self::Scalar; DIM]) -> Self::Vector;

    fn zero_vector() -> Self::Vector;

    /// Get the `i`-th coordinate of the vector.
    fn vector_coord(v: &Self::Vector, i: usize) -> Self::Scalar;
}

/// Adaptor for scalar types that are floating point numbers. This is required
/// to compute the averages that make up subdivision points.
pub trait FloatScalarAdaptor<const DIM: usize>: Adaptor<DIM> {
    fn scalarf64(val: f64) -> Self::Scalar;

    fn to_f64(val: Self::Scalar) -> f64;
}

/// Adaptor for computing cross products of 3d vectors.
pub trait CrossProductAdaptor: Adaptor<3> {
    fn cross_product(a: Self::Vector, b: Self::Vector) -> Self::Vector;
}
