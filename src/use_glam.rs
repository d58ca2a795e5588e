/*!
This is an optional module that is enabled by the `use_glam` feature. It
provides mesh types that can be used out of the box, that use
[`glam`](https://docs.rs/glam/latest/glam/) to represent the geometry.
*/

use crate::{
    adaptor::{Adaptor, CrossProductAdaptor, FloatScalarAdaptor},
    mesh,
};

/// Built-in adaptor for meshes that use 32-bit floating point numbers to
/// represent the geometry of the mesh.
pub struct BuiltInAdaptorF32 {}

impl Adaptor<3> for BuiltInAdaptorF32 {
    type Vector = glam::Vec3;
    type Scalar = f32;

    fn vector(coords: [Self::Scalar; 3]) -> Self::Vector {
        glam::vec3(coords[0], coords[1], coords[2])
    }

    fn zero_vector() -> Self::Vector {
        glam::Vec3::ZERO
    }

    fn vector_coord(v: &Self::Vector, i: usize) -> Self::Scalar {
        v[i]
    }
}

impl CrossProductAdaptor for BuiltInAdaptorF32 {
    fn cross_product(a: Self::Vector, b: Self::Vector) -> Self::Vector {
        a.cross(b)
    }
}

impl FloatScalarAdaptor<3> for BuiltInAdaptorF32 {
    fn scalarf64(val: f64) -> Self::Scalar {
        val as f32
    }

    fn to_f64(val: Self::Scalar) -> f64 {
        val as f64
    }
}

/// Built-in adaptor for meshes that use 64-bit floating point numbers to
/// represent the geometry of the mesh.
pub struct BuiltInAdaptorF64 {}

impl Adaptor<3> for BuiltInAdaptorF64 {
    type Vector = glam::DVec3;
    type Scalar = f64;

    fn vector(coords: [Self::Scalar; 3]) -> Self::Vector {
        glam::dvec3(coords[0], coords[1], coords[2])
    }

    fn zero_vector() -> Self::Vector {
        glam::DVec3::ZERO
    }

    fn vector_coord(v: &Self::Vector, i: usize) -> Self::Scalar {
        v[i]
    }
}

impl CrossProductAdaptor for BuiltInAdaptorF64 {
    fn cross_product(a: Self::Vector, b: Self::Vector) -> Self::Vector {
        a.cross(b)
    }
}

impl FloatScalarAdaptor<3> for BuiltInAdaptorF64 {
    fn scalarf64(val: f64) -> Self::Scalar {
        val
    }

    fn to_f64(val: Self::Scalar) -> f64 {
        val
    }
}

/// Quad mesh that uses 32 bit floating point numbers to represent the
/// geometry.
pub type QuadMeshF32 = mesh::QuadMeshT<3, BuiltInAdaptorF32>;

/// Quad mesh that uses 64 bit floating point numbers to represent the
/// geometry.
pub type QuadMeshF64 = mesh::QuadMeshT<3, BuiltInAdaptorF64>;
