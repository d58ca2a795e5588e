use crate::{
    adaptor::{CrossProductAdaptor, FloatScalarAdaptor},
    element::{Handle, FH, VH},
    error::Error,
    mesh::QuadMeshT,
};
use std::ops::{Add, Mul, Sub};

/// Average of the positions of the four corners of a quad.
pub(crate) fn quad_centroid<const DIM: usize, A>(points: &[A::Vector], fverts: &[VH; 4]) -> A::Vector
where
    A: FloatScalarAdaptor<DIM>,
    A::Vector: Add<Output = A::Vector> + Mul<A::Scalar, Output = A::Vector>,
{
    fverts
        .iter()
        .fold(A::zero_vector(), |total, v| total + points[v.index() as usize])
        * A::scalarf64(0.25)
}

impl<const DIM: usize, A> QuadMeshT<DIM, A>
where
    A: FloatScalarAdaptor<DIM>,
    A::Vector: Add<Output = A::Vector> + Mul<A::Scalar, Output = A::Vector>,
{
    /// Compute the centroid of the face, i.e. the average of its vertices.
    pub fn calc_face_centroid(&self, f: FH) -> Result<A::Vector, Error> {
        let fverts = self.face_vertices(f)?;
        Ok(quad_centroid::<DIM, A>(&self.points, &fverts))
    }
}

impl<A> QuadMeshT<3, A>
where
    A: CrossProductAdaptor,
    A::Vector: Sub<Output = A::Vector>,
{
    /// Compute the normal of the face as the cross product of its diagonals.
    ///
    /// The normal is not normalized. Its length is twice the area of the quad
    /// if the quad is planar, and it points to the side from which the
    /// vertices appear counter-clockwise.
    pub fn calc_face_normal(&self, f: FH) -> Result<A::Vector, Error> {
        let [v0, v1, v2, v3] = self.face_vertices(f)?;
        let (p0, p1, p2, p3) = (
            self.point(v0)?,
            self.point(v1)?,
            self.point(v2)?,
            self.point(v3)?,
        );
        Ok(A::cross_product(p2 - p0, p3 - p1))
    }
}
