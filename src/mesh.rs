use crate::{
    adaptor::Adaptor,
    element::{Handle, FH, VH},
    error::Error,
};
use std::{fmt::Debug, ops::Range};

/// An indexed mesh made entirely of quadrilateral faces.
///
/// The vertices are stored as a list of positions, and each face is an
/// ordered list of 4 vertices. The order of the vertices of a face defines its
/// winding, and hence its outward orientation. Every face is validated when it
/// is added, so a mesh can never reference missing vertices or have repeated
/// vertices within a face.
pub struct QuadMeshT<const DIM: usize, A>
where
    A: Adaptor<DIM>,
{
    pub(crate) points: Vec<A::Vector>,
    pub(crate) faces: Vec<[VH; 4]>,
}

impl<const DIM: usize, A> QuadMeshT<DIM, A>
where
    A: Adaptor<DIM>,
{
    /// Create a new empty mesh.
    pub fn new() -> Self {
        QuadMeshT {
            points: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a new empty mesh with space reserved for the given number of
    /// vertices and faces.
    pub fn with_capacity(nverts: usize, nfaces: usize) -> Self {
        QuadMeshT {
            points: Vec::with_capacity(nverts),
            faces: Vec::with_capacity(nfaces),
        }
    }

    /// Create a mesh from buffers of vertex positions and faces. Every face is
    /// validated, and an error is returned for the first invalid face.
    ///
    /// ```rust
    /// use quadsub::use_glam::QuadMeshF32;
    ///
    /// let mesh = QuadMeshF32::from_buffers(
    ///     vec![
    ///         glam::vec3(0.0, 0.0, 0.0),
    ///         glam::vec3(1.0, 0.0, 0.0),
    ///         glam::vec3(1.0, 1.0, 0.0),
    ///         glam::vec3(0.0, 1.0, 0.0),
    ///     ],
    ///     &[[0, 1, 2, 3]],
    /// )
    /// .expect("Cannot create mesh");
    /// assert_eq!((4, 1), (mesh.num_vertices(), mesh.num_faces()));
    /// ```
    pub fn from_buffers(points: Vec<A::Vector>, faces: &[[u32; 4]]) -> Result<Self, Error> {
        let mut mesh = QuadMeshT {
            points,
            faces: Vec::with_capacity(faces.len()),
        };
        for &[a, b, c, d] in faces {
            mesh.add_quad_face(a.into(), b.into(), c.into(), d.into())?;
        }
        Ok(mesh)
    }

    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Iterator over all the vertices of the mesh.
    pub fn vertices(&self) -> impl Iterator<Item = VH> + use<DIM, A> {
        (0..self.points.len() as u32).map(VH::from)
    }

    /// Iterator over all the faces of the mesh.
    pub fn faces(&self) -> impl Iterator<Item = FH> + use<DIM, A> {
        (0..self.faces.len() as u32).map(FH::from)
    }

    /// Positions of all the vertices, in the order of their indices.
    pub fn points(&self) -> &[A::Vector] {
        &self.points
    }

    /// Vertices of all the faces, in the order of their indices.
    pub fn face_list(&self) -> &[[VH; 4]] {
        &self.faces
    }

    pub fn point(&self, v: VH) -> Result<A::Vector, Error> {
        self.points
            .get(v.index() as usize)
            .copied()
            .ok_or(Error::OutOfBoundsAccess)
    }

    pub fn face_vertices(&self, f: FH) -> Result<[VH; 4], Error> {
        self.faces
            .get(f.index() as usize)
            .copied()
            .ok_or(Error::OutOfBoundsAccess)
    }

    pub fn add_vertex(&mut self, pos: A::Vector) -> Result<VH, Error> {
        let vi = u32::try_from(self.points.len()).map_err(|_| Error::OutOfBoundsAccess)?;
        self.points.push(pos);
        Ok(vi.into())
    }

    /// Add all the given positions as new vertices. The indices of the new
    /// vertices are returned as a contiguous range.
    pub fn add_vertices(&mut self, pos: &[A::Vector]) -> Result<Range<u32>, Error> {
        let start = u32::try_from(self.points.len()).map_err(|_| Error::OutOfBoundsAccess)?;
        let end = u32::try_from(self.points.len() + pos.len())
            .map_err(|_| Error::OutOfBoundsAccess)?;
        self.points.extend_from_slice(pos);
        Ok(start..end)
    }

    /// Add a quad face with the given vertices. The vertices must be distinct
    /// and must already exist in the mesh.
    pub fn add_quad_face(&mut self, v0: VH, v1: VH, v2: VH, v3: VH) -> Result<FH, Error> {
        let f: FH = u32::try_from(self.faces.len())
            .map_err(|_| Error::OutOfBoundsAccess)?
            .into();
        let fverts = [v0, v1, v2, v3];
        check_face(f, &fverts, self.num_vertices())?;
        self.faces.push(fverts);
        Ok(f)
    }
}

/// Check that the face references 4 distinct vertices that exist.
pub(crate) fn check_face(f: FH, fverts: &[VH; 4], nverts: usize) -> Result<(), Error> {
    for (i, v) in fverts.iter().enumerate() {
        if v.index() as usize >= nverts || fverts[(i + 1)..].contains(v) {
            return Err(Error::InvalidFace(f));
        }
    }
    Ok(())
}

impl<const DIM: usize, A> Default for QuadMeshT<DIM, A>
where
    A: Adaptor<DIM>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const DIM: usize, A> Clone for QuadMeshT<DIM, A>
where
    A: Adaptor<DIM>,
{
    fn clone(&self) -> Self {
        QuadMeshT {
            points: self.points.clone(),
            faces: self.faces.clone(),
        }
    }
}

impl<const DIM: usize, A> Debug for QuadMeshT<DIM, A>
where
    A: Adaptor<DIM>,
    A::Vector: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadMeshT")
            .field("points", &self.points)
            .field("faces", &self.faces)
            .finish()
    }
}

impl<const DIM: usize, A> PartialEq for QuadMeshT<DIM, A>
where
    A: Adaptor<DIM>,
    A::Vector: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.faces == other.faces
    }
}
