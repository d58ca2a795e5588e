use crate::{
    adaptor::FloatScalarAdaptor,
    adjacency::VertexAdjacency,
    edge::{EdgeSides, EdgeTable},
    element::{Handle, EH, FH, VH},
    error::Error,
    math::quad_centroid,
    mesh::QuadMeshT,
    options::{BoundaryRule, SubdivideOptions},
};
use std::{
    marker::PhantomData,
    ops::{Add, Div, Mul},
};
use tracing::{debug, info};

/// This struct doesn't contain any data. It provides a scope inside its `impl`
/// where the trait bounds are imposed once, for all the steps of the
/// subdivision.
struct CatmullClark<const DIM: usize, A>(PhantomData<A>);

impl<const DIM: usize, A> CatmullClark<DIM, A>
where
    A: FloatScalarAdaptor<DIM>,
    A::Vector: Add<Output = A::Vector>
        + Div<A::Scalar, Output = A::Vector>
        + Mul<A::Scalar, Output = A::Vector>,
{
    /// Compute one point per face, at the centroid of the face.
    fn calc_face_points(
        points: &[A::Vector],
        faces: &[[VH; 4]],
        face_points: &mut Vec<A::Vector>,
    ) {
        face_points.clear();
        face_points.extend(
            faces
                .iter()
                .map(|fverts| quad_centroid::<DIM, A>(points, fverts)),
        );
    }

    /// Compute one point per edge. Interior edges average their end points and
    /// the face points on either side. Boundary edges, and all edges when the
    /// points are not being updated, are split at their midpoints.
    fn calc_edge_points(
        points: &[A::Vector],
        edges: &EdgeTable,
        face_points: &[A::Vector],
        update_points: bool,
        edge_points: &mut Vec<A::Vector>,
    ) {
        edge_points.clear();
        edge_points.extend(edges.edge_list().iter().map(|edge| {
            let [v0, v1] = edge.vertices;
            let (p0, p1) = (points[v0.index() as usize], points[v1.index() as usize]);
            match edge.sides {
                EdgeSides::BothSidesAssigned(fa, fb) if update_points => {
                    (p0 + p1 + face_points[fa.index() as usize] + face_points[fb.index() as usize])
                        * A::scalarf64(0.25)
                }
                _ => (p0 + p1) * A::scalarf64(0.5),
            }
        }));
    }

    /// New position of a vertex all of whose edges are interior:
    ///
    /// ```text
    /// p' = (F + 2R + (n - 3)p) / n
    /// ```
    ///
    /// Where `F` is the average of the incident face points, `R` is the
    /// average of the midpoints of the incident edges, and `n` is the valence.
    fn interior_vertex_point(
        p: A::Vector,
        points: &[A::Vector],
        vfaces: &[FH],
        vedges: &[EH],
        edges: &EdgeTable,
        face_points: &[A::Vector],
    ) -> A::Vector {
        let valence = vedges.len() as f64;
        let favg = vfaces.iter().fold(A::zero_vector(), |total, f| {
            total + face_points[f.index() as usize]
        }) / A::scalarf64(vfaces.len() as f64);
        let ravg = vedges.iter().fold(A::zero_vector(), |total, e| {
            let [v0, v1] = edges.edge(*e).vertices;
            total + (points[v0.index() as usize] + points[v1.index() as usize]) * A::scalarf64(0.5)
        }) / A::scalarf64(valence);
        (favg + ravg * A::scalarf64(2.0) + p * A::scalarf64(valence - 3.0)) / A::scalarf64(valence)
    }

    /// New position of a vertex on the boundary, smoothed only along the
    /// boundary. Corners of the boundary where it is not a simple curve are
    /// left in place.
    fn boundary_vertex_point(
        p: A::Vector,
        vedges: &[EH],
        edges: &EdgeTable,
        edge_points: &[A::Vector],
    ) -> A::Vector {
        let (count, sum) = vedges
            .iter()
            .filter(|e| edges.edge(**e).is_boundary())
            .fold((0usize, A::zero_vector()), |(count, total), e| {
                (count + 1, total + edge_points[e.index() as usize])
            });
        if count == 2 {
            sum * A::scalarf64(0.25) + p * A::scalarf64(0.5)
        } else {
            p
        }
    }

    /// Compute the new positions of the original vertices.
    fn calc_vertex_points(
        points: &[A::Vector],
        edges: &EdgeTable,
        adjacency: &VertexAdjacency,
        face_points: &[A::Vector],
        edge_points: &[A::Vector],
        update_points: bool,
        vertex_points: &mut Vec<A::Vector>,
    ) -> Result<(), Error> {
        vertex_points.clear();
        vertex_points.reserve(points.len());
        for (vi, &p) in points.iter().enumerate() {
            let v: VH = (vi as u32).into();
            let vedges = adjacency.edges.get(v);
            if vedges.is_empty() {
                return Err(Error::DegenerateVertex(v));
            }
            let on_boundary = vedges.iter().any(|e| edges.edge(*e).is_boundary());
            if !on_boundary && vedges.len() < 3 {
                // The interior rule weighs `p` by `n - 3`.
                return Err(Error::DegenerateVertex(v));
            }
            vertex_points.push(if !update_points {
                p
            } else if on_boundary {
                Self::boundary_vertex_point(p, vedges, edges, edge_points)
            } else {
                Self::interior_vertex_point(
                    p,
                    points,
                    adjacency.faces.get(v),
                    vedges,
                    edges,
                    face_points,
                )
            });
        }
        Ok(())
    }
}

/// Number of vertices of the subdivided mesh. Fails if the vertices or the
/// faces of the subdivided mesh cannot be indexed with `u32`.
fn check_output_size(nfaces: usize, nedges: usize, nverts: usize) -> Result<usize, Error> {
    let npoints = nfaces
        .checked_add(nedges)
        .and_then(|n| n.checked_add(nverts))
        .ok_or(Error::OutOfBoundsAccess)?;
    let nsubfaces = nfaces.checked_mul(4).ok_or(Error::OutOfBoundsAccess)?;
    match (u32::try_from(npoints), u32::try_from(nsubfaces)) {
        (Ok(_), Ok(_)) => Ok(npoints),
        _ => Err(Error::OutOfBoundsAccess),
    }
}

/// Create the faces of the subdivided mesh. Each corner of each original face
/// becomes a new quad made of the face point, the edge point of the edge
/// coming into the corner, the new point of the corner vertex, and the edge
/// point of the edge going out of the corner. The new vertices are numbered
/// with all the face points first, then the edge points, then the vertex
/// points.
fn split_faces(faces: &[[VH; 4]], edges: &EdgeTable) -> Vec<[VH; 4]> {
    let nfaces = faces.len() as u32;
    let nedges = edges.num_edges() as u32;
    let edge_vertex = |e: EH| -> VH { (nfaces + e.index()).into() };
    let vertex_vertex = |v: VH| -> VH { (nfaces + nedges + v.index()).into() };
    let mut subfaces = Vec::with_capacity(faces.len() * 4);
    for (fi, fverts) in faces.iter().enumerate() {
        let fv: VH = (fi as u32).into();
        let fedges = edges.face_edges((fi as u32).into());
        subfaces.extend((0..4).map(|i| {
            [
                fv,
                edge_vertex(fedges[(i + 3) % 4]),
                vertex_vertex(fverts[i]),
                edge_vertex(fedges[i]),
            ]
        }));
    }
    subfaces
}

impl<const DIM: usize, A> QuadMeshT<DIM, A>
where
    A: FloatScalarAdaptor<DIM>,
    A::Vector: Add<Output = A::Vector>
        + Div<A::Scalar, Output = A::Vector>
        + Mul<A::Scalar, Output = A::Vector>,
{
    /// Subdivide the mesh once according to the [Catmull-Clark
    /// scheme](https://en.wikipedia.org/wiki/Catmull%E2%80%93Clark_subdivision_surface),
    /// with the default [`SubdivideOptions`].
    ///
    /// The mesh must be closed, and every vertex must have at least 3
    /// incident edges. This mesh is not modified, and a new finer
    /// mesh is returned. The new mesh has a vertex for every face, edge and
    /// vertex of this mesh, and four faces for every face of this mesh.
    ///
    /// ```rust
    /// use quadsub::use_glam::QuadMeshF32;
    ///
    /// let mesh = QuadMeshF32::unit_box().expect("Cannot create box");
    /// let subd = mesh.subdivide_catmull_clark().expect("Subdivision failed");
    /// assert_eq!((26, 24), (subd.num_vertices(), subd.num_faces()));
    /// assert!(subd.is_closed().expect("Invalid topology"));
    /// ```
    pub fn subdivide_catmull_clark(&self) -> Result<Self, Error> {
        self.subdivide_catmull_clark_with(&SubdivideOptions::default())
    }

    /// Subdivide the mesh once according to the Catmull-Clark scheme, with
    /// the given options.
    pub fn subdivide_catmull_clark_with(&self, opts: &SubdivideOptions) -> Result<Self, Error> {
        let nverts = self.num_vertices();
        let edges = self.edge_table()?;
        if opts.boundary == BoundaryRule::Reject {
            if let Some(e) = edges.boundary_edges().next() {
                let [v0, v1] = edges.edge(e).vertices;
                return Err(Error::UnsupportedBoundary(v0, v1));
            }
        }
        debug!(
            vertices = nverts,
            edges = edges.num_edges(),
            boundary_edges = edges.boundary_edges().count(),
            faces = self.num_faces(),
            "Indexed edges for subdivision"
        );
        let npoints = check_output_size(self.num_faces(), edges.num_edges(), nverts)?;
        let adjacency = VertexAdjacency::build(&self.faces, &edges, nverts);
        let mut fpos = Vec::with_capacity(self.num_faces());
        let mut epos = Vec::with_capacity(edges.num_edges());
        let mut vpos = Vec::with_capacity(nverts);
        CatmullClark::<DIM, A>::calc_face_points(&self.points, &self.faces, &mut fpos);
        CatmullClark::<DIM, A>::calc_edge_points(
            &self.points,
            &edges,
            &fpos,
            opts.update_points,
            &mut epos,
        );
        CatmullClark::<DIM, A>::calc_vertex_points(
            &self.points,
            &edges,
            &adjacency,
            &fpos,
            &epos,
            opts.update_points,
            &mut vpos,
        )?;
        let mut points = Vec::with_capacity(npoints);
        points.extend_from_slice(&fpos);
        points.extend_from_slice(&epos);
        points.extend_from_slice(&vpos);
        let faces = split_faces(&self.faces, &edges);
        info!(
            vertices = points.len(),
            faces = faces.len(),
            "Subdivided mesh with {} faces",
            self.num_faces()
        );
        Ok(QuadMeshT { points, faces })
    }
}

/// Subdivide the `mesh` once according to the Catmull-Clark scheme. This is
/// the same as [`QuadMeshT::subdivide_catmull_clark`].
pub fn subdivide<const DIM: usize, A>(mesh: &QuadMeshT<DIM, A>) -> Result<QuadMeshT<DIM, A>, Error>
where
    A: FloatScalarAdaptor<DIM>,
    A::Vector: Add<Output = A::Vector>
        + Div<A::Scalar, Output = A::Vector>
        + Mul<A::Scalar, Output = A::Vector>,
{
    mesh.subdivide_catmull_clark()
}
