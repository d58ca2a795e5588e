/*!
This crate refines closed quadrilateral meshes using one pass of
[Catmull-Clark
subdivision](https://en.wikipedia.org/wiki/Catmull%E2%80%93Clark_subdivision_surface)
at a time.

# Overview

+ A quad mesh is stored as a flat list of vertex positions and a list of faces,
  each made of four vertex indices. The edges and the incidence between the
  vertices, edges and faces are derived from the faces when they are needed.

+ The generic quad mesh type [`QuadMeshT<DIM, A>`] can be used with custom
  geometric types. To use it with your own vector type, you must provide an
  implementation of [`Adaptor`] that tells this crate how to work with it.
  Subdivision additionally needs [`FloatScalarAdaptor`], and computing face
  normals needs [`CrossProductAdaptor`].

+ Optionally, this crate provides builtin adaptor implementations and concrete
  mesh types that use the [`glam`](https://crates.io/crates/glam) crate. These
  can be found in the `use_glam` module, and require the `use_glam` feature,
  which is enabled by default.

+ Subdividing a mesh never modifies it. A new mesh is returned with one vertex
  for every face, edge and vertex of the input, and four quads for every input
  quad. Meshes with a boundary are rejected with
  [`Error::UnsupportedBoundary`], unless [`BoundaryRule::Crease`] is chosen in
  the [`SubdivideOptions`].
*/

mod macros;

mod adaptor;
mod adjacency;
mod check;
mod edge;
mod element;
mod error;
mod math;
mod mesh;
mod obj;
mod options;
mod primitive;
mod subdiv;

#[cfg(feature = "use_glam")]
pub mod use_glam;

pub use adaptor::{Adaptor, CrossProductAdaptor, FloatScalarAdaptor};
pub use edge::{Edge, EdgeSides, EdgeTable};
pub use element::{Handle, EH, FH, VH};
pub use error::Error;
pub use mesh::QuadMeshT;
pub use options::{BoundaryRule, SubdivideOptions};
pub use subdiv::subdivide;
