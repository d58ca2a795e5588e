use crate::element::{FH, VH};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    // Topology.
    /// The face does not reference exactly four distinct, existing vertices.
    #[error("{0} does not reference four distinct existing vertices")]
    InvalidFace(FH),
    /// The edge between the two vertices is shared by more than two faces.
    #[error("Edge ({0}, {1}) is shared by more than two faces")]
    NonManifoldEdge(VH, VH),
    /// Two faces traverse the edge between these vertices in the same
    /// direction, i.e. their winding is not consistent.
    #[error("Faces sharing edge ({0}, {1}) have inconsistent winding")]
    InconsistentWinding(VH, VH),
    /// The vertex is not referenced by any face, or is an interior vertex
    /// with fewer than 3 incident edges.
    #[error("{0} is unused or has fewer than 3 incident edges")]
    DegenerateVertex(VH),
    /// The edge borders only one face, and boundaries were not allowed.
    #[error("Edge ({0}, {1}) is on the boundary, which is not supported")]
    UnsupportedBoundary(VH, VH),
    #[error("Element index out of bounds")]
    OutOfBoundsAccess,
    // Obj.
    #[error("Face with {0} vertices found where only quads are supported")]
    NonQuadFace(usize),
    #[error("Failed to load obj: {0}")]
    ObjLoadFailed(String),
    #[error("Number of coordinates {0} is not a multiple of 3")]
    IncorrectNumberOfCoordinates(usize),
}
