use crate::{
    adaptor::Adaptor,
    element::{Handle, EH, FH, VH},
    error::Error,
    mesh::{check_face, QuadMeshT},
};
use std::collections::{hash_map::Entry, HashMap};

/// Tracks how many of the two sides of an edge have been claimed by faces
/// while the edge table is being built.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeSides {
    Unvisited,
    FirstSideAssigned(FH),
    BothSidesAssigned(FH, FH),
}

impl EdgeSides {
    /// Claim the next free side of the edge for the face `f`. Returns `None`
    /// if both sides are already taken.
    fn assign(self, f: FH) -> Option<Self> {
        match self {
            EdgeSides::Unvisited => Some(EdgeSides::FirstSideAssigned(f)),
            EdgeSides::FirstSideAssigned(first) => Some(EdgeSides::BothSidesAssigned(first, f)),
            EdgeSides::BothSidesAssigned(..) => None,
        }
    }
}

/// An undirected edge of a quad mesh, along with the faces incident on it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    /// The vertices of the edge, in the order in which the first incident
    /// face traverses them.
    pub vertices: [VH; 2],
    pub sides: EdgeSides,
}

impl Edge {
    /// The face that first claimed this edge.
    pub fn first_face(&self) -> Option<FH> {
        match self.sides {
            EdgeSides::Unvisited => None,
            EdgeSides::FirstSideAssigned(f) | EdgeSides::BothSidesAssigned(f, _) => Some(f),
        }
    }

    /// The second face incident on this edge, if any.
    pub fn second_face(&self) -> Option<FH> {
        match self.sides {
            EdgeSides::BothSidesAssigned(_, f) => Some(f),
            _ => None,
        }
    }

    /// An edge is on the boundary if only one face is incident on it.
    pub fn is_boundary(&self) -> bool {
        matches!(self.sides, EdgeSides::FirstSideAssigned(_))
    }
}

/// The deduplicated edges of a quad mesh, derived from its faces.
///
/// Edges are numbered in the order in which they are first encountered while
/// walking the faces in order, and the corners of each face in order. So the
/// numbering is deterministic for a given face list.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    edges: Vec<Edge>,
    /// For each face, the edge going out of each corner of the face.
    face_edges: Vec<[EH; 4]>,
}

impl EdgeTable {
    /// Build the edge table from a list of quad faces.
    ///
    /// This fails if a face does not reference 4 distinct vertices that are
    /// less than `nverts`, if an edge is shared by more than two faces, or if
    /// two faces sharing an edge don't agree on the winding.
    pub fn build(faces: &[[VH; 4]], nverts: usize) -> Result<Self, Error> {
        // Euler's formula for closed quad meshes gives twice as many edges as
        // faces. Open meshes have a bit more than that.
        let mut lookup: HashMap<(VH, VH), EH> = HashMap::with_capacity(faces.len() * 2);
        let mut edges: Vec<Edge> = Vec::with_capacity(faces.len() * 2);
        let mut face_edges: Vec<[EH; 4]> = Vec::with_capacity(faces.len());
        for (fi, fverts) in faces.iter().enumerate() {
            let f: FH = (fi as u32).into();
            check_face(f, fverts, nverts)?;
            let mut fedges = [EH::default(); 4];
            for (i, fedge) in fedges.iter_mut().enumerate() {
                let (a, b) = (fverts[i], fverts[(i + 1) % 4]);
                let key = if a < b { (a, b) } else { (b, a) };
                let e = match lookup.entry(key) {
                    Entry::Vacant(entry) => {
                        let e: EH = (edges.len() as u32).into();
                        edges.push(Edge {
                            vertices: [a, b],
                            sides: EdgeSides::Unvisited,
                        });
                        *entry.insert(e)
                    }
                    Entry::Occupied(entry) => *entry.get(),
                };
                let edge = &mut edges[e.index() as usize];
                edge.sides = edge.sides.assign(f).ok_or(Error::NonManifoldEdge(a, b))?;
                if edge.second_face().is_some() && edge.vertices == [a, b] {
                    // Both faces walk the edge in the same direction.
                    return Err(Error::InconsistentWinding(a, b));
                }
                *fedge = e;
            }
            face_edges.push(fedges);
        }
        Ok(EdgeTable { edges, face_edges })
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterator over all the edges.
    pub fn edges(&self) -> impl Iterator<Item = EH> + use<> {
        (0..self.edges.len() as u32).map(EH::from)
    }

    pub fn edge(&self, e: EH) -> &Edge {
        &self.edges[e.index() as usize]
    }

    /// All edges in the order of their indices.
    pub fn edge_list(&self) -> &[Edge] {
        &self.edges
    }

    /// The edges of the face `f`. The `i`-th edge goes from the `i`-th corner
    /// of the face to the next corner.
    pub fn face_edges(&self, f: FH) -> [EH; 4] {
        self.face_edges[f.index() as usize]
    }

    /// Iterator over the edges that have only one incident face.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EH> + use<'_> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.is_boundary())
            .map(|(ei, _)| (ei as u32).into())
    }

    /// Check if every edge has exactly two incident faces.
    pub fn is_closed(&self) -> bool {
        self.edges
            .iter()
            .all(|edge| matches!(edge.sides, EdgeSides::BothSidesAssigned(..)))
    }
}

impl<const DIM: usize, A> QuadMeshT<DIM, A>
where
    A: Adaptor<DIM>,
{
    /// Derive the edges of this mesh from its faces.
    pub fn edge_table(&self) -> Result<EdgeTable, Error> {
        EdgeTable::build(&self.faces, self.num_vertices())
    }
}
