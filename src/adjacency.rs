use crate::{
    edge::EdgeTable,
    element::{Handle, EH, FH, VH},
};

/// Lists of elements incident on each vertex, packed into one buffer. The
/// elements incident on vertex `v` are stored at
/// `items[offsets[v]..offsets[v + 1]]`.
pub(crate) struct Incidence<H> {
    offsets: Vec<usize>,
    items: Vec<H>,
}

impl<H> Incidence<H>
where
    H: Copy + Default,
{
    /// Build the incidence lists from `(vertex, element)` pairs. The iterator
    /// is walked twice, once to count and once to fill. The elements of each
    /// vertex are kept in the order they appear in the iterator.
    fn build<I>(nverts: usize, pairs: I) -> Self
    where
        I: Iterator<Item = (VH, H)> + Clone,
    {
        let mut offsets = vec![0usize; nverts + 1];
        for (v, _) in pairs.clone() {
            offsets[v.index() as usize + 1] += 1;
        }
        for i in 0..nverts {
            offsets[i + 1] += offsets[i];
        }
        let mut items = vec![H::default(); offsets[nverts]];
        let mut cursor = offsets[..nverts].to_vec();
        for (v, h) in pairs {
            let slot = &mut cursor[v.index() as usize];
            items[*slot] = h;
            *slot += 1;
        }
        Incidence { offsets, items }
    }

    pub(crate) fn get(&self, v: VH) -> &[H] {
        let vi = v.index() as usize;
        &self.items[self.offsets[vi]..self.offsets[vi + 1]]
    }
}

/// Faces and edges incident on every vertex of a quad mesh.
pub(crate) struct VertexAdjacency {
    pub(crate) faces: Incidence<FH>,
    pub(crate) edges: Incidence<EH>,
}

impl VertexAdjacency {
    /// `faces` and `edges` must have been validated against `nverts`, which is
    /// the case for an `EdgeTable` built from the same faces.
    pub(crate) fn build(faces: &[[VH; 4]], edges: &EdgeTable, nverts: usize) -> Self {
        VertexAdjacency {
            faces: Incidence::build(
                nverts,
                faces.iter().enumerate().flat_map(|(fi, &fverts)| {
                    let f: FH = (fi as u32).into();
                    fverts.map(|v| (v, f))
                }),
            ),
            edges: Incidence::build(
                nverts,
                edges.edge_list().iter().enumerate().flat_map(|(ei, edge)| {
                    let e: EH = (ei as u32).into();
                    edge.vertices.map(|v| (v, e))
                }),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::VertexAdjacency;
    use crate::{
        element::{EH, FH},
        use_glam::QuadMeshF32,
    };

    #[test]
    fn t_box_vertex_adjacency() {
        let qbox = QuadMeshF32::unit_box().expect("Cannot create box");
        let edges = qbox.edge_table().expect("Cannot build edges");
        let adj = VertexAdjacency::build(qbox.face_list(), &edges, qbox.num_vertices());
        for v in qbox.vertices() {
            assert_eq!(3, adj.faces.get(v).len());
            assert_eq!(3, adj.edges.get(v).len());
        }
        // Vertex 0 is used by faces 0, 1 and 4.
        let expected: [FH; 3] = [0.into(), 1.into(), 4.into()];
        assert_eq!(&expected, adj.faces.get(0.into()));
        // The edges (0, 3) and (1, 0) come from the first face, and (4, 0) from
        // the second face.
        let expected: [EH; 3] = [0.into(), 3.into(), 6.into()];
        assert_eq!(&expected, adj.edges.get(0.into()));
    }
}
