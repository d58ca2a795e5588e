use crate::{
    adaptor::Adaptor,
    element::{Handle, VH},
    error::Error,
    mesh::QuadMeshT,
};

impl<const DIM: usize, A> QuadMeshT<DIM, A>
where
    A: Adaptor<DIM>,
{
    /// Check the topology of the mesh.
    ///
    /// This returns an error if any face is invalid, if any edge is shared by
    /// more than two faces, if the faces don't agree on the winding, or if any
    /// vertex is not used by a face.
    pub fn check_topology(&self) -> Result<(), Error> {
        self.edge_table()?;
        let mut visited = vec![false; self.num_vertices()].into_boxed_slice();
        for v in self.faces.iter().flatten() {
            visited[v.index() as usize] = true;
        }
        match visited.iter().position(|used| !used) {
            Some(vi) => Err(Error::DegenerateVertex(VH::from(vi as u32))),
            None => Ok(()),
        }
    }

    /// Check if every edge of the mesh borders exactly two faces.
    pub fn is_closed(&self) -> Result<bool, Error> {
        Ok(self.edge_table()?.is_closed())
    }

    /// Number of unique edges in the mesh. The edges are derived from the
    /// faces, so this is not free.
    pub fn num_edges(&self) -> Result<usize, Error> {
        Ok(self.edge_table()?.num_edges())
    }

    /// `V - E + F`. This is 2 for any closed mesh of genus zero.
    pub fn euler_characteristic(&self) -> Result<i64, Error> {
        Ok(self.num_vertices() as i64 - self.num_edges()? as i64 + self.num_faces() as i64)
    }
}

#[cfg(test)]
mod test {
    use crate::{error::Error, use_glam::QuadMeshF32};

    #[test]
    fn t_box_topology() {
        let qbox = QuadMeshF32::unit_box().expect("Cannot create box");
        qbox.check_topology().expect("Topological errors found");
        assert!(qbox.is_closed().expect("Topological errors found"));
        assert_eq!(12, qbox.num_edges().expect("Cannot count edges"));
        assert_eq!(2, qbox.euler_characteristic().expect("Cannot count edges"));
    }

    #[test]
    fn t_grid_topology() {
        let grid = QuadMeshF32::quad_grid(glam::Vec3::ZERO, glam::vec3(3.0, 2.0, 0.0), 3, 2)
            .expect("Cannot create grid");
        grid.check_topology().expect("Topological errors found");
        assert!(!grid.is_closed().expect("Topological errors found"));
        assert_eq!(17, grid.num_edges().expect("Cannot count edges"));
        assert_eq!(1, grid.euler_characteristic().expect("Cannot count edges"));
    }

    #[test]
    fn t_unused_vertex() {
        let mut qbox = QuadMeshF32::unit_box().expect("Cannot create box");
        qbox.add_vertex(glam::Vec3::ONE).expect("Cannot add vertex");
        assert_eq!(
            Err(Error::DegenerateVertex(8.into())),
            qbox.check_topology()
        );
    }
}
