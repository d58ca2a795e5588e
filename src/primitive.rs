use crate::{
    adaptor::{Adaptor, FloatScalarAdaptor},
    element::VH,
    error::Error,
    mesh::QuadMeshT,
};

impl<A> QuadMeshT<3, A>
where
    A: Adaptor<3>,
{
    /// Makes a box with the following topology, spanning from the min point to
    /// the max point. All faces are wound counter-clockwise when viewed from
    /// outside the box.
    ///
    ///  ```text
    ///       7-----------6
    ///      /|          /|
    ///     / |         / |
    ///    4-----------5  |
    ///    |  |        |  |
    ///    |  3--------|--2
    ///    | /         | /
    ///    |/          |/
    ///    0-----------1
    ///  ```
    pub fn quad_box(min: A::Vector, max: A::Vector) -> Result<Self, Error> {
        const BOX_POS: [(bool, bool, bool); 8] = [
            (false, false, false),
            (true, false, false),
            (true, true, false),
            (false, true, false),
            (false, false, true),
            (true, false, true),
            (true, true, true),
            (false, true, true),
        ];
        const BOX_IDX: [[u32; 4]; 6] = [
            [0, 3, 2, 1],
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
            [4, 5, 6, 7],
        ];
        let pos: Vec<A::Vector> = BOX_POS
            .iter()
            .map(|&(xf, yf, zf)| {
                A::vector([
                    A::vector_coord(if xf { &max } else { &min }, 0),
                    A::vector_coord(if yf { &max } else { &min }, 1),
                    A::vector_coord(if zf { &max } else { &min }, 2),
                ])
            })
            .collect();
        Self::from_buffers(pos, &BOX_IDX)
    }

    /// Create a box with quadrilateral faces, of size 1, spanning from the
    /// origin to (1, 1, 1).
    pub fn unit_box() -> Result<Self, Error>
    where
        A: FloatScalarAdaptor<3>,
    {
        Self::quad_box(
            A::vector([A::scalarf64(0.0); 3]),
            A::vector([A::scalarf64(1.0); 3]),
        )
    }

    /// Create a flat grid of `nx` by `ny` quads, spanning the rectangle
    /// between `min` and `max` in the XY plane, at the height of `min`. The
    /// faces are wound counter-clockwise when viewed from above. Vertex `(i,
    /// j)` of the grid has the index `j * (nx + 1) + i`.
    ///
    /// The grid has a boundary, so it can only be subdivided with
    /// [`BoundaryRule::Crease`](crate::BoundaryRule::Crease).
    pub fn quad_grid(min: A::Vector, max: A::Vector, nx: u32, ny: u32) -> Result<Self, Error>
    where
        A: FloatScalarAdaptor<3>,
    {
        let lerp = |axis: usize, i: u32, n: u32| {
            let (lo, hi) = (
                A::to_f64(A::vector_coord(&min, axis)),
                A::to_f64(A::vector_coord(&max, axis)),
            );
            A::scalarf64(lo + (hi - lo) * (i as f64) / (n.max(1) as f64))
        };
        let z = A::vector_coord(&min, 2);
        let mut mesh = Self::with_capacity(((nx + 1) * (ny + 1)) as usize, (nx * ny) as usize);
        for j in 0..=ny {
            for i in 0..=nx {
                mesh.add_vertex(A::vector([lerp(0, i, nx), lerp(1, j, ny), z]))?;
            }
        }
        let vertex = |i: u32, j: u32| -> VH { (j * (nx + 1) + i).into() };
        for j in 0..ny {
            for i in 0..nx {
                mesh.add_quad_face(
                    vertex(i, j),
                    vertex(i + 1, j),
                    vertex(i + 1, j + 1),
                    vertex(i, j + 1),
                )?;
            }
        }
        Ok(mesh)
    }
}

#[cfg(test)]
mod test {
    use crate::{element::VH, use_glam::QuadMeshF64};

    #[test]
    fn t_quad_box() {
        let qbox = QuadMeshF64::quad_box(glam::dvec3(-1.0, -2.0, -3.0), glam::dvec3(1.0, 2.0, 3.0))
            .expect("Cannot create box");
        assert_eq!((8, 6), (qbox.num_vertices(), qbox.num_faces()));
        assert_eq!(glam::dvec3(-1.0, -2.0, -3.0), qbox.points()[0]);
        assert_eq!(glam::dvec3(1.0, 2.0, 3.0), qbox.points()[6]);
        for f in qbox.faces() {
            // Normals point away from the center.
            let n = qbox.calc_face_normal(f).expect("Cannot compute normal");
            let c = qbox.calc_face_centroid(f).expect("Cannot compute centroid");
            assert!(n.dot(c) > 0.0);
        }
    }

    #[test]
    fn t_quad_grid() {
        let grid = QuadMeshF64::quad_grid(glam::dvec3(0.0, 0.0, 1.0), glam::dvec3(2.0, 1.0, 5.0), 4, 2)
            .expect("Cannot create grid");
        assert_eq!((15, 8), (grid.num_vertices(), grid.num_faces()));
        assert_eq!(glam::dvec3(0.5, 0.5, 1.0), grid.points()[6]);
        assert_eq!(glam::dvec3(2.0, 1.0, 1.0), grid.points()[14]);
        let expected: [VH; 4] = [0.into(), 1.into(), 6.into(), 5.into()];
        assert_eq!(expected, grid.face_list()[0]);
        for f in grid.faces() {
            let n = grid.calc_face_normal(f).expect("Cannot compute normal");
            assert!(n.z > 0.0);
        }
    }
}
