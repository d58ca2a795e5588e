use crate::{
    adaptor::{Adaptor, FloatScalarAdaptor},
    element::VH,
    error::Error,
    mesh::QuadMeshT,
};
use std::{io::BufRead, path::Path};
use tracing::warn;

impl<A> QuadMeshT<3, A>
where
    A: Adaptor<3> + FloatScalarAdaptor<3>,
{
    /// Load a quad mesh from a Wavefront OBJ file. Every face in the file
    /// must be a quad. Multiple objects in the file are merged into one mesh.
    pub fn load_obj(path: &Path) -> Result<Self, Error> {
        let (models, _) = tobj::load_obj(path, &Self::obj_load_options())
            .map_err(|e| Error::ObjLoadFailed(format!("{}", e)))?;
        Self::from_obj_models(models)
    }

    /// Load a quad mesh from a buffer containing Wavefront OBJ data. Material
    /// libraries referenced by the data are ignored.
    pub fn load_obj_buf<B: BufRead>(reader: &mut B) -> Result<Self, Error> {
        let (models, _) = tobj::load_obj_buf(reader, &Self::obj_load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })
        .map_err(|e| Error::ObjLoadFailed(format!("{}", e)))?;
        Self::from_obj_models(models)
    }

    fn obj_load_options() -> tobj::LoadOptions {
        // Quads must not be triangulated.
        tobj::LoadOptions {
            triangulate: false,
            single_index: false,
            ..Default::default()
        }
    }

    fn from_obj_models(models: Vec<tobj::Model>) -> Result<Self, Error> {
        let (nverts, nfaces) = models
            .iter()
            .fold((0usize, 0usize), |(nverts, nfaces), model| {
                let msh = &model.mesh;
                (
                    nverts + (msh.positions.len() / 3),
                    nfaces + msh.face_arities.len(),
                )
            });
        let mut outmesh = Self::with_capacity(nverts, nfaces);
        let mut positions = Vec::new();
        for model in models {
            let mesh = model.mesh;
            if mesh.positions.len() % 3 != 0 {
                return Err(Error::IncorrectNumberOfCoordinates(mesh.positions.len()));
            }
            if mesh.indices.is_empty() {
                warn!(name = %model.name, "Skipping obj model without faces");
                continue;
            }
            if mesh.face_arities.is_empty() {
                // Only triangles.
                return Err(Error::NonQuadFace(3));
            }
            if let Some(arity) = mesh.face_arities.iter().find(|a| **a != 4) {
                return Err(Error::NonQuadFace(*arity as usize));
            }
            positions.clear();
            positions.extend(mesh.positions.chunks(3).map(|triplet| {
                A::vector([
                    A::scalarf64(triplet[0]),
                    A::scalarf64(triplet[1]),
                    A::scalarf64(triplet[2]),
                ])
            }));
            let verts = outmesh.add_vertices(&positions)?;
            for quad in mesh.indices.chunks_exact(4) {
                let v = |i: usize| -> VH { (quad[i] + verts.start).into() };
                outmesh.add_quad_face(v(0), v(1), v(2), v(3))?;
            }
        }
        Ok(outmesh)
    }
}

#[cfg(test)]
mod test {
    use crate::{error::Error, use_glam::QuadMeshF32};
    use std::io::Cursor;

    const BOX_OBJ: &str = "
o box
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
v 0 0 1
v 1 0 1
v 1 1 1
v 0 1 1
f 1 4 3 2
f 1 2 6 5
f 2 3 7 6
f 3 4 8 7
f 4 1 5 8
f 5 6 7 8
";

    fn box_mesh() -> QuadMeshF32 {
        QuadMeshF32::load_obj_buf(&mut Cursor::new(BOX_OBJ.as_bytes()))
            .expect("Cannot load box obj")
    }

    #[test]
    fn t_load_box_obj() {
        let mesh = box_mesh();
        assert_eq!((8, 6), (mesh.num_vertices(), mesh.num_faces()));
        assert!(mesh.is_closed().expect("Topological errors found"));
        assert_eq!(2, mesh.euler_characteristic().expect("Cannot count edges"));
        let subd = mesh.subdivide_catmull_clark().expect("Cannot subdivide");
        assert_eq!((26, 24), (subd.num_vertices(), subd.num_faces()));
    }

    #[test]
    fn t_load_two_objects() {
        let other = "
o other
v 2 0 0
v 3 0 0
v 3 1 0
v 2 1 0
v 2 0 1
v 3 0 1
v 3 1 1
v 2 1 1
f 9 12 11 10
f 9 10 14 13
f 10 11 15 14
f 11 12 16 15
f 12 9 13 16
f 13 14 15 16
";
        let data = format!("{}{}", BOX_OBJ, other);
        let mesh = QuadMeshF32::load_obj_buf(&mut Cursor::new(data.as_bytes()))
            .expect("Cannot load obj");
        assert_eq!((16, 12), (mesh.num_vertices(), mesh.num_faces()));
        // Two disjoint boxes.
        assert_eq!(4, mesh.euler_characteristic().expect("Cannot count edges"));
    }

    #[test]
    fn t_load_triangles_fails() {
        let data = "
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
f 1 3 4
";
        assert_eq!(
            Err(Error::NonQuadFace(3)),
            QuadMeshF32::load_obj_buf(&mut Cursor::new(data.as_bytes())).map(|_| ())
        );
    }
}
