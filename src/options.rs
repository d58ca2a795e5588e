/// How the subdivision treats edges that have only one incident face.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BoundaryRule {
    /// Fail with [`Error::UnsupportedBoundary`](crate::Error::UnsupportedBoundary)
    /// if the mesh has any boundary edges. Only closed meshes can be
    /// subdivided.
    #[default]
    Reject,
    /// Treat the boundary as a crease. Boundary edges are split at their
    /// midpoints, and boundary vertices are smoothed only along the boundary
    /// curve:
    ///
    /// ```text
    /// p' = (m0 + m1) / 4 + p / 2
    /// ```
    ///
    /// where `m0` and `m1` are the midpoints of the two boundary edges incident
    /// on the vertex. Vertices that are incident on any other number of
    /// boundary edges don't move.
    Crease,
}

/// Options for one pass of Catmull-Clark subdivision.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubdivideOptions {
    pub boundary: BoundaryRule,
    /// If this is `false`, only the topology of the mesh is refined. Edges are
    /// split at their midpoints and the original vertices are not moved, so
    /// the shape of the mesh doesn't change.
    pub update_points: bool,
}

impl Default for SubdivideOptions {
    fn default() -> Self {
        SubdivideOptions {
            boundary: BoundaryRule::Reject,
            update_points: true,
        }
    }
}

impl SubdivideOptions {
    pub fn with_boundary(mut self, boundary: BoundaryRule) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_update_points(mut self, update_points: bool) -> Self {
        self.update_points = update_points;
        self
    }
}

#[cfg(test)]
mod test {
    use super::{BoundaryRule, SubdivideOptions};

    #[test]
    fn t_options_builder() {
        let opts = SubdivideOptions::default();
        assert_eq!(BoundaryRule::Reject, opts.boundary);
        assert!(opts.update_points);
        let opts = opts
            .with_boundary(BoundaryRule::Crease)
            .with_update_points(false);
        assert_eq!(BoundaryRule::Crease, opts.boundary);
        assert!(!opts.update_points);
    }
}
