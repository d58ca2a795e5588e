use std::fmt::{Debug, Display};

/**
 * All elements of the mesh implement this trait. They are identified by their
 * index.
 */
pub trait Handle {
    /**
     * The index of the element.
     */
    fn index(&self) -> u32;
}

/**
 * Vertex handle.
 */
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VH {
    idx: u32,
}

/**
 * Edge handle.
 *
 * Edges are not stored in the mesh. They are derived from the faces every
 * time they are needed, so an edge handle is only meaningful with respect to
 * the edge table it came from.
 */
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EH {
    idx: u32,
}

/**
 * Face handle.
 */
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FH {
    idx: u32,
}

macro_rules! impl_handle {
    ($type:ident, $name:literal) => {
        impl Handle for $type {
            fn index(&self) -> u32 {
                self.idx
            }
        }

        impl From<u32> for $type {
            fn from(idx: u32) -> Self {
                $type { idx }
            }
        }

        impl From<&u32> for $type {
            fn from(idx: &u32) -> Self {
                $type { idx: *idx }
            }
        }

        impl Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $name, self.idx)
            }
        }

        impl Debug for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", $name, self.idx)
            }
        }
    };
}

impl_handle!(VH, "VH");
impl_handle!(EH, "EH");
impl_handle!(FH, "FH");

#[cfg(test)]
mod test {
    use super::{Handle, EH, FH, VH};

    #[test]
    fn t_handle_display() {
        let v: VH = 3u32.into();
        let e: EH = 7u32.into();
        let f: FH = (&11u32).into();
        assert_eq!("VH(3)", format!("{}", v));
        assert_eq!("EH(7)", format!("{:?}", e));
        assert_eq!("FH(11)", f.to_string());
        assert_eq!(11, f.index());
    }
}
