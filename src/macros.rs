/// Assert that the floating point numbers are equal within the given epsilon.
#[cfg(test)]
macro_rules! assert_float_eq {
    ($a:expr, $b:expr, $eps:expr) => {{
        // Make variables to avoid evaluating expressions multiple times.
        let a = $a;
        let b = $b;
        let eps = $eps;
        let error = (a - b).abs();
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr) => {
        $crate::macros::assert_float_eq!($a, $b, 1e-6)
    };
}

/// Assert that the 3d vectors are equal within the given epsilon, one
/// coordinate at a time.
#[cfg(test)]
macro_rules! assert_vec3_eq {
    ($a:expr, $b:expr, $eps:expr) => {{
        let a = $a;
        let b = $b;
        $crate::macros::assert_float_eq!(a.x, b.x, $eps);
        $crate::macros::assert_float_eq!(a.y, b.y, $eps);
        $crate::macros::assert_float_eq!(a.z, b.z, $eps);
    }};
    ($a:expr, $b:expr) => {
        $crate::macros::assert_vec3_eq!($a, $b, 1e-6)
    };
}

#[cfg(test)]
pub(crate) use assert_float_eq;
#[cfg(test)]
pub(crate) use assert_vec3_eq;
