/// Shorthand for creating a `Fraction32`.
#[macro_export]
macro_rules! Q32 {
    ($value:expr) => {
        $crate::Fraction32::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction32::new($numer, $denom)
    };
}

/// Shorthand for creating a `Fraction64`.
#[macro_export]
macro_rules! Q64 {
    ($value:expr) => {
        $crate::Fraction64::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction64::new($numer, $denom)
    };
}

/// Shorthand for creating a `Fraction128`.
#[macro_export]
macro_rules! Q128 {
    ($value:expr) => {
        $crate::Fraction128::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Fraction128::new($numer, $denom)
    };
}
