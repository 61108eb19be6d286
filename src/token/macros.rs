/// Opens a region, optionally nested inside an existing one.
///
/// In the nested form the outer region name is rebound inside the body to the
/// reborrowed outer region, so outer handles stay usable there.
///
/// A thin spelling of [`run`](crate::run) and
/// [`Region::nested`](crate::Region::nested).
///
/// # Example
///
/// ```rust
/// use branded_region::region;
///
/// let total = region! { |r|
///     let cell = r.create(40);
///     r.read(&cell) + 2
/// };
/// assert_eq!(total, 42);
/// ```
///
/// Nested form:
///
/// ```rust
/// use branded_region::region;
///
/// region! { |outer|
///     let hits = outer.create(0);
///     let n = region! { |inner| in outer {
///         let c = inner.create(7);
///         outer.write(&hits, 1);
///         inner.read(&c)
///     }};
///     assert_eq!(n, 7);
///     assert_eq!(outer.read(&hits), 1);
/// }
/// ```
#[macro_export]
macro_rules! region {
    (|$inner:ident| in $outer:ident, $body:expr) => {
        $outer.nested(|#[allow(unused_variables)] $outer, #[allow(unused_mut)] mut $inner| $body)
    };
    (|$inner:ident| in $outer:ident $body:block) => {
        $outer.nested(|#[allow(unused_variables)] $outer, #[allow(unused_mut)] mut $inner| $body)
    };
    (|$region:ident| $($body:tt)*) => {
        $crate::run(|#[allow(unused_mut, unused_variables)] mut $region| { $($body)* })
    };
}
