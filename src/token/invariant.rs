use core::marker::PhantomData;

/// The type-level identity of one region invocation.
///
/// `Brand<'brand>` is invariant in `'brand`, so the compiler can never shrink
/// or widen one brand into another: a handle tagged `'a` unifies only with a
/// region tagged exactly `'a`. It carries no data and has no observable
/// structure; it exists only to appear in the types of region handles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brand<'brand>(PhantomData<fn(&'brand ()) -> &'brand ()>);

impl<'brand> Brand<'brand> {
    /// Only the runner mints brands; everything else copies an existing one.
    pub(crate) const fn new() -> Self {
        Self(PhantomData)
    }
}
