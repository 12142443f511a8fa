//! Ordered set difference over resource group names.
//!
//! Used to find resource groups that were locked in a previous snapshot but
//! are no longer valid in the current one.

use std::collections::HashSet;

/// Elements of `a`, in order, whose value does not occur anywhere in `b`.
///
/// `b` is treated as a membership set. Duplicates in `a` are kept when they
/// are not excluded.
pub fn difference<A, B>(a: &[A], b: &[B]) -> Vec<String>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let exclude: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();

    a.iter()
        .map(AsRef::as_ref)
        .filter(|name| !exclude.contains(name))
        .map(str::to_owned)
        .collect()
}
