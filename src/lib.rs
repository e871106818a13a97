//! Quicksort for intrusive singly linked lists.
//!
//! The sort is generic over the node layout: any type that exposes its
//! embedded next-link via [`ListNode`] can be sorted, whatever else the node
//! carries. Nodes are never allocated, freed, or copied, only relinked. Each
//! recursive call returns the tail of its sorted sublist, so sorted halves
//! are spliced back together in O(1) instead of walking to find the end.

use core::cmp::Ordering;
use core::ptr::NonNull;

mod quicksort;

pub mod patterns;

/// Capability of an intrusive list node: read and overwrite the embedded
/// next-link. `None` marks the last node of a list.
///
/// The slot stays owned by the node itself. Implementations must round-trip:
/// after `set_next(x)`, `next()` returns `x` until the next write.
pub trait ListNode: Sized {
    fn next(&self) -> Option<NonNull<Self>>;
    fn set_next(&mut self, next: Option<NonNull<Self>>);
}

/// Sorts the list starting at `head`, but might not preserve the order of
/// equal elements.
///
/// Returns the new head and the tail of the sorted list, both `None` if the
/// input was empty. The result is a relinking of exactly the input nodes in
/// nondecreasing order; the tail's next-link is `None`. Any pointer into the
/// list other than the returned pair is stale after the call.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) average-case. The
/// pivot is always the sublist head, so already-sorted and reverse-sorted
/// input degrades to *O*(*n*^2) comparisons with *O*(*n*) recursion depth.
/// Callers sorting large pre-sorted lists risk stack exhaustion.
///
/// # Safety
///
/// `head`, if `Some`, must point to a valid, finite, acyclic list terminated
/// by a `None` next-link, and the caller must have exclusive access to every
/// node in it for the duration of the call. A cyclic list may not terminate;
/// the sort does not check.
#[inline]
pub unsafe fn sort<N>(head: Option<NonNull<N>>) -> (Option<NonNull<N>>, Option<NonNull<N>>)
where
    N: ListNode + Ord,
{
    sort_by(head, N::cmp)
}

/// Sorts the list starting at `head` with a comparator function, but might
/// not preserve the order of equal elements.
///
/// `compare` must define a total preorder over the nodes: equal keys are
/// fine, but if the ordering is inconsistent (e.g. not transitive) the
/// resulting link structure is unspecified, although it still contains
/// exactly the input nodes. See [`sort`] for the return contract and the
/// worst-case behavior.
///
/// # Safety
///
/// Same contract as [`sort`].
///
/// # Examples
///
/// ```
/// use core::ptr::NonNull;
/// use list_qsort::ListNode;
///
/// struct Item {
///     key: u32,
///     next: Option<NonNull<Item>>,
/// }
///
/// impl ListNode for Item {
///     fn next(&self) -> Option<NonNull<Item>> {
///         self.next
///     }
///     fn set_next(&mut self, next: Option<NonNull<Item>>) {
///         self.next = next;
///     }
/// }
///
/// // The arena keeps ownership; the sort only rewrites the links.
/// let mut arena: Vec<Box<Item>> = [3u32, 1, 2]
///     .iter()
///     .map(|&key| Box::new(Item { key, next: None }))
///     .collect();
/// for i in (1..arena.len()).rev() {
///     let next = NonNull::from(&mut *arena[i]);
///     arena[i - 1].next = Some(next);
/// }
/// let head = Some(NonNull::from(&mut *arena[0]));
///
/// let (head, tail) = unsafe { list_qsort::sort_by(head, |a, b| a.key.cmp(&b.key)) };
/// let (head, tail) = (head.unwrap(), tail.unwrap());
/// unsafe {
///     assert_eq!(head.as_ref().key, 1);
///     assert_eq!(tail.as_ref().key, 3);
///     assert!(tail.as_ref().next.is_none());
/// }
/// ```
#[inline]
pub unsafe fn sort_by<N, F>(
    head: Option<NonNull<N>>,
    mut compare: F,
) -> (Option<NonNull<N>>, Option<NonNull<N>>)
where
    N: ListNode,
    F: FnMut(&N, &N) -> Ordering,
{
    match head {
        None => (None, None),
        Some(head) => {
            let mut is_less = |a: &N, b: &N| compare(a, b) == Ordering::Less;
            let (head, tail) = quicksort::quicksort(head, &mut is_less);
            (Some(head), Some(tail))
        }
    }
}
