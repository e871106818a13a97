use core::ptr::NonNull;

use crate::ListNode;

/// Sorts the non-empty list starting at `head` recursively and returns the
/// sorted list's head and tail.
///
/// The pivot is always the current head. One forward walk moves every node
/// after the pivot onto one of two accumulator lists, nodes comparing less
/// than the pivot on one and the rest on the other, by prepending, i.e. pure
/// next-link rewiring. Prepending leaves each accumulator reversed relative
/// to the input; the recursive sorts below make that irrelevant, which is
/// also why equal elements lose their relative order. Returning the tail of
/// each sorted side lets the splice run in O(1) with no walk to the end.
///
/// The fixed head pivot means pre-sorted input recurses once per node.
///
/// # Safety
///
/// `head` must point to a valid, finite, acyclic, `None`-terminated list
/// with no aliasing references into it.
pub(crate) unsafe fn quicksort<N: ListNode>(
    head: NonNull<N>,
    is_less: &mut impl FnMut(&N, &N) -> bool,
) -> (NonNull<N>, NonNull<N>) {
    let mut pivot = head;

    // A single node is already sorted, and is its own tail.
    if pivot.as_ref().next().is_none() {
        return (pivot, pivot);
    }

    let mut less: Option<NonNull<N>> = None;
    let mut greater_eq: Option<NonNull<N>> = None;

    let mut cursor = pivot.as_ref().next();
    while let Some(mut node) = cursor {
        // Read the successor before the relink below clobbers it.
        cursor = node.as_ref().next();

        if is_less(node.as_ref(), pivot.as_ref()) {
            node.as_mut().set_next(less);
            less = Some(node);
        } else {
            node.as_mut().set_next(greater_eq);
            greater_eq = Some(node);
        }
    }

    let mut new_head = pivot;
    let mut new_tail = pivot;

    if let Some(less_head) = less {
        let (sorted_head, mut sorted_tail) = quicksort(less_head, is_less);
        sorted_tail.as_mut().set_next(Some(pivot));
        new_head = sorted_head;
    }

    if let Some(greater_eq_head) = greater_eq {
        let (sorted_head, sorted_tail) = quicksort(greater_eq_head, is_less);
        pivot.as_mut().set_next(Some(sorted_head));
        new_tail = sorted_tail;
    }

    // Terminate the list. When the right side is empty the pivot is the
    // tail and still carries its stale pre-partition link.
    new_tail.as_mut().set_next(None);

    (new_head, new_tail)
}
