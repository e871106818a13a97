use std::ptr::NonNull;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use list_qsort::{patterns, ListNode};

struct BenchNode {
    key: i32,
    next: Option<NonNull<BenchNode>>,
}

impl ListNode for BenchNode {
    fn next(&self) -> Option<NonNull<BenchNode>> {
        self.next
    }
    fn set_next(&mut self, next: Option<NonNull<BenchNode>>) {
        self.next = next;
    }
}

/// The Vec owns the nodes so every iteration's teardown frees them; the
/// sort itself never allocates.
fn build_list(keys: &[i32]) -> (Vec<Box<BenchNode>>, Option<NonNull<BenchNode>>) {
    let mut nodes: Vec<Box<BenchNode>> = keys
        .iter()
        .map(|&key| Box::new(BenchNode { key, next: None }))
        .collect();

    for i in (1..nodes.len()).rev() {
        let next = NonNull::from(&mut *nodes[i]);
        nodes[i - 1].next = Some(next);
    }

    let head = nodes.first_mut().map(|node| NonNull::from(&mut **node));
    (nodes, head)
}

fn bench_pattern(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("list_qsort-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || build_list(&pattern_provider(test_size)),
            |(arena, head)| {
                // SAFETY: build_list produced a valid None-terminated chain
                // and the arena is exclusively ours for this iteration.
                let sorted = unsafe { list_qsort::sort_by(head, |a, b| a.key.cmp(&b.key)) };
                black_box(sorted);
                arena
            },
            batch_size,
        )
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    for test_size in [20, 100, 1_000, 10_000] {
        bench_pattern(c, test_size, "random", patterns::random);
        bench_pattern(c, test_size, "random_dupes", patterns::random_dupes);
        bench_pattern(c, test_size, "saw_mixed_5", |size| patterns::saw_mixed(size, 5));
    }

    // Head pivots are quadratic on sorted runs, with recursion depth equal
    // to the run length. Keep these sizes small enough for the bench stack.
    for test_size in [20, 100, 1_000] {
        bench_pattern(c, test_size, "ascending", patterns::ascending);
        bench_pattern(c, test_size, "descending", patterns::descending);
        bench_pattern(c, test_size, "all_equal", patterns::all_equal);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
