//! Benchmark for the discount workflow.
//!
//! Compares the combinator pipeline against a hand-written `match` chain
//! computing the same result, and measures the workflow per fixture outcome.

use criterion::{Criterion, criterion_group, criterion_main};
use functional_refactoring::discount::{
    CartId, DiscountConfig, FixtureWorkflow, InMemoryStorage, load_cart, lookup_discount_rule,
    update_amount,
};
use std::hint::black_box;

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_discounted_cart(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("discounted_cart");
    let workflow = FixtureWorkflow::with_config(DiscountConfig::default());
    let cart_id = CartId::new("gold-42");

    group.bench_function("combinators", |bencher| {
        bencher.iter(|| black_box(workflow.discounted_cart(black_box(&cart_id))));
    });

    group.bench_function("manual_match", |bencher| {
        bencher.iter(|| {
            let updated = match load_cart(black_box(&cart_id)) {
                Some(cart) => match lookup_discount_rule(cart.customer_id()) {
                    Some(rule) => {
                        let discount = rule(cart.clone());
                        Some(update_amount(cart, discount))
                    }
                    None => None,
                },
                None => None,
            };
            black_box(updated)
        });
    });

    group.finish();
}

fn benchmark_apply_discount(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("apply_discount");
    let workflow = FixtureWorkflow::default();

    for id in ["gold-42", "normal-42", "unknown-42"] {
        let cart_id = CartId::new(id);
        group.bench_function(id, |bencher| {
            let storage = InMemoryStorage::new();
            bencher.iter(|| {
                let result = workflow.apply_discount(black_box(&cart_id), &storage);
                storage.clear();
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_discounted_cart, benchmark_apply_discount);
criterion_main!(benches);
