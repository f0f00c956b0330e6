use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_query_builder::operation::Operation;
use libgraphql_query_builder::operation::OperationKind;
use libgraphql_query_builder::selection::FieldSelection;
use libgraphql_query_builder::selection::Selection;
use libgraphql_query_builder::selection::SelectionSet;

/// `width` object fields per level, each repeated twice so every level
/// exercises the merge path.
fn wide_and_deep(depth: usize, width: usize) -> Vec<Selection> {
    if depth == 0 {
        return (0..width)
            .map(|idx| Selection::from(format!("leaf{idx}")))
            .collect();
    }

    let children = wide_and_deep(depth - 1, width);
    (0..width)
        .flat_map(|idx| {
            let field = FieldSelection::object(format!("field{idx}"), children.clone())
                .add_argument("first", 10);
            [Selection::from(field.clone()), Selection::from(field)]
        })
        .collect()
}

// ─── Group 1: Merging ───────────────────────────────────

fn merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for (depth, width) in [(2, 8), (4, 4), (6, 3)] {
        let selections = wide_and_deep(depth, width);
        group.bench_with_input(
            BenchmarkId::new("selection_set", format!("depth{depth}_width{width}")),
            &selections,
            |b, selections| {
                b.iter(|| {
                    black_box(SelectionSet::from_selections(selections.iter().cloned()))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 2: Serialization ─────────────────────────────

fn serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for (depth, width) in [(2, 8), (4, 4), (6, 3)] {
        let operation = Operation::new(
            OperationKind::Query,
            "Bench",
            wide_and_deep(depth, width),
        ).expect("benchmark selections do not conflict");
        group.bench_with_input(
            BenchmarkId::new("operation", format!("depth{depth}_width{width}")),
            &operation,
            |b, operation| {
                b.iter(|| black_box(operation.to_graphql_string()))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, merge, serialize);
criterion_main!(benches);
