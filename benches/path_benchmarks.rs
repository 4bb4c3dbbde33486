use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pathgraph::{all_paths, shortest_path, Graph, PropertyMap};

/// Benchmark node insertion throughput
fn bench_node_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = Graph::new();
                for i in 0..size {
                    let mut props = PropertyMap::new();
                    props.insert("name".to_string(), format!("node{}", i).into());
                    props.insert("rank".to_string(), ((i % 100) as i64).into());
                    graph.add_node(format!("n{}", i), props).unwrap();
                }
            });
        });
    }
    group.finish();
}

/// Build a layered DAG: `depth` layers of 3 nodes each, fully connected
/// between consecutive layers, with single source and sink nodes. The number
/// of simple paths grows as 3^depth.
fn layered_graph(depth: usize) -> Graph {
    let mut graph = Graph::new();
    graph.add_node("src", PropertyMap::new()).unwrap();
    graph.add_node("sink", PropertyMap::new()).unwrap();

    for layer in 0..depth {
        for slot in 0..3 {
            graph
                .add_node(format!("l{}_{}", layer, slot), PropertyMap::new())
                .unwrap();
        }
    }
    for slot in 0..3 {
        graph
            .add_edge("src", &format!("l0_{}", slot), false, PropertyMap::new())
            .unwrap();
        graph
            .add_edge(
                &format!("l{}_{}", depth - 1, slot),
                "sink",
                false,
                PropertyMap::new(),
            )
            .unwrap();
    }
    for layer in 0..depth - 1 {
        for from in 0..3 {
            for to in 0..3 {
                graph
                    .add_edge(
                        &format!("l{}_{}", layer, from),
                        &format!("l{}_{}", layer + 1, to),
                        false,
                        PropertyMap::new(),
                    )
                    .unwrap();
            }
        }
    }
    graph
}

/// Benchmark exhaustive path enumeration on layered DAGs
fn bench_all_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_paths");

    for depth in [3, 5, 7].iter() {
        let graph = layered_graph(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| {
                let paths = all_paths(&graph, "src", "sink");
                criterion::black_box(paths.len());
            });
        });
    }
    group.finish();
}

/// Benchmark shortest-path selection on a chain with a long detour
fn bench_shortest_path(c: &mut Criterion) {
    // chain n0 -> n1 -> ... -> n99 plus a direct shortcut n0 -> n99
    let mut graph = Graph::new();
    for i in 0..100 {
        graph.add_node(format!("n{}", i), PropertyMap::new()).unwrap();
    }
    for i in 0..99 {
        graph
            .add_edge(&format!("n{}", i), &format!("n{}", i + 1), false, PropertyMap::new())
            .unwrap();
    }
    graph.add_edge("n0", "n99", false, PropertyMap::new()).unwrap();

    c.bench_function("shortest_path_chain_100", |b| {
        b.iter(|| {
            let path = shortest_path(&graph, "n0", "n99");
            criterion::black_box(path.len());
        });
    });
}

criterion_group!(
    benches,
    bench_node_insertion,
    bench_all_paths,
    bench_shortest_path
);
criterion_main!(benches);
