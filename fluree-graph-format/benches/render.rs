// Sorted Turtle rendering benchmarks.
//
// Builds deterministic graphs of people with scalar properties, nested
// address objects and tag lists, then measures a full render.
//
// ## Running
//
//   cargo bench -p fluree-graph-format --bench render
//
// Quick validation (1 iteration each, no stats):
//
//   cargo bench -p fluree-graph-format --bench render -- --test

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fluree_graph_format::{format_turtle, OrderingPolicy};
use fluree_graph_ir::{Graph, Term};
use fluree_vocab::rdf;

/// Subject counts to benchmark.
const SUBJECT_COUNTS: &[usize] = &[100, 1_000, 10_000];

fn ex(local: &str) -> Term {
    Term::iri(format!("http://example.org/{}", local))
}

fn build_graph(subjects: usize) -> Graph {
    let mut g = Graph::new();
    g.add_prefix("ex", "http://example.org/");
    g.add_prefix("rdf", rdf::NAMESPACE);

    for i in 0..subjects {
        let person = ex(&format!("person/{}", i));
        g.add_triple(person.clone(), Term::iri(rdf::TYPE), ex("Person"));
        g.add_triple(person.clone(), ex("name"), Term::string(format!("Person {}", i)));
        g.add_triple(person.clone(), ex("age"), Term::integer((i % 90) as i64));

        let address = Term::blank(format!("addr{}", i));
        g.add_triple(person.clone(), ex("address"), address.clone());
        g.add_triple(address.clone(), ex("city"), Term::string(format!("City {}", i % 17)));
        g.add_triple(address, ex("zip"), Term::string(format!("{:05}", i)));

        let cells: Vec<Term> = (0..3).map(|k| Term::blank(format!("tags{}_{}", i, k))).collect();
        g.add_triple(person, ex("tags"), cells[0].clone());
        for (k, cell) in cells.iter().enumerate() {
            g.add_triple(cell.clone(), Term::iri(rdf::FIRST), Term::string(format!("t{}", (i + k) % 7)));
            let rest = cells.get(k + 1).cloned().unwrap_or_else(|| Term::iri(rdf::NIL));
            g.add_triple(cell.clone(), Term::iri(rdf::REST), rest);
        }
    }
    g
}

fn bench_render(c: &mut Criterion) {
    let policy = OrderingPolicy::codepoint();
    let mut group = c.benchmark_group("render_turtle");

    for &n in SUBJECT_COUNTS {
        let graph = build_graph(n);
        group.throughput(Throughput::Elements(graph.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| format_turtle(black_box(graph), &policy).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
