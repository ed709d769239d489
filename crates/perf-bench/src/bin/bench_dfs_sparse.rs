use perf_bench::*;

fn main() {
    let graph = generate_sparse_components();
    print_report("Sparse components DFS benchmark", &graph);
}
