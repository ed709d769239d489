use perf_bench::*;

fn main() {
    let graph = generate_dense_break_even();
    print_report("Dense break-even DFS benchmark", &graph);
}
