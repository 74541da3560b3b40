pub mod pair_graph;

pub use pair_graph::PairGraph;
