pub mod spread_graph;
