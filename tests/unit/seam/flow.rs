use super::*;

#[test]
fn single_edge_carries_its_capacity() {
    let mut net = FlowNetwork::new(2);
    net.add_edge(0, 1, 5, 0);
    assert_eq!(net.max_flow(0, 1), 5);
}

#[test]
fn diamond_respects_both_bottlenecks() {
    // s -> a (3), s -> b (2), a -> t (2), b -> t (3)
    let mut net = FlowNetwork::new(4);
    net.add_edge(0, 1, 3, 0);
    net.add_edge(0, 2, 2, 0);
    net.add_edge(1, 3, 2, 0);
    net.add_edge(2, 3, 3, 0);
    assert_eq!(net.max_flow(0, 3), 4);
}

#[test]
fn chain_cut_falls_on_the_narrow_edge() {
    // s -> a (2), a -> t (1): the cut separates {s, a} from {t}.
    let mut net = FlowNetwork::new(3);
    net.add_edge(0, 1, 2, 0);
    net.add_edge(1, 2, 1, 0);
    assert_eq!(net.max_flow(0, 2), 1);

    let side = net.min_cut_source_side(0);
    assert_eq!(side, vec![true, true, false]);
}

#[test]
fn undirected_edges_push_flow_either_way() {
    // s -> a (inf), a <-> b (4), b -> t (inf)
    let mut net = FlowNetwork::new(4);
    net.add_edge(0, 1, INF_CAPACITY, 0);
    net.add_edge(1, 2, 4, 4);
    net.add_edge(2, 3, INF_CAPACITY, 0);
    assert_eq!(net.max_flow(0, 3), 4);

    let side = net.min_cut_source_side(0);
    assert_eq!(side, vec![true, true, false, false]);
}

#[test]
fn terminal_locked_node_stays_on_its_side() {
    let mut net = FlowNetwork::new(3);
    net.add_edge(0, 1, INF_CAPACITY, 0);
    net.add_edge(1, 2, 1, 0);
    net.max_flow(0, 2);
    let side = net.min_cut_source_side(0);
    assert!(side[1]);
}

#[test]
fn identical_networks_produce_identical_cuts() {
    let build = || {
        let mut net = FlowNetwork::new(6);
        // Uniform capacities make every vertical cut equally cheap; the
        // tie must still resolve the same way every time.
        net.add_edge(0, 1, INF_CAPACITY, 0);
        net.add_edge(1, 2, 7, 7);
        net.add_edge(2, 3, 7, 7);
        net.add_edge(3, 4, 7, 7);
        net.add_edge(4, 5, INF_CAPACITY, 0);
        net
    };

    let mut a = build();
    let mut b = build();
    assert_eq!(a.max_flow(0, 5), b.max_flow(0, 5));
    assert_eq!(a.min_cut_source_side(0), b.min_cut_source_side(0));
}

#[test]
fn disconnected_sink_yields_zero_flow() {
    let mut net = FlowNetwork::new(3);
    net.add_edge(0, 1, 9, 0);
    assert_eq!(net.max_flow(0, 2), 0);
    let side = net.min_cut_source_side(0);
    assert_eq!(side, vec![true, true, false]);
}
