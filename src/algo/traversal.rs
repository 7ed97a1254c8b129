use super::*;
use std::collections::VecDeque;

/// Computes for every node the number of edges on a shortest directed path to `t`.
///
/// The search starts at `t` and walks edges backwards, i.e. from a node to the origins of its
/// incoming edges. Nodes that cannot reach `t` are assigned `unreachable`.
///
/// ** Panics if `t >= n` **
///
/// # Examples
/// ```
/// use preflow::{prelude::*, algo::sink_distances};
///
/// let g = IncidenceCsr::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
/// assert_eq!(sink_distances(&g, 2, 4), vec![1, 1, 0, 4]);
/// ```
pub fn sink_distances<G>(graph: &G, t: Node, unreachable: u32) -> Vec<u32>
where
    G: IncidenceList,
{
    let mut distance = vec![unreachable; graph.len()];
    let mut queue = VecDeque::with_capacity(graph.len());

    distance[t as usize] = 0;
    queue.push_back(t);

    while let Some(v) = queue.pop_front() {
        let next = distance[v as usize] + 1;
        for u in graph.in_neighbors_of(v) {
            // distances are final on discovery
            if u != t && distance[u as usize] == unreachable {
                distance[u as usize] = next;
                queue.push_back(u);
            }
        }
    }

    distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_and_shortcut() {
        // 0 -> 1 -> 2 -> 3 and 0 -> 3
        let g = IncidenceCsr::from_edges(5, [(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(sink_distances(&g, 3, 5), vec![1, 2, 1, 0, 5]);
    }

    #[test]
    fn follows_edge_direction() {
        // 3 is only reachable *from* 2, hence cannot reach 2
        let g = IncidenceCsr::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(sink_distances(&g, 2, 100), vec![2, 1, 0, 100]);
    }

    #[test]
    fn loops_and_parallel_edges() {
        let g = IncidenceCsr::from_edges(3, [(0, 0), (0, 1), (0, 1), (1, 1)]);
        assert_eq!(sink_distances(&g, 1, 3), vec![1, 0, 3]);
    }
}
