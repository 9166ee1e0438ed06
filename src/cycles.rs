//! Cycle detection.

use std::collections::{ HashMap, HashSet };

use crate::graph::{ DependenciesGraph, DependencyNode };



/// Finds every elementary cycle that passes through the graph's root.
///
/// Each cycle is listed starting at the root, in dependency order, without
/// repeating the root at the end: `[root, a, b]` stands for
/// `root -> a -> b -> root`. Cycles that do not contain the root are not
/// reported, since only the root is being verified. The result is
/// deterministic: successors are explored in id order.
///
/// The search is limited to the root's strongly connected component, so
/// large acyclic parts of the graph cost a single pass. Inside it, nodes that
/// failed to lead back to the root stay blocked until something they depend
/// on gets unblocked (Johnson's circuit search), so dead ends are not
/// explored again along every path. All passes use explicit stacks.
pub fn find_cycles( graph: &DependenciesGraph ) -> Vec<Vec<DependencyNode>> {

    let root = graph.root();
    let component = root_component( graph );
    if component.len() < 2 { return Vec::new() }

    let successors = | node: &DependencyNode | graph.successors( node ).iter()
        .filter(| next | component.contains( *next ))
        .collect::<Vec<_>>();

    let mut cycles = Vec::new();
    let mut path = vec![ root ];
    // nodes on the path, or known not to lead back to the root from it
    let mut blocked = HashSet::from([ root ]);
    // node -> nodes to unblock once it gets unblocked
    let mut waiting = HashMap::<&DependencyNode, HashSet<&DependencyNode>>::new();
    let mut stack = vec![ Frame { node: root, next: successors( root ), index: 0, closed: false }];

    while let Some( frame ) = stack.last_mut() {
        let Some( &node ) = frame.next.get( frame.index ) else {
            let Some( done ) = stack.pop() else { break };
            match done.closed {
                true => unblock( done.node, &mut blocked, &mut waiting ),
                false => for next in done.next {
                    waiting.entry( next ).or_default().insert( done.node );
                },
            }
            path.pop();
            if let Some( parent ) = stack.last_mut() { parent.closed |= done.closed; }
            continue ;
        };
        frame.index += 1 ;

        if node == root {
            frame.closed = true ;
            cycles.push( path.iter().copied().cloned().collect() );
        } else if blocked.insert( node ) {
            path.push( node );
            stack.push( Frame { node, next: successors( node ), index: 0, closed: false });
        }
    }

    cycles

}

/// A path entry of the circuit search.
struct Frame<'a> {
    node: &'a DependencyNode,
    /// successors inside the root component, id order
    next: Vec<&'a DependencyNode>,
    index: usize,
    /// whether some path from here got back to the root
    closed: bool,
}

/// Unblocks `node` and, transitively, every node waiting on it.
fn unblock<'a>(
    node: &'a DependencyNode,
    blocked: &mut HashSet<&'a DependencyNode>,
    waiting: &mut HashMap<&'a DependencyNode, HashSet<&'a DependencyNode>>,
) {
    let mut pending = vec![ node ];
    while let Some( node ) = pending.pop() {
        if blocked.remove( node ) {
            pending.extend( waiting.remove( node ).into_iter().flatten() );
        }
    }
}

/// Vertices both reachable from the root and able to reach it.
fn root_component( graph: &DependenciesGraph ) -> HashSet<DependencyNode> {

    let forward = reachable( graph.root(), | node | graph.successors( node ).to_vec() );

    let mut predecessors = HashMap::<_, Vec<_>>::new();
    for edge in graph.edges() {
        predecessors.entry( edge.to().clone() ).or_default().push( edge.from().clone() );
    }
    let backward = reachable( graph.root(), | node | predecessors.get( node ).cloned().unwrap_or_default() );

    forward.intersection( &backward ).cloned().collect()

}

fn reachable(
    start: &DependencyNode,
    next: impl Fn( &DependencyNode ) -> Vec<DependencyNode>,
) -> HashSet<DependencyNode> {
    let mut seen = HashSet::from([ start.clone() ]);
    let mut stack = vec![ start.clone() ];
    while let Some( node ) = stack.pop() {
        stack.extend( next( &node ).into_iter().filter(| other | seen.insert( other.clone() )));
    }
    seen
}
