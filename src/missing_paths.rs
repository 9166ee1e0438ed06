//! Paths leading to missing dependencies.

use std::collections::HashSet ;
use itertools::Itertools ;
use nonempty_collections::NEVec ;

use crate::graph::{ DependenciesGraph, DependencyNode, MissingDependency, MissingDependencyPath };



/// Reports, for every missing dependency, the path through which the root
/// reaches the node that declared it.
///
/// Depth-first from the root, successors in id order. Each node is entered
/// at most once, so every missing dependency is reported exactly once, along
/// the first path that discovered its node, and cycles terminate. Missing
/// dependencies of one node are reported in descriptor order. Nodes the root
/// cannot reach contribute nothing.
///
/// The traversal keeps its own stack, so the depth of a dependency chain is
/// not limited by the call stack.
pub fn find_missing_dependency_paths( graph: &DependenciesGraph ) -> Vec<MissingDependencyPath> {

    let mut paths = Vec::new();
    let mut breadcrumbs = Vec::<DependencyNode>::new();
    let mut on_path = HashSet::<&DependencyNode>::new();
    let mut closed = HashSet::<&DependencyNode>::new();
    let mut stack = vec![ Step::Enter( graph.root() )];

    while let Some( step ) = stack.pop() {
        match step {

            Step::Enter( node ) => {
                if on_path.contains( node ) || closed.contains( node ) { continue }
                on_path.insert( node );
                breadcrumbs.push( node.clone() );

                // the breadcrumbs are only copied for nodes that report something
                let missing = graph.missing_dependencies( node ).sorted_by( compare_missing ).collect::<Vec<_>>();
                if !missing.is_empty() {
                    if let Some( path ) = NEVec::try_from_vec( breadcrumbs.clone() ) {
                        paths.extend( missing.into_iter()
                            .map(| missing | MissingDependencyPath::new( path.clone(), missing.clone() )));
                    }
                }

                stack.push( Step::Exit( node ));
                stack.extend( graph.successors( node ).iter().rev().map( Step::Enter ));
            },

            Step::Exit( node ) => {
                breadcrumbs.pop();
                on_path.remove( node );
                closed.insert( node );
            },

        }
    }

    paths

}

enum Step<'a> {
    Enter( &'a DependencyNode ),
    Exit( &'a DependencyNode ),
}

fn compare_missing( a: &&MissingDependency, b: &&MissingDependency ) -> std::cmp::Ordering {
    a.descriptor().cmp( b.descriptor() ).then_with(|| a.reason().cmp( b.reason() ))
}
