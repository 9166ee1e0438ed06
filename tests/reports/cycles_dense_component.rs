use std::sync::Arc ;
use plugin_deps::{ DependenciesGraph, DependencyDescriptor, DependencyEdge, DependencyNode };

/// Enough clique members that walking every simple path through them never finishes.
const CLIQUE: usize = 12 ;

fn node( id: &str ) -> DependencyNode { DependencyNode::new( id, "1.0" ) }

fn edge( from: &str, to: &str ) -> DependencyEdge {
	DependencyEdge::new( node( from ), node( to ), Arc::new( DependencyDescriptor::plugin( to )))
}

fn ids( cycles: Vec<Vec<DependencyNode>> ) -> Vec<Vec<String>> {
	cycles.into_iter()
		.map(| cycle | cycle.iter().map(| node | node.id().to_string() ).collect() )
		.collect()
}

/// `root <-> hub`, and a fully connected clique hanging off `hub` whose only
/// way out leads back to `hub`.
fn hub_with_clique() -> DependenciesGraph {

	let members = ( 0..CLIQUE ).map(| index | format!( "c{index:02}" )).collect::<Vec<_>>();

	let edges = members.iter()
		.flat_map(| from | members.iter()
			.filter( move | to | *to != from )
			.map( move | to | edge( from, to )))
		.chain( members.iter().map(| member | edge( "hub", member )))
		.chain([ edge( "root", "hub" ), edge( "hub", "root" ), edge( "c00", "hub" )])
		.collect::<Vec<_>>();

	DependenciesGraph::from_parts(
		node( "root" ),
		[ node( "root" ), node( "hub" )].into_iter().chain( members.iter().map(| id | node( id ))),
		edges,
		[],
	).expect( "Valid graph" )

}

#[test]
fn dead_ends_inside_the_root_component_are_not_rewalked() {

	let graph = hub_with_clique();
	assert_eq!( ids( graph.find_cycles() ), vec![ vec![ "root", "hub" ]]);

}

#[test]
fn nodes_are_unblocked_once_they_lead_back_to_the_root() {

	// `b` is a dead end while `a` is on the path, but closes a cycle through `c`.
	let graph = DependenciesGraph::from_parts(
		node( "root" ),
		[ node( "root" ), node( "a" ), node( "b" ), node( "c" )],
		[
			edge( "root", "a" ), edge( "root", "c" ),
			edge( "a", "b" ), edge( "b", "a" ),
			edge( "c", "b" ), edge( "a", "root" ),
		],
		[],
	).expect( "Valid graph" );

	assert_eq!( ids( graph.find_cycles() ), vec![
		vec![ "root", "a" ],
		vec![ "root", "c", "b", "a" ],
	]);

}
