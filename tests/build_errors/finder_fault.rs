use plugin_deps::{ BuildError, DependenciesGraphBuilder };
use crate::fixture_plugins::{ BrokenFinder, RepositoryUnreachable };

fixtures! {
	const ROOT	= "root" ;
	plugins		= [ TestPlugin::new( "root" ).depends( plugin( "anything" ).optional() )];
}

#[test]
fn finder_fault_aborts_build() {

	let result = DependenciesGraphBuilder::new( BrokenFinder )
		.build( fixtures::root().as_ref(), &fixtures::ide() );

	match result {
		Err( BuildError::Finder( RepositoryUnreachable )) => {}
		value => panic!( "Expected Err( Finder( RepositoryUnreachable )), found: {:#?}", value ),
	}

}

#[test]
fn finder_fault_message_names_cause() {

	let error = DependenciesGraphBuilder::new( BrokenFinder )
		.build( fixtures::root().as_ref(), &fixtures::ide() )
		.expect_err( "Build should fail" );

	assert_eq!( error.to_string(), "Dependency finder failed: Plugin repository is unreachable" );

}

#[test]
fn plugin_without_dependencies_never_consults_finder() {

	let graph = DependenciesGraphBuilder::new( BrokenFinder )
		.build( &crate::fixture_plugins::TestPlugin::new( "alone" ), &fixtures::ide() )
		.expect( "Build failed" );

	assert_vertices!( graph, [ "alone" ]);

}
