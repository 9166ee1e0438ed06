use plugin_deps::{ BuildError, CancellationToken, DependenciesGraphBuilder, GraphBuilderConfig };

fixtures! {
	const ROOT	= "root" ;
	plugins		= [
		TestPlugin::new( "root" ).depends( plugin( "a" )).depends( plugin( "b" )),
		TestPlugin::new( "a" ).depends( plugin( "c" )),
		TestPlugin::new( "b" ),
		TestPlugin::new( "c" ),
	];
}

#[test]
fn cancelled_before_start() {

	let token = CancellationToken::new();
	token.cancel();

	let finder = fixtures::finder();
	let result = DependenciesGraphBuilder::new( &finder )
		.with_cancellation( token )
		.build( fixtures::root().as_ref(), &fixtures::ide() );

	match result {
		Err( BuildError::Interrupted ) => {}
		value => panic!( "Expected Err( Interrupted ), found: {:#?}", value ),
	}
	assert_eq!( finder.lookups(), 0 );

}

#[test]
fn cancelled_during_build() {

	crate::fixture_plugins::init_tracing();
	let token = CancellationToken::new();
	let finder = fixtures::finder().cancel_after( 2, token.clone() );

	let result = DependenciesGraphBuilder::new( &finder )
		.with_config( GraphBuilderConfig::explicit_only() )
		.with_cancellation( token )
		.build( fixtures::root().as_ref(), &fixtures::ide() );

	match result {
		Err( BuildError::Interrupted ) => {}
		value => panic!( "Expected Err( Interrupted ), found: {:#?}", value ),
	}
	assert_eq!( finder.lookups(), 2 );

}

#[test]
fn uncancelled_token_does_not_interfere() {

	let token = CancellationToken::new();
	let graph = DependenciesGraphBuilder::new( fixtures::finder() )
		.with_cancellation( token.child_token() )
		.build( fixtures::root().as_ref(), &fixtures::ide() )
		.expect( "Build failed" );

	assert_vertices!( graph, [ "root", "a", "b", "c" ]);

}
