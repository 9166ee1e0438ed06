use std::sync::Arc ;
use plugin_deps::{ DependenciesGraphBuilder, GraphBuilderConfig, Interner };

fixtures! {
	const ROOT	= "first" ;
	plugins		= [
		TestPlugin::new( "first" ).depends( plugin( "lib" )),
		TestPlugin::new( "second" ).depends( plugin( "lib" )),
		TestPlugin::new( "lib" ),
	];
}

#[test]
fn interner_reuses_nodes_across_builds() {

	let interner = Arc::new( Interner::new() );
	let finder = fixtures::finder();
	let ide = fixtures::ide();
	let builder = DependenciesGraphBuilder::new( &finder )
		.with_config( GraphBuilderConfig::explicit_only() )
		.with_interner( Arc::clone( &interner ));

	let first = builder.build( fixtures::root().as_ref(), &ide ).expect( "Build failed" );
	let second = builder.build( &crate::fixture_plugins::TestPlugin::new( "second" ).depends( plugin_deps::DependencyDescriptor::plugin( "lib" )), &ide )
		.expect( "Build failed" );

	let lib_first = first.vertex( "lib" ).expect( "lib in first graph" );
	let lib_second = second.vertex( "lib" ).expect( "lib in second graph" );
	assert!( lib_first.ptr_eq( lib_second ));

	assert_eq!( interner.node_count(), 3 );
	assert_eq!( interner.descriptor_count(), 1 );
	assert_eq!( interner.edge_count(), 2 );

}

#[test]
fn interner_replaces_node_with_new_version() {

	let interner = Interner::new();
	let old = interner.node( "lib", "1.0" );
	let same = interner.node( "lib", "1.0" );
	let new = interner.node( "lib", "2.0" );

	assert!( old.ptr_eq( &same ));
	assert_eq!( old, new );
	assert_eq!( new.version(), "2.0" );
	assert_eq!( interner.node( "lib", "2.0" ).version(), "2.0" );
	assert_eq!( interner.node_count(), 1 );

}
