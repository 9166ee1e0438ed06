use plugin_deps::{ DependenciesGraphBuilder, GraphBuilderConfig };

fixtures! {
	const ROOT	= "root" ;
	plugins		= [ TestPlugin::new( "root" ).depends( plugin( "groovy" ).optional() )];
	bundled		= [ TestPlugin::new( "groovy" ).shared_classloader() ];
}

#[test]
fn failed_declaration_does_not_hide_shared_classloader_plugin() {

	let finder = fixtures::finder().failed_download( "groovy", "repo down" );
	let graph = DependenciesGraphBuilder::new( finder )
		.with_config( GraphBuilderConfig::default() )
		.build( fixtures::root().as_ref(), &fixtures::ide() )
		.expect( "Build failed" );

	assert_vertices!( graph, [ "root", "groovy" ]);
	assert_edges!( graph, [( "root", "groovy" )]);

	let injected = graph.edges().iter().next().expect( "groovy edge" );
	assert!( !injected.descriptor().is_optional() );

	// The failed declaration is still reported.
	let missing = graph.missing_dependencies( graph.root() ).collect::<Vec<_>>();
	assert_eq!( missing.len(), 1 );
	assert_eq!( missing[0].descriptor().id(), "groovy" );
	assert!( missing[0].is_optional() );
	assert_eq!( missing[0].reason(), "repo down" );

}

#[test]
fn resolved_declaration_is_not_duplicated() {

	let graph = fixtures::build( GraphBuilderConfig::default() );

	assert_eq!( graph.edges().len(), 1 );
	assert!( graph.edges().iter().all(| edge | edge.descriptor().is_optional() ));
	assert_no_missing!( graph );

}
