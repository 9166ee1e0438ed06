use plugin_deps::GraphBuilderConfig ;

fixtures! {
	const ROOT	= "P3" ;
	plugins		= [ TestPlugin::new( "P3" ).depends( plugin( "ghost" ).optional() )];
}

#[test]
fn build_records_unresolved_optional_dependency() {

	let graph = fixtures::build( GraphBuilderConfig::default() );

	assert_vertices!( graph, [ "P3" ]);
	assert_edges!( graph, []);

	let missing = graph.missing_dependencies( graph.root() ).collect::<Vec<_>>();
	assert_eq!( missing.len(), 1 );
	assert_eq!( missing[0].descriptor().id(), "ghost" );
	assert!( missing[0].is_optional() );
	assert_eq!( missing[0].reason(), "Unavailable" );
	assert_eq!( graph.missing_by_node().len(), 1 );

}
