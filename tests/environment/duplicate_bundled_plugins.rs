use std::sync::Arc ;
use plugin_deps::{ Environment, Ide, IdeError, ModuleVisibility, PluginData };
use crate::fixture_plugins::TestPlugin ;

#[test]
fn first_registration_wins() {

	let ( ide, errors ) = Ide::new( "IU-241.1", [
		Arc::new( TestPlugin::new( "json" ).version( "1" ).defines( "json.module" )),
		Arc::new( TestPlugin::new( "json" ).version( "2" )),
		Arc::new( TestPlugin::new( "yaml" )
			.defines( "json.module" )
			.module( "yaml.core", None, ModuleVisibility::Public )),
	]);

	assert_eq!( errors, vec![
		IdeError::DuplicatePluginId( "json".to_string() ),
		IdeError::DuplicateModule {
			module: "json.module".to_string(),
			plugin: "yaml".to_string(),
			provider: "json".to_string(),
		},
	]);

	assert_eq!( ide.version(), "IU-241.1" );
	assert_eq!( ide.bundled_plugins().len(), 2 );
	assert_eq!( ide.find_plugin_by_id( "json" ).map(| plugin | plugin.version().to_string() ), Some( "1".to_string() ));
	assert_eq!( ide.find_plugin_by_module( "json.module" ).map(| plugin | plugin.id().to_string() ), Some( "json".to_string() ));
	assert_eq!( ide.find_plugin_by_module( "yaml.core" ).map(| plugin | plugin.id().to_string() ), Some( "yaml".to_string() ));

}

#[test]
fn error_messages_name_both_plugins() {

	let error = IdeError::DuplicateModule {
		module: "m".to_string(),
		plugin: "b".to_string(),
		provider: "a".to_string(),
	};
	assert_eq!( error.to_string(), "Module 'm' of 'b' is already provided by 'a'" );

}

#[test]
fn marker_module_is_detected() {

	let ( without, _ ) = Ide::new( "IU-241.1", [ Arc::new( TestPlugin::new( "com.intellij" ))]);
	assert!( !without.has_all_modules_marker() );

	let ( with, _ ) = Ide::new( "IU-241.1", [
		Arc::new( TestPlugin::new( "com.intellij" ).defines( plugin_deps::ALL_MODULES_MARKER )),
	]);
	assert!( with.has_all_modules_marker() );

}
