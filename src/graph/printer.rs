use std::collections::HashSet ;
use std::fmt::Write ;
use itertools::Itertools ;

use super::{ DependenciesGraph, DependencyEdge, DependencyNode, MissingDependency };



/// Renders a [`DependenciesGraph`] as a tree rooted at the graph's root.
///
/// ```text
/// root:1.0
/// +--- a:1.0
/// |    \--- shared:2.0
/// +--- b:1.0 (optional)
/// |    \--- shared:2.0 (*)
/// \--- missing: plugin 'ghost' (optional): Unavailable
/// ```
///
/// Children are sorted by id, missing dependencies come last. A node that was
/// already expanded higher up is marked `(*)` and not expanded again, which
/// also keeps cycles finite.
#[derive( Debug, Clone, Copy )]
pub struct PrettyPrinter<'a> {
    graph: &'a DependenciesGraph,
}

enum Entry<'a> {
    Edge( &'a DependencyEdge ),
    Missing( &'a MissingDependency ),
}

impl<'a> PrettyPrinter<'a> {

    pub(crate) fn new( graph: &'a DependenciesGraph ) -> Self { Self { graph }}

    fn children( &self, node: &'a DependencyNode ) -> Vec<Entry<'a>> {
        self.graph.edges_from( node ).iter()
            .map( Entry::Edge )
            .chain( self.graph.missing_dependencies( node )
                .sorted_by(| a, b | a.descriptor().cmp( b.descriptor() ).then_with(|| a.reason().cmp( b.reason() )))
                .map( Entry::Missing ))
            .collect()
    }

}

impl std::fmt::Display for PrettyPrinter<'_> {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> Result<(), std::fmt::Error> {

        let root = self.graph.root();
        writeln!( f, "{}", root )?;

        let mut expanded = HashSet::from([ root ]);
        // ( prefix, is last sibling, entry ); popped in display order
        let mut stack = self.children( root ).into_iter()
            .rev()
            .enumerate()
            .map(|( index, entry )| ( String::new(), index == 0, entry ))
            .collect::<Vec<_>>();

        while let Some(( prefix, is_last, entry )) = stack.pop() {
            let branch = match is_last { true => "\\--- ", false => "+--- " };
            let mut line = String::new();
            match entry {
                Entry::Missing( missing ) => write!( line, "missing: {}", missing )?,
                Entry::Edge( edge ) => {
                    write!( line, "{}", edge.to() )?;
                    if edge.descriptor().is_optional() { line.push_str( " (optional)" ); }
                    match expanded.insert( edge.to() ) {
                        false => line.push_str( " (*)" ),
                        true => {
                            let child_prefix = format!( "{}{}", prefix, match is_last { true => "     ", false => "|    " });
                            stack.extend( self.children( edge.to() ).into_iter()
                                .rev()
                                .enumerate()
                                .map(|( index, entry )| ( child_prefix.clone(), index == 0, entry )));
                        },
                    }
                },
            }
            writeln!( f, "{}{}{}", prefix, branch, line )?;
        }

        Ok(())

    }
}
