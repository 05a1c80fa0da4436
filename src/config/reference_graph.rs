//! Reference graph between element templates.
//!
//! Every `**Name.Kind**` macro found in an element template is an edge from
//! that template to the referenced one. The graph is checked once before any
//! page is generated:
//!
//! - a cycle (`a.x → b.y → a.x`) is a hard error, since expanding it would
//!   only stop at the depth guard and produce truncated markup
//! - a reference to an element or kind that does not exist is reported as a
//!   warning; the expander leaves such macros verbatim

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::templates::{ElementsTemplates, PagesTemplates};
use crate::core::WikigenError;
use crate::templating::syntax::{element_references, split_reference};

/// One element template, addressed as `element.kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateRef {
    /// Element name
    pub element: String,
    /// Template kind
    pub kind: String,
}

impl TemplateRef {
    /// Create a reference.
    pub fn new(element: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.element, self.kind)
    }
}

/// A macro pointing at nothing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DanglingReference {
    /// Where the macro was found (`trait.template` or `page "Hero pages"`)
    pub found_in: String,
    /// The macro content between the asterisks
    pub reference: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** in {}", self.reference, self.found_in)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Directed graph of element template references.
pub struct ReferenceGraph {
    graph: DiGraph<TemplateRef, ()>,
    node_map: HashMap<TemplateRef, NodeIndex>,
    dangling: BTreeSet<DanglingReference>,
}

impl ReferenceGraph {
    /// Build the graph from the element templates, recording dangling
    /// references from element and page templates alike.
    pub fn build(elements: &ElementsTemplates, pages: Option<&PagesTemplates>) -> Self {
        let mut graph = Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            dangling: BTreeSet::new(),
        };

        for (name, kind, template) in elements.iter() {
            let from = TemplateRef::new(name, kind);
            graph.ensure_node(from.clone());
            for reference in element_references(template) {
                match split_reference(reference) {
                    Some((target, target_kind)) if elements.get(target, target_kind).is_some() => {
                        graph.add_reference(from.clone(), TemplateRef::new(target, target_kind));
                    }
                    _ => {
                        graph.dangling.insert(DanglingReference {
                            found_in: from.to_string(),
                            reference: reference.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(pages) = pages {
            for (page_name, page) in pages.iter() {
                let texts = [&page.template, &page.header, &page.footer];
                for text in texts.into_iter().flatten() {
                    for reference in element_references(text) {
                        if elements.lookup(reference).is_none() || split_reference(reference).is_none() {
                            graph.dangling.insert(DanglingReference {
                                found_in: format!("page \"{page_name}\""),
                                reference: reference.to_string(),
                            });
                        }
                    }
                }
            }
        }

        graph
    }

    fn ensure_node(&mut self, node: TemplateRef) -> NodeIndex {
        if let Some(&index) = self.node_map.get(&node) {
            index
        } else {
            let index = self.graph.add_node(node.clone());
            self.node_map.insert(node, index);
            index
        }
    }

    /// Record that `from` contains a macro referencing `to`.
    pub fn add_reference(&mut self, from: TemplateRef, to: TemplateRef) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);
        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Number of templates in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// References that point at no existing template, sorted.
    pub fn dangling_references(&self) -> impl Iterator<Item = &DanglingReference> {
        self.dangling.iter()
    }

    /// Fail with [`WikigenError::TemplateCycle`] if any template reaches itself.
    pub fn detect_cycles(&self) -> Result<(), WikigenError> {
        let mut colors: HashMap<NodeIndex, Color> =
            self.graph.node_indices().map(|n| (n, Color::White)).collect();
        let mut path: Vec<NodeIndex> = Vec::new();

        // Deterministic starting order so the reported chain is stable
        let mut starts: Vec<NodeIndex> = self.graph.node_indices().collect();
        starts.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));

        for node in starts {
            if matches!(colors.get(&node), Some(Color::White))
                && let Some(cycle) = self.dfs_visit(node, &mut colors, &mut path)
            {
                let chain = cycle.iter().map(|i| self.graph[*i].to_string()).collect::<Vec<_>>().join(" → ");
                return Err(WikigenError::TemplateCycle {
                    chain,
                });
            }
        }

        Ok(())
    }

    fn dfs_visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        path: &mut Vec<NodeIndex>,
    ) -> Option<Vec<NodeIndex>> {
        colors.insert(node, Color::Gray);
        path.push(node);

        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(node).collect();
        neighbors.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));

        for neighbor in neighbors {
            match colors.get(&neighbor) {
                Some(Color::Gray) => {
                    let start = path.iter().position(|n| *n == neighbor).unwrap_or(0);
                    let mut cycle = path[start..].to_vec();
                    cycle.push(neighbor);
                    return Some(cycle);
                }
                Some(Color::White) => {
                    if let Some(cycle) = self.dfs_visit(neighbor, colors, path) {
                        return Some(cycle);
                    }
                }
                _ => {}
            }
        }

        path.pop();
        colors.insert(node, Color::Black);
        None
    }
}

/// Check element templates for reference cycles.
///
/// Returns the dangling references (each also logged as a warning) when the
/// templates are acyclic.
pub fn validate_references(
    elements: &ElementsTemplates,
    pages: &PagesTemplates,
) -> Result<Vec<DanglingReference>, WikigenError> {
    let graph = ReferenceGraph::build(elements, Some(pages));
    graph.detect_cycles()?;

    let dangling: Vec<DanglingReference> = graph.dangling_references().cloned().collect();
    for reference in &dangling {
        tracing::warn!("Unknown element template {}", reference);
    }
    tracing::debug!(
        "Validated {} element templates, {} unknown references",
        graph.node_count(),
        dangling.len()
    );
    Ok(dangling)
}
