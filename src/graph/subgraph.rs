use super::{BookIndex, PathResult};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Neighbours pulled in per path book
pub const MAX_NEIGHBOURS_PER_NODE: usize = 3;

/// Neighbours pulled in across the whole subgraph
pub const MAX_TOTAL_NEIGHBOURS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub similar_books: Vec<String>,
    /// Position along the path (neighbours inherit the path book's position)
    pub degree: usize,
    #[serde(rename = "isEndpoint")]
    pub is_endpoint: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

/// A path plus a bounded ring of neighbours, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subgraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    pub degrees: usize,
    pub explored: usize,
}

/// Undirected link accumulator
#[derive(Default)]
struct LinkSet {
    seen: HashSet<(String, String)>,
    links: Vec<GraphLink>,
}

impl LinkSet {
    fn key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    fn contains(&self, a: &str, b: &str) -> bool {
        self.seen.contains(&Self::key(a, b))
    }

    /// Record a link unless the pair is already connected either way
    fn add(&mut self, source: &str, target: &str) {
        if self.seen.insert(Self::key(source, target)) {
            self.links.push(GraphLink {
                source: source.to_string(),
                target: target.to_string(),
            });
        }
    }
}

impl BookIndex {
    /// Expand a path into a small graph of the path books, some of their
    /// neighbours and every link among the included books.
    pub fn subgraph(&self, result: &PathResult) -> Subgraph {
        let path = &result.path;
        let on_path: HashSet<&str> = path.iter().map(String::as_str).collect();
        let path_degree: HashMap<&str, usize> = path
            .iter()
            .enumerate()
            .map(|(degree, id)| (id.as_str(), degree))
            .collect();

        let mut nodes: IndexMap<String, GraphNode> = IndexMap::new();
        let mut links = LinkSet::default();

        for (degree, id) in path.iter().enumerate() {
            if let Some(book) = self.get(id) {
                nodes.insert(
                    id.clone(),
                    GraphNode {
                        id: book.book_id.clone(),
                        title: book.title.clone(),
                        image_url: book.image_url.clone(),
                        similar_books: book.similar_books.clone(),
                        degree,
                        is_endpoint: degree == 0 || degree + 1 == path.len(),
                    },
                );
            }
        }

        // Neighbours of each path book
        let mut neighbours_added = 0;
        for (degree, id) in path.iter().enumerate() {
            let Some(book) = self.get(id) else {
                continue;
            };

            let mut added_here = 0;
            for neighbour_id in &book.similar_books {
                if neighbours_added >= MAX_TOTAL_NEIGHBOURS || added_here >= MAX_NEIGHBOURS_PER_NODE
                {
                    break;
                }
                if on_path.contains(neighbour_id.as_str()) {
                    continue;
                }
                let Some(neighbour) = self.get(neighbour_id) else {
                    continue;
                };

                if !nodes.contains_key(neighbour_id) {
                    nodes.insert(
                        neighbour_id.clone(),
                        GraphNode {
                            id: neighbour.book_id.clone(),
                            title: neighbour.title.clone(),
                            image_url: neighbour.image_url.clone(),
                            similar_books: neighbour.similar_books.clone(),
                            degree,
                            is_endpoint: false,
                        },
                    );
                    neighbours_added += 1;
                    added_here += 1;
                }

                links.add(id, neighbour_id);

                // Neighbour also touches another path book
                for other in &neighbour.similar_books {
                    if other != id && on_path.contains(other.as_str()) {
                        links.add(neighbour_id, other);
                    }
                }
            }
        }

        // Path-to-path links, oriented from lower to higher degree
        for id in path {
            let Some(book) = self.get(id) else {
                continue;
            };

            for neighbour_id in &book.similar_books {
                let Some(&target_degree) = path_degree.get(neighbour_id.as_str()) else {
                    continue;
                };
                if links.contains(id, neighbour_id) {
                    continue;
                }

                let source_degree = path_degree.get(id.as_str()).copied().unwrap_or_default();
                if source_degree < target_degree {
                    links.add(id, neighbour_id);
                } else {
                    links.add(neighbour_id, id);
                }
            }
        }

        // Anything else connecting two included books
        for (id, node) in &nodes {
            for neighbour_id in &node.similar_books {
                if nodes.contains_key(neighbour_id) {
                    links.add(id, neighbour_id);
                }
            }
        }

        Subgraph {
            nodes: nodes.into_values().collect(),
            links: links.links,
            degrees: result.degrees(),
            explored: result.explored,
        }
    }
}
