use super::BookIndex;
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::HashMap;

/// Shortest chain of similar-book links between two books
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// book_ids from start to end, inclusive
    pub path: Vec<String>,
    /// Number of books discovered while searching
    pub explored: usize,
}

impl PathResult {
    /// Number of hops between the endpoints
    pub fn degrees(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

type Parents<'a> = HashMap<&'a str, Option<&'a str>>;

enum Expansion<'a> {
    Frontier(IndexSet<&'a str>),
    Met(&'a str),
}

impl BookIndex {
    /// Bidirectional breadth-first search over `similar_books`.
    ///
    /// Only ids present in the index are traversed. The two frontiers grow
    /// one level at a time, start side first.
    pub fn shortest_path<'a>(&'a self, start: &'a str, end: &'a str) -> Option<PathResult> {
        if start == end {
            return Some(PathResult {
                path: vec![start.to_string()],
                explored: 1,
            });
        }

        if !self.contains(start) || !self.contains(end) {
            return None;
        }

        let mut front_start: IndexSet<&str> = IndexSet::from([start]);
        let mut front_end: IndexSet<&str> = IndexSet::from([end]);
        let mut parents_start: Parents = HashMap::from([(start, None)]);
        let mut parents_end: Parents = HashMap::from([(end, None)]);
        let mut explored = 2;

        while !front_start.is_empty() && !front_end.is_empty() {
            match self.expand(&front_start, &mut parents_start, &parents_end, &mut explored) {
                Expansion::Met(meeting) => {
                    return Some(PathResult {
                        path: reconstruct(&parents_start, &parents_end, meeting),
                        explored,
                    });
                }
                Expansion::Frontier(next) => front_start = next,
            }

            match self.expand(&front_end, &mut parents_end, &parents_start, &mut explored) {
                Expansion::Met(meeting) => {
                    return Some(PathResult {
                        path: reconstruct(&parents_start, &parents_end, meeting),
                        explored,
                    });
                }
                Expansion::Frontier(next) => front_end = next,
            }
        }

        None
    }

    /// Advance one side of the search by a single level
    fn expand<'a>(
        &'a self,
        frontier: &IndexSet<&'a str>,
        parents: &mut Parents<'a>,
        other_parents: &Parents<'a>,
        explored: &mut usize,
    ) -> Expansion<'a> {
        let mut next = IndexSet::new();

        for &book_id in frontier {
            let Some(book) = self.get(book_id) else {
                continue;
            };

            for neighbour in &book.similar_books {
                let neighbour = neighbour.as_str();
                if !self.contains(neighbour) || parents.contains_key(neighbour) {
                    continue;
                }

                parents.insert(neighbour, Some(book_id));
                next.insert(neighbour);
                *explored += 1;

                if other_parents.contains_key(neighbour) {
                    return Expansion::Met(neighbour);
                }
            }
        }

        Expansion::Frontier(next)
    }
}

/// Join the two half-paths at the node where the searches met
fn reconstruct(parents_start: &Parents, parents_end: &Parents, meeting: &str) -> Vec<String> {
    let mut path = Vec::new();

    let mut node = Some(meeting);
    while let Some(id) = node {
        path.push(id.to_string());
        node = parents_start.get(id).copied().flatten();
    }
    path.reverse();

    let mut node = parents_end.get(meeting).copied().flatten();
    while let Some(id) = node {
        path.push(id.to_string());
        node = parents_end.get(id).copied().flatten();
    }

    path
}
