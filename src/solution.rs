//! Solution representation: routes of resource chunks.

use crate::chunk::ResourceChunk;
use crate::problem::DEPOT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of pickups, implicitly starting and ending at the depot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub chunks: Vec<ResourceChunk>,
}

impl Route {
    pub fn new(chunks: Vec<ResourceChunk>) -> Self {
        Route { chunks }
    }

    /// Create a route with a single pickup.
    pub fn with_chunk(chunk: ResourceChunk) -> Self {
        Route {
            chunks: vec![chunk],
        }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total gold collected by the route.
    pub fn load(&self) -> f64 {
        self.chunks.iter().map(|chunk| chunk.amount).sum()
    }
}

/// A collection of routes. Route order carries no meaning.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub routes: Vec<Route>,
}

impl Solution {
    /// Create an empty solution.
    pub fn new() -> Self {
        Solution { routes: Vec::new() }
    }

    /// Build a solution, dropping empty routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Solution {
            routes: routes.into_iter().filter(|r| !r.is_empty()).collect(),
        }
    }

    /// One route per chunk.
    pub fn star(chunks: &[ResourceChunk]) -> Self {
        Solution {
            routes: chunks.iter().map(|&c| Route::with_chunk(c)).collect(),
        }
    }

    /// Every chunk in a single route, in the given order.
    pub fn single_route(chunks: &[ResourceChunk]) -> Self {
        Self::from_routes(vec![Route::new(chunks.to_vec())])
    }

    /// Iterate over all chunks, route by route.
    pub fn chunks(&self) -> impl Iterator<Item = &ResourceChunk> + '_ {
        self.routes.iter().flat_map(|route| route.chunks.iter())
    }

    pub fn chunk_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Flatten into `(node, amount)` pairs with a `(DEPOT, 0.0)` marker
    /// after every route.
    pub fn to_path(&self) -> Vec<(usize, f64)> {
        let mut path = Vec::with_capacity(self.chunk_count() + self.routes.len());

        for route in &self.routes {
            path.extend(route.chunks.iter().map(|c| (c.node, c.amount)));
            path.push((DEPOT, 0.0));
        }

        path
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Routes: {}", self.routes.len())?;
        writeln!(f, "  Chunks: {}", self.chunk_count())?;

        for (i, route) in self.routes.iter().enumerate() {
            let stops: Vec<String> = route
                .chunks
                .iter()
                .map(|c| format!("{}({:.2})", c.node, c.amount))
                .collect();
            writeln!(
                f,
                "  Route {}: [{}] (Load: {:.2})",
                i,
                stops.join(", "),
                route.load()
            )?;
        }

        Ok(())
    }
}
