//! Greedy cheapest-insertion repair.
//!
//! Each removed chunk is tried at every position of every route and in a
//! route of its own, and committed where the solution is cheapest. This is
//! the hot loop of the whole search.

use crate::chunk::ResourceChunk;
use crate::config::InsertionEvaluation;
use crate::context::SearchContext;
use crate::cost::route_cost;
use crate::error::SolveError;
use crate::solution::{Route, Solution};

/// Where a chunk goes: a position in an existing route, or a new route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Into { route: usize, position: usize },
    NewRoute,
}

impl Insertion {
    /// Apply the insertion in place.
    pub fn apply(&self, solution: &mut Solution, chunk: ResourceChunk) {
        match *self {
            Insertion::Into { route, position } => {
                solution.routes[route].chunks.insert(position, chunk)
            }
            Insertion::NewRoute => solution.routes.push(Route::with_chunk(chunk)),
        }
    }
}

/// Every legal insertion point, existing routes first.
fn candidates(solution: &Solution) -> impl Iterator<Item = Insertion> + '_ {
    solution
        .routes
        .iter()
        .enumerate()
        .flat_map(|(route, r)| {
            (0..=r.len()).map(move |position| Insertion::Into { route, position })
        })
        .chain(std::iter::once(Insertion::NewRoute))
}

/// Reinsert `removed` chunks one after another at their cheapest position.
pub fn greedy_repair(
    mut partial: Solution,
    removed: &[ResourceChunk],
    ctx: &SearchContext<'_>,
    evaluation: InsertionEvaluation,
) -> Result<Solution, SolveError> {
    for &chunk in removed {
        let best = match evaluation {
            InsertionEvaluation::FullRecompute => best_by_full_cost(&partial, chunk, ctx)?,
            InsertionEvaluation::RouteDelta => best_by_route_delta(&partial, chunk, ctx)?,
        };

        best.unwrap_or(Insertion::NewRoute)
            .apply(&mut partial, chunk);
    }

    Ok(partial)
}

/// Score each trial by the cost of the whole solution after healing it, so
/// chunks that are still waiting for reinsertion count as singleton routes.
pub fn best_by_full_cost(
    partial: &Solution,
    chunk: ResourceChunk,
    ctx: &SearchContext<'_>,
) -> Result<Option<Insertion>, SolveError> {
    let mut best_cost = f64::INFINITY;
    let mut best = None;

    for insertion in candidates(partial) {
        let mut trial = partial.clone();
        insertion.apply(&mut trial, chunk);
        let cost = ctx.cost(&ctx.heal(trial))?;

        if cost < best_cost {
            best_cost = cost;
            best = Some(insertion);
        }
    }

    Ok(best)
}

/// Score each trial by the cost change of the one route it touches.
///
/// Routes that are not touched contribute the same amount to every trial,
/// so the ranking matches [`best_by_full_cost`] up to rounding.
pub fn best_by_route_delta(
    partial: &Solution,
    chunk: ResourceChunk,
    ctx: &SearchContext<'_>,
) -> Result<Option<Insertion>, SolveError> {
    let base: Vec<f64> = partial
        .routes
        .iter()
        .map(|route| route_cost(route, ctx.problem, ctx.oracle))
        .collect::<Result<_, _>>()?;

    let mut best_delta = f64::INFINITY;
    let mut best = None;

    for insertion in candidates(partial) {
        let delta = insertion_delta(partial, &base, insertion, chunk, ctx)?;

        if delta < best_delta {
            best_delta = delta;
            best = Some(insertion);
        }
    }

    Ok(best)
}

/// Cost change caused by a single insertion, given per-route base costs.
pub fn insertion_delta(
    partial: &Solution,
    base: &[f64],
    insertion: Insertion,
    chunk: ResourceChunk,
    ctx: &SearchContext<'_>,
) -> Result<f64, SolveError> {
    match insertion {
        Insertion::Into { route, position } => {
            let mut trial = partial.routes[route].clone();
            trial.chunks.insert(position, chunk);
            Ok(route_cost(&trial, ctx.problem, ctx.oracle)? - base[route])
        }
        Insertion::NewRoute => route_cost(&Route::with_chunk(chunk), ctx.problem, ctx.oracle),
    }
}
