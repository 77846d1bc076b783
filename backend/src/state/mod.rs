//! Client-side search state: the cross-match reducer and the query-string
//! parameters.

pub mod crossmatch;
pub mod search_params;

pub use crossmatch::{
    reduce, CrossmatchAction, CrossmatchState, CrossmatchStore, ResolverPatch, ResolverService,
    ResolverState, ResultsState,
};
pub use search_params::{RadiusUnit, SearchParams, DEFAULT_RADIUS};
