use crate::fetch::{FetchOutcome, Fetcher};
use crate::football_data::{Endpoints, MatchStatus, match_statuses};
use crate::http_cache::{Clock, ResponseCache};

/// True if any match in the competition's full list is currently live.
pub fn has_live_match<F: Fetcher, C: Clock>(
    cache: &mut ResponseCache<F, C>,
    endpoints: &Endpoints,
) -> bool {
    any_live(&cache.get(&endpoints.matches()))
}

pub fn any_live(outcome: &FetchOutcome) -> bool {
    outcome.payload().is_some_and(|value| {
        match_statuses(value)
            .into_iter()
            .any(|status| MatchStatus::from_api(status) == MatchStatus::Live)
    })
}
