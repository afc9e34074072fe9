use cosmwasm_std::{QuerierWrapper, StdResult, Timestamp};
use felina_token::msg::{QueryMsg as TokenQueryMsg, TokenInfoResponse};

use crate::msg::UpkeepResponse;
use crate::state::{Config, Schedule};

/// Evaluates the upkeep predicate against the current token supply.
///
/// An upkeep is needed once `burning_interval` seconds have passed since the last one,
/// as long as the token supply is above its target supply.
pub fn evaluate(
    querier: &QuerierWrapper,
    now: Timestamp,
    config: &Config,
    schedule: &Schedule,
) -> StdResult<UpkeepResponse> {
    let elapsed = now
        .seconds()
        .saturating_sub(schedule.last_timestamp.seconds());
    let has_elapsed = elapsed >= config.burning_interval;

    let token_info: TokenInfoResponse =
        querier.query_wasm_smart(&config.token, &TokenQueryMsg::TokenInfo {})?;
    let floor_reached = token_info.total_supply <= token_info.target_supply;

    Ok(UpkeepResponse {
        upkeep_needed: has_elapsed && !floor_reached,
        has_elapsed,
        floor_reached,
    })
}
