use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, CustomQuery, QuerierWrapper, QueryRequest, StdResult};

/// Chain specific queries available to the Felina contracts.
///
/// The execution environment answers these queries; nothing in contract storage
/// backs them.
#[cw_serde]
pub enum FelinaQuery {
    /// The account producing the block the current transaction is included in.
    /// This changes from block to block and must be read at call time.
    BlockProducer {},
}

impl CustomQuery for FelinaQuery {}

#[cw_serde]
pub struct BlockProducerResponse {
    pub address: Addr,
}

/// Asks the environment for the producer of the current block
pub fn query_block_producer(querier: &QuerierWrapper<FelinaQuery>) -> StdResult<Addr> {
    let response: BlockProducerResponse =
        querier.query(&QueryRequest::Custom(FelinaQuery::BlockProducer {}))?;
    Ok(response.address)
}
