#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Addr, Deps, DepsMut, Env, MessageInfo, QueryResponse, Response,
    StdResult, Storage, Uint128,
};
use felina::{query_block_producer, whole_tokens, FelinaQuery, DECIMALS};

use crate::attributes::{
    ATTR_ACTION, ATTR_ALLOWANCE, ATTR_AMOUNT, ATTR_BLOCK_PRODUCER, ATTR_BLOCK_REWARD, ATTR_BURNER,
    ATTR_FROM, ATTR_OWNER, ATTR_PREVIOUS_OWNER, ATTR_SPENDER, ATTR_TO, ATTR_TOTAL_SUPPLY,
};
use crate::error::ContractError;
use crate::msg::{
    AllowanceResponse, BalanceResponse, BlockRewardResponse, ExecuteMsg, InstantiateMsg,
    MigrateMsg, OwnerResponse, QueryMsg, TokenInfoResponse,
};
use crate::state::{
    allowance_of, balance_of, TokenInfo, ALLOWANCES, BALANCES, BLOCK_REWARD, OWNERSHIP,
    TOKEN_INFO,
};

const CONTRACT_NAME: &str = "crates.io:felina-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut<FelinaQuery>,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let InstantiateMsg {
        name,
        symbol,
        initial_supply,
        target_supply,
        block_reward,
    } = msg;

    ensure!(
        target_supply <= initial_supply,
        ContractError::TargetAboveInitialSupply {
            target_supply,
            initial_supply,
        }
    );

    let total_supply = whole_tokens(initial_supply, DECIMALS)?;
    let token_info = TokenInfo {
        name,
        symbol,
        decimals: DECIMALS,
        total_supply,
        target_supply: whole_tokens(target_supply, DECIMALS)?,
    };
    let block_reward = whole_tokens(block_reward, DECIMALS)?;

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    TOKEN_INFO.save(deps.storage, &token_info)?;
    BLOCK_REWARD.save(deps.storage, &block_reward)?;
    BALANCES.save(deps.storage, &info.sender, &total_supply)?;
    OWNERSHIP.initialize(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute(ATTR_OWNER, info.sender)
        .add_attribute(ATTR_TOTAL_SUPPLY, total_supply)
        .add_attribute(ATTR_BLOCK_REWARD, block_reward))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(
    deps: DepsMut<FelinaQuery>,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut<FelinaQuery>,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, amount),
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, info, owner, amount),
        ExecuteMsg::SetBlockReward { amount } => execute_set_block_reward(deps, info, amount),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps<FelinaQuery>, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?)?,
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?)?,
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)?
        }
        QueryMsg::BlockReward {} => to_json_binary(&query_block_reward(deps)?)?,
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?)?,
    };
    Ok(response)
}

fn query_token_info(deps: Deps<FelinaQuery>) -> StdResult<TokenInfoResponse> {
    TOKEN_INFO.load(deps.storage)
}

fn query_balance(deps: Deps<FelinaQuery>, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = balance_of(deps.storage, &address)?;
    Ok(BalanceResponse { balance })
}

fn query_allowance(
    deps: Deps<FelinaQuery>,
    owner: String,
    spender: String,
) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = allowance_of(deps.storage, &owner, &spender)?;
    Ok(AllowanceResponse { allowance })
}

fn query_block_reward(deps: Deps<FelinaQuery>) -> StdResult<BlockRewardResponse> {
    let block_reward = BLOCK_REWARD.load(deps.storage)?;
    Ok(BlockRewardResponse { block_reward })
}

fn query_owner(deps: Deps<FelinaQuery>) -> StdResult<OwnerResponse> {
    let owner = OWNERSHIP.owner(deps.storage)?;
    Ok(OwnerResponse { owner })
}

fn execute_transfer(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    move_funds(deps, &info.sender, &recipient, amount)
}

/// The allowance is only consumed once the movement went through
fn execute_transfer_from(
    mut deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let spender = info.sender;

    let allowance = allowance_of(deps.storage, &owner, &spender)?;
    ensure!(
        amount <= allowance,
        ContractError::AllowanceExceeded {
            requested: amount,
            allowance,
        }
    );

    let response = move_funds(deps.branch(), &owner, &recipient, amount)?;
    ALLOWANCES.save(deps.storage, (&owner, &spender), &(allowance - amount))?;
    Ok(response.add_attribute(ATTR_SPENDER, spender))
}

/// Moves `amount` from `from` to `to`.
///
/// When a block reward is set, `from` pays it to the producer of the current block on top
/// of `amount`. The reward is a redistribution of existing tokens, the supply stays the same.
fn move_funds(
    deps: DepsMut<FelinaQuery>,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let block_reward = BLOCK_REWARD.load(deps.storage)?;
    let available = balance_of(deps.storage, from)?;
    // A sum beyond the integer range is never covered by any balance
    let required = match amount.checked_add(block_reward) {
        Ok(required) if available >= required => required,
        _ => {
            return Err(ContractError::InsufficientBalance {
                required: amount.saturating_add(block_reward),
                available,
            })
        }
    };

    // Resolve the producer before the first write
    let block_producer = if block_reward.is_zero() {
        None
    } else {
        Some(query_block_producer(&deps.querier)?)
    };

    BALANCES.save(deps.storage, from, &(available - required))?;
    credit(deps.storage, to, amount)?;

    let mut response = Response::new()
        .add_attribute(ATTR_ACTION, "transfer")
        .add_attribute(ATTR_FROM, from.to_string())
        .add_attribute(ATTR_TO, to.to_string())
        .add_attribute(ATTR_AMOUNT, amount);

    if let Some(block_producer) = block_producer {
        credit(deps.storage, &block_producer, block_reward)?;
        response = response
            .add_attribute(ATTR_BLOCK_PRODUCER, block_producer)
            .add_attribute(ATTR_BLOCK_REWARD, block_reward);
    }

    Ok(response)
}

fn credit(storage: &mut dyn Storage, address: &Addr, amount: Uint128) -> Result<(), ContractError> {
    BALANCES.update(storage, address, |balance| -> Result<_, ContractError> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

fn execute_approve(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &amount)?;
    Ok(approval_response("approve", &info.sender, &spender, amount))
}

fn execute_increase_allowance(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = allowance_of(deps.storage, &info.sender, &spender)?.checked_add(amount)?;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &allowance)?;
    Ok(approval_response(
        "increase_allowance",
        &info.sender,
        &spender,
        allowance,
    ))
}

fn execute_decrease_allowance(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;
    let current = allowance_of(deps.storage, &info.sender, &spender)?;
    let allowance =
        current
            .checked_sub(amount)
            .map_err(|_| ContractError::AllowanceUnderflow {
                allowance: current,
                requested: amount,
            })?;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &allowance)?;
    Ok(approval_response(
        "decrease_allowance",
        &info.sender,
        &spender,
        allowance,
    ))
}

fn approval_response(action: &str, owner: &Addr, spender: &Addr, allowance: Uint128) -> Response {
    Response::new()
        .add_attribute(ATTR_ACTION, action)
        .add_attribute(ATTR_OWNER, owner.to_string())
        .add_attribute(ATTR_SPENDER, spender.to_string())
        .add_attribute(ATTR_ALLOWANCE, allowance)
}

fn execute_burn(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    burn_funds(deps.storage, &info.sender, amount)
}

/// The supply floor applies here exactly as for [`execute_burn`]
fn execute_burn_from(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = info.sender;

    let allowance = allowance_of(deps.storage, &owner, &spender)?;
    ensure!(
        amount <= allowance,
        ContractError::AllowanceExceeded {
            requested: amount,
            allowance,
        }
    );

    let response = burn_funds(deps.storage, &owner, amount)?;
    ALLOWANCES.save(deps.storage, (&owner, &spender), &(allowance - amount))?;
    Ok(response.add_attribute(ATTR_SPENDER, spender))
}

/// Destroys `amount` of `burner`'s tokens unless this takes the supply below the target
fn burn_funds(
    storage: &mut dyn Storage,
    burner: &Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut token_info = TOKEN_INFO.load(storage)?;
    let TokenInfo {
        total_supply,
        target_supply,
        ..
    } = token_info;

    let remaining_supply = match total_supply.checked_sub(amount) {
        Ok(remaining) if remaining >= target_supply => remaining,
        _ => {
            return Err(ContractError::SupplyBelowTarget {
                total_supply,
                amount,
                target_supply,
            })
        }
    };

    let available = balance_of(storage, burner)?;
    ensure!(
        available >= amount,
        ContractError::InsufficientBalance {
            required: amount,
            available,
        }
    );

    BALANCES.save(storage, burner, &(available - amount))?;
    token_info.total_supply = remaining_supply;
    TOKEN_INFO.save(storage, &token_info)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "burn")
        .add_attribute(ATTR_BURNER, burner.to_string())
        .add_attribute(ATTR_AMOUNT, amount)
        .add_attribute(ATTR_TOTAL_SUPPLY, remaining_supply))
}

fn execute_set_block_reward(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    OWNERSHIP.guard(deps.storage, &info.sender, |storage| {
        BLOCK_REWARD.save(storage, &amount)?;
        Ok::<_, ContractError>(())
    })?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_block_reward")
        .add_attribute(ATTR_BLOCK_REWARD, amount))
}

fn execute_transfer_ownership(
    deps: DepsMut<FelinaQuery>,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let previous_owner = OWNERSHIP.transfer(deps.storage, &info.sender, &new_owner)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "transfer_ownership")
        .add_attribute(ATTR_PREVIOUS_OWNER, previous_owner)
        .add_attribute(ATTR_OWNER, new_owner))
}
