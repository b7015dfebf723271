//! Wallet endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;
use crate::validation::parse_evm_address;
use crate::wallets::types::{Transaction, Wallet};

#[derive(Debug, Deserialize)]
pub struct ListWalletsQuery {
    pub address: Option<String>,
    #[serde(rename = "chainId")]
    pub chain_id: Option<String>,
}

/// `GET /api/wallets` — wallet snapshots, filterable by address and chain.
///
/// The address filter goes through the store's normalized lookup, so a
/// malformed address yields an empty set rather than an error. The chain
/// filter compares the stringified chain id against the raw query value.
pub async fn list_wallets(
    State(state): State<AppState>,
    Query(query): Query<ListWalletsQuery>,
) -> Result<Json<ApiResponse<Vec<Wallet>>>, ApiError> {
    let mut wallets = match query.address.as_deref().filter(|a| !a.is_empty()) {
        Some(address) => state.store.wallets_by_address(address),
        None => state.store.wallets().to_vec(),
    };

    if let Some(chain) = query.chain_id.as_deref().filter(|c| !c.is_empty()) {
        wallets.retain(|w| w.chain_id.to_string() == chain);
    }

    Ok(Json(ApiResponse::list(wallets)))
}

/// `GET /api/wallets/{address}/transactions` — transfers where the address
/// is sender or receiver.
///
/// Three stages, each short-circuiting: syntax (400), wallet existence
/// (404), then the scan. The syntax check runs before any store access, and
/// a known wallet with no transfers is a success with `count: 0`.
pub async fn wallet_transactions(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<ApiResponse<Vec<Transaction>>>, ApiError> {
    let address = parse_evm_address(&address).ok_or(ApiError::InvalidAddressFormat)?;

    if !state.store.has_wallet(address) {
        tracing::debug!(address = %address, "Transaction lookup for unknown wallet");
        return Err(ApiError::WalletNotFound);
    }

    let transactions = state.store.transactions_for(address);
    Ok(Json(ApiResponse::list(transactions)))
}
