//! Command shim for test clients.
//!
//! `POST /execute` runs a bot command as a given member without Discord and
//! returns the service result as JSON. Only database state changes; Discord
//! roles are not touched, so a `buy` through the shim is not reflected in the
//! guild until the member buys through the bot or the role expiry job runs.

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    error::AppError,
    middleware::auth::BearerGuard,
    model::{
        api::{ExecuteRequestDto, ExecuteResponseDto},
        premium::PurchaseKind,
    },
    service::{
        activity::{ActivityService, DEFAULT_PERIOD_DAYS, DEFAULT_RANKING_SIZE, MAX_RANKING_SIZE},
        economy::EconomyService,
        premium::PremiumService,
    },
    state::AppState,
};

/// Run a command as a member.
///
/// # Returns
/// - `200 OK` - `{ command, result }`
/// - `400 Bad Request` - Missing or invalid arguments, or a rule violation
/// - `401 Unauthorized` - Missing or wrong bearer token
/// - `404 Not Found` - Unknown command
/// - `500 Internal Server Error` - Unexpected failure
pub async fn execute(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ExecuteRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(token) = state.config.execute_api_token.as_deref() else {
        return Err(AppError::NotFound("Command shim is disabled".to_string()));
    };
    BearerGuard::new(token, &headers).require()?;

    tracing::debug!(
        command = %payload.command,
        member_id = payload.member_id,
        "Executing shim command"
    );

    let result = run_command(&state.db, &payload, Utc::now()).await?;

    Ok(Json(ExecuteResponseDto {
        command: payload.command,
        result,
    }))
}

/// Runs one shim command and serializes its result.
pub async fn run_command(
    db: &DatabaseConnection,
    request: &ExecuteRequestDto,
    now: DateTime<Utc>,
) -> Result<Value, AppError> {
    let member_id = request.member_id;
    let args = &request.args;

    match request.command.as_str() {
        "balance" => {
            let balance = EconomyService::new(db).balance(member_id).await?;

            Ok(json!({ "member_id": member_id, "balance": balance }))
        }
        "add_balance" => {
            let amount: i64 = arg(args, "amount")?;
            let member = EconomyService::new(db).add_balance(member_id, amount).await?;

            Ok(json!({ "member_id": member_id, "balance": member.wallet_balance }))
        }
        "transfer" => {
            let to: u64 = arg(args, "to")?;
            let amount: i64 = arg(args, "amount")?;
            let outcome = EconomyService::new(db)
                .transfer(member_id, to, amount)
                .await?;

            Ok(json!({
                "from_balance": outcome.from_balance,
                "to_balance": outcome.to_balance,
            }))
        }
        "buy" => {
            let tier: String = arg(args, "tier")?;
            let outcome = PremiumService::new(db).buy(member_id, &tier, now).await?;

            let (kind, upgraded_from) = match outcome.kind {
                PurchaseKind::New => ("new", None),
                PurchaseKind::Extension => ("extension", None),
                PurchaseKind::Upgrade { from } => ("upgrade", Some(from.name)),
            };

            Ok(json!({
                "tier": outcome.tier.name,
                "kind": kind,
                "upgraded_from": upgraded_from,
                "role_id": outcome.role_id,
                "removed_role_ids": outcome.removed_role_ids,
                "expiration_date": outcome.expiration_date,
                "charged": outcome.charged,
                "refunded": outcome.refunded,
                "balance_after": outcome.balance_after,
            }))
        }
        "profile" => {
            let days = optional_arg(args, "days")?.unwrap_or(DEFAULT_PERIOD_DAYS);
            let profile = ActivityService::new(db).profile(member_id, days, now).await?;

            Ok(serde_json::to_value(profile)
                .map_err(|e| AppError::InternalError(e.to_string()))?)
        }
        "ranking" => {
            let days = optional_arg(args, "days")?.unwrap_or(DEFAULT_PERIOD_DAYS);
            let limit = optional_arg(args, "limit")?
                .unwrap_or(DEFAULT_RANKING_SIZE)
                .clamp(1, MAX_RANKING_SIZE);
            let ranking = ActivityService::new(db).ranking(days, limit, now).await?;

            Ok(serde_json::to_value(ranking)
                .map_err(|e| AppError::InternalError(e.to_string()))?)
        }
        "shop" => {
            let catalog: Vec<Value> = PremiumService::new(db)
                .catalog()
                .iter()
                .map(|tier| {
                    json!({
                        "name": tier.name,
                        "price": tier.price,
                        "max_mods": tier.max_mods,
                    })
                })
                .collect();

            Ok(Value::Array(catalog))
        }
        other => Err(AppError::NotFound(format!("Unknown command '{}'", other))),
    }
}

fn arg<T: DeserializeOwned>(args: &Value, name: &str) -> Result<T, AppError> {
    optional_arg(args, name)?
        .ok_or_else(|| AppError::BadRequest(format!("Missing argument '{}'", name)))
}

fn optional_arg<T: DeserializeOwned>(args: &Value, name: &str) -> Result<Option<T>, AppError> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| AppError::BadRequest(format!("Invalid argument '{}': {}", name, e))),
    }
}
