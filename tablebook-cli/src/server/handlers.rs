//! Request handlers.
//!
//! Every handler opens its own store connection on the blocking pool and
//! drops it before answering.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use tablebook::operations::{ConfirmOptions, CreateOptions, Lifecycle};
use tablebook::timeslot::parse_date;
use tablebook::{report, Availability, Database, ReservationView, TableNumber};

use super::error::{ApiError, Operation};
use super::AppState;

/// Body of `POST /reserva`.
#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    data: String,
    hora: String,
    mesa: i64,
    pessoas: i64,
    #[serde(default)]
    responsavel: String,
}

/// Body of `POST /confirmar/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    garcom: Option<String>,
}

/// Query of `GET /mesa/{mesa}/disponibilidade`.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    data: Option<String>,
}

/// Query of `GET /relatorio/periodo`.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    inicio: Option<String>,
    fim: Option<String>,
}

/// Runs `f` against a freshly opened store on the blocking pool.
async fn with_store<T, F>(state: &AppState, operation: &Operation, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&mut Database) -> tablebook::Result<T> + Send + 'static,
{
    let config = state.db_config.clone();
    tokio::task::spawn_blocking(move || {
        let mut db = Database::open(config)?;
        f(&mut db)
    })
    .await
    .map_err(|e| ApiError::internal(operation, e))?
    .map_err(|e| ApiError::from_error(operation, e))
}

fn table_number(mesa: i64, operation: &Operation) -> Result<TableNumber, ApiError> {
    TableNumber::try_from(mesa).map_err(|e| ApiError::from_error(operation, e.into()))
}

/// Unwraps a path segment, answering 400 `{mensagem}` when it does not parse.
fn path_param<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    path.map(|Path(value)| value).map_err(|e| ApiError::bad_request(e.body_text()))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let operation = Operation::Create {
        mesa: request.mesa,
        data: request.data.clone(),
        hora: request.hora.clone(),
    };
    let options = CreateOptions::new(
        request.data,
        request.hora,
        request.mesa,
        request.pessoas,
        request.responsavel,
    );

    let outcome = with_store(&state, &operation, move |db| {
        Lifecycle::new(db).create(options)
    })
    .await?;

    Ok(Json(json!({
        "mensagem": "Reserva criada com sucesso",
        "id": outcome.id,
        "horario": outcome.time_range,
    })))
}

pub async fn cancel(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = path_param(id)?;
    with_store(&state, &Operation::Cancel { id }, move |db| {
        Lifecycle::new(db).cancel(id)
    })
    .await?;
    Ok(Json(json!({ "mensagem": "Reserva cancelada com sucesso" })))
}

pub async fn confirm(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ConfirmRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = path_param(id)?;
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let options = ConfirmOptions::new(id, request.garcom.unwrap_or_default());

    let outcome = with_store(&state, &Operation::Confirm { id }, move |db| {
        Lifecycle::new(db).confirm(options)
    })
    .await?;

    Ok(Json(json!({
        "mensagem": "Reserva confirmada",
        "horario": outcome.time_range,
    })))
}

pub async fn finalize(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = path_param(id)?;
    with_store(&state, &Operation::Finalize { id }, move |db| {
        Lifecycle::new(db).finalize(id)
    })
    .await?;
    Ok(Json(json!({ "mensagem": "Reserva finalizada" })))
}

pub async fn availability(
    State(state): State<AppState>,
    mesa: Result<Path<i64>, PathRejection>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Availability>, ApiError> {
    let operation = Operation::Report("availability");
    let table = table_number(path_param(mesa)?, &operation)?;
    let data = query
        .data
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Parametro \"data\" e obrigatorio"))?;
    let date = parse_date(&data).map_err(|e| ApiError::from_error(&operation, e))?;

    let availability = with_store(&state, &operation, move |db| {
        report::availability(db.connection(), table, date)
    })
    .await?;
    Ok(Json(availability))
}

pub async fn report_period(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<ReservationView>>, ApiError> {
    let (Some(inicio), Some(fim)) = (query.inicio, query.fim) else {
        return Err(ApiError::bad_request(
            "Parametros \"inicio\" e \"fim\" sao obrigatorios.",
        ));
    };
    let operation = Operation::Report("period");
    let start = parse_date(&inicio).map_err(|e| ApiError::from_error(&operation, e))?;
    let end = parse_date(&fim).map_err(|e| ApiError::from_error(&operation, e))?;

    let rows = with_store(&state, &operation, move |db| {
        report::by_period(db.connection(), start, end)
    })
    .await?;
    Ok(Json(rows))
}

pub async fn report_table(
    State(state): State<AppState>,
    mesa: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<ReservationView>>, ApiError> {
    let operation = Operation::Report("table");
    let table = table_number(path_param(mesa)?, &operation)?;
    let rows = with_store(&state, &operation, move |db| {
        report::by_table(db.connection(), table)
    })
    .await?;
    Ok(Json(rows))
}

pub async fn report_server(
    State(state): State<AppState>,
    nome: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<ReservationView>>, ApiError> {
    let nome = path_param(nome)?;
    let rows = with_store(&state, &Operation::Report("server"), move |db| {
        report::by_server(db.connection(), &nome)
    })
    .await?;
    Ok(Json(rows))
}

pub async fn pending(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationView>>, ApiError> {
    let rows = with_store(&state, &Operation::Report("pending"), |db| {
        report::pending(db.connection())
    })
    .await?;
    Ok(Json(rows))
}

pub async fn in_use(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationView>>, ApiError> {
    let now = Local::now().naive_local();
    let rows = with_store(&state, &Operation::Report("in-use"), move |db| {
        report::in_use(db.connection(), now)
    })
    .await?;
    Ok(Json(rows))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "online",
        "service": "tablebook",
        "timestamp": Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string(),
    }))
}

pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint nao encontrado" })),
    )
}
