use anyhow::{Context, Result};
use clap::Subcommand;
use records::RecordPolicy;
use serde::Serialize;
use storage::Database;
use storage::dto::{
    ApiResponse, AthleteInclude, HistoryResponse, LocalizedMessage, RecordsQuery, RecordsResponse,
};
use storage::error::StorageError;
use storage::services::{athletes, meets, records as record_service};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record board of every division, weight class and lift
    Records {
        /// Board as it stood at the end of this system year
        #[arg(long)]
        year: Option<i16>,
    },
    /// Records broken during one system year
    History {
        /// Defaults to the newest year with an eligible meet
        #[arg(long)]
        year: Option<i16>,
    },
    /// Visible meets, newest first
    Meets,
    /// One meet with its results and participants
    Meet { meet_id: i32 },
    /// Active athletes
    Athletes,
    /// Athlete profile
    Athlete {
        vpf_id: String,

        /// Extra sections: personalBest, compHistory
        #[arg(long, value_delimiter = ',')]
        include: Vec<AthleteInclude>,
    },
}

/// Rendered envelope and whether the query succeeded.
#[derive(Debug)]
pub struct Outcome {
    pub body: String,
    pub success: bool,
}

pub async fn execute(command: Command, db: &Database, policy: RecordPolicy) -> Result<Outcome> {
    let pool = db.pool();

    match command {
        Command::Records { year } => respond(
            record_service::snapshot(pool, policy, &RecordsQuery { year }).await,
            records_message,
            None,
        ),
        Command::History { year } => respond(
            record_service::history(pool, policy, &RecordsQuery { year }).await,
            history_message,
            None,
        ),
        Command::Meets => respond(
            meets::list(pool).await,
            |_| {
                LocalizedMessage::new(
                    "Meets retrieved successfully",
                    "Lấy danh sách meet thành công",
                )
            },
            None,
        ),
        Command::Meet { meet_id } => respond(
            meets::detail(pool, meet_id).await,
            |_| {
                LocalizedMessage::new(
                    "Meet details retrieved successfully",
                    "Lấy thông tin meet thành công",
                )
            },
            Some(LocalizedMessage::new("Meet not found", "Không tìm thấy meet")),
        ),
        Command::Athletes => respond(
            athletes::list(pool).await,
            |_| {
                LocalizedMessage::new(
                    "Athletes retrieved successfully",
                    "Lấy danh sách vận động viên thành công",
                )
            },
            None,
        ),
        Command::Athlete { vpf_id, include } => respond(
            athletes::detail(pool, &vpf_id, &include).await,
            |_| {
                LocalizedMessage::new(
                    "Athlete details retrieved successfully",
                    "Lấy thông tin vận động viên thành công",
                )
            },
            Some(LocalizedMessage::new(
                "Athlete not found",
                "Không tìm thấy vận động viên",
            )),
        ),
    }
}

fn no_meets_found() -> LocalizedMessage {
    LocalizedMessage::new("No meets found", "Không tìm thấy meet nào")
}

fn records_message(response: &RecordsResponse) -> LocalizedMessage {
    if response.records.iter().all(|slot| slot.record.is_none()) {
        no_meets_found()
    } else {
        LocalizedMessage::new(
            "Records retrieved successfully",
            "Lấy thông tin kỷ lục thành công",
        )
    }
}

fn history_message(response: &HistoryResponse) -> LocalizedMessage {
    match response.history.year {
        None => no_meets_found(),
        Some(_) if response.history.meet_ids.is_empty() => LocalizedMessage::new(
            "No national meet found for the specified year",
            "Không tìm thấy giải quốc gia cho năm được chỉ định",
        ),
        Some(_) => LocalizedMessage::new(
            "Record history retrieved successfully",
            "Lấy lịch sử kỷ lục thành công",
        ),
    }
}

/// Wraps a service result in the envelope. `not_found` is the message for lookups
/// of a single row; list queries pass `None`.
fn respond<T: Serialize>(
    result: storage::error::Result<T>,
    success: impl FnOnce(&T) -> LocalizedMessage,
    not_found: Option<LocalizedMessage>,
) -> Result<Outcome> {
    let response = match result {
        Ok(data) => {
            let message = success(&data);
            ApiResponse::ok(data, message)
        }
        Err(err) if err.is_not_found() => {
            tracing::warn!("{}", err);
            ApiResponse::error(not_found.unwrap_or_else(LocalizedMessage::not_found))
        }
        Err(StorageError::Validation(err)) => {
            tracing::warn!("Rejected query: {}", err);
            ApiResponse::error(LocalizedMessage::invalid_request())
        }
        Err(err) => {
            tracing::error!("Query failed: {}", err);
            ApiResponse::error(LocalizedMessage::internal_error())
        }
    };

    let body = serde_json::to_string_pretty(&response).context("Failed to serialize response")?;

    Ok(Outcome {
        body,
        success: response.success,
    })
}
