//! Search, random transaction and history commands

use chrono::Utc;
use std::process::ExitCode;

use explorer_core::{
    transaction_caption, transaction_title, ClassificationResult, Explorer, QueryKind,
};

use crate::router::TerminalRouter;

pub fn classify(explorer: &Explorer, query: &str) -> anyhow::Result<ExitCode> {
    let classification = explorer.classify(query);
    let result = ClassificationResult::from(&classification);
    println!("{}", serde_json::to_string(&result)?);

    match classification {
        Ok(QueryKind::ContractReference(contract)) => {
            println!("contract {} in {}", contract.name, contract.address);
            Ok(ExitCode::SUCCESS)
        }
        Ok(QueryKind::TransactionId(tx_id)) => {
            println!("transaction {tx_id}");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

pub async fn search(explorer: &Explorer, query: &str) -> anyhow::Result<ExitCode> {
    match explorer.search(&TerminalRouter, query).await? {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

pub async fn random(explorer: &Explorer) -> anyhow::Result<ExitCode> {
    let tx = explorer.random_transaction(&TerminalRouter).await?;
    explorer.record_view(&tx)?;

    println!("{}", transaction_title(&tx));
    println!("{}", transaction_caption(&tx, Utc::now()));

    Ok(ExitCode::SUCCESS)
}

pub fn recent(explorer: &Explorer, limit: usize) -> anyhow::Result<ExitCode> {
    let entries = explorer.recently_viewed(limit)?;
    if entries.is_empty() {
        println!("No recently viewed transactions");
        return Ok(ExitCode::SUCCESS);
    }

    let now = explorer.tick().app_time.unwrap_or_else(Utc::now);
    for entry in entries {
        let tx = &entry.transaction;
        println!(
            "{}  {}  ({}x)\n    {}",
            transaction_title(tx),
            transaction_caption(tx, now),
            entry.view_count,
            tx.tx_id
        );
    }

    Ok(ExitCode::SUCCESS)
}
