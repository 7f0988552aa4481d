//! FILENAME: app/src/output.rs
//! PURPOSE: Presents batch results and validation outcomes, as text or JSON.
//! CONTEXT: Results are always listed in the order the operations were created,
//! whatever order the workers finished in.

use engine::{format_operand, OperationResult};
use parser::{Token, ValidatedExpression, ValidationError};
use serde::Serialize;
use std::io::Write;

/// One operation's outcome as reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultReport {
    /// 1-based position in the batch
    pub index: usize,
    pub value: f64,
    pub display: String,
    pub error: Option<String>,
}

impl ResultReport {
    pub fn from_result(index: usize, result: &OperationResult) -> Self {
        ResultReport {
            index,
            value: result.value,
            display: result.display.clone(),
            error: result.error.as_ref().map(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub normalized: Option<String>,
    pub tokens: Vec<String>,
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn from_outcome(outcome: &Result<ValidatedExpression, ValidationError>) -> Self {
        match outcome {
            Ok(validated) => ValidationReport {
                valid: true,
                normalized: Some(validated.as_str().to_string()),
                tokens: token_texts(validated),
                error: None,
            },
            Err(err) => ValidationReport {
                valid: false,
                normalized: None,
                tokens: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }
}

fn token_texts(validated: &ValidatedExpression) -> Vec<String> {
    validated
        .tokens()
        .iter()
        .filter(|token| **token != Token::EOF)
        .map(|token| token.to_string())
        .collect()
}

/// `Worker 1 -> (1.00 + 2.00)=3.00` or `Worker 1 Error -> <message>`
pub fn format_result_line(index: usize, result: &OperationResult) -> String {
    match &result.error {
        None => format!(
            "Worker {} -> {}={}",
            index,
            result.display,
            format_operand(result.value)
        ),
        Some(err) => format!("Worker {} Error -> {}", index, err),
    }
}

pub fn write_results(results: &[OperationResult], json: bool, out: &mut dyn Write) -> Result<(), String> {
    if json {
        let reports: Vec<ResultReport> = results
            .iter()
            .enumerate()
            .map(|(i, result)| ResultReport::from_result(i + 1, result))
            .collect();
        let text = serde_json::to_string_pretty(&reports).map_err(|e| e.to_string())?;
        writeln!(out, "{}", text).map_err(|e| e.to_string())?;
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        writeln!(out, "{}", format_result_line(i + 1, result)).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn write_validation(
    outcome: &Result<ValidatedExpression, ValidationError>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(&ValidationReport::from_outcome(outcome))
            .map_err(|e| e.to_string())?;
        return writeln!(out, "{}", text).map_err(|e| e.to_string());
    }

    match outcome {
        Ok(validated) => {
            writeln!(out, "Valid -> {}", validated).map_err(|e| e.to_string())?;
            writeln!(out, "Tokens -> {}", token_texts(validated).join(" ")).map_err(|e| e.to_string())
        }
        Err(err) => writeln!(out, "Invalid -> {}", err).map_err(|e| e.to_string()),
    }
}
