//! HTTP error reporting for the command-line client

use super::common::ErrorResponse;
use adboard::AdboardError;

pub async fn handle_error_response(response: reqwest::Response, operation: &str) {
    let status = response.status();
    match response.text().await {
        Ok(body) => report_error_body(status.as_u16(), &body, operation),
        Err(body_error) => {
            println!("Service error: {status} (failed to read response body: {body_error})");
        }
    }
}

pub fn handle_client_error(error: &AdboardError, operation: &str) {
    match error {
        AdboardError::UnexpectedStatus { actual, body, .. } => {
            report_error_body(*actual, body, operation)
        }
        other => println!("Failed to {operation}: {other}"),
    }
}

fn report_error_body(status: u16, body: &str, operation: &str) {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => {
            println!(
                "Failed to {} ({}): {}",
                operation, error_response.status, error_response.result.message
            );
            for (field, message) in &error_response.result.messages {
                println!("   {field}: {message}");
            }
        }
        Err(parse_error) => {
            println!("Service error: {status} (failed to parse error response: {parse_error})");
            if !body.is_empty() {
                println!("   Raw response: {}", body.trim());
            }
        }
    }
}
