//! Phone commands.

use clap::Args;
use domain::models::{AddPhoneRequest, DeletePhoneRequest};
use persistence::repositories::CustomerRepository;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::CliError;

#[derive(Debug, Clone, Args)]
pub struct PhoneArgs {
    #[arg(long)]
    pub customer_id: i32,
    /// Ten digits, no separators
    #[arg(long = "phone")]
    pub phone_number: String,
}

pub async fn add(repo: &CustomerRepository, args: PhoneArgs) -> Result<Value, CliError> {
    let request = AddPhoneRequest {
        customer_id: args.customer_id,
        phone_number: args.phone_number,
    };
    request.validate()?;

    let phone_id = repo
        .add_phone(request.customer_id, &request.phone_number)
        .await?;
    Ok(json!({ "customer_id": request.customer_id, "phone_id": phone_id }))
}

pub async fn delete(repo: &CustomerRepository, args: PhoneArgs) -> Result<Value, CliError> {
    let request = DeletePhoneRequest {
        customer_id: args.customer_id,
        phone_number: args.phone_number,
    };
    request.validate()?;

    let rows_affected = repo
        .delete_phone(request.customer_id, &request.phone_number)
        .await?;
    Ok(json!({ "customer_id": request.customer_id, "rows_affected": rows_affected }))
}
