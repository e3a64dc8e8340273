//! Customer commands.

use clap::Args;
use domain::models::{CreateCustomerRequest, UpdateCustomerRequest};
use persistence::repositories::CustomerRepository;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::CliError;

#[derive(Debug, Clone, Args)]
pub struct AddCustomerArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl AddCustomerArgs {
    pub fn into_request(self) -> Result<CreateCustomerRequest, CliError> {
        let request = CreateCustomerRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        };
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Args)]
pub struct UpdateCustomerArgs {
    #[arg(long)]
    pub customer_id: i32,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl UpdateCustomerArgs {
    pub fn into_request(self) -> Result<(i32, UpdateCustomerRequest), CliError> {
        let request = UpdateCustomerRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        };
        if request.is_empty() {
            return Err(CliError::Validation(
                "at least one of --first-name, --last-name or --email is required".to_string(),
            ));
        }
        request.validate()?;
        Ok((self.customer_id, request))
    }
}

#[derive(Debug, Clone, Args)]
pub struct CustomerIdArgs {
    #[arg(long)]
    pub customer_id: i32,
}

pub async fn add(repo: &CustomerRepository, args: AddCustomerArgs) -> Result<Value, CliError> {
    let request = args.into_request()?;
    let customer_id = repo.add_customer(&request).await?;
    Ok(json!({ "customer_id": customer_id }))
}

pub async fn update(
    repo: &CustomerRepository,
    args: UpdateCustomerArgs,
) -> Result<Value, CliError> {
    let (customer_id, request) = args.into_request()?;
    let rows_affected = repo.update_customer(customer_id, &request).await?;
    Ok(json!({ "customer_id": customer_id, "rows_affected": rows_affected }))
}

pub async fn delete(repo: &CustomerRepository, args: CustomerIdArgs) -> Result<Value, CliError> {
    let rows_affected = repo.delete_customer(args.customer_id).await?;
    Ok(json!({ "customer_id": args.customer_id, "rows_affected": rows_affected }))
}
