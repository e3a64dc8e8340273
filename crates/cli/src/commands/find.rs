//! Customer lookup command.

use clap::Args;
use domain::models::CustomerFilter;
use persistence::repositories::CustomerRepository;
use serde_json::{json, Value};

use crate::error::CliError;

#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long = "phone")]
    pub phone_number: Option<String>,
}

impl From<FindArgs> for CustomerFilter {
    fn from(args: FindArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone_number: args.phone_number,
        }
    }
}

pub async fn run(repo: &CustomerRepository, args: FindArgs) -> Result<Value, CliError> {
    let filter = CustomerFilter::from(args);
    let rows = repo.find_customers(&filter).await?;
    Ok(json!(rows))
}
