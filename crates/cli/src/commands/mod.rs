//! Command definitions and dispatch.

pub mod customer;
pub mod find;
pub mod phone;

use clap::Subcommand;
use persistence::repositories::CustomerRepository;
use serde_json::{json, Value};

use crate::error::CliError;

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Create the customer and phone tables if they are missing")]
    Init,
    #[command(about = "Add a customer and print its generated id")]
    AddCustomer(customer::AddCustomerArgs),
    #[command(about = "Attach a phone number to an existing customer")]
    AddPhone(phone::PhoneArgs),
    #[command(about = "Change the given fields of a customer, leaving the others as they are")]
    UpdateCustomer(customer::UpdateCustomerArgs),
    #[command(about = "Remove a phone number from a customer")]
    DeletePhone(phone::PhoneArgs),
    #[command(about = "Delete a customer together with all of its phone numbers")]
    DeleteCustomer(customer::CustomerIdArgs),
    #[command(about = "Find customers with phones matching all of the given filters")]
    Find(find::FindArgs),
}

/// Run a command against the repository and return its JSON output.
pub async fn execute(repo: &CustomerRepository, command: Command) -> Result<Value, CliError> {
    match command {
        // The schema is ensured before every command.
        Command::Init => Ok(json!({ "status": "ok" })),
        Command::AddCustomer(args) => customer::add(repo, args).await,
        Command::AddPhone(args) => phone::add(repo, args).await,
        Command::UpdateCustomer(args) => customer::update(repo, args).await,
        Command::DeletePhone(args) => phone::delete(repo, args).await,
        Command::DeleteCustomer(args) => customer::delete(repo, args).await,
        Command::Find(args) => find::run(repo, args).await,
    }
}
