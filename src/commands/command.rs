use rust_decimal::Decimal;
use serde::Deserialize;

use crate::accounts::Account;
use crate::clients::Client;
use crate::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandType {
    AddUser,
    DeleteUser,
    AddAccount,
    DeleteAccount,
    Transfer,
}

impl CommandType {
    fn as_str(self) -> &'static str {
        match self {
            CommandType::AddUser => "add_user",
            CommandType::DeleteUser => "delete_user",
            CommandType::AddAccount => "add_account",
            CommandType::DeleteAccount => "delete_account",
            CommandType::Transfer => "transfer",
        }
    }
}

/// One row of the command file. Which columns are required depends on the type.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandRecord {
    #[serde(rename = "type")]
    pub cmd_type: CommandType,
    pub passport: String,
    pub name: Option<String>,
    pub requisite: Option<String>,
    pub amount: Option<Decimal>,
    pub dest_passport: Option<String>,
    pub dest_requisite: Option<String>,
}

/// A validated command, ready to be applied to a ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddUser(Client),
    DeleteUser { passport: String },
    AddAccount { passport: String, account: Account },
    DeleteAccount { passport: String, requisite: String },
    Transfer {
        src_passport: String,
        src_requisite: String,
        dest_passport: String,
        dest_requisite: String,
        amount: Decimal,
    },
}

impl TryFrom<CommandRecord> for Command {
    type Error = CommandError;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        let command = record.cmd_type.as_str();
        let required = |value: Option<String>, field: &'static str| {
            value.ok_or(CommandError::MissingField { command, field })
        };

        match record.cmd_type {
            CommandType::AddUser => {
                let name = required(record.name, "name")?;
                Ok(Command::AddUser(Client::new(name, record.passport)))
            }
            CommandType::DeleteUser => Ok(Command::DeleteUser {
                passport: record.passport,
            }),
            CommandType::AddAccount => {
                let requisite = required(record.requisite, "requisite")?;
                let opening = record.amount.unwrap_or(Decimal::ZERO);
                Ok(Command::AddAccount {
                    passport: record.passport,
                    account: Account::new(requisite, opening),
                })
            }
            CommandType::DeleteAccount => Ok(Command::DeleteAccount {
                passport: record.passport,
                requisite: required(record.requisite, "requisite")?,
            }),
            CommandType::Transfer => Ok(Command::Transfer {
                src_requisite: required(record.requisite, "requisite")?,
                dest_passport: required(record.dest_passport, "dest_passport")?,
                dest_requisite: required(record.dest_requisite, "dest_requisite")?,
                amount: record
                    .amount
                    .ok_or(CommandError::MissingField { command, field: "amount" })?,
                src_passport: record.passport,
            }),
        }
    }
}
