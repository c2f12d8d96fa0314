use std::error::Error;
use std::fs::File;
use std::io;
use csv::{ReaderBuilder, Writer};
use log::{info, warn};
use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::commands::{Command, CommandRecord};
use crate::ledger::Ledger;

/// Apply the command file to a fresh ledger and print the balances to stdout.
pub fn run(filename: &str) -> Result<(), Box<dyn Error>> {
    let file = File::open(filename)?;
    process(file, io::stdout())?;
    Ok(())
}

/// Read commands from `input` in order, then write the account report to `output`.
///
/// Records that miss a required field are logged and skipped.
pub fn process<R: io::Read, W: io::Write>(input: R, output: W) -> Result<Ledger, Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut ledger = Ledger::new();

    for (line, result) in rdr.deserialize().enumerate() {
        let record: CommandRecord = result?;
        match Command::try_from(record) {
            Ok(command) => apply(&mut ledger, command),
            Err(e) => warn!("skipping command #{}: {}", line + 1, e),
        }
    }

    info!("processed commands for {} client(s)", ledger.get_users().len());
    write_report(&ledger, output)?;
    Ok(ledger)
}

pub fn apply(ledger: &mut Ledger, command: Command) {
    match command {
        Command::AddUser(client) => ledger.add_user(client),
        Command::DeleteUser { passport } => {
            if let Some(client) = ledger.find_user_by_passport(&passport).cloned() {
                ledger.delete_user(&client);
            }
        }
        Command::AddAccount { passport, account } => ledger.add_account_to_user(&passport, account),
        Command::DeleteAccount { passport, requisite } => {
            ledger.delete_account_from_user(&passport, &Account::new(requisite, Decimal::ZERO));
        }
        Command::Transfer {
            src_passport,
            src_requisite,
            dest_passport,
            dest_requisite,
            amount,
        } => {
            if let Err(e) = ledger.try_transfer_money(
                &src_passport,
                &src_requisite,
                &dest_passport,
                &dest_requisite,
                amount,
            ) {
                warn!(
                    "transfer {}/{} -> {}/{} failed: {}",
                    src_passport, src_requisite, dest_passport, dest_requisite, e
                );
            }
        }
    }
}

/// Write every account as CSV, clients in registry order and accounts in insertion order.
pub fn write_report<W: io::Write>(ledger: &Ledger, output: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(output);
    wtr.write_record(["passport", "name", "requisite", "balance"])?;

    for client in ledger.get_users() {
        for account in ledger.get_user_accounts(client.passport()).unwrap_or_default() {
            wtr.serialize((
                client.passport(),
                client.name(),
                account.requisite(),
                account.balance().round_dp(4),
            ))?;
        }
    }

    wtr.flush()?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::Client;
    use rust_decimal::prelude::FromPrimitive;

    fn decimal(amount: f64) -> Decimal {
        Decimal::from_f64(amount).unwrap()
    }

    #[test]
    fn test_apply_delete_commands() {
        let mut ledger = Ledger::new();
        apply(&mut ledger, Command::AddUser(Client::new("Bob", "BobPassport")));
        apply(
            &mut ledger,
            Command::AddAccount {
                passport: "BobPassport".to_string(),
                account: Account::new("BobAccount", decimal(10.0)),
            },
        );
        apply(
            &mut ledger,
            Command::DeleteAccount {
                passport: "BobPassport".to_string(),
                requisite: "BobAccount".to_string(),
            },
        );
        assert_eq!(ledger.get_user_accounts("BobPassport").unwrap().len(), 0);

        apply(
            &mut ledger,
            Command::DeleteUser {
                passport: "BobPassport".to_string(),
            },
        );
        assert!(ledger.find_user_by_passport("BobPassport").is_none());
    }

    #[test]
    fn test_report_layout() {
        let mut ledger = Ledger::new();
        ledger.add_user(Client::new("Steve", "StevePassport"));
        ledger.add_user(Client::new("Bob", "BobPassport"));
        ledger.add_account_to_user("BobPassport", Account::new("BobAccount", decimal(1.23456)));
        ledger.add_account_to_user("StevePassport", Account::new("SteveAccount", decimal(0.5)));

        let mut out = Vec::new();
        write_report(&ledger, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "passport,name,requisite,balance\n\
             BobPassport,Bob,BobAccount,1.2346\n\
             StevePassport,Steve,SteveAccount,0.5\n"
        );
    }
}
