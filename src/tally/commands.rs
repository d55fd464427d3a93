use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use log::debug;
use rust_decimal::Decimal;

use super::ledger::Ledger;
use super::{CommandError, ExecutableCommand};

pub const USAGE: &str = "\
Usage:
> tallyo [count] [name] [unit price]
\tEvery argument is optional, but each one requires those before it.
\tWith no arguments the default product is incremented by 1.
\tDefault unit price = $0.99

> tallyo clear/stats/help
\t'clear' deletes the save data, 'stats' prints the report, 'help' shows this message.

> tallyo default_product <name>
\tSets the product recorded when no name is given.

> tallyo change_unit_price <name> <price>
\tSets the standing unit price of a product.
";

#[enum_dispatch(ExecutableCommand)]
#[derive(Debug, PartialEq)]
pub enum Command {
    Purchase,
    Clear,
    Stats,
    SetDefaultProduct,
    ChangeUnitPrice,
    Help,
}

impl TryFrom<&[String]> for Command {
    type Error = CommandError;

    fn try_from(args: &[String]) -> Result<Self, Self::Error> {
        let first = match args.first() {
            Some(first) => first,
            None => return Ok(Purchase::new(1, None, None).into()),
        };

        // A leading integer (signed forms included) selects the positional
        // purchase shorthand; any other first token is a command word.
        if let Ok(count) = first.parse::<i64>() {
            return match args {
                [_] => Ok(Purchase::new(count, None, None).into()),
                [_, name] => Ok(Purchase::new(count, Some(name.clone()), None).into()),
                [_, name, price] => {
                    Ok(Purchase::new(count, Some(name.clone()), Some(parse_price(price)?)).into())
                }
                _ => Err(CommandError::UnknownArguments),
            };
        }

        // Arguments beyond the ones a command consumes are ignored.
        match first.to_lowercase().as_str() {
            "clear" => Ok(Clear.into()),
            "stats" => Ok(Stats.into()),
            "help" => Ok(Help.into()),
            "default_product" => {
                let name = required(args, 1, "default_product", "product name")?;
                Ok(SetDefaultProduct::new(name.clone()).into())
            }
            "change_unit_price" => {
                let name = required(args, 1, "change_unit_price", "product name")?.clone();
                let price = parse_price(required(args, 2, "change_unit_price", "unit price")?)?;
                Ok(ChangeUnitPrice::new(name, price).into())
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn required<'a>(
    args: &'a [String],
    idx: usize,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a String, CommandError> {
    args.get(idx)
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn parse_price(raw: &str) -> Result<Decimal, CommandError> {
    Decimal::from_str(raw).map_err(|_| CommandError::InvalidPrice(raw.to_string()))
}

/// Positional shorthand: record `count` purchases of a product, optionally
/// at a one-off price.
#[derive(Debug, PartialEq)]
pub struct Purchase {
    count: i64,
    name: Option<String>,
    unit_price: Option<Decimal>,
}

impl Purchase {
    pub fn new(count: i64, name: Option<String>, unit_price: Option<Decimal>) -> Purchase {
        Purchase {
            count,
            name,
            unit_price,
        }
    }
}

impl ExecutableCommand for Purchase {
    fn execute(&self, ledger: &mut Ledger) {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => ledger.default_product().to_string(),
        };

        let product = ledger.increment_product(&name, self.count, self.unit_price);
        debug!(
            "recorded {} x '{}', totals now {} / ${}",
            self.count,
            product.name(),
            product.total_count(),
            product.total_cost()
        );
    }

    fn persists(&self) -> bool {
        true
    }

    fn prints_report(&self) -> bool {
        true
    }
}

#[derive(Debug, PartialEq)]
pub struct Clear;

impl ExecutableCommand for Clear {
    // The file removal itself happens in `app::run`, which owns the store;
    // the in-memory ledger is deliberately left alone.
    fn execute(&self, _ledger: &mut Ledger) {}

    fn persists(&self) -> bool {
        false
    }

    fn prints_report(&self) -> bool {
        false
    }
}

#[derive(Debug, PartialEq)]
pub struct Stats;

impl ExecutableCommand for Stats {
    fn execute(&self, _ledger: &mut Ledger) {}

    fn persists(&self) -> bool {
        false
    }

    fn prints_report(&self) -> bool {
        true
    }
}

#[derive(Debug, PartialEq)]
pub struct SetDefaultProduct {
    name: String,
}

impl SetDefaultProduct {
    pub fn new(name: impl Into<String>) -> SetDefaultProduct {
        SetDefaultProduct { name: name.into() }
    }
}

impl ExecutableCommand for SetDefaultProduct {
    fn execute(&self, ledger: &mut Ledger) {
        ledger.set_default_product(self.name.clone());
    }

    fn persists(&self) -> bool {
        true
    }

    fn prints_report(&self) -> bool {
        false
    }
}

#[derive(Debug, PartialEq)]
pub struct ChangeUnitPrice {
    name: String,
    price: Decimal,
}

impl ChangeUnitPrice {
    pub fn new(name: impl Into<String>, price: Decimal) -> ChangeUnitPrice {
        ChangeUnitPrice {
            name: name.into(),
            price,
        }
    }
}

impl ExecutableCommand for ChangeUnitPrice {
    fn execute(&self, ledger: &mut Ledger) {
        ledger.change_price(&self.name, self.price);
    }

    fn persists(&self) -> bool {
        true
    }

    fn prints_report(&self) -> bool {
        false
    }
}

#[derive(Debug, PartialEq)]
pub struct Help;

impl ExecutableCommand for Help {
    fn execute(&self, _ledger: &mut Ledger) {
        print!("{USAGE}");
    }

    fn persists(&self) -> bool {
        false
    }

    fn prints_report(&self) -> bool {
        false
    }
}
