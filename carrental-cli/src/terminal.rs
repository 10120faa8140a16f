//! Interactive menu driving the rental manager

use std::io::{BufRead, Write};
use tracing::{debug, error};

use carrental_core::*;
use carrental_engine::{RentalManager, RentalQuote};

use crate::Result;

/// Menu entries, keyed by the number typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Rent,
    Return,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Rent),
            "2" => Some(MenuChoice::Return),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Line-oriented terminal over any reader/writer pair
pub struct Terminal<R, W> {
    input: R,
    output: W,
    manager: RentalManager,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, manager: RentalManager) -> Self {
        Terminal {
            input,
            output,
            manager,
        }
    }

    pub fn manager(&self) -> &RentalManager {
        &self.manager
    }

    pub fn into_parts(self) -> (RentalManager, W) {
        (self.manager, self.output)
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "===== Car Rental System =====")?;
            writeln!(self.output, "1. Rent a Car")?;
            writeln!(self.output, "2. Return a Car")?;
            writeln!(self.output, "3. Exit")?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let finished = match MenuChoice::parse(&line) {
                Some(MenuChoice::Rent) => self.rent_flow()?,
                Some(MenuChoice::Return) => self.return_flow()?,
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                    false
                }
            };

            if finished {
                break;
            }
        }

        writeln!(self.output, "\nThank you for using the Car Rental System!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns true when input ended mid-flow
    fn rent_flow(&mut self) -> Result<bool> {
        writeln!(self.output, "\n== Rent a Car ==\n")?;
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(true);
        };
        if name.trim().is_empty() {
            self.report(RentalError::InvalidCustomerName("empty name".to_string()))?;
            return Ok(false);
        }

        writeln!(self.output, "\nAvailable Cars:")?;
        for car in self.manager.fleet().list_available() {
            writeln!(self.output, "{}", car)?;
        }

        let Some(car_id) = self.prompt("\nEnter the car ID you want to rent: ")? else {
            return Ok(true);
        };
        let Some(days) = self.prompt_days()? else {
            return Ok(true);
        };

        let quote = match self.manager.quote(&car_id, &name, days) {
            Ok(quote) => quote,
            Err(err) => {
                self.report(err)?;
                return Ok(false);
            }
        };

        self.print_quote(&quote)?;

        let Some(confirm) = self.prompt("\nConfirm rental (Y/N): ")? else {
            self.manager.cancel(quote);
            return Ok(true);
        };

        if confirm.trim().eq_ignore_ascii_case("y") {
            match self.manager.commit(quote) {
                Ok(_) => writeln!(self.output, "\nCar rented successfully.")?,
                Err(err) => self.report(err)?,
            }
        } else {
            self.manager.cancel(quote);
            writeln!(self.output, "\nRental canceled.")?;
        }

        Ok(false)
    }

    fn return_flow(&mut self) -> Result<bool> {
        writeln!(self.output, "\n== Return a Car ==\n")?;
        let Some(car_id) = self.prompt("Enter the car ID you want to return: ")? else {
            return Ok(true);
        };

        match self.manager.return_car(&car_id) {
            Ok(receipt) => writeln!(
                self.output,
                "Car returned successfully by {}",
                receipt.customer.name()
            )?,
            Err(err) => self.report(err)?,
        }

        Ok(false)
    }

    fn print_quote(&mut self, quote: &RentalQuote) -> Result<()> {
        writeln!(self.output, "\n== Rental Information ==\n")?;
        writeln!(self.output, "Customer ID: {}", quote.customer().id())?;
        writeln!(self.output, "Customer Name: {}", quote.customer().name())?;
        writeln!(self.output, "Car: {}", quote.car_name())?;
        writeln!(self.output, "Rental Days: {}", quote.days())?;
        writeln!(self.output, "Total Price: {}", format_price(quote.price()))?;
        Ok(())
    }

    /// Print a user-facing message for a rental error, or propagate it
    fn report(&mut self, err: RentalError) -> Result<()> {
        if !err.is_recoverable() {
            return Err(err.into());
        }

        let message = match &err {
            RentalError::NotAvailable { .. } => {
                "\nInvalid car selection or car not available for rent."
            }
            RentalError::NotRented { .. } => "Invalid car ID or car is not rented.",
            RentalError::LedgerInconsistent { .. } => {
                error!(%err, "Rental ledger out of step with fleet");
                "Car was not rented or rental information is missing."
            }
            RentalError::InvalidCustomerName(_) => "\nPlease enter a customer name.",
            RentalError::PriceOverflow { .. } => {
                "\nThe rental price is too large. Please choose fewer days."
            }
            _ => {
                writeln!(self.output, "\n{}", err)?;
                return Ok(());
            }
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Ask for a positive whole number of days until one is given
    fn prompt_days(&mut self) -> Result<Option<RentalDays>> {
        loop {
            let Some(line) = self.prompt("Enter the number of days for rental: ")? else {
                return Ok(None);
            };

            let parsed = line
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|n| RentalDays::new(n).ok());

            match parsed {
                Some(days) => return Ok(Some(days)),
                None => {
                    debug!(input = %line.trim(), "Rejected rental days");
                    writeln!(self.output, "Please enter a positive whole number of days.")?;
                }
            }
        }
    }

    /// Print `message` and read one line; None at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
