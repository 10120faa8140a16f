//! Command-line configuration and fleet seeding

use clap::Parser;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

use carrental_core::*;
use carrental_engine::{RegistrationPolicy, RentalManager};

use crate::{CliError, Result};

/// One car in a fleet file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetEntry {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub base_price_per_day: Decimal,
}

impl FleetEntry {
    fn new(id: &str, brand: &str, model: &str, base_price_per_day: Decimal) -> Self {
        FleetEntry {
            id: id.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            base_price_per_day,
        }
    }

    fn into_car(self) -> carrental_core::Result<Car> {
        Car::new(CarId::new(&self.id)?, self.brand, self.model, self.base_price_per_day)
    }
}

/// Fleet used when no `--fleet` file is given
pub fn default_fleet() -> Vec<FleetEntry> {
    vec![
        FleetEntry::new("C001", "Toyota", "Camry", Decimal::new(60, 0)),
        FleetEntry::new("C002", "Honda", "Accord", Decimal::new(70, 0)),
        FleetEntry::new("C003", "Mahindra", "Thar", Decimal::new(150, 0)),
    ]
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fleet_path: Option<PathBuf>,
    pub registration: RegistrationPolicy,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            fleet_path: None,
            registration: RegistrationPolicy::OnAttempt,
            log_level: "warn".to_string(),
        }
    }
}

/// Command-line arguments for the `carrental` binary
#[derive(Parser, Debug)]
#[command(name = "carrental", version, about = "Interactive car rental desk")]
pub struct Cli {
    /// JSON file with the fleet to load instead of the built-in cars
    #[arg(long, value_name = "PATH")]
    pub fleet: Option<PathBuf>,

    /// Only register a customer once a rental is confirmed
    #[arg(long)]
    pub register_on_commit: bool,

    /// Tracing filter; RUST_LOG takes precedence
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let registration = if cli.register_on_commit {
            RegistrationPolicy::OnCommit
        } else {
            RegistrationPolicy::OnAttempt
        };

        AppConfig {
            fleet_path: cli.fleet,
            registration,
            log_level: cli.log_level,
        }
    }
}

impl AppConfig {
    /// Fleet entries from the configured file, or the built-in fleet
    pub fn fleet_entries(&self) -> Result<Vec<FleetEntry>> {
        match &self.fleet_path {
            Some(path) => load_fleet(path),
            None => Ok(default_fleet()),
        }
    }

    /// Build a manager seeded with the configured fleet
    pub fn build_manager(&self) -> Result<RentalManager> {
        let entries = self.fleet_entries()?;
        validate_fleet(&entries)?;

        let mut manager = RentalManager::new(self.registration);
        for entry in entries {
            manager.add_car(entry.into_car()?);
        }

        info!(
            cars = manager.fleet().len(),
            registration = ?self.registration,
            "Fleet loaded"
        );
        Ok(manager)
    }
}

/// Read a JSON array of fleet entries
pub fn load_fleet(path: &Path) -> Result<Vec<FleetEntry>> {
    let text = std::fs::read_to_string(path)?;
    let entries: Vec<FleetEntry> =
        serde_json::from_str(&text).map_err(RentalError::Serialization)?;
    Ok(entries)
}

/// Reject fleets the registry would accept but the desk cannot serve
pub fn validate_fleet(entries: &[FleetEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(CliError::Config("fleet is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(CliError::Config(format!("duplicate car id '{}'", entry.id)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from(Cli::try_parse_from(["carrental"]).unwrap());
        assert!(config.fleet_path.is_none());
        assert_eq!(config.registration, RegistrationPolicy::OnAttempt);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "carrental",
            "--fleet",
            "cars.json",
            "--register-on-commit",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = AppConfig::from(cli);
        assert_eq!(config.fleet_path, Some(PathBuf::from("cars.json")));
        assert_eq!(config.registration, RegistrationPolicy::OnCommit);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["carrental", "--fleet"]).is_err());
        assert!(Cli::try_parse_from(["carrental", "--verbose"]).is_err());
    }

    #[test]
    fn test_default_fleet_manager() {
        let manager = AppConfig::default().build_manager().unwrap();
        let listed: Vec<String> = manager.fleet().list_available().map(|c| c.to_string()).collect();
        assert_eq!(
            listed,
            vec![
                "C001 - Toyota Camry".to_string(),
                "C002 - Honda Accord".to_string(),
                "C003 - Mahindra Thar".to_string(),
            ]
        );
    }

    #[test]
    fn test_fleet_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "K1", "brand": "Kia", "model": "Rio", "base_price_per_day": 42.5}},
                {{"id": "K2", "brand": "Kia", "model": "Ceed", "base_price_per_day": "55.00"}}
            ]"#
        )
        .unwrap();

        let config = AppConfig {
            fleet_path: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        let manager = config.build_manager().unwrap();
        assert_eq!(manager.fleet().len(), 2);

        let rio = manager.fleet().get(&CarId::new("K1").unwrap()).unwrap();
        assert_eq!(rio.base_price_per_day(), Decimal::new(425, 1));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut entries = default_fleet();
        entries.push(FleetEntry::new("C001", "Fiat", "Panda", Decimal::new(30, 0)));
        assert!(matches!(validate_fleet(&entries), Err(CliError::Config(_))));
        assert!(matches!(validate_fleet(&[]), Err(CliError::Config(_))));
    }

    #[test]
    fn test_bad_entries_rejected() {
        let entries = vec![FleetEntry::new("C001", "Fiat", "Panda", Decimal::new(-5, 0))];
        validate_fleet(&entries).unwrap();
        assert!(matches!(
            entries[0].clone().into_car(),
            Err(RentalError::InvalidPrice(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let config = AppConfig {
            fleet_path: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.build_manager(),
            Err(CliError::Core(RentalError::Serialization(_)))
        ));
    }
}
