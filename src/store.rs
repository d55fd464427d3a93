use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tally::ledger::{Ledger, Product, DEFAULT_PRODUCT_NAME, DEFAULT_UNIT_PRICE};

const APP_NAME: &str = "tallyo";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access the save file at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unreadable save data, please fix or delete the file at {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode save data")]
    Encode(#[source] serde_json::Error),
}

/// Where the ledger lives on disk. `dedicated_dir` is a directory used by
/// nothing but this app (created on load, removed on clear); the Linux
/// dotfile layout has none.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    pub file: PathBuf,
    pub dedicated_dir: Option<PathBuf>,
}

/// Resolve the per-user storage location for this platform: `~/.tallyo` on
/// Linux, `<config dir>/tallyo/tallyo.json` elsewhere. Computed once at
/// startup and handed to the store explicitly.
pub fn platform_layout() -> Result<StorageLayout> {
    let base = BaseDirs::new().context("could not determine the user's home directory")?;

    if cfg!(target_os = "linux") {
        Ok(StorageLayout {
            file: base.home_dir().join(format!(".{APP_NAME}")),
            dedicated_dir: None,
        })
    } else {
        let dir = base.config_dir().join(APP_NAME);
        Ok(StorageLayout {
            file: dir.join(format!("{APP_NAME}.json")),
            dedicated_dir: Some(dir),
        })
    }
}

pub struct JsonStore {
    layout: StorageLayout,
}

impl JsonStore {
    pub fn new(layout: StorageLayout) -> JsonStore {
        JsonStore { layout }
    }

    pub fn path(&self) -> &Path {
        &self.layout.file
    }

    /// Read the ledger, creating an empty save file first if none exists.
    /// A blank file is an empty ledger; unparseable contents are fatal and
    /// the file is left exactly as it was.
    pub fn load(&self) -> Result<Ledger, StoreError> {
        if let Some(dir) = &self.layout.dedicated_dir {
            fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&self.layout.file)
            .map_err(|source| self.io_error(source))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| self.io_error(source))?;

        if contents.trim().is_empty() {
            debug!("no saved data at {}, starting fresh", self.layout.file.display());
            return Ok(Ledger::new());
        }

        let record: LedgerRecord =
            serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
                path: self.layout.file.clone(),
                source,
            })?;

        Ok(record.into())
    }

    /// Overwrite the save file with the current ledger state.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&LedgerRecord::from(ledger))
            .map_err(StoreError::Encode)?;

        fs::write(&self.layout.file, json).map_err(|source| self.io_error(source))?;
        debug!("saved {} products to {}", ledger.products().len(), self.layout.file.display());
        Ok(())
    }

    /// Delete the save file, and the dedicated directory where the layout
    /// has one.
    pub fn clear(&self) -> Result<(), StoreError> {
        fs::remove_file(&self.layout.file).map_err(|source| self.io_error(source))?;

        if let Some(dir) = &self.layout.dedicated_dir {
            // Non-recursive: anything else in there is not ours to delete.
            fs::remove_dir(dir).map_err(|source| self.io_error(source))?;
        }

        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.layout.file.clone(),
            source,
        }
    }
}

// The on-disk shape. Field names and casing must round-trip unchanged so
// existing save files keep loading; fields absent from older files fall
// back to the stock defaults.

#[derive(Debug, Serialize, Deserialize)]
struct LedgerRecord {
    #[serde(rename = "Products", default)]
    products: Vec<ProductRecord>,
    #[serde(rename = "DefaultProduct", default = "default_product_name")]
    default_product: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProductRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "TotalCount", default)]
    total_count: i64,
    #[serde(rename = "TotalCost", default)]
    total_cost: Decimal,
    #[serde(rename = "UnitPrice", default = "default_unit_price")]
    unit_price: Decimal,
}

fn default_product_name() -> String {
    DEFAULT_PRODUCT_NAME.to_string()
}

fn default_unit_price() -> Decimal {
    DEFAULT_UNIT_PRICE
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        ProductRecord {
            name: product.name().clone(),
            total_count: product.total_count(),
            total_cost: product.total_cost(),
            unit_price: product.unit_price(),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product::new(
            record.name,
            record.total_count,
            record.total_cost,
            record.unit_price,
        )
    }
}

impl From<&Ledger> for LedgerRecord {
    fn from(ledger: &Ledger) -> Self {
        LedgerRecord {
            products: ledger.products().iter().map(ProductRecord::from).collect(),
            default_product: ledger.default_product().to_string(),
        }
    }
}

impl From<LedgerRecord> for Ledger {
    fn from(record: LedgerRecord) -> Self {
        Ledger::from_parts(
            record.products.into_iter().map(Product::from).collect(),
            record.default_product,
        )
    }
}
