use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const DEFAULT_UNIT_PRICE: Decimal = dec!(0.99);
pub const DEFAULT_PRODUCT_NAME: &str = "Ginseng and Honey";

/// A tracked purchase category. Counts and costs are cumulative and only
/// move through [`Ledger`] operations.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Product {
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    total_count: i64,
    #[getset(get_copy = "pub")]
    total_cost: Decimal,
    #[getset(get_copy = "pub")]
    unit_price: Decimal,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        total_count: i64,
        total_cost: Decimal,
        unit_price: Decimal,
    ) -> Product {
        Product {
            name: name.into(),
            total_count,
            total_cost,
            unit_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    products: Vec<Product>,
    default_product: String,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger {
            products: Vec::new(),
            default_product: DEFAULT_PRODUCT_NAME.to_string(),
        }
    }

    pub fn from_parts(products: Vec<Product>, default_product: String) -> Ledger {
        Ledger {
            products,
            default_product,
        }
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn default_product(&self) -> &str {
        &self.default_product
    }

    pub fn set_default_product(&mut self, name: impl Into<String>) {
        self.default_product = name.into();
    }

    /// Look up a product by exact, case-sensitive name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    pub fn sum_cost(&self) -> Decimal {
        self.products.iter().map(|p| p.total_cost).sum()
    }

    pub fn sum_count(&self) -> i64 {
        self.products.iter().map(|p| p.total_count).sum()
    }

    /// Record a purchase of `count` units of `name`.
    ///
    /// An unknown name creates the product, priced at `unit_cost` or the
    /// 0.99 default. For a known product, `unit_cost` overrides the standing
    /// price for this purchase only; the stored `unit_price` is never
    /// touched here.
    ///
    /// `count` is not validated: zero and negative purchases are accepted.
    pub fn increment_product(
        &mut self,
        name: &str,
        count: i64,
        unit_cost: Option<Decimal>,
    ) -> &Product {
        match self.position(name) {
            Some(idx) => {
                let product = &mut self.products[idx];
                let rate = unit_cost.unwrap_or(product.unit_price);
                product.total_cost += rate * Decimal::from(count);
                product.total_count += count;
                &self.products[idx]
            }
            None => {
                let unit_price = unit_cost.unwrap_or(DEFAULT_UNIT_PRICE);
                self.products.push(Product::new(
                    name,
                    count,
                    unit_price * Decimal::from(count),
                    unit_price,
                ));
                let idx = self.products.len() - 1;
                &self.products[idx]
            }
        }
    }

    /// Set the standing unit price of `name`, creating a zero-count,
    /// zero-cost product when the name is unknown. Existing totals are
    /// unaffected either way.
    pub fn change_price(&mut self, name: &str, new_price: Decimal) {
        match self.position(name) {
            Some(idx) => self.products[idx].unit_price = new_price,
            None => self
                .products
                .push(Product::new(name, 0, Decimal::ZERO, new_price)),
        }
    }
}
