use rust_decimal::Decimal;

use crate::tally::ledger::Ledger;

/// Render the stats block shown after purchases and by `stats`.
pub fn render(ledger: &Ledger) -> String {
    let mut out = String::new();
    out.push_str("Stats:\n");
    out.push_str(&format!("\tTotal Items Purchased: {}\n", ledger.sum_count()));
    out.push_str(&format!("\tTotal Cost: {}\n\n", currency(ledger.sum_cost())));

    for product in ledger.products() {
        if product.name() == ledger.default_product() {
            out.push_str("\t\tDEFAULT:\n");
        }
        out.push_str(&format!("\t\t{}:\n", product.name()));
        out.push_str(&format!("\t\tCount Purchased: {}\n", product.total_count()));
        out.push_str(&format!("\t\tTotal Cost: {}\n", currency(product.total_cost())));
        out.push_str(&format!(
            "\t\tCurrent Unit Price: {}\n\n",
            currency(product.unit_price())
        ));
    }

    out
}

fn currency(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn renders_totals_and_each_product() {
        let mut ledger = Ledger::new();
        ledger.increment_product("Sweet Tea", 3, Some(dec!(1.50)));
        ledger.increment_product("Ginseng and Honey", 2, None);

        let report = render(&ledger);

        assert!(report.starts_with("Stats:\n"));
        assert!(report.contains("\tTotal Items Purchased: 5\n"));
        assert!(report.contains("\tTotal Cost: $6.48\n"));
        assert!(report.contains("\t\tSweet Tea:\n"));
        assert!(report.contains("\t\tCount Purchased: 3\n"));
        assert!(report.contains("\t\tCurrent Unit Price: $1.50\n"));
    }

    #[test]
    fn marks_only_the_default_product() {
        let mut ledger = Ledger::new();
        ledger.increment_product("Sweet Tea", 1, None);
        ledger.increment_product("Ginseng and Honey", 1, None);

        let report = render(&ledger);

        assert!(report.contains("\t\tDEFAULT:\n\t\tGinseng and Honey:\n"));
        assert_eq!(report.matches("DEFAULT:").count(), 1);
    }

    #[test]
    fn empty_ledger_renders_zero_totals() {
        let report = render(&Ledger::new());

        assert!(report.contains("Total Items Purchased: 0"));
        assert!(report.contains("Total Cost: $0.00"));
    }
}
