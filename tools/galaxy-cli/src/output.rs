//! Output formatting for the CLI.

use console::style;
use galaxy_commerce::prelude::{CartSummary, Facet, Product};
use galaxy_commerce::Money;
use galaxy_storefront::Receipt;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a product listing as a table.
    pub fn listing(&self, products: &[&Product]) {
        if products.is_empty() {
            self.info("No products match the current filters.");
            return;
        }
        let widths = [4, 22, 10, 12, 16];
        self.table_row(&["ID", "NAME", "BRAND", "CATEGORY", "PRICE"], &widths);
        for product in products {
            let id = product.id.to_string();
            let price = price(&product.price);
            self.table_row(
                &[
                    id.as_str(),
                    product.name.as_str(),
                    product.brand.as_str(),
                    product.category.as_str(),
                    price.as_str(),
                ],
                &widths,
            );
        }
    }

    /// Print one product with its specs.
    pub fn product(&self, product: &Product) {
        self.header(&format!("{} {}", product.brand, product.name));
        self.kv("id", &product.id.to_string());
        self.kv("category", &product.category);
        self.kv("price", &price(&product.price));
        if !product.description.is_empty() {
            self.kv("description", &product.description);
        }
        for (label, value) in product.specs.entries() {
            self.kv(label, value);
        }
    }

    /// Print facet options with counts.
    pub fn facet(&self, facet: &Facet) {
        self.header(&facet.name);
        for value in &facet.values {
            let marker = if value.selected { "*" } else { " " };
            self.list_item(&format!("{}{} ({})", marker, value.value, value.count));
        }
    }

    /// Print a cart summary.
    pub fn cart(&self, summary: &CartSummary) {
        self.header("Cart");
        if summary.is_empty() {
            self.info("Your cart is empty.");
            return;
        }
        let widths = [4, 22, 5, 16];
        self.table_row(&["ID", "NAME", "QTY", "SUBTOTAL"], &widths);
        for line in &summary.lines {
            let id = line.product_id.to_string();
            let quantity = line.quantity.to_string();
            let subtotal = price(&line.subtotal);
            self.table_row(
                &[id.as_str(), line.name.as_str(), quantity.as_str(), subtotal.as_str()],
                &widths,
            );
        }
        self.kv("items", &summary.item_count.to_string());
        self.kv("total", &price(&summary.total));
    }

    /// Print a checkout receipt.
    pub fn receipt(&self, receipt: &Receipt) {
        self.success(&receipt.message());
        if let Some(customer) = &receipt.customer {
            self.kv("customer", customer);
        }
        self.kv("placed at", &receipt.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());
    }
}

/// Format a price for display.
pub fn price(money: &Money) -> String {
    style(money.display()).green().to_string()
}
