//! Output formatting for the CLI.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::cart::{CartTotals, LineItem};
use storefront_commerce::catalog::{CatalogStatus, Product, StarRating, StockLevel};
use storefront_commerce::search::FilterSpec;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stderr(),
        }
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

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

/// Status badge for catalog load states.
pub fn catalog_badge(status: &CatalogStatus) -> String {
    match status {
        CatalogStatus::Ready => style(status.as_str()).green().to_string(),
        CatalogStatus::Loading => style(status.as_str()).yellow().to_string(),
        CatalogStatus::Failed(_) => style(status.as_str()).red().to_string(),
        CatalogStatus::Idle => style(status.as_str()).dim().to_string(),
    }
}

/// Badge for a product's stock level.
pub fn stock_badge(level: StockLevel) -> String {
    match level {
        StockLevel::InStock => style(level.display_name()).green().to_string(),
        StockLevel::LowStock => style(level.display_name()).yellow().to_string(),
        StockLevel::OutOfStock => style(level.display_name()).red().to_string(),
    }
}

/// Render a rating as five stars.
pub fn format_stars(stars: StarRating) -> String {
    let mut s = "★".repeat(stars.full as usize);
    if stars.half {
        s.push('½');
    }
    s.push_str(&"☆".repeat(stars.empty as usize));
    s
}

/// Cut a string to `width` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// One-line summary of a product card, without styling.
pub fn product_line(product: &Product, in_cart: u32) -> String {
    let mut parts = vec![
        format!("#{:<4}", product.id.get()),
        truncate(&product.title, 36),
        product.unit_price().display(),
    ];

    if let Some(original) = product.original_price() {
        parts.push(format!("(was {})", original.display()));
    }
    if let Some(discount) = product.discount_badge() {
        parts.push(format!("-{}%", discount));
    }
    parts.push(format!(
        "{} {:.1}",
        format_stars(product.stars()),
        product.rating
    ));
    if product.is_top_rated() {
        parts.push("Top Rated".to_string());
    }
    parts.push(product.stock_level().display_name().to_string());
    if in_cart > 0 {
        parts.push(format!("[{} in cart]", in_cart));
    }

    parts.join("  ")
}

/// One line of the cart view.
pub fn cart_line(item: &LineItem) -> String {
    format!(
        "{} x{}  @ {}  = {}",
        truncate(&item.name, 36),
        item.quantity,
        item.unit_price.display(),
        item.line_total().display()
    )
}

/// Rows of the order summary, as label and value.
pub fn totals_rows(totals: &CartTotals) -> Vec<(String, String)> {
    vec![
        ("Subtotal".to_string(), totals.subtotal.display()),
        ("Shipping".to_string(), totals.shipping_label()),
        (
            format!("Tax ({}%)", totals.tax_percent()),
            totals.tax.display(),
        ),
        ("Total".to_string(), totals.grand_total.display()),
    ]
}

/// Short description of the active filters.
pub fn filter_summary(spec: &FilterSpec) -> String {
    if spec.is_unrestricted() {
        return "no filters".to_string();
    }

    let mut parts = Vec::new();
    if !spec.categories.is_empty() {
        let names: Vec<&str> = spec.categories.iter().map(String::as_str).collect();
        parts.push(format!("category: {}", names.join(", ")));
    }
    if !spec.brands.is_empty() {
        let names: Vec<&str> = spec.brands.iter().map(String::as_str).collect();
        parts.push(format!("brand: {}", names.join(", ")));
    }
    if !spec.price_range.is_unbounded() {
        if spec.price_range.max == f64::MAX {
            parts.push(format!("price: ${} and up", spec.price_range.min));
        } else {
            parts.push(format!(
                "price: ${} - ${}",
                spec.price_range.min, spec.price_range.max
            ));
        }
    }
    if spec.min_rating > 0.0 {
        parts.push(format!("rating: {} & up", spec.min_rating));
    }
    if spec.stock_status != Default::default() {
        parts.push(format!("stock: {}", spec.stock_status.display_name()));
    }

    parts.join("; ")
}
