//! Interactive shopping session.

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use storefront_commerce::cart::{Cart, CartChange, CartTotals};
use storefront_commerce::catalog::{brands, category_label, category_options, Catalog, Product};
use storefront_commerce::checkout::{PaymentFlow, Receipt};
use storefront_commerce::search::{filter_products, FilterSpec, StockStatus, RATING_OPTIONS};
use storefront_commerce::{CommerceError, ProductId};
use storefront_observability::StructuredLogger;

use super::{fetch_catalog, ShopArgs};
use crate::context::Context;
use crate::output::{
    cart_line, catalog_badge, filter_summary, product_line, stock_badge, totals_rows, Output,
};

/// State of one shopping session: the loaded catalog, the cart and the
/// active filters.
pub struct ShopSession {
    catalog: Catalog,
    cart: Cart,
    filters: FilterSpec,
    tax_rate: f64,
    logger: StructuredLogger,
}

impl ShopSession {
    pub fn new(catalog: Catalog, tax_rate: f64, logger: StructuredLogger) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            filters: FilterSpec::default(),
            tax_rate,
            logger,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterSpec {
        &mut self.filters
    }

    /// Products passing the active filters.
    pub fn visible_products(&self) -> Vec<Product> {
        filter_products(self.catalog.products(), &self.filters)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.products().iter().find(|p| p.id == id)
    }

    /// Put one more unit of a product in the cart, within its stock.
    pub fn add_one(&mut self, id: ProductId) -> Result<CartChange, CommerceError> {
        let change = match self.product(id) {
            Some(product) => {
                let item = product.to_line_item();
                let stock = product.stock;
                self.cart.try_add_within_stock(item, stock)?
            }
            None => match self.cart.get_item(&id) {
                Some(line) => {
                    let item = line.clone().with_quantity(1);
                    self.cart.add_or_increment(item)
                }
                None => CartChange::Unchanged,
            },
        };
        self.log_change("add", id, change);
        Ok(change)
    }

    /// Take one unit of a product out of the cart.
    pub fn remove_one(&mut self, id: ProductId) -> CartChange {
        let change = self.cart.decrement_or_remove(&id);
        self.log_change("decrement", id, change);
        change
    }

    /// Drop a product from the cart.
    pub fn remove_line(&mut self, id: ProductId) -> CartChange {
        let change = self.cart.remove_entirely(&id);
        self.log_change("remove", id, change);
        change
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals(self.tax_rate)
    }

    /// Open the payment flow for the cart.
    pub fn begin_payment(&self) -> Result<PaymentFlow, CommerceError> {
        PaymentFlow::for_cart(&self.cart, self.tax_rate)
    }

    fn log_change(&self, action: &str, id: ProductId, change: CartChange) {
        self.logger
            .debug_builder("Cart updated")
            .field("action", action)
            .field_u64("product", id.get())
            .field("change", format!("{:?}", change))
            .field_u64("items", self.cart.item_count())
            .emit();
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        anyhow::bail!("The shop session is interactive and has no JSON output");
    }

    let catalog = fetch_catalog(ctx).await?;
    ctx.output.info(&format!(
        "Catalog {}: {} products",
        catalog_badge(catalog.status()),
        catalog.len()
    ));

    let mut session = ShopSession::new(
        catalog,
        ctx.config.cart.tax_rate,
        ctx.logger_for("cart"),
    );

    loop {
        let visible = session.visible_products().len();
        let menu = [
            format!("Browse products ({} shown)", visible),
            format!("Filters ({})", filter_summary(session.filters())),
            format!("Cart ({} items)", session.cart().item_count()),
            "Checkout".to_string(),
            "Quit".to_string(),
        ];

        let choice = Select::new()
            .with_prompt("Storefront")
            .items(&menu)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(&mut session, &ctx.output)?,
            1 => edit_filters(&mut session)?,
            2 => view_cart(&mut session, &ctx.output)?,
            3 => checkout(&session, ctx, args.no_delay).await?,
            _ => break,
        }
    }

    Ok(())
}

fn browse(session: &mut ShopSession, output: &Output) -> Result<()> {
    let products = session.visible_products();
    if products.is_empty() {
        output.info("No products found. Try adjusting your filters.");
        return Ok(());
    }

    let mut items: Vec<String> = products
        .iter()
        .map(|p| product_line(p, session.cart().quantity_of(&p.id)))
        .collect();
    items.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Products")
        .items(&items)
        .default(0)
        .max_length(15)
        .interact()?;

    match products.get(choice) {
        Some(product) => product_detail(session, product, output),
        None => Ok(()),
    }
}

fn product_detail(session: &mut ShopSession, product: &Product, output: &Output) -> Result<()> {
    output.header(&product.title);
    if !product.brand.is_empty() {
        output.kv("brand", &product.brand);
    }
    output.kv("category", &category_label(&product.category));
    output.kv("price", &product.unit_price().display());
    output.kv("rating", &format!("{:.2}", product.rating));
    output.kv(
        "stock",
        &format!("{} ({})", stock_badge(product.stock_level()), product.stock),
    );
    if !product.description.is_empty() {
        output.line(&format!("\n  {}\n", style(&product.description).dim()));
    }

    if !product.in_stock() {
        output.warn("Out of stock");
        return Ok(());
    }

    let add = Confirm::new()
        .with_prompt("Add to cart?")
        .default(true)
        .interact()?;
    if add {
        match session.add_one(product.id) {
            Ok(_) => output.success(&format!(
                "{} in cart: {}",
                product.title,
                session.cart().quantity_of(&product.id)
            )),
            Err(e) => output.warn(&e.to_string()),
        }
    }

    Ok(())
}

fn edit_filters(session: &mut ShopSession) -> Result<()> {
    let menu = [
        "Categories",
        "Brands",
        "Price range",
        "Rating",
        "Availability",
        "Clear all",
        "Back",
    ];
    let choice = Select::new()
        .with_prompt("Filters")
        .items(&menu)
        .default(0)
        .interact()?;

    let products = session.catalog.products().to_vec();
    let filters = session.filters_mut();
    match choice {
        0 => {
            let options = category_options(&products);
            let labels: Vec<&str> = options.iter().map(|o| o.name.as_str()).collect();
            let defaults: Vec<bool> = labels
                .iter()
                .map(|l| filters.categories.contains(*l))
                .collect();
            let picked = MultiSelect::new()
                .with_prompt("Categories (space to toggle)")
                .items(&labels)
                .defaults(&defaults)
                .interact()?;
            filters.categories = picked.into_iter().map(|i| labels[i].to_string()).collect();
        }
        1 => {
            let names = brands(&products);
            let defaults: Vec<bool> = names.iter().map(|b| filters.brands.contains(b)).collect();
            let picked = MultiSelect::new()
                .with_prompt("Brands (space to toggle)")
                .items(&names)
                .defaults(&defaults)
                .interact()?;
            filters.brands = picked.into_iter().map(|i| names[i].clone()).collect();
        }
        2 => {
            let min: f64 = Input::new()
                .with_prompt("Minimum price")
                .default(filters.price_range.min)
                .interact_text()?;
            let max: String = Input::new()
                .with_prompt("Maximum price (blank for none)")
                .allow_empty(true)
                .validate_with(|input: &String| parse_max_price(input).map(|_| ()))
                .interact_text()?;
            let max = parse_max_price(&max).map_err(anyhow::Error::msg)?;

            filters.price_range = filters.price_range.with_min(min).with_max(max);
        }
        3 => {
            let mut items: Vec<String> = RATING_OPTIONS
                .iter()
                .map(|r| format!("{} & up", r))
                .collect();
            items.push("Any rating".to_string());
            let picked = Select::new()
                .with_prompt("Minimum rating")
                .items(&items)
                .default(0)
                .interact()?;
            match RATING_OPTIONS.get(picked) {
                Some(rating) => filters.select_rating(f64::from(*rating)),
                None => filters.min_rating = 0.0,
            }
        }
        4 => {
            let items: Vec<&str> = StockStatus::ALL.iter().map(|s| s.display_name()).collect();
            let current = StockStatus::ALL
                .iter()
                .position(|s| *s == filters.stock_status)
                .unwrap_or(0);
            let picked = Select::new()
                .with_prompt("Availability")
                .items(&items)
                .default(current)
                .interact()?;
            filters.stock_status = StockStatus::ALL[picked];
        }
        5 => filters.clear(),
        _ => {}
    }

    Ok(())
}

/// Read the maximum price prompt. Blank means no upper bound.
fn parse_max_price(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(f64::MAX);
    }
    match input.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(format!("'{}' is not a price", input)),
    }
}

fn print_totals(totals: &CartTotals, output: &Output) {
    for (label, value) in totals_rows(totals) {
        output.kv(&label, &value);
    }
}

fn view_cart(session: &mut ShopSession, output: &Output) -> Result<()> {
    loop {
        if session.cart().is_empty() {
            output.info("Your cart is empty");
            return Ok(());
        }

        output.header("Your Shopping Cart");
        print_totals(&session.totals(), output);

        let lines = session.cart().items().to_vec();
        let mut items: Vec<String> = lines.iter().map(cart_line).collect();
        items.push("Back".to_string());

        let choice = Select::new()
            .with_prompt("Select a line to change")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(line) = lines.get(choice) else {
            return Ok(());
        };

        let action = Select::new()
            .with_prompt(&line.name)
            .items(&["Increase", "Decrease", "Remove", "Back"])
            .default(0)
            .interact()?;
        match action {
            0 => {
                if let Err(e) = session.add_one(line.id) {
                    output.warn(&e.to_string());
                }
            }
            1 => {
                session.remove_one(line.id);
            }
            2 => {
                session.remove_line(line.id);
            }
            _ => {}
        }
    }
}

async fn checkout(session: &ShopSession, ctx: &Context, no_delay: bool) -> Result<()> {
    let output = &ctx.output;
    let mut flow = match session.begin_payment() {
        Ok(flow) => flow,
        Err(CommerceError::EmptyCart) => {
            output.info("Your cart is empty");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    output.header(flow.step().display_name());
    output.kv("Total Amount", &flow.amount().display());

    loop {
        let name: String = Input::new()
            .with_prompt("Cardholder Name")
            .interact_text()?;
        flow.details.set_cardholder_name(name);

        let number: String = Input::new()
            .with_prompt("Card Number")
            .interact_text()?;
        flow.details.set_card_number(&number);

        let expiry: String = Input::new()
            .with_prompt("Expiry Date (MM/YY)")
            .interact_text()?;
        flow.details.set_expiry(&expiry);

        let cvv: String = Input::new().with_prompt("CVV").interact_text()?;
        flow.details.set_cvv(&cvv);

        output.kv("card", &flow.details.card_number);
        output.kv("expiry", &flow.details.expiry);

        let pay = Confirm::new()
            .with_prompt(flow.pay_label())
            .default(true)
            .interact()?;
        if !pay {
            output.warn("Payment cancelled");
            return Ok(());
        }

        match flow.submit() {
            Ok(()) => break,
            Err(e) => output.warn(&e.to_string()),
        }
    }

    let spinner = output.spinner(&flow.pay_label());
    if !no_delay {
        tokio::time::sleep(ctx.config.checkout.processing_delay()).await;
    }
    spinner.finish_and_clear();

    let receipt = flow.complete()?.clone();
    ctx.logger_for("checkout")
        .info_builder("Payment completed")
        .field_u64("order", receipt.order_id.get())
        .field("amount", receipt.amount.display())
        .emit();
    print_receipt(&receipt, output);

    Ok(())
}

fn print_receipt(receipt: &Receipt, output: &Output) {
    output.success("Payment Successful!");
    output.line("  Thank you for your purchase. Your order has been confirmed.");
    output.kv("Order", &format!("#{}", receipt.order_id));
    output.kv("Amount Paid", &receipt.amount.display());
    output.kv(
        "Paid at",
        &receipt.paid_at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    output.kv("Estimated delivery", &receipt.delivery_estimate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_observability::SessionId;

    fn product(id: u64, category: &str, brand: &str, price: f64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            brand: brand.to_string(),
            category: category.to_string(),
            price,
            discount_percentage: 0.0,
            rating: 4.0,
            stock,
            thumbnail: String::new(),
            description: String::new(),
        }
    }

    fn session() -> ShopSession {
        let mut catalog = Catalog::new();
        catalog.replace(vec![
            product(1, "smartphones", "Apple", 999.0, 2),
            product(2, "laptops", "Dell", 500.0, 0),
            product(3, "mens-shirts", "Acme", 10.0, 50),
        ]);
        ShopSession::new(
            catalog,
            0.08,
            StructuredLogger::new(SessionId::from_string("test")),
        )
    }

    #[test]
    fn test_add_respects_stock() {
        let mut session = session();
        let id = ProductId::new(1);

        assert_eq!(session.add_one(id), Ok(CartChange::Added { quantity: 1 }));
        assert_eq!(
            session.add_one(id),
            Ok(CartChange::Incremented { quantity: 2 })
        );
        assert!(matches!(
            session.add_one(id),
            Err(CommerceError::StockLimitReached { available: 2, .. })
        ));
        assert_eq!(session.cart().quantity_of(&id), 2);
    }

    #[test]
    fn test_out_of_stock_product_cannot_be_added() {
        let mut session = session();
        assert!(session.add_one(ProductId::new(2)).is_err());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let mut session = session();
        assert_eq!(session.add_one(ProductId::new(99)), Ok(CartChange::Unchanged));
    }

    #[test]
    fn test_cart_editing() {
        let mut session = session();
        let shirt = ProductId::new(3);
        for _ in 0..3 {
            session.add_one(shirt).unwrap();
        }

        assert_eq!(
            session.remove_one(shirt),
            CartChange::Decremented { quantity: 2 }
        );
        assert_eq!(session.remove_line(shirt), CartChange::Removed);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_filters_apply_to_visible_products() {
        let mut session = session();
        assert_eq!(session.visible_products().len(), 3);

        session.filters_mut().toggle_category("Mens Shirts");
        let ids: Vec<u64> = session
            .visible_products()
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![3]);

        session.filters_mut().clear();
        session.filters_mut().stock_status = StockStatus::OutOfStock;
        let ids: Vec<u64> = session
            .visible_products()
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_max_price_input() {
        assert_eq!(parse_max_price(""), Ok(f64::MAX));
        assert_eq!(parse_max_price("  "), Ok(f64::MAX));
        assert_eq!(parse_max_price("49.5"), Ok(49.5));
        assert_eq!(parse_max_price(" 100 "), Ok(100.0));
        assert!(parse_max_price("abc").is_err());
        assert!(parse_max_price("-5").is_err());
        assert!(parse_max_price("inf").is_err());
        assert!(parse_max_price("NaN").is_err());
    }

    #[test]
    fn test_payment_needs_items() {
        let mut session = session();
        assert_eq!(session.begin_payment().unwrap_err(), CommerceError::EmptyCart);

        session.add_one(ProductId::new(3)).unwrap();
        let flow = session.begin_payment().unwrap();
        assert_eq!(flow.amount().display(), "$10.80");
    }
}
