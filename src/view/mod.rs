//! Terminal display for order lookups.
//!
//! The display is a single state value replaced wholesale on every
//! transition; regions are never patched individually. Rendering writes to
//! any [`io::Write`] sink so tests can capture the output.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::orders::{Order, OrderId, OrderItem};

mod format;

pub use format::{amount_with_currency, minor_units, payment_timestamp, payment_timestamp_in};

/// Errors raised while writing to the display.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The underlying writer failed.
    #[error("failed to write to the display")]
    Io(#[from] io::Error),
}

/// What the display currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing rendered yet.
    Idle,
    /// A request is outstanding; the loading line is visible.
    Loading,
    /// The error area is visible with this message.
    Error(String),
    /// The four order regions are visible for this order UID.
    Order(String),
}

/// Writes lookup results to a terminal-style output stream.
#[derive(Debug)]
pub struct OrderView<W> {
    out: W,
    state: ViewState,
}

impl<W: io::Write> OrderView<W> {
    /// Create a view over the given output stream.
    pub fn new(out: W) -> Self {
        Self {
            out,
            state: ViewState::Idle,
        }
    }

    /// Current display state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Borrow the underlying writer.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Discard whatever is shown and put up the loading line.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] when the output stream cannot be written.
    pub fn begin_lookup(&mut self, id: &OrderId) -> Result<(), ViewError> {
        self.state = ViewState::Loading;

        writeln!(self.out, "Fetching order {id} ...")?;

        Ok(())
    }

    /// Take the loading line down. Safe to call when nothing is loading.
    pub fn finish_loading(&mut self) {
        if self.state == ViewState::Loading {
            self.state = ViewState::Idle;
        }
    }

    /// Show a message in the error area, replacing any current content.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] when the output stream cannot be written.
    pub fn show_error(&mut self, message: &str) -> Result<(), ViewError> {
        self.state = ViewState::Error(message.to_string());

        writeln!(self.out, "{message}")?;

        Ok(())
    }

    /// Render all four order regions and make the order display visible.
    ///
    /// Regions are overwritten wholesale, in a fixed order: summary,
    /// delivery, payment, items.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] when the output stream cannot be written.
    pub fn show_order(&mut self, order: &Order) -> Result<(), ViewError> {
        self.write_summary(order)?;
        self.write_delivery(order)?;
        self.write_payment(order)?;
        self.write_items(&order.items)?;

        self.state = ViewState::Order(order.order_uid.clone());

        Ok(())
    }

    fn write_summary(&mut self, order: &Order) -> Result<(), ViewError> {
        writeln!(self.out, "\nOrder")?;

        write_field(&mut self.out, "Order UID", &order.order_uid)?;
        write_field(&mut self.out, "Track Number", &order.track_number)?;
        write_field(&mut self.out, "Entry", &order.entry)?;
        write_field(&mut self.out, "Date Created", &order.date_created)?;
        write_field(&mut self.out, "Customer ID", &order.customer_id)?;

        Ok(())
    }

    fn write_delivery(&mut self, order: &Order) -> Result<(), ViewError> {
        let delivery = &order.delivery;
        let address = [
            delivery.city.as_str(),
            delivery.address.as_str(),
            delivery.region.as_str(),
            delivery.zip.as_str(),
        ]
        .join(", ");

        writeln!(self.out, "\nDelivery")?;

        write_field(&mut self.out, "Name", &delivery.name)?;
        write_field(&mut self.out, "Phone", &delivery.phone)?;
        write_field(&mut self.out, "Address", &address)?;
        write_field(&mut self.out, "Email", &delivery.email)?;

        Ok(())
    }

    fn write_payment(&mut self, order: &Order) -> Result<(), ViewError> {
        let payment = &order.payment;

        writeln!(self.out, "\nPayment")?;

        write_field(&mut self.out, "Transaction", &payment.transaction)?;
        write_field(
            &mut self.out,
            "Amount",
            &amount_with_currency(payment.amount, &payment.currency),
        )?;
        write_field(&mut self.out, "Provider", &payment.provider)?;
        write_field(
            &mut self.out,
            "Payment Date",
            &payment_timestamp(payment.payment_dt),
        )?;
        write_field(&mut self.out, "Bank", &payment.bank)?;

        Ok(())
    }

    fn write_items(&mut self, items: &[OrderItem]) -> Result<(), ViewError> {
        let mut builder = Builder::default();

        builder.push_record(["Name", "Price", "Quantity", "Total Price", "Brand", "Status"]);

        for item in items {
            builder.push_record([
                item.name.clone(),
                minor_units(item.price),
                derived_quantity(item),
                minor_units(item.total_price),
                item.brand.clone(),
                item.status.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(self.out, "\nItems")?;
        writeln!(self.out, "{table}")?;

        Ok(())
    }
}

fn write_field(out: &mut impl io::Write, label: &str, value: &str) -> Result<(), ViewError> {
    writeln!(out, "  {:<14}{value}", format!("{label}:"))?;

    Ok(())
}

/// Quantity shown for a line item, derived from its price ratio.
///
/// The wire contract has no quantity field; the ratio is a display
/// approximation only. A zero price or an inexact division renders as a
/// placeholder instead of failing.
fn derived_quantity(item: &OrderItem) -> String {
    if item.price != 0 && item.total_price % item.price == 0 {
        (item.total_price / item.price).to_string()
    } else {
        "-".to_string()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::orders::{Delivery, Payment};

    use super::*;

    fn sample_item() -> OrderItem {
        OrderItem {
            chrt_id: 9_934_930,
            track_number: "WBILMTESTTRACK".to_string(),
            price: 453,
            rid: "ab4219087a764ae0btest".to_string(),
            name: "Mascaras".to_string(),
            sale: 30,
            size: "0".to_string(),
            total_price: 317,
            nm_id: 2_389_212,
            brand: "Vivienne Sabo".to_string(),
            status: 202,
        }
    }

    fn sample_order() -> Order {
        Order {
            order_uid: "b563feb7b2b84b6test".to_string(),
            track_number: "WBILMTESTTRACK".to_string(),
            entry: "WBIL".to_string(),
            delivery: Delivery {
                name: "Test Testov".to_string(),
                phone: "+9720000000".to_string(),
                zip: "2639809".to_string(),
                city: "Kiryat Mozkin".to_string(),
                address: "Ploshad Mira 15".to_string(),
                region: "Kraiot".to_string(),
                email: "test@gmail.com".to_string(),
            },
            payment: Payment {
                transaction: "b563feb7b2b84b6test".to_string(),
                request_id: String::new(),
                currency: "USD".to_string(),
                provider: "wbpay".to_string(),
                amount: 1817,
                payment_dt: 1_637_907_727,
                bank: "alpha".to_string(),
                delivery_cost: 1500,
                goods_total: 317,
                custom_fee: 0,
            },
            items: vec![sample_item()],
            locale: "en".to_string(),
            internal_signature: String::new(),
            customer_id: "test".to_string(),
            delivery_service: "meest".to_string(),
            shardkey: "9".to_string(),
            sm_id: 99,
            date_created: "2021-11-26T06:22:19Z".to_string(),
            oof_shard: "1".to_string(),
        }
    }

    fn rendered(view: &OrderView<Vec<u8>>) -> String {
        String::from_utf8_lossy(view.output()).to_string()
    }

    #[test]
    fn begin_lookup_shows_the_loading_line() -> TestResult {
        let mut view = OrderView::new(Vec::new());
        let id = OrderId::parse("abc123")?;

        view.begin_lookup(&id)?;

        assert_eq!(view.state(), &ViewState::Loading);
        assert!(
            rendered(&view).contains("Fetching order abc123"),
            "missing loading line"
        );

        Ok(())
    }

    #[test]
    fn finish_loading_only_clears_the_loading_state() -> TestResult {
        let mut view = OrderView::new(Vec::new());

        view.finish_loading();
        assert_eq!(view.state(), &ViewState::Idle);

        view.show_error("boom")?;
        view.finish_loading();
        assert_eq!(view.state(), &ViewState::Error("boom".to_string()));

        Ok(())
    }

    #[test]
    fn show_error_displays_the_exact_message() -> TestResult {
        let mut view = OrderView::new(Vec::new());

        view.show_error("order not found")?;

        assert_eq!(view.state(), &ViewState::Error("order not found".to_string()));
        assert!(
            rendered(&view).contains("order not found"),
            "missing error line"
        );

        Ok(())
    }

    #[test]
    fn show_order_populates_all_four_regions() -> TestResult {
        let mut view = OrderView::new(Vec::new());

        view.show_order(&sample_order())?;

        assert_eq!(
            view.state(),
            &ViewState::Order("b563feb7b2b84b6test".to_string())
        );

        let output = rendered(&view);

        for region in ["Order", "Delivery", "Payment", "Items"] {
            assert!(output.contains(&format!("\n{region}\n")), "missing {region} region");
        }

        assert!(output.contains("Track Number:"), "missing summary field");
        assert!(output.contains("2021-11-26T06:22:19Z"), "date not verbatim");
        assert!(
            output.contains("Kiryat Mozkin, Ploshad Mira 15, Kraiot, 2639809"),
            "address line not composed"
        );
        assert!(output.contains("18.17 USD"), "amount not formatted");
        assert!(output.contains("Mascaras"), "item row missing");
        assert!(output.contains("Vivienne Sabo"), "item brand missing");
        assert!(output.contains("202"), "item status missing");

        Ok(())
    }

    #[test]
    fn item_quantity_is_derived_from_the_price_ratio() {
        let mut item = sample_item();

        item.price = 500;
        item.total_price = 1500;
        assert_eq!(derived_quantity(&item), "3");
    }

    #[test]
    fn zero_price_item_renders_a_placeholder_quantity() {
        let mut item = sample_item();

        item.price = 0;
        item.total_price = 0;
        assert_eq!(derived_quantity(&item), "-");
    }

    #[test]
    fn inexact_price_ratio_renders_a_placeholder_quantity() {
        let mut item = sample_item();

        item.price = 453;
        item.total_price = 317;
        assert_eq!(derived_quantity(&item), "-");
    }

    #[test]
    fn zero_price_order_renders_without_failing() -> TestResult {
        let mut order = sample_order();

        if let Some(item) = order.items.first_mut() {
            item.price = 0;
            item.total_price = 0;
        }

        let mut view = OrderView::new(Vec::new());

        view.show_order(&order)?;

        assert!(rendered(&view).contains("0.00"), "zero totals missing");

        Ok(())
    }
}
