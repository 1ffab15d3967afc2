//! Lookup orchestration: validate, fetch, decode, render.

use std::fmt;
use std::io;

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use thiserror::Error;

use crate::{
    client::{FetchError, OrderApi},
    orders::{Order, OrderId, RenderError, ValidationError},
    view::{OrderView, ViewError},
};

/// Errors surfaced to the user by a lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The supplied identifier was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The order service could not provide the document.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The service answered with a document that is not an order.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The display could not be written.
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Source of order documents, keyed by identifier.
#[automock]
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the raw order document for `id`.
    async fn fetch_order(&self, id: &OrderId) -> Result<Value, FetchError>;
}

#[async_trait]
impl OrderSource for OrderApi {
    async fn fetch_order(&self, id: &OrderId) -> Result<Value, FetchError> {
        OrderApi::fetch_order(self, id).await
    }
}

/// Drives one lookup end to end and owns the display.
///
/// Lookups are awaited sequentially, so at most one request is in flight and
/// a later lookup can never race an earlier one for the display.
pub struct Lookup<S, W> {
    source: S,
    view: OrderView<W>,
}

impl<S, W> fmt::Debug for Lookup<S, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookup").finish_non_exhaustive()
    }
}

impl<S: OrderSource, W: io::Write> Lookup<S, W> {
    /// Create a lookup pipeline over an order source and a display.
    pub fn new(source: S, view: OrderView<W>) -> Self {
        Self { source, view }
    }

    /// Borrow the display.
    #[must_use]
    pub fn view(&self) -> &OrderView<W> {
        &self.view
    }

    /// Run one lookup for raw user input.
    ///
    /// Every failure is written to the display before it is returned, so
    /// interactive callers can ignore the result and one-shot callers can
    /// turn it into an exit status.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] describing the validation, fetch, or render
    /// failure that was shown to the user.
    pub async fn run(&mut self, input: &str) -> Result<(), LookupError> {
        match self.lookup(input).await {
            Ok(()) => Ok(()),
            Err(error) => {
                self.view.show_error(&error.to_string())?;

                Err(error)
            }
        }
    }

    async fn lookup(&mut self, input: &str) -> Result<(), LookupError> {
        let id = OrderId::parse(input)?;

        self.view.begin_lookup(&id)?;

        let outcome = self.source.fetch_order(&id).await;

        // The loading line comes down exactly once, whichever way the
        // request went.
        self.view.finish_loading();

        let order = Order::from_document(outcome?)?;

        self.view.show_order(&order)?;

        Ok(())
    }
}
