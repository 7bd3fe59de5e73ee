//! Order Client
//!
//! Owns the session (anonymous identifier + selected date), fetches and
//! filters the date's orders, and submits new ones. All outcomes land in
//! the view model; no failure here is ever fatal to the caller.

use crate::api::ApiClient;
use crate::error::{ClientError, Result};
use crate::session::{Session, SessionStore};
use crate::viewmodel::{OrderForm, OrderViewModel};
use chrono::NaiveDate;
use pizzaday_proto::{OrdersResponse, PartyDate};
use tracing::{debug, warn};

pub struct OrderClient<S: SessionStore> {
    session: Session<S>,
    api: ApiClient,
    vm: OrderViewModel,
    /// Sequence token of the most recently issued fetch. Responses that
    /// come back under an older token are discarded, so a rapid date
    /// change can never be overwritten by a slow earlier request.
    fetch_seq: u64,
}

impl<S: SessionStore> OrderClient<S> {
    /// Identifier acquisition happens in `Session::open`, before any
    /// other operation can run.
    pub fn new(store: S, api: ApiClient) -> Result<Self> {
        Ok(Self {
            session: Session::open(store)?,
            api,
            vm: OrderViewModel::default(),
            fetch_seq: 0,
        })
    }

    pub fn user_id(&self) -> &str {
        self.session.user_id()
    }

    pub fn vm(&self) -> &OrderViewModel {
        &self.vm
    }

    /// Page-load behavior: when a date was saved earlier, restore it and
    /// run the initial fetch.
    pub async fn load(&mut self) -> Result<Option<PartyDate>> {
        let saved = self.session.saved_date()?;
        if let Some(date) = saved {
            self.refresh(date).await;
        }
        Ok(saved)
    }

    /// User-driven date change: persist and fetch on success; on an
    /// empty, unparsable, or past date set the inline validation message
    /// and fetch nothing.
    pub async fn change_date(&mut self, input: &str, today: NaiveDate) -> Result<Option<PartyDate>> {
        match self.session.select_date(input, today) {
            Ok(date) => {
                self.vm.clear_date_error();
                self.refresh(date).await;
                Ok(Some(date))
            }
            Err(ClientError::Proto(e)) => {
                debug!("Rejected date input {input:?}: {e}");
                self.vm.on_date_invalid();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the date's orders and apply the result, last-write-wins.
    pub async fn refresh(&mut self, date: PartyDate) {
        let token = self.begin_fetch();
        let result = self.api.fetch_orders(date).await;
        self.apply_fetch(token, result);
    }

    /// Issue a new fetch token, invalidating every outstanding fetch.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.fetch_seq
    }

    /// Apply a completed fetch. Stale tokens are dropped without
    /// touching the view model; failures keep prior data and surface the
    /// generic retry message. Returns whether the result was applied.
    pub fn apply_fetch(&mut self, token: u64, result: Result<OrdersResponse>) -> bool {
        if token != self.fetch_seq {
            debug!("Discarding stale fetch response (token {token}, latest {})", self.fetch_seq);
            return false;
        }
        match result {
            Ok(response) => self.vm.on_fetch_success(&response, self.session.user_id()),
            Err(e) => {
                warn!("Error fetching orders: {e}");
                self.vm.on_fetch_failed();
            }
        }
        true
    }

    /// Submit the form for the given date. Invalid counts are rejected
    /// before any request. On success the form is reset and the date is
    /// re-fetched; on a failed request the form is left intact and no
    /// re-fetch happens, so nothing the user typed is lost.
    pub async fn submit(&mut self, date: PartyDate, form: &mut OrderForm) -> Result<()> {
        let order = form.to_order(self.session.user_id())?;

        match self.api.submit_order(date, &order).await {
            Ok(()) => {
                self.vm.on_submit_success();
                form.reset();
                self.refresh(date).await;
            }
            Err(e) => {
                warn!("Error submitting order: {e}");
                self.vm.on_submit_failed();
            }
        }
        Ok(())
    }
}
