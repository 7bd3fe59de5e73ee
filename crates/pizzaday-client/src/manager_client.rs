//! Manager Client
//!
//! Operator view: the raw order collection, dumped verbatim, and
//! fire-and-forget menu-item creation. No menu state is kept locally.

use crate::api::ApiClient;
use crate::error::Result;
use crate::viewmodel::ManagerViewModel;
use pizzaday_proto::MenuItem;

pub struct ManagerClient {
    api: ApiClient,
    vm: ManagerViewModel,
}

impl ManagerClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            vm: ManagerViewModel::default(),
        }
    }

    pub fn vm(&self) -> &ManagerViewModel {
        &self.vm
    }

    /// Fetch the complete, unscoped order collection and keep its
    /// pretty-printed dump for display.
    pub async fn load_orders(&mut self) -> Result<&str> {
        let orders = self.api.manager_orders().await?;
        self.vm.on_orders_loaded(&orders);
        Ok(self.vm.orders_dump.as_deref().unwrap_or(""))
    }

    /// Post a new menu item and return the backend's feedback line,
    /// success message or error alike.
    pub async fn add_menu_item(&mut self, name: &str, kind: &str) -> Result<&str> {
        let item = MenuItem {
            name: name.to_string(),
            kind: kind.to_string(),
        };
        let feedback = self.api.add_menu_item(&item).await?;
        self.vm.on_menu_feedback(&feedback);
        Ok(self.vm.menu_feedback.as_deref().unwrap_or(""))
    }
}
