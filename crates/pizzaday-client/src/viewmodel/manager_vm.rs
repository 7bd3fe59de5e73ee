//! Manager page view model: a verbatim dump of the order collection and
//! the last menu-submission feedback line.

use pizzaday_proto::MenuFeedback;

#[derive(Clone, Debug, Default)]
pub struct ManagerViewModel {
    /// Pretty-printed JSON of the full order collection, untouched
    /// beyond formatting.
    pub orders_dump: Option<String>,
    pub menu_feedback: Option<String>,
}

impl ManagerViewModel {
    pub fn on_orders_loaded(&mut self, orders: &serde_json::Value) {
        self.orders_dump =
            Some(serde_json::to_string_pretty(orders).unwrap_or_else(|_| orders.to_string()));
    }

    pub fn on_menu_feedback(&mut self, feedback: &MenuFeedback) {
        self.menu_feedback = Some(feedback.text().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn orders_dump_is_verbatim_pretty_print() {
        let orders = json!([{"_id": "1", "student_name": "Alex", "extra": {"kept": true}}]);

        let mut vm = ManagerViewModel::default();
        vm.on_orders_loaded(&orders);

        let dump = vm.orders_dump.unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&dump).unwrap(),
            orders,
            "dump must carry the collection unmodified"
        );
        assert!(dump.contains('\n'), "dump should be pretty-printed");
    }

    #[test]
    fn error_feedback_displayed_literally() {
        let feedback = MenuFeedback {
            message: None,
            error: Some("Invalid".to_string()),
        };

        let mut vm = ManagerViewModel::default();
        vm.on_menu_feedback(&feedback);
        assert_eq!(vm.menu_feedback.as_deref(), Some("Invalid"));
    }
}
