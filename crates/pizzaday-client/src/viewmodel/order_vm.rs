//! Order page view model: aggregate summary, the caller's own orders,
//! and the submission form with its coercion rules.

use crate::error::{ClientError, Result};
use pizzaday_proto::{Order, OrdersResponse, PizzaType, SliceCounts};

/// Inline message shown when the date input is empty or invalid.
pub const DATE_ERROR_MSG: &str = "Please select a valid date.";
/// Generic message when fetching orders fails for any remote reason.
pub const FETCH_ERROR_MSG: &str = "Failed to load orders. Please try again.";
/// Acknowledgment after a successful submission.
pub const SUBMIT_OK_MSG: &str = "Order submitted successfully!";
/// Acknowledgment after a failed submission.
pub const SUBMIT_ERROR_MSG: &str = "Error submitting the order.";

/// The server-computed aggregate for the selected date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryView {
    /// `({type}, whole pizzas needed)` in sorted key order.
    pub pizzas_needed: Vec<(String, u32)>,
    pub total_juice_boxes: u32,
}

impl SummaryView {
    pub fn from_response(response: &OrdersResponse) -> Self {
        Self {
            pizzas_needed: response
                .pizzas_needed
                .iter()
                .map(|(t, n)| (t.clone(), *n))
                .collect(),
            total_juice_boxes: response.total_juice_boxes,
        }
    }

    /// Display lines: one per pizza type, then the juice-box total,
    /// which is always shown even when zero.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .pizzas_needed
            .iter()
            .map(|(t, n)| format!("{t}: {n} pizzas"))
            .collect();
        lines.push(format!("Total Juice Boxes: {}", self.total_juice_boxes));
        lines
    }
}

/// One of the caller's own past orders, rendered for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderView {
    pub student_name: String,
    /// Comma-joined `{type}: {count} slices` over strictly positive
    /// counts, or `"None"` when every count is zero.
    pub pizza_slices: String,
    pub juice_boxes: u32,
    /// Volunteer name, `"N/A"` when none was given.
    pub parent_volunteer: String,
}

impl OrderView {
    pub fn from_order(order: &Order) -> Self {
        let slices: Vec<String> = order
            .pizza_slices
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(t, count)| format!("{t}: {count} slices"))
            .collect();

        Self {
            student_name: order.student_name.clone(),
            pizza_slices: if slices.is_empty() {
                "None".to_string()
            } else {
                slices.join(", ")
            },
            juice_boxes: order.juice_boxes,
            parent_volunteer: if order.parent_volunteer.is_empty() {
                "N/A".to_string()
            } else {
                order.parent_volunteer.clone()
            },
        }
    }
}

/// Filter an order list down to the current user's own orders, in
/// server order, and render each.
pub fn personal_orders(orders: &[Order], user_id: &str) -> Vec<OrderView> {
    orders
        .iter()
        .filter(|order| order.user_id == user_id)
        .map(OrderView::from_order)
        .collect()
}

/// Raw form input, one string per field, mirroring the order form.
/// Counts stay unparsed until submission so invalid input can be
/// rejected instead of silently coerced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub student_name: String,
    pub cheese: String,
    pub salami: String,
    pub veggie: String,
    pub donair: String,
    pub zaatar: String,
    pub juice_boxes: String,
    pub parent_volunteer: String,
}

impl OrderForm {
    pub fn slice_input_mut(&mut self, pizza_type: PizzaType) -> &mut String {
        match pizza_type {
            PizzaType::Cheese => &mut self.cheese,
            PizzaType::Salami => &mut self.salami,
            PizzaType::Veggie => &mut self.veggie,
            PizzaType::Donair => &mut self.donair,
            PizzaType::Zaatar => &mut self.zaatar,
        }
    }

    fn slice_input(&self, pizza_type: PizzaType) -> &str {
        match pizza_type {
            PizzaType::Cheese => &self.cheese,
            PizzaType::Salami => &self.salami,
            PizzaType::Veggie => &self.veggie,
            PizzaType::Donair => &self.donair,
            PizzaType::Zaatar => &self.zaatar,
        }
    }

    /// Build the order to submit. Blank counts coerce to zero; anything
    /// else must parse as a non-negative integer or the whole submission
    /// is rejected before a request is made. Every one of the five slice
    /// keys is present in the result.
    pub fn to_order(&self, user_id: &str) -> Result<Order> {
        let mut slices = SliceCounts::default();
        for pizza_type in PizzaType::ALL {
            let count = parse_count(self.slice_input(pizza_type), pizza_type.as_str())?;
            slices.set(pizza_type, count);
        }

        Ok(Order {
            user_id: user_id.to_string(),
            student_name: self.student_name.trim().to_string(),
            pizza_slices: slices,
            juice_boxes: parse_count(&self.juice_boxes, "juice boxes")?,
            parent_volunteer: self.parent_volunteer.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_count(raw: &str, field: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>()
        .map_err(|_| ClientError::Validation(format!("'{raw}' is not a valid count for {field}")))
}

/// Everything the order page displays, updated by the order flow.
#[derive(Clone, Debug, Default)]
pub struct OrderViewModel {
    pub summary: Option<SummaryView>,
    pub my_orders: Vec<OrderView>,
    /// Inline error shown next to the date input, also used for fetch
    /// failures like the original page did.
    pub date_error: Option<String>,
    /// Submission acknowledgment, success or failure.
    pub status: Option<String>,
}

impl OrderViewModel {
    pub fn on_fetch_success(&mut self, response: &OrdersResponse, user_id: &str) {
        self.summary = Some(SummaryView::from_response(response));
        self.my_orders = personal_orders(&response.orders, user_id);
        self.date_error = None;
    }

    /// Fetch failure keeps whatever was already on screen and only sets
    /// the generic retry message.
    pub fn on_fetch_failed(&mut self) {
        self.date_error = Some(FETCH_ERROR_MSG.to_string());
    }

    pub fn on_date_invalid(&mut self) {
        self.date_error = Some(DATE_ERROR_MSG.to_string());
    }

    pub fn clear_date_error(&mut self) {
        self.date_error = None;
    }

    pub fn on_submit_success(&mut self) {
        self.status = Some(SUBMIT_OK_MSG.to_string());
    }

    pub fn on_submit_failed(&mut self) {
        self.status = Some(SUBMIT_ERROR_MSG.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn order(user_id: &str, name: &str, slices: SliceCounts, juice: u32, vol: &str) -> Order {
        Order {
            user_id: user_id.into(),
            student_name: name.into(),
            pizza_slices: slices,
            juice_boxes: juice,
            parent_volunteer: vol.into(),
        }
    }

    #[test]
    fn summary_renders_exactly_the_given_types() {
        let response = OrdersResponse {
            total_slices: BTreeMap::new(),
            pizzas_needed: BTreeMap::from([("Cheese".to_string(), 2), ("Veggie".to_string(), 1)]),
            total_juice_boxes: 5,
            orders: vec![],
        };

        let lines = SummaryView::from_response(&response).lines();
        assert_eq!(
            lines,
            vec![
                "Cheese: 2 pizzas".to_string(),
                "Veggie: 1 pizzas".to_string(),
                "Total Juice Boxes: 5".to_string(),
            ]
        );
    }

    #[test]
    fn juice_box_total_shown_even_when_zero() {
        let response = OrdersResponse {
            total_slices: BTreeMap::new(),
            pizzas_needed: BTreeMap::new(),
            total_juice_boxes: 0,
            orders: vec![],
        };
        let lines = SummaryView::from_response(&response).lines();
        assert_eq!(lines, vec!["Total Juice Boxes: 0".to_string()]);
    }

    #[test]
    fn personal_orders_filters_by_identifier() {
        let mut mine = SliceCounts::default();
        mine.set(PizzaType::Salami, 2);
        let orders = vec![
            order("me", "Jordan", mine, 1, "Dana"),
            order("someone-else", "Riley", SliceCounts::default(), 3, ""),
        ];

        let views = personal_orders(&orders, "me");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].student_name, "Jordan");
        assert_eq!(views[0].pizza_slices, "Salami: 2 slices");
        assert_eq!(views[0].juice_boxes, 1);
        assert_eq!(views[0].parent_volunteer, "Dana");
    }

    #[test]
    fn all_zero_slices_render_none() {
        let view = OrderView::from_order(&order("me", "Sam", SliceCounts::default(), 2, ""));
        assert_eq!(view.pizza_slices, "None");
        assert_eq!(view.parent_volunteer, "N/A");
    }

    #[test]
    fn zero_counts_omitted_from_slice_list() {
        let mut slices = SliceCounts::default();
        slices.set(PizzaType::Cheese, 1);
        slices.set(PizzaType::Zaatar, 4);

        let view = OrderView::from_order(&order("me", "Sam", slices, 0, "x"));
        assert_eq!(view.pizza_slices, "Cheese: 1 slices, Zaatar: 4 slices");
    }

    #[test]
    fn form_blank_counts_coerce_to_zero() {
        let form = OrderForm {
            student_name: "  Casey ".into(),
            cheese: "2".into(),
            ..Default::default()
        };

        let order = form.to_order("uid").unwrap();
        assert_eq!(order.student_name, "Casey");
        assert_eq!(order.pizza_slices.cheese, 2);
        assert_eq!(order.pizza_slices.donair, 0);
        assert_eq!(order.juice_boxes, 0);
        assert_eq!(order.parent_volunteer, "");
    }

    #[test]
    fn form_rejects_non_numeric_counts() {
        let form = OrderForm {
            veggie: "two".into(),
            ..Default::default()
        };
        assert!(matches!(
            form.to_order("uid"),
            Err(ClientError::Validation(_))
        ));

        let form = OrderForm {
            juice_boxes: "-1".into(),
            ..Default::default()
        };
        assert!(matches!(
            form.to_order("uid"),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn fetch_failure_preserves_previous_summary() {
        let response = OrdersResponse {
            total_slices: BTreeMap::new(),
            pizzas_needed: BTreeMap::from([("Donair".to_string(), 3)]),
            total_juice_boxes: 2,
            orders: vec![],
        };

        let mut vm = OrderViewModel::default();
        vm.on_fetch_success(&response, "me");
        vm.on_fetch_failed();

        assert_eq!(vm.date_error.as_deref(), Some(FETCH_ERROR_MSG));
        assert!(vm.summary.is_some(), "prior data must stay on screen");
    }
}
