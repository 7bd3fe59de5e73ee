use crate::types::SliceCounts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One submitted order. Built client-side, never mutated after the POST.
/// Orders coming back from the server may carry extra bookkeeping fields
/// (`_id`, `date`, `timestamp`); those are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub user_id: String,
    pub student_name: String,
    pub pizza_slices: SliceCounts,
    #[serde(default)]
    pub juice_boxes: u32,
    #[serde(default)]
    pub parent_volunteer: String,
}

/// GET `/orders?date=` response: the server-computed aggregates plus the
/// full order list for that date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub total_slices: BTreeMap<String, u32>,
    pub pizzas_needed: BTreeMap<String, u32>,
    pub total_juice_boxes: u32,
    pub orders: Vec<Order>,
}
