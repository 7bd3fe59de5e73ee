use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of pizza types the fundraiser sells. The wire name is
/// the display name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PizzaType {
    Cheese,
    Salami,
    Veggie,
    Donair,
    Zaatar,
}

impl PizzaType {
    pub const ALL: [PizzaType; 5] = [
        PizzaType::Cheese,
        PizzaType::Salami,
        PizzaType::Veggie,
        PizzaType::Donair,
        PizzaType::Zaatar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaType::Cheese => "Cheese",
            PizzaType::Salami => "Salami",
            PizzaType::Veggie => "Veggie",
            PizzaType::Donair => "Donair",
            PizzaType::Zaatar => "Zaatar",
        }
    }
}

impl fmt::Display for PizzaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-type slice counts for one order. Serializes every type, zero or
/// not, so the submit payload always carries the five fixed keys.
/// Missing keys on received orders deserialize as zero.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SliceCounts {
    #[serde(rename = "Cheese", default)]
    pub cheese: u32,
    #[serde(rename = "Salami", default)]
    pub salami: u32,
    #[serde(rename = "Veggie", default)]
    pub veggie: u32,
    #[serde(rename = "Donair", default)]
    pub donair: u32,
    #[serde(rename = "Zaatar", default)]
    pub zaatar: u32,
}

impl SliceCounts {
    pub fn get(&self, pizza_type: PizzaType) -> u32 {
        match pizza_type {
            PizzaType::Cheese => self.cheese,
            PizzaType::Salami => self.salami,
            PizzaType::Veggie => self.veggie,
            PizzaType::Donair => self.donair,
            PizzaType::Zaatar => self.zaatar,
        }
    }

    pub fn set(&mut self, pizza_type: PizzaType, count: u32) {
        match pizza_type {
            PizzaType::Cheese => self.cheese = count,
            PizzaType::Salami => self.salami = count,
            PizzaType::Veggie => self.veggie = count,
            PizzaType::Donair => self.donair = count,
            PizzaType::Zaatar => self.zaatar = count,
        }
    }

    /// Iterate (type, count) pairs in the fixed menu order.
    pub fn iter(&self) -> impl Iterator<Item = (PizzaType, u32)> + '_ {
        PizzaType::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, n)| n).sum()
    }
}
