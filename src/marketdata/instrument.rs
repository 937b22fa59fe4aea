use crate::alias::Date;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type SharedInstrument = Rc<RefCell<Instrument>>;

#[derive(Debug, Default)]
pub struct Instrument {
    name: String,
    prices: HashMap<Date, f64>,
}

impl Instrument {
    pub fn new<T: Into<String>>(name: T, prices: HashMap<Date, f64>) -> Self {
        Self {
            name: name.into(),
            prices,
        }
    }

    pub fn shared<T: Into<String>>(name: T, prices: HashMap<Date, f64>) -> SharedInstrument {
        Rc::new(RefCell::new(Self::new(name, prices)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price at `at`, `0.0` when no quote is stored for that date.
    pub fn price(&self, at: Date) -> f64 {
        self.prices.get(&at).copied().unwrap_or(0.0)
    }

    pub fn has_price(&self, at: Date) -> bool {
        self.prices.contains_key(&at)
    }

    pub fn update_price(&mut self, at: Date, value: f64) {
        self.prices.insert(at, value);
    }
}

impl std::hash::Hash for Instrument {
    fn hash<H>(&self, state: &mut H)
    where
        H: std::hash::Hasher,
    {
        self.name.hash(state)
    }
}

impl std::cmp::PartialEq for Instrument {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl std::cmp::Eq for Instrument {}
