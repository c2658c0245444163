use std::{collections::HashMap, marker::PhantomData};

/// Instance and static methods sharing one owner.
#[derive(Debug, Clone, Default)]
pub struct ConfusingSignatures {
    pub add_offset: i32,
}

impl ConfusingSignatures {
    pub fn add(&self, x: i32, y: i32, z: i32) -> i32 {
        self.add_offset + x + y + z
    }

    pub fn concat(left: String, right: String) -> String {
        left + &right
    }

    pub fn check_contains(map: HashMap<String, i32>, key: String, value: i32) -> bool {
        map.get(&key) == Some(&value)
    }

    pub fn singleton_map(key: String, value: String) -> HashMap<String, String> {
        HashMap::from([(key, value)])
    }

    pub fn offset(&self) -> i32 {
        self.add_offset
    }
}

/// Picks among its arguments by position.
#[derive(Debug, Clone)]
pub struct HasGen<E> {
    pub which: usize,
    _marker: PhantomData<E>,
}

impl<E> HasGen<E> {
    pub fn new(which: usize) -> Self {
        Self {
            which,
            _marker: PhantomData,
        }
    }

    pub fn pick_some(&self, first: E, second: E, third: E) -> E {
        match self.which {
            0 => first,
            1 => second,
            _ => third,
        }
    }

    pub fn to_iterable<F: Into<E>>(&self, first: F, second: F, third: F) -> Vec<E> {
        vec![first.into(), second.into(), third.into()]
    }

    pub fn describe(self, label: String) -> String {
        format!("{} #{}", label, self.which)
    }

    pub fn pick_second(_first: i32, second: i32, _third: i32) -> i32 {
        second
    }

    pub fn lazy_append<F>(all_but_last: Vec<F>, last: F) -> Vec<F> {
        all_but_last.into_iter().chain(std::iter::once(last)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<I> {
    pub item: I,
}

impl<I> Container<I> {
    pub fn new(item: I) -> Self {
        Self { item }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("family name is required")]
    MissingFamily,
    #[error("given name is required")]
    MissingGiven,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub family: String,
    pub given: String,
}

impl Name {
    /// Both parts are required.
    pub fn new(family: Option<String>, given: Option<String>) -> Result<Self, NameError> {
        Ok(Self {
            family: family.ok_or(NameError::MissingFamily)?,
            given: given.ok_or(NameError::MissingGiven)?,
        })
    }
}

/// A running total.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub total: u32,
}

impl Tally {
    pub fn record(&mut self, amount: u32) -> u32 {
        self.total += amount;
        self.total
    }
}
