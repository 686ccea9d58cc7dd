//! Status kinds and per-status tables.
//!
//! Provides type safety for status references instead of magic strings like
//! "str" or "wat", and a table type that always holds one value per status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::DomainError;

/// Status kinds a flame can roll and a multiplier can weight.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Strength
    Str,
    /// Dexterity
    Dex,
    /// Intelligence
    Int,
    /// Luck
    Luk,
    /// All-stat percentage
    All,
    /// Weapon attack
    Wat,
    /// Magic attack
    Mat,
}

impl StatusKind {
    /// Every status kind, in display order.
    pub const ALL: [StatusKind; 7] = [
        Self::Str,
        Self::Dex,
        Self::Int,
        Self::Luk,
        Self::All,
        Self::Wat,
        Self::Mat,
    ];

    /// Returns the serialized tag (e.g., "str", "wat").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Dex => "dex",
            Self::Int => "int",
            Self::Luk => "luk",
            Self::All => "all",
            Self::Wat => "wat",
            Self::Mat => "mat",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "str" => Ok(Self::Str),
            "dex" => Ok(Self::Dex),
            "int" => Ok(Self::Int),
            "luk" => Ok(Self::Luk),
            "all" => Ok(Self::All),
            "wat" => Ok(Self::Wat),
            "mat" => Ok(Self::Mat),
            _ => Err(DomainError::parse(format!("Unknown status kind: {}", s))),
        }
    }
}

/// One value per [`StatusKind`].
///
/// Every key is a named field, so a table can never be partial. Serializes as
/// an object keyed by the status tags.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusTable<T> {
    str: T,
    dex: T,
    int: T,
    luk: T,
    all: T,
    wat: T,
    mat: T,
}

impl<T> StatusTable<T> {
    /// Build a table by evaluating `f` once per status, in display order.
    pub fn from_fn(mut f: impl FnMut(StatusKind) -> T) -> Self {
        Self {
            str: f(StatusKind::Str),
            dex: f(StatusKind::Dex),
            int: f(StatusKind::Int),
            luk: f(StatusKind::Luk),
            all: f(StatusKind::All),
            wat: f(StatusKind::Wat),
            mat: f(StatusKind::Mat),
        }
    }

    pub fn get(&self, status: StatusKind) -> &T {
        match status {
            StatusKind::Str => &self.str,
            StatusKind::Dex => &self.dex,
            StatusKind::Int => &self.int,
            StatusKind::Luk => &self.luk,
            StatusKind::All => &self.all,
            StatusKind::Wat => &self.wat,
            StatusKind::Mat => &self.mat,
        }
    }

    pub fn get_mut(&mut self, status: StatusKind) -> &mut T {
        match status {
            StatusKind::Str => &mut self.str,
            StatusKind::Dex => &mut self.dex,
            StatusKind::Int => &mut self.int,
            StatusKind::Luk => &mut self.luk,
            StatusKind::All => &mut self.all,
            StatusKind::Wat => &mut self.wat,
            StatusKind::Mat => &mut self.mat,
        }
    }

    /// Iterate `(status, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, &T)> + '_ {
        StatusKind::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> StatusTable<U> {
        StatusTable::from_fn(|status| f(self.get(status)))
    }

    /// Like [`map`](Self::map), but stops at the first error.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(&T) -> Result<U, E>,
    ) -> Result<StatusTable<U>, E> {
        Ok(StatusTable {
            str: f(&self.str)?,
            dex: f(&self.dex)?,
            int: f(&self.int)?,
            luk: f(&self.luk)?,
            all: f(&self.all)?,
            wat: f(&self.wat)?,
            mat: f(&self.mat)?,
        })
    }
}

impl<T> Index<StatusKind> for StatusTable<T> {
    type Output = T;

    fn index(&self, status: StatusKind) -> &T {
        self.get(status)
    }
}

impl<T> IndexMut<StatusKind> for StatusTable<T> {
    fn index_mut(&mut self, status: StatusKind) -> &mut T {
        self.get_mut(status)
    }
}
