use std::fmt;

use serde::{Deserialize, Serialize};

/// An entity that carries an integer identity assigned on first persist.
pub trait Identifiable {
    /// Entity name used in error messages.
    const ENTITY_TYPE: &'static str;

    /// The identity, or `None` while the entity is transient.
    ///
    /// `0` is the unset sentinel and reads as `None`.
    fn id(&self) -> Option<i32>;

    fn set_id(&mut self, id: i32);

    /// Rejects field values a backend cannot store faithfully.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A unicorn, the record type stored by every backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unicorn {
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
    pub color: String,
    pub power_strength: f64,
}

impl Unicorn {
    /// Creates a transient unicorn (no identity yet).
    pub fn new(
        name: impl Into<String>,
        age: i32,
        color: impl Into<String>,
        power_strength: f64,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            color: color.into(),
            power_strength,
        }
    }

    /// Sets a specific ID for this unicorn.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

impl Identifiable for Unicorn {
    const ENTITY_TYPE: &'static str = "Unicorn";

    fn id(&self) -> Option<i32> {
        self.id.filter(|&id| id != 0)
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    fn validate(&self) -> Result<(), String> {
        if self.power_strength.is_finite() {
            Ok(())
        } else {
            Err(format!(
                "power strength must be finite, got {}",
                self.power_strength
            ))
        }
    }
}

impl fmt::Display for Unicorn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "[ID {id}]")?,
            None => f.write_str("[ID -]")?,
        }
        write!(
            f,
            ": {} the {} Unicorn is {} years old and has powerlevel {:.2}",
            self.name, self.color, self.age, self.power_strength
        )
    }
}
