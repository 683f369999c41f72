use std::fmt;

use crate::domain::ports::SourceOfIngredients;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientCall {
    CupSize(u32),
    Water { gram: u32, temperature: u32 },
    Sugar(u32),
    Coffee(u32),
    Milk(u32),
    MilkFoam(u32),
    Chocolate(u32),
    Cream(u32),
}

impl fmt::Display for IngredientCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientCall::CupSize(gram) => write!(f, "cup size {} g", gram),
            IngredientCall::Water { gram, temperature } => {
                write!(f, "water {} g at {}°C", gram, temperature)
            }
            IngredientCall::Sugar(gram) => write!(f, "sugar {} g", gram),
            IngredientCall::Coffee(gram) => write!(f, "coffee {} g", gram),
            IngredientCall::Milk(gram) => write!(f, "milk {} g", gram),
            IngredientCall::MilkFoam(gram) => write!(f, "milk foam {} g", gram),
            IngredientCall::Chocolate(gram) => write!(f, "chocolate {} g", gram),
            IngredientCall::Cream(gram) => write!(f, "cream {} g", gram),
        }
    }
}

/// Ingredient source that keeps every dispensing call in order.
#[derive(Debug, Default)]
pub struct RecordingIngredients {
    calls: Vec<IngredientCall>,
}

impl RecordingIngredients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[IngredientCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<IngredientCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: IngredientCall) {
        tracing::debug!("Dispensing {}", call);
        self.calls.push(call);
    }
}

impl SourceOfIngredients for RecordingIngredients {
    fn set_cup_size(&mut self, gram: u32) {
        self.record(IngredientCall::CupSize(gram));
    }

    fn add_water(&mut self, gram: u32, temperature: u32) {
        self.record(IngredientCall::Water { gram, temperature });
    }

    fn add_sugar(&mut self, gram: u32) {
        self.record(IngredientCall::Sugar(gram));
    }

    fn add_coffee(&mut self, gram: u32) {
        self.record(IngredientCall::Coffee(gram));
    }

    fn add_milk(&mut self, gram: u32) {
        self.record(IngredientCall::Milk(gram));
    }

    fn add_milk_foam(&mut self, gram: u32) {
        self.record(IngredientCall::MilkFoam(gram));
    }

    fn add_chocolate(&mut self, gram: u32) {
        self.record(IngredientCall::Chocolate(gram));
    }

    fn add_cream(&mut self, gram: u32) {
        self.record(IngredientCall::Cream(gram));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calls_are_recorded_in_order() {
        let mut source = RecordingIngredients::new();
        source.set_cup_size(100);
        source.add_water(33, 60);
        source.add_coffee(66);

        assert_eq!(
            source.calls(),
            &[
                IngredientCall::CupSize(100),
                IngredientCall::Water {
                    gram: 33,
                    temperature: 60
                },
                IngredientCall::Coffee(66),
            ]
        );
        assert_eq!(source.take_calls().len(), 3);
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_display() {
        let call = IngredientCall::Water {
            gram: 0,
            temperature: 80,
        };
        assert_eq!(call.to_string(), "water 0 g at 80°C");
    }
}
