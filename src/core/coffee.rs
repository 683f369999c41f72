use crate::core::{CupSize, DrinkType, Extras, Result, SourceOfIngredients};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingredient {
    Water,
    Coffee,
    Milk,
    MilkFoam,
    Chocolate,
}

/// `cup / denominator * multiplier`, floor division first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Portion {
    pub ingredient: Ingredient,
    pub denominator: u32,
    pub multiplier: u32,
}

impl Portion {
    const fn part(ingredient: Ingredient, denominator: u32) -> Self {
        Self {
            ingredient,
            denominator,
            multiplier: 1,
        }
    }

    const fn parts(ingredient: Ingredient, denominator: u32, multiplier: u32) -> Self {
        Self {
            ingredient,
            denominator,
            multiplier,
        }
    }

    pub fn grams(&self, cup: CupSize) -> u32 {
        cup.grams() / self.denominator * self.multiplier
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// Water temperature in Celsius; `None` when the drink uses no water.
    pub water_temperature: Option<u32>,
    pub portions: &'static [Portion],
}

const AMERICANO: Recipe = Recipe {
    water_temperature: Some(60),
    portions: &[
        Portion::part(Ingredient::Water, 3),
        Portion::parts(Ingredient::Coffee, 3, 2),
    ],
};

const CAPPUCCINO: Recipe = Recipe {
    water_temperature: Some(80),
    portions: &[
        Portion::part(Ingredient::Milk, 3),
        Portion::part(Ingredient::Coffee, 3),
        Portion::part(Ingredient::MilkFoam, 3),
    ],
};

const LATTE: Recipe = Recipe {
    water_temperature: Some(90),
    portions: &[
        Portion::part(Ingredient::Milk, 4),
        Portion::part(Ingredient::Coffee, 2),
        Portion::part(Ingredient::MilkFoam, 4),
    ],
};

// The last quarter of the cup stays empty.
const MAROCHINO: Recipe = Recipe {
    water_temperature: None,
    portions: &[
        Portion::part(Ingredient::Chocolate, 4),
        Portion::part(Ingredient::Coffee, 4),
        Portion::part(Ingredient::MilkFoam, 4),
    ],
};

pub fn recipe(drink: DrinkType) -> &'static Recipe {
    match drink {
        DrinkType::Americano => &AMERICANO,
        DrinkType::Cappuccino => &CAPPUCCINO,
        DrinkType::Latte => &LATTE,
        DrinkType::Marochino => &MAROCHINO,
    }
}

pub struct CoffeeMachine<I: SourceOfIngredients> {
    ingredients: I,
}

impl<I: SourceOfIngredients> CoffeeMachine<I> {
    pub fn new(ingredients: I) -> Self {
        Self { ingredients }
    }

    pub fn ingredients(&self) -> &I {
        &self.ingredients
    }

    pub fn into_ingredients(self) -> I {
        self.ingredients
    }

    pub fn prepare(&mut self, drink: DrinkType, size: CupSize) {
        self.prepare_with_extras(drink, size, Extras::default());
    }

    pub fn prepare_with_extras(&mut self, drink: DrinkType, size: CupSize, extras: Extras) {
        tracing::debug!("Preparing {} in a {} cup", drink, size);
        let recipe = recipe(drink);
        self.ingredients.set_cup_size(size.grams());

        if let Some(temperature) = recipe.water_temperature {
            let water = recipe
                .portions
                .iter()
                .find(|p| p.ingredient == Ingredient::Water)
                .map(|p| p.grams(size))
                .unwrap_or(0);
            self.ingredients.add_water(water, temperature);
        }

        for portion in recipe.portions {
            let grams = portion.grams(size);
            match portion.ingredient {
                // already dispensed together with its temperature
                Ingredient::Water => {}
                Ingredient::Coffee => self.ingredients.add_coffee(grams),
                Ingredient::Milk => self.ingredients.add_milk(grams),
                Ingredient::MilkFoam => self.ingredients.add_milk_foam(grams),
                Ingredient::Chocolate => self.ingredients.add_chocolate(grams),
            }
        }

        if extras.sugar > 0 {
            self.ingredients.add_sugar(extras.sugar);
        }
        if extras.cream > 0 {
            self.ingredients.add_cream(extras.cream);
        }
    }

    /// Same as [`prepare`](Self::prepare) with the drink and cup given by name.
    pub fn prepare_named(&mut self, drink: &str, size: &str) -> Result<()> {
        let drink: DrinkType = drink.parse()?;
        let size: CupSize = size.parse()?;
        self.prepare(drink, size);
        Ok(())
    }
}
