// Adapters layer: concrete collaborators behind the domain ports.

pub mod fake_server;
pub mod ingredients;

pub use fake_server::FakeWeatherServer;
pub use ingredients::{IngredientCall, RecordingIngredients};
