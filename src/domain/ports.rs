/// Source of raw weather records.
///
/// Requests look like `"31.08.2018;03:00"`, answers like `"20;181;5.1"`.
/// An empty answer means the server has nothing for that request.
pub trait WeatherServer {
    fn get_weather(&self, request: &str) -> String;
}

impl<S: WeatherServer + ?Sized> WeatherServer for &S {
    fn get_weather(&self, request: &str) -> String {
        (**self).get_weather(request)
    }
}

/// Automated dispenser driven by the coffee machine. Amounts are in grams.
pub trait SourceOfIngredients {
    fn set_cup_size(&mut self, gram: u32);
    fn add_water(&mut self, gram: u32, temperature: u32);
    fn add_sugar(&mut self, gram: u32);
    fn add_coffee(&mut self, gram: u32);
    fn add_milk(&mut self, gram: u32);
    fn add_milk_foam(&mut self, gram: u32);
    fn add_chocolate(&mut self, gram: u32);
    fn add_cream(&mut self, gram: u32);
}
