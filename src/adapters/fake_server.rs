use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::ports::WeatherServer;

/// Responses collected from the real server for 31.08.2018 to 02.09.2018.
pub const RECORDED_RESPONSES: [(&str, &str); 12] = [
    ("31.08.2018;03:00", "20;181;5.1"),
    ("31.08.2018;09:00", "23;204;4.9"),
    ("31.08.2018;15:00", "33;193;4.3"),
    ("31.08.2018;21:00", "26;179;4.5"),
    ("01.09.2018;03:00", "19;176;4.2"),
    ("01.09.2018;09:00", "22;131;4.1"),
    ("01.09.2018;15:00", "31;109;4.0"),
    ("01.09.2018;21:00", "24;127;4.1"),
    ("02.09.2018;03:00", "21;158;3.8"),
    ("02.09.2018;09:00", "25;201;3.5"),
    ("02.09.2018;15:00", "34;258;3.7"),
    ("02.09.2018;21:00", "27;299;4.0"),
];

/// Weather server answering from a fixed request/response table.
///
/// Unknown requests get an empty answer, like the real server does for
/// invalid requests. Every request is kept so callers can check what was
/// asked.
#[derive(Debug, Default)]
pub struct FakeWeatherServer {
    responses: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FakeWeatherServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recorded_history() -> Self {
        let mut server = Self::new();
        for (request, response) in RECORDED_RESPONSES {
            server.insert(request, response);
        }
        server
    }

    pub fn insert(&mut self, request: impl Into<String>, response: impl Into<String>) {
        self.responses.insert(request.into(), response.into());
    }

    pub fn extend<K, V>(&mut self, responses: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (request, response) in responses {
            self.insert(request, response);
        }
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl WeatherServer for FakeWeatherServer {
    fn get_weather(&self, request: &str) -> String {
        self.requests.borrow_mut().push(request.to_string());
        match self.responses.get(request) {
            Some(response) => response.clone(),
            None => {
                tracing::debug!("No recorded response for {}", request);
                String::new()
            }
        }
    }
}
