use std::fmt::Formatter;

#[derive(Debug)]
pub enum LoadError {
    IO(Box<std::io::Error>),
    InvalidJson(Box<serde_json::Error>),
    InvalidCode(String),
    DuplicateCode(String)
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            LoadError::IO(inner) => {
                format!("IO: {}", inner)
            },
            LoadError::InvalidJson(inner) => {
                format!("Invalid data file: {}", inner)
            },
            LoadError::InvalidCode(code) => {
                format!("Invalid key: {:?}", code)
            },
            LoadError::DuplicateCode(code) => {
                format!("Key defined more than once: {}", code)
            }
        };
        write!(f, "Load error: {}", msg)
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(error: std::io::Error) -> Self {
        LoadError::IO(Box::new(error))
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        LoadError::InvalidJson(Box::new(error))
    }
}
