use std::env;

pub enum Environment {
    Development,
    Production,
}

/// Decides the running environment from the ENV variable.
/// Anything other than "production" falls back to development.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development";
    #[cfg(not(debug_assertions))]
    let default_env = "production";

    match env::var("ENV") {
        Err(_) => default_env.to_string(),
        Ok(v) => v,
    }
    .parse()
    .unwrap_or(Environment::Development)
}

impl std::str::FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Self::Production),
            _ => Ok(Self::Development),
        }
    }
}
