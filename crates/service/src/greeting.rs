use configs::GreetingConfig;
use models::greeting::Greeting;

/// Holds the two configured greetings for the lifetime of the process.
/// Built once at startup; no further lifecycle.
#[derive(Clone, Debug)]
pub struct Greetings {
    default: Greeting,
    special: Greeting,
}

impl Greetings {
    pub fn from_config(cfg: &GreetingConfig) -> Self {
        Self {
            default: Greeting::new(cfg.default_msg.clone()),
            special: Greeting::new(cfg.special_msg.clone()),
        }
    }

    pub fn default_greeting(&self) -> &Greeting {
        &self.default
    }

    pub fn special_greeting(&self) -> &Greeting {
        &self.special
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_come_from_config() {
        let cfg = GreetingConfig {
            port: 9000,
            default_msg: "Hello world!".into(),
            special_msg: "Hello, special world!".into(),
        };
        let greetings = Greetings::from_config(&cfg);
        assert_eq!(greetings.default_greeting().message, "Hello world!");
        assert_eq!(greetings.special_greeting().message, "Hello, special world!");
    }

    #[test]
    fn absent_config_yields_empty_messages() {
        let greetings = Greetings::from_config(&GreetingConfig::default());
        assert!(greetings.default_greeting().message.is_empty());
        assert!(greetings.special_greeting().message.is_empty());
    }
}
