use std::fmt;

use formkit::FormRecord;
use formkit::validation::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Username,
    Password,
    Repeat,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Username => "username",
            Key::Password => "password",
            Key::Repeat => "repeat",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Login {
    pub username: String,
    pub password: String,
    pub repeat: String,
}

impl FormRecord for Login {
    type Key = Key;

    fn keys() -> &'static [Key] {
        &[Key::Username, Key::Password, Key::Repeat]
    }

    fn get(&self, key: Key) -> &str {
        match key {
            Key::Username => &self.username,
            Key::Password => &self.password,
            Key::Repeat => &self.repeat,
        }
    }

    fn set(&mut self, key: Key, value: String) {
        match key {
            Key::Username => self.username = value,
            Key::Password => self.password = value,
            Key::Repeat => self.repeat = value,
        }
    }

    fn dependents(key: Key) -> &'static [Key] {
        match key {
            Key::Password => &[Key::Repeat],
            _ => &[],
        }
    }
}

pub fn login(username: &str, password: &str, repeat: &str) -> Login {
    Login {
        username: username.into(),
        password: password.into(),
        repeat: repeat.into(),
    }
}

pub fn schema() -> Schema<Login> {
    Schema::new()
        .field(Key::Username)
        .required("username required")
        .min_length(3, "username too short")
        .field(Key::Password)
        .min_length(4, "password too short")
        .any_char(|c| c.is_ascii_digit(), "password needs a digit")
        .field(Key::Repeat)
        .required("repeat required")
        .refine(Key::Repeat, |l: &Login| l.password == l.repeat, "passwords differ")
}
