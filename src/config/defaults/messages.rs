pub fn huh() -> String {
    "I don't understand that.".to_string()
}

pub fn error() -> String {
    "There was an error with your command.".to_string()
}

pub fn no_description() -> String {
    "No description available.".to_string()
}

pub fn no_help() -> String {
    "No help available.".to_string()
}
