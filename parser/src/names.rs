//! Player names come in two forms. The literal form is what the client
//! prints; the parse-safe form has no spaces or periods, so a name survives
//! whitespace splitting as a single word.

pub fn to_parse_safe(name: &str) -> String {
    name.replace(' ', "+").replace('.', "*")
}

pub fn to_literal(name: &str) -> String {
    name.replace('+', " ").replace('*', ".")
}
