/// Turns a table name into a model class name: split on anything that is not
/// an ASCII letter or digit, upper-case the first letter of each word, join.
pub fn to_type_name(table_name: &str) -> String {
    table_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word: &&str| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<String>>()
        .join("")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// A class name is unusable when it is empty or does not start with a letter.
pub fn is_malformed_type_name(type_name: &str) -> bool {
    !type_name
        .chars()
        .next()
        .map_or(false, |c: char| c.is_ascii_alphabetic())
}

fn is_plain_symbol(name: &str) -> bool {
    let mut chars = name.chars();

    let starts_well = chars
        .next()
        .map_or(false, |c: char| c.is_ascii_alphabetic() || c == '_');

    starts_well && chars.all(|c: char| c.is_ascii_alphanumeric() || c == '_')
}

/// Ruby symbol literal, quoted when the name is not a bare identifier.
pub fn to_symbol(name: &str) -> String {
    if is_plain_symbol(name) {
        format!(":{}", name)
    } else {
        format!(":{}", to_string_literal(name))
    }
}

pub fn to_symbol_list(names: &[String]) -> String {
    let symbols: Vec<String> = names.iter().map(|name: &String| to_symbol(name)).collect();

    format!("[{}]", symbols.join(", "))
}

pub fn to_string_literal(value: &str) -> String {
    let escaped: String = value
        .chars()
        .map(|c: char| match c {
            '"' => "\\\"".to_string(),
            '\\' => "\\\\".to_string(),
            '#' => "\\#".to_string(),
            '\n' => "\\n".to_string(),
            c => c.to_string(),
        })
        .collect();

    format!("\"{}\"", escaped)
}

/// Single-quoted Ruby string; only `\\` and `'` need escaping there.
pub fn to_single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
