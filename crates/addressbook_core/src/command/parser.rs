/// Splits `line` on whitespace into a lower-cased command word and its
/// arguments. Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some((command, args))
}
