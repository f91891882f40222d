/// Split a whitespace-aligned table line by anchoring columns from the right.
///
/// The last `trailing` tokens are the fixed-width columns; every token before
/// them is rejoined with single spaces as the leading, variable-width field.
/// Returns None when the line has no token left over for the leading field.
pub fn split_right_anchored(line: &str, trailing: usize) -> Option<(String, Vec<&str>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() <= trailing {
        return None;
    }
    let split = tokens.len() - trailing;
    let leading = tokens[..split].join(" ");
    Some((leading, tokens[split..].to_vec()))
}

pub fn token_count(line: &str) -> usize {
    line.split_whitespace().count()
}
