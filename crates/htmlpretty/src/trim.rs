//! Strip whitespace immediately inside configured elements.

use regex::Regex;

/// Remove whitespace directly after the opening tag and directly before the
/// matching closing tag of each element named in `trim_list`, across all
/// occurrences. Whitespace elsewhere in the element is left alone. Names
/// absent from the input are no-ops; the function never fails.
pub fn trimify<S: AsRef<str>>(html: &str, trim_list: &[S]) -> String {
    let mut output = html.to_string();
    for name in trim_list {
        let name = regex::escape(name.as_ref());
        let Ok(leading) = Regex::new(&format!(r"(<{name}(?:\s[^>]*)?>)\s+")) else {
            continue;
        };
        let Ok(trailing) = Regex::new(&format!(r"\s+(</{name}>)")) else {
            continue;
        };
        output = leading.replace_all(&output, "$1").into_owned();
        output = trailing.replace_all(&output, "$1").into_owned();
    }
    output
}
