use graphsearch_core::NodeId;

/// Groups digits in threes: `1234567` becomes `"1,234,567"`.
pub fn format_number(number: usize) -> String {
    let digits = number.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

pub fn format_kilobytes(bytes: usize) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

pub fn format_path(path: &[NodeId], separator: &str) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// `{1, 3, 4}`, or `{}` when nothing is pending.
pub fn format_node_set(nodes: impl IntoIterator<Item = NodeId>) -> String {
    let inner = nodes
        .into_iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", inner)
}
