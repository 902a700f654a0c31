use std::collections::BTreeMap;
use std::fmt::Display;

/// `[a, b, c]`
pub fn render_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// `{k1=v1, k2=v2}`，鍵依遞增順序
pub fn render_map<K: Display, V: Display>(map: &BTreeMap<K, V>) -> String {
    let parts: Vec<String> = map.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{{{}}}", parts.join(", "))
}
