use crate::data::THAI_STOPWORDS;

/// Drops stopwords from `tokens`, keeping the order of what is left.
///
/// With an empty `custom` list only the built-in Thai set applies. Otherwise
/// `custom` is used on its own, or together with the built-in set when
/// `include_legacy` is set.
pub fn remove_stopwords<I, T>(tokens: I, custom: &[&str], include_legacy: bool) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let legacy = custom.is_empty() || include_legacy;
    tokens
        .into_iter()
        .filter(|t| {
            let t = t.as_ref();
            !((legacy && THAI_STOPWORDS.contains(t)) || custom.contains(&t))
        })
        .collect()
}
