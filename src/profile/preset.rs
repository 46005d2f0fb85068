use crate::{
    preprocessor::Placeholders,
    process::{DynamicProcess, Process},
    profile::{DynProfileBuilder, Profile},
    stage::{
        dup_spaces::RemoveDupSpaces, email::NormalizeEmail, emoji::NormalizeEmoji,
        filename::NormalizeFilename, haha::NormalizeHaha, insert_spaces::InsertSpaces,
        link::NormalizeLink, lower_case::LowerCase, mention::NormalizeMention,
        number::NormalizeNumber, phone::NormalizePhone, remove_others_char::RemoveOthersChar,
        remove_tag::RemoveTag, replace_pairs::PairTable, unescape_html::UnescapeHtml,
    },
};

pub const THAI_SOCIAL: &str = "thai_social";

/// The classifier-input pipeline, with the given placeholder tokens.
///
/// Order matters: mentions and emails are resolved before links so an
/// `@name` or `user@host.com` is never read as a domain, and the pair table
/// runs after every entity that needs punctuation to be recognised.
pub fn thai_social_builder(placeholders: &Placeholders) -> DynProfileBuilder {
    Profile::plugin_builder(THAI_SOCIAL)
        .add_stage(LowerCase)
        .add_stage(UnescapeHtml)
        .add_stage(RemoveTag)
        .add_stage(NormalizeMention::with_placeholder(placeholders.mention.clone()))
        .add_stage(NormalizeEmail::with_placeholder(placeholders.email.clone()))
        .add_stage(NormalizeLink::with_placeholder(placeholders.link.clone()))
        .add_stage(NormalizeFilename::with_placeholder(placeholders.filename.clone()))
        .add_stage(NormalizePhone::with_placeholder(placeholders.phone.clone()))
        .add_stage(PairTable::NORMALIZE_TEXT)
        .add_stage(NormalizeHaha::with_placeholder(placeholders.haha.clone()))
        .add_stage(NormalizeNumber::with_placeholder(placeholders.number.clone()))
        .add_stage(NormalizeEmoji)
        .add_stage(RemoveOthersChar)
        .add_stage(InsertSpaces)
        .add_stage(RemoveDupSpaces)
}

pub fn thai_social(placeholders: &Placeholders) -> Profile<DynamicProcess> {
    thai_social_builder(placeholders).build()
}

/// Same sequence with the default placeholders, fully monomorphised.
pub fn thai_social_static() -> Profile<impl Process> {
    Profile::builder(THAI_SOCIAL)
        .add_stage(LowerCase)
        .add_stage(UnescapeHtml)
        .add_stage(RemoveTag)
        .add_stage(NormalizeMention::default())
        .add_stage(NormalizeEmail::default())
        .add_stage(NormalizeLink::default())
        .add_stage(NormalizeFilename::default())
        .add_stage(NormalizePhone::default())
        .add_stage(PairTable::NORMALIZE_TEXT)
        .add_stage(NormalizeHaha::default())
        .add_stage(NormalizeNumber::default())
        .add_stage(NormalizeEmoji)
        .add_stage(RemoveOthersChar)
        .add_stage(InsertSpaces)
        .add_stage(RemoveDupSpaces)
        .build()
}
