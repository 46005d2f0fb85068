use crate::{
    context::Context,
    data::{
        REPLACE_AT_MENTION, REPLACE_EMAIL, REPLACE_FILENAME, REPLACE_HAHA, REPLACE_LINK,
        REPLACE_NUMBER, REPLACE_PHONE,
    },
    patterns::Patterns,
    process::DynamicProcess,
    profile::{Profile, ProfileError, preset::thai_social_builder},
    stage::Stage,
};
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Tokens substituted for each entity class.
///
/// The defaults are the space-padded `WS*` constants from [`crate::data`].
#[derive(Clone, Debug)]
pub struct Placeholders {
    pub link: Cow<'static, str>,
    pub email: Cow<'static, str>,
    pub mention: Cow<'static, str>,
    pub haha: Cow<'static, str>,
    pub number: Cow<'static, str>,
    pub phone: Cow<'static, str>,
    pub filename: Cow<'static, str>,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            link: Cow::Borrowed(REPLACE_LINK),
            email: Cow::Borrowed(REPLACE_EMAIL),
            mention: Cow::Borrowed(REPLACE_AT_MENTION),
            haha: Cow::Borrowed(REPLACE_HAHA),
            number: Cow::Borrowed(REPLACE_NUMBER),
            phone: Cow::Borrowed(REPLACE_PHONE),
            filename: Cow::Borrowed(REPLACE_FILENAME),
        }
    }
}

/// The configured `preprocess` pipeline.
///
/// Cheap to share between threads; every call only reads.
pub struct Preprocessor {
    ctx: Context,
    profile: Profile<DynamicProcess>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Preprocessor {
    pub fn builder() -> PreprocessorBuilder {
        PreprocessorBuilder::default()
    }

    pub fn preprocess<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, PreprocessError> {
        if text.is_empty() {
            return Ok(Cow::Borrowed(text));
        }
        let out = self.profile.run(Cow::Borrowed(text), &self.ctx)?;
        debug!(
            profile = self.profile.name(),
            input_len = text.len(),
            output_len = out.len(),
            "preprocessed"
        );
        Ok(out)
    }

    /// Stage names in execution order, extra stages last.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profile.stage_names()
    }
}

#[derive(Default)]
pub struct PreprocessorBuilder {
    placeholders: Placeholders,
    patterns: Option<Arc<Patterns>>,
    stages: Vec<Arc<dyn Stage>>,
}

impl PreprocessorBuilder {
    pub fn placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Use a separately compiled pattern set instead of the global one.
    pub fn patterns(mut self, patterns: Arc<Patterns>) -> Self {
        self.patterns = Some(patterns);
        self
    }

    /// Append a stage after the built-in sequence.
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Preprocessor {
        let ctx = Context::new(self.patterns.unwrap_or_else(Patterns::global));
        let profile = self
            .stages
            .into_iter()
            .fold(thai_social_builder(&self.placeholders), |b, s| {
                b.add_shared_stage(s)
            })
            .build();
        Preprocessor { ctx, profile }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{emoji::RemoveEmoji, hashtag::RemoveHashtags};

    #[test]
    fn empty_input_short_circuits() {
        let p = Preprocessor::default();
        let out = p.preprocess("").unwrap();
        assert!(matches!(out, Cow::Borrowed("")));
    }

    #[test]
    fn custom_placeholders() {
        let p = Preprocessor::builder()
            .placeholders(Placeholders {
                link: " <url> ".into(),
                mention: " <user> ".into(),
                ..Placeholders::default()
            })
            .build();
        // `<` and `>` are not on the allow-list, so only the words survive.
        let out = p.preprocess("ดู https://example.com นะ @somchai").unwrap();
        assert_eq!(out, "ดู url นะ user");
    }

    #[test]
    fn extra_stages_run_last() {
        let p = Preprocessor::builder()
            .add_stage(RemoveEmoji)
            .add_stage(RemoveHashtags)
            .build();
        let names: Vec<_> = p.stage_names().collect();
        assert_eq!(names.len(), 17);
        assert_eq!(&names[15..], ["remove_emoji", "remove_hashtags"]);
        // Runs after the whitespace pass, so the gaps it leaves stay.
        assert_eq!(p.preprocess("ฝนตก🌧️🌧️").unwrap(), "ฝนตก  ");
    }

    #[test]
    fn own_patterns_give_same_result() {
        let shared = Preprocessor::default();
        let own = Preprocessor::builder()
            .patterns(Arc::new(Patterns::new().unwrap()))
            .build();
        let input = "Call 081-234-5678 or mail me@example.com 5555";
        assert_eq!(
            shared.preprocess(input).unwrap(),
            own.preprocess(input).unwrap()
        );
    }
}
