pub mod preset;
use crate::{
    context::Context,
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::Stage,
};
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Normalization failed at profile `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A named, ordered stage sequence.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn run<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, ProfileError> {
        self.pipeline
            .process(text, ctx)
            .map_err(|e| ProfileError::Failed(self.name, e.to_string()))
    }
}
impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder::new(name)
    }
}

pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    current: P,
}

impl ProfileBuilder<EmptyProcess> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            current: EmptyProcess,
        }
    }
}

impl<P: Process> ProfileBuilder<P> {
    pub fn add_stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.current,
        }
    }
}
impl Profile<DynamicProcess> {
    pub fn plugin_builder(name: &'static str) -> DynProfileBuilder {
        DynProfileBuilder {
            name,
            pipeline: DynamicProcess::new(),
        }
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pipeline.stage_names()
    }
}

pub struct DynProfileBuilder {
    name: &'static str,
    pipeline: DynamicProcess,
}

impl DynProfileBuilder {
    pub fn add_stage<T: Stage + 'static>(self, stage: T) -> Self {
        Self {
            pipeline: self.pipeline.push(stage),
            ..self
        }
    }

    pub fn add_shared_stage(self, stage: Arc<dyn Stage>) -> Self {
        Self {
            pipeline: self.pipeline.push_arc(stage),
            ..self
        }
    }

    pub fn build(self) -> Profile<DynamicProcess> {
        Profile {
            name: self.name,
            pipeline: self.pipeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{StageError, lower_case::LowerCase};

    struct AlwaysFails;

    impl Stage for AlwaysFails {
        fn name(&self) -> &'static str {
            "always_fails"
        }

        fn needs_apply(&self, _text: &str, _ctx: &Context) -> Result<bool, StageError> {
            Ok(true)
        }

        fn apply<'a>(
            &self,
            _text: Cow<'a, str>,
            _ctx: &Context,
        ) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Failed("always_fails", "boom".into()))
        }
    }

    #[test]
    fn stage_error_carries_profile_name() {
        let profile = Profile::plugin_builder("broken")
            .add_stage(LowerCase)
            .add_stage(AlwaysFails)
            .build();
        let err = profile
            .run(Cow::Borrowed("x"), &Context::default())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("broken"), "{msg}");
        assert!(msg.contains("always_fails"), "{msg}");
    }

    #[test]
    fn static_builder_runs_in_order() {
        let profile = Profile::builder("lower").add_stage(LowerCase).build();
        assert_eq!(profile.name(), "lower");
        let out = profile
            .run(Cow::Borrowed("ABC"), &Context::default())
            .unwrap();
        assert_eq!(out, "abc");
    }
}
