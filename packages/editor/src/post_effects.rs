//! # Post-Effect System
//!
//! Every effective mutation triggers follow-up work in the embedding
//! application:
//! - the canvas re-renders
//! - the inline editor re-renders when the touched widget is selected
//! - the new composition is emitted for persistence
//!
//! Post-effects are:
//! - **Deterministic**: Same mutation always produces same effects
//! - **Deduplicated**: One run yields each effect at most once
//! - **Silent on no-ops**: A mutation that changed nothing triggers nothing

use crate::mutations::Applied;
use crate::Composition;
use pagesmith_model::{WidgetId, WidgetInstance};

/// Follow-up work requested after a change
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-render the composition canvas
    RenderComposition,

    /// Re-render the inline editor of a selected widget
    RenderEditor(WidgetId),

    /// Outbound snapshot for persistence
    Emit(Vec<WidgetInstance>),

    /// Selection moved (not persisted)
    SelectionChanged(Option<WidgetId>),
}

/// State visible to post-effects, taken after the mutation was applied
#[derive(Debug, Clone, Copy)]
pub struct EffectContext<'a> {
    pub composition: &'a Composition,
    pub selected: Option<&'a WidgetId>,
}

/// Post-effect that can be triggered by a mutation
pub trait PostEffect: std::fmt::Debug {
    /// Analyze an applied mutation and request follow-up effects
    fn analyze(&self, applied: &Applied, ctx: &EffectContext) -> Vec<Effect>;
}

/// Receives effects from an edit session
pub trait EffectSink {
    fn deliver(&mut self, effect: &Effect);
}

impl<F: FnMut(&Effect)> EffectSink for F {
    fn deliver(&mut self, effect: &Effect) {
        self(effect)
    }
}

/// Re-render the canvas after any change
#[derive(Debug)]
pub struct RerenderComposition;

impl PostEffect for RerenderComposition {
    fn analyze(&self, _applied: &Applied, _ctx: &EffectContext) -> Vec<Effect> {
        vec![Effect::RenderComposition]
    }
}

/// Re-render the inline editor when the touched widget is the selected one
#[derive(Debug)]
pub struct RerenderSelectedEditor;

impl PostEffect for RerenderSelectedEditor {
    fn analyze(&self, applied: &Applied, ctx: &EffectContext) -> Vec<Effect> {
        match (applied.target(), ctx.selected) {
            (Some(target), Some(selected)) if target == selected => {
                vec![Effect::RenderEditor(selected.clone())]
            }
            _ => vec![],
        }
    }
}

/// Emit the outbound records
#[derive(Debug)]
pub struct EmitSnapshot;

impl PostEffect for EmitSnapshot {
    fn analyze(&self, _applied: &Applied, ctx: &EffectContext) -> Vec<Effect> {
        vec![Effect::Emit(ctx.composition.to_records())]
    }
}

/// Post-effect engine that applies all registered effects
#[derive(Debug)]
pub struct PostEffectEngine {
    effects: Vec<Box<dyn PostEffect>>,
}

impl PostEffectEngine {
    /// Create engine with default effects
    pub fn new() -> Self {
        Self {
            effects: vec![
                Box::new(RerenderComposition),
                Box::new(RerenderSelectedEditor),
                Box::new(EmitSnapshot),
            ],
        }
    }

    /// Create an engine with no effects
    pub fn empty() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Register a custom effect
    pub fn add_effect(&mut self, effect: Box<dyn PostEffect>) {
        self.effects.push(effect);
    }

    /// Collect effects for a group of applied mutations, without duplicates
    pub fn run(&self, applied: &[Applied], ctx: &EffectContext) -> Vec<Effect> {
        let mut out: Vec<Effect> = Vec::new();
        for change in applied {
            for effect in &self.effects {
                for e in effect.analyze(change, ctx) {
                    if !out.contains(&e) {
                        out.push(e);
                    }
                }
            }
        }
        out
    }
}

impl Default for PostEffectEngine {
    fn default() -> Self {
        Self::new()
    }
}
