//! Where an evaluation gets values that are not part of the expression.
//!
//! The same evaluator runs at compile time against [`Constants`], which knows
//! nothing, and at render time against a [`FeatureScope`].

use crate::error::ExprError;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub type Resolved<T> = Result<T, ExprError>;

/// Supplier of per-feature and per-render values.
///
/// Every method defaults to [`ExprError::Unresolved`].
pub trait ValueSource {
    /// Value of a feature property. `Ok(None)` when the feature lacks it.
    fn property(&self, name: &str) -> Resolved<Option<Value>> {
        Err(ExprError::Unresolved(format!("property \"{}\"", name)))
    }

    fn feature_id(&self) -> Resolved<Value> {
        Err(ExprError::Unresolved("feature id".to_string()))
    }

    fn geometry_type(&self) -> Resolved<Value> {
        Err(ExprError::Unresolved("geometry type".to_string()))
    }

    fn properties(&self) -> Resolved<Value> {
        Err(ExprError::Unresolved("feature properties".to_string()))
    }

    /// Render environment variable, e.g. the scale denominator.
    fn env(&self, name: &str) -> Resolved<Value> {
        Err(ExprError::Unresolved(format!("environment \"{}\"", name)))
    }
}

/// The compile-time source: nothing is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constants;

impl ValueSource for Constants {}

/// A rendered feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    pub id: Option<Value>,
    pub geometry_type: Option<String>,
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_geometry_type(mut self, geometry_type: impl Into<String>) -> Self {
        self.geometry_type = Some(geometry_type.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// Values shared by every feature of one render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    env: HashMap<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.env.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.env.get(name)
    }

    pub fn scope<'a>(&'a self, feature: &'a Feature) -> FeatureScope<'a> {
        FeatureScope {
            feature,
            render: self,
        }
    }
}

/// One feature evaluated inside one render pass.
#[derive(Debug, Clone, Copy)]
pub struct FeatureScope<'a> {
    pub feature: &'a Feature,
    pub render: &'a RenderContext,
}

impl ValueSource for FeatureScope<'_> {
    fn property(&self, name: &str) -> Resolved<Option<Value>> {
        Ok(self.feature.properties.get(name).cloned())
    }

    fn feature_id(&self) -> Resolved<Value> {
        Ok(self.feature.id.clone().unwrap_or(Value::Null))
    }

    fn geometry_type(&self) -> Resolved<Value> {
        Ok(self
            .feature
            .geometry_type
            .clone()
            .map(Value::String)
            .unwrap_or(Value::Null))
    }

    fn properties(&self) -> Resolved<Value> {
        Ok(Value::Object(self.feature.properties.clone()))
    }

    fn env(&self, name: &str) -> Resolved<Value> {
        Ok(self.render.get(name).cloned().unwrap_or(Value::Null))
    }
}
