//! Ordered, fixed collection of named parameters.

use crate::parameter::Parameter;

/// Ordered collection of [`Parameter`]s with unique names.
///
/// The set is built once; afterwards only values change. Looking up a name
/// that is not in the set is a programming error and panics, use
/// [`try_get`](Self::try_get) for names coming from outside input.
#[derive(Debug, Default)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
}

impl ParameterSet {
    /// # Panics
    ///
    /// Panics if two parameters share a name.
    pub fn new(parameters: Vec<Parameter>) -> Self {
        for (index, parameter) in parameters.iter().enumerate() {
            assert!(
                !parameters[..index]
                    .iter()
                    .any(|other| other.name() == parameter.name()),
                "duplicate parameter name: {}",
                parameter.name()
            );
        }
        tracing::debug!("Built parameter set with {} parameters", parameters.len());
        Self { parameters }
    }

    /// # Panics
    ///
    /// Panics if `name` is not in the set.
    pub fn get(&self, name: &str) -> &Parameter {
        match self.try_get(name) {
            Some(parameter) => parameter,
            None => panic!("unknown parameter: {}", name),
        }
    }

    /// # Panics
    ///
    /// Panics if `name` is not in the set.
    pub fn get_mut(&mut self, name: &str) -> &mut Parameter {
        match self.try_get_mut(name) {
            Some(parameter) => parameter,
            None => panic!("unknown parameter: {}", name),
        }
    }

    pub fn try_get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    pub fn try_get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.parameters.iter_mut().find(|p| p.name() == name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.try_get(name).is_some()
    }

    /// Plain value of a named parameter.
    #[inline]
    pub fn plain(&self, name: &str) -> f64 {
        self.get(name).plain()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(Parameter::name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Restore every parameter to its default.
    pub fn reset_all(&mut self) {
        self.parameters.iter_mut().for_each(Parameter::reset);
    }
}
