//! Display-name registry for leaf types
//!
//! Maps type identities (primitives, user classes, class templates, and
//! specific template instantiations) to the strings used when they are
//! rendered. Populated once through `&mut self` during setup; synthesis only
//! ever borrows the registry immutably.

use rustc_hash::FxHashMap;

use crate::error::DeclError;
use crate::ty::{ClassId, Primitive, TemplateId, Type};

/// Display names for every leaf identity synthesis can reach
#[derive(Debug, Clone, Default)]
pub struct Registry {
    primitives: FxHashMap<Primitive, String>,
    classes: FxHashMap<ClassId, String>,
    templates: FxHashMap<TemplateId, String>,
    aliases: FxHashMap<(TemplateId, Vec<Type>), String>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry::default()
    }

    /// Create a registry pre-populated with the canonical spellings of all
    /// C++ primitives
    pub fn with_primitives() -> Self {
        let mut registry = Registry::default();
        for primitive in Primitive::ALL {
            registry
                .primitives
                .insert(primitive, primitive.spelling().to_string());
        }
        registry
    }

    /// Record the display string for a primitive
    ///
    /// Re-registering the identical name is a no-op; a different name for the
    /// same primitive is a conflict.
    pub fn register_primitive(
        &mut self,
        primitive: Primitive,
        name: impl Into<String>,
    ) -> Result<(), DeclError> {
        let name = name.into();
        if let Some(existing) = self.primitives.get(&primitive) {
            if *existing != name {
                return Err(DeclError::ConflictingRegistration {
                    key: format!("{:?}", primitive),
                    existing: existing.clone(),
                    requested: name,
                });
            }
            return Ok(());
        }
        self.primitives.insert(primitive, name);
        Ok(())
    }

    /// Record the display string for a user class or struct
    pub fn register_class(
        &mut self,
        class: ClassId,
        name: impl Into<String>,
    ) -> Result<(), DeclError> {
        let name = name.into();
        if let Some(existing) = self.classes.get(&class) {
            if *existing != name {
                return Err(DeclError::ConflictingRegistration {
                    key: class.to_string(),
                    existing: existing.clone(),
                    requested: name,
                });
            }
            return Ok(());
        }
        self.classes.insert(class, name);
        Ok(())
    }

    /// Record the display string for a class template
    pub fn register_template(
        &mut self,
        template: TemplateId,
        name: impl Into<String>,
    ) -> Result<(), DeclError> {
        let name = name.into();
        if let Some(existing) = self.templates.get(&template) {
            if *existing != name {
                return Err(DeclError::ConflictingRegistration {
                    key: template.to_string(),
                    existing: existing.clone(),
                    requested: name,
                });
            }
            return Ok(());
        }
        self.templates.insert(template, name);
        Ok(())
    }

    /// Record an alias name for one specific template instantiation
    ///
    /// When present, the alias takes precedence over the generic
    /// `Name<Args...>` rendering of that exact argument list.
    pub fn register_alias(
        &mut self,
        template: TemplateId,
        args: Vec<Type>,
        name: impl Into<String>,
    ) -> Result<(), DeclError> {
        let name = name.into();
        let key = (template, args.iter().map(Type::normalized).collect::<Vec<_>>());
        if let Some(existing) = self.aliases.get(&key) {
            if *existing != name {
                return Err(DeclError::ConflictingRegistration {
                    key: format!("{} instantiation", template),
                    existing: existing.clone(),
                    requested: name,
                });
            }
            return Ok(());
        }
        self.aliases.insert(key, name);
        Ok(())
    }

    /// Look up the display string of a primitive
    pub fn primitive_name(&self, primitive: Primitive) -> Result<&str, DeclError> {
        self.primitives
            .get(&primitive)
            .map(String::as_str)
            .ok_or(DeclError::UnregisteredPrimitive(primitive))
    }

    /// Look up the display string of a class
    pub fn class_name(&self, class: ClassId) -> Result<&str, DeclError> {
        self.classes
            .get(&class)
            .map(String::as_str)
            .ok_or(DeclError::UnregisteredClass(class))
    }

    /// Look up the display string of a template
    pub fn template_name(&self, template: TemplateId) -> Result<&str, DeclError> {
        self.templates
            .get(&template)
            .map(String::as_str)
            .ok_or(DeclError::UnregisteredTemplate(template))
    }

    /// Look up an instantiation alias, if one was registered
    ///
    /// Arguments are compared in normalized form.
    pub fn alias_name(&self, template: TemplateId, args: &[Type]) -> Option<&str> {
        let key = (template, args.iter().map(Type::normalized).collect::<Vec<_>>());
        self.aliases.get(&key).map(String::as_str)
    }
}
