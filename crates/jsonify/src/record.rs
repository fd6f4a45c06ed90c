//! Structured records and their attribute providers.
//!
//! A [`Record`] is an opaque structured instance: a type identifier plus a
//! way to enumerate named attributes. Attribute access comes in two shapes:
//! declared fields with optional getter methods, or a single catch-all
//! accessor dispatched by name. The encoder only ever talks to the
//! [`AttributeProvider`] capability, never to a concrete shape.

use std::any;
use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Zero-argument getter method attached to a record.
pub type Getter = Rc<dyn Fn() -> Value>;

/// Catch-all accessor resolving an attribute name to its value.
pub type Accessor = Rc<dyn Fn(&str) -> Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Bit-set of visibilities accepted during attribute extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityFilter(u8);

impl VisibilityFilter {
    pub const PUBLIC: Self = Self(0b001);
    pub const PROTECTED: Self = Self(0b010);
    pub const PRIVATE: Self = Self(0b100);
    pub const ANY: Self = Self(0b111);

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn allows(self, visibility: Visibility) -> bool {
        let bit = match visibility {
            Visibility::Public => Self::PUBLIC.0,
            Visibility::Protected => Self::PROTECTED.0,
            Visibility::Private => Self::PRIVATE.0,
        };
        self.0 & bit != 0
    }
}

/// A declared field: name, declared visibility, current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub visibility: Visibility,
    pub value: Value,
}

#[derive(Clone)]
pub enum AttributeProvider {
    /// Declared fields in declaration order, plus named zero-argument
    /// methods that may serve as getters.
    DeclaredGetters {
        fields: Vec<Field>,
        methods: Vec<(String, Getter)>,
    },
    /// Known attribute names resolved through one uniform accessor.
    NameDispatched { names: Vec<String>, accessor: Accessor },
}

impl fmt::Debug for AttributeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeProvider::DeclaredGetters { fields, methods } => f
                .debug_struct("DeclaredGetters")
                .field("fields", fields)
                .field(
                    "methods",
                    &methods.iter().map(|(name, _)| name).collect::<Vec<_>>(),
                )
                .finish(),
            AttributeProvider::NameDispatched { names, .. } => f
                .debug_struct("NameDispatched")
                .field("names", names)
                .finish_non_exhaustive(),
        }
    }
}

impl PartialEq for AttributeProvider {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                AttributeProvider::DeclaredGetters { fields: a, methods: ma },
                AttributeProvider::DeclaredGetters { fields: b, methods: mb },
            ) => {
                a == b
                    && ma.len() == mb.len()
                    && ma
                        .iter()
                        .zip(mb)
                        .all(|((na, ga), (nb, gb))| na == nb && Rc::ptr_eq(ga, gb))
            }
            (
                AttributeProvider::NameDispatched { names: a, accessor: fa },
                AttributeProvider::NameDispatched { names: b, accessor: fb },
            ) => a == b && Rc::ptr_eq(fa, fb),
            _ => false,
        }
    }
}

/// An opaque structured instance: type identifier + attribute provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    provider: AttributeProvider,
}

impl Record {
    /// A record with declared fields and no methods (yet), under an
    /// arbitrary type identifier.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            provider: AttributeProvider::DeclaredGetters {
                fields: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Like [`Record::new`] but derives the identifier from a Rust type via
    /// [`std::any::type_name`], yielding a stable fully-qualified name.
    pub fn typed<T: ?Sized>() -> Self {
        Self::new(any::type_name::<T>())
    }

    /// A record whose attributes resolve through a catch-all accessor.
    pub fn name_dispatched(
        type_name: impl Into<String>,
        names: Vec<String>,
        accessor: impl Fn(&str) -> Value + 'static,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            provider: AttributeProvider::NameDispatched {
                names,
                accessor: Rc::new(accessor),
            },
        }
    }

    /// Declares a field. Has no effect on a name-dispatched record.
    pub fn field(
        mut self,
        visibility: Visibility,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        if let AttributeProvider::DeclaredGetters { fields, .. } = &mut self.provider {
            fields.push(Field {
                name: name.into(),
                visibility,
                value: value.into(),
            });
        }
        self
    }

    /// Attaches a named zero-argument method. Has no effect on a
    /// name-dispatched record.
    pub fn method(mut self, name: impl Into<String>, f: impl Fn() -> Value + 'static) -> Self {
        if let AttributeProvider::DeclaredGetters { methods, .. } = &mut self.provider {
            methods.push((name.into(), Rc::new(f)));
        }
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn provider(&self) -> &AttributeProvider {
        &self.provider
    }

    /// Reads one attribute by name: the declared field value, or the
    /// accessor result for a known name. Getter methods are not consulted
    /// here; they only apply during extraction.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        match &self.provider {
            AttributeProvider::DeclaredGetters { fields, .. } => fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| field.value.clone()),
            AttributeProvider::NameDispatched { names, accessor } => names
                .iter()
                .any(|n| n == name)
                .then(|| accessor(name)),
        }
    }
}
