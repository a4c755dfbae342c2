//! Process-wide registry associating component types with tag names.
//!
//! ## Usage
//!
//! Register a component type once at startup. A type owns at most one tag
//! and a tag belongs to at most one type:
//!
//! ```
//! use dual_range_ui::{ComponentRegistry, RegistrationOutcome, RegistryError};
//!
//! struct Gauge;
//!
//! let registry = ComponentRegistry::new();
//! assert_eq!(registry.register::<Gauge>("gauge-meter"), Ok(RegistrationOutcome::Registered));
//! assert_eq!(registry.register::<Gauge>("gauge-meter"), Ok(RegistrationOutcome::Unchanged));
//! assert!(matches!(
//!     registry.register::<Gauge>("other-gauge"),
//!     Err(RegistryError::TypeAlreadyRegistered { .. })
//! ));
//! assert_eq!(registry.tag_of::<Gauge>().as_deref(), Some("gauge-meter"));
//! ```

use std::{any::TypeId, sync::OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Names the host reserves; they can never be used as component tags.
const RESERVED_TAGS: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

static GLOBAL_REGISTRY: OnceLock<ComponentRegistry> = OnceLock::new();

/// Errors returned by [`ComponentRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The tag is not a valid component tag name.
    #[error("invalid component tag {tag:?}: {reason}")]
    InvalidTag {
        /// The rejected tag.
        tag: String,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// The component type is already registered under a different tag.
    #[error("component {component} is already registered as {existing:?}, cannot register as {requested:?}")]
    TypeAlreadyRegistered {
        /// Type name of the component.
        component: &'static str,
        /// The tag it is registered under.
        existing: String,
        /// The tag that was requested.
        requested: String,
    },
    /// Another component type owns the tag.
    #[error("tag {tag:?} is already taken by {owner}")]
    TagTaken {
        /// The contested tag.
        tag: String,
        /// Type name of the owning component.
        owner: &'static str,
    },
}

/// Result of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The type was newly associated with the tag.
    Registered,
    /// The type was already registered under the same tag; nothing changed.
    Unchanged,
}

#[derive(Default)]
struct RegistryTable {
    by_tag: FxHashMap<String, (TypeId, &'static str)>,
    by_type: FxHashMap<TypeId, String>,
}

/// Tag registry. Use [`ComponentRegistry::global`] for the process-wide
/// instance.
#[derive(Default)]
pub struct ComponentRegistry {
    table: RwLock<RegistryTable>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static ComponentRegistry {
        GLOBAL_REGISTRY.get_or_init(ComponentRegistry::new)
    }

    /// Associates component type `T` with `tag`.
    ///
    /// Registering the same pair again is a no-op. Registering `T` under a
    /// second tag, or a tag owned by another type, is rejected and leaves the
    /// registry unchanged.
    pub fn register<T: 'static>(&self, tag: &str) -> Result<RegistrationOutcome, RegistryError> {
        validate_tag(tag)?;
        let type_id = TypeId::of::<T>();
        let component = std::any::type_name::<T>();

        let mut table = self.table.write();
        if let Some(existing) = table.by_type.get(&type_id) {
            if existing == tag {
                return Ok(RegistrationOutcome::Unchanged);
            }
            return Err(RegistryError::TypeAlreadyRegistered {
                component,
                existing: existing.clone(),
                requested: tag.to_string(),
            });
        }
        if let Some((_, owner)) = table.by_tag.get(tag) {
            return Err(RegistryError::TagTaken {
                tag: tag.to_string(),
                owner: *owner,
            });
        }

        table.by_tag.insert(tag.to_string(), (type_id, component));
        table.by_type.insert(type_id, tag.to_string());
        debug!(tag, component, "registered component tag");
        Ok(RegistrationOutcome::Registered)
    }

    /// The tag `T` is registered under, if any.
    pub fn tag_of<T: 'static>(&self) -> Option<String> {
        self.table.read().by_type.get(&TypeId::of::<T>()).cloned()
    }

    /// Whether `tag` is owned by any component.
    pub fn is_registered(&self, tag: &str) -> bool {
        self.table.read().by_tag.contains_key(tag)
    }

    /// Type name of the component owning `tag`.
    pub fn component_for(&self, tag: &str) -> Option<&'static str> {
        self.table.read().by_tag.get(tag).map(|(_, name)| *name)
    }
}

fn validate_tag(tag: &str) -> Result<(), RegistryError> {
    let invalid = |reason| RegistryError::InvalidTag {
        tag: tag.to_string(),
        reason,
    };
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return Err(invalid("must start with a lowercase ASCII letter")),
    }
    if !tag.contains('-') {
        return Err(invalid("must contain a hyphen"));
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
    {
        return Err(invalid("may only contain a-z, 0-9, '-', '.' and '_'"));
    }
    if RESERVED_TAGS.contains(&tag) {
        return Err(invalid("name is reserved"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct First;
    struct Second;

    #[test]
    fn test_tag_validation() {
        let registry = ComponentRegistry::new();
        for bad in ["", "slider", "Double-range", "1-range", "double range", "font-face"] {
            assert!(
                matches!(
                    registry.register::<First>(bad),
                    Err(RegistryError::InvalidTag { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            registry.register::<First>("x-range.v2_beta"),
            Ok(RegistrationOutcome::Registered)
        );
    }

    #[test]
    fn test_tag_owned_by_another_type_is_rejected() {
        let registry = ComponentRegistry::new();
        registry
            .register::<First>("double-range-slider")
            .expect("first registration succeeds");
        let err = registry
            .register::<Second>("double-range-slider")
            .expect_err("tag is taken");
        assert!(matches!(err, RegistryError::TagTaken { .. }));
        assert_eq!(registry.tag_of::<Second>(), None);
        assert!(registry.is_registered("double-range-slider"));
    }

    #[test]
    fn test_rejected_second_tag_leaves_registry_unchanged() {
        let registry = ComponentRegistry::new();
        registry
            .register::<First>("range-one")
            .expect("first registration succeeds");
        assert!(registry.register::<First>("range-two").is_err());
        assert!(!registry.is_registered("range-two"));
        assert_eq!(registry.tag_of::<First>().as_deref(), Some("range-one"));
        assert!(registry.component_for("range-one").is_some());
    }
}
