use uuid::Uuid;

use crate::errors::AppError;

pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<String, AppError>;
}

/// Random variant-4 UUIDs in hyphenated lowercase hex.
///
/// `uuid` panics if the OS entropy source is unavailable, which takes the
/// process down; nothing can be created safely without ids anyway.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> Result<String, AppError> {
        Ok(Uuid::new_v4().hyphenated().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_canonical_v4() {
        let id = UuidV4Generator.generate().unwrap();
        assert_eq!(id.len(), 36);

        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = UuidV4Generator.generate().unwrap();
        let b = UuidV4Generator.generate().unwrap();
        assert_ne!(a, b);
    }
}
