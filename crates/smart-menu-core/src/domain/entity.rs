//! Domain Layer - Core Entity Trait
//!
//! Every backend resource the client keeps in a list carries a string id
//! assigned by the server.

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Replace the entity with the same id, or append it when absent.
///
/// Pages use this to mirror a successful create/update in local state
/// without refetching the whole list.
pub fn upsert<E: Entity>(list: &mut Vec<E>, entity: E) {
    match list.iter_mut().find(|e| e.id() == entity.id()) {
        Some(slot) => *slot = entity,
        None => list.push(entity),
    }
}

/// Remove the entity with the given id. Returns whether anything was removed.
pub fn remove_by_id<E: Entity>(list: &mut Vec<E>, id: &str) -> bool {
    let before = list.len();
    list.retain(|e| e.id() != id);
    list.len() != before
}

/// Find an entity by id
pub fn find_by_id<'a, E: Entity>(list: &'a [E], id: &str) -> Option<&'a E> {
    list.iter().find(|e| e.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Dummy {
        id: String,
        value: u32,
    }

    impl Entity for Dummy {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn dummy(id: &str, value: u32) -> Dummy {
        Dummy { id: id.to_string(), value }
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut list = vec![dummy("a", 1), dummy("b", 2)];
        upsert(&mut list, dummy("a", 10));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].value, 10);
    }

    #[test]
    fn test_upsert_appends_new() {
        let mut list = vec![dummy("a", 1)];
        upsert(&mut list, dummy("c", 3));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, "c");
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = vec![dummy("a", 1), dummy("b", 2)];
        assert!(remove_by_id(&mut list, "a"));
        assert!(!remove_by_id(&mut list, "zzz"));
        assert_eq!(list, vec![dummy("b", 2)]);
        assert!(find_by_id(&list, "b").is_some());
    }
}
