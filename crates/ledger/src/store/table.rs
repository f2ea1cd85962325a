//! Insertion-ordered, id-indexed in-memory table.

use std::collections::{BTreeMap, HashMap};

use moneypools_core::{DomainError, DomainResult, Entity};

/// Rows keep the sequence number they were inserted with, so iteration is
/// always in insertion order and removals leave the remaining order intact.
#[derive(Debug)]
pub(crate) struct Table<E: Entity> {
    rows: BTreeMap<u64, E>,
    index: HashMap<E::Id, u64>,
    next_seq: u64,
}

impl<E: Entity> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<E: Entity> Table<E> {
    /// Appends a row and returns its sequence number. Ids are unique; a second
    /// row with a stored id is refused and the table is left unchanged.
    pub(crate) fn insert(&mut self, row: E) -> DomainResult<u64> {
        if self.index.contains_key(row.id()) {
            return Err(DomainError::storage(format!(
                "{} {} already stored",
                E::KIND,
                row.id()
            )));
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(*row.id(), seq);
        self.rows.insert(seq, row);
        Ok(seq)
    }

    pub(crate) fn contains(&self, id: &E::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Row for `id`, or `NotFound` naming the entity kind.
    pub(crate) fn require(&self, id: &E::Id) -> DomainResult<&E> {
        self.index
            .get(id)
            .and_then(|seq| self.rows.get(seq))
            .ok_or_else(|| DomainError::not_found(E::KIND, id))
    }

    pub(crate) fn require_mut(&mut self, id: &E::Id) -> DomainResult<&mut E> {
        self.index
            .get(id)
            .and_then(|seq| self.rows.get_mut(seq))
            .ok_or_else(|| DomainError::not_found(E::KIND, id))
    }

    pub(crate) fn remove(&mut self, id: &E::Id) -> DomainResult<E> {
        self.index
            .remove(id)
            .and_then(|seq| self.rows.remove(&seq))
            .ok_or_else(|| DomainError::not_found(E::KIND, id))
    }

    /// Rows with their sequence numbers, oldest insertion first.
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (u64, &E)> {
        self.rows.iter().map(|(seq, row)| (*seq, row))
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneypools_core::PoolId;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: PoolId,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = PoolId;
        const KIND: &'static str = "row";

        fn id(&self) -> &PoolId {
            &self.id
        }
    }

    fn row(label: &'static str) -> Row {
        Row {
            id: PoolId::new(),
            label,
        }
    }

    #[test]
    fn keeps_insertion_order_across_removals() {
        let mut table = Table::default();
        let (a, b, c) = (row("a"), row("b"), row("c"));
        table.insert(a.clone()).unwrap();
        table.insert(b.clone()).unwrap();
        table.insert(c.clone()).unwrap();

        assert_eq!(table.remove(&b.id).unwrap(), b);
        let labels: Vec<_> = table.iter().map(|(_, r)| r.label).collect();
        assert_eq!(labels, vec!["a", "c"]);
        assert_eq!(table.len(), 2);
        assert!(!table.contains(&b.id));
    }

    #[test]
    fn missing_rows_are_not_found() {
        let mut table: Table<Row> = Table::default();
        let id = PoolId::new();
        let err = table.require(&id).unwrap_err();
        assert_eq!(err, DomainError::not_found("row", id));
        assert!(table.remove(&id).unwrap_err().is_not_found());
        assert!(table.require_mut(&id).is_err());
    }

    #[test]
    fn duplicate_id_is_refused() {
        let mut table = Table::default();
        let a = row("a");
        table.insert(a.clone()).unwrap();
        table.insert(row("b")).unwrap();

        let err = table.insert(Row { label: "a2", ..a.clone() }).unwrap_err();
        assert_eq!(err, DomainError::storage(format!("row {} already stored", a.id)));
        let labels: Vec<_> = table.iter().map(|(_, r)| r.label).collect();
        assert_eq!(labels, vec!["a", "b"]);
        assert_eq!(table.require(&a.id).unwrap().label, "a");
    }
}
