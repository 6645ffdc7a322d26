use crate::ids::TransactionId;
use crate::models::TransactionRecord;

use std::collections::HashMap;

/// Lookup of canonical records by application or transaction id
pub trait TransactionLookup {
    fn find(&self, id: &TransactionId) -> Option<&TransactionRecord>;
}

/// In-memory records, kept in arrival order and indexed by id
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<TransactionRecord>,
    lookup_map: HashMap<TransactionId, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record and returns its index. A record with a known id replaces the old one
    /// in place, keeping its original position.
    pub fn insert(&mut self, record: TransactionRecord) -> usize {
        if let Some(&index) = self.lookup_map.get(&record.id) {
            log::debug!("Replacing record {} at index {index}", record.id);
            self.records[index] = record;
            return index;
        }

        let index = self.records.len();

        self.lookup_map.insert(record.id, index);
        self.records.push(record);

        index
    }

    /// Ids in arrival order
    pub fn ids(&self) -> Vec<TransactionId> {
        self.records.iter().map(|record| record.id).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransactionLookup for RecordStore {
    fn find(&self, id: &TransactionId) -> Option<&TransactionRecord> {
        self.lookup_map.get(id).map(|&index| &self.records[index])
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::PartyId;
    use crate::models::PostType;

    use super::*;

    const SOME_TRANSACTION_ID: TransactionId = TransactionId(123);
    const OTHER_TRANSACTION_ID: TransactionId = TransactionId(321);

    fn build_record(id: TransactionId, client_name: &str) -> TransactionRecord {
        TransactionRecord {
            id,
            post_type: PostType::Client,
            client_id: PartyId::Number(1),
            client_name: client_name.to_string(),
            freelancer_id: PartyId::Number(2),
            freelancer_name: "Bob".to_string(),
            user_role: None,
        }
    }

    #[test]
    fn insert() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());

        let record1 = build_record(SOME_TRANSACTION_ID, "Alice");
        let record2 = build_record(OTHER_TRANSACTION_ID, "Alice");

        assert_eq!(store.insert(record1.clone()), 0);
        assert_eq!(store.insert(record2.clone()), 1);

        assert_eq!(store.records, vec![record1, record2]);
        assert_eq!(
            store.lookup_map,
            vec![(SOME_TRANSACTION_ID, 0), (OTHER_TRANSACTION_ID, 1)]
                .into_iter()
                .collect()
        );
    }

    #[test]
    fn insert_replaces_known_id() {
        let mut store = RecordStore::new();

        store.insert(build_record(SOME_TRANSACTION_ID, "Alice"));
        store.insert(build_record(OTHER_TRANSACTION_ID, "Alice"));

        let replacement = build_record(SOME_TRANSACTION_ID, "Alicia");
        assert_eq!(store.insert(replacement.clone()), 0);

        assert_eq!(store.len(), 2);
        assert_eq!(store.find(&SOME_TRANSACTION_ID), Some(&replacement));
        assert_eq!(store.ids(), vec![SOME_TRANSACTION_ID, OTHER_TRANSACTION_ID]);
    }

    #[test]
    fn find() {
        let mut store = RecordStore::new();

        assert!(store.find(&SOME_TRANSACTION_ID).is_none());

        let record = build_record(SOME_TRANSACTION_ID, "Alice");
        store.insert(record.clone());

        assert_eq!(store.find(&SOME_TRANSACTION_ID), Some(&record));
        assert!(store.find(&OTHER_TRANSACTION_ID).is_none());
    }
}
