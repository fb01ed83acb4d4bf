use super::repo::DeleteResult;
use std::sync::Mutex;
use volunteer_hub_domain::{Entity, ID};

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn insert_many<T: Clone>(vals: &[T], collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.extend_from_slice(vals);
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    for item in collection.iter_mut() {
        if item.id() == val.id() {
            *item = val.clone();
        }
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}

pub fn delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> DeleteResult {
    DeleteResult {
        deleted_count: find_and_delete_by(collection, compare).len() as u64,
    }
}

pub fn find_and_delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> Vec<T> {
    let mut collection = collection.lock().unwrap();
    let mut deleted_items = Vec::new();
    let mut kept_items = Vec::with_capacity(collection.len());

    for item in collection.drain(..) {
        if compare(&item) {
            deleted_items.push(item);
        } else {
            kept_items.push(item);
        }
    }
    *collection = kept_items;

    deleted_items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: ID,
        value: usize,
    }

    impl Entity for Item {
        fn id(&self) -> &ID {
            &self.id
        }
    }

    fn items(count: usize) -> Mutex<Vec<Item>> {
        Mutex::new(
            (0..count)
                .map(|value| Item {
                    id: ID::new(),
                    value,
                })
                .collect(),
        )
    }

    #[test]
    fn find_and_delete_by_keeps_order_of_remaining() {
        let collection = items(6);
        let deleted = find_and_delete_by(&collection, |item| item.value % 2 == 0);
        assert_eq!(
            deleted.iter().map(|i| i.value).collect::<Vec<_>>(),
            vec![0, 2, 4]
        );
        let remaining = find_by(&collection, |_| true);
        assert_eq!(
            remaining.iter().map(|i| i.value).collect::<Vec<_>>(),
            vec![1, 3, 5]
        );
    }

    #[test]
    fn save_replaces_by_id() {
        let collection = items(3);
        let mut item = find_by(&collection, |item| item.value == 1).remove(0);
        item.value = 10;
        save(&item, &collection);
        assert_eq!(find(&item.id, &collection), Some(item));
        assert_eq!(find_by(&collection, |_| true).len(), 3);
    }

    #[test]
    fn delete_by_counts() {
        let collection = items(4);
        assert_eq!(delete_by(&collection, |item| item.value > 1).deleted_count, 2);
        assert_eq!(delete_by(&collection, |item| item.value > 1).deleted_count, 0);
        let first = find_by(&collection, |_| true).remove(0);
        assert_eq!(delete(&first.id, &collection), Some(first.clone()));
        assert_eq!(delete(&first.id, &collection), None);
    }
}
