use super::repo::DeleteResult;
use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use futures::stream::StreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{FindOptions, IndexOptions},
    Collection, Cursor, IndexModel,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

pub const DUPLICATE_KEY_CODE: i32 = 11000;

pub trait MongoDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
    fn from_domain(entity: &E) -> Self;
    fn get_id_filter(&self) -> Document;
}

fn get_id_filter(oid: &ObjectId) -> Document {
    doc! {
        "_id": oid
    }
}

pub fn entity_to_persistence<E, D: MongoDocument<E>>(entity: &E) -> Result<Document> {
    let raw = D::from_domain(entity);
    Ok(bson::to_document(&raw)?)
}

fn persistence_to_entity<E, D: MongoDocument<E>>(doc: Document) -> Result<E> {
    let raw: D = bson::from_document(doc)?;
    Ok(raw.to_domain())
}

pub async fn create_unique_index(collection: &Collection<Document>, keys: Document) -> Result<()> {
    let index = IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().unique(true).build())
        .build();
    collection.create_index(index, None).await?;
    Ok(())
}

/// Whether a single document write was rejected by a unique index
pub fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE
    )
}

pub async fn insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let doc = entity_to_persistence::<E, D>(entity)?;
    collection.insert_one(doc, None).await?;
    Ok(())
}

pub async fn bulk_insert<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entities: &[E],
) -> Result<()> {
    if entities.is_empty() {
        return Ok(());
    }
    let docs = entities
        .iter()
        .map(|e| entity_to_persistence::<E, D>(e))
        .collect::<Result<Vec<_>>>()?;
    collection.insert_many(docs, None).await?;
    Ok(())
}

pub async fn save<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    entity: &E,
) -> Result<()> {
    let raw = D::from_domain(entity);
    let filter = raw.get_id_filter();
    let doc = bson::to_document(&raw)?;
    collection.replace_one(filter, doc, None).await?;
    Ok(())
}

pub async fn find<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Result<Option<E>> {
    let filter = get_id_filter(id);
    find_one_by::<E, D>(collection, filter).await
}

pub async fn find_one_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Option<E>> {
    collection
        .find_one(filter, None)
        .await?
        .map(persistence_to_entity::<E, D>)
        .transpose()
}

pub async fn find_many_by<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    filter: Document,
    options: Option<FindOptions>,
) -> Result<Vec<E>> {
    let cursor = collection.find(filter, options).await?;
    consume_cursor::<E, D>(cursor).await
}

pub async fn delete<E, D: MongoDocument<E>>(
    collection: &Collection<Document>,
    id: &ObjectId,
) -> Result<Option<E>> {
    let filter = get_id_filter(id);
    collection
        .find_one_and_delete(filter, None)
        .await?
        .map(persistence_to_entity::<E, D>)
        .transpose()
}

pub async fn delete_many_by(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<DeleteResult> {
    let res = collection.delete_many(filter, None).await?;
    Ok(DeleteResult {
        deleted_count: res.deleted_count,
    })
}

async fn consume_cursor<E, D: MongoDocument<E>>(
    mut cursor: Cursor<Document>,
) -> Result<Vec<E>> {
    let mut documents = vec![];
    while let Some(result) = cursor.next().await {
        let document = persistence_to_entity::<E, D>(result?).map_err(|e| {
            error!("Unable to read stored document: {:?}", e);
            e
        })?;
        documents.push(document);
    }

    Ok(documents)
}

/// Dates are stored as unix timestamps in millis
pub fn from_millis(ts: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ts)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
