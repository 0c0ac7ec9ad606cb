use aws_lambda_events::s3::S3Event;
use serde::Serialize;
use thiserror::Error;

/// Raised when the incoming event does not carry the fields we forward
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedEvent {
    #[error("upload event contains no records")]
    NoRecords,
    #[error("upload record is missing s3.bucket.name")]
    MissingBucketName,
    #[error("upload record is missing s3.object.key")]
    MissingObjectKey,
}

/// The bucket and key of a newly created object
#[derive(Debug, PartialEq, Eq)]
pub struct UploadedObject<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
}

/// Returns the object described by the first record of the event. Any later records are ignored.
pub fn first_object(event: &S3Event) -> Result<UploadedObject<'_>, MalformedEvent> {
    let record = event.records.first().ok_or(MalformedEvent::NoRecords)?;

    let bucket = record
        .s3
        .bucket
        .name
        .as_deref()
        .ok_or(MalformedEvent::MissingBucketName)?;
    let key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or(MalformedEvent::MissingObjectKey)?;

    Ok(UploadedObject { bucket, key })
}

impl UploadedObject<'_> {
    /// The human readable notification sent to subscribers
    pub fn notification_message(&self) -> String {
        format!("New file uploaded: {} to bucket {}", self.key, self.bucket)
    }
}

/// The value returned to the lambda runtime on success
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: "Success".to_string(),
        }
    }
}
