use aws_lambda_events::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use sns_client::{PublishRequest, TopicPublisher};

use crate::{
    config::Config,
    model::{self, HandlerResponse},
};


/// Forwards the upload described by the first record of the s3 event to the configured sns topic.
/// Publish failures are returned to the runtime unchanged so its retry policy applies.
#[tracing::instrument(skip_all)]
pub async fn handler<P: TopicPublisher>(
    publisher: &P,
    config: &Config,
    event: LambdaEvent<S3Event>,
) -> Result<HandlerResponse, Error> {
    let record_count = event.payload.records.len();
    tracing::trace!(record_count, "processing upload event");

    if record_count > 1 {
        tracing::warn!(
            discarded = record_count - 1,
            "upload event carries multiple records, only the first is forwarded"
        );
    }

    let object = model::first_object(&event.payload).inspect_err(|e| {
        tracing::error!(error=?e, "malformed upload event");
    })?;

    let request = PublishRequest::new(
        config.sns_topic_arn.as_deref(),
        object.notification_message(),
    );

    match publisher.publish(request).await {
        Ok(message_id) => {
            tracing::info!(
                bucket=%object.bucket,
                key=%object.key,
                message_id=?message_id,
                "Notification sent successfully"
            );
            Ok(HandlerResponse::success())
        }
        Err(e) => {
            tracing::error!(
                error=?e,
                bucket=%object.bucket,
                key=%object.key,
                "Error sending notification"
            );
            Err(e.into())
        }
    }
}
