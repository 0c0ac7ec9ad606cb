//! Thin wrapper around [aws_sdk_sns::Client] and the [TopicPublisher] port that
//! handlers depend on instead of the concrete client.

use aws_sdk_sns::{error::SdkError, operation::publish::PublishError};

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// A single message destined for an SNS topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    /// The arn of the destination topic. `None` is forwarded to SNS as an unset `TopicArn`
    pub topic_arn: Option<String>,
    /// The message body
    pub message: String,
}

impl PublishRequest {
    pub fn new(topic_arn: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.map(str::to_string),
            message: message.into(),
        }
    }
}

/// Trait for publishing messages to a pub/sub topic.
/// Implementors must be safe to share across concurrent invocations.
pub trait TopicPublisher: Send + Sync + 'static {
    /// the error type that can occur
    type Err: std::error::Error + Send + Sync + 'static;

    /// Publishes the message, returning the message id assigned by the service if any
    fn publish(
        &self,
        request: PublishRequest,
    ) -> impl Future<Output = Result<Option<String>, Self::Err>> + Send;
}

#[derive(Clone, Debug)]
pub struct SNS {
    inner: aws_sdk_sns::Client,
}

impl SNS {
    pub fn new(inner: aws_sdk_sns::Client) -> Self {
        Self { inner }
    }
}

impl TopicPublisher for SNS {
    type Err = SdkError<PublishError>;

    #[tracing::instrument(skip(self, request), fields(topic_arn = ?request.topic_arn))]
    async fn publish(&self, request: PublishRequest) -> Result<Option<String>, Self::Err> {
        let output = self
            .inner
            .publish()
            .set_topic_arn(request.topic_arn)
            .message(request.message)
            .send()
            .await?;

        Ok(output.message_id().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_keeps_missing_topic_unset() {
        let request = PublishRequest::new(None, "hello");
        assert_eq!(request.topic_arn, None);
        assert_eq!(request.message, "hello");
    }

    #[test]
    fn request_carries_the_configured_topic() {
        let request = PublishRequest::new(
            Some("arn:aws:sns:us-east-1:123456789012:uploads"),
            String::from("New file uploaded: a.png to bucket b"),
        );
        assert_eq!(
            request,
            PublishRequest {
                topic_arn: Some("arn:aws:sns:us-east-1:123456789012:uploads".to_string()),
                message: "New file uploaded: a.png to bucket b".to_string(),
            }
        );
    }
}
